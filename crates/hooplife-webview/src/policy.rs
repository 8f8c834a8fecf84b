//! Embedded-vs-external navigation classification.
//!
//! Every navigation attempt is classified by one pure rule, regardless of
//! which interception hook delivered it: URLs on the hosted platform's
//! domains and all general `http(s)` traffic stay inside the embedded view;
//! everything else (`tel:`, `mailto:`, deep links, garbage) is handed to the
//! operating system's default handler.

use serde::{Deserialize, Serialize};
use url::Url;

// =============================================================================
// EMBEDDED DOMAIN TABLE
// =============================================================================

/// Domain substrings identifying the hosted application and its platform.
///
/// A URL matching any of these never leaves the embedded view, even when a
/// later rule would otherwise exclude it.
pub const EMBEDDED_DOMAINS: &[&str] = &["streamlit.app", "streamlit.io"];

// =============================================================================
// NAVIGATION REQUEST
// =============================================================================

/// What initiated a navigation attempt, when the runtime can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationTrigger {
    UserGesture,
    Programmatic,
    Unknown,
}

/// A single navigation attempt, created by the WebView runtime and consumed
/// synchronously by the policy. Never persisted.
#[derive(Debug, Clone)]
pub struct NavigationRequest {
    pub url: String,
    /// Carried for logging only; the decision rule depends on the URL alone.
    pub trigger: NavigationTrigger,
}

impl NavigationRequest {
    pub fn new(url: impl Into<String>, trigger: NavigationTrigger) -> Self {
        Self {
            url: url.into(),
            trigger,
        }
    }
}

// =============================================================================
// NAVIGATION POLICY
// =============================================================================

/// Decides, per navigation attempt, whether a URL loads in the embedded view
/// or is handed to the operating system.
#[derive(Debug, Clone)]
pub struct NavigationPolicy {
    embedded_domains: &'static [&'static str],
}

impl Default for NavigationPolicy {
    fn default() -> Self {
        Self::new(EMBEDDED_DOMAINS)
    }
}

impl NavigationPolicy {
    /// Create a policy over a fixed embedded-domain table.
    pub fn new(embedded_domains: &'static [&'static str]) -> Self {
        Self { embedded_domains }
    }

    /// True when `url` must be dispatched to the operating system's default
    /// handler; false keeps the navigation inside the embedded view.
    ///
    /// Evaluated in order:
    /// 1. Hosted-platform domain match — stay embedded.
    /// 2. `http`/`https` scheme — stay embedded.
    /// 3. Everything else, including unparsable input — hand off.
    pub fn should_handle_externally(&self, url: &str) -> bool {
        if self.is_embedded_domain(url) {
            return false;
        }
        match Url::parse(url) {
            Ok(parsed) => !matches!(parsed.scheme(), "http" | "https"),
            Err(_) => true,
        }
    }

    /// Structured-hook adapter. Must classify identically to the plain-string
    /// form, so it delegates to it.
    pub fn should_handle_externally_request(&self, request: &NavigationRequest) -> bool {
        self.should_handle_externally(&request.url)
    }

    /// Whether the URL belongs to the hosted application's known domains.
    pub fn is_embedded_domain(&self, url: &str) -> bool {
        let lower = url.to_ascii_lowercase();
        self.embedded_domains
            .iter()
            .any(|domain| lower.contains(domain))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // -- Hosted-platform URLs stay embedded --

    #[test]
    fn hosted_app_stays_embedded() {
        let policy = NavigationPolicy::default();
        assert!(!policy.should_handle_externally("https://hooplifenba.streamlit.app"));
        assert!(!policy.should_handle_externally("https://hooplifenba.streamlit.app/injuries"));
        assert!(!policy.should_handle_externally("https://docs.streamlit.io/library"));
    }

    #[test]
    fn hosted_app_ignores_scheme_casing_and_trailing_path() {
        let policy = NavigationPolicy::default();
        assert!(!policy.should_handle_externally("HTTPS://HOOPLIFENBA.STREAMLIT.APP/Page"));
        assert!(!policy.should_handle_externally("https://hooplifenba.streamlit.app/a/b/c?x=1#y"));
    }

    #[test]
    fn hosted_domain_wins_over_scheme_rule() {
        // Even a non-http scheme stays embedded when the platform domain
        // appears, so hand-off never occurs for the app's own traffic.
        let policy = NavigationPolicy::default();
        assert!(!policy.should_handle_externally("hooplife://streamlit.app/deep"));
    }

    // -- Generic web traffic stays embedded --

    #[test]
    fn generic_https_stays_embedded() {
        let policy = NavigationPolicy::default();
        assert!(!policy.should_handle_externally("https://github.com/streamlit/streamlit"));
        assert!(!policy.should_handle_externally("https://www.espn.com/nba/injuries"));
        assert!(!policy.should_handle_externally("http://example.com"));
    }

    #[test]
    fn generic_http_scheme_casing_is_normalized() {
        let policy = NavigationPolicy::default();
        assert!(!policy.should_handle_externally("HTTP://example.com"));
        assert!(!policy.should_handle_externally("HtTpS://example.com/page"));
    }

    // -- Custom schemes defer to the OS --

    #[test]
    fn tel_defers_to_os() {
        let policy = NavigationPolicy::default();
        assert!(policy.should_handle_externally("tel:+15555550123"));
    }

    #[test]
    fn mailto_defers_to_os() {
        let policy = NavigationPolicy::default();
        assert!(policy.should_handle_externally("mailto:a@b.com"));
    }

    #[test]
    fn deep_links_defer_to_os() {
        let policy = NavigationPolicy::default();
        assert!(policy.should_handle_externally("spotify:track:4uLU6hMCjMI75M1A2tKUQC"));
        assert!(policy.should_handle_externally("intent://scan/#Intent;scheme=zxing;end"));
    }

    // -- Malformed input defers to the OS --

    #[test]
    fn unparsable_url_defers_to_os() {
        let policy = NavigationPolicy::default();
        assert!(policy.should_handle_externally(""));
        assert!(policy.should_handle_externally("not a url"));
        assert!(policy.should_handle_externally("relative/path"));
    }

    // -- Both hooks classify identically --

    #[test]
    fn structured_and_string_hooks_agree() {
        let policy = NavigationPolicy::default();
        let urls = [
            "https://hooplifenba.streamlit.app/trades",
            "https://github.com/streamlit/streamlit",
            "tel:+15555550123",
            "mailto:a@b.com",
            "not a url",
            "HTTPS://docs.streamlit.io",
        ];
        for url in urls {
            for trigger in [
                NavigationTrigger::UserGesture,
                NavigationTrigger::Programmatic,
                NavigationTrigger::Unknown,
            ] {
                let request = NavigationRequest::new(url, trigger);
                assert_eq!(
                    policy.should_handle_externally_request(&request),
                    policy.should_handle_externally(url),
                    "hooks disagree on {url}"
                );
            }
        }
    }

    // -- Domain table --

    #[test]
    fn embedded_domain_table_is_canonical() {
        assert_eq!(EMBEDDED_DOMAINS, &["streamlit.app", "streamlit.io"]);
    }

    #[test]
    fn is_embedded_domain_is_case_insensitive() {
        let policy = NavigationPolicy::default();
        assert!(policy.is_embedded_domain("https://Hooplifenba.Streamlit.App"));
        assert!(!policy.is_embedded_domain("https://github.com"));
    }

    #[test]
    fn custom_domain_table() {
        static DOMAINS: &[&str] = &["example.test"];
        let policy = NavigationPolicy::new(DOMAINS);
        assert!(!policy.should_handle_externally("custom://example.test/page"));
        assert!(policy.should_handle_externally("custom://other.test/page"));
    }
}
