//! Chrome suppression for the hosted application's own UI.
//!
//! The hosted platform renders its own browser-style chrome (header,
//! toolbar, deploy button, footer badges). Once a loaded document is
//! identified as belonging to the platform, an idempotent style patch is
//! injected that hides those elements so the page reads as a native app.
//! The patch is applied on navigation start and re-applied on finish, in
//! case the application re-renders its chrome during client-side hydration.

use tracing::debug;

use hooplife_common::Result;

use crate::events::PageLoadState;

// =============================================================================
// SUPPRESSION TABLES
// =============================================================================

/// Substring identifying documents that belong to the hosted platform.
pub const PLATFORM_TOKEN: &str = "streamlit";

/// Reserved id of the injected style node. Its presence in the document is
/// the sentinel that makes injection idempotent; it dies with the document
/// on navigation, so a fresh document is always injection-eligible.
pub const SUPPRESS_MARKER_ID: &str = "hooplife-native-hide";

/// Selectors for the hosted platform's chrome elements. Reproduced verbatim;
/// the platform's test markers and class names are load-bearing.
pub const CHROME_SELECTORS: &[&str] = &[
    r#"[data-testid="stHeader"]"#,
    r#"[data-testid="stToolbar"]"#,
    r#"[data-testid="stDecoration"]"#,
    r#"[data-testid="stStatusWidget"]"#,
    r#"[data-testid="stBottom"]"#,
    r#"[data-testid="stFooter"]"#,
    r#"[data-testid="stMainMenu"]"#,
    r#"[data-testid="stRunningMan"]"#,
    r#"[data-testid="stAppRunningIndicator"]"#,
    r#"[data-testid="manage-app-button"]"#,
    "header",
    "footer",
    "#MainMenu",
    ".stDeployButton",
    ".stActionButton",
    ".stApp > header",
    r#"div[class*="viewerBadge"]"#,
    r#"a[href*="streamlit.io"]"#,
    r#"a[href*="github.com/streamlit"]"#,
];

/// Declarations applied to every suppressed selector.
const SUPPRESS_RULES: &str = "display: none !important; \
visibility: hidden !important; \
height: 0 !important; \
overflow: hidden !important; \
opacity: 0 !important;";

// =============================================================================
// SCRIPT HOST CAPABILITY
// =============================================================================

/// Capability to evaluate script against the current document.
///
/// The suppressor never owns the document graph; it is granted this narrow
/// capability so it stays testable with a fake that records invocations.
pub trait ScriptHost {
    fn evaluate_script(&self, js: &str) -> Result<()>;
}

// =============================================================================
// CHROME SUPPRESSOR
// =============================================================================

/// Hides the hosted platform's chrome in documents that belong to it.
#[derive(Debug, Clone)]
pub struct ChromeSuppressor {
    platform_token: &'static str,
    marker_id: &'static str,
    selectors: &'static [&'static str],
}

impl Default for ChromeSuppressor {
    fn default() -> Self {
        Self::new(PLATFORM_TOKEN, SUPPRESS_MARKER_ID, CHROME_SELECTORS)
    }
}

impl ChromeSuppressor {
    /// Create a suppressor over fixed platform-token / marker / selector tables.
    pub fn new(
        platform_token: &'static str,
        marker_id: &'static str,
        selectors: &'static [&'static str],
    ) -> Self {
        Self {
            platform_token,
            marker_id,
            selectors,
        }
    }

    /// React to a page-lifecycle phase.
    ///
    /// Injection runs on `Started` (as early as possible; the script defers
    /// the append until the document head exists) and again unconditionally
    /// on `Finished`, against re-renders that overwrote the first patch.
    /// Evaluation failure is absorbed; the next phase retries naturally.
    pub fn on_page_load(&self, state: PageLoadState, url: &str, host: &dyn ScriptHost) {
        if !url.contains(self.platform_token) {
            return;
        }

        debug!(?state, url = %url, "applying chrome suppression");
        if let Err(e) = host.evaluate_script(&self.suppression_script()) {
            debug!(?state, url = %url, error = %e, "chrome suppression script failed");
        }
    }

    /// The injected patch: checks the sentinel, then creates and appends a
    /// style node hiding every chrome selector. Appending is deferred via a
    /// one-shot `DOMContentLoaded` listener when the head does not exist yet.
    pub fn suppression_script(&self) -> String {
        let marker = self.marker_id;
        let selectors = self.selectors.join(",");
        format!(
            "(function() {{\
if (document.getElementById('{marker}')) return;\
var s = document.createElement('style');\
s.id = '{marker}';\
s.textContent = '{selectors} {{ {SUPPRESS_RULES} }}';\
if (document.head) {{ document.head.appendChild(s); }}\
else {{ document.addEventListener('DOMContentLoaded', function() {{ document.head.appendChild(s); }}); }}\
}})();"
        )
    }
}

// =============================================================================
// TESTS
// =============================================================================
