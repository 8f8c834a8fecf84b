/// Configuration for creating the embedded WebView.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// URL of the hosted application to load.
    pub url: String,
    /// Whether the WebView background should be transparent.
    pub transparent: bool,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Whether to enable clipboard access.
    pub clipboard: bool,
    /// Whether to enable autoplay for media.
    pub autoplay: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: "about:blank".to_string(),
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: Some("HoopLife/0.1".to_string()),
            clipboard: true,
            autoplay: true,
        }
    }
}

impl WebViewConfig {
    /// Create a config that loads a URL.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}
