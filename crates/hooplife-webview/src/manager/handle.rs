use wry::WebView;

use hooplife_common::{Result, ShellError};

use crate::chrome::ScriptHost;

/// Handle to the embedded WebView instance. Provides methods to interact
/// with the underlying WebView (navigate, resize, focus) and grants the
/// script-evaluation capability the chrome suppressor needs.
pub struct WebViewHandle {
    /// The underlying wry WebView.
    pub(super) webview: WebView,
    /// Current URL (best-effort tracking).
    pub(super) current_url: String,
    /// Current document title.
    pub(super) current_title: String,
}

impl WebViewHandle {
    /// Get the current URL.
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Get the current title.
    pub fn current_title(&self) -> &str {
        &self.current_title
    }

    /// Navigate to a URL.
    pub fn load_url(&mut self, url: &str) -> std::result::Result<(), wry::Error> {
        self.current_url = url.to_string();
        self.webview.load_url(url)
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> std::result::Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    /// Focus the WebView.
    pub fn focus(&self) -> std::result::Result<(), wry::Error> {
        self.webview.focus()
    }

    /// Open devtools (if enabled).
    pub fn open_devtools(&self) {
        self.webview.open_devtools();
    }

    /// Update the tracked title.
    pub fn set_title(&mut self, title: String) {
        self.current_title = title;
    }

    /// Get a reference to the underlying wry WebView.
    pub fn inner(&self) -> &WebView {
        &self.webview
    }
}

impl ScriptHost for WebViewHandle {
    fn evaluate_script(&self, js: &str) -> Result<()> {
        self.webview
            .evaluate_script(js)
            .map_err(|e| ShellError::WebView(e.to_string()))
    }
}
