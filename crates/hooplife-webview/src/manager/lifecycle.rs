use std::sync::Arc;

use tracing::debug;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create the embedded WebView as a child of the given window.
    ///
    /// The `window` must implement `raw_window_handle::HasWindowHandle`.
    /// The WebView is positioned at `bounds` within the parent window; the
    /// shell keeps the bounds synced to the full window on resize.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_autoplay(config.autoplay)
            .with_focused(true);

        // User agent
        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        // Navigation handler — the structured interception hook
        builder = Self::attach_navigation_handler(
            builder,
            self.policy.clone(),
            Arc::clone(&self.events),
        );

        // New-window handler — the plain-string interception hook
        builder = Self::attach_new_window_handler(
            builder,
            self.policy.clone(),
            Arc::clone(&self.events),
        );

        // Page load handler
        builder = Self::attach_page_load_handler(builder, Arc::clone(&self.events));

        // Title change handler
        builder = Self::attach_title_handler(builder, Arc::clone(&self.events));

        // Initial content: the hosted application
        builder = builder.with_url(&config.url);

        // Build as child WebView
        let webview = builder.build_as_child(window)?;

        debug!(url = %config.url, "WebView created");

        Ok(WebViewHandle {
            webview,
            current_url: config.url,
            current_title: String::new(),
        })
    }
}
