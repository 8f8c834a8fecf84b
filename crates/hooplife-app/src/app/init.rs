//! Window creation and web view setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use hooplife_webview::WebViewConfig;

use super::core::ShellApp;

impl ShellApp {
    /// Create the window and attach the embedded web view.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.as_str())
            .with_resizable(self.config.window.resizable)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let config = WebViewConfig {
            url: self.config.app.url.clone(),
            user_agent: Some(self.config.app.user_agent.clone()),
            ..Default::default()
        };

        let bounds = full_window_bounds(&window);
        match self.manager.create(window.as_ref(), bounds, config) {
            Ok(handle) => self.webview = Some(handle),
            Err(e) => {
                tracing::error!("Failed to create webview: {e}");
                return false;
            }
        }

        self.window = Some(window);
        tracing::info!("Window created and WebView attached");
        true
    }

    /// Keep the web view covering the whole window.
    pub(super) fn sync_webview_bounds(&self) {
        let window = match &self.window {
            Some(w) => w,
            None => return,
        };
        let webview = match &self.webview {
            Some(wv) => wv,
            None => return,
        };

        if let Err(e) = webview.set_bounds(full_window_bounds(window)) {
            tracing::warn!(error = %e, "Failed to update webview bounds");
        }
    }
}

/// Bounds covering the full inner surface of the window.
fn full_window_bounds(window: &Window) -> wry::Rect {
    let size = window.inner_size();
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(0.0, 0.0)),
        size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(size.width, size.height)),
    }
}
