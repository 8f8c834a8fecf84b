//! ShellApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use hooplife_config::ShellConfig;
use hooplife_webview::{ChromeSuppressor, NavigationPolicy, WebViewHandle, WebViewManager};

/// Top-level application state.
pub struct ShellApp {
    pub(super) config: ShellConfig,
    pub(super) manager: WebViewManager,
    pub(super) suppressor: ChromeSuppressor,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) webview: Option<WebViewHandle>,

    pub(super) last_poll: Instant,
}

impl ShellApp {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            config,
            manager: WebViewManager::new(NavigationPolicy::default()),
            suppressor: ChromeSuppressor::default(),
            window: None,
            webview: None,
            last_poll: Instant::now(),
        }
    }
}
