//! WebView lifecycle management.
//!
//! `WebViewManager` builds the single full-window `wry::WebView` that hosts
//! the remote application, wires the navigation/lifecycle hooks to the
//! navigation policy, and owns the event sink the hooks push into.

use std::sync::{Arc, Mutex};

use crate::events::ShellEvent;
use crate::policy::NavigationPolicy;

mod handle;
mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use types::WebViewConfig;

/// Builds and tracks the embedded WebView.
pub struct WebViewManager {
    /// Event sink — events are pushed here for the main event loop to consume.
    pub(crate) events: Arc<Mutex<Vec<ShellEvent>>>,
    /// Policy consulted by every navigation-interception hook.
    pub(crate) policy: NavigationPolicy,
}

impl WebViewManager {
    /// Create a manager around a navigation policy.
    pub fn new(policy: NavigationPolicy) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            policy,
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<ShellEvent> {
        let mut events = self.events.lock().unwrap();
        std::mem::take(&mut *events)
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new(NavigationPolicy::default())
    }
}
