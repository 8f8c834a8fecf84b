//! Shell WebView event types.

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded (DOMContentLoaded + resources).
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by the embedded WebView for the shell loop to consume.
#[derive(Debug, Clone)]
pub enum ShellEvent {
    /// Page load state changed. Carries the URL of the loading document.
    PageLoad { state: PageLoadState, url: String },
    /// A navigation was classified as external and blocked in the view;
    /// the shell dispatches the URL to the operating system.
    NavigationHandedOff { url: String },
    /// A popup/new-window target was classified as embedded; the shell
    /// loads it in the single main view instead of opening a window.
    LoadRequested { url: String },
    /// Document title changed.
    TitleChanged { title: String },
}
