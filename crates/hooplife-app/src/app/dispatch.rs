//! Shell event polling and dispatch.
//!
//! Drains the web view's event sink on each loop wake-up and routes every
//! event to its collaborator: page-load phases to the chrome suppressor,
//! handed-off URLs to the OS opener, popup redirects back into the view.

use std::time::{Duration, Instant};

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use hooplife_webview::ShellEvent;

use crate::handoff;

use super::core::ShellApp;

/// How often the event sink is drained while idle.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

impl ShellApp {
    /// Drain pending events and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_shell_events();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    /// Process pending web view events.
    fn poll_shell_events(&mut self) {
        for event in self.manager.drain_events() {
            match event {
                ShellEvent::PageLoad { state, url } => {
                    if let Some(webview) = &self.webview {
                        self.suppressor.on_page_load(state, &url, webview);
                    }
                }

                ShellEvent::NavigationHandedOff { url } => {
                    handoff::open_in_system(&url);
                }

                ShellEvent::LoadRequested { url } => {
                    if let Some(webview) = &mut self.webview {
                        if let Err(e) = webview.load_url(&url) {
                            tracing::warn!(url = %url, error = %e, "Failed to load popup target");
                        }
                    }
                }

                ShellEvent::TitleChanged { title } => {
                    if let Some(webview) = &mut self.webview {
                        webview.set_title(title.clone());
                    }
                    if !title.is_empty() {
                        if let Some(window) = &self.window {
                            window.set_title(&title);
                        }
                    }
                }
            }
        }
    }
}
