use std::sync::{Arc, Mutex};

use tracing::debug;
use wry::WebViewBuilder;

use crate::events::{PageLoadState, ShellEvent};
use crate::policy::{NavigationPolicy, NavigationRequest, NavigationTrigger};

use super::WebViewManager;

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================
//
// The runtime delivers navigation attempts through two parallel hooks: the
// navigation handler (per-document navigations) and the new-window handler
// (popup/`target=_blank` targets, delivered as a plain URL string). Both
// route through the same `NavigationPolicy` so a URL classifies identically
// no matter which hook carried it.

impl WebViewManager {
    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        policy: NavigationPolicy,
        events: Arc<Mutex<Vec<ShellEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            let request = NavigationRequest::new(url.clone(), NavigationTrigger::Unknown);
            if policy.should_handle_externally_request(&request) {
                debug!(url = %url, trigger = ?request.trigger, "navigation handed off to OS");
                if let Ok(mut evts) = events.lock() {
                    evts.push(ShellEvent::NavigationHandedOff { url });
                }
                return false;
            }

            debug!(url = %url, trigger = ?request.trigger, "navigation kept embedded");
            true
        })
    }

    pub(super) fn attach_new_window_handler<'a>(
        builder: WebViewBuilder<'a>,
        policy: NavigationPolicy,
        events: Arc<Mutex<Vec<ShellEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_new_window_req_handler(move |url| {
            if policy.should_handle_externally(&url) {
                debug!(url = %url, "popup target handed off to OS");
                if let Ok(mut evts) = events.lock() {
                    evts.push(ShellEvent::NavigationHandedOff { url });
                }
            } else {
                // The shell owns a single view; embedded popup targets are
                // redirected into it instead of opening a window.
                debug!(url = %url, "popup target redirected into main view");
                if let Ok(mut evts) = events.lock() {
                    evts.push(ShellEvent::LoadRequested { url });
                }
            }
            false
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<ShellEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(ShellEvent::PageLoad { state, url });
            }
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<ShellEvent>>>,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(title = %title, "title changed");
            if let Ok(mut evts) = events.lock() {
                evts.push(ShellEvent::TitleChanged { title });
            }
        })
    }
}
