//! Embedded web view for the HoopLife shell.
//!
//! Wraps the `wry` crate to provide:
//! - A single managed full-window WebView hosting the remote application
//! - Navigation policy (keep a URL embedded vs. hand it to the OS)
//! - Chrome suppression (hide the hosted platform's browser-style UI)
//! - Event handling (page load, title change, navigation)

pub mod chrome;
pub mod events;
pub mod manager;
pub mod policy;

pub use chrome::{ChromeSuppressor, ScriptHost, CHROME_SELECTORS, PLATFORM_TOKEN, SUPPRESS_MARKER_ID};
pub use events::{PageLoadState, ShellEvent};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager};
pub use policy::{NavigationPolicy, NavigationRequest, NavigationTrigger, EMBEDDED_DOMAINS};
