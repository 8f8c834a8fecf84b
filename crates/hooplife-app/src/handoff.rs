//! Hand-off of externally classified URLs to the operating system.
//!
//! The navigation policy blocks custom-scheme URLs (`tel:`, `mailto:`, deep
//! links) inside the embedded view; the shell dispatches them here to the
//! OS default handler for that scheme. Failures are logged, never fatal —
//! the acceptable fallback is simply that nothing opens.

use std::process::Command;

use tracing::{debug, warn};

/// Platform opener invocation for a URL.
fn opener(url: &str) -> (&'static str, Vec<String>) {
    #[cfg(target_os = "windows")]
    {
        // `start` treats its first quoted argument as a window title
        ("cmd", vec!["/C".into(), "start".into(), String::new(), url.into()])
    }

    #[cfg(target_os = "macos")]
    {
        ("open", vec![url.into()])
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        ("xdg-open", vec![url.into()])
    }
}

/// Dispatch a URL to the operating system's default handler.
pub fn open_in_system(url: &str) {
    let (program, args) = opener(url);
    debug!(url = %url, program, "dispatching URL to system handler");
    if let Err(e) = Command::new(program).args(&args).spawn() {
        warn!(url = %url, error = %e, "failed to dispatch URL to system handler");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opener_carries_the_url() {
        let (_, args) = opener("tel:+15555550123");
        assert_eq!(args.last().unwrap(), "tel:+15555550123");
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn windows_opener_uses_start() {
        let (program, args) = opener("mailto:a@b.com");
        assert_eq!(program, "cmd");
        assert!(args.contains(&"start".to_string()));
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    #[test]
    fn unix_opener_uses_xdg_open() {
        let (program, args) = opener("mailto:a@b.com");
        assert_eq!(program, "xdg-open");
        assert_eq!(args, vec!["mailto:a@b.com".to_string()]);
    }
}
