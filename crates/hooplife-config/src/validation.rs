//! Full configuration validation.
//!
//! Validates the app URL, window dimensions, and the log level directive.

use crate::schema::ShellConfig;
use hooplife_common::ConfigError;
use url::Url;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ShellConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    // App URL must be an absolute http(s) URL
    match Url::parse(&config.app.url) {
        Ok(parsed) => {
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                errors.push(format!(
                    "app.url must use http or https, got scheme '{}'",
                    parsed.scheme()
                ));
            }
        }
        Err(e) => errors.push(format!("app.url is not a valid URL: {e}")),
    }

    // Window constraints
    validate_range(&mut errors, "window.width", config.window.width, 200, 10_000);
    validate_range(&mut errors, "window.height", config.window.height, 200, 10_000);

    // Log level must be a known directive
    let level = config.logging.level.to_ascii_lowercase();
    if !matches!(level.as_str(), "trace" | "debug" | "info" | "warn" | "error") {
        errors.push(format!("logging.level unknown: '{}'", config.logging.level));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_range(errors: &mut Vec<String>, field: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{field} must be in range {min}-{max}, got {value}"));
    }
}
