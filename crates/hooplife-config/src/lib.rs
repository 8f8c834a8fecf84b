//! HoopLife shell configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use sensible defaults so partial configs work out of the box.
//! The shell reads its config once at startup; there is no live reload.

pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use schema::{AppConfig, ShellConfig, CONFIG_SCHEMA_VERSION};
pub use toml_loader::{default_config_path, load_from_path};

use hooplife_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// if none exists, and validates the result.
pub fn load_config() -> Result<ShellConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ShellConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = ShellConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"app\""));
        assert!(json.contains("\"window\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_to_json_contains_app_url() {
        let config = ShellConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("https://hooplifenba.streamlit.app"));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = ShellConfig::default();
        let json = config_to_json(&config);
        let parsed: ShellConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.app.url, "https://hooplifenba.streamlit.app");
        assert_eq!(parsed.window.title, "HoopLife");
        assert_eq!(parsed.window.width, 430);
    }
}
