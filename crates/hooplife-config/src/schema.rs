//! Configuration schema types for the HoopLife shell.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with sensible defaults.

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

// =============================================================================
// App Config
// =============================================================================

/// Hosted application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// URL of the hosted HoopLife application.
    pub url: String,
    /// Custom user agent string sent by the embedded web view.
    pub user_agent: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            url: "https://hooplifenba.streamlit.app".into(),
            user_agent: "HoopLife/0.1".into(),
        }
    }
}

// =============================================================================
// Window Config
// =============================================================================

/// Shell window settings. The defaults mimic a phone-sized portrait window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Window width in logical pixels (valid range: 200-10000).
    pub width: u32,
    /// Window height in logical pixels (valid range: 200-10000).
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "HoopLife".into(),
            width: 430,
            height: 932,
            resizable: true,
        }
    }
}

// =============================================================================
// Logging Config
// =============================================================================

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level directive (trace, debug, info, warn, error).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

// =============================================================================
// Root Config
// =============================================================================

/// Top-level shell configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub app: AppConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}
