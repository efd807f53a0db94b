//! Application configuration.
//!
//! Handles loading, validating, and merging `pagesmith.toml`. Stock defaults
//! are serialized to a TOML table and the user file is merged on top of it key
//! by key, so a config file only needs the values it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//!
//! [database]
//! path = "pagesmith.db"
//!
//! [colors]                  # Default palette before logo extraction
//! primary = "#3B82F6"
//! secondary = "#6B7280"
//! accent = "#10B981"
//!
//! [copy]
//! endpoint = "https://api.openai.com/v1/chat/completions"
//! model = "gpt-4o-mini"
//! api_key_env = "OPENAI_API_KEY"
//! timeout_secs = 30
//!
//! [extraction]
//! timeout_secs = 10
//! max_bytes = 5242880
//!
//! [[auth.tokens]]
//! token = "dev-token"
//! user_id = "user-1"
//! email = "founder@example.com"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::palette::{HexColor, Palette};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Application configuration loaded from `pagesmith.toml`.
///
/// All fields have defaults; unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// SQLite database location.
    pub database: DatabaseConfig,
    /// Default palette used before logo extraction and preferences apply.
    pub colors: ColorDefaults,
    /// Copy generation endpoint.
    pub copy: CopyConfig,
    /// Logo color extraction limits.
    pub extraction: ExtractionConfig,
    /// Bearer tokens accepted by the API.
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("server.port must be non-zero".into()));
        }
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "database.path must not be empty".into(),
            ));
        }
        self.colors.to_palette()?;
        if self.copy.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "copy.timeout_secs must be non-zero".into(),
            ));
        }
        if self.copy.model.trim().is_empty() {
            return Err(ConfigError::Validation("copy.model must not be empty".into()));
        }
        if self.extraction.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "extraction.timeout_secs must be non-zero".into(),
            ));
        }
        if self.extraction.max_bytes == 0 {
            return Err(ConfigError::Validation(
                "extraction.max_bytes must be non-zero".into(),
            ));
        }
        let mut seen = HashSet::new();
        for entry in &self.auth.tokens {
            if entry.token.trim().is_empty() || entry.user_id.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "auth.tokens entries need a non-empty token and user_id".into(),
                ));
            }
            if !seen.insert(entry.token.as_str()) {
                return Err(ConfigError::Validation(
                    "auth.tokens contains a duplicate token".into(),
                ));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Path to the SQLite file. Created on first start.
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "pagesmith.db".to_string(),
        }
    }
}

/// Default palette as written in the config file.
///
/// Kept as strings so a bad value surfaces as a validation error naming the
/// key rather than a serde error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorDefaults {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl Default for ColorDefaults {
    fn default() -> Self {
        let stock = Palette::stock();
        Self {
            primary: stock.primary.into(),
            secondary: stock.secondary.into(),
            accent: stock.accent.into(),
        }
    }
}

impl ColorDefaults {
    /// Build a fresh [`Palette`] value from the configured defaults.
    pub fn to_palette(&self) -> Result<Palette, ConfigError> {
        let parse = |key: &str, value: &str| {
            HexColor::parse(value)
                .map_err(|e| ConfigError::Validation(format!("colors.{key}: {e}")))
        };
        Ok(Palette {
            primary: parse("primary", &self.primary)?,
            secondary: parse("secondary", &self.secondary)?,
            accent: parse("accent", &self.accent)?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CopyConfig {
    /// OpenAI-compatible chat completions URL.
    pub endpoint: String,
    pub model: String,
    /// Environment variable holding the API key. Read at startup.
    pub api_key_env: String,
    pub timeout_secs: u64,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExtractionConfig {
    pub timeout_secs: u64,
    /// Logos larger than this are skipped (defaults kept).
    pub max_bytes: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            max_bytes: 5 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthConfig {
    pub tokens: Vec<TokenEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenEntry {
    pub token: String,
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(AppConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<AppConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: AppConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `path`, falling back to stock defaults when it is absent.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `pagesmith.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Pagesmith Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# HTTP server
# ---------------------------------------------------------------------------
[server]
host = "127.0.0.1"
port = 3000

# ---------------------------------------------------------------------------
# Storage
# ---------------------------------------------------------------------------
[database]
# SQLite file holding organizations, sites and visits. Created if missing.
path = "pagesmith.db"

# ---------------------------------------------------------------------------
# Default palette
# ---------------------------------------------------------------------------
# Starting colors for every generated page. Colors extracted from an uploaded
# logo replace these, and per-request preferred colors replace both.
[colors]
primary = "#3B82F6"
secondary = "#6B7280"
accent = "#10B981"

# ---------------------------------------------------------------------------
# Marketing copy generation
# ---------------------------------------------------------------------------
[copy]
# Any OpenAI-compatible chat completions endpoint.
endpoint = "https://api.openai.com/v1/chat/completions"
model = "gpt-4o-mini"
# Name of the environment variable holding the API key.
api_key_env = "OPENAI_API_KEY"
timeout_secs = 30

# ---------------------------------------------------------------------------
# Logo color extraction
# ---------------------------------------------------------------------------
[extraction]
timeout_secs = 10
# Logos above this size are skipped and the default palette is used.
max_bytes = 5242880

# ---------------------------------------------------------------------------
# API authentication
# ---------------------------------------------------------------------------
# Each entry maps a bearer token to an identity. With no entries, every
# authenticated endpoint answers 401.
[auth]
tokens = []
# [[auth.tokens]]
# token = "change-me"
# user_id = "user-1"
# email = "founder@example.com"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_stock_palette() {
        let config = AppConfig::default();
        assert_eq!(config.colors.primary, "#3B82F6");
        assert_eq!(config.colors.secondary, "#6B7280");
        assert_eq!(config.colors.accent, "#10B981");
    }

    #[test]
    fn default_config_server_and_database() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.database.path, "pagesmith.db");
        assert!(config.auth.tokens.is_empty());
    }

    #[test]
    fn parse_partial_config() {
        let toml = r##"
[colors]
accent = "#112233"
"##;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.colors.accent, "#112233");
        assert_eq!(config.colors.primary, "#3B82F6");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn parse_auth_tokens() {
        let toml = r#"
[[auth.tokens]]
token = "abc"
user_id = "u1"
email = "a@example.com"

[[auth.tokens]]
token = "def"
user_id = "u2"
"#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.auth.tokens.len(), 2);
        assert_eq!(config.auth.tokens[0].email.as_deref(), Some("a@example.com"));
        assert_eq!(config.auth.tokens[1].email, None);
    }

    #[test]
    fn color_defaults_to_palette() {
        let palette = ColorDefaults::default().to_palette().unwrap();
        assert_eq!(palette, Palette::stock());
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("pagesmith.toml")).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.colors.primary, "#3B82F6");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pagesmith.toml");
        fs::write(
            &path,
            r##"
[server]
port = 8080

[colors]
primary = "#123456"
"##,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.colors.primary, "#123456");
        assert_eq!(config.colors.accent, "#10B981");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pagesmith.toml");
        fs::write(&path, "this is not valid toml [[[").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_toml_table_merge() {
        let base: toml::Value = toml::from_str(
            r#"
[copy]
model = "a"
timeout_secs = 30
"#,
        )
        .unwrap();
        let overlay: toml::Value = toml::from_str(
            r#"
[copy]
model = "b"
"#,
        )
        .unwrap();
        let merged = merge_toml(base, overlay);
        let copy = merged.get("copy").unwrap();
        assert_eq!(copy.get("model").unwrap().as_str(), Some("b"));
        assert_eq!(copy.get("timeout_secs").unwrap().as_integer(), Some(30));
    }

    #[test]
    fn merge_toml_arrays_replace_wholesale() {
        let base: toml::Value = toml::from_str(r#"tokens = ["a", "b"]"#).unwrap();
        let overlay: toml::Value = toml::from_str(r#"tokens = ["c"]"#).unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged.get("tokens").unwrap().as_array().unwrap().len(), 1);
    }

    // =========================================================================
    // Unknown key rejection tests
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let toml_str = r#"
[server]
prot = 8080
"#;
        let result: Result<AppConfig, _> = toml::from_str(toml_str);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_section_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[servr]\nport = 1\n");
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_default_color() {
        let mut config = AppConfig::default();
        config.colors.secondary = "grey".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("colors.secondary"));
    }

    #[test]
    fn validate_rejects_zero_port_and_timeouts() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.copy.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.extraction.max_bytes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_duplicate_tokens() {
        let mut config = AppConfig::default();
        let entry = TokenEntry {
            token: "same".to_string(),
            user_id: "u".to_string(),
            email: None,
        };
        config.auth.tokens = vec![entry.clone(), entry];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pagesmith.toml");
        fs::write(&path, "[colors]\nprimary = \"#12\"\n").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Validation(_))));
    }

    // =========================================================================
    // stock_config_toml tests
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: AppConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.database.path, "pagesmith.db");
        assert_eq!(config.colors.accent, "#10B981");
        assert_eq!(config.copy.model, "gpt-4o-mini");
        assert_eq!(config.extraction.max_bytes, 5 * 1024 * 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn stock_defaults_value_has_all_sections() {
        let val = stock_defaults_value();
        for section in ["server", "database", "colors", "copy", "extraction", "auth"] {
            assert!(val.get(section).is_some(), "missing [{section}]");
        }
    }
}
