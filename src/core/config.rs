//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.sentiscope/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::DEFAULT_BASE_URL;
use crate::core::chart::{DEFAULT_DATE_FORMAT, is_valid_date_format};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SentiscopeConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BackendConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub date_format: Option<String>,
    pub show_guide: Option<bool>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub date_format: String,
    pub show_guide: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with_env(&SentiscopeConfig::default(), None, |_| None)
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.sentiscope/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".sentiscope").join("config.toml"))
}

/// Load config from `~/.sentiscope/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SentiscopeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SentiscopeConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(SentiscopeConfig::default())
        }
    }
}

pub fn load_config_from(path: &Path) -> Result<SentiscopeConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(SentiscopeConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: SentiscopeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Sentiscope Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [backend]
# base_url = "http://localhost:8000/api"   # Or set SENTISCOPE_BASE_URL, or --base-url

# [display]
# date_format = "%-m/%-d/%Y"               # chrono strftime syntax; or SENTISCOPE_DATE_FORMAT
# show_guide = true                        # Sentiment score guide under the headline (Ctrl+G toggles)
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_base_url` is from the `--base-url` flag (None = not specified).
pub fn resolve(config: &SentiscopeConfig, cli_base_url: Option<&str>) -> ResolvedConfig {
    resolve_with_env(config, cli_base_url, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &SentiscopeConfig,
    cli_base_url: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli_base_url
        .map(|s| s.to_string())
        .or_else(|| env("SENTISCOPE_BASE_URL"))
        .or_else(|| config.backend.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Date format: env → config → default
    let date_format = env("SENTISCOPE_DATE_FORMAT")
        .or_else(|| config.display.date_format.clone())
        .filter(|fmt| {
            let valid = is_valid_date_format(fmt);
            if !valid {
                warn!("Ignoring invalid date_format {:?}, using {:?}", fmt, DEFAULT_DATE_FORMAT);
            }
            valid
        })
        .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string());

    ResolvedConfig {
        base_url,
        date_format,
        show_guide: config.display.show_guide.unwrap_or(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&SentiscopeConfig::default(), None, no_env);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.date_format, DEFAULT_DATE_FORMAT);
        assert!(resolved.show_guide);
        assert_eq!(resolved, ResolvedConfig::default());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = SentiscopeConfig {
            backend: BackendConfig {
                base_url: Some("http://analysis.internal/api".to_string()),
            },
            display: DisplayConfig {
                date_format: Some("%Y-%m-%d".to_string()),
                show_guide: Some(false),
            },
        };
        let resolved = resolve_with_env(&config, None, no_env);
        assert_eq!(resolved.base_url, "http://analysis.internal/api");
        assert_eq!(resolved.date_format, "%Y-%m-%d");
        assert!(!resolved.show_guide);
    }

    #[test]
    fn test_invalid_date_format_falls_back() {
        let config = SentiscopeConfig {
            display: DisplayConfig {
                date_format: Some("%Q".to_string()),
                show_guide: None,
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, None, no_env);
        assert_eq!(resolved.date_format, DEFAULT_DATE_FORMAT);

        // A bad env value falls back to the default, not to the file value
        let config = SentiscopeConfig {
            display: DisplayConfig {
                date_format: Some("%Y-%m-%d".to_string()),
                show_guide: None,
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, None, |k: &str| {
            (k == "SENTISCOPE_DATE_FORMAT").then(|| "%Y-%".to_string())
        });
        assert_eq!(resolved.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn test_env_overrides_config_and_cli_overrides_env() {
        let config = SentiscopeConfig {
            backend: BackendConfig {
                base_url: Some("http://from-file/api".to_string()),
            },
            ..Default::default()
        };
        let env: HashMap<&str, &str> = HashMap::from([
            ("SENTISCOPE_BASE_URL", "http://from-env/api"),
            ("SENTISCOPE_DATE_FORMAT", "%d/%m/%Y"),
        ]);
        let lookup = |k: &str| env.get(k).map(|v| v.to_string());

        let resolved = resolve_with_env(&config, None, lookup);
        assert_eq!(resolved.base_url, "http://from-env/api");
        assert_eq!(resolved.date_format, "%d/%m/%Y");

        let resolved = resolve_with_env(&config, Some("http://from-cli/api"), lookup);
        assert_eq!(resolved.base_url, "http://from-cli/api");
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[display]
show_guide = false
"#;
        let config: SentiscopeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.show_guide, Some(false));
        assert!(config.display.date_format.is_none());
        assert!(config.backend.base_url.is_none());
    }

    #[test]
    fn test_load_generates_default_then_parses_it() {
        let dir = std::env::temp_dir().join(format!("sentiscope-cfg-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let config = load_config_from(&path).unwrap();
        assert!(config.backend.base_url.is_none());
        assert!(path.exists(), "default config should be written");

        // The generated file is all comments, so it parses back to defaults
        let reparsed = load_config_from(&path).unwrap();
        assert!(reparsed.display.show_guide.is_none());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = std::env::temp_dir().join(format!("sentiscope-bad-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[backend\nbase_url = 3").unwrap();

        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));

        let _ = fs::remove_dir_all(&dir);
    }
}
