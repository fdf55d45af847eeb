//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.api-explorer/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::endpoint::EndpointKey;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ExplorerConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub base_url: Option<String>,
    pub default_tab: Option<EndpointKey>,
}

/// Per-endpoint result slice limits.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LimitsConfig {
    pub posts: Option<usize>,
    pub users: Option<usize>,
    pub albums: Option<usize>,
    pub todos: Option<usize>,
}

impl LimitsConfig {
    fn get(&self, key: EndpointKey) -> Option<usize> {
        match key {
            EndpointKey::Posts => self.posts,
            EndpointKey::Users => self.users,
            EndpointKey::Albums => self.albums,
            EndpointKey::Todos => self.todos,
        }
    }
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";
pub const BASE_URL_ENV: &str = "API_EXPLORER_BASE_URL";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub default_tab: EndpointKey,
    /// Limits in `EndpointKey::ALL` order.
    pub limits: [usize; 4],
}

impl ResolvedConfig {
    pub fn limit_for(&self, key: EndpointKey) -> usize {
        self.limits[key.index()]
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with_env(&ExplorerConfig::default(), &CliOverrides::default(), None)
    }
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub tab: Option<EndpointKey>,
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

/// Returns the path to `~/.api-explorer/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".api-explorer").join("config.toml"))
}

/// Load config from `~/.api-explorer/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ExplorerConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ExplorerConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ExplorerConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ExplorerConfig::default());
    }

    load_config_from(&path)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<ExplorerConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ExplorerConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# API Explorer Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# base_url = "http://localhost:3001/api"   # Or set API_EXPLORER_BASE_URL
# default_tab = "posts"                    # "posts", "users", "albums", "todos"

# [limits]
# posts = 15
# users = 10
# albums = 20
# todos = 25
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ExplorerConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, std::env::var(BASE_URL_ENV).ok())
}

/// Same as [`resolve`], with the environment lookup passed in.
pub fn resolve_with_env(
    config: &ExplorerConfig,
    cli: &CliOverrides,
    env_base_url: Option<String>,
) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or(env_base_url)
        .or_else(|| config.general.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Tab: CLI → config → default
    let default_tab = cli
        .tab
        .or(config.general.default_tab)
        .unwrap_or_default();

    let limits = EndpointKey::ALL.map(|key| config.limits.get(key).unwrap_or(key.default_limit()));

    ResolvedConfig {
        base_url,
        default_tab,
        limits,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = ExplorerConfig::default();
        assert!(config.general.base_url.is_none());
        assert!(config.limits.posts.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&ExplorerConfig::default(), &CliOverrides::default(), None);
        assert_eq!(resolved.base_url, DEFAULT_BASE_URL);
        assert_eq!(resolved.default_tab, EndpointKey::Posts);
        assert_eq!(resolved.limits, [15, 10, 20, 25]);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ExplorerConfig {
            general: GeneralConfig {
                base_url: Some("http://example.test/api".to_string()),
                default_tab: Some(EndpointKey::Todos),
            },
            limits: LimitsConfig {
                users: Some(3),
                ..Default::default()
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), None);
        assert_eq!(resolved.base_url, "http://example.test/api");
        assert_eq!(resolved.default_tab, EndpointKey::Todos);
        assert_eq!(resolved.limit_for(EndpointKey::Users), 3);
        assert_eq!(resolved.limit_for(EndpointKey::Posts), 15);
    }

    #[test]
    fn test_env_wins_over_config_file() {
        let config = ExplorerConfig {
            general: GeneralConfig {
                base_url: Some("http://from-file".to_string()),
                default_tab: None,
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(
            &config,
            &CliOverrides::default(),
            Some("http://from-env".to_string()),
        );
        assert_eq!(resolved.base_url, "http://from-env");
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = ExplorerConfig {
            general: GeneralConfig {
                base_url: Some("http://from-file".to_string()),
                default_tab: Some(EndpointKey::Users),
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            base_url: Some("http://from-cli".to_string()),
            tab: Some(EndpointKey::Albums),
        };
        let resolved = resolve_with_env(&config, &cli, Some("http://from-env".to_string()));
        assert_eq!(resolved.base_url, "http://from-cli");
        assert_eq!(resolved.default_tab, EndpointKey::Albums);
    }

    #[test]
    fn test_toml_parses_all_sections() {
        let toml_str = r#"
[general]
base_url = "http://192.168.1.100:3001/api"
default_tab = "users"

[limits]
posts = 5
todos = 0
"#;
        let config: ExplorerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.general.base_url.as_deref(),
            Some("http://192.168.1.100:3001/api")
        );
        assert_eq!(config.general.default_tab, Some(EndpointKey::Users));
        assert_eq!(config.limits.posts, Some(5));
        assert_eq!(config.limits.todos, Some(0));
        assert!(config.limits.users.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[limits]
albums = 7
"#;
        let config: ExplorerConfig = toml::from_str(toml_str).unwrap();
        assert!(config.general.base_url.is_none());
        assert_eq!(config.limits.albums, Some(7));
    }

    #[test]
    fn test_unknown_tab_is_a_parse_error() {
        let toml_str = r#"
[general]
default_tab = "photos"
"#;
        assert!(toml::from_str::<ExplorerConfig>(toml_str).is_err());
    }

    #[test]
    fn test_generated_default_is_valid_toml() {
        let config: ExplorerConfig = toml::from_str(DEFAULT_CONFIG_CONTENT).unwrap();
        assert!(config.general.base_url.is_none());
    }

    #[test]
    fn test_load_config_from_missing_file_is_io_error() {
        let result = load_config_from(Path::new("/nonexistent/api-explorer/config.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
