//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config`, else the default location)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default answers for the setup prompts.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Config bundle settings.
    pub bundles: BundleConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// `npm` or `yarn`.
    pub package_manager: Option<String>,
    /// `node` or `react`.
    pub project_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleConfig {
    /// On-disk bundle root; overrides the built-in bundles when set.
    pub dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                package_manager: Some("npm".into()),
                project_type: Some("node".into()),
            },
            output: OutputConfig::default(),
            bundles: BundleConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// The `config_file` parameter is the path the user passed via `--config`
    /// (or `None` to use the default location).  A missing file is not an
    /// error — the built-in defaults apply; a file that exists but fails to
    /// parse is.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file
            .cloned()
            .unwrap_or_else(Self::config_path);

        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Failed to read config '{}': {e}", path.display()))?;
        let config: Self = toml::from_str(&raw)
            .map_err(|e| anyhow::anyhow!("Failed to parse config '{}': {e}", path.display()))?;
        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.cleanstart.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "cleanstart", "cleanstart")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".cleanstart.toml"))
    }

    /// Path for a local (per-project) configuration file.
    pub fn local_config_path() -> PathBuf {
        PathBuf::from(".cleanstart.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_package_manager_is_npm() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.package_manager.as_deref(), Some("npm"));
    }

    #[test]
    fn default_project_type_is_node() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.project_type.as_deref(), Some("node"));
    }

    #[test]
    fn load_without_file_returns_defaults() {
        let missing = PathBuf::from("/definitely/not/a/real/config.toml");
        let cfg = AppConfig::load(Some(&missing)).unwrap();
        assert_eq!(cfg.defaults.package_manager.as_deref(), Some("npm"));
    }

    #[test]
    fn load_parses_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[defaults]\npackage_manager = \"yarn\"\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.package_manager.as_deref(), Some("yarn"));
        // Unset sections fall back to serde defaults.
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not valid toml [[[").unwrap();

        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn config_path_is_non_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
