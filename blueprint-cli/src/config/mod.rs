//! CLI configuration
//!
//! Defaults for `blueprint create` come from several layers, lowest
//! precedence first:
//!
//! 1. Built-in defaults
//! 2. `~/.config/blueprint/config.toml`
//! 3. `./blueprint.toml`
//! 4. `BLUEPRINT_*` environment variables (e.g. `BLUEPRINT_FRAMEWORK=gin`)
//!
//! Command-line flags override all of them.
//!
//! # Example
//!
//! ```toml
//! framework = "chi"
//! driver = "postgres"
//! git = "stage"
//! builder = "just"
//! port = 3000
//! ```

use anyhow::{Context, Result};
use blueprint::options::{BuildTool, Database, Framework, GitPolicy};
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the per-directory configuration
pub const LOCAL_CONFIG: &str = "blueprint.toml";

/// Defaults applied when a flag is not given
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlueprintConfig {
    /// Framework used when `--framework` is absent and no prompt is shown
    pub framework: Framework,
    /// Database driver used when `--driver` is absent
    pub driver: Database,
    /// Git policy
    pub git: GitPolicy,
    /// Build tool
    pub builder: BuildTool,
    /// HTTP port of generated servers
    pub port: u16,
    /// Database host written to `.env`
    pub database_host: String,
    /// Directory new projects are created in
    pub output: PathBuf,
}

impl Default for BlueprintConfig {
    fn default() -> Self {
        Self {
            framework: Framework::StandardLibrary,
            driver: Database::None,
            git: GitPolicy::Commit,
            builder: BuildTool::Make,
            port: 8080,
            database_host: "localhost".to_string(),
            output: PathBuf::from("."),
        }
    }
}

impl BlueprintConfig {
    /// Load every layer from its standard location
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be parsed or a value
    /// has the wrong type (for example an unknown framework key).
    pub fn load() -> Result<Self> {
        let user = Self::user_config_path();
        Self::load_layers(user.as_deref(), Path::new(LOCAL_CONFIG))
    }

    /// Load with explicit user and local file locations
    ///
    /// Missing files are skipped.
    ///
    /// # Errors
    ///
    /// See [`BlueprintConfig::load`].
    pub fn load_layers(user: Option<&Path>, local: &Path) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(
            &toml::to_string(&Self::default()).context("Failed to serialize default config")?,
        ));

        if let Some(user) = user.filter(|path| path.exists()) {
            debug!(path = %user.display(), "loading user config");
            figment = figment.merge(Toml::file(user));
        }
        if local.exists() {
            debug!(path = %local.display(), "loading local config");
            figment = figment.merge(Toml::file(local));
        }

        figment = figment.merge(Env::prefixed("BLUEPRINT_"));

        figment
            .extract()
            .context("Failed to load blueprint configuration")
    }

    /// Load defaults plus a single file given with `--config`
    ///
    /// The user and local files are not read; environment variables still
    /// apply on top.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.is_file() {
            anyhow::bail!("Configuration file not found: {}", path.display());
        }

        Figment::new()
            .merge(Toml::string(
                &toml::to_string(&Self::default()).context("Failed to serialize default config")?,
            ))
            .merge(Toml::file(path))
            .merge(Env::prefixed("BLUEPRINT_"))
            .extract()
            .with_context(|| format!("Failed to load configuration from {}", path.display()))
    }

    /// `~/.config/blueprint/config.toml`, if a config directory exists
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("blueprint").join("config.toml"))
    }
}
