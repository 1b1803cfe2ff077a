//! Configuration resolution for mdpress.
//!
//! Parses `mdpress.toml` declarations with serde and resolves them into an
//! immutable [`SiteConfig`]: the validated navigation tree, sidebar map, and
//! rendering flags a site generator consumes. Resolution itself
//! ([`resolve()`]) is pure: no I/O, deterministic, declaration order
//! preserved. [`SiteConfig::load`] layers file reading, config discovery in
//! parent directories, and CLI overrides on top.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support `${VAR}` expansion, erroring when the
//! variable is unset. Expanded fields:
//! - `title`
//! - `description`
//! - `base`

mod expand;
mod model;
mod raw;
mod resolve;

use std::path::{Path, PathBuf};

pub use model::{
    DEFAULT_PORT, DEFAULT_SIDEBAR_DEPTH, HeadTag, MarkdownOptions, NavEntry, SidebarGroup,
    SidebarItem, SidebarMap, SidebarSection, SiteConfig,
};
pub use raw::{
    RawConfig, RawHeadTag, RawMarkdownOptions, RawNavEntry, RawSidebarGroup, RawSidebarSection,
};
pub use resolve::{is_external, resolve};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "mdpress.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override preview server port.
    pub port: Option<u16>,
    /// Override site base path.
    pub base: Option<String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g. `base`).
        field: String,
        /// Error message (e.g. "`${DOCS_BASE}` not set").
        message: String,
    },
    /// A required field is absent or empty.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Config field path (e.g. `nav[0].text`).
        field: String,
    },
    /// A path value has the wrong shape.
    #[error("Malformed path in {field}: {value:?} (expected {expected})")]
    MalformedPath {
        /// Config field path (e.g. `sidebar./vue/[1].children[2]`).
        field: String,
        /// The rejected value.
        value: String,
        /// Human-readable shape the value must have.
        expected: &'static str,
    },
    /// A sidebar mount prefix is declared more than once.
    #[error("Duplicate sidebar prefix {prefix:?} at {field}")]
    DuplicatePrefix {
        /// Config field path of the second declaration.
        field: String,
        /// The repeated prefix.
        prefix: String,
    },
    /// A nav entry declares both `link` and `items`.
    #[error("Nav entry at {field} declares both `link` and `items`")]
    AmbiguousNavEntry {
        /// Config field path of the entry.
        field: String,
    },
}

impl SiteConfig {
    /// Load and resolve configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `mdpress.toml` in the current directory and parents. There is no
    /// default configuration: a site declaration requires at least a title,
    /// so a missing file is an error.
    ///
    /// CLI settings are applied after resolution, so CLI arguments take
    /// precedence over file values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotFound`] when no config file exists,
    /// [`ConfigError::Parse`]/[`ConfigError::Io`] for unreadable files, and
    /// any resolution error from [`resolve()`].
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                path.to_path_buf()
            }
            None => Self::discover_config()
                .ok_or_else(|| ConfigError::NotFound(PathBuf::from(CONFIG_FILENAME)))?,
        };

        let mut config = Self::load_from_file(&path)?;

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings)?;
        }

        Ok(config)
    }

    /// Load and resolve configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut raw: RawConfig = toml::from_str(&content)?;

        // Expand environment variables before resolution
        expand::expand_raw(&mut raw)?;

        resolve(raw)
    }

    /// Apply CLI settings to the resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedPath`] when an overriding base path
    /// has the wrong shape.
    fn apply_cli_settings(&mut self, settings: &CliSettings) -> Result<(), ConfigError> {
        if let Some(port) = settings.port {
            self.port = port;
        }
        if let Some(base) = &settings.base {
            resolve::require_mount_path(base, "base")?;
            self.base.clone_from(base);
        }
        Ok(())
    }

    /// Search for a config file in the current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let start = std::env::current_dir().ok()?;
        Self::discover_config_from(&start)
    }

    /// Walk upward from `start` looking for the config file.
    fn discover_config_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }
}
