//! # iconvar-config
//!
//! Layered configuration loading for iconvar using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Command-line overrides ([`ConfigOverrides`])
//! 2. Environment variables (`ICONVAR_*` prefix, `__` as separator)
//! 3. An explicit config file, or else project-level `iconvar.toml`
//! 4. User-level `~/.config/iconvar/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ICONVAR_EXTRACT__PREFIX` -> `extract.prefix`,
//! `ICONVAR_STYLESHEET__INPUT` -> `stylesheet.input`, etc.
//! `ICONVAR_LOG` is reserved for the tracing filter and ignored here.
//!
//! # Usage
//!
//! ```no_run
//! use iconvar_config::IconvarConfig;
//!
//! let config = IconvarConfig::load_with_dotenv(None).expect("config");
//! println!("rewriting {}", config.stylesheet.input.display());
//! ```

mod error;
mod extract;
mod stylesheet;

pub use error::ConfigError;
pub use extract::ExtractConfig;
pub use stylesheet::StylesheetConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use iconvar_core::{ExtractorOptions, StylesheetError};
use serde::{Deserialize, Serialize};

/// Project-local config file name.
pub const PROJECT_CONFIG_FILE: &str = "iconvar.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IconvarConfig {
    #[serde(default)]
    pub stylesheet: StylesheetConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
}

/// Values supplied on the command line; `None` leaves lower layers alone.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub prefix: Option<String>,
    pub lookahead: Option<usize>,
}

impl ConfigOverrides {
    /// Merge the set values on top of `figment`.
    #[must_use]
    pub fn apply(&self, mut figment: Figment) -> Figment {
        if let Some(input) = &self.input {
            figment = figment.merge(Serialized::default("stylesheet.input", input));
        }
        if let Some(output) = &self.output {
            figment = figment.merge(Serialized::default("stylesheet.output", output));
        }
        if let Some(prefix) = &self.prefix {
            figment = figment.merge(Serialized::default("extract.prefix", prefix));
        }
        if let Some(lookahead) = self.lookahead {
            figment = figment.merge(Serialized::default("extract.lookahead", lookahead));
        }
        figment
    }
}

impl IconvarConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::ensure_explicit_exists(explicit)?;
        Self::from_figment(Self::figment(explicit))
    }

    /// Load configuration with `.env` file support from the working directory.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Load configuration and apply command-line overrides last.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load_with_overrides(
        explicit: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::ensure_explicit_exists(explicit)?;
        Self::from_figment(overrides.apply(Self::figment(explicit)))
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// When `explicit` is given it replaces the project-local file.
    #[must_use]
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Explicit or project-local config
        match explicit {
            Some(path) => figment = figment.merge(Toml::file_exact(path)),
            None => {
                let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
                if local_path.exists() {
                    figment = figment.merge(Toml::file(local_path));
                }
            }
        }

        // Layer 3: Environment variables
        figment.merge(Env::prefixed("ICONVAR_").ignore(&["log"]).split("__"))
    }

    /// Extractor options derived from the `[extract]` section.
    #[must_use]
    pub fn extractor_options(&self) -> ExtractorOptions {
        ExtractorOptions::from(&self.extract)
    }

    /// Check values the extractor would reject.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] naming the `extract.*` field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.extractor_options().validate() {
            Ok(()) => Ok(()),
            Err(StylesheetError::InvalidOptions { field, reason }) => {
                Err(ConfigError::InvalidValue {
                    field: format!("extract.{field}"),
                    reason,
                })
            }
            Err(other) => Err(ConfigError::InvalidValue {
                field: "extract".to_string(),
                reason: other.to_string(),
            }),
        }
    }

    fn ensure_explicit_exists(explicit: Option<&Path>) -> Result<(), ConfigError> {
        match explicit {
            Some(path) if !path.is_file() => Err(ConfigError::MissingFile(path.to_path_buf())),
            _ => Ok(()),
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("iconvar").join("config.toml"))
    }
}
