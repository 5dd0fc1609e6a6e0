//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! metadata and tax regimes from YAML files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, EngineMetadata, RegimeConfig};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/inhand/
/// ├── engine.yaml          # Metadata, default regime, advisor settings
/// └── regimes/
///     ├── fy2024_25.yaml   # One file per regime
///     └── fy2025_26.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use inhand_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/inhand").unwrap();
/// let regime = loader.get_regime("fy2024_25").unwrap();
/// println!("Rebate threshold: {}", regime.rebate_threshold);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if a file is missing, a file contains invalid YAML
    /// or an invalid slab table, a regime fails validation, two files share
    /// a regime code, or the default regime is not among those loaded.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<EngineMetadata>(&path.join("engine.yaml"))?;
        let regimes = Self::load_regimes(&path.join("regimes"))?;

        debug!(
            config_dir = %path.display(),
            regimes = regimes.len(),
            default_regime = %metadata.default_regime,
            "Loaded engine configuration"
        );

        let config = EngineConfig::new(metadata, regimes)?;
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every regime file from the regimes directory, in file-name order.
    fn load_regimes(regimes_dir: &Path) -> EngineResult<Vec<RegimeConfig>> {
        let regimes_dir_str = regimes_dir.display().to_string();

        let entries = fs::read_dir(regimes_dir).map_err(|_| EngineError::ConfigNotFound {
            path: regimes_dir_str.clone(),
        })?;

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: regimes_dir_str.clone(),
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                paths.push(path);
            }
        }
        paths.sort();

        if paths.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no regime files found)", regimes_dir_str),
            });
        }

        let mut regimes: Vec<RegimeConfig> = Vec::with_capacity(paths.len());
        for path in &paths {
            let regime = Self::load_yaml::<RegimeConfig>(path)?;
            regime.validate()?;

            if regimes.iter().any(|r| r.code == regime.code) {
                return Err(EngineError::InvalidRegime {
                    code: regime.code,
                    message: format!("duplicate regime code in {}", path.display()),
                });
            }
            debug!(regime = %regime.code, file = %path.display(), "Loaded tax regime");
            regimes.push(regime);
        }

        Ok(regimes)
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the engine metadata.
    pub fn metadata(&self) -> &EngineMetadata {
        self.config.metadata()
    }

    /// Returns all loaded regimes, ordered by code.
    pub fn regimes(&self) -> impl Iterator<Item = &RegimeConfig> {
        self.config.regimes().values()
    }

    /// Gets a regime by its code.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use inhand_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/inhand")?;
    /// let regime = loader.get_regime("fy2025_26")?;
    /// println!("Regime: {}", regime.name);
    /// # Ok::<(), inhand_engine::error::EngineError>(())
    /// ```
    pub fn get_regime(&self, code: &str) -> EngineResult<&RegimeConfig> {
        self.config
            .regimes()
            .get(code)
            .ok_or_else(|| EngineError::RegimeNotFound {
                code: code.to_string(),
            })
    }

    /// Returns the regime named by `default_regime` in the metadata.
    pub fn default_regime(&self) -> &RegimeConfig {
        // EngineConfig::new guarantees the default regime is present.
        &self.config.regimes()[&self.config.metadata().default_regime]
    }

    /// Resolves a caller's optional regime code, falling back to the default.
    pub fn resolve_regime(&self, code: Option<&str>) -> EngineResult<&RegimeConfig> {
        match code {
            Some(code) => self.get_regime(code),
            None => Ok(self.default_regime()),
        }
    }
}
