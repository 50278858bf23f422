// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::CONFIG_FILE;
pub use self::types::{
    Config, DebugConfig, IndexConfig, LinkRankToml, RankConfig, Representation, ScopeConfig,
    StartVector,
};

use crate::error::{LinkRankError, Result};
use std::path::Path;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new config and applies `linkrank.toml` from the working directory.
    ///
    /// # Errors
    /// Returns error if the file exists but is malformed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Creates a new config and applies the toml file at `path`, if present.
    ///
    /// # Errors
    /// Returns error if the file exists but is malformed.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::new();
        io::load_toml_config(&mut config, path)?;
        Ok(config)
    }

    /// Saves the file-backed settings to `path`.
    ///
    /// # Errors
    /// Returns error if file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        io::save_to_file(self, path)
    }
}

impl RankConfig {
    /// Rejects parameters for which the rank computation is undefined.
    ///
    /// # Errors
    /// Returns the first degenerate parameter found.
    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(LinkRankError::InvalidDamping(self.alpha));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(LinkRankError::InvalidThreshold(self.epsilon));
        }
        if self.max_iterations < self.min_iterations {
            return Err(LinkRankError::InvalidIterationBounds {
                min: self.min_iterations,
                max: self.max_iterations,
            });
        }
        Ok(())
    }
}
