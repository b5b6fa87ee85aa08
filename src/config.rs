//! Configuration for the color assist engine
//!
//! All caller-tunable parameters in one serializable structure: the selected
//! deficiency variant, daltonization strength, dictionary match tolerance,
//! and the dictionary itself. Configuration can be loaded from JSON or
//! constructed from defaults:
//!
//! ```no_run
//! use cvd_assist::AssistConfig;
//! use std::path::Path;
//!
//! let config = AssistConfig::from_json_file(Path::new("config.json"))?;
//! # Ok::<(), cvd_assist::AssistError>(())
//! ```
//!
//! Validation happens at load time. A valid config cannot fail later: the
//! transforms and namer it parameterizes have no runtime error paths.

use crate::constants::defaults;
use crate::error::{AssistError, Result};
use crate::naming::{dictionary, ColorNamer, NamedColorEntry};
use crate::transform::Variant;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistConfig {
    /// Deficiency variant to simulate/correct for
    pub variant: Variant,

    /// Daltonization strength (0 = identity, >1 overshoots)
    pub strength: f32,

    /// Dictionary match tolerance (Euclidean RGB distance)
    pub tolerance: f32,

    /// Extended color dictionary, in match-priority order
    #[serde(default = "dictionary::builtin_dictionary")]
    pub dictionary: Vec<NamedColorEntry>,
}

impl Default for AssistConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Protanopia,
            strength: defaults::STRENGTH,
            tolerance: defaults::TOLERANCE,
            dictionary: dictionary::builtin_dictionary(),
        }
    }
}

impl AssistConfig {
    /// Load and validate configuration from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AssistError::config_io(path.display().to_string(), e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| AssistError::config_parse(path.display().to_string(), e))?;
        config.validate()?;
        log::debug!(
            "loaded config from {}: variant={}, strength={}, tolerance={}, {} dictionary entries",
            path.display(),
            config.variant,
            config.strength,
            config.tolerance,
            config.dictionary.len()
        );
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AssistError::config_parse("serializing config", e))?;
        std::fs::write(path, json)
            .map_err(|e| AssistError::config_io(path.display().to_string(), e))?;
        Ok(())
    }

    /// Check parameter invariants
    ///
    /// Tolerance must be non-negative and finite, strength finite, and the
    /// dictionary non-empty.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(AssistError::invalid_parameter("tolerance", self.tolerance));
        }
        if !self.strength.is_finite() {
            return Err(AssistError::invalid_parameter("strength", self.strength));
        }
        if self.dictionary.is_empty() {
            return Err(AssistError::EmptyDictionary);
        }
        Ok(())
    }

    /// Build a color namer over this config's dictionary
    pub fn namer(&self) -> Result<ColorNamer> {
        ColorNamer::with_dictionary(self.dictionary.clone())
    }
}
