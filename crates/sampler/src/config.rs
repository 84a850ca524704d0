// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Sampler configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! temperature = 0.8
//! top_p = 0.9
//! seed = 42
//! ```

use std::path::Path;

use crate::SamplerError;

/// Configuration for a [`crate::Sampler`].
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SamplerConfig {
    /// Logit temperature. `0.0` selects greedy decoding.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Nucleus threshold. Values outside `(0, 1)` disable nucleus sampling.
    #[serde(default = "default_top_p")]
    pub top_p: f64,
    /// Seed for the random source; `None` seeds from OS entropy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_temperature() -> f64 {
    1.0
}

fn default_top_p() -> f64 {
    0.9
}

impl SamplerConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, SamplerError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SamplerError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, SamplerError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| SamplerError::Config(format!("TOML parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, SamplerError> {
        toml::to_string_pretty(self)
            .map_err(|e| SamplerError::Config(format!("TOML serialise error: {e}")))
    }

    /// Checks that temperature and top-p are usable.
    ///
    /// # Errors
    /// Returns [`SamplerError::InvalidTemperature`] for a negative or
    /// non-finite temperature and [`SamplerError::InvalidTopP`] for a
    /// non-finite top-p.
    pub fn validate(&self) -> Result<(), SamplerError> {
        if !self.temperature.is_finite() || self.temperature < 0.0 {
            return Err(SamplerError::InvalidTemperature(self.temperature));
        }
        if !self.top_p.is_finite() {
            return Err(SamplerError::InvalidTopP(self.top_p));
        }
        Ok(())
    }

    /// Returns `true` when `top_p` enables nucleus sampling.
    pub fn uses_nucleus(&self) -> bool {
        self.top_p > 0.0 && self.top_p < 1.0
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            temperature: default_temperature(),
            top_p: default_top_p(),
            seed: None,
        }
    }
}
