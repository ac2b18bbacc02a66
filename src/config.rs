// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application settings.
//!
//! Settings come from an optional YAML file. Every field has a default, so
//! a partial file (or none at all) is valid.

use crate::catalog::SortBy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Load the bundled demo projects into a fresh store.
    pub seed_samples: bool,
    /// How many projects the dashboard lists as recently updated.
    pub recent_limit: usize,
    /// Playback progress ticks per second.
    pub tick_hz: u32,
    /// Default ordering of the project list.
    pub sort_by: SortBy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_samples: true,
            recent_limit: 3,
            tick_hz: 10,
            sort_by: SortBy::Updated,
        }
    }
}

impl Config {
    /// Load settings from a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&yaml)
            .with_context(|| format!("parsing config {}", path.display()))?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Seconds between playback ticks. A zero rate falls back to the default.
    pub fn tick_interval(&self) -> f64 {
        let hz = if self.tick_hz == 0 {
            Config::default().tick_hz
        } else {
            self.tick_hz
        };
        1.0 / f64::from(hz)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: Config = serde_yaml::from_str("recent_limit: 5\nsort_by: name\n").unwrap();
        assert_eq!(config.recent_limit, 5);
        assert_eq!(config.sort_by, SortBy::Name);
        assert!(config.seed_samples);
        assert_eq!(config.tick_hz, 10);
    }

    #[test]
    fn test_tick_interval() {
        assert!((Config::default().tick_interval() - 0.1).abs() < 1e-9);

        let config = Config {
            tick_hz: 0,
            ..Default::default()
        };
        assert!((config.tick_interval() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_from_yaml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ctastudio.yaml");
        std::fs::write(&path, "seed_samples: false\n").unwrap();

        let config = Config::from_yaml_file(&path).unwrap();
        assert!(!config.seed_samples);

        assert!(Config::from_yaml_file(&dir.path().join("missing.yaml")).is_err());
    }
}
