//! Configuration of start asset placement.
//!
//! Loaded from `placement_config.json`, with an environment variable to point at an override.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    grid::RelativeOffset, map_component::BuildingType, start_resources::StartResources,
};

pub const BUILTIN_PLACEMENT_CONFIG: &str = include_str!("data/placement_config.json");

/// Environment variable naming a JSON file that replaces the builtin configuration.
pub const PLACEMENT_CONFIG_ENV: &str = "LEGACY_MAP_PLACEMENT_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Where, relative to the start tile, the spiral walk begins.
    pub initial_cursor: RelativeOffset,
    /// The building put on every start tile.
    pub tower: BuildingType,
    /// Tiles of the tower, relative to the start tile, that never receive a stack or settler.
    pub protected_footprint: Vec<RelativeOffset>,
    pub start_resources: StartResources,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            initial_cursor: RelativeOffset::new(-1, 2),
            tower: BuildingType::Tower,
            protected_footprint: tower_footprint(),
            start_resources: StartResources::default(),
        }
    }
}

/// The tower covers three columns and four rows around its door at `(0, 0)`.
fn tower_footprint() -> Vec<RelativeOffset> {
    (-2..=1)
        .flat_map(|dy| (-1..=1).map(move |dx| RelativeOffset::new(dx, dy)))
        .collect()
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse placement config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read placement config from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PlacementConfig {
    pub fn builtin() -> Self {
        serde_json::from_str(BUILTIN_PLACEMENT_CONFIG)
            .expect("builtin placement config should parse")
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    pub fn with_start_resources(mut self, start_resources: StartResources) -> Self {
        self.start_resources = start_resources;
        self
    }
}

/// Loads the placement configuration named by [`PLACEMENT_CONFIG_ENV`], falling back to the builtin one.
pub fn load_placement_config_from_env() -> PlacementConfig {
    if let Some(path) = env::var_os(PLACEMENT_CONFIG_ENV).map(PathBuf::from) {
        match PlacementConfig::from_file(&path) {
            Ok(config) => {
                tracing::info!(
                    target: "legacy_map::config",
                    path = %path.display(),
                    "placement_config.loaded=file"
                );
                return config;
            }
            Err(err) => {
                tracing::warn!(
                    target: "legacy_map::config",
                    path = %path.display(),
                    error = %err,
                    "placement_config.load_failed"
                );
            }
        }
    }

    tracing::info!(target: "legacy_map::config", "placement_config.loaded=builtin");
    PlacementConfig::builtin()
}
