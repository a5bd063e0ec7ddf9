//! Replay script format.
//!
//! A script is a JSON document with an optional configuration and a list of
//! frames. Each frame's inputs are applied in order during one update.

use std::path::{Path, PathBuf};

use grab_core::bevy::ControllerInput;
use grab_core::config::{ConfigError, ManipulationConfig};
use serde::{Deserialize, Serialize};

/// Errors produced while loading or running a replay.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse replay script: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("no manipulable object in the world")]
    MissingObject,
}

/// Inputs applied during a single frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayFrame {
    #[serde(default)]
    pub inputs: Vec<ControllerInput>,
}

/// A recorded controller session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Overrides the default configuration when present.
    #[serde(default)]
    pub config: Option<ManipulationConfig>,
    pub frames: Vec<ReplayFrame>,
}

impl ReplayScript {
    pub fn from_json(json: &str) -> Result<Self, ReplayError> {
        let script: Self = serde_json::from_str(json)?;
        if let Some(config) = &script.config {
            config.validate()?;
        }
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let json = std::fs::read_to_string(path).map_err(|source| ReplayError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The configuration to run with.
    pub fn config(&self) -> ManipulationConfig {
        self.config.clone().unwrap_or_default()
    }
}
