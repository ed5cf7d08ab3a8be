//! Project manifest (huffer.yaml) parsing.
//!
//! The manifest sets where the two PNG sinks live and the soft time target
//! for a run. Every field is optional.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{HufferError, Result};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "huffer.yaml";

/// Project manifest loaded from huffer.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Archive root for every generated PNG.
    pub output: PathBuf,

    /// Game-asset root the game's loader reads from.
    pub assets: PathBuf,

    /// Soft wall-clock target for a full run, in seconds.
    pub target_seconds: f64,
}

fn default_output() -> PathBuf {
    PathBuf::from("output")
}

fn default_assets() -> PathBuf {
    PathBuf::from("../public/assets/sprites")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output: default_output(),
            assets: default_assets(),
            target_seconds: 5.0,
        }
    }
}

impl Manifest {
    /// Load manifest from a huffer.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| HufferError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `huffer.yaml` from `dir` if present, defaults otherwise.
    pub fn discover(dir: &Path) -> Result<(Self, bool)> {
        let path = dir.join(MANIFEST_FILENAME);
        if path.exists() {
            Ok((Self::load(&path)?, true))
        } else {
            Ok((Self::default(), false))
        }
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let manifest: Self = serde_yaml::from_str(content).map_err(|e| HufferError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })?;

        let in_range = Duration::try_from_secs_f64(manifest.target_seconds)
            .is_ok_and(|target| !target.is_zero());
        if !in_range {
            return Err(HufferError::Parse {
                message: format!("Invalid target_seconds: {}", manifest.target_seconds),
                help: Some("Use a positive, finite number of seconds".to_string()),
            });
        }

        Ok(manifest)
    }

    /// The soft time target. `parse` rejects values that do not fit a
    /// `Duration`; a hand-built manifest with one saturates instead.
    pub fn target(&self) -> Duration {
        Duration::try_from_secs_f64(self.target_seconds).unwrap_or(Duration::MAX)
    }
}
