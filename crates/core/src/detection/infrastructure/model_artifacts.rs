use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::shared::constants::{MODEL_CONFIG_FILE, MODEL_WEIGHTS_FILE};

#[derive(Error, Debug)]
pub enum ModelArtifactError {
    #[error("model artifact not found: {0}")]
    Missing(PathBuf),
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid model descriptor {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Sidecar descriptor for an ONNX scorer: how frames must be presented
/// to the graph. The values are a contract of the trained model, not
/// tunables.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ModelDescriptor {
    pub input_width: u32,
    pub input_height: u32,
    /// Per-channel mean, in the model's channel order, subtracted during
    /// preprocessing.
    pub mean: [f32; 3],
    /// Multiplier applied after mean subtraction.
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Swap R and B before feeding (for models trained on BGR input).
    #[serde(default)]
    pub swap_rb: bool,
}

fn default_scale() -> f32 {
    1.0
}

/// A model directory resolved to its two fixed-name files.
#[derive(Clone, Debug)]
pub struct ModelArtifacts {
    pub descriptor: ModelDescriptor,
    pub weights_path: PathBuf,
}

impl ModelArtifacts {
    /// Resolves `config.json` + `model.onnx` inside `dir`.
    ///
    /// Any missing or unparsable file is fatal; the system cannot run
    /// without both scorers.
    pub fn load(dir: &Path) -> Result<ModelArtifacts, ModelArtifactError> {
        let config_path = dir.join(MODEL_CONFIG_FILE);
        let weights_path = dir.join(MODEL_WEIGHTS_FILE);

        if !config_path.exists() {
            return Err(ModelArtifactError::Missing(config_path));
        }
        if !weights_path.exists() {
            return Err(ModelArtifactError::Missing(weights_path));
        }

        let raw = fs::read_to_string(&config_path).map_err(|e| ModelArtifactError::Read {
            path: config_path.clone(),
            source: e,
        })?;
        let descriptor =
            serde_json::from_str(&raw).map_err(|e| ModelArtifactError::Parse {
                path: config_path,
                source: e,
            })?;

        Ok(ModelArtifacts {
            descriptor,
            weights_path,
        })
    }
}
