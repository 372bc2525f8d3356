//! Artifact persistence for trained pipelines.
//!
//! Training produces two artifacts: the standardizer parameters and the
//! model parameters (with the hyperparameters that produced them). Both are
//! stored as versioned JSON documents; serde_json prints floats in their
//! shortest round-tripping form, so loaded parameters are bit-identical to
//! what was saved.
//!
//! Loading validates before constructing runtime types: version gate first,
//! then internal consistency (vector lengths, positive finite standard
//! deviations, finite weights). A corrupt or missing artifact surfaces as a
//! [`ReadError`]; there is no recovery or retry here.
//!
//! # Example
//!
//! ```
//! use revline::persist;
//! use revline::scaling::StandardScaler;
//! use ndarray::array;
//!
//! let features = array![[1.0, 2.0, 3.0], [5.0, 9.0, 4.0]];
//! let scaler = StandardScaler::fit(features.view()).unwrap();
//!
//! let mut buf = Vec::new();
//! persist::save_scaler(&mut buf, &scaler).unwrap();
//! let restored = persist::load_scaler(buf.as_slice()).unwrap();
//! assert_eq!(restored, scaler);
//! ```

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::model::AdalineModel;
use crate::scaling::StandardScaler;
use crate::training::AdalineParams;

pub mod schema;

use schema::{AdalineSchema, ScalerSchema};

/// Errors raised while loading an artifact.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported artifact version {found}, this build supports {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("corrupt artifact: {0}")]
    Corrupt(String),
}

/// Errors raised while saving an artifact.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Scaler artifact
// ============================================================================

/// Serialize standardizer parameters as JSON.
pub fn save_scaler<W: Write>(writer: W, scaler: &StandardScaler) -> Result<(), WriteError> {
    let schema = ScalerSchema::from(scaler);
    serde_json::to_writer_pretty(writer, &schema)?;
    Ok(())
}

/// Deserialize and validate standardizer parameters.
pub fn load_scaler<R: Read>(reader: R) -> Result<StandardScaler, ReadError> {
    let schema: ScalerSchema = serde_json::from_reader(reader)?;
    StandardScaler::try_from(schema)
}

/// Save standardizer parameters to a file.
pub fn save_scaler_file<P: AsRef<Path>>(
    path: P,
    scaler: &StandardScaler,
) -> Result<(), WriteError> {
    let file = File::create(path)?;
    save_scaler(BufWriter::new(file), scaler)
}

/// Load standardizer parameters from a file.
pub fn load_scaler_file<P: AsRef<Path>>(path: P) -> Result<StandardScaler, ReadError> {
    let file = File::open(path)?;
    load_scaler(BufReader::new(file))
}

// ============================================================================
// Model artifact
// ============================================================================

/// Serialize a trained model and its training parameters as JSON.
pub fn save_model<W: Write>(
    writer: W,
    model: &AdalineModel,
    params: &AdalineParams,
) -> Result<(), WriteError> {
    let schema = AdalineSchema::new(model, params);
    serde_json::to_writer_pretty(writer, &schema)?;
    Ok(())
}

/// Deserialize and validate a trained model and its training parameters.
///
/// The returned params carry default verbosity; only the hyperparameters
/// that shaped the model are persisted.
pub fn load_model<R: Read>(reader: R) -> Result<(AdalineModel, AdalineParams), ReadError> {
    let schema: AdalineSchema = serde_json::from_reader(reader)?;
    <(AdalineModel, AdalineParams)>::try_from(schema)
}

/// Save a trained model to a file.
pub fn save_model_file<P: AsRef<Path>>(
    path: P,
    model: &AdalineModel,
    params: &AdalineParams,
) -> Result<(), WriteError> {
    let file = File::create(path)?;
    save_model(BufWriter::new(file), model, params)
}

/// Load a trained model from a file.
pub fn load_model_file<P: AsRef<Path>>(
    path: P,
) -> Result<(AdalineModel, AdalineParams), ReadError> {
    let file = File::open(path)?;
    load_model(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn scaler_save_load_in_memory() {
        let scaler = StandardScaler::from_parts(array![3.0, -1.5], array![2.0, 0.25]).unwrap();
        let mut buf = Vec::new();
        save_scaler(&mut buf, &scaler).unwrap();
        let restored = load_scaler(buf.as_slice()).unwrap();
        assert_eq!(restored, scaler);
    }

    #[test]
    fn model_save_load_in_memory() {
        let model = AdalineModel::from_parts(array![0.1, -0.2, 0.3], -0.05, vec![0.9, 0.4]);
        let params = AdalineParams {
            learning_rate: 0.02,
            n_epochs: 15,
            seed: 3,
            ..Default::default()
        };
        let mut buf = Vec::new();
        save_model(&mut buf, &model, &params).unwrap();
        let (restored_model, restored_params) = load_model(buf.as_slice()).unwrap();
        assert_eq!(restored_model, model);
        assert_eq!(restored_params.seed, 3);
    }

    #[test]
    fn load_rejects_invalid_json() {
        let result = load_scaler(&b"not json"[..]);
        assert!(matches!(result, Err(ReadError::Json(_))));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let result = load_scaler_file("/nonexistent/scaler.json");
        assert!(matches!(result, Err(ReadError::Io(_))));
    }
}
