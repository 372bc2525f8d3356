//! Schema types for artifact serialization.
//!
//! These types provide a stable serialization format independent of runtime
//! types, so the on-disk format can evolve without touching the model code.
//! Conversions live next to the schemas: `From` for runtime → schema (always
//! lossless) and `TryFrom` for schema → runtime (validated).

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::model::AdalineModel;
use crate::scaling::StandardScaler;
use crate::training::{AdalineParams, Verbosity};

use super::ReadError;

/// Current artifact schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// Persisted standardizer parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerSchema {
    /// Schema version, for forward-compatibility checks on load.
    pub version: u32,
    /// Per-feature means.
    pub mean: Vec<f32>,
    /// Per-feature standard deviations (all positive).
    pub std: Vec<f32>,
}

impl From<&StandardScaler> for ScalerSchema {
    fn from(scaler: &StandardScaler) -> Self {
        Self {
            version: SCHEMA_VERSION,
            mean: scaler.mean().to_vec(),
            std: scaler.std().to_vec(),
        }
    }
}

impl TryFrom<ScalerSchema> for StandardScaler {
    type Error = ReadError;

    fn try_from(schema: ScalerSchema) -> Result<Self, Self::Error> {
        check_version(schema.version)?;
        StandardScaler::from_parts(Array1::from(schema.mean), Array1::from(schema.std))
            .map_err(|e| ReadError::Corrupt(e.to_string()))
    }
}

/// Persisted model parameters plus the hyperparameters used at training
/// time, for reproducibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdalineSchema {
    /// Schema version, for forward-compatibility checks on load.
    pub version: u32,
    /// Learned weights, one per feature.
    pub weights: Vec<f32>,
    /// Learned bias.
    pub bias: f32,
    /// Learning rate used at training time.
    pub learning_rate: f32,
    /// Epoch count used at training time.
    pub n_epochs: u32,
    /// Weight-initialization seed used at training time.
    pub seed: u64,
    /// Per-epoch training loss, if recorded.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub losses: Vec<f32>,
}

impl AdalineSchema {
    /// Build the schema from a trained model and its training parameters.
    pub fn new(model: &AdalineModel, params: &AdalineParams) -> Self {
        Self {
            version: SCHEMA_VERSION,
            weights: model.weights().to_vec(),
            bias: model.bias(),
            learning_rate: params.learning_rate,
            n_epochs: params.n_epochs,
            seed: params.seed,
            losses: model.losses().to_vec(),
        }
    }
}

impl TryFrom<AdalineSchema> for (AdalineModel, AdalineParams) {
    type Error = ReadError;

    fn try_from(schema: AdalineSchema) -> Result<Self, Self::Error> {
        check_version(schema.version)?;
        if schema.weights.is_empty() {
            return Err(ReadError::Corrupt("model artifact has no weights".into()));
        }
        if schema.weights.iter().any(|w| !w.is_finite()) || !schema.bias.is_finite() {
            return Err(ReadError::Corrupt(
                "model artifact contains non-finite parameters".into(),
            ));
        }

        let model = AdalineModel::from_parts(
            Array1::from(schema.weights),
            schema.bias,
            schema.losses,
        );
        let params = AdalineParams {
            learning_rate: schema.learning_rate,
            n_epochs: schema.n_epochs,
            seed: schema.seed,
            verbosity: Verbosity::default(),
        };
        Ok((model, params))
    }
}

fn check_version(found: u32) -> Result<(), ReadError> {
    if found != SCHEMA_VERSION {
        return Err(ReadError::UnsupportedVersion {
            found,
            supported: SCHEMA_VERSION,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn scaler_schema_round_trips() {
        let scaler =
            StandardScaler::from_parts(array![1.0, 2.0], array![0.5, 4.0]).unwrap();
        let schema = ScalerSchema::from(&scaler);
        let restored = StandardScaler::try_from(schema).unwrap();
        assert_eq!(restored, scaler);
    }

    #[test]
    fn scaler_schema_rejects_future_version() {
        let schema = ScalerSchema {
            version: SCHEMA_VERSION + 1,
            mean: vec![0.0],
            std: vec![1.0],
        };
        assert!(matches!(
            StandardScaler::try_from(schema),
            Err(ReadError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn scaler_schema_rejects_zero_std() {
        let schema = ScalerSchema {
            version: SCHEMA_VERSION,
            mean: vec![0.0],
            std: vec![0.0],
        };
        assert!(matches!(
            StandardScaler::try_from(schema),
            Err(ReadError::Corrupt(_))
        ));
    }

    #[test]
    fn model_schema_round_trips() {
        let model = AdalineModel::from_parts(array![0.25, -0.75], 0.125, vec![0.5, 0.25]);
        let params = AdalineParams {
            learning_rate: 0.05,
            n_epochs: 40,
            seed: 9,
            ..Default::default()
        };
        let schema = AdalineSchema::new(&model, &params);
        let (restored_model, restored_params) =
            <(AdalineModel, AdalineParams)>::try_from(schema).unwrap();
        assert_eq!(restored_model, model);
        assert_eq!(restored_params.learning_rate, 0.05);
        assert_eq!(restored_params.n_epochs, 40);
        assert_eq!(restored_params.seed, 9);
    }

    #[test]
    fn model_schema_rejects_empty_weights() {
        let schema = AdalineSchema {
            version: SCHEMA_VERSION,
            weights: vec![],
            bias: 0.0,
            learning_rate: 0.01,
            n_epochs: 10,
            seed: 1,
            losses: vec![],
        };
        assert!(matches!(
            <(AdalineModel, AdalineParams)>::try_from(schema),
            Err(ReadError::Corrupt(_))
        ));
    }

    #[test]
    fn model_schema_rejects_non_finite_weights() {
        let schema = AdalineSchema {
            version: SCHEMA_VERSION,
            weights: vec![f32::NAN],
            bias: 0.0,
            learning_rate: 0.01,
            n_epochs: 10,
            seed: 1,
            losses: vec![],
        };
        assert!(matches!(
            <(AdalineModel, AdalineParams)>::try_from(schema),
            Err(ReadError::Corrupt(_))
        ));
    }
}
