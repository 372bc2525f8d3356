//! Batch gradient-descent trainer for the adaptive linear neuron.
//!
//! Every epoch sees the full training set in the same order: the trainer
//! computes activations over all samples, forms the residuals against the
//! 0/1 labels, and applies one mean-squared-error gradient step to the
//! weights and the bias. There is no mini-batching, no shuffling, no early
//! stopping. Training always runs the configured epoch count and records
//! one loss value per epoch.
//!
//! # Example
//!
//! ```
//! use revline::data::Dataset;
//! use revline::training::{AdalineParams, AdalineTrainer};
//! use ndarray::array;
//!
//! // 2 features, 4 samples, standardized to roughly zero mean.
//! let features = array![
//!     [1.0, -1.0, 1.0, -1.0],
//!     [-1.0, 1.0, -1.0, 1.0],
//! ];
//! let labels = array![1.0, 0.0, 1.0, 0.0];
//! let dataset = Dataset::new(features.view(), Some(labels.view())).unwrap();
//!
//! let params = AdalineParams {
//!     n_epochs: 50,
//!     ..Default::default()
//! };
//! let model = AdalineTrainer::new(params).train(&dataset).unwrap();
//! assert_eq!(model.losses().len(), 50);
//! ```

use ndarray::Array1;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::data::Dataset;
use crate::model::AdalineModel;
use crate::scaling::ScaleError;

use super::{TrainingLogger, Verbosity};

/// Standard deviation of the Gaussian used for weight initialization.
pub const WEIGHT_INIT_STD: f32 = 0.01;

/// Errors reported by [`AdalineTrainer::train`] before any computation.
#[derive(Debug, thiserror::Error)]
pub enum TrainError {
    /// The dataset carries no labels.
    #[error("dataset has no labels; training requires a labeled dataset")]
    MissingLabels,

    /// The dataset has zero samples.
    #[error("dataset has no samples")]
    EmptyDataset,

    /// The learning rate is not a positive finite number.
    #[error("learning rate must be a positive finite number, got {got}")]
    InvalidLearningRate { got: f32 },

    /// Standardization failed while preparing pipeline training data.
    #[error(transparent)]
    Scale(#[from] ScaleError),

    /// Dataset assembly failed while preparing pipeline training data.
    #[error(transparent)]
    Dataset(#[from] crate::data::DatasetError),
}

/// Parameters for Adaline training.
///
/// Use struct construction with `..Default::default()` for convenient
/// configuration.
///
/// # Example
///
/// ```
/// use revline::training::{AdalineParams, Verbosity};
///
/// let params = AdalineParams {
///     learning_rate: 0.05,
///     n_epochs: 200,
///     ..Default::default()
/// };
/// assert_eq!(params.verbosity, Verbosity::Silent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdalineParams {
    /// Step size for gradient updates. Must be positive; values well below
    /// 1.0 are the stable range for standardized features.
    pub learning_rate: f32,

    /// Number of passes over the full training set. Training always runs
    /// exactly this many epochs.
    pub n_epochs: u32,

    /// Seed for the weight-initialization generator. The same seed over the
    /// same data reproduces the trained model exactly.
    pub seed: u64,

    /// Verbosity level for training output.
    pub verbosity: Verbosity,
}

impl Default for AdalineParams {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            n_epochs: 100,
            seed: 1,
            verbosity: Verbosity::default(),
        }
    }
}

/// Full-batch gradient-descent trainer.
///
/// Owns its parameters; each [`train`](Self::train) call produces a fresh
/// [`AdalineModel`] and never touches previously trained models.
#[derive(Debug, Clone)]
pub struct AdalineTrainer {
    params: AdalineParams,
}

impl AdalineTrainer {
    /// Create a trainer with the given parameters.
    pub fn new(params: AdalineParams) -> Self {
        Self { params }
    }

    /// The trainer's parameters.
    pub fn params(&self) -> &AdalineParams {
        &self.params
    }

    /// Fit a model on a labeled, standardized dataset.
    ///
    /// Runs exactly `n_epochs` epochs of full-batch gradient descent on the
    /// mean squared error. Per epoch, with `N` samples:
    ///
    /// 1. `output = activation(w · X + b)` over the whole set
    /// 2. `errors = y - output`
    /// 3. `w += lr * 2 * (X · errors) / N`
    /// 4. `b += lr * 2 * mean(errors)`
    /// 5. append `mean(errors²)` to the loss history
    ///
    /// # Errors
    ///
    /// [`TrainError::MissingLabels`], [`TrainError::EmptyDataset`], or
    /// [`TrainError::InvalidLearningRate`], all raised before any
    /// computation starts.
    pub fn train(&self, dataset: &Dataset) -> Result<AdalineModel, TrainError> {
        let labels = dataset.labels().ok_or(TrainError::MissingLabels)?;
        let n_samples = dataset.n_samples();
        if n_samples == 0 {
            return Err(TrainError::EmptyDataset);
        }

        let lr = self.params.learning_rate;
        if !lr.is_finite() || lr <= 0.0 {
            return Err(TrainError::InvalidLearningRate { got: lr });
        }

        let features = dataset.features();
        let n_features = dataset.n_features();
        let n_epochs = self.params.n_epochs as usize;

        // Small random weights break the symmetry between features while
        // keeping initial activations near zero.
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(self.params.seed);
        let normal =
            Normal::new(0.0f32, WEIGHT_INIT_STD).expect("weight init std is a valid constant");
        let mut weights: Array1<f32> =
            Array1::from_iter((0..n_features).map(|_| normal.sample(&mut rng)));
        let mut bias = 0.0f32;
        let mut losses = Vec::with_capacity(n_epochs);

        let logger = TrainingLogger::new(self.params.verbosity);
        logger.start_training(n_epochs);

        for epoch in 0..n_epochs {
            // Identity activation: the output is the net input itself.
            let output = weights.dot(&features) + bias;
            let errors = &labels - &output;

            let gradient = features.dot(&errors);
            weights.scaled_add(lr * 2.0 / n_samples as f32, &gradient);
            bias += lr * 2.0 * errors.sum() / n_samples as f32;

            let loss = errors.dot(&errors) / n_samples as f32;
            losses.push(loss);
            logger.log_epoch(epoch, n_epochs, loss);
        }

        logger.finish_training(losses.last().copied());

        Ok(AdalineModel::from_parts(weights, bias, losses))
    }
}
