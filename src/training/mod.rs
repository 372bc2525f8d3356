//! Training infrastructure for the linear neuron.
//!
//! This module provides the types needed to fit a model:
//!
//! - [`AdalineTrainer`] / [`AdalineParams`]: batch gradient-descent trainer
//!   and its configuration
//! - [`TrainError`]: failures reported before any parameter is touched
//! - [`Metric`]: trait for evaluating trained models, with [`Mse`] and
//!   [`Accuracy`] implementations
//! - [`TrainingLogger`] / [`Verbosity`]: epoch logging with verbosity levels

mod logger;
mod metrics;
mod trainer;

pub use logger::{TrainingLogger, Verbosity};
pub use metrics::{Accuracy, Metric, Mse};
pub use trainer::{AdalineParams, AdalineTrainer, TrainError, WEIGHT_INIT_STD};
