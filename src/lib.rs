//! revline: fake-review detection with a linear neuron.
//!
//! Classifies short review texts as genuine or computer-generated using
//! three handcrafted lexical features, feature standardization, and an
//! adaptive linear neuron trained by full-batch gradient descent.
//!
//! # Key Types
//!
//! - [`Detector`] - End-to-end pipeline with train/classify/save/load
//! - [`AdalineTrainer`] / [`AdalineParams`] - The gradient-descent trainer
//! - [`AdalineModel`] - Trained weights, bias, and loss history
//! - [`StandardScaler`] - Frozen zero-mean/unit-variance feature scaling
//! - [`FeatureExtractor`] - Text to fixed-order feature vectors
//! - [`Dataset`] - Validated feature/label container
//!
//! # Pipeline
//!
//! Training runs extract → fit scaler → fit learner → persist; inference
//! runs extract → frozen transform → score → threshold. See the [`detector`]
//! module for the end-to-end API and the [`training`] module for the
//! learning algorithm itself.
//!
//! ```
//! use revline::{AdalineParams, Dataset, Detector};
//! use ndarray::array;
//!
//! // One row per review: [word_count, suspicious_count, capitalized_count]
//! let records = array![
//!     [14.0, 0.0, 0.0],
//!     [11.0, 1.0, 0.0],
//!     [5.0, 4.0, 3.0],
//!     [7.0, 6.0, 2.0],
//! ];
//! let labels = array![1.0, 1.0, 0.0, 0.0];
//! let dataset = Dataset::from_records(records.view(), Some(labels.view())).unwrap();
//!
//! let detector = Detector::train(&dataset, AdalineParams::default()).unwrap();
//! let prediction = detector.classify_features(array![12.0, 0.0, 1.0].view()).unwrap();
//! assert!(prediction.verdict.is_genuine());
//! ```

// Re-export approx traits for users who want to compare scores and weights
pub use approx;

pub mod data;
pub mod detector;
pub mod features;
pub mod model;
pub mod persist;
pub mod scaling;
pub mod testing;
pub mod training;

// =============================================================================
// Convenience Re-exports
// =============================================================================

// High-level pipeline
pub use detector::Detector;

// Core model and training types
pub use model::{AdalineModel, Prediction, Verdict, DECISION_THRESHOLD};
pub use training::{AdalineParams, AdalineTrainer, TrainError, Verbosity};

// Pipeline stages
pub use features::{FeatureExtractor, FEATURE_NAMES, NUM_FEATURES};
pub use scaling::{ScaleError, StandardScaler};

// Data handling
pub use data::{Dataset, DatasetError};

// Persistence
pub use persist::{ReadError, WriteError};
