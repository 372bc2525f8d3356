//! Dataset container for training and inference.
//!
//! This module provides [`Dataset`], the validated feature/label container
//! consumed by the scaler and the trainer.
//!
//! # Storage Layout
//!
//! Features are stored in **feature-major** layout: `[n_features, n_samples]`.
//! Each feature's values across all samples are contiguous in memory, which
//! is the access pattern of both standardization (per-feature statistics)
//! and the gradient update (per-feature accumulation).
//!
//! Labels are binary: `1.0` marks a genuine review, `0.0` a
//! computer-generated one. Construction rejects anything else, so code
//! downstream of a `Dataset` never re-validates.
//!
//! # Example
//!
//! ```
//! use revline::data::Dataset;
//! use ndarray::array;
//!
//! // Feature-major: 2 features, 3 samples
//! let features = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
//! let labels = array![1.0, 0.0, 1.0];
//! let ds = Dataset::new(features.view(), Some(labels.view())).unwrap();
//!
//! assert_eq!(ds.n_samples(), 3);
//! assert_eq!(ds.n_features(), 2);
//! ```

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Errors raised while assembling a dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The feature matrix has zero rows.
    #[error("dataset has no features")]
    EmptyFeatures,

    /// Two parts of the dataset disagree on the sample count.
    #[error("{field} length mismatch: expected {expected}, got {got}")]
    ShapeMismatch {
        expected: usize,
        got: usize,
        field: &'static str,
    },

    /// A label was neither 0 nor 1.
    #[error("label at index {index} is {value}, expected 0 or 1")]
    InvalidLabel { index: usize, value: f32 },
}

/// Validated feature/label container.
///
/// Holds an owned feature matrix in feature-major layout
/// `[n_features, n_samples]` and an optional binary label vector. Invalid
/// combinations (mismatched sample counts, non-binary labels) are rejected
/// at construction, so a `Dataset` in hand is always internally consistent.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Feature data: `[n_features, n_samples]`.
    features: Array2<f32>,

    /// Binary labels, length = n_samples. Absent for inference-only data.
    labels: Option<Array1<f32>>,

    /// Optional feature names, length = n_features.
    feature_names: Option<Vec<String>>,
}

impl Dataset {
    /// Create a dataset from feature-major data.
    ///
    /// # Arguments
    ///
    /// * `features` - Feature matrix `[n_features, n_samples]`
    /// * `labels` - Optional label vector (length = n_samples, entries 0 or 1)
    ///
    /// # Errors
    ///
    /// - [`DatasetError::EmptyFeatures`] if the matrix has zero feature rows
    /// - [`DatasetError::ShapeMismatch`] if the label count differs from the
    ///   sample count
    /// - [`DatasetError::InvalidLabel`] if any label is not exactly 0 or 1
    pub fn new(
        features: ArrayView2<f32>,
        labels: Option<ArrayView1<f32>>,
    ) -> Result<Self, DatasetError> {
        if features.nrows() == 0 {
            return Err(DatasetError::EmptyFeatures);
        }

        let n_samples = features.ncols();
        if let Some(ref l) = labels {
            if l.len() != n_samples {
                return Err(DatasetError::ShapeMismatch {
                    expected: n_samples,
                    got: l.len(),
                    field: "labels",
                });
            }
            for (index, &value) in l.iter().enumerate() {
                if value != 0.0 && value != 1.0 {
                    return Err(DatasetError::InvalidLabel { index, value });
                }
            }
        }

        Ok(Self {
            features: features.to_owned(),
            labels: labels.map(|l| l.to_owned()),
            feature_names: None,
        })
    }

    /// Create a dataset from sample-major records `[n_samples, n_features]`.
    ///
    /// Convenience for callers that assemble one row per review; the data is
    /// transposed into the internal feature-major layout.
    pub fn from_records(
        records: ArrayView2<f32>,
        labels: Option<ArrayView1<f32>>,
    ) -> Result<Self, DatasetError> {
        let feature_major = records.t().to_owned();
        Self::new(feature_major.view(), labels)
    }

    /// Attach feature names.
    ///
    /// # Panics
    ///
    /// Debug-asserts that the name count matches `n_features`.
    pub fn with_feature_names<S: Into<String>>(mut self, names: Vec<S>) -> Self {
        debug_assert_eq!(
            names.len(),
            self.n_features(),
            "feature name count must match n_features"
        );
        self.feature_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Number of samples.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.features.ncols()
    }

    /// Number of features.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.features.nrows()
    }

    /// Check if the dataset carries labels.
    pub fn has_labels(&self) -> bool {
        self.labels.is_some()
    }

    /// View of the feature data, `[n_features, n_samples]`.
    pub fn features(&self) -> ArrayView2<'_, f32> {
        self.features.view()
    }

    /// View of the labels, if present.
    pub fn labels(&self) -> Option<ArrayView1<'_, f32>> {
        self.labels.as_ref().map(|l| l.view())
    }

    /// Feature names, if attached.
    pub fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }
}
