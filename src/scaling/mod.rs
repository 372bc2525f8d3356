//! Feature standardization.
//!
//! Rescales features to zero mean and unit variance using statistics
//! computed once from training data. The scaler is fit on the raw training
//! matrix and then frozen; inference-time samples are transformed with the
//! identical parameters so they land on the training scale.
//!
//! There is no unfitted scaler: [`StandardScaler::fit`] and the validated
//! [`StandardScaler::from_parts`] are the only constructors, so "transform
//! before fit" cannot be expressed.
//!
//! # Example
//!
//! ```
//! use revline::scaling::StandardScaler;
//! use ndarray::array;
//!
//! // 2 features, 3 samples (feature-major)
//! let features = array![[1.0, 2.0, 3.0], [10.0, 20.0, 30.0]];
//! let scaler = StandardScaler::fit(features.view()).unwrap();
//! let scaled = scaler.transform(features.view()).unwrap();
//!
//! // Each feature row now has mean 0.
//! assert!(scaled.row(0).sum().abs() < 1e-6);
//! ```

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

/// Errors raised while fitting or applying a scaler.
#[derive(Debug, thiserror::Error)]
pub enum ScaleError {
    /// Fit was called on a matrix with no features or no samples.
    #[error("cannot fit scaler on an empty matrix")]
    EmptyInput,

    /// A feature has zero variance; standardizing it would divide by zero.
    #[error("feature {feature} is constant; drop it or fix the training data")]
    ConstantFeature { feature: usize },

    /// Input width differs from the width the scaler was fitted on.
    #[error("feature count mismatch: scaler was fitted on {expected} features, got {got}")]
    FeatureCountMismatch { expected: usize, got: usize },

    /// Parameters fed to [`StandardScaler::from_parts`] are unusable.
    #[error("invalid scaler parameters: {0}")]
    InvalidParameters(String),
}

/// Per-feature standardization parameters, frozen after fit.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: Array1<f32>,
    std: Array1<f32>,
}

impl StandardScaler {
    /// Compute per-feature mean and standard deviation from a feature-major
    /// `[n_features, n_samples]` matrix.
    ///
    /// The standard deviation is the population deviation (divisor `n`).
    ///
    /// # Errors
    ///
    /// - [`ScaleError::EmptyInput`] for a matrix without features or samples
    /// - [`ScaleError::ConstantFeature`] when any feature has zero variance
    pub fn fit(features: ArrayView2<f32>) -> Result<Self, ScaleError> {
        let n_features = features.nrows();
        let n_samples = features.ncols();
        if n_features == 0 || n_samples == 0 {
            return Err(ScaleError::EmptyInput);
        }

        let mut mean = Array1::zeros(n_features);
        let mut std = Array1::zeros(n_features);
        for (feature, row) in features.outer_iter().enumerate() {
            let m = row.sum() / n_samples as f32;
            let var = row.iter().map(|&v| (v - m) * (v - m)).sum::<f32>() / n_samples as f32;
            let s = var.sqrt();
            if s <= f32::EPSILON {
                return Err(ScaleError::ConstantFeature { feature });
            }
            mean[feature] = m;
            std[feature] = s;
        }

        Ok(Self { mean, std })
    }

    /// Rebuild a scaler from previously fitted parameters.
    ///
    /// Used when loading persisted artifacts.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::InvalidParameters`] when the vectors are empty,
    /// disagree in length, or contain a non-positive or non-finite
    /// standard deviation.
    pub fn from_parts(mean: Array1<f32>, std: Array1<f32>) -> Result<Self, ScaleError> {
        if mean.is_empty() {
            return Err(ScaleError::InvalidParameters(
                "mean vector is empty".to_string(),
            ));
        }
        if mean.len() != std.len() {
            return Err(ScaleError::InvalidParameters(format!(
                "mean has {} entries but std has {}",
                mean.len(),
                std.len()
            )));
        }
        if let Some(feature) = std.iter().position(|s| !s.is_finite() || *s <= 0.0) {
            return Err(ScaleError::InvalidParameters(format!(
                "standard deviation for feature {feature} is not a positive finite number"
            )));
        }
        if let Some(feature) = mean.iter().position(|m| !m.is_finite()) {
            return Err(ScaleError::InvalidParameters(format!(
                "mean for feature {feature} is not finite"
            )));
        }
        Ok(Self { mean, std })
    }

    /// Number of features the scaler was fitted on.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.mean.len()
    }

    /// Fitted per-feature means.
    pub fn mean(&self) -> ArrayView1<'_, f32> {
        self.mean.view()
    }

    /// Fitted per-feature standard deviations.
    pub fn std(&self) -> ArrayView1<'_, f32> {
        self.std.view()
    }

    /// Standardize a feature-major matrix with the frozen parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::FeatureCountMismatch`] when the input width
    /// differs from the fitted width.
    pub fn transform(&self, features: ArrayView2<f32>) -> Result<Array2<f32>, ScaleError> {
        self.check_width(features.nrows())?;

        let mut scaled = Array2::zeros(features.raw_dim());
        for (feature, row) in features.outer_iter().enumerate() {
            let m = self.mean[feature];
            let s = self.std[feature];
            scaled.row_mut(feature).assign(&row.mapv(|v| (v - m) / s));
        }
        Ok(scaled)
    }

    /// Standardize a single sample vector (length = n_features).
    pub fn transform_sample(&self, sample: ArrayView1<f32>) -> Result<Array1<f32>, ScaleError> {
        self.check_width(sample.len())?;

        let mut scaled = Array1::zeros(sample.len());
        for (feature, &v) in sample.iter().enumerate() {
            scaled[feature] = (v - self.mean[feature]) / self.std[feature];
        }
        Ok(scaled)
    }

    fn check_width(&self, got: usize) -> Result<(), ScaleError> {
        let expected = self.n_features();
        if got != expected {
            return Err(ScaleError::FeatureCountMismatch { expected, got });
        }
        Ok(())
    }
}
