//! End-to-end review classification pipeline.
//!
//! [`Detector`] composes the three pipeline stages (feature extraction,
//! frozen standardization, and the trained linear neuron) behind the two
//! operations callers actually perform: train on a labeled dataset, and
//! classify review text.
//!
//! Training fits the scaler on the raw feature matrix, standardizes, and
//! fits the model; saving writes the two artifacts (scaler and model) into
//! a directory. Loading reads them back and re-checks that they agree on
//! the feature width, so mixed-up artifacts fail at load rather than at
//! classification time.
//!
//! # Example
//!
//! ```
//! use revline::detector::Detector;
//! use revline::features::FeatureExtractor;
//! use revline::model::Verdict;
//! use revline::training::AdalineParams;
//!
//! let texts = [
//!     "arrived quickly and does what the description says it would do",
//!     "solid build quality for the price, would order from them again",
//!     "slightly smaller than expected but works fine for my desk setup",
//!     "BEST BEST product EVER buy now free shipping guaranteed AMAZING",
//!     "AMAZING deal LIMITED offer buy now buy now free free guaranteed",
//!     "the BEST purchase GUARANTEED amazing free gift LIMITED stock now",
//! ];
//! let verdicts = [
//!     Verdict::Genuine,
//!     Verdict::Genuine,
//!     Verdict::Genuine,
//!     Verdict::Fake,
//!     Verdict::Fake,
//!     Verdict::Fake,
//! ];
//!
//! let dataset = FeatureExtractor::default()
//!     .extract_dataset(&texts, &verdicts)
//!     .unwrap();
//! let detector = Detector::train(&dataset, AdalineParams::default()).unwrap();
//!
//! let prediction = detector.classify("honest review, works as described").unwrap();
//! println!("{} (score {:.3})", prediction.verdict, prediction.score);
//! ```

use std::fs;
use std::path::Path;

use ndarray::ArrayView1;

use crate::data::Dataset;
use crate::features::FeatureExtractor;
use crate::model::{AdalineModel, Prediction};
use crate::persist::{self, ReadError, WriteError};
use crate::scaling::{ScaleError, StandardScaler};
use crate::training::{AdalineParams, AdalineTrainer, TrainError};

/// File name of the standardizer artifact inside a detector directory.
pub const SCALER_ARTIFACT: &str = "scaler.json";

/// File name of the model artifact inside a detector directory.
pub const MODEL_ARTIFACT: &str = "adaline.json";

/// Trained review classifier: extractor + frozen scaler + linear neuron.
///
/// Immutable once constructed; safe to share across threads for concurrent
/// classification.
#[derive(Debug, Clone)]
pub struct Detector {
    extractor: FeatureExtractor,
    scaler: StandardScaler,
    model: AdalineModel,
    params: AdalineParams,
}

impl Detector {
    /// Train a detector on a labeled dataset of raw (unstandardized)
    /// features.
    ///
    /// Fits the scaler on the dataset's feature matrix, standardizes it,
    /// and trains the linear neuron on the result. Uses the default
    /// extractor; chain [`with_extractor`](Self::with_extractor) when the
    /// dataset was built with a custom word list.
    ///
    /// # Errors
    ///
    /// Propagates scaler failures (e.g. a zero-variance feature fails the
    /// training run) and trainer failures as [`TrainError`].
    pub fn train(dataset: &Dataset, params: AdalineParams) -> Result<Self, TrainError> {
        let scaler = StandardScaler::fit(dataset.features())?;
        let standardized = scaler.transform(dataset.features())?;
        let train_set = Dataset::new(standardized.view(), dataset.labels())?;

        let model = AdalineTrainer::new(params).train(&train_set)?;

        Ok(Self {
            extractor: FeatureExtractor::default(),
            scaler,
            model,
            params,
        })
    }

    /// Replace the feature extractor (e.g. a custom suspicious-word list).
    ///
    /// The extractor must match the one used to build the training dataset;
    /// that pairing is the caller's responsibility.
    pub fn with_extractor(mut self, extractor: FeatureExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// The feature extractor used by [`classify`](Self::classify).
    pub fn extractor(&self) -> &FeatureExtractor {
        &self.extractor
    }

    /// The frozen standardizer.
    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    /// The trained model.
    pub fn model(&self) -> &AdalineModel {
        &self.model
    }

    /// The parameters the model was trained with.
    pub fn params(&self) -> &AdalineParams {
        &self.params
    }

    /// Classify a raw review text.
    pub fn classify(&self, text: &str) -> Result<Prediction, ScaleError> {
        let features = self.extractor.extract(text);
        self.classify_features(features.view())
    }

    /// Classify an externally produced raw feature vector.
    ///
    /// The vector must use the same feature order and width as the training
    /// data; it is standardized with the frozen parameters and scored.
    pub fn classify_features(&self, features: ArrayView1<f32>) -> Result<Prediction, ScaleError> {
        let standardized = self.scaler.transform_sample(features)?;
        Ok(self.model.predict_sample(standardized.view()))
    }

    /// Write the scaler and model artifacts into `dir`, creating it if
    /// needed.
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<(), WriteError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        persist::save_scaler_file(dir.join(SCALER_ARTIFACT), &self.scaler)?;
        persist::save_model_file(dir.join(MODEL_ARTIFACT), &self.model, &self.params)
    }

    /// Load a detector from a directory written by [`save`](Self::save).
    ///
    /// Restores the default extractor; chain
    /// [`with_extractor`](Self::with_extractor) to reinstate a custom one.
    ///
    /// # Errors
    ///
    /// [`ReadError`] for missing or corrupt artifacts, including artifacts
    /// that disagree on the feature width.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, ReadError> {
        let dir = dir.as_ref();
        let scaler = persist::load_scaler_file(dir.join(SCALER_ARTIFACT))?;
        let (model, params) = persist::load_model_file(dir.join(MODEL_ARTIFACT))?;

        if scaler.n_features() != model.n_features() {
            return Err(ReadError::Corrupt(format!(
                "scaler covers {} features but model expects {}",
                scaler.n_features(),
                model.n_features()
            )));
        }

        Ok(Self {
            extractor: FeatureExtractor::default(),
            scaler,
            model,
            params,
        })
    }
}
