//! Lexical feature extraction for review text.
//!
//! Maps raw text to a fixed-order numeric vector. The three features are
//! deliberately crude; the signal they target is the over-promotional
//! register of machine-written reviews:
//!
//! 1. `word_count` - whitespace-delimited token count
//! 2. `suspicious_count` - total occurrences of configured marketing terms
//! 3. `capitalized_count` - fully-uppercase tokens ("BUY", "AMAZING")
//!
//! Feature order is a stable contract between training and inference; both
//! sides go through [`FeatureExtractor`], and [`FEATURE_NAMES`] /
//! [`NUM_FEATURES`] are the single source of truth for the layout.
//!
//! The suspicious-word list is constructor state, not module state: a
//! detector trained with a custom list must be paired with the same list at
//! inference time by its caller.

use ndarray::{Array1, Array2};

use crate::data::{Dataset, DatasetError};
use crate::model::Verdict;

/// Number of features produced per review.
pub const NUM_FEATURES: usize = 3;

/// Canonical feature names, in extraction order.
pub const FEATURE_NAMES: [&str; NUM_FEATURES] =
    ["word_count", "suspicious_count", "capitalized_count"];

/// Marketing terms flagged by the default extractor.
pub const DEFAULT_SUSPICIOUS_WORDS: [&str; 6] =
    ["free", "amazing", "best", "buy now", "limited", "guaranteed"];

/// Stateless text-to-vector feature extractor.
///
/// # Example
///
/// ```
/// use revline::features::FeatureExtractor;
///
/// let extractor = FeatureExtractor::default();
/// let features = extractor.extract("AMAZING product, buy now for free");
/// // [word_count, suspicious_count, capitalized_count]
/// assert_eq!(features.to_vec(), vec![6.0, 3.0, 1.0]);
/// ```
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    /// Lowercased terms matched as substrings of the lowercased review.
    suspicious_words: Vec<String>,
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_SUSPICIOUS_WORDS)
    }
}

impl FeatureExtractor {
    /// Create an extractor with a custom suspicious-word list.
    ///
    /// Terms are lowercased once here; matching is case-insensitive.
    /// Multi-word terms ("buy now") are matched as phrases.
    pub fn new<I, S>(suspicious_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            suspicious_words: suspicious_words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// The configured suspicious-word list.
    pub fn suspicious_words(&self) -> &[String] {
        &self.suspicious_words
    }

    /// Extract the feature vector for a single review.
    pub fn extract(&self, text: &str) -> Array1<f32> {
        let lowered = text.to_lowercase();
        let suspicious: usize = self
            .suspicious_words
            .iter()
            .map(|term| lowered.matches(term.as_str()).count())
            .sum();

        let mut words = 0usize;
        let mut capitalized = 0usize;
        for token in text.split_whitespace() {
            words += 1;
            if is_fully_capitalized(token) {
                capitalized += 1;
            }
        }

        Array1::from(vec![words as f32, suspicious as f32, capitalized as f32])
    }

    /// Extract features for a batch of reviews into a feature-major matrix
    /// `[NUM_FEATURES, n_samples]`.
    pub fn extract_batch<S: AsRef<str>>(&self, texts: &[S]) -> Array2<f32> {
        let mut features = Array2::zeros((NUM_FEATURES, texts.len()));
        for (sample, text) in texts.iter().enumerate() {
            let vector = self.extract(text.as_ref());
            features.column_mut(sample).assign(&vector);
        }
        features
    }

    /// Assemble a labeled dataset from reviews and their verdicts.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::ShapeMismatch`] when the verdict count
    /// differs from the review count.
    pub fn extract_dataset<S: AsRef<str>>(
        &self,
        texts: &[S],
        verdicts: &[Verdict],
    ) -> Result<Dataset, DatasetError> {
        if verdicts.len() != texts.len() {
            return Err(DatasetError::ShapeMismatch {
                expected: texts.len(),
                got: verdicts.len(),
                field: "labels",
            });
        }

        let features = self.extract_batch(texts);
        let labels: Array1<f32> = verdicts.iter().map(|v| v.label()).collect();
        let ds = Dataset::new(features.view(), Some(labels.view()))?;
        Ok(ds.with_feature_names(FEATURE_NAMES.to_vec()))
    }
}

/// A token counts as capitalized when it contains at least one alphabetic
/// character and every alphabetic character is uppercase ("USA!" yes,
/// "Usa" no, "123" no).
fn is_fully_capitalized(token: &str) -> bool {
    let mut has_alpha = false;
    for c in token.chars() {
        if c.is_alphabetic() {
            has_alpha = true;
            if !c.is_uppercase() {
                return false;
            }
        }
    }
    has_alpha
}
