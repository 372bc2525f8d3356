//! Adaline model data structure and inference.
//!
//! [`AdalineModel`] is the trained state of the adaptive linear neuron:
//! a weight vector, a scalar bias, and the per-epoch loss history recorded
//! during training. It is produced by
//! [`AdalineTrainer::train`](crate::training::AdalineTrainer::train) or by
//! loading a persisted artifact; there is no untrained instance.
//!
//! The activation is the identity function: the neuron regresses toward the
//! {0, 1} target and [`predict`](AdalineModel::predict) thresholds the raw
//! activation at [`DECISION_THRESHOLD`]. The activation value doubles as the
//! confidence score: closer to 1 means more confidently genuine, closer to 0
//! more confidently fake. It is not a calibrated probability and can leave
//! the [0, 1] interval.

use ndarray::{Array1, ArrayView1, ArrayView2};

/// Scores at or above this activation classify as genuine.
pub const DECISION_THRESHOLD: f32 = 0.5;

/// Binary classification outcome.
///
/// Numeric label mapping: genuine = 1, fake = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Computer-generated review.
    Fake,
    /// Human-written review.
    Genuine,
}

impl Verdict {
    /// Threshold an activation score into a verdict.
    #[inline]
    pub fn from_score(score: f32) -> Self {
        if score >= DECISION_THRESHOLD {
            Verdict::Genuine
        } else {
            Verdict::Fake
        }
    }

    /// Numeric training label (1 for genuine, 0 for fake).
    #[inline]
    pub fn label(self) -> f32 {
        match self {
            Verdict::Genuine => 1.0,
            Verdict::Fake => 0.0,
        }
    }

    /// Whether this verdict marks a genuine review.
    #[inline]
    pub fn is_genuine(self) -> bool {
        matches!(self, Verdict::Genuine)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Genuine => f.write_str("genuine"),
            Verdict::Fake => f.write_str("fake"),
        }
    }
}

/// A verdict together with the raw activation that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub verdict: Verdict,
    /// Raw activation; distance from [`DECISION_THRESHOLD`] indicates
    /// confidence in the corresponding direction.
    pub score: f32,
}

/// Trained adaptive linear neuron (weights + bias + loss history).
#[derive(Debug, Clone, PartialEq)]
pub struct AdalineModel {
    /// Learned weights, one per feature.
    weights: Array1<f32>,

    /// Learned bias unit.
    bias: f32,

    /// Mean squared error per training epoch, in epoch order.
    losses: Vec<f32>,
}

impl AdalineModel {
    /// Assemble a model from learned parameters.
    ///
    /// # Panics
    ///
    /// Panics if `weights` is empty.
    pub fn from_parts(weights: Array1<f32>, bias: f32, losses: Vec<f32>) -> Self {
        assert!(!weights.is_empty(), "model must have at least one weight");
        Self {
            weights,
            bias,
            losses,
        }
    }

    /// Number of input features.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// Learned weight vector.
    pub fn weights(&self) -> ArrayView1<'_, f32> {
        self.weights.view()
    }

    /// Learned bias.
    #[inline]
    pub fn bias(&self) -> f32 {
        self.bias
    }

    /// Per-epoch mean squared error recorded during training.
    ///
    /// Empty for models rebuilt from artifacts that omit the history.
    pub fn losses(&self) -> &[f32] {
        &self.losses
    }

    /// Compute the net input `w · X + b` over a feature-major
    /// `[n_features, n_samples]` view.
    ///
    /// # Panics
    ///
    /// Panics if the input width differs from the trained feature count.
    pub fn net_input(&self, features: ArrayView2<f32>) -> Array1<f32> {
        assert_eq!(
            features.nrows(),
            self.n_features(),
            "input has {} features, model was trained on {}",
            features.nrows(),
            self.n_features()
        );
        self.weights.dot(&features) + self.bias
    }

    /// Linear activation: the identity function on the net input.
    #[inline]
    pub fn activation(&self, net_input: Array1<f32>) -> Array1<f32> {
        net_input
    }

    /// Activation scores for a batch, one per sample.
    pub fn decision_scores(&self, features: ArrayView2<f32>) -> Array1<f32> {
        self.activation(self.net_input(features))
    }

    /// Activation score for a single sample vector.
    ///
    /// # Panics
    ///
    /// Panics if the sample length differs from the trained feature count.
    pub fn decision_score(&self, sample: ArrayView1<f32>) -> f32 {
        assert_eq!(
            sample.len(),
            self.n_features(),
            "sample has {} features, model was trained on {}",
            sample.len(),
            self.n_features()
        );
        self.weights.dot(&sample) + self.bias
    }

    /// Classify a batch of standardized samples.
    pub fn predict(&self, features: ArrayView2<f32>) -> Vec<Verdict> {
        self.decision_scores(features)
            .iter()
            .map(|&score| Verdict::from_score(score))
            .collect()
    }

    /// Classify a single standardized sample, returning verdict and score.
    pub fn predict_sample(&self, sample: ArrayView1<f32>) -> Prediction {
        let score = self.decision_score(sample);
        Prediction {
            verdict: Verdict::from_score(score),
            score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn make_model() -> AdalineModel {
        // score = 0.75*x0 - 0.25*x1 - 0.5*x2 + 0.5
        AdalineModel::from_parts(array![0.75, -0.25, -0.5], 0.5, vec![])
    }

    #[test]
    fn net_input_is_affine() {
        let model = make_model();
        let features = array![[1.0, 0.0], [0.0, 1.0], [0.0, 0.0]];
        let net = model.net_input(features.view());
        assert_eq!(net.to_vec(), vec![1.25, 0.25]);
    }

    #[test]
    fn activation_is_identity() {
        let model = make_model();
        let z = array![0.1, -2.0, 7.5];
        assert_eq!(model.activation(z.clone()), z);
    }

    #[test]
    fn predict_thresholds_at_half() {
        let model = make_model();
        // Scores: 1.25, 0.25, and exactly 0.5 (zero vector hits the bias).
        let features = array![[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]];
        let verdicts = model.predict(features.view());
        assert_eq!(
            verdicts,
            vec![Verdict::Genuine, Verdict::Fake, Verdict::Genuine]
        );
    }

    #[test]
    fn predict_sample_reports_score() {
        let model = make_model();
        let p = model.predict_sample(array![1.0, 0.0, 0.0].view());
        assert_eq!(p.verdict, Verdict::Genuine);
        assert_eq!(p.score, 1.25);
    }

    #[test]
    fn verdict_labels_are_binary() {
        assert_eq!(Verdict::Genuine.label(), 1.0);
        assert_eq!(Verdict::Fake.label(), 0.0);
        assert!(Verdict::Genuine.is_genuine());
        assert_eq!(Verdict::from_score(0.4999), Verdict::Fake);
        assert_eq!(Verdict::from_score(0.5), Verdict::Genuine);
    }

    #[test]
    fn verdict_display() {
        assert_eq!(Verdict::Genuine.to_string(), "genuine");
        assert_eq!(Verdict::Fake.to_string(), "fake");
    }

    #[test]
    #[should_panic(expected = "at least one weight")]
    fn from_parts_rejects_empty_weights() {
        AdalineModel::from_parts(Array1::zeros(0), 0.0, vec![]);
    }

    #[test]
    #[should_panic(expected = "features")]
    fn net_input_rejects_width_mismatch() {
        let model = make_model();
        let features = array![[1.0], [2.0]];
        model.net_input(features.view());
    }
}
