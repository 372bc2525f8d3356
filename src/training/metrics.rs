//! Evaluation metrics for trained models.
//!
//! Metrics are separate from the training loss: the trainer always
//! minimizes squared error, but callers may want to monitor a different
//! quantity over held-out data.

use crate::model::{Verdict, DECISION_THRESHOLD};

/// A metric computed from activation scores and ground-truth labels.
pub trait Metric: Send + Sync {
    /// Compute the metric value.
    ///
    /// `scores` are raw activations, `labels` the matching 0/1 targets.
    fn compute(&self, scores: &[f32], labels: &[f32]) -> f64;

    /// Whether higher values indicate better performance.
    fn higher_is_better(&self) -> bool;

    /// Name of the metric (for logging).
    fn name(&self) -> &'static str;
}

/// Mean squared error between scores and labels. Lower is better.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mse;

impl Metric for Mse {
    fn compute(&self, scores: &[f32], labels: &[f32]) -> f64 {
        debug_assert_eq!(scores.len(), labels.len());
        if scores.is_empty() {
            return 0.0;
        }
        scores
            .iter()
            .zip(labels.iter())
            .map(|(s, l)| {
                let diff = (*s as f64) - (*l as f64);
                diff * diff
            })
            .sum::<f64>()
            / scores.len() as f64
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "mse"
    }
}

/// Fraction of samples whose thresholded score matches the label.
/// Higher is better.
#[derive(Debug, Clone, Copy, Default)]
pub struct Accuracy;

impl Metric for Accuracy {
    fn compute(&self, scores: &[f32], labels: &[f32]) -> f64 {
        debug_assert_eq!(scores.len(), labels.len());
        if scores.is_empty() {
            return 0.0;
        }
        let correct = scores
            .iter()
            .zip(labels.iter())
            .filter(|(s, l)| Verdict::from_score(**s).label() == **l)
            .count();
        correct as f64 / scores.len() as f64
    }

    fn higher_is_better(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "accuracy"
    }
}
