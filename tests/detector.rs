//! End-to-end pipeline tests: train on a synthetic corpus, classify text,
//! survive a save/load cycle.

use revline::detector::{Detector, MODEL_ARTIFACT, SCALER_ARTIFACT};
use revline::features::FeatureExtractor;
use revline::model::Verdict;
use revline::persist::{self, ReadError};
use revline::testing::synthetic_reviews;
use revline::training::{AdalineParams, AdalineTrainer, Metric, Accuracy};
use revline::data::Dataset;
use revline::scaling::StandardScaler;

use ndarray::array;

fn trained_detector() -> Detector {
    let (texts, verdicts) = synthetic_reviews(20, 20, 7);
    let dataset = FeatureExtractor::default()
        .extract_dataset(&texts, &verdicts)
        .unwrap();

    let params = AdalineParams {
        learning_rate: 0.05,
        n_epochs: 300,
        seed: 2,
        ..Default::default()
    };
    Detector::train(&dataset, params).unwrap()
}

#[test]
fn detector_separates_obvious_cases() {
    let detector = trained_detector();

    let fake = detector
        .classify("AMAZING AMAZING best best buy now free guaranteed LIMITED")
        .unwrap();
    assert_eq!(fake.verdict, Verdict::Fake);
    assert!(fake.score < 0.5);

    let genuine = detector
        .classify("arrived on time and works exactly as described in the listing with no problems")
        .unwrap();
    assert_eq!(genuine.verdict, Verdict::Genuine);
    assert!(genuine.score >= 0.5);
}

#[test]
fn detector_fits_its_training_corpus() {
    let (texts, verdicts) = synthetic_reviews(20, 20, 7);
    let dataset = FeatureExtractor::default()
        .extract_dataset(&texts, &verdicts)
        .unwrap();

    let params = AdalineParams {
        learning_rate: 0.05,
        n_epochs: 300,
        seed: 2,
        ..Default::default()
    };
    let detector = Detector::train(&dataset, params).unwrap();

    let scores: Vec<f32> = texts
        .iter()
        .map(|t| detector.classify(t).unwrap().score)
        .collect();
    let labels: Vec<f32> = verdicts.iter().map(|v| v.label()).collect();

    let accuracy = Accuracy.compute(&scores, &labels);
    assert!(accuracy >= 0.9, "training accuracy {accuracy} too low");
}

#[test]
fn save_load_preserves_classification_exactly() {
    let detector = trained_detector();
    let dir = tempfile::tempdir().unwrap();
    detector.save(dir.path()).unwrap();

    let loaded = Detector::load(dir.path()).unwrap();

    for text in [
        "the BEST purchase GUARANTEED amazing free gift LIMITED stock now",
        "happy with how it held up through regular handling",
    ] {
        let before = detector.classify(text).unwrap();
        let after = loaded.classify(text).unwrap();
        assert_eq!(before.verdict, after.verdict);
        // Artifacts round-trip bit-exactly, so scores match bit-exactly.
        assert_eq!(before.score, after.score);
    }
}

#[test]
fn load_from_missing_directory_fails_with_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Detector::load(dir.path().join("nope"));
    assert!(matches!(result, Err(ReadError::Io(_))));
}

#[test]
fn load_rejects_artifacts_with_mismatched_widths() {
    let dir = tempfile::tempdir().unwrap();

    // Scaler over 2 features.
    let scaler = StandardScaler::from_parts(array![0.0, 0.0], array![1.0, 1.0]).unwrap();
    persist::save_scaler_file(dir.path().join(SCALER_ARTIFACT), &scaler).unwrap();

    // Model over 3 features, trained on a tiny standardized set.
    let features = array![
        [1.0, -1.0],
        [-1.0, 1.0],
        [1.0, -1.0],
    ];
    let labels = array![1.0, 0.0];
    let dataset = Dataset::new(features.view(), Some(labels.view())).unwrap();
    let params = AdalineParams::default();
    let model = AdalineTrainer::new(params).train(&dataset).unwrap();
    persist::save_model_file(dir.path().join(MODEL_ARTIFACT), &model, &params).unwrap();

    let result = Detector::load(dir.path());
    assert!(matches!(result, Err(ReadError::Corrupt(_))));
}

#[test]
fn custom_extractor_survives_reattachment() {
    let words = ["unbeatable", "miracle"];
    let extractor = FeatureExtractor::new(words);
    let (texts, verdicts) = synthetic_reviews(10, 10, 5);
    // Corpus built with the default list still trains fine; the point here
    // is that the custom extractor is what classify() consults.
    let dataset = FeatureExtractor::default()
        .extract_dataset(&texts, &verdicts)
        .unwrap();
    let detector = Detector::train(&dataset, AdalineParams::default())
        .unwrap()
        .with_extractor(extractor);

    assert_eq!(detector.extractor().suspicious_words(), ["unbeatable", "miracle"]);
}
