//! Training pipeline for the fertility classifier.

use std::path::PathBuf;

use anyhow::Context;
use serde::Serialize;
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::model_selection::train_test_split;
use tracing::info;

use fertiscan_core::{
    ClassificationReport, DEFAULT_SEED, DEFAULT_TREES, FertilityModel, SoilDataset, SoilSample,
};

/// Settings for one training run.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    /// CSV dataset with an `Output` label column and twelve feature columns.
    pub dataset: PathBuf,
    /// Where the model artifact is written.
    pub output: PathBuf,
    /// Fraction of samples held out for evaluation.
    pub test_fraction: f32,
    /// Seed shared by the split and the forest.
    pub seed: u64,
    /// Number of trees in the forest.
    pub trees: u16,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from("data/dataset1.csv"),
            output: PathBuf::from("models/soil_fertility_model.bin"),
            test_fraction: 0.2,
            seed: DEFAULT_SEED,
            trees: DEFAULT_TREES,
        }
    }
}

/// Figures produced by a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingSummary {
    pub train_samples: usize,
    pub test_samples: usize,
    pub accuracy: f64,
    pub artifact: PathBuf,
}

/// Loads the dataset, fits the forest, evaluates the held-out split, and
/// persists the artifact.
///
/// A missing or malformed dataset fails the run; this is an offline,
/// supervised step with no recovery path.
pub fn run_training(config: &TrainConfig) -> anyhow::Result<TrainingSummary> {
    let dataset = SoilDataset::from_csv(&config.dataset)
        .with_context(|| format!("loading dataset {}", config.dataset.display()))?;

    info!(
        samples = dataset.len(),
        features = dataset.feature_names().len(),
        "dataset loaded"
    );
    for (label, count) in dataset.class_counts() {
        info!(label, count, "class distribution");
    }

    let x = dataset.to_matrix()?;
    let y = dataset.labels().to_vec();

    let (x_train, x_test, y_train, y_test) =
        train_test_split(&x, &y, config.test_fraction, true, Some(config.seed));
    info!(
        train = y_train.len(),
        test = y_test.len(),
        seed = config.seed,
        "dataset split"
    );

    let model = FertilityModel::fit(&x_train, &y_train, config.trees, config.seed)
        .context("fitting random forest")?;

    let predictions = model.predict_batch(&x_test)?;
    let report = ClassificationReport::from_predictions(&y_test, &predictions);
    info!(accuracy = report.accuracy, "model evaluated");
    info!("classification report:\n{report}");
    info!("confusion matrix:\n{}", report.confusion);

    model
        .save(&config.output)
        .with_context(|| format!("writing artifact {}", config.output.display()))?;

    demo_prediction(&model, &x_test)?;

    Ok(TrainingSummary {
        train_samples: y_train.len(),
        test_samples: y_test.len(),
        accuracy: report.accuracy,
        artifact: config.output.clone(),
    })
}

/// Runs one prediction on the first held-out row and logs the suggested
/// crops, mirroring what the web predictor will serve.
fn demo_prediction(model: &FertilityModel, x_test: &DenseMatrix<f64>) -> anyhow::Result<()> {
    let (rows, cols) = x_test.shape();
    if rows == 0 {
        return Ok(());
    }

    let features: Vec<f64> = (0..cols).map(|col| *x_test.get((0, col))).collect();
    let sample = SoilSample::from_features(&features)?;
    let prediction = model.predict(&sample)?;

    info!(
        label = prediction.label,
        class = %prediction.class,
        crops = ?prediction.class.crops(),
        "sample prediction"
    );
    Ok(())
}
