use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_classifier::{
    RandomForestClassifier, RandomForestClassifierParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;
use tracing::info;

use crate::error::{FertiscanError, Result};
use crate::fertility::FertilityClass;
use crate::sample::SoilSample;

/// Default number of trees in the forest.
pub const DEFAULT_TREES: u16 = 100;

/// Default seed for reproducible fits.
pub const DEFAULT_SEED: u64 = 42;

/// Outcome of a single inference call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    /// Raw label emitted by the classifier.
    pub label: u32,
    /// The label resolved through the presentation table.
    pub class: FertilityClass,
}

/// A fitted random-forest fertility classifier.
///
/// Produced once by the trainer and persisted as a single MessagePack
/// artifact; the web predictor loads it read-only at startup.
#[derive(Debug, Serialize, Deserialize)]
pub struct FertilityModel {
    forest: RandomForestClassifier<f64, u32, DenseMatrix<f64>, Vec<u32>>,
}

impl FertilityModel {
    /// Fits a seeded random forest on the given feature matrix and labels.
    pub fn fit(features: &DenseMatrix<f64>, labels: &[u32], trees: u16, seed: u64) -> Result<Self> {
        let params = RandomForestClassifierParameters::default()
            .with_n_trees(trees)
            .with_seed(seed);

        let y = labels.to_vec();
        let forest = RandomForestClassifier::fit(features, &y, params)
            .map_err(|e| FertiscanError::Training(e.to_string()))?;

        Ok(Self { forest })
    }

    /// Predicts the fertility class of one soil sample.
    pub fn predict(&self, sample: &SoilSample) -> Result<Prediction> {
        let features = vec![sample.to_features().to_vec()];
        let x = DenseMatrix::from_2d_vec(&features)
            .map_err(|e| FertiscanError::Inference(e.to_string()))?;

        let labels = self
            .forest
            .predict(&x)
            .map_err(|e| FertiscanError::Inference(e.to_string()))?;

        let label = labels
            .first()
            .copied()
            .ok_or_else(|| FertiscanError::Inference("classifier returned no label".into()))?;

        Ok(Prediction {
            label,
            class: FertilityClass::from_label(label),
        })
    }

    /// Predicts labels for a whole feature matrix.
    pub fn predict_batch(&self, features: &DenseMatrix<f64>) -> Result<Vec<u32>> {
        self.forest
            .predict(features)
            .map_err(|e| FertiscanError::Inference(e.to_string()))
    }

    /// Serializes the model to a single artifact file, creating parent
    /// directories as needed.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let bytes =
            rmp_serde::to_vec(self).map_err(|e| FertiscanError::ModelSave(e.to_string()))?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| FertiscanError::ModelSave(e.to_string()))?;
            }
        }

        fs::write(path, &bytes).map_err(|e| FertiscanError::ModelSave(e.to_string()))?;
        info!(path = %path.display(), bytes = bytes.len(), "model artifact written");
        Ok(())
    }

    /// Loads a model artifact from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .map_err(|e| FertiscanError::ModelLoad(format!("{}: {e}", path.display())))?;

        rmp_serde::from_slice(&bytes).map_err(|e| FertiscanError::ModelLoad(e.to_string()))
    }
}
