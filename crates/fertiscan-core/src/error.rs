use thiserror::Error;

use crate::sample::Nutrient;

/// Errors that can occur during fertiscan core operations.
#[derive(Debug, Error)]
pub enum FertiscanError {
    /// The dataset file could not be read.
    #[error("failed to read dataset: {0}")]
    DatasetIo(#[from] std::io::Error),

    /// The dataset file is not valid CSV.
    #[error("failed to parse dataset: {0}")]
    DatasetFormat(#[from] csv::Error),

    /// The dataset header lacks a required column.
    #[error("dataset is missing required column {column:?}")]
    MissingColumn {
        /// The column that was not found in the header.
        column: String,
    },

    /// The dataset does not carry the expected number of feature columns.
    #[error("expected {expected} feature columns, found {found}")]
    FeatureCount { expected: usize, found: usize },

    /// A cell could not be parsed as a number.
    #[error("row {row}, column {column:?}: invalid value {value:?}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    /// The dataset contains a header but no samples.
    #[error("dataset contains no samples")]
    EmptyDataset,

    /// A nutrient reading falls outside its accepted range.
    #[error("{nutrient} reading {value} is outside 0..={max}")]
    OutOfRange {
        nutrient: Nutrient,
        value: f64,
        max: f64,
    },

    /// The model artifact could not be loaded.
    #[error("failed to load model: {0}")]
    ModelLoad(String),

    /// The model artifact could not be saved.
    #[error("failed to save model: {0}")]
    ModelSave(String),

    /// Fitting the classifier failed.
    #[error("training error: {0}")]
    Training(String),

    /// Running the classifier failed.
    #[error("inference error: {0}")]
    Inference(String),
}

/// Result type alias for fertiscan operations.
pub type Result<T> = std::result::Result<T, FertiscanError>;
