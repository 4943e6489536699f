//! # Fertiscan Core
//!
//! Soil fertility classification engine. Provides the nutrient domain types,
//! CSV dataset loading, the random-forest model wrapper with artifact
//! persistence, and the evaluation metrics shared by the trainer and the
//! web predictor.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fertiscan_core::{FertilityModel, SoilSample};
//!
//! let model = FertilityModel::load("models/soil_fertility_model.bin").unwrap();
//! let sample = SoilSample {
//!     nitrogen: 138.0,
//!     ph: 6.8,
//!     ..SoilSample::default()
//! };
//! let prediction = model.predict(&sample).unwrap();
//! println!("{}: {:?}", prediction.class, prediction.class.crops());
//! ```
pub mod dataset;
pub mod error;
pub mod fertility;
pub mod metrics;
pub mod model;
pub mod sample;

// Re-export primary API
pub use dataset::{LABEL_COLUMN, SoilDataset};
pub use error::{FertiscanError, Result};
pub use fertility::FertilityClass;
pub use metrics::{ClassMetrics, ClassificationReport, ConfusionMatrix};
pub use model::{DEFAULT_SEED, DEFAULT_TREES, FertilityModel, Prediction};
pub use sample::{INPUT_STEP, NUM_FEATURES, Nutrient, SoilSample};
