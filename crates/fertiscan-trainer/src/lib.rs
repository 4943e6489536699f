//! # Fertiscan Trainer
//!
//! Offline pipeline that fits the soil fertility classifier: load the CSV
//! dataset, split it with a fixed seed, fit a seeded random forest, log the
//! evaluation report, and persist the model artifact the web predictor
//! consumes.

pub mod trainer;

pub use trainer::{TrainConfig, TrainingSummary, run_training};
