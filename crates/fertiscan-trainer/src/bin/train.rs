use std::path::PathBuf;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use fertiscan_trainer::{TrainConfig, run_training};

/// Fit the random-forest soil fertility classifier and persist the model
/// artifact consumed by the web predictor.
#[derive(Parser, Debug)]
#[command(name = "train")]
#[command(version)]
#[command(about = "Train the soil fertility classifier")]
struct Cli {
    /// CSV dataset with an `Output` label column and twelve feature columns
    #[arg(short, long, default_value = "data/dataset1.csv")]
    dataset: PathBuf,

    /// Path of the model artifact to write
    #[arg(short, long, default_value = "models/soil_fertility_model.bin")]
    output: PathBuf,

    /// Fraction of samples held out for evaluation
    #[arg(long, default_value_t = 0.2)]
    test_fraction: f32,

    /// Seed shared by the split and the forest
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of trees in the forest
    #[arg(long, default_value_t = 100)]
    trees: u16,
}

fn main() {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting tracing subscriber");

    let config = TrainConfig {
        dataset: cli.dataset,
        output: cli.output,
        test_fraction: cli.test_fraction,
        seed: cli.seed,
        trees: cli.trees,
    };

    if let Err(e) = run_training(&config) {
        eprintln!("Training failed: {e:#}");
        std::process::exit(1);
    }
}
