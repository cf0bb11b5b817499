pub mod error;
pub mod math;
pub mod data;
pub mod train;
pub mod report;
pub mod config;
pub mod runner;

// Convenience re-exports
pub use error::{Error, Result};
pub use math::matrix::Matrix;
pub use data::synthetic::SyntheticDataset;
pub use train::{EpochStats, SimulationConfig, simulate_training};
pub use report::{Language, OutputFormat, Reporter};
pub use config::SmokeConfig;
pub use runner::{run, RunSummary};
