pub mod epoch_stats;
pub mod train_config;
pub mod loop_fn;

pub use epoch_stats::EpochStats;
pub use train_config::SimulationConfig;
pub use loop_fn::{simulate_epoch, simulate_training};
