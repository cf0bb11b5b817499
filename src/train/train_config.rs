use std::sync::mpsc;
use std::sync::{Arc, atomic::AtomicBool};
use std::time::Duration;

use crate::train::epoch_stats::EpochStats;

/// Configuration for a `simulate_training` run.
///
/// # Fields
/// - `epochs`      — number of simulated epochs
/// - `delay`       — pause after each epoch
/// - `progress_tx` — optional channel sender; one `EpochStats` is sent per
///                   completed epoch.  If the receiver is dropped the loop
///                   terminates early.
/// - `stop_flag`   — optional atomic flag; when set to `true` from another
///                   thread the loop terminates after the current epoch.
pub struct SimulationConfig {
    pub epochs: usize,
    pub delay: Duration,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl SimulationConfig {
    /// Creates a minimal `SimulationConfig` with no progress channel and no stop flag.
    pub fn new(epochs: usize, delay: Duration) -> Self {
        SimulationConfig {
            epochs,
            delay,
            progress_tx: None,
            stop_flag: None,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig::new(5, Duration::from_millis(100))
    }
}
