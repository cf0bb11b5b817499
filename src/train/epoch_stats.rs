use serde::{Serialize, Deserialize};

/// Per-epoch statistics emitted by `simulate_training`.
///
/// When a `progress_tx` channel is configured in `SimulationConfig`, the loop
/// sends one `EpochStats` value at the end of every completed epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Fabricated loss; decays as 0.5 / epoch plus small noise.
    pub loss: f64,
    /// Fabricated accuracy; grows as 0.5 + 0.1 * epoch plus small noise.
    pub accuracy: f64,
    /// Wall-clock duration of this epoch in milliseconds, sleep included.
    pub elapsed_ms: u64,
}
