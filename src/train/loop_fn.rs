use std::sync::atomic::Ordering;
use std::time::Instant;

use log::debug;
use rand::Rng;

use crate::math::matrix::Matrix;
use crate::train::epoch_stats::EpochStats;
use crate::train::train_config::SimulationConfig;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Fabricates `(loss, accuracy)` for one epoch.
///
/// Draws exactly two standard normals, loss noise first.
pub fn simulate_epoch<R: Rng + ?Sized>(epoch: usize, rng: &mut R) -> (f64, f64) {
    let e = epoch as f64;
    let loss = 0.5 / e + Matrix::sample_standard_normal(rng) * 0.01;
    let accuracy = 0.5 + 0.1 * e + Matrix::sample_standard_normal(rng) * 0.02;
    (loss, accuracy)
}

/// Runs `config.epochs` simulated epochs and returns the stats of every
/// completed one, in order.
///
/// # Early termination
/// The loop breaks early if:
/// - the `progress_tx` receiver has been dropped, **or**
/// - `config.stop_flag` is set to `true`.
pub fn simulate_training<R: Rng + ?Sized>(
    config: &SimulationConfig,
    rng: &mut R,
) -> Vec<EpochStats> {
    let mut history = Vec::with_capacity(config.epochs);

    for epoch in 1..=config.epochs {
        if stop_requested(config) {
            break;
        }

        let t_start = Instant::now();
        let (loss, accuracy) = simulate_epoch(epoch, rng);
        debug!("epoch {epoch}/{}: loss={loss}, accuracy={accuracy}", config.epochs);

        // Sleep first so elapsed_ms reflects the whole epoch.
        if !config.delay.is_zero() {
            std::thread::sleep(config.delay);
        }

        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            loss,
            accuracy,
            elapsed_ms: t_start.elapsed().as_millis() as u64,
        };
        history.push(stats.clone());

        if let Some(ref tx) = config.progress_tx {
            if tx.send(stats).is_err() {
                debug!("progress receiver dropped after epoch {epoch}");
                break;
            }
        }
    }

    history
}

fn stop_requested(config: &SimulationConfig) -> bool {
    config
        .stop_flag
        .as_ref()
        .map(|flag| flag.load(Ordering::Relaxed))
        .unwrap_or(false)
}
