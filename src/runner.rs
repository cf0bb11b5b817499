use std::io::Write;
use std::sync::mpsc;
use std::thread;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::SmokeConfig;
use crate::data::SyntheticDataset;
use crate::error::{Error, Result};
use crate::math::stats;
use crate::report::{Reporter, Section};
use crate::train::{simulate_training, EpochStats, SimulationConfig};

/// What a run computed, for callers that want values rather than text.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub mean: f64,
    pub std: f64,
    pub epochs: Vec<EpochStats>,
    pub features_shape: (usize, usize),
    pub labels_shape: (usize,),
    pub classes: Vec<u32>,
}

/// Runs the full smoke report into `out`.
///
/// One `StdRng` seeded from `config.seed` feeds the dataset first and the
/// training simulation second, so a seed pins the entire output.
///
/// The simulation runs on its own thread and streams `EpochStats` back over a
/// channel; each epoch is written as soon as it arrives.
pub fn run<W: Write>(config: &SmokeConfig, out: W) -> Result<RunSummary> {
    config.validate()?;
    let mut reporter = Reporter::new(out, config.format, config.language);

    reporter.banner(&config.title)?;

    // ── Test 1: array statistics ───────────────────────────────────────────
    reporter.section(Section::Numeric)?;
    let mean = stats::mean(&config.values)?;
    let std = stats::std_dev(&config.values)?;
    reporter.array_stats(&config.values, mean, std)?;

    // ── Test 2: training simulation ────────────────────────────────────────
    reporter.section(Section::Training)?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    info!("seeded rng with {}", config.seed);

    let dataset = SyntheticDataset::generate(config.dataset_spec(), &mut rng);
    debug!(
        "generated dataset: x {:?}, y {:?}",
        dataset.features_shape(),
        dataset.labels_shape()
    );

    let epochs = stream_simulation(config, rng, &mut reporter)?;

    // ── Test 3: data statistics ────────────────────────────────────────────
    reporter.section(Section::DataStats)?;
    let classes = dataset.classes();
    reporter.data_stats(dataset.features_shape(), dataset.labels_shape(), &classes)?;

    reporter.finish()?;
    info!("smoke run complete: {} epochs", epochs.len());

    Ok(RunSummary {
        mean,
        std,
        epochs,
        features_shape: dataset.features_shape(),
        labels_shape: dataset.labels_shape(),
        classes,
    })
}

/// Spawns the simulation, writes epochs as they arrive, then joins.
///
/// A failed write drops the receiver, which makes the worker stop after its
/// next send; the write error is returned once the worker has exited.
fn stream_simulation<W: Write>(
    config: &SmokeConfig,
    mut rng: StdRng,
    reporter: &mut Reporter<W>,
) -> Result<Vec<EpochStats>> {
    let (tx, rx) = mpsc::channel::<EpochStats>();
    let mut sim = SimulationConfig::new(config.epochs, config.epoch_delay());
    sim.progress_tx = Some(tx);

    let handle = thread::spawn(move || simulate_training(&sim, &mut rng));

    let mut write_result = Ok(());
    for stats in rx.iter() {
        if let Err(e) = reporter.epoch(&stats) {
            write_result = Err(e);
            break;
        }
    }
    drop(rx);

    let history = handle
        .join()
        .map_err(|_| Error::Simulation("simulation thread panicked".to_owned()))?;
    write_result?;
    Ok(history)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn quick() -> SmokeConfig {
        SmokeConfig { epoch_delay_ms: 0, ..SmokeConfig::default() }
    }

    #[test]
    fn summary_matches_reference_values() {
        let summary = run(&quick(), Vec::new()).unwrap();
        assert_eq!(summary.mean, 3.0);
        assert_eq!(summary.std, 2f64.sqrt());
        assert_eq!(summary.epochs.len(), 5);
        assert_eq!(summary.features_shape, (100, 10));
        assert_eq!(summary.labels_shape, (100,));
        assert_eq!(summary.classes, vec![0, 1]);
    }

    #[test]
    fn same_seed_same_bytes() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        run(&quick(), &mut a).unwrap();
        run(&quick(), &mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_config_writes_nothing() {
        let mut out = Vec::new();
        let config = SmokeConfig { samples: 0, ..quick() };
        assert!(matches!(run(&config, &mut out), Err(Error::InvalidConfig(_))));
        assert!(out.is_empty());
    }

    struct FailAfter {
        remaining: usize,
    }

    impl Write for FailAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.remaining == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.remaining -= 1;
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn broken_sink_surfaces_io_error() {
        let result = run(&quick(), FailAfter { remaining: 2 });
        assert!(matches!(result, Err(Error::Io(_))));
    }

    /// Accepts bytes until the first epoch line, then refuses every write.
    struct FailOnEpoch {
        written: Vec<u8>,
        failed: bool,
    }

    impl Write for FailOnEpoch {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.failed || String::from_utf8_lossy(buf).contains("Epoch 1") {
                self.failed = true;
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn sink_failing_mid_stream_stops_worker() {
        let mut sink = FailOnEpoch { written: Vec::new(), failed: false };
        // 20 epochs x 50 ms would take a second to run through.
        let config = SmokeConfig { epochs: 20, epoch_delay_ms: 50, ..quick() };
        let t_start = std::time::Instant::now();
        let result = run(&config, &mut sink);
        let elapsed = t_start.elapsed();

        assert!(matches!(result, Err(Error::Io(ref e)) if e.kind() == io::ErrorKind::BrokenPipe));
        assert!(sink.failed);
        let text = String::from_utf8(sink.written).unwrap();
        assert!(text.contains("[Test 2]"));
        assert!(!text.contains("Epoch"));
        assert!(!text.contains("[Test 3]"));
        // The worker finishes epoch 2, fails its send and is joined before
        // `run` returns; it never reaches the remaining epochs.
        assert!(elapsed >= std::time::Duration::from_millis(100), "{elapsed:?}");
        assert!(elapsed < std::time::Duration::from_millis(600), "{elapsed:?}");
    }
}
