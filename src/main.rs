// All smoke-run logic lives in the library (src/lib.rs and its modules).
// Run with:
//   cargo run
// Optionally point HUB_SMOKE_CONFIG at a JSON file to override defaults.
use anyhow::{Context, Result};
use hub_smoke::{run, SmokeConfig};

fn main() -> Result<()> {
    env_logger::init();

    let config = SmokeConfig::from_env().context("failed to load smoke config")?;
    let stdout = std::io::stdout();
    run(&config, stdout.lock()).context("smoke run failed")?;
    Ok(())
}
