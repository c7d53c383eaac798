//! Times the tree map and hash map over 10,000 and 100,000 random pairs.
//!
//! Reads no arguments. `RUST_LOG` only tunes the stderr logger.

use map_phase_bench::{run_suite, BenchConfig, StdoutSink};

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries only the timing lines.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = BenchConfig::default();
    log::info!("dataset sizes {:?}, keys below {}", config.sizes, config.key_bound);

    run_suite(&config, &mut StdoutSink::stdout())?;
    Ok(())
}
