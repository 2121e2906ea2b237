//! Driver binary: run all five experiments sequentially and write one
//! output file per algorithm.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use algobench::{report, runner, Algorithm};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // One RNG for the whole run, threaded through every generator call.
    let mut rng = StdRng::from_entropy();

    for algorithm in Algorithm::ALL {
        tracing::info!("running {} tests", algorithm.name());
        let samples = runner::run_full_experiment(algorithm, &mut rng);
        report::write_points(algorithm.output_file(), &samples)?;
        tracing::info!(
            samples = samples.len(),
            file = algorithm.output_file(),
            "{} results written",
            algorithm.name()
        );
    }

    Ok(())
}
