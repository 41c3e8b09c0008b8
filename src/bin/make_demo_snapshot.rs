use anyhow::Result;
use std::path::PathBuf;

use kopilka::config::DEFAULT_SNAPSHOT_FILE;
use kopilka::{demo_snapshot, save_snapshot};

fn main() -> Result<()> {
    // 1. Setup Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 2. Target the same filename the dashboard reads by default
    let output_path = PathBuf::from(DEFAULT_SNAPSHOT_FILE);

    // 3. Build fixed sample data
    let snapshot = demo_snapshot();
    log::info!(
        "Demo snapshot: {} operations, {}+{} chart months",
        snapshot.transactions.len(),
        snapshot.history.len(),
        snapshot.forecast.len()
    );

    // 4. Write
    save_snapshot(&output_path, &snapshot)?;
    log::info!("Wrote {:?}. Run `kopilka` in this directory to render it.", output_path);

    Ok(())
}
