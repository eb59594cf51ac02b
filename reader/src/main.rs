use std::env;
use std::path::PathBuf;

use donation_reader::{initialize_backend, ReaderConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let snapshot_arg = env::args().nth(1).map(PathBuf::from);
    let config = ReaderConfig::from_env()?.with_overrides(None, snapshot_arg);

    // Initialize logging
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting donation reader");
    let app_state = initialize_backend(&config)?;

    let list = app_state.render()?;
    info!(
        "Rendered {:?} view: {} entries ({})",
        list.view,
        list.entries.len(),
        list.status
    );
    println!("{}", serde_json::to_string_pretty(&list)?);

    Ok(())
}
