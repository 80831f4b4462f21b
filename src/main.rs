//! Terminal runner for the reelscope catalog core.
//!
//! Usage: `reelscope [QUERY]`
//!
//! Loads configuration (from the TOML file named by `REELSCOPE_CONFIG`, else
//! from `REELSCOPE_*` variables), fetches the catalog and genre taxonomy, and
//! prints the first page. With a `QUERY`, the query is applied the way a
//! bookmarked location would be before printing.

use std::process::ExitCode;

use reelscope::ui::render_catalog;
use reelscope::{initialize, Config};

/// Environment variable naming an optional TOML config file.
const CONFIG_PATH_VAR: &str = "REELSCOPE_CONFIG";

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "reelscope failed");
            eprintln!("reelscope: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> reelscope::Result<()> {
    let config = match std::env::var_os(CONFIG_PATH_VAR) {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env(),
    };

    let mut coordinator = initialize(&config)?;
    let query = std::env::args().nth(1).unwrap_or_default();

    tracing::info!(base_url = %config.base_url, query = %query, "starting");

    coordinator.load_catalog()?;
    coordinator.observe_genres()?;
    coordinator.settle().await?;

    if !query.trim().is_empty() {
        coordinator.restore_query(&query, None)?;
        coordinator.settle().await?;
    }

    let snapshot = coordinator.snapshot();
    tracing::info!(
        movie_count = snapshot.catalog.movies.len(),
        visible = snapshot.catalog.filtered_movies.len(),
        "catalog ready"
    );

    print!("{}", render_catalog(&snapshot.catalog_view(&query)));
    Ok(())
}
