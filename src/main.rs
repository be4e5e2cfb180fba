//! # hngrep
//!
//! Searches Hacker News story titles from the command line using the public
//! [Hacker News API](https://github.com/HackerNews/API) and prints the
//! stories whose title matches a PATTERN.
//!
//! ## Usage
//!
//! ```sh
//! hngrep 'Rust'
//! hngrep --top --limit 100 --json 'database'
//! ```
//!
//! ## Architecture
//!
//! One run is a single bounded batch:
//! 1. **Pattern compile**: the regular expression is validated before any
//!    network activity
//! 2. **Resolution**: one request resolves the selected feed's story ids
//! 3. **Fan-out/fan-in**: one concurrent fetch per id, collected through a
//!    completion channel, fail-fast on the first per-item error
//! 4. **Rendering**: the aggregate is printed as plain text or JSON
//!
//! There is no persistence and no retrying; any failure terminates the run
//! with a non-zero exit status and no partial output.

use clap::Parser;
use std::error::Error;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

mod api;
mod cli;
mod error;
mod models;
mod render;
mod search;

use api::{HnClient, HnConfig, StorySource};
use cli::Cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();

    let args = Cli::parse();
    debug!(?args.pattern, ?args.limit, json = args.json, "Parsed CLI arguments");

    // A bad pattern fails here, before a single request goes out.
    let pattern = search::compile_pattern(&args.pattern)?;

    let client = Arc::new(HnClient::new(HnConfig::default())?);
    let category = args.category();
    info!(%category, pattern = %args.pattern, "hngrep starting up");

    let mut ids = client.story_ids(category).await?;
    if let Some(limit) = args.limit {
        ids.truncate(limit);
    }
    info!(count = ids.len(), "Dispatching item fetches");

    let result = search::search_titles(client, ids, &pattern).await?;

    if args.json {
        println!("{}", render::to_json(&result)?);
    } else {
        print!("{}", render::to_text(&result));
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        matches = result.total,
        "Execution complete"
    );

    Ok(())
}
