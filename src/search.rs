//! The concurrent fan-out/fan-in search pipeline.
//!
//! This is the core of the application. Given the resolved story ids, it
//! launches one fetch task per id (unbounded fan-out; the feed endpoints
//! cap the batch at ~500 ids), funnels every outcome through a single
//! completion channel, and collects them into a [`SearchResult`].
//!
//! # Guarantees
//!
//! - Exactly one outcome is produced per launched fetch, so the collector
//!   terminates once the channel closes: no deadlock, no leak into a later
//!   run.
//! - Failure policy is fail-fast: the first transport or decode error
//!   aborts the batch and is returned as the run's error. Outcomes still in
//!   flight are discarded by dropping the receiver; no partial result is
//!   ever returned.
//! - Completion order is whatever the network produces, so matched items
//!   are re-sorted into original request order before the result is built.
//!   This makes output reproducible across runs against identical data.

use crate::api::StorySource;
use crate::error::{Error, Result};
use crate::models::{Item, SearchResult, StoryId};
use regex::Regex;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Compile the user-supplied title pattern.
///
/// Called before any network activity so a bad pattern fails the run
/// without issuing a single request. Matching uses search semantics: the
/// pattern may match anywhere in the title, case-sensitively.
pub fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::Pattern {
        pattern: pattern.to_string(),
        detail: e.to_string(),
    })
}

/// Fan out one fetch per id, fan the outcomes back in, and keep the items
/// whose title matches `pattern`.
///
/// All tasks are spawned before any outcome is awaited, so the fetches run
/// in parallel on the runtime. Each task sends exactly one
/// `(request index, outcome)` pair into a channel sized to hold the whole
/// batch, so no producer ever blocks on the collector.
///
/// # Errors
///
/// Returns the first per-item [`Error`] received, aborting the batch. An
/// empty id list and a pattern that matches nothing are both `Ok`.
#[instrument(level = "info", skip_all, fields(ids = ids.len()))]
pub async fn search_titles<S>(source: Arc<S>, ids: Vec<StoryId>, pattern: &Regex) -> Result<SearchResult>
where
    S: StorySource + 'static,
{
    if ids.is_empty() {
        info!("No story ids to fetch");
        return Ok(SearchResult::empty());
    }

    // Capacity covers the whole batch: every producer can deliver its one
    // outcome even if the collector has already returned.
    let (tx, mut rx) = mpsc::channel::<(usize, Result<Item>)>(ids.len());

    for (position, id) in ids.iter().copied().enumerate() {
        let source = Arc::clone(&source);
        let tx = tx.clone();
        tokio::spawn(async move {
            let outcome = source.item(id).await;
            // The receiver is gone after a fail-fast abort; the late
            // outcome is intentionally discarded.
            let _ = tx.send((position, outcome)).await;
        });
    }
    // Only the spawned tasks hold senders now; the channel closes once the
    // last fetch has reported in.
    drop(tx);

    let requested = ids.len();
    let mut received = 0usize;
    let mut matched: Vec<(usize, Item)> = Vec::new();

    while let Some((position, outcome)) = rx.recv().await {
        received += 1;
        let item = match outcome {
            Ok(item) => item,
            Err(e) => {
                warn!(received, requested, error = %e, "Item fetch failed; aborting batch");
                return Err(e);
            }
        };
        if pattern.is_match(&item.title) {
            debug!(id = item.id, title = %item.title, "Title matched");
            matched.push((position, item));
        }
    }
    debug_assert_eq!(received, requested);

    matched.sort_by_key(|&(position, _)| position);
    let result = SearchResult::new(matched.into_iter().map(|(_, item)| item).collect());

    info!(
        requested,
        received,
        matches = result.total,
        "Search completed"
    );
    Ok(result)
}
