//! Error types for hngrep.
//!
//! One variant per failure class in the run:
//! - [`Error::Pattern`]: the user-supplied regular expression did not compile
//! - [`Error::Resolution`]: the upfront story-list request failed
//! - [`Error::Transport`]: a single item fetch failed on the wire
//! - [`Error::Decode`]: a single item fetch returned a malformed payload
//!
//! There are no retries anywhere: every error surfaces to `main` and
//! terminates the run non-zero. Per-item errors abort the whole batch
//! (fail-fast), so no partial result is ever rendered.

use crate::api::Category;
use crate::models::StoryId;
use thiserror::Error;

/// Result type alias for hngrep operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for hngrep.
///
/// Details are captured as strings at the point where the underlying
/// `reqwest`/`serde_json`/`regex` error is still concrete, so the variants
/// stay `Send` and move freely through the completion channel.
#[derive(Debug, Error)]
pub enum Error {
    /// The HTTP client could not be constructed.
    #[error("failed to initialize the HTTP client: {0}")]
    Client(String),

    /// The story-list request for a feed failed. Fatal: without the id
    /// list there is nothing to fetch.
    #[error("fetching the {feed} story list failed: {detail}")]
    Resolution {
        /// Which feed was being resolved.
        feed: Category,
        /// What went wrong on the wire or while decoding the id list.
        detail: String,
    },

    /// A single item request failed on the wire (connection error,
    /// timeout, or a non-2xx status).
    #[error("fetching item {id} failed: {detail}")]
    Transport {
        /// The id whose fetch failed.
        id: StoryId,
        /// The transport-level failure description.
        detail: String,
    },

    /// A single item request returned a payload that did not decode as an
    /// item. The API answers `null` for unknown ids, which lands here.
    #[error("item {id} returned a malformed payload: {detail}")]
    Decode {
        /// The id whose payload was malformed.
        id: StoryId,
        /// The decode failure description.
        detail: String,
    },

    /// The PATTERN argument is not a valid regular expression. Raised
    /// before any network activity.
    #[error("invalid title pattern {pattern:?}: {detail}")]
    Pattern {
        /// The pattern as supplied on the command line.
        pattern: String,
        /// The regex compiler's diagnostic.
        detail: String,
    },
}
