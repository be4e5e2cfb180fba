//! Rendering of a [`SearchResult`] for the terminal.
//!
//! The core pipeline only guarantees the `{total, items}` shape; everything
//! about presentation lives here. Two formats are supported: a plain-text
//! listing (title line, URL line, blank separator, trailing count) and
//! pretty-printed JSON for piping into other tools.

use crate::models::SearchResult;

/// Render the result as plain text.
///
/// Each match prints as its title followed by its URL; self posts have no
/// URL and print the title alone. A summary count closes the listing.
pub fn to_text(result: &SearchResult) -> String {
    let mut out = String::new();
    for item in &result.items {
        out.push_str(&item.title);
        out.push('\n');
        if !item.url.is_empty() {
            out.push_str(&item.url);
            out.push('\n');
        }
        out.push('\n');
    }
    let noun = if result.total == 1 { "story" } else { "stories" };
    out.push_str(&format!("{} matching {}\n", result.total, noun));
    out
}

/// Render the result as pretty-printed JSON.
pub fn to_json(result: &SearchResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
