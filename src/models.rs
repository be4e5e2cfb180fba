//! Data models for Hacker News items and search results.
//!
//! This module defines the core data structures used throughout the application:
//! - [`StoryId`]: the integer key identifying an item in the Hacker News API
//! - [`Item`]: a decoded story/comment/poll/job record fetched by id
//! - [`SearchResult`]: the aggregate of matched items handed to the renderer
//!
//! The Hacker News API omits fields that do not apply to an item's type, so
//! every [`Item`] field carries a serde default and unknown fields are
//! ignored during deserialization.

use serde::{Deserialize, Serialize};

/// Integer key identifying an item in the Hacker News API's namespace.
///
/// Ids are opaque: the application never interprets them beyond using them
/// as request keys and as a stable sort key for reproducible output.
pub type StoryId = u64;

/// A single Hacker News item as returned by `GET /item/<id>.json`.
///
/// Only `title`, `url`, `score`, `descendants` and `by` are interpreted by
/// the search pipeline and renderer; the remaining fields are carried
/// through untouched so JSON output stays faithful to the API.
///
/// # Field Notes
///
/// * `kind` - the API's `type` field: one of "job", "story", "comment",
///   "poll", or "pollopt"
/// * `descendants` - for stories and polls, the total comment count
/// * `title` and `text` may contain HTML markup
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Item {
    /// The item's unique id.
    pub id: StoryId,
    /// True if the item is deleted.
    pub deleted: bool,
    /// The type of item: "job", "story", "comment", "poll", or "pollopt".
    #[serde(rename = "type")]
    pub kind: String,
    /// The username of the item's author.
    pub by: String,
    /// Creation date of the item, in Unix time.
    pub time: i64,
    /// The comment, story or poll text. HTML.
    pub text: String,
    /// True if the item is dead.
    pub dead: bool,
    /// The comment's parent: either another comment or the relevant story.
    pub parent: Option<StoryId>,
    /// The pollopt's associated poll.
    pub poll: Option<StoryId>,
    /// The ids of the item's comments, in ranked display order.
    pub kids: Vec<StoryId>,
    /// The URL of the story.
    pub url: String,
    /// The story's score, or the votes for a pollopt.
    pub score: i64,
    /// The title of the story, poll or job. HTML.
    pub title: String,
    /// A list of related pollopts, in display order.
    pub parts: Vec<StoryId>,
    /// In the case of stories or polls, the total comment count.
    pub descendants: u64,
}

/// The aggregate produced by one search run: how many stories matched and
/// which ones, in original request order.
///
/// Built once per invocation via [`SearchResult::new`] and immutable after
/// construction, so `total == items.len()` holds for the whole lifetime of
/// the value.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResult {
    /// Count of matching stories. Always equal to `items.len()`.
    pub total: usize,
    /// The matching items, sorted by original request order.
    pub items: Vec<Item>,
}

impl SearchResult {
    /// Build a result from the matched items, deriving `total` from them.
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            total: items.len(),
            items,
        }
    }

    /// A result for a run that matched nothing. Not an error.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_deserializes_full_story() {
        let json = r#"{
            "by": "dhouston",
            "descendants": 71,
            "id": 8863,
            "kids": [9224, 8917],
            "score": 104,
            "time": 1175714200,
            "title": "My YC app: Dropbox - Throw away your USB drive",
            "type": "story",
            "url": "http://www.getdropbox.com/u/2/screencast.html"
        }"#;

        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 8863);
        assert_eq!(item.by, "dhouston");
        assert_eq!(item.kind, "story");
        assert_eq!(item.score, 104);
        assert_eq!(item.descendants, 71);
        assert_eq!(item.kids, vec![9224, 8917]);
        assert!(item.title.starts_with("My YC app"));
    }

    #[test]
    fn test_item_defaults_omitted_fields() {
        // Job items carry no kids/descendants; the API simply omits them.
        let json = r#"{"id": 1, "type": "job", "title": "Hiring"}"#;

        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 1);
        assert_eq!(item.title, "Hiring");
        assert!(item.kids.is_empty());
        assert_eq!(item.descendants, 0);
        assert_eq!(item.parent, None);
        assert!(!item.deleted);
    }

    #[test]
    fn test_item_ignores_unknown_fields() {
        let json = r#"{"id": 2, "title": "t", "someFutureField": [1, 2, 3]}"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, 2);
    }

    #[test]
    fn test_item_rejects_null_payload() {
        // The API answers `null` for ids that do not exist.
        assert!(serde_json::from_str::<Item>("null").is_err());
    }

    #[test]
    fn test_search_result_total_matches_len() {
        let items = vec![
            Item {
                id: 1,
                title: "one".to_string(),
                ..Item::default()
            },
            Item {
                id: 2,
                title: "two".to_string(),
                ..Item::default()
            },
        ];
        let result = SearchResult::new(items);
        assert_eq!(result.total, 2);
        assert_eq!(result.total, result.items.len());
    }

    #[test]
    fn test_search_result_empty() {
        let result = SearchResult::empty();
        assert_eq!(result.total, 0);
        assert!(result.items.is_empty());
    }

    #[test]
    fn test_search_result_serialization() {
        let result = SearchResult::new(vec![Item {
            id: 42,
            title: "Answer".to_string(),
            ..Item::default()
        }]);

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"total\":1"));
        assert!(json.contains("Answer"));
    }
}
