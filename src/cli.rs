//! Command-line interface definitions for hngrep.
//!
//! This module defines the CLI arguments and options using the `clap` crate.
//! The feed flags share one argument group, so the parser itself rejects a
//! run that asks for more than one feed instead of guessing a precedence.

use crate::api::Category;
use clap::Parser;

/// Command-line arguments for hngrep.
///
/// # Examples
///
/// ```sh
/// # Search the newest stories (the default feed)
/// hngrep 'Rust'
///
/// # Search the front page, at most 100 stories, as JSON
/// hngrep --top --limit 100 --json 'database'
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Regular expression matched anywhere in each story title
    pub pattern: String,

    /// Search the newest stories (the default)
    #[arg(long, group = "feed")]
    pub new: bool,

    /// Search the current top stories
    #[arg(long, group = "feed")]
    pub top: bool,

    /// Search the best recent stories
    #[arg(long, group = "feed")]
    pub best: bool,

    /// Fetch at most this many stories from the feed
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Print the result as JSON instead of plain text
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// The feed selected by the flags. The `feed` argument group guarantees
    /// at most one flag is set; none means the default.
    pub fn category(&self) -> Category {
        if self.top {
            Category::Top
        } else if self.best {
            Category::Best
        } else {
            Category::New
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_category_is_new() {
        let cli = Cli::parse_from(["hngrep", "Rust"]);
        assert_eq!(cli.pattern, "Rust");
        assert_eq!(cli.category(), Category::New);
        assert_eq!(cli.limit, None);
        assert!(!cli.json);
    }

    #[test]
    fn test_top_flag_selects_top_feed() {
        let cli = Cli::parse_from(["hngrep", "--top", "Rust"]);
        assert_eq!(cli.category(), Category::Top);
    }

    #[test]
    fn test_best_flag_selects_best_feed() {
        let cli = Cli::parse_from(["hngrep", "--best", "Rust"]);
        assert_eq!(cli.category(), Category::Best);
    }

    #[test]
    fn test_conflicting_feed_flags_are_rejected() {
        let parsed = Cli::try_parse_from(["hngrep", "--top", "--best", "Rust"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_missing_pattern_is_rejected() {
        let parsed = Cli::try_parse_from(["hngrep", "--top"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_limit_and_json_flags() {
        let cli = Cli::parse_from(["hngrep", "-n", "100", "--json", "database"]);
        assert_eq!(cli.limit, Some(100));
        assert!(cli.json);
    }
}
