use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A blog post in the in-memory catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub excerpt: String,
    /// Markdown body, rendered by the presentation layer.
    pub content: String,
    pub author: String,
    pub date: NaiveDate,
    pub likes: u32,
    /// Seeded comment figure shown on the card, independent of any live
    /// thread.
    pub comment_count: u32,
    pub tags: Vec<String>,
    pub featured: bool,
    pub image: Option<String>,
}

/// The derived listing for the current search term.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feed {
    /// Chosen from the unfiltered catalog, so it stays visible while a
    /// search is active.
    pub featured: Option<Post>,
    /// Posts matching the search term, featured post excluded.
    pub posts: Vec<Post>,
    /// Set when the search term matches nothing at all.
    pub no_matches: bool,
}
