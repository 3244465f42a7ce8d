use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A comment submitted directly on a post.
///
/// Threads are exactly two levels deep: a top-level comment owns its replies,
/// and a [`Reply`] has no reply list of its own, so deeper nesting is
/// unrepresentable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub date: NaiveDate,
    pub likes: u32,
    pub replies: Vec<Reply>,
}

/// A response to a specific top-level comment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reply {
    pub id: i64,
    pub author: String,
    pub content: String,
    pub date: NaiveDate,
    pub likes: u32,
}

/// An immutable view of the whole thread at a point in time.
///
/// Snapshots share unchanged comments with their predecessors, so holding one
/// across mutations is cheap and a held snapshot never observes later edits.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CommentSnapshot {
    comments: Vec<Arc<Comment>>,
}

impl CommentSnapshot {
    pub(crate) fn new(comments: Vec<Arc<Comment>>) -> Self {
        Self { comments }
    }

    pub fn comments(&self) -> &[Arc<Comment>] {
        &self.comments
    }

    /// The figure shown in the "Comments (n)" heading: top-level comments
    /// only, replies are not counted.
    pub fn count(&self) -> usize {
        self.comments.len()
    }

    /// An empty thread renders the "no comments yet" placeholder instead of
    /// an empty list.
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}
