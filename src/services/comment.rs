use crate::models::comment::{Comment, CommentSnapshot, Reply};
use crate::utils::validation::is_blank;
use chrono::{Local, NaiveDate};
use std::sync::Arc;
use tracing::debug;

/// The comment store for one post's thread.
///
/// Holds the top-level sequence in reverse-chronological order (new comments
/// prepend) with replies in chronological order (new replies append). Every
/// mutation builds a new top-level sequence and shares untouched comments
/// with the previous one via `Arc`, so snapshots handed out earlier never
/// observe the change.
///
/// Invalid input (blank text) and lookup misses are silent no-ops: the
/// operation declines and returns `None`, nothing is raised.
#[derive(Debug, Clone)]
pub struct CommentService {
    viewer: String,
    comments: Vec<Arc<Comment>>,
    next_id: i64,
    open_composer: Option<i64>,
}

impl CommentService {
    pub fn new(viewer: impl Into<String>) -> Self {
        Self {
            viewer: viewer.into(),
            comments: Vec::new(),
            next_id: 1,
            open_composer: None,
        }
    }

    /// Builds a store over an existing thread. Fresh ids start past the
    /// largest seeded id, replies included, so no id is ever reused.
    pub fn with_seed(viewer: impl Into<String>, seed: Vec<Comment>) -> Self {
        let max_id = seed
            .iter()
            .flat_map(|c| std::iter::once(c.id).chain(c.replies.iter().map(|r| r.id)))
            .max()
            .unwrap_or(0);

        Self {
            viewer: viewer.into(),
            comments: seed.into_iter().map(Arc::new).collect(),
            next_id: max_id + 1,
            open_composer: None,
        }
    }

    /// Submits a new top-level comment, prepended to the thread.
    ///
    /// Blank text (empty or whitespace-only after trimming) is declined and
    /// `None` is returned. The stored content is the text as submitted.
    pub fn submit_comment(&mut self, text: &str) -> Option<Arc<Comment>> {
        if is_blank(text) {
            debug!("Ignoring blank comment submission");
            return None;
        }

        let comment = Arc::new(Comment {
            id: self.allocate_id(),
            author: self.viewer.clone(),
            content: text.to_string(),
            date: today(),
            likes: 0,
            replies: Vec::new(),
        });
        debug!(id = comment.id, "Creating comment");

        let mut next = Vec::with_capacity(self.comments.len() + 1);
        next.push(comment.clone());
        next.extend(self.comments.iter().cloned());
        self.comments = next;

        Some(comment)
    }

    /// Submits a reply to the top-level comment `parent_id`, appended to that
    /// parent's reply list. Declines blank text and unknown parents. A
    /// successful reply also closes the reply composer, matching the submit
    /// affordance it came from.
    pub fn submit_reply(&mut self, parent_id: i64, text: &str) -> Option<Reply> {
        if is_blank(text) {
            debug!(parent_id, "Ignoring blank reply submission");
            return None;
        }

        let Some(index) = self.position(parent_id) else {
            debug!(parent_id, "Ignoring reply to unknown comment");
            return None;
        };

        let reply = Reply {
            id: self.allocate_id(),
            author: self.viewer.clone(),
            content: text.to_string(),
            date: today(),
            likes: 0,
        };
        debug!(id = reply.id, parent_id, "Creating reply");

        let mut parent = Comment::clone(&self.comments[index]);
        parent.replies.push(reply.clone());
        self.replace(index, parent);
        self.open_composer = None;

        Some(reply)
    }

    /// Increments the like counter of the top-level comment `comment_id`.
    /// Unknown ids are ignored; repeated calls keep incrementing.
    pub fn like_comment(&mut self, comment_id: i64) {
        let Some(index) = self.position(comment_id) else {
            debug!(comment_id, "Ignoring like for unknown comment");
            return;
        };

        let mut comment = Comment::clone(&self.comments[index]);
        comment.likes += 1;
        self.replace(index, comment);
    }

    /// Increments the like counter of the reply `reply_id` under the
    /// top-level comment `parent_id`. A miss on either id is ignored.
    pub fn like_reply(&mut self, parent_id: i64, reply_id: i64) {
        let Some(index) = self.position(parent_id) else {
            debug!(parent_id, reply_id, "Ignoring like for reply of unknown comment");
            return;
        };

        let mut parent = Comment::clone(&self.comments[index]);
        match parent.replies.iter_mut().find(|r| r.id == reply_id) {
            Some(reply) => reply.likes += 1,
            None => {
                debug!(parent_id, reply_id, "Ignoring like for unknown reply");
                return;
            }
        }
        self.replace(index, parent);
    }

    /// Opens the reply composer under `comment_id`, closing any other open
    /// one; toggling the already-open comment closes it. At most one
    /// composer is open at a time.
    pub fn toggle_reply_composer(&mut self, comment_id: i64) {
        if self.position(comment_id).is_none() {
            debug!(comment_id, "Ignoring composer toggle for unknown comment");
            return;
        }

        self.open_composer = if self.open_composer == Some(comment_id) {
            None
        } else {
            Some(comment_id)
        };
    }

    pub fn close_reply_composer(&mut self) {
        self.open_composer = None;
    }

    /// The top-level comment whose reply composer is currently open, if any.
    pub fn open_composer(&self) -> Option<i64> {
        self.open_composer
    }

    /// The current value of the thread. Cheap to take and to keep: only the
    /// spine is copied, the comments themselves are shared.
    pub fn snapshot(&self) -> CommentSnapshot {
        CommentSnapshot::new(self.comments.clone())
    }

    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn position(&self, comment_id: i64) -> Option<usize> {
        self.comments.iter().position(|c| c.id == comment_id)
    }

    // Swaps in an updated comment by rebuilding the spine, leaving the
    // previous sequence (and any snapshot of it) intact.
    fn replace(&mut self, index: usize, updated: Comment) {
        let mut next = self.comments.clone();
        next[index] = Arc::new(updated);
        self.comments = next;
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
