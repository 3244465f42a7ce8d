use crate::{
    config::Config,
    data,
    services::{CommentService, PostService},
};
use std::collections::HashMap;
use tracing::debug;

/// The page controller: owns the configuration, the post catalog, the
/// per-post comment threads, and the reader (modal) state. Child views
/// receive it by reference and route every user intent through its methods;
/// nothing mutates the stores directly.
///
/// Everything is single-threaded and synchronous: each intent runs to
/// completion and the next view derivation sees its full effect.
pub struct AppState {
    pub config: Config,
    pub posts: PostService,
    threads: HashMap<i64, CommentService>,
    reader: Option<i64>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let posts = if config.seed_sample_data {
            PostService::new(data::sample_posts())
        } else {
            PostService::new(Vec::new())
        };

        Self {
            config,
            posts,
            threads: HashMap::new(),
            reader: None,
        }
    }

    pub fn comments_enabled(&self) -> bool {
        self.config.enable_comments
    }

    /// Opens the reader view on `post_id`. Unknown ids are ignored, so a
    /// stale intent cannot open an empty reader.
    pub fn open_reader(&mut self, post_id: i64) {
        if self.posts.get(post_id).is_none() {
            debug!(post_id, "Ignoring reader open for unknown post");
            return;
        }
        self.reader = Some(post_id);
    }

    pub fn close_reader(&mut self) {
        self.reader = None;
    }

    /// The post currently shown in the reader, if any.
    pub fn reader(&self) -> Option<i64> {
        self.reader
    }

    /// The comment store for `post_id`, created on first access. New threads
    /// start from the sample set when seeding is enabled, matching the feed.
    pub fn thread_mut(&mut self, post_id: i64) -> &mut CommentService {
        let viewer = self.config.viewer_name.clone();
        let seed = self.config.seed_sample_data;
        self.threads.entry(post_id).or_insert_with(|| {
            if seed {
                CommentService::with_seed(viewer, data::sample_comments())
            } else {
                CommentService::new(viewer)
            }
        })
    }

    pub fn thread(&self, post_id: i64) -> Option<&CommentService> {
        self.threads.get(&post_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(Config::default())
    }

    #[test]
    fn reader_opens_only_for_known_posts() {
        let mut app = state();
        assert_eq!(app.reader(), None);

        app.open_reader(999);
        assert_eq!(app.reader(), None);

        app.open_reader(2);
        assert_eq!(app.reader(), Some(2));

        app.close_reader();
        assert_eq!(app.reader(), None);
    }

    #[test]
    fn threads_are_created_on_demand_and_kept_per_post() {
        let mut app = state();

        app.thread_mut(1).submit_comment("on post one").unwrap();
        assert_eq!(app.thread(1).unwrap().snapshot().count(), 3);

        // Post 2's thread is untouched by post 1's submission.
        assert_eq!(app.thread_mut(2).snapshot().count(), 2);
    }

    #[test]
    fn unseeded_state_starts_empty() {
        let config = Config {
            seed_sample_data: false,
            ..Config::default()
        };
        let mut app = AppState::new(config);

        assert!(app.posts.feed().posts.is_empty());
        assert!(app.thread_mut(1).snapshot().is_empty());
    }
}
