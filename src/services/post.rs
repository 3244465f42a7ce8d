use crate::error::{AppError, Result};
use crate::models::post::{Feed, Post};
use crate::utils::validation::contains_ignore_case;
use tracing::debug;

/// The in-memory post catalog plus the live search filter over it.
///
/// Independent of the comment store: the two share no state.
#[derive(Debug, Clone)]
pub struct PostService {
    posts: Vec<Post>,
    search_term: String,
}

impl PostService {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            search_term: String::new(),
        }
    }

    /// Stores the live search input. Matching happens at derivation time, so
    /// every keystroke simply replaces the term.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Increments the like counter of `post_id`. Unknown ids are ignored;
    /// there is no decrement.
    pub fn like_post(&mut self, post_id: i64) {
        match self.posts.iter_mut().find(|p| p.id == post_id) {
            Some(post) => post.likes += 1,
            None => debug!(post_id, "Ignoring like for unknown post"),
        }
    }

    pub fn get(&self, post_id: i64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == post_id)
    }

    /// Lookup for callers that want a surfaced miss instead of a no-op, such
    /// as the presentation layer reporting a bad id back to the user.
    pub fn require(&self, post_id: i64) -> Result<&Post> {
        self.get(post_id).ok_or_else(|| AppError::not_found("post"))
    }

    /// Derives the listing for the current search term: a case-insensitive
    /// substring match against title, excerpt, or any tag. The featured slot
    /// comes from the unfiltered catalog; the regular list excludes it.
    pub fn feed(&self) -> Feed {
        let matching: Vec<&Post> = self
            .posts
            .iter()
            .filter(|p| self.matches(p))
            .collect();

        let featured = self.posts.iter().find(|p| p.featured).cloned();
        let no_matches = matching.is_empty();
        let posts = matching
            .into_iter()
            .filter(|p| !p.featured)
            .cloned()
            .collect();

        Feed {
            featured,
            posts,
            no_matches,
        }
    }

    fn matches(&self, post: &Post) -> bool {
        contains_ignore_case(&post.title, &self.search_term)
            || contains_ignore_case(&post.excerpt, &self.search_term)
            || post
                .tags
                .iter()
                .any(|tag| contains_ignore_case(tag, &self.search_term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_posts;

    fn catalog() -> PostService {
        PostService::new(sample_posts())
    }

    #[test]
    fn empty_term_matches_everything() {
        let feed = catalog().feed();
        assert!(!feed.no_matches);
        assert_eq!(feed.featured.as_ref().map(|p| p.id), Some(1));
        // Featured post is not repeated in the regular list.
        assert!(feed.posts.iter().all(|p| !p.featured));
        assert_eq!(feed.posts.len(), 2);
    }

    #[test]
    fn search_is_case_insensitive_over_title_excerpt_and_tags() {
        let mut posts = catalog();

        posts.set_search_term("ACCESSIBLE");
        let feed = posts.feed();
        assert_eq!(feed.posts.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3]);

        // Tag match.
        posts.set_search_term("trends");
        let feed = posts.feed();
        assert_eq!(feed.posts.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2]);

        // Excerpt match.
        posts.set_search_term("comprehensive guide");
        assert!(!posts.feed().no_matches);
    }

    #[test]
    fn featured_slot_survives_a_filter_that_excludes_it() {
        let mut posts = catalog();
        posts.set_search_term("accessibility");

        let feed = posts.feed();
        assert_eq!(feed.featured.as_ref().map(|p| p.id), Some(1));
        assert_eq!(feed.posts.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn unmatched_term_sets_the_no_matches_flag() {
        let mut posts = catalog();
        posts.set_search_term("quantum basket weaving");

        let feed = posts.feed();
        assert!(feed.no_matches);
        assert!(feed.posts.is_empty());
    }

    #[test]
    fn require_surfaces_a_miss() {
        let posts = catalog();
        assert!(posts.require(1).is_ok());
        assert!(matches!(posts.require(999), Err(AppError::NotFound(_))));
    }

    #[test]
    fn like_post_increments_only_the_target() {
        let mut posts = catalog();
        let before: Vec<u32> = posts.feed().posts.iter().map(|p| p.likes).collect();

        posts.like_post(2);
        posts.like_post(999_999);

        let post = posts.get(2).unwrap();
        assert_eq!(post.likes, 35 + 1);
        assert_eq!(posts.get(3).unwrap().likes, before[1]);
    }
}
