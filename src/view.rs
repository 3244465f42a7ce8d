//! Plain-text rendering of the current snapshots. This is the presentation
//! side of the system: it only reads derived state and never mutates it.

use crate::config::Config;
use crate::models::comment::CommentSnapshot;
use crate::models::post::{Feed, Post};
use crate::utils::MarkdownProcessor;
use std::fmt::Write;

pub fn render_header(config: &Config) -> String {
    format!(
        "{}\n  Home | Browse | Write | Profile\n",
        config.site_title
    )
}

/// The feed page: featured slot first, then the regular cards, then the
/// empty-search notice when nothing matched.
pub fn render_feed(config: &Config, feed: &Feed, search_term: &str) -> String {
    let mut out = String::new();

    writeln!(out, "Welcome to {}", config.site_title).unwrap();
    if !config.site_tagline.is_empty() {
        writeln!(out, "{}", config.site_tagline).unwrap();
    }
    if !search_term.is_empty() {
        writeln!(out, "\nSearch: {:?}", search_term).unwrap();
    }

    if let Some(post) = &feed.featured {
        writeln!(out, "\nFeatured Post").unwrap();
        render_card(&mut out, post, true);
    }

    writeln!(out, "\nLatest Posts").unwrap();
    for post in &feed.posts {
        render_card(&mut out, post, false);
    }

    if feed.no_matches {
        writeln!(out, "\nNo posts found matching your search.").unwrap();
    }

    out
}

fn render_card(out: &mut String, post: &Post, featured: bool) {
    let badge = if featured { "[Featured] " } else { "" };
    writeln!(out, "\n  #{} {}{}", post.id, badge, post.title).unwrap();
    writeln!(out, "  {} · {}", post.author, post.date).unwrap();
    writeln!(out, "  {}", post.excerpt).unwrap();
    writeln!(out, "  tags: {}", post.tags.join(", ")).unwrap();
    writeln!(
        out,
        "  ♥ {}   💬 {}",
        post.likes, post.comment_count
    )
    .unwrap();
}

/// The reader view of a single post with its body rendered from markdown.
pub fn render_post(post: &Post, markdown: &MarkdownProcessor) -> String {
    let mut out = String::new();

    writeln!(out, "{}", post.title).unwrap();
    writeln!(out, "{} · {}", post.author, post.date).unwrap();
    writeln!(out, "tags: {}", post.tags.join(", ")).unwrap();
    writeln!(out, "♥ {}   💬 {}\n", post.likes, post.comment_count).unwrap();
    writeln!(out, "{}", markdown.to_text(&post.content)).unwrap();

    out
}

/// The open thread as pretty JSON, for inspection and export.
pub fn render_json(snapshot: &CommentSnapshot) -> crate::error::Result<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// The comment thread under the reader: top-level comments with their
/// replies indented one level, plus the placeholder for an empty thread.
pub fn render_thread(snapshot: &CommentSnapshot, open_composer: Option<i64>) -> String {
    let mut out = String::new();

    writeln!(out, "Comments ({})", snapshot.count()).unwrap();

    if snapshot.is_empty() {
        writeln!(out, "\nNo comments yet. Be the first to share your thoughts!").unwrap();
        return out;
    }

    for comment in snapshot.comments() {
        writeln!(out, "\n  [{}] {} · {}", comment.id, comment.author, comment.date).unwrap();
        writeln!(out, "  {}", comment.content).unwrap();
        writeln!(out, "  ♥ {}", comment.likes).unwrap();
        if open_composer == Some(comment.id) {
            writeln!(out, "  > replying... (use: reply {} <text>)", comment.id).unwrap();
        }

        for reply in &comment.replies {
            writeln!(out, "      [{}] {} · {}", reply.id, reply.author, reply.date).unwrap();
            writeln!(out, "      {}", reply.content).unwrap();
            writeln!(out, "      ♥ {}", reply.likes).unwrap();
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use crate::services::{CommentService, PostService};

    #[test]
    fn feed_shows_featured_badge_and_cards() {
        let config = Config::default();
        let posts = PostService::new(data::sample_posts());

        let rendered = render_feed(&config, &posts.feed(), posts.search_term());
        assert!(rendered.contains("Featured Post"));
        assert!(rendered.contains("[Featured] Getting Started with React and TypeScript"));
        assert!(rendered.contains("The Future of Web Development"));
        assert!(!rendered.contains("No posts found"));
    }

    #[test]
    fn empty_thread_renders_the_placeholder() {
        let store = CommentService::new("You");
        let rendered = render_thread(&store.snapshot(), None);

        assert!(rendered.contains("Comments (0)"));
        assert!(rendered.contains("No comments yet"));
    }

    #[test]
    fn thread_counts_top_level_comments_only() {
        let store = CommentService::with_seed("You", data::sample_comments());
        let rendered = render_thread(&store.snapshot(), None);

        // Two top-level comments, the reply is not counted.
        assert!(rendered.contains("Comments (2)"));
        assert!(rendered.contains("Bob Wilson"));
    }

    #[test]
    fn open_composer_is_marked_on_its_comment() {
        let mut store = CommentService::with_seed("You", data::sample_comments());
        store.toggle_reply_composer(1);

        let rendered = render_thread(&store.snapshot(), store.open_composer());
        assert!(rendered.contains("replying..."));
    }
}
