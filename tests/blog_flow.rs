use std::sync::Arc;

use devblog::config::Config;
use devblog::services::CommentService;
use devblog::state::AppState;

fn app() -> AppState {
    AppState::new(Config::default())
}

#[test]
fn browse_search_and_like_flow() {
    let mut app = app();

    // Full feed: featured post plus two regular cards.
    let feed = app.posts.feed();
    assert_eq!(feed.featured.as_ref().map(|p| p.id), Some(1));
    assert_eq!(feed.posts.len(), 2);

    // Narrow the feed; the featured slot stays populated.
    app.posts.set_search_term("accessibility");
    let feed = app.posts.feed();
    assert_eq!(feed.posts.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3]);
    assert!(feed.featured.is_some());

    // Clearing the term restores everything.
    app.posts.set_search_term("");
    assert_eq!(app.posts.feed().posts.len(), 2);

    // Post likes are independent counters.
    app.posts.like_post(3);
    app.posts.like_post(3);
    assert_eq!(app.posts.get(3).unwrap().likes, 28 + 2);
    assert_eq!(app.posts.get(2).unwrap().likes, 35);
}

#[test]
fn reader_and_thread_flow() {
    let mut app = app();

    app.open_reader(1);
    assert_eq!(app.reader(), Some(1));

    // Seeded thread: comments 1 and 3, comment 1 carries reply 2.
    let snapshot = app.thread_mut(1).snapshot();
    assert_eq!(snapshot.count(), 2);
    assert_eq!(snapshot.comments()[0].id, 1);
    assert_eq!(snapshot.comments()[0].replies[0].id, 2);

    // Submit a comment, reply to an existing one, like a reply.
    let thread = app.thread_mut(1);
    let new = thread.submit_comment("new top").unwrap();
    let ids: Vec<i64> = thread.snapshot().comments().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![new.id, 1, 3]);

    let nested = thread.submit_reply(1, "nested").unwrap();
    let snap = thread.snapshot();
    let parent = snap.comments().iter().find(|c| c.id == 1).unwrap();
    assert_eq!(
        parent.replies.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![2, nested.id]
    );

    thread.like_reply(1, 2);
    let snap = thread.snapshot();
    let parent = snap.comments().iter().find(|c| c.id == 1).unwrap();
    assert_eq!(parent.replies[0].likes, 3 + 1);
    assert_eq!(parent.replies[1].likes, 0);

    app.close_reader();
    assert_eq!(app.reader(), None);
}

#[test]
fn snapshots_are_isolated_from_later_mutations() {
    let mut app = app();
    let thread = app.thread_mut(1);

    let before = thread.snapshot();
    thread.submit_comment("after the snapshot");
    thread.like_comment(1);

    // The old snapshot still shows the seeded state.
    assert_eq!(before.count(), 2);
    assert_eq!(before.comments()[0].likes, 12);

    // Untouched comments are shared between generations, not copied.
    let after = thread.snapshot();
    let old_three = before.comments().iter().find(|c| c.id == 3).unwrap();
    let new_three = after.comments().iter().find(|c| c.id == 3).unwrap();
    assert!(Arc::ptr_eq(old_three, new_three));
}

#[test]
fn post_likes_and_comment_likes_share_no_state() {
    let mut app = app();

    app.thread_mut(1).like_comment(1);
    assert_eq!(app.posts.get(1).unwrap().likes, 42);

    app.posts.like_post(1);
    let snapshot = app.thread(1).unwrap().snapshot();
    assert_eq!(snapshot.comments()[0].likes, 12 + 1);
}

#[test]
fn snapshot_serializes_with_iso_dates() {
    let store = CommentService::with_seed("You", devblog::data::sample_comments());
    let json = serde_json::to_value(store.snapshot()).unwrap();

    let comments = json["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["date"], "2024-06-16");
    assert_eq!(comments[0]["replies"][0]["author"], "Bob Wilson");
}

#[test]
fn viewer_identity_comes_from_config() {
    let config = Config {
        viewer_name: "Dana".to_string(),
        ..Config::default()
    };
    let mut app = AppState::new(config);

    let comment = app.thread_mut(2).submit_comment("hello").unwrap();
    assert_eq!(comment.author, "Dana");

    let reply = app.thread_mut(2).submit_reply(comment.id, "again").unwrap();
    assert_eq!(reply.author, "Dana");
}
