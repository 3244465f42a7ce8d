use std::io::{self, BufRead, Write};

use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use devblog::{config::Config, state::AppState, utils::MarkdownProcessor, view};

fn main() -> anyhow::Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("LOG_LEVEL").unwrap_or_else(|_| "devblog=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Starting DevBlog...");

    // 加载配置
    dotenv::dotenv().ok();
    let config = Config::from_env()?;

    let mut app = AppState::new(config);
    let markdown = MarkdownProcessor::new();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{}", view::render_header(&app.config))?;
    writeln!(
        out,
        "{}",
        view::render_feed(&app.config, &app.posts.feed(), app.posts.search_term())
    )?;
    writeln!(out, "Type 'help' for the list of commands.")?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if !dispatch(&mut app, &markdown, &mut out, line.trim())? {
            break;
        }
    }

    info!("Goodbye");
    Ok(())
}

/// Forwards one user intent into the stores and re-renders the affected
/// view. Returns `false` when the session should end.
fn dispatch(
    app: &mut AppState,
    markdown: &MarkdownProcessor,
    out: &mut impl Write,
    line: &str,
) -> anyhow::Result<bool> {
    let (command, rest) = match line.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };
    debug!(command, "Dispatching intent");

    match command {
        "" => {}

        "feed" => show_feed(app, out)?,

        "search" => {
            app.posts.set_search_term(rest);
            show_feed(app, out)?;
        }

        "like" => {
            if let Some(post_id) = parse_id(out, rest)? {
                app.posts.like_post(post_id);
                show_feed(app, out)?;
            }
        }

        "open" => {
            if let Some(post_id) = parse_id(out, rest)? {
                match app.posts.require(post_id) {
                    Ok(_) => {
                        app.open_reader(post_id);
                        show_reader(app, markdown, out)?;
                    }
                    Err(e) => writeln!(out, "{}", e)?,
                }
            }
        }

        "close" => {
            app.close_reader();
            show_feed(app, out)?;
        }

        "comment" => {
            if let Some(post_id) = require_thread(app, out)? {
                if app.thread_mut(post_id).submit_comment(rest).is_none() {
                    writeln!(out, "Nothing to post: comment text is empty.")?;
                }
                show_thread(app, post_id, out)?;
            }
        }

        "reply" => {
            if let Some(post_id) = require_thread(app, out)? {
                let (id, text) = match rest.split_once(' ') {
                    Some((id, text)) => (id, text.trim()),
                    None => (rest, ""),
                };
                if let Some(parent_id) = parse_id(out, id)? {
                    if app.thread_mut(post_id).submit_reply(parent_id, text).is_none() {
                        writeln!(out, "Nothing to post: no such comment or empty text.")?;
                    }
                    show_thread(app, post_id, out)?;
                }
            }
        }

        "likec" => {
            if let Some(post_id) = require_thread(app, out)? {
                if let Some(comment_id) = parse_id(out, rest)? {
                    app.thread_mut(post_id).like_comment(comment_id);
                    show_thread(app, post_id, out)?;
                }
            }
        }

        "liker" => {
            if let Some(post_id) = require_thread(app, out)? {
                let mut ids = rest.split_whitespace();
                match (
                    ids.next().and_then(|s| s.parse::<i64>().ok()),
                    ids.next().and_then(|s| s.parse::<i64>().ok()),
                ) {
                    (Some(parent_id), Some(reply_id)) => {
                        app.thread_mut(post_id).like_reply(parent_id, reply_id);
                        show_thread(app, post_id, out)?;
                    }
                    _ => writeln!(out, "Usage: liker <comment-id> <reply-id>")?,
                }
            }
        }

        "composer" => {
            if let Some(post_id) = require_thread(app, out)? {
                if let Some(comment_id) = parse_id(out, rest)? {
                    app.thread_mut(post_id).toggle_reply_composer(comment_id);
                    show_thread(app, post_id, out)?;
                }
            }
        }

        "json" => {
            if let Some(post_id) = require_thread(app, out)? {
                let snapshot = app.thread_mut(post_id).snapshot();
                writeln!(out, "{}", view::render_json(&snapshot)?)?;
            }
        }

        "help" => {
            writeln!(out, "Commands:")?;
            writeln!(out, "  feed                         show the post feed")?;
            writeln!(out, "  search <term>                filter the feed (empty term clears)")?;
            writeln!(out, "  like <post-id>               like a post")?;
            writeln!(out, "  open <post-id>               open the reader view")?;
            writeln!(out, "  close                        back to the feed")?;
            writeln!(out, "  comment <text>               comment on the open post")?;
            writeln!(out, "  reply <comment-id> <text>    reply to a comment")?;
            writeln!(out, "  likec <comment-id>           like a comment")?;
            writeln!(out, "  liker <comment-id> <reply-id>  like a reply")?;
            writeln!(out, "  composer <comment-id>        toggle the reply composer")?;
            writeln!(out, "  json                         dump the open thread as JSON")?;
            writeln!(out, "  quit                         exit")?;
        }

        "quit" | "exit" => return Ok(false),

        _ => writeln!(out, "Unknown command {:?}, try 'help'.", command)?,
    }

    Ok(true)
}

fn show_feed(app: &AppState, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(
        out,
        "{}",
        view::render_feed(&app.config, &app.posts.feed(), app.posts.search_term())
    )?;
    Ok(())
}

fn show_reader(
    app: &mut AppState,
    markdown: &MarkdownProcessor,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let Some(post_id) = app.reader() else {
        writeln!(out, "No such post.")?;
        return Ok(());
    };

    let Some(post) = app.posts.get(post_id).cloned() else {
        writeln!(out, "No such post.")?;
        return Ok(());
    };
    writeln!(out, "{}", view::render_post(&post, markdown))?;

    if app.comments_enabled() {
        show_thread(app, post_id, out)?;
    }
    Ok(())
}

fn show_thread(app: &mut AppState, post_id: i64, out: &mut impl Write) -> anyhow::Result<()> {
    let thread = app.thread_mut(post_id);
    let snapshot = thread.snapshot();
    let composer = thread.open_composer();
    writeln!(out, "{}", view::render_thread(&snapshot, composer))?;
    Ok(())
}

fn require_thread(app: &AppState, out: &mut impl Write) -> anyhow::Result<Option<i64>> {
    if !app.comments_enabled() {
        writeln!(out, "Comments are disabled.")?;
        return Ok(None);
    }
    let reader = app.reader();
    if reader.is_none() {
        writeln!(out, "Open a post first: open <post-id>")?;
    }
    Ok(reader)
}

fn parse_id(out: &mut impl Write, text: &str) -> anyhow::Result<Option<i64>> {
    match text.parse::<i64>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            writeln!(out, "Expected a numeric id, got {:?}.", text)?;
            Ok(None)
        }
    }
}
