use pulldown_cmark::{Event, Options, Parser, Tag};

/// Renders post bodies (CommonMark) to plain terminal text.
#[derive(Clone)]
pub struct MarkdownProcessor {}

impl Default for MarkdownProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownProcessor {
    pub fn new() -> Self {
        Self {}
    }

    /// Flattens markdown to readable text: headings become banners, code
    /// blocks are indented, list markers are re-synthesized, inline emphasis
    /// is dropped.
    pub fn to_text(&self, markdown: &str) -> String {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TABLES);

        let parser = Parser::new_ext(markdown, options);

        let mut out = String::new();
        let mut list_stack: Vec<Option<u64>> = Vec::new();
        let mut in_code_block = false;

        for event in parser {
            match event {
                Event::Start(Tag::Heading(..)) => {
                    if !out.is_empty() {
                        out.push('\n');
                    }
                    out.push_str("== ");
                }
                Event::End(Tag::Heading(..)) => out.push_str(" ==\n\n"),

                Event::End(Tag::Paragraph) => out.push_str("\n\n"),

                Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
                Event::End(Tag::CodeBlock(_)) => {
                    in_code_block = false;
                    out.push('\n');
                }

                Event::Start(Tag::List(start)) => list_stack.push(start),
                Event::End(Tag::List(_)) => {
                    list_stack.pop();
                    out.push('\n');
                }
                Event::Start(Tag::Item) => match list_stack.last_mut() {
                    Some(Some(number)) => {
                        out.push_str(&format!("{}. ", number));
                        *number += 1;
                    }
                    _ => out.push_str("- "),
                },
                Event::End(Tag::Item) => out.push('\n'),

                Event::Text(text) => {
                    if in_code_block {
                        for line in text.lines() {
                            out.push_str("    ");
                            out.push_str(line);
                            out.push('\n');
                        }
                    } else {
                        out.push_str(&text);
                    }
                }
                Event::Code(code) => {
                    out.push('`');
                    out.push_str(&code);
                    out.push('`');
                }
                Event::SoftBreak => out.push(' '),
                Event::HardBreak => out.push('\n'),
                Event::Rule => out.push_str("---\n\n"),

                _ => {}
            }
        }

        out.trim_end().to_string()
    }
}
