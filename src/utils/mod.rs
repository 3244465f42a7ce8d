pub mod markdown;
pub mod validation;

pub use markdown::MarkdownProcessor;
