//! Markdown parsing module.

mod markdown;

pub use markdown::{tokenize, MarkdownTokenizer};
