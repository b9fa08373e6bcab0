//! Parsed Markdown tokens.

use serde::{Deserialize, Serialize};

/// Classification of a parsed Markdown fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Unstyled run of text within a line.
    Plain,
    /// `**bold**` run.
    Bold,
    /// `*italic*` run.
    Italic,
    /// `` `code` `` run.
    InlineCode,
    /// Fenced code block body.
    CodeBlock,
    /// `# ` heading.
    Heading1,
    /// `## ` heading.
    Heading2,
    /// `### ` heading.
    Heading3,
    /// `- ` / `* ` / `1. ` list item.
    ListItem,
    /// `---` or `***` rule.
    HorizontalRule,
    /// End of a source line within a paragraph.
    LineBreak,
}

impl TokenKind {
    /// Whether this kind is an inline styled run flowed word-by-word.
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            TokenKind::Plain | TokenKind::Bold | TokenKind::Italic | TokenKind::InlineCode
        )
    }
}

/// A classified fragment of parsed Markdown.
///
/// The token stream for a message is a deterministic left-to-right
/// decomposition of its text: concatenating all `content` fields reproduces
/// the text stripped of Markdown syntax markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token classification.
    pub kind: TokenKind,

    /// Payload text. Empty for [`TokenKind::HorizontalRule`] and
    /// [`TokenKind::LineBreak`].
    pub content: String,
}

impl Token {
    /// Create a token.
    pub fn new(kind: TokenKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    /// Create a plain-text token.
    pub fn plain(content: impl Into<String>) -> Self {
        Self::new(TokenKind::Plain, content)
    }

    /// Create a line-break marker.
    pub fn line_break() -> Self {
        Self::new(TokenKind::LineBreak, "")
    }

    /// Create a horizontal-rule marker.
    pub fn horizontal_rule() -> Self {
        Self::new(TokenKind::HorizontalRule, "")
    }
}
