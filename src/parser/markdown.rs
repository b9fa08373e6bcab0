//! Line-oriented tokenizer for the restricted Markdown dialect used in chat
//! messages.
//!
//! The grammar covers `#`/`##`/`###` headings, `**bold**`, `*italic*`,
//! `` `code` `` runs, fenced code blocks, unordered/ordered list items, and
//! `---`/`***` horizontal rules. Everything else is plain text. Unbalanced
//! markers never match and fall through as literal text, so malformed input
//! degrades instead of failing.

use regex::Regex;

use crate::model::{Token, TokenKind};

/// Tokenize a message body with a default tokenizer.
pub fn tokenize(text: &str) -> Vec<Token> {
    MarkdownTokenizer::new().tokenize(text)
}

/// Fence-carry state folded over the message's lines.
enum FenceState {
    Normal,
    InCodeBlock { buffer: Vec<String> },
}

/// Tokenizer for the restricted Markdown dialect.
///
/// Holds the compiled inline-style patterns so repeated messages don't pay
/// for regex compilation.
pub struct MarkdownTokenizer {
    bold: Regex,
    italic: Regex,
    code: Regex,
    ordered: Regex,
}

impl MarkdownTokenizer {
    /// Create a tokenizer.
    pub fn new() -> Self {
        Self {
            bold: Regex::new(r"\*\*(.*?)\*\*").unwrap(),
            italic: Regex::new(r"\*(.*?)\*").unwrap(),
            code: Regex::new(r"`(.*?)`").unwrap(),
            ordered: Regex::new(r"^\d+\. ").unwrap(),
        }
    }

    /// Decompose a message body into an ordered token stream.
    ///
    /// Operates line-by-line without backtracking; the only carried state is
    /// whether the cursor is inside a fenced code block. A fence left open at
    /// the end of the message flushes whatever was buffered as a final
    /// [`TokenKind::CodeBlock`] token.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut state = FenceState::Normal;

        for line in text.split('\n') {
            state = self.step(line, state, &mut tokens);
        }

        if let FenceState::InCodeBlock { buffer } = state {
            tokens.push(Token::new(TokenKind::CodeBlock, buffer.join("\n")));
        }

        tokens
    }

    /// Process one line, returning the next fence state.
    ///
    /// Ordered rules, first match wins; each line contributes to exactly one
    /// rule.
    fn step(&self, line: &str, state: FenceState, tokens: &mut Vec<Token>) -> FenceState {
        let trimmed = line.trim();

        if trimmed.starts_with("```") {
            return match state {
                FenceState::Normal => FenceState::InCodeBlock { buffer: Vec::new() },
                FenceState::InCodeBlock { buffer } => {
                    tokens.push(Token::new(TokenKind::CodeBlock, buffer.join("\n")));
                    FenceState::Normal
                }
            };
        }

        if let FenceState::InCodeBlock { mut buffer } = state {
            buffer.push(line.to_string());
            return FenceState::InCodeBlock { buffer };
        }

        if let Some(rest) = line.strip_prefix("# ") {
            tokens.push(Token::new(TokenKind::Heading1, rest));
        } else if let Some(rest) = line.strip_prefix("## ") {
            tokens.push(Token::new(TokenKind::Heading2, rest));
        } else if let Some(rest) = line.strip_prefix("### ") {
            tokens.push(Token::new(TokenKind::Heading3, rest));
        } else if trimmed == "---" || trimmed == "***" {
            tokens.push(Token::horizontal_rule());
        } else if let Some(rest) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            tokens.push(Token::new(TokenKind::ListItem, rest));
        } else if self.ordered.is_match(trimmed) {
            let rest = self.ordered.replace(trimmed, "");
            tokens.push(Token::new(TokenKind::ListItem, rest));
        } else {
            self.scan_inline(line, tokens);
            tokens.push(Token::line_break());
        }

        FenceState::Normal
    }

    /// Scan a paragraph line for inline styled runs.
    ///
    /// Repeatedly takes the earliest-starting match among bold, italic, and
    /// inline code; ties resolve in that priority order, so `**bold**` is
    /// never consumed as an empty italic run.
    fn scan_inline(&self, line: &str, tokens: &mut Vec<Token>) {
        let mut rest = line;

        while !rest.is_empty() {
            let candidates = [
                (TokenKind::Bold, &self.bold),
                (TokenKind::Italic, &self.italic),
                (TokenKind::InlineCode, &self.code),
            ];

            let earliest = candidates
                .iter()
                .filter_map(|(kind, re)| {
                    let caps = re.captures(rest)?;
                    let full = caps.get(0)?;
                    let inner = caps.get(1).map_or("", |m| m.as_str());
                    Some((*kind, full.start(), full.end(), inner.to_string()))
                })
                .min_by_key(|&(_, start, _, _)| start);

            match earliest {
                Some((kind, start, end, inner)) => {
                    if start > 0 {
                        tokens.push(Token::plain(&rest[..start]));
                    }
                    tokens.push(Token::new(kind, inner));
                    rest = &rest[end..];
                }
                None => {
                    tokens.push(Token::plain(rest));
                    rest = "";
                }
            }
        }
    }
}

impl Default for MarkdownTokenizer {
    fn default() -> Self {
        Self::new()
    }
}
