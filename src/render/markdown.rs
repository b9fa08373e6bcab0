//! Markdown rendering for chat transcripts.
//!
//! The message bodies already are Markdown, so this path is pass-through
//! concatenation: no tokenization, no layout.

use crate::error::Result;
use crate::model::Transcript;
use crate::render::ExportOptions;

/// Convert a transcript to Markdown.
pub fn to_markdown(transcript: &Transcript, options: &ExportOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(transcript)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: ExportOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Render a transcript to Markdown.
    pub fn render(&self, transcript: &Transcript) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("# {}\n\n", transcript.title));
        output.push_str(&format!(
            "*Exported on: {}*\n\n---\n\n",
            self.options.timestamp().format("%Y-%m-%d %H:%M UTC")
        ));

        for message in &transcript.messages {
            output.push_str(&format!(
                "**{}**:\n{}\n\n",
                message.sender.label(),
                message.text
            ));

            if message.has_citations() {
                output.push_str("> **Citations:**\n");
                for (i, citation) in message.citations.iter().enumerate() {
                    output.push_str(&format!("> [{}] Page {}\n", i + 1, citation.page_number));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }

        Ok(output)
    }
}
