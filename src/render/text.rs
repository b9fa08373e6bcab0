//! Plain text rendering for chat transcripts.

use crate::error::Result;
use crate::model::Transcript;
use crate::render::ExportOptions;

/// Rule under the title block.
const HEADER_RULE: &str = "========================================";

/// Rule between message blocks.
const MESSAGE_RULE: &str = "----------------------------------------";

/// Convert a transcript to plain text.
pub fn to_text(transcript: &Transcript, options: &ExportOptions) -> Result<String> {
    let renderer = TextRenderer::new(options.clone());
    renderer.render(transcript)
}

/// Plain text renderer.
pub struct TextRenderer {
    options: ExportOptions,
}

impl TextRenderer {
    /// Create a new plain text renderer.
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Render a transcript to plain text.
    pub fn render(&self, transcript: &Transcript) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("{}\n", transcript.title));
        output.push_str(&format!(
            "Exported on: {}\n\n{}\n\n",
            self.options.timestamp().format("%Y-%m-%d %H:%M UTC"),
            HEADER_RULE
        ));

        for message in &transcript.messages {
            output.push_str(&format!("{}:\n{}\n\n", message.sender.label(), message.text));

            if message.has_citations() {
                output.push_str("Citations:\n");
                for (i, citation) in message.citations.iter().enumerate() {
                    output.push_str(&format!("[{}] Page {}\n", i + 1, citation.page_number));
                }
                output.push('\n');
            }

            output.push_str(&format!("{}\n\n", MESSAGE_RULE));
        }

        Ok(output)
    }
}
