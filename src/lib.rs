//! # chatpress
//!
//! Chat transcript export library for Rust.
//!
//! Converts an ordered chat session (messages with sender, Markdown body,
//! and optional source citations) into downloadable artifacts: a paginated
//! document, a Markdown file, or a plain text file.
//!
//! The paginated path is the interesting one: message bodies are tokenized
//! against a restricted Markdown dialect, then flowed word-by-word through a
//! page layout engine that emits positioned draw commands. The commands are
//! backend-agnostic; an adapter over any PDF-drawing library implements the
//! [`Canvas`] trait and replays them.
//!
//! ## Quick Start
//!
//! ```
//! use chatpress::{Exporter, Message, Transcript};
//!
//! fn main() -> chatpress::Result<()> {
//!     let transcript = Transcript::new("Demo Session")
//!         .with_message(Message::user("What does **bold** look like?"))
//!         .with_message(Message::ai("Like `this`, roughly."));
//!
//!     // Flat-text artifacts are produced directly.
//!     let artifact = Exporter::new().markdown(&transcript)?;
//!     assert_eq!(artifact.filename, "demo_session.md");
//!
//!     // The paginated document is a draw-command list until a drawing
//!     // backend turns it into bytes.
//!     let pages = Exporter::new().draw_list(&transcript)?;
//!     assert_eq!(pages.page_count, 1);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Three output formats**: paginated document, Markdown, plain text
//! - **Degrading Markdown parser**: unbalanced markers fall through as
//!   literal text instead of failing
//! - **Pure layout**: pagination is computed, not drawn; assert on the draw
//!   list without any drawing backend
//! - **Pluggable backends**: text metrics and drawing sit behind traits

pub mod error;
pub mod export;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use export::{slug, ExportArtifact};
pub use layout::{
    ApproxMetrics, Canvas, ColorTheme, DocumentCanvas, DrawList, DrawOp, FontFamily, FontSpec,
    FontStyle, PageGeometry, Rgb, TextMetrics,
};
pub use model::{Citation, Message, Sender, Token, TokenKind, Transcript};
pub use parser::{tokenize, MarkdownTokenizer};
pub use render::{
    to_draw_list, to_markdown, to_text, DocumentRenderer, ExportOptions, FontSize, OutputFormat,
};

/// Builder for exporting transcripts.
///
/// # Example
///
/// ```
/// use chatpress::{Exporter, FontSize, Message, Transcript};
///
/// let transcript = Transcript::new("Notes").with_message(Message::user("hi"));
/// let artifact = Exporter::new()
///     .with_font_size(FontSize::Large)
///     .with_citations(false)
///     .text(&transcript)
///     .unwrap();
/// assert_eq!(artifact.mime_type, "text/plain");
/// ```
pub struct Exporter {
    options: ExportOptions,
}

impl Exporter {
    /// Create an exporter with default options.
    pub fn new() -> Self {
        Self {
            options: ExportOptions::new(),
        }
    }

    /// Create an exporter from prepared options.
    pub fn with_options(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Set the output format used by [`export`](Self::export).
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.options = self.options.with_format(format);
        self
    }

    /// Enable or disable citation rendering on the document path.
    pub fn with_citations(mut self, include: bool) -> Self {
        self.options = self.options.with_citations(include);
        self
    }

    /// Set the document body font size.
    pub fn with_font_size(mut self, size: FontSize) -> Self {
        self.options = self.options.with_font_size(size);
        self
    }

    /// Pin the export timestamp for reproducible output.
    pub fn with_exported_at(mut self, at: chrono::DateTime<chrono::Utc>) -> Self {
        self.options = self.options.with_exported_at(at);
        self
    }

    /// Produce the artifact selected by the configured [`OutputFormat`].
    ///
    /// The canvas is consumed only on the document path; the flat-text
    /// formats ignore it.
    pub fn export<C: DocumentCanvas>(
        &self,
        transcript: &Transcript,
        canvas: C,
    ) -> Result<ExportArtifact> {
        match self.options.format {
            OutputFormat::Document => self.document(transcript, canvas),
            OutputFormat::Markdown => self.markdown(transcript),
            OutputFormat::Text => self.text(transcript),
        }
    }

    /// Produce the Markdown artifact.
    pub fn markdown(&self, transcript: &Transcript) -> Result<ExportArtifact> {
        let content = render::to_markdown(transcript, &self.options)?;
        Ok(ExportArtifact::markdown(&transcript.title, content))
    }

    /// Produce the plain text artifact.
    pub fn text(&self, transcript: &Transcript) -> Result<ExportArtifact> {
        let content = render::to_text(transcript, &self.options)?;
        Ok(ExportArtifact::text(&transcript.title, content))
    }

    /// Lay out the paginated document without a drawing backend.
    pub fn draw_list(&self, transcript: &Transcript) -> Result<DrawList> {
        render::to_draw_list(transcript, &self.options)
    }

    /// Produce the paginated document artifact by replaying the layout onto
    /// `canvas`.
    pub fn document<C: DocumentCanvas>(
        &self,
        transcript: &Transcript,
        canvas: C,
    ) -> Result<ExportArtifact> {
        let list = self.draw_list(transcript)?;
        Ok(ExportArtifact::document(
            &transcript.title,
            list.render_into(canvas),
        ))
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new()
    }
}
