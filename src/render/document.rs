//! Paginated document rendering: the binary-document export path.
//!
//! Each message's body is tokenized and flowed through the page composer;
//! the result is a backend-agnostic [`DrawList`]. Drawing and byte
//! production live behind the [`Canvas`](crate::layout::Canvas) seam.

use log::debug;

use crate::error::Result;
use crate::layout::{ApproxMetrics, ColorTheme, DrawList, PageComposer, PageGeometry, TextMetrics};
use crate::model::{Message, Sender, Transcript};
use crate::parser::MarkdownTokenizer;
use crate::render::ExportOptions;

/// Title shown when a session has none.
const UNTITLED_SESSION: &str = "Chat Session";

/// Lay out a transcript with default geometry, theme, and metrics.
pub fn to_draw_list(transcript: &Transcript, options: &ExportOptions) -> Result<DrawList> {
    DocumentRenderer::new(options.clone()).render(transcript)
}

/// Paginated document renderer.
pub struct DocumentRenderer {
    options: ExportOptions,
    geometry: PageGeometry,
    theme: ColorTheme,
}

impl DocumentRenderer {
    /// Create a renderer with A4 geometry and the default theme.
    pub fn new(options: ExportOptions) -> Self {
        Self {
            options,
            geometry: PageGeometry::a4(),
            theme: ColorTheme::default(),
        }
    }

    /// Override the page geometry.
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Override the color theme.
    pub fn with_theme(mut self, theme: ColorTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Render with the built-in approximate text metrics.
    pub fn render(&self, transcript: &Transcript) -> Result<DrawList> {
        self.render_with_metrics(transcript, &ApproxMetrics)
    }

    /// Render with caller-supplied text metrics (e.g. real glyph widths from
    /// a drawing backend).
    pub fn render_with_metrics<M: TextMetrics>(
        &self,
        transcript: &Transcript,
        metrics: &M,
    ) -> Result<DrawList> {
        self.geometry.validate()?;

        let title = if transcript.title.is_empty() {
            UNTITLED_SESSION
        } else {
            &transcript.title
        };
        let date_line = format!(
            "Generated on {}",
            self.options.timestamp().format("%Y-%m-%d")
        );

        let tokenizer = MarkdownTokenizer::new();
        let mut composer = PageComposer::new(
            &self.geometry,
            &self.theme,
            metrics,
            self.options.font_size.pt(),
            title,
            date_line,
        );

        for message in &transcript.messages {
            composer.message_label(message.sender);
            for token in tokenizer.tokenize(&message.text) {
                composer.token(&token);
            }
            composer.vertical_gap(12.0);

            if self.renders_citations(message) {
                composer.citations(&message.citations);
            }
            composer.vertical_gap(12.0);
        }

        let list = composer.finish();
        debug!(
            "document layout: {} messages, {} ops, {} pages",
            transcript.message_count(),
            list.len(),
            list.page_count
        );
        Ok(list)
    }

    fn renders_citations(&self, message: &Message) -> bool {
        self.options.include_citations
            && message.sender == Sender::Ai
            && message.has_citations()
    }
}
