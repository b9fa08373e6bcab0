//! Export options and configuration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Output format for an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Paginated document (`application/pdf` artifact via a drawing backend).
    #[default]
    Document,

    /// Markdown file.
    Markdown,

    /// Plain text file.
    Text,
}

/// Body font size for the paginated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSize {
    /// 9pt body text.
    Small,

    /// 10pt body text.
    #[default]
    Medium,

    /// 12pt body text.
    Large,
}

impl FontSize {
    /// Body size in points. Headings, labels, and code derive from this with
    /// fixed deltas.
    pub fn pt(&self) -> f32 {
        match self {
            FontSize::Small => 9.0,
            FontSize::Medium => 10.0,
            FontSize::Large => 12.0,
        }
    }
}

/// Options controlling an export.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Which artifact to produce.
    pub format: OutputFormat,

    /// Render "Sources:" blocks on the document path. Ignored by the
    /// Markdown and plain-text renderers, which always list citations when a
    /// message has them.
    pub include_citations: bool,

    /// Body font size (document path only).
    pub font_size: FontSize,

    /// Export timestamp for header/date lines. `None` means now; fix it for
    /// reproducible output.
    pub exported_at: Option<DateTime<Utc>>,
}

impl ExportOptions {
    /// Create options with defaults (document format, citations included,
    /// medium font).
    pub fn new() -> Self {
        Self {
            include_citations: true,
            ..Self::default()
        }
    }

    /// Set the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable citation rendering on the document path.
    pub fn with_citations(mut self, include: bool) -> Self {
        self.include_citations = include;
        self
    }

    /// Set the body font size.
    pub fn with_font_size(mut self, size: FontSize) -> Self {
        self.font_size = size;
        self
    }

    /// Pin the export timestamp.
    pub fn with_exported_at(mut self, at: DateTime<Utc>) -> Self {
        self.exported_at = Some(at);
        self
    }

    /// The effective export timestamp.
    pub(crate) fn timestamp(&self) -> DateTime<Utc> {
        self.exported_at.unwrap_or_else(Utc::now)
    }
}
