//! Export artifacts: filenames, MIME types, and file output.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Filesystem-safe derivation of a session title.
///
/// Operates on the UTF-8 bytes: ASCII alphanumerics are lower-cased, every
/// other byte becomes `_`. Multi-byte characters therefore widen to one `_`
/// per byte.
pub fn slug(title: &str) -> String {
    title
        .bytes()
        .map(|b| {
            if b.is_ascii_alphanumeric() {
                b.to_ascii_lowercase() as char
            } else {
                '_'
            }
        })
        .collect()
}

/// A finished export: the bytes to hand to the save mechanism, plus the
/// filename and MIME type it should be saved under.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact {
    /// Suggested filename, derived from the session title.
    pub filename: String,

    /// MIME type of the content.
    pub mime_type: &'static str,

    /// Artifact bytes.
    pub content: Vec<u8>,
}

impl ExportArtifact {
    /// Markdown artifact: `<slug>.md`, `text/markdown`.
    pub fn markdown(title: &str, content: String) -> Self {
        Self {
            filename: format!("{}.md", slug(title)),
            mime_type: "text/markdown",
            content: content.into_bytes(),
        }
    }

    /// Plain text artifact: `<slug>.txt`, `text/plain`.
    pub fn text(title: &str, content: String) -> Self {
        Self {
            filename: format!("{}.txt", slug(title)),
            mime_type: "text/plain",
            content: content.into_bytes(),
        }
    }

    /// Paginated document artifact: `<slug>_report.pdf`, `application/pdf`.
    /// `content` is whatever the drawing backend's `finish` produced.
    pub fn document(title: &str, content: Vec<u8>) -> Self {
        Self {
            filename: format!("{}_report.pdf", slug(title)),
            mime_type: "application/pdf",
            content,
        }
    }

    /// Content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }

    /// Check if the artifact has no content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Content as UTF-8 text, when it is text.
    pub fn as_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.content).ok()
    }

    /// Write the artifact into `dir` under its own filename, creating the
    /// directory if needed. Returns the full path written.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.filename);
        fs::write(&path, &self.content)?;
        Ok(path)
    }
}
