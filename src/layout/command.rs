//! Positioned draw commands and the draw list they form.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::layout::PageGeometry;

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Font family used by a draw command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontFamily {
    /// Proportional body face.
    Proportional,
    /// Fixed-width face for code.
    Monospace,
}

/// Font style used by a draw command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    /// Regular weight.
    Normal,
    /// Bold weight.
    Bold,
    /// Italic slant.
    Italic,
}

/// A fully resolved font selection.
///
/// Every text command carries its own spec; there is no implicit current
/// font threaded through the draw list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// Font family.
    pub family: FontFamily,

    /// Font style.
    pub style: FontStyle,

    /// Size in points.
    pub size: f32,
}

impl FontSpec {
    /// Proportional regular at the given size.
    pub fn body(size: f32) -> Self {
        Self {
            family: FontFamily::Proportional,
            style: FontStyle::Normal,
            size,
        }
    }

    /// Proportional bold at the given size.
    pub fn bold(size: f32) -> Self {
        Self {
            family: FontFamily::Proportional,
            style: FontStyle::Bold,
            size,
        }
    }

    /// Proportional italic at the given size.
    pub fn italic(size: f32) -> Self {
        Self {
            family: FontFamily::Proportional,
            style: FontStyle::Italic,
            size,
        }
    }

    /// Monospace regular at the given size.
    pub fn mono(size: f32) -> Self {
        Self {
            family: FontFamily::Monospace,
            style: FontStyle::Normal,
            size,
        }
    }
}

/// One positioned draw command on the paginated canvas.
///
/// Coordinates are in canvas units with the origin at the top-left of the
/// current page; `y` is the text baseline for [`DrawOp::Text`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// Start a new page. Page numbers are 1-indexed and strictly sequential.
    BeginPage {
        /// 1-indexed page number.
        number: u32,
    },

    /// Draw a run of text at a baseline position.
    Text {
        /// Left edge of the run.
        x: f32,
        /// Baseline.
        y: f32,
        /// Text to draw.
        text: String,
        /// Resolved font.
        font: FontSpec,
        /// Fill color.
        color: Rgb,
    },

    /// Draw a filled rectangle.
    Rect {
        /// Left edge.
        x: f32,
        /// Top edge.
        y: f32,
        /// Width.
        width: f32,
        /// Height.
        height: f32,
        /// Fill color.
        fill: Rgb,
    },

    /// Draw a straight line.
    Line {
        /// Start x.
        x1: f32,
        /// Start y.
        y1: f32,
        /// End x.
        x2: f32,
        /// End y.
        y2: f32,
        /// Stroke color.
        color: Rgb,
    },
}

/// The ordered draw commands for one paginated document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawList {
    /// Commands in draw order.
    pub ops: Vec<DrawOp>,

    /// Total number of pages begun.
    pub page_count: u32,

    /// Geometry the list was laid out against.
    pub geometry: PageGeometry,
}

impl DrawList {
    /// Number of commands.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the list has no commands.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterate over the text drawn, in draw order.
    pub fn text_runs(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Serialize the page program as JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}
