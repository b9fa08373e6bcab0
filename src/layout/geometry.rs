//! Page geometry and color theme.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layout::Rgb;

/// Line advance for a font size.
///
/// A fixed approximation (`size * 0.5 + 2`), not a typographic measurement;
/// the whole engine leans on it so changing it reflows every document.
pub fn line_height(font_size: f32) -> f32 {
    font_size * 0.5 + 2.0
}

/// Fixed page dimensions and margins for the paginated document.
///
/// Units are abstract canvas units; the defaults describe an A4 page measured
/// in millimeters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    /// Page width.
    pub width: f32,

    /// Page height.
    pub height: f32,

    /// Margin on all four sides.
    pub margin: f32,

    /// Vertical space reserved above the bottom edge; the cursor never flows
    /// into it.
    pub footer_reserve: f32,
}

impl PageGeometry {
    /// A4 page (210 x 297) with a 25-unit margin.
    pub fn a4() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            margin: 25.0,
            footer_reserve: 20.0,
        }
    }

    /// Usable line width between the left and right margins.
    pub fn usable_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// The y coordinate past which content triggers a page break.
    pub fn break_threshold(&self) -> f32 {
        self.height - self.footer_reserve
    }

    /// Validate that the margins leave room to lay text out.
    pub fn validate(&self) -> Result<()> {
        if self.usable_width() <= 0.0 {
            return Err(Error::Geometry(format!(
                "margins ({}) leave no usable width on a {}-wide page",
                self.margin, self.width
            )));
        }
        if self.break_threshold() <= self.margin {
            return Err(Error::Geometry(format!(
                "footer reserve ({}) leaves no usable height on a {}-tall page",
                self.footer_reserve, self.height
            )));
        }
        Ok(())
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

/// Colors used by the document renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTheme {
    /// Page-1 title.
    pub title: Rgb,

    /// Body text and headings.
    pub body: Rgb,

    /// "You" sender label.
    pub user_label: Rgb,

    /// "AI" sender label.
    pub ai_label: Rgb,

    /// Citations, running headers, and footers.
    pub citation: Rgb,

    /// Background behind code.
    pub code_background: Rgb,

    /// Horizontal rules.
    pub rule: Rgb,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            title: Rgb(33, 37, 41),
            body: Rgb(55, 65, 81),
            user_label: Rgb(37, 99, 235),
            ai_label: Rgb(0, 0, 0),
            citation: Rgb(107, 114, 128),
            code_background: Rgb(243, 244, 246),
            rule: Rgb(200, 200, 200),
        }
    }
}
