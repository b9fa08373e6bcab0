//! Drawing-backend seam.
//!
//! The layout engine never draws; it emits a [`DrawList`](crate::layout::DrawList).
//! An adapter over a concrete PDF-drawing library implements [`Canvas`] (and
//! [`DocumentCanvas`] when it can produce final document bytes), and
//! [`DrawList::replay`] drives it.

use crate::layout::{DrawList, DrawOp, FontSpec, Rgb};

/// A paginated drawing surface.
///
/// Implementations receive fully resolved commands: absolute positions, a
/// complete [`FontSpec`] per text run, explicit colors. No drawing state is
/// carried between calls.
pub trait Canvas {
    /// Start page `number` (1-indexed, strictly sequential).
    fn begin_page(&mut self, number: u32);

    /// Draw `text` with its baseline at `(x, y)`.
    fn draw_text(&mut self, x: f32, y: f32, text: &str, font: &FontSpec, color: Rgb);

    /// Fill a rectangle with top-left corner `(x, y)`.
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, fill: Rgb);

    /// Stroke a line from `(x1, y1)` to `(x2, y2)`.
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Rgb);
}

/// A canvas that can finalize into document bytes (the `application/pdf`
/// artifact body).
pub trait DocumentCanvas: Canvas {
    /// Consume the canvas and return the finished document.
    fn finish(self) -> Vec<u8>;
}

impl DrawList {
    /// Replay every command onto `canvas`, in order.
    pub fn replay<C: Canvas>(&self, canvas: &mut C) {
        for op in &self.ops {
            match op {
                DrawOp::BeginPage { number } => canvas.begin_page(*number),
                DrawOp::Text {
                    x,
                    y,
                    text,
                    font,
                    color,
                } => canvas.draw_text(*x, *y, text, font, *color),
                DrawOp::Rect {
                    x,
                    y,
                    width,
                    height,
                    fill,
                } => canvas.fill_rect(*x, *y, *width, *height, *fill),
                DrawOp::Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    color,
                } => canvas.draw_line(*x1, *y1, *x2, *y2, *color),
            }
        }
    }

    /// Replay onto a [`DocumentCanvas`] and return the finished bytes.
    pub fn render_into<C: DocumentCanvas>(&self, mut canvas: C) -> Vec<u8> {
        self.replay(&mut canvas);
        canvas.finish()
    }
}
