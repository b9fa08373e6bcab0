//! Page-flow layout engine for the paginated document export.
//!
//! Layout is computed as a pure function of the token stream, the page
//! geometry, and a text-measurement strategy: the composer walks a cursor
//! down fixed-size pages and emits positioned [`DrawOp`]s instead of drawing
//! anything itself. The resulting [`DrawList`] can be replayed onto any
//! [`Canvas`] backend or serialized as a JSON page program.

mod canvas;
mod command;
mod composer;
mod geometry;
mod metrics;

pub use canvas::{Canvas, DocumentCanvas};
pub use command::{DrawList, DrawOp, FontFamily, FontSpec, FontStyle, Rgb};
pub use composer::PageComposer;
pub use geometry::{line_height, ColorTheme, PageGeometry};
pub use metrics::{wrap_text, ApproxMetrics, TextMetrics};
