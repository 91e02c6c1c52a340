//! Drawing capability the layout engine renders against.
//!
//! The layout code only ever talks to `DrawingBackend`; which concrete
//! backend turns the calls into bytes is the caller's choice.

pub mod pdf;
pub mod recording;

use serde::{Deserialize, Serialize};

use crate::errors::RenderError;
use crate::layout::font_metrics::Font;

pub use pdf::{DocumentInfo, PdfBackend};
pub use recording::{DrawOp, RecordingBackend};

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Components scaled to the 0.0–1.0 range PDF operators expect.
    pub fn to_unit(self) -> [f32; 3] {
        [self.0, self.1, self.2].map(|c| c as f32 / 255.0)
    }
}

/// Primitive operations a backend must provide.
///
/// Coordinates are millimetres from the top-left corner of the current page.
/// Text is placed as a cell: `(x, y)` is the cell's top-left corner and
/// `height` its line height; the backend picks the baseline inside it.
pub trait DrawingBackend {
    /// Rendered width of `text` under `font`, in millimetres.
    fn measure(&self, text: &str, font: Font) -> Result<f32, RenderError>;

    /// Starts a new page; subsequent drawing lands on it.
    fn begin_page(&mut self) -> Result<(), RenderError>;

    fn draw_text(
        &mut self,
        x: f32,
        y: f32,
        height: f32,
        text: &str,
        font: Font,
        color: Rgb,
    ) -> Result<(), RenderError>;

    fn draw_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Rgb,
    ) -> Result<(), RenderError>;

    fn page_count(&self) -> usize;

    /// Serializes everything drawn so far into the final document bytes.
    fn finish(self) -> Result<Vec<u8>, RenderError>
    where
        Self: Sized;
}
