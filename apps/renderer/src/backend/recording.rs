//! Backend that records draw calls instead of producing a PDF.
//!
//! Measures with the same metric tables as `PdfBackend`, so a layout recorded
//! here matches the geometry of the real document exactly. Used for layout
//! dumps and as the test double for geometry assertions.

use serde::{Deserialize, Serialize};

use crate::backend::{DrawingBackend, Rgb};
use crate::errors::RenderError;
use crate::layout::font_metrics::{measure_text, Font};

/// One recorded drawing call. `page` is 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    BeginPage {
        page: usize,
    },
    Text {
        page: usize,
        x: f32,
        y: f32,
        height: f32,
        text: String,
        font: Font,
        color: Rgb,
    },
    Line {
        page: usize,
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Rgb,
    },
}

#[derive(Debug, Default)]
pub struct RecordingBackend {
    ops: Vec<DrawOp>,
    pages: usize,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }

    /// Text of every recorded text cell, in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawingBackend for RecordingBackend {
    fn measure(&self, text: &str, font: Font) -> Result<f32, RenderError> {
        measure_text(text, font)
    }

    fn begin_page(&mut self) -> Result<(), RenderError> {
        self.pages += 1;
        self.ops.push(DrawOp::BeginPage { page: self.pages });
        Ok(())
    }

    fn draw_text(
        &mut self,
        x: f32,
        y: f32,
        height: f32,
        text: &str,
        font: Font,
        color: Rgb,
    ) -> Result<(), RenderError> {
        self.ops.push(DrawOp::Text {
            page: self.pages,
            x,
            y,
            height,
            text: text.to_string(),
            font,
            color,
        });
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Rgb,
    ) -> Result<(), RenderError> {
        self.ops.push(DrawOp::Line {
            page: self.pages,
            from,
            to,
            width,
            color,
        });
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.pages
    }

    /// The recorded operations as pretty-printed JSON.
    fn finish(self) -> Result<Vec<u8>, RenderError> {
        serde_json::to_vec_pretty(&self.ops)
            .map_err(|e| RenderError::OutputSerialization(format!("layout dump: {e}")))
    }
}
