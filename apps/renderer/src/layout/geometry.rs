//! Page geometry in millimetres, origin at the top-left corner of the page.

use serde::{Deserialize, Serialize};

/// Layout parameters for every page of the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub margin_left_mm: f32,
    pub margin_top_mm: f32,
    pub margin_right_mm: f32,
    /// Content never starts below `page_height_mm - margin_bottom_mm`.
    pub margin_bottom_mm: f32,
}

impl PageGeometry {
    /// Usable text width; also the wrap width for full-width paragraphs.
    pub fn content_width(&self) -> f32 {
        self.page_width_mm - self.margin_left_mm - self.margin_right_mm
    }

    /// Vertical space between the top margin and the break line.
    pub fn content_height(&self) -> f32 {
        self.page_height_mm - self.margin_top_mm - self.margin_bottom_mm
    }

    /// Cursor position past which a new page starts.
    pub fn break_line(&self) -> f32 {
        self.page_height_mm - self.margin_bottom_mm
    }

    pub fn right_edge(&self) -> f32 {
        self.page_width_mm - self.margin_right_mm
    }
}

/// A4 portrait with 25mm margins on every side (160mm × 247mm of content).
pub fn a4_page_geometry() -> PageGeometry {
    PageGeometry {
        page_width_mm: 210.0,
        page_height_mm: 297.0,
        margin_left_mm: 25.0,
        margin_top_mm: 25.0,
        margin_right_mm: 25.0,
        margin_bottom_mm: 25.0,
    }
}
