//! Per-render cursor and page state.
//!
//! A `RenderContext` is created for a single document, owned by that render
//! call, and threaded explicitly through every drawing operation. Nothing in
//! it is shared between renders.
//!
//! Pages are opened lazily: a page break only moves the cursor to the top of
//! the next page, and the backend page is started on the first draw. A gap
//! that overflows the last page therefore never leaves a blank page behind.

use tracing::debug;

use crate::backend::{DrawingBackend, Rgb};
use crate::errors::RenderError;
use crate::layout::font_metrics::{Font, FontStyle};
use crate::layout::geometry::PageGeometry;
use crate::layout::wrap::try_wrap;

/// Horizontal padding between a cell's left edge and its text.
pub const CELL_PADDING_MM: f32 = 1.0;

pub struct RenderContext<B: DrawingBackend> {
    backend: B,
    geometry: PageGeometry,
    cursor_y: f32,
    /// 1-based number of the page the cursor is on.
    page: usize,
    /// Whether `page` has been started on the backend.
    page_open: bool,
    font: Font,
    color: Rgb,
}

impl<B: DrawingBackend> RenderContext<B> {
    /// Page 1, cursor at the top margin.
    pub fn new(backend: B, geometry: PageGeometry) -> Self {
        let cursor_y = geometry.margin_top_mm;
        Self {
            backend,
            geometry,
            cursor_y,
            page: 1,
            page_open: false,
            font: Font::new(FontStyle::Regular, 10.0),
            color: Rgb(0, 0, 0),
        }
    }

    // ── state accessors ─────────────────────────────────────────────────────

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn cursor_y(&self) -> f32 {
        self.cursor_y
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Hands the backend back once layout is complete.
    pub fn into_backend(self) -> B {
        self.backend
    }

    pub fn set_font(&mut self, style: FontStyle, size_pt: f32) {
        self.font = Font::new(style, size_pt);
    }

    pub fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    // ── page flow ───────────────────────────────────────────────────────────

    /// Moves the cursor to the top of a fresh page.
    ///
    /// A page nothing was drawn on is reused rather than left blank.
    pub fn add_page(&mut self) {
        if self.page_open {
            self.page += 1;
            self.page_open = false;
            debug!(page = self.page, "page break");
        }
        self.cursor_y = self.geometry.margin_top_mm;
    }

    /// True when `height` more millimetres fit above the break line.
    pub fn fits(&self, height: f32) -> bool {
        self.cursor_y + height <= self.geometry.break_line()
    }

    /// True when the cursor sits at the top margin of its page.
    pub fn at_page_top(&self) -> bool {
        self.cursor_y <= self.geometry.margin_top_mm
    }

    /// Moves the cursor down; overflowing the break line starts a new page.
    pub fn advance(&mut self, height: f32) {
        if self.fits(height) {
            self.cursor_y += height;
        } else {
            self.add_page();
        }
    }

    /// Breaks the page first if a block of `height` would be split by the
    /// break line but fits on a fresh page. Taller blocks are left to spill.
    pub fn keep_together(&mut self, height: f32) {
        if !self.fits(height) && !self.at_page_top() && height <= self.geometry.content_height() {
            self.add_page();
        }
    }

    /// Claims a row of `height`, breaking the page when it would not fit.
    /// Returns the row's top edge.
    pub fn place_row(&mut self, height: f32) -> Result<f32, RenderError> {
        if !self.fits(height) && !self.at_page_top() {
            self.add_page();
        }
        self.open_page()?;
        let top = self.cursor_y;
        self.cursor_y += height;
        Ok(top)
    }

    fn open_page(&mut self) -> Result<(), RenderError> {
        if !self.page_open {
            self.backend.begin_page()?;
            self.page_open = true;
        }
        Ok(())
    }

    // ── measurement ─────────────────────────────────────────────────────────

    /// Width of `text` under the active font.
    pub fn measure(&self, text: &str) -> Result<f32, RenderError> {
        self.backend.measure(text, self.font)
    }

    /// Wraps `text` to `max_width` under the active font.
    pub fn wrap(&self, text: &str, max_width: f32) -> Result<Vec<String>, RenderError> {
        try_wrap(text, max_width, |candidate| self.measure(candidate))
    }

    // ── drawing ─────────────────────────────────────────────────────────────

    /// Draws one full-width line as a cell of `height` at the cursor.
    pub fn draw_line(&mut self, text: &str, height: f32) -> Result<(), RenderError> {
        let top = self.place_row(height)?;
        let x = self.geometry.margin_left_mm;
        self.draw_cell(x, top, height, text)
    }

    /// Draws text in a cell at an explicit position on the current page.
    pub fn draw_cell(&mut self, x: f32, y: f32, height: f32, text: &str) -> Result<(), RenderError> {
        self.open_page()?;
        self.backend
            .draw_text(x + CELL_PADDING_MM, y, height, text, self.font, self.color)
    }

    /// Horizontal rule across the content width at the cursor.
    pub fn draw_separator(&mut self, color: Rgb, width: f32) -> Result<(), RenderError> {
        self.open_page()?;
        let y = self.cursor_y;
        let from = (self.geometry.margin_left_mm, y);
        let to = (self.geometry.right_edge(), y);
        self.backend.draw_line(from, to, width, color)
    }
}
