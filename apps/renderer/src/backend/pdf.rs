//! PDF output through `pdf-writer`.
//!
//! Pages are accumulated as content streams while the layout runs and only
//! assembled into a document in `finish`, once the page count is known. The
//! three standard Helvetica faces are referenced, never embedded, with
//! WinAnsi encoding. Nothing time-dependent is written apart from the
//! record's own timestamp, so identical input gives identical bytes.

use chrono::{DateTime, Datelike, Timelike, Utc};
use pdf_writer::{Content, Date, Filter, Name, Pdf, Rect, Ref, Str, TextStr};
use tracing::debug;

use crate::backend::{DrawingBackend, Rgb};
use crate::errors::RenderError;
use crate::layout::font_metrics::{encode_winansi, measure_text, Font, FontStyle, MM_PER_PT};
use crate::layout::geometry::PageGeometry;

const FONT_STYLES: [FontStyle; 3] = [FontStyle::Regular, FontStyle::Bold, FontStyle::Oblique];

/// Baseline offset below the vertical centre of a text cell, in font sizes.
const BASELINE_SHIFT: f32 = 0.3;

/// Metadata written to the document information dictionary.
#[derive(Debug, Clone)]
pub struct DocumentInfo {
    pub title: String,
    pub creator: String,
    pub created_at: DateTime<Utc>,
}

pub struct PdfBackend {
    geometry: PageGeometry,
    info: DocumentInfo,
    pages: Vec<Content>,
}

impl PdfBackend {
    pub fn new(geometry: PageGeometry, info: DocumentInfo) -> Self {
        Self {
            geometry,
            info,
            pages: Vec::new(),
        }
    }

    fn current_page(&mut self) -> Result<&mut Content, RenderError> {
        self.pages
            .last_mut()
            .ok_or_else(|| RenderError::Measurement("drawing before the first page".into()))
    }

    /// Top-left millimetres → bottom-left points.
    fn to_pdf(&self, x_mm: f32, y_mm: f32) -> (f32, f32) {
        (
            x_mm / MM_PER_PT,
            (self.geometry.page_height_mm - y_mm) / MM_PER_PT,
        )
    }
}

fn resource_name(style: FontStyle) -> &'static [u8] {
    match style {
        FontStyle::Regular => b"F1",
        FontStyle::Bold => b"F2",
        FontStyle::Oblique => b"F3",
    }
}

fn pdf_date(at: &DateTime<Utc>) -> Date {
    Date::new(u16::try_from(at.year()).unwrap_or(1970))
        .month(at.month() as u8)
        .day(at.day() as u8)
        .hour(at.hour() as u8)
        .minute(at.minute() as u8)
        .second(at.second() as u8)
        .utc_offset_hour(0)
        .utc_offset_minute(0)
}

impl DrawingBackend for PdfBackend {
    fn measure(&self, text: &str, font: Font) -> Result<f32, RenderError> {
        measure_text(text, font)
    }

    fn begin_page(&mut self) -> Result<(), RenderError> {
        self.pages.push(Content::new());
        debug!(page = self.pages.len(), "PDF page started");
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
        let baseline = y + height / 2.0 + BASELINE_SHIFT * font.size_mm();
        let (px, py) = self.to_pdf(x, baseline);
        let bytes = encode_winansi(text);
        let [r, g, b] = color.to_unit();

        self.current_page()?
            .set_fill_rgb(r, g, b)
            .begin_text()
            .set_font(Name(resource_name(font.style)), font.size_pt)
            .next_line(px, py)
            .show(Str(&bytes))
            .end_text();
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Rgb,
    ) -> Result<(), RenderError> {
        let (x1, y1) = self.to_pdf(from.0, from.1);
        let (x2, y2) = self.to_pdf(to.0, to.1);
        let [r, g, b] = color.to_unit();

        self.current_page()?
            .set_stroke_rgb(r, g, b)
            .set_line_width(width / MM_PER_PT)
            .move_to(x1, y1)
            .line_to(x2, y2)
            .stroke();
        Ok(())
    }

    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn finish(self) -> Result<Vec<u8>, RenderError> {
        if self.pages.is_empty() {
            return Err(RenderError::OutputSerialization(
                "document has no pages".into(),
            ));
        }

        let mut pdf = Pdf::new();
        let mut next_id = 1i32;
        let mut alloc = || {
            let r = Ref::new(next_id);
            next_id += 1;
            r
        };

        let catalog_id = alloc();
        let pages_id = alloc();
        let info_id = alloc();
        let font_ids: Vec<(FontStyle, Ref)> =
            FONT_STYLES.iter().map(|&style| (style, alloc())).collect();

        let n = self.pages.len();
        let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
        let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

        for (style, font_ref) in &font_ids {
            pdf.type1_font(*font_ref)
                .base_font(Name(style.base_font().as_bytes()))
                .encoding_predefined(Name(b"WinAnsiEncoding"));
        }

        for (i, c) in self.pages.into_iter().enumerate() {
            let raw = c.finish();
            let compressed = miniz_oxide::deflate::compress_to_vec_zlib(raw.as_slice(), 6);
            pdf.stream(content_ids[i], &compressed)
                .filter(Filter::FlateDecode);
        }

        pdf.catalog(catalog_id).pages(pages_id);
        pdf.pages(pages_id)
            .kids(page_ids.iter().copied())
            .count(n as i32);

        let width_pt = self.geometry.page_width_mm / MM_PER_PT;
        let height_pt = self.geometry.page_height_mm / MM_PER_PT;
        for i in 0..n {
            let mut page = pdf.page(page_ids[i]);
            page.media_box(Rect::new(0.0, 0.0, width_pt, height_pt))
                .parent(pages_id)
                .contents(content_ids[i]);
            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            for (style, font_ref) in &font_ids {
                fonts.pair(Name(resource_name(*style)), *font_ref);
            }
        }

        pdf.document_info(info_id)
            .title(TextStr(&self.info.title))
            .creator(TextStr(&self.info.creator))
            .creation_date(pdf_date(&self.info.created_at));

        Ok(pdf.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::geometry::a4_page_geometry;

    fn make_info() -> DocumentInfo {
        DocumentInfo {
            title: "Ana Pérez".to_string(),
            creator: "cv-render".to_string(),
            created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        }
    }

    fn draw_sample(backend: &mut PdfBackend) {
        let font = Font::new(FontStyle::Bold, 18.0);
        backend.begin_page().unwrap();
        backend
            .draw_text(26.0, 25.0, 12.0, "Ana Pérez", font, Rgb(55, 53, 47))
            .unwrap();
        backend
            .draw_line((25.0, 40.0), (185.0, 40.0), 0.2, Rgb(227, 226, 224))
            .unwrap();
    }

    #[test]
    fn test_finish_without_pages_fails() {
        let backend = PdfBackend::new(a4_page_geometry(), make_info());
        let result = backend.finish();
        assert!(matches!(result, Err(RenderError::OutputSerialization(_))));
    }

    #[test]
    fn test_drawing_before_page_fails() {
        let mut backend = PdfBackend::new(a4_page_geometry(), make_info());
        let font = Font::new(FontStyle::Regular, 10.0);
        let result = backend.draw_text(25.0, 25.0, 5.0, "x", font, Rgb(0, 0, 0));
        assert!(matches!(result, Err(RenderError::Measurement(_))));
    }

    #[test]
    fn test_output_is_pdf() {
        let mut backend = PdfBackend::new(a4_page_geometry(), make_info());
        draw_sample(&mut backend);
        assert_eq!(backend.page_count(), 1);
        let bytes = backend.finish().unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        let tail = String::from_utf8_lossy(&bytes[bytes.len().saturating_sub(64)..]).to_string();
        assert!(tail.contains("%%EOF"), "missing EOF marker: {tail}");
    }

    #[test]
    fn test_output_is_deterministic() {
        let mut a = PdfBackend::new(a4_page_geometry(), make_info());
        let mut b = PdfBackend::new(a4_page_geometry(), make_info());
        draw_sample(&mut a);
        draw_sample(&mut b);
        assert_eq!(a.finish().unwrap(), b.finish().unwrap());
    }

    #[test]
    fn test_coordinates_flip_to_bottom_left_points() {
        let backend = PdfBackend::new(a4_page_geometry(), make_info());
        let (x, y) = backend.to_pdf(0.0, 297.0);
        assert!(x.abs() < 1e-3 && y.abs() < 1e-3);
        let (_, top) = backend.to_pdf(0.0, 0.0);
        assert!((top - 841.89).abs() < 0.01, "A4 height in points, got {top}");
    }
}
