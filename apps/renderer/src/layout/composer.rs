//! Document Composer: header, then every non-empty section in fixed order,
//! then one finished document.
//!
//! # Entry points
//! - `render_document` lays a record out on any `DrawingBackend` and hands
//!   the backend back, so the caller chooses what the output is.
//! - `generate_cv` is the PDF path: A4 geometry, `PdfBackend`, bytes out.
//! - `layout_cv` is the same layout recorded as `DrawOp`s.
//!
//! Rendering is synchronous and owns its `RenderContext`; the only state
//! shared between concurrent renders is the read-only `Localizer`. Any error
//! aborts the whole document, so a caller never sees partial output.

use tracing::{debug, error, info};

use crate::backend::{DocumentInfo, DrawingBackend, PdfBackend, RecordingBackend};
use crate::errors::RenderError;
use crate::layout::context::RenderContext;
use crate::layout::geometry::{a4_page_geometry, PageGeometry};
use crate::layout::sections::{
    render_education, render_experience, render_header, render_languages, render_skills,
    render_summary, Locale,
};
use crate::models::CvRecord;
use crate::text::{normalize, Localizer};

/// Body sections in the order they appear on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Languages,
}

pub const SECTION_ORDER: [SectionKind; 5] = [
    SectionKind::Summary,
    SectionKind::Experience,
    SectionKind::Education,
    SectionKind::Skills,
    SectionKind::Languages,
];

impl SectionKind {
    /// Whether the record has anything backing this section.
    pub fn is_present(self, cv: &CvRecord) -> bool {
        match self {
            SectionKind::Summary => !cv.personal_info.summary.trim().is_empty(),
            SectionKind::Experience => !cv.experience.is_empty(),
            SectionKind::Education => !cv.education.is_empty(),
            SectionKind::Skills => !cv.skills.is_empty(),
            SectionKind::Languages => !cv.languages.is_empty(),
        }
    }

    fn render<B: DrawingBackend>(
        self,
        ctx: &mut RenderContext<B>,
        cv: &CvRecord,
        locale: Locale<'_>,
    ) -> Result<(), RenderError> {
        match self {
            SectionKind::Summary => render_summary(ctx, &cv.personal_info.summary, locale),
            SectionKind::Experience => render_experience(ctx, &cv.experience, locale),
            SectionKind::Education => render_education(ctx, &cv.education, locale),
            SectionKind::Skills => render_skills(ctx, &cv.skills, locale),
            SectionKind::Languages => render_languages(ctx, &cv.languages, locale),
        }
    }
}

/// Lays `cv` out on `backend` and returns the backend with every page drawn.
pub fn render_document<B: DrawingBackend>(
    cv: &CvRecord,
    localizer: &Localizer,
    geometry: PageGeometry,
    backend: B,
) -> Result<B, RenderError> {
    let locale = Locale::new(localizer, &cv.language);
    info!(
        language = locale.lang(),
        experience = cv.experience.len(),
        education = cv.education.len(),
        skills = cv.skills.len(),
        languages = cv.languages.len(),
        "rendering CV"
    );

    let mut ctx = RenderContext::new(backend, geometry);
    render_header(&mut ctx, &cv.personal_info, locale)?;

    for kind in SECTION_ORDER {
        if kind.is_present(cv) {
            debug!(section = ?kind, page = ctx.page(), "section");
            kind.render(&mut ctx, cv, locale)?;
        }
    }

    Ok(ctx.into_backend())
}

/// Renders `cv` to PDF bytes.
pub fn generate_cv(cv: &CvRecord, localizer: &Localizer) -> Result<Vec<u8>, RenderError> {
    let geometry = a4_page_geometry();
    let info = DocumentInfo {
        title: normalize(&cv.personal_info.full_name),
        creator: format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        created_at: cv.created_at,
    };

    let result = render_document(cv, localizer, geometry.clone(), PdfBackend::new(geometry, info))
        .and_then(|backend| {
            let pages = backend.page_count();
            let bytes = backend.finish()?;
            info!(pages, bytes = bytes.len(), "CV rendered");
            Ok(bytes)
        });

    if let Err(e) = &result {
        error!(code = e.code(), "CV render failed: {e}");
    }
    result
}

/// Same layout as `generate_cv`, recorded instead of written as PDF.
pub fn layout_cv(cv: &CvRecord, localizer: &Localizer) -> Result<RecordingBackend, RenderError> {
    render_document(cv, localizer, a4_page_geometry(), RecordingBackend::new())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
