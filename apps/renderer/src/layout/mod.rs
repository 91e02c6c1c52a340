// Layout engine: font metrics, greedy wrapping, page flow and section drawing.
// Rendering is CPU-bound and synchronous; async callers run it inside
// tokio::task::spawn_blocking.

pub mod composer;
pub mod context;
pub mod font_metrics;
pub mod geometry;
pub mod sections;
pub mod wrap;

// Re-export the public API consumed by the binary and by library users.
pub use composer::{generate_cv, layout_cv, render_document, SectionKind, SECTION_ORDER};
pub use context::RenderContext;
pub use font_metrics::{measure_text, Font, FontStyle};
pub use geometry::{a4_page_geometry, PageGeometry};
pub use wrap::{try_wrap, wrap};
