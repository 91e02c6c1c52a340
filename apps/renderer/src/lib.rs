//! Résumé layout engine: turns a `CvRecord` into a paginated A4 PDF.
//!
//! The core (`text`, `layout`, `backend`) is synchronous and deterministic:
//! the same record always produces the same bytes. `input` and `output` are
//! the caller-side adapters used by the `cv-render` binary.

pub mod backend;
pub mod config;
pub mod errors;
pub mod input;
pub mod layout;
pub mod models;
pub mod output;
pub mod text;

pub use errors::{InputError, RenderError};
pub use layout::{generate_cv, layout_cv, render_document};
pub use models::CvRecord;
pub use text::{normalize, Localizer};
