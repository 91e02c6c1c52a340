// Text preparation: every user string is normalized, and fixed vocabulary is
// localized, before the layout code measures it.

pub mod i18n;
pub mod normalize;

pub use i18n::{Localizer, SkillLevel, BASE_LANGUAGE};
pub use normalize::normalize;
