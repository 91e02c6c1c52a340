//! Fixed-vocabulary localization for section titles, connector words and
//! skill levels.
//!
//! The table is built once per process (`Localizer::shared`) and only read
//! afterwards, so any number of renders may borrow it at the same time.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Language used when the requested one is empty or unknown.
pub const BASE_LANGUAGE: &str = "en";

// ────────────────────────────────────────────────────────────────────────────
// Canonical keys
// ────────────────────────────────────────────────────────────────────────────

pub const SUMMARY: &str = "SUMMARY";
pub const EXPERIENCE: &str = "EXPERIENCE";
pub const EDUCATION: &str = "EDUCATION";
pub const SKILLS: &str = "SKILLS";
pub const LANGUAGES: &str = "LANGUAGES";
pub const PRESENT: &str = "Present";
pub const AT: &str = "at";
/// Joins list items such as languages and contact fields.
pub const LIST_SEPARATOR: &str = " • ";

// ────────────────────────────────────────────────────────────────────────────
// Vocabulary tables
// ────────────────────────────────────────────────────────────────────────────

const EN: &[(&str, &str)] = &[
    (SUMMARY, "SUMMARY"),
    (EXPERIENCE, "EXPERIENCE"),
    (EDUCATION, "EDUCATION"),
    (SKILLS, "SKILLS"),
    (LANGUAGES, "LANGUAGES"),
    (PRESENT, "Present"),
    (AT, "at"),
    (LIST_SEPARATOR, " • "),
    ("Básico", "Basic"),
    ("básico", "Basic"),
    ("Intermedio", "Intermediate"),
    ("intermedio", "Intermediate"),
    ("Avanzado", "Advanced"),
    ("avanzado", "Advanced"),
    ("Experto", "Expert"),
    ("experto", "Expert"),
    ("Basic", "Basic"),
    ("basic", "Basic"),
    ("Intermediate", "Intermediate"),
    ("intermediate", "Intermediate"),
    ("Advanced", "Advanced"),
    ("advanced", "Advanced"),
    ("Expert", "Expert"),
    ("expert", "Expert"),
];

const ES: &[(&str, &str)] = &[
    (SUMMARY, "RESUMEN"),
    (EXPERIENCE, "EXPERIENCIA"),
    (EDUCATION, "EDUCACIÓN"),
    (SKILLS, "HABILIDADES"),
    (LANGUAGES, "IDIOMAS"),
    (PRESENT, "Presente"),
    (AT, "en"),
    (LIST_SEPARATOR, " • "),
    ("Basic", "Básico"),
    ("basic", "Básico"),
    ("Intermediate", "Intermedio"),
    ("intermediate", "Intermedio"),
    ("Advanced", "Avanzado"),
    ("advanced", "Avanzado"),
    ("Expert", "Experto"),
    ("expert", "Experto"),
    ("Básico", "Básico"),
    ("básico", "Básico"),
    ("Intermedio", "Intermedio"),
    ("intermedio", "Intermedio"),
    ("Avanzado", "Avanzado"),
    ("avanzado", "Avanzado"),
    ("Experto", "Experto"),
    ("experto", "Experto"),
];

// ────────────────────────────────────────────────────────────────────────────
// Skill levels
// ────────────────────────────────────────────────────────────────────────────

/// The four proficiency levels the form offers, independent of language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    Basic,
    Intermediate,
    Advanced,
    Expert,
}

impl SkillLevel {
    /// Resolves any spelling the form may have produced, in either language,
    /// ignoring case. `basico` without the accent is accepted too.
    pub fn parse(level: &str) -> Option<Self> {
        match level.trim().to_lowercase().as_str() {
            "basic" | "básico" | "basico" => Some(SkillLevel::Basic),
            "intermediate" | "intermedio" => Some(SkillLevel::Intermediate),
            "advanced" | "avanzado" => Some(SkillLevel::Advanced),
            "expert" | "experto" => Some(SkillLevel::Expert),
            _ => None,
        }
    }

    /// Canonical vocabulary key for this level.
    pub fn key(self) -> &'static str {
        match self {
            SkillLevel::Basic => "Basic",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Localizer
// ────────────────────────────────────────────────────────────────────────────

/// Immutable lookup: language code → canonical key → localized text.
#[derive(Debug)]
pub struct Localizer {
    tables: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

impl Localizer {
    /// Builds the built-in English and Spanish vocabulary.
    pub fn new() -> Self {
        let tables = [("en", EN), ("es", ES)]
            .into_iter()
            .map(|(lang, entries)| (lang, entries.iter().copied().collect()))
            .collect();
        Self { tables }
    }

    /// Process-wide instance, built on first use and never mutated.
    pub fn shared() -> &'static Localizer {
        static SHARED: OnceLock<Localizer> = OnceLock::new();
        SHARED.get_or_init(Localizer::new)
    }

    /// Returns the supported language for `lang`, falling back to the base one.
    pub fn resolve_language(&self, lang: &str) -> &'static str {
        let wanted = lang.trim().to_lowercase();
        self.tables
            .keys()
            .copied()
            .find(|code| *code == wanted)
            .unwrap_or(BASE_LANGUAGE)
    }

    pub fn supports(&self, lang: &str) -> bool {
        self.tables.contains_key(lang.trim().to_lowercase().as_str())
    }

    /// Exact, case-sensitive lookup of `key` in `lang`.
    /// Unknown keys come back unchanged.
    pub fn localize<'a>(&'a self, key: &'a str, lang: &str) -> &'a str {
        self.tables
            .get(self.resolve_language(lang))
            .and_then(|table| table.get(key).copied())
            .unwrap_or(key)
    }

    /// Translates a skill level into `lang`.
    ///
    /// Case variants of a known keyword collapse to one label, and feeding
    /// a label back in yields the same label. Unknown levels pass through.
    pub fn localize_level<'a>(&'a self, level: &'a str, lang: &str) -> &'a str {
        match SkillLevel::parse(level) {
            Some(known) => self.localize(known.key(), lang),
            None => level,
        }
    }
}

impl Default for Localizer {
    fn default() -> Self {
        Self::new()
    }
}
