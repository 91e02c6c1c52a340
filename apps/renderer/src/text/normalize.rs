//! Repairs user text that went through a Latin-1 / UTF-8 round trip before
//! it reached us (`Ã¡` instead of `á` and friends).
//!
//! `normalize` is total and idempotent: unknown sequences pass through, and a
//! second pass over its output is a no-op.

/// Mis-decoded sequences and their repair. Longer sequences come first so a
/// three-character `â€x` is never shadowed by a shorter entry.
const MOJIBAKE: &[(&str, &str)] = &[
    ("â€¢", "•"),
    ("â€\u{201C}", "–"),
    ("â€\u{201D}", "—"),
    ("â€™", "’"),
    ("â€˜", "‘"),
    ("â€œ", "“"),
    ("â€\u{9D}", "”"),
    ("Ã¡", "á"),
    ("Ã©", "é"),
    ("Ã\u{AD}", "í"),
    ("Ã³", "ó"),
    ("Ãº", "ú"),
    ("Ã±", "ñ"),
    ("Ã¼", "ü"),
    ("Ã\u{81}", "Á"),
    ("Ã‰", "É"),
    ("Ã\u{8D}", "Í"),
    ("Ã“", "Ó"),
    ("Ãš", "Ú"),
    ("Ã‘", "Ñ"),
];

/// Known-bad whole words, matched after the mojibake pass has run.
const BAD_TOKENS: &[(&str, &str)] = &[
    ("BÃ sico", "Básico"),
    ("bÃ sico", "básico"),
    ("Basico", "Básico"),
    ("basico", "básico"),
    ("intermedio", "Intermedio"),
    ("avanzado", "Avanzado"),
    ("experto", "Experto"),
    ("Experiéncia", "Experiencia"),
    ("Habilidádes", "Habilidades"),
];

/// Cleans a free-text field before it is measured or drawn.
///
/// Strips NUL bytes, repairs mis-decoded accents, fixes a handful of known-bad
/// tokens and trims surrounding whitespace.
pub fn normalize(text: &str) -> String {
    let without_nul: String = text.chars().filter(|&c| c != '\0').collect();
    let repaired = replace_sequences(&without_nul);
    let fixed = replace_tokens(&repaired);
    fixed.trim().to_string()
}

/// Single left-to-right pass; replaced output is never rescanned.
fn replace_sequences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    'scan: while let Some(c) = rest.chars().next() {
        if c == 'Ã' || c == 'â' {
            for (bad, good) in MOJIBAKE {
                if let Some(tail) = rest.strip_prefix(bad) {
                    out.push_str(good);
                    rest = tail;
                    continue 'scan;
                }
            }
        }
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

fn replace_tokens(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut prev: Option<char> = None;

    'scan: while let Some(c) = rest.chars().next() {
        if !prev.is_some_and(char::is_alphanumeric) {
            for (bad, good) in BAD_TOKENS {
                if let Some(tail) = rest.strip_prefix(bad) {
                    if !tail.chars().next().is_some_and(char::is_alphanumeric) {
                        out.push_str(good);
                        prev = good.chars().last();
                        rest = tail;
                        continue 'scan;
                    }
                }
            }
        }
        out.push(c);
        prev = Some(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        "   ",
        "Plain ASCII text",
        "EducaciÃ³n",
        "BÃ¡sico",
        "bÃ sico",
        "Nivel basico en inglÃ©s",
        "\0Ingeniero\0 de software\0",
        "  Madrid, EspaÃ±a  ",
        "â€œquotedâ€\u{9D} â€¢ item",
        "â€œbasico",
        "ExperiÃ©ncia en HabilidÃ¡des",
        "intermedios y avanzado",
        "ÃÃ¡Ã",
    ];

    #[test]
    fn test_repairs_accented_vowels() {
        assert_eq!(normalize("EducaciÃ³n"), "Educación");
        assert_eq!(normalize("InglÃ©s"), "Inglés");
        assert_eq!(normalize("EspaÃ±a"), "España");
        assert_eq!(normalize("mÃ\u{AD}o"), "mío");
        assert_eq!(normalize("ÃšLTIMO"), "ÚLTIMO");
    }

    #[test]
    fn test_repairs_known_bad_tokens() {
        assert_eq!(normalize("BÃ¡sico"), "Básico");
        assert_eq!(normalize("BÃ sico"), "Básico");
        assert_eq!(normalize("Basico"), "Básico");
        assert_eq!(normalize("intermedio"), "Intermedio");
        assert_eq!(normalize("experto"), "Experto");
        assert_eq!(normalize("ExperiÃ©ncia"), "Experiencia");
        assert_eq!(normalize("HabilidÃ¡des"), "Habilidades");
    }

    #[test]
    fn test_tokens_only_match_whole_words() {
        assert_eq!(normalize("intermedios"), "intermedios");
        assert_eq!(normalize("nivel intermedio."), "nivel Intermedio.");
        assert_eq!(normalize("superexperto"), "superexperto");
    }

    #[test]
    fn test_strips_nul_and_trims() {
        assert_eq!(normalize("\0 Ingeniero\0 de software \0"), "Ingeniero de software");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_unknown_sequences_pass_through() {
        assert_eq!(normalize("Ã plain"), "Ã plain");
        assert_eq!(normalize("日本語"), "日本語");
    }

    #[test]
    fn test_repairs_punctuation() {
        assert_eq!(normalize("a â€¢ b"), "a • b");
        assert_eq!(normalize("2019 â€\u{201C} 2021"), "2019 – 2021");
        assert_eq!(normalize("donâ€™t"), "don’t");
    }

    #[test]
    fn test_idempotent() {
        for sample in SAMPLES {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_never_contains_nul() {
        for sample in SAMPLES {
            assert!(!normalize(sample).contains('\0'), "NUL left in {sample:?}");
        }
    }
}
