//! Greedy word wrap against a caller-supplied width measurement.
//!
//! Same greedy accumulation as a line-count simulation, but it keeps the
//! lines. Breaks happen only between words; a single word wider than the
//! limit gets a line of its own and overflows.

use std::convert::Infallible;

/// Splits `text` into display lines no wider than `max_width`.
///
/// `measure` returns the rendered width of a candidate line under the active
/// font. Its first error aborts the wrap.
pub fn try_wrap<F, E>(text: &str, max_width: f32, mut measure: F) -> Result<Vec<String>, E>
where
    F: FnMut(&str) -> Result<f32, E>,
{
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate = format!("{current} {word}");
        if measure(&candidate)? <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    Ok(lines)
}

/// `try_wrap` for measurements that cannot fail.
pub fn wrap<F>(text: &str, max_width: f32, mut measure: F) -> Vec<String>
where
    F: FnMut(&str) -> f32,
{
    match try_wrap(text, max_width, |s| Ok::<f32, Infallible>(measure(s))) {
        Ok(lines) => lines,
        Err(never) => match never {},
    }
}
