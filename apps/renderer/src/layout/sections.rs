//! Section renderers: header, summary, experience, education, skills and
//! languages.
//!
//! Every user string goes through `normalize` first; fixed vocabulary comes
//! from the `Locale`. Blocks are fully prepared (normalized, localized and
//! wrapped) before anything is drawn, so the strings that were measured are
//! exactly the strings that get drawn.

use crate::backend::{DrawingBackend, Rgb};
use crate::errors::RenderError;
use crate::layout::context::RenderContext;
use crate::layout::font_metrics::FontStyle;
use crate::models::{Education, Experience, PersonalInfo, Skill};
use crate::text::i18n::{self, Localizer};
use crate::text::normalize;

// ────────────────────────────────────────────────────────────────────────────
// Visual constants (millimetres / points)
// ────────────────────────────────────────────────────────────────────────────

pub const TEXT_COLOR: Rgb = Rgb(55, 53, 47);
pub const LIGHT_TEXT_COLOR: Rgb = Rgb(111, 111, 111);
pub const SEPARATOR_COLOR: Rgb = Rgb(227, 226, 224);
pub const SEPARATOR_WIDTH_MM: f32 = 0.2;

const NAME_SIZE_PT: f32 = 18.0;
const NAME_LINE_H: f32 = 12.0;
const GAP_AFTER_NAME: f32 = 3.0;
const CONTACT_SIZE_PT: f32 = 9.0;
const CONTACT_LINE_H: f32 = 5.0;
const GAP_AFTER_CONTACT: f32 = 5.0;
const GAP_AFTER_HEADER: f32 = 8.0;

const TITLE_SIZE_PT: f32 = 10.0;
const TITLE_LINE_H: f32 = 6.0;
const GAP_AFTER_TITLE: f32 = 3.0;

const BODY_SIZE_PT: f32 = 10.0;
const BODY_LINE_H: f32 = 5.0;
const SECTION_GAP: f32 = 5.0;

const ITEM_TITLE_LINE_H: f32 = 5.0;
const DATE_SIZE_PT: f32 = 9.0;
const DATE_LINE_H: f32 = 4.0;
const DESCRIPTION_LINE_H: f32 = 4.0;
const ITEM_GAP: f32 = 3.0;

/// Skill columns, measured from the left margin.
pub const SKILL_COLUMN_OFFSETS: [f32; 2] = [0.0, 80.0];
const SKILL_ROW_H: f32 = 5.0;

// ────────────────────────────────────────────────────────────────────────────
// Locale
// ────────────────────────────────────────────────────────────────────────────

/// Shared vocabulary bound to the display language of one render.
#[derive(Clone, Copy)]
pub struct Locale<'a> {
    localizer: &'a Localizer,
    lang: &'static str,
}

impl<'a> Locale<'a> {
    pub fn new(localizer: &'a Localizer, lang: &str) -> Self {
        Self {
            localizer,
            lang: localizer.resolve_language(lang),
        }
    }

    pub fn lang(&self) -> &'static str {
        self.lang
    }

    pub fn text(&self, key: &'static str) -> &'a str {
        self.localizer.localize(key, self.lang)
    }

    pub fn level(&self, level: &str) -> String {
        self.localizer.localize_level(level, self.lang).to_string()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pure text helpers
// ────────────────────────────────────────────────────────────────────────────

/// `start - end`, or `start - <present>` for an ongoing entry.
///
/// Without a start date only the end date is shown; with neither, nothing.
pub fn date_range(start: &str, end: &str, present: &str) -> Option<String> {
    match (start.is_empty(), end.is_empty()) {
        (true, true) => None,
        (true, false) => Some(end.to_string()),
        (false, true) => Some(format!("{start} - {present}")),
        (false, false) => Some(format!("{start} - {end}")),
    }
}

/// `primary <connector> secondary`, dropping the connector when a side is empty.
pub fn item_title(primary: &str, connector: &str, secondary: &str) -> String {
    match (primary.is_empty(), secondary.is_empty()) {
        (false, false) => format!("{primary} {connector} {secondary}"),
        (false, true) => primary.to_string(),
        (true, false) => secondary.to_string(),
        (true, true) => String::new(),
    }
}

/// `name (level)` with the level translated; `None` for a nameless skill.
pub fn skill_label(skill: &Skill, locale: Locale<'_>) -> Option<String> {
    let name = normalize(&skill.name);
    if name.is_empty() {
        return None;
    }
    let level = normalize(&skill.level);
    if level.is_empty() {
        Some(name)
    } else {
        Some(format!("{name} ({})", locale.level(&level)))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Header
// ────────────────────────────────────────────────────────────────────────────

/// Name, contact line and the rule under them.
pub fn render_header<B: DrawingBackend>(
    ctx: &mut RenderContext<B>,
    info: &PersonalInfo,
    locale: Locale<'_>,
) -> Result<(), RenderError> {
    let width = ctx.geometry().content_width();

    let name = normalize(&info.full_name);
    if !name.is_empty() {
        ctx.set_color(TEXT_COLOR);
        ctx.set_font(FontStyle::Bold, NAME_SIZE_PT);
        for line in ctx.wrap(&name, width)? {
            ctx.draw_line(&line, NAME_LINE_H)?;
        }
        ctx.advance(GAP_AFTER_NAME);
    }

    let contact = contact_parts(info);
    if !contact.is_empty() {
        ctx.set_color(LIGHT_TEXT_COLOR);
        ctx.set_font(FontStyle::Regular, CONTACT_SIZE_PT);
        let joined = contact.join(locale.text(i18n::LIST_SEPARATOR));
        for line in ctx.wrap(&joined, width)? {
            ctx.draw_line(&line, CONTACT_LINE_H)?;
        }
    }
    ctx.advance(GAP_AFTER_CONTACT);

    ctx.draw_separator(SEPARATOR_COLOR, SEPARATOR_WIDTH_MM)?;
    ctx.advance(GAP_AFTER_HEADER);
    Ok(())
}

fn contact_parts(info: &PersonalInfo) -> Vec<String> {
    [
        ("", &info.email),
        ("", &info.phone),
        ("", &info.location),
        ("LinkedIn: ", &info.linked_in),
        ("GitHub: ", &info.git_hub),
        ("", &info.website),
    ]
    .into_iter()
    .filter_map(|(prefix, value)| {
        let value = normalize(value);
        (!value.is_empty()).then(|| format!("{prefix}{value}"))
    })
    .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Section title
// ────────────────────────────────────────────────────────────────────────────

/// Title, rule and gap. `first_content_h` is the height of whatever follows,
/// so the title is never stranded at the bottom of a page.
fn render_section_title<B: DrawingBackend>(
    ctx: &mut RenderContext<B>,
    title: &str,
    first_content_h: f32,
) -> Result<(), RenderError> {
    ctx.keep_together(TITLE_LINE_H + GAP_AFTER_TITLE + first_content_h);
    ctx.set_color(TEXT_COLOR);
    ctx.set_font(FontStyle::Bold, TITLE_SIZE_PT);
    ctx.draw_line(title, TITLE_LINE_H)?;
    ctx.draw_separator(SEPARATOR_COLOR, SEPARATOR_WIDTH_MM)?;
    ctx.advance(GAP_AFTER_TITLE);
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Paragraph sections
// ────────────────────────────────────────────────────────────────────────────

/// Titled section holding one wrapped paragraph. Empty text emits nothing.
fn render_paragraph_section<B: DrawingBackend>(
    ctx: &mut RenderContext<B>,
    title: &str,
    text: &str,
) -> Result<(), RenderError> {
    if text.is_empty() {
        return Ok(());
    }
    let width = ctx.geometry().content_width();
    ctx.set_font(FontStyle::Regular, BODY_SIZE_PT);
    let lines = ctx.wrap(text, width)?;

    render_section_title(ctx, title, BODY_LINE_H)?;
    ctx.set_color(TEXT_COLOR);
    ctx.set_font(FontStyle::Regular, BODY_SIZE_PT);
    for line in &lines {
        ctx.draw_line(line, BODY_LINE_H)?;
    }
    ctx.advance(SECTION_GAP);
    Ok(())
}

pub fn render_summary<B: DrawingBackend>(
    ctx: &mut RenderContext<B>,
    summary: &str,
    locale: Locale<'_>,
) -> Result<(), RenderError> {
    render_paragraph_section(ctx, locale.text(i18n::SUMMARY), &normalize(summary))
}

/// Language names joined with the localized bullet, wrapped as one paragraph.
pub fn render_languages<B: DrawingBackend>(
    ctx: &mut RenderContext<B>,
    languages: &[String],
    locale: Locale<'_>,
) -> Result<(), RenderError> {
    let names: Vec<String> = languages
        .iter()
        .map(|l| normalize(l))
        .filter(|l| !l.is_empty())
        .collect();
    let joined = names.join(locale.text(i18n::LIST_SEPARATOR));
    render_paragraph_section(ctx, locale.text(i18n::LANGUAGES), &joined)
}

// ────────────────────────────────────────────────────────────────────────────
// Item sections (experience, education)
// ────────────────────────────────────────────────────────────────────────────

/// One job or degree, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemBlock {
    pub title_lines: Vec<String>,
    pub dates: Option<String>,
    pub description_lines: Vec<String>,
}

impl ItemBlock {
    pub fn height(&self) -> f32 {
        self.title_lines.len() as f32 * ITEM_TITLE_LINE_H
            + self.dates.as_ref().map_or(0.0, |_| DATE_LINE_H)
            + self.description_lines.len() as f32 * DESCRIPTION_LINE_H
    }

    pub fn is_empty(&self) -> bool {
        self.title_lines.is_empty() && self.dates.is_none() && self.description_lines.is_empty()
    }
}

/// Wraps each part of an item under the font it will be drawn with.
fn prepare_item<B: DrawingBackend>(
    ctx: &mut RenderContext<B>,
    title: &str,
    dates: Option<String>,
    description: &str,
) -> Result<ItemBlock, RenderError> {
    let width = ctx.geometry().content_width();

    ctx.set_font(FontStyle::Bold, TITLE_SIZE_PT);
    let title_lines = ctx.wrap(title, width)?;

    ctx.set_font(FontStyle::Regular, BODY_SIZE_PT);
    let description_lines = ctx.wrap(&normalize(description), width)?;

    Ok(ItemBlock {
        title_lines,
        dates,
        description_lines,
    })
}

fn draw_item<B: DrawingBackend>(
    ctx: &mut RenderContext<B>,
    block: &ItemBlock,
) -> Result<(), RenderError> {
    ctx.set_color(TEXT_COLOR);
    ctx.set_font(FontStyle::Bold, TITLE_SIZE_PT);
    for line in &block.title_lines {
        ctx.draw_line(line, ITEM_TITLE_LINE_H)?;
    }

    if let Some(dates) = &block.dates {
        ctx.set_color(LIGHT_TEXT_COLOR);
        ctx.set_font(FontStyle::Oblique, DATE_SIZE_PT);
        ctx.draw_line(dates, DATE_LINE_H)?;
    }

    if !block.description_lines.is_empty() {
        ctx.set_color(TEXT_COLOR);
        ctx.set_font(FontStyle::Regular, BODY_SIZE_PT);
        for line in &block.description_lines {
            ctx.draw_line(line, DESCRIPTION_LINE_H)?;
        }
    }
    Ok(())
}

/// Draws item blocks in order, moving a block to the next page rather than
/// splitting it whenever it fits on one page.
fn render_item_section<B: DrawingBackend>(
    ctx: &mut RenderContext<B>,
    title: &str,
    blocks: &[ItemBlock],
) -> Result<(), RenderError> {
    let Some(first) = blocks.first() else {
        return Ok(());
    };
    render_section_title(ctx, title, first.height())?;

    for (i, block) in blocks.iter().enumerate() {
        ctx.keep_together(block.height());
        draw_item(ctx, block)?;
        if i + 1 < blocks.len() {
            ctx.advance(ITEM_GAP);
        }
    }
    ctx.advance(SECTION_GAP);
    Ok(())
}

pub fn render_experience<B: DrawingBackend>(
    ctx: &mut RenderContext<B>,
    entries: &[Experience],
    locale: Locale<'_>,
) -> Result<(), RenderError> {
    let mut blocks = Vec::with_capacity(entries.len());
    for entry in entries {
        let title = item_title(
            &normalize(&entry.position),
            locale.text(i18n::AT),
            &normalize(&entry.company),
        );
        let dates = date_range(
            &normalize(&entry.start_date),
            &normalize(&entry.end_date),
            locale.text(i18n::PRESENT),
        );
        let block = prepare_item(ctx, &title, dates, &entry.description)?;
        if !block.is_empty() {
            blocks.push(block);
        }
    }
    render_item_section(ctx, locale.text(i18n::EXPERIENCE), &blocks)
}

pub fn render_education<B: DrawingBackend>(
    ctx: &mut RenderContext<B>,
    entries: &[Education],
    locale: Locale<'_>,
) -> Result<(), RenderError> {
    let mut blocks = Vec::with_capacity(entries.len());
    for entry in entries {
        let title = item_title(
            &normalize(&entry.degree),
            "-",
            &normalize(&entry.institution),
        );
        let dates = date_range(
            &normalize(&entry.start_date),
            &normalize(&entry.end_date),
            locale.text(i18n::PRESENT),
        );
        let block = prepare_item(ctx, &title, dates, &entry.description)?;
        if !block.is_empty() {
            blocks.push(block);
        }
    }
    render_item_section(ctx, locale.text(i18n::EDUCATION), &blocks)
}

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// Two-column grid: even entries on the left, odd entries on the right,
/// a new row every second entry.
pub fn render_skills<B: DrawingBackend>(
    ctx: &mut RenderContext<B>,
    skills: &[Skill],
    locale: Locale<'_>,
) -> Result<(), RenderError> {
    let labels: Vec<String> = skills
        .iter()
        .filter_map(|s| skill_label(s, locale))
        .collect();
    if labels.is_empty() {
        return Ok(());
    }

    render_section_title(ctx, locale.text(i18n::SKILLS), SKILL_ROW_H)?;
    ctx.set_color(TEXT_COLOR);
    ctx.set_font(FontStyle::Regular, BODY_SIZE_PT);

    let left = ctx.geometry().margin_left_mm;
    let mut row_top = ctx.cursor_y();
    for (i, label) in labels.iter().enumerate() {
        let column = i % 2;
        if column == 0 {
            row_top = ctx.place_row(SKILL_ROW_H)?;
        }
        ctx.draw_cell(left + SKILL_COLUMN_OFFSETS[column], row_top, SKILL_ROW_H, label)?;
    }
    ctx.advance(SECTION_GAP);
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{DrawOp, RecordingBackend};
    use crate::layout::context::CELL_PADDING_MM;
    use crate::layout::font_metrics::Font;
    use crate::layout::geometry::a4_page_geometry;

    fn make_ctx() -> RenderContext<RecordingBackend> {
        RenderContext::new(RecordingBackend::new(), a4_page_geometry())
    }

    fn skill(name: &str, level: &str) -> Skill {
        Skill {
            name: name.to_string(),
            level: level.to_string(),
        }
    }

    fn experience(position: &str, company: &str, end: &str, description: &str) -> Experience {
        Experience {
            company: company.to_string(),
            position: position.to_string(),
            start_date: "2020".to_string(),
            end_date: end.to_string(),
            description: description.to_string(),
        }
    }

    fn text_cells(backend: &RecordingBackend) -> Vec<(usize, f32, f32, String)> {
        backend
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { page, x, y, text, .. } => Some((*page, *x, *y, text.clone())),
                _ => None,
            })
            .collect()
    }

    // ── text helpers ────────────────────────────────────────────────────────

    #[test]
    fn test_date_range_with_end() {
        assert_eq!(
            date_range("2019", "2021", "Present").as_deref(),
            Some("2019 - 2021")
        );
    }

    #[test]
    fn test_date_range_ongoing_uses_present_label() {
        assert_eq!(
            date_range("2019", "", "Presente").as_deref(),
            Some("2019 - Presente")
        );
    }

    #[test]
    fn test_date_range_missing_dates() {
        assert_eq!(date_range("", "2021", "Present").as_deref(), Some("2021"));
        assert_eq!(date_range("", "", "Present"), None);
    }

    #[test]
    fn test_item_title_drops_connector_for_missing_side() {
        assert_eq!(item_title("Engineer", "at", "Acme"), "Engineer at Acme");
        assert_eq!(item_title("Engineer", "at", ""), "Engineer");
        assert_eq!(item_title("", "at", "Acme"), "Acme");
        assert_eq!(item_title("", "at", ""), "");
    }

    #[test]
    fn test_skill_label_translates_level() {
        let loc = Localizer::new();
        let es = Locale::new(&loc, "es");
        let en = Locale::new(&loc, "en");
        assert_eq!(skill_label(&skill("Rust", "Advanced"), es).unwrap(), "Rust (Avanzado)");
        assert_eq!(skill_label(&skill("Rust", "avanzado"), en).unwrap(), "Rust (Advanced)");
        assert_eq!(skill_label(&skill("Rust", "BÃ¡sico"), en).unwrap(), "Rust (Basic)");
        assert_eq!(skill_label(&skill("Rust", ""), en).unwrap(), "Rust");
        assert_eq!(skill_label(&skill("  ", "Expert"), en), None);
    }

    // ── skills grid ─────────────────────────────────────────────────────────

    #[test]
    fn test_skills_alternate_columns_and_rows() {
        let loc = Localizer::new();
        let mut ctx = make_ctx();
        let skills: Vec<Skill> = (0..5).map(|i| skill(&format!("S{i}"), "")).collect();
        render_skills(&mut ctx, &skills, Locale::new(&loc, "en")).unwrap();

        let cells: Vec<_> = text_cells(ctx.backend())
            .into_iter()
            .filter(|(_, _, _, t)| t.starts_with('S') && t.len() == 2)
            .collect();
        assert_eq!(cells.len(), 5);

        let left = 25.0 + CELL_PADDING_MM;
        let right = 25.0 + 80.0 + CELL_PADDING_MM;
        for (i, (_, x, _, _)) in cells.iter().enumerate() {
            let want = if i % 2 == 0 { left } else { right };
            assert_eq!(*x, want, "skill {i} in wrong column");
        }
        assert_eq!(cells[0].2, cells[1].2, "0 and 1 share a row");
        assert_eq!(cells[2].2, cells[3].2, "2 and 3 share a row");
        assert_eq!(cells[2].2 - cells[0].2, 5.0);
        assert_eq!(cells[4].2 - cells[2].2, 5.0);
    }

    #[test]
    fn test_skills_section_title_is_localized() {
        let loc = Localizer::new();
        let mut ctx = make_ctx();
        render_skills(&mut ctx, &[skill("Go", "expert")], Locale::new(&loc, "es")).unwrap();
        assert_eq!(ctx.backend().texts(), vec!["HABILIDADES", "Go (Experto)"]);
    }

    #[test]
    fn test_nameless_skills_emit_nothing() {
        let loc = Localizer::new();
        let mut ctx = make_ctx();
        render_skills(&mut ctx, &[skill("", "Basic")], Locale::new(&loc, "en")).unwrap();
        assert!(ctx.backend().ops().is_empty());
    }

    // ── item sections ───────────────────────────────────────────────────────

    #[test]
    fn test_experience_emits_title_dates_description() {
        let loc = Localizer::new();
        let mut ctx = make_ctx();
        let entries = [experience("Engineer", "Acme", "", "Built things.")];
        render_experience(&mut ctx, &entries, Locale::new(&loc, "es")).unwrap();
        assert_eq!(
            ctx.backend().texts(),
            vec!["EXPERIENCIA", "Engineer en Acme", "2020 - Presente", "Built things."]
        );
    }

    #[test]
    fn test_item_fonts_follow_roles() {
        let loc = Localizer::new();
        let mut ctx = make_ctx();
        let entries = [experience("Engineer", "Acme", "2022", "Built things.")];
        render_experience(&mut ctx, &entries, Locale::new(&loc, "en")).unwrap();
        let styles: Vec<(FontStyle, f32)> = ctx
            .backend()
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { font, .. } => Some((font.style, font.size_pt)),
                _ => None,
            })
            .collect();
        assert_eq!(
            styles,
            vec![
                (FontStyle::Bold, 10.0),
                (FontStyle::Bold, 10.0),
                (FontStyle::Oblique, 9.0),
                (FontStyle::Regular, 10.0),
            ]
        );
    }

    #[test]
    fn test_gap_between_items_but_not_after_last() {
        let loc = Localizer::new();
        let mut ctx = make_ctx();
        let entries = [
            experience("A", "X", "2021", ""),
            experience("B", "Y", "2022", ""),
        ];
        render_experience(&mut ctx, &entries, Locale::new(&loc, "en")).unwrap();
        let cells = text_cells(ctx.backend());
        // title(6) + gap(3) = 34; item A: 34..43; gap 3; item B starts at 46.
        let a = cells.iter().find(|c| c.3 == "A at X").unwrap();
        let b = cells.iter().find(|c| c.3 == "B at Y").unwrap();
        assert_eq!(a.2, 34.0);
        assert_eq!(b.2, 46.0);
        // B ends at 55, then only the 5mm section gap.
        assert_eq!(ctx.cursor_y(), 60.0);
    }

    #[test]
    fn test_education_title_uses_dash() {
        let loc = Localizer::new();
        let mut ctx = make_ctx();
        let entries = [Education {
            institution: "Universidad de Chile".to_string(),
            degree: "Ingeniería".to_string(),
            start_date: "2010".to_string(),
            end_date: "2015".to_string(),
            description: String::new(),
        }];
        render_education(&mut ctx, &entries, Locale::new(&loc, "es")).unwrap();
        assert_eq!(
            ctx.backend().texts(),
            vec!["EDUCACIÓN", "Ingeniería - Universidad de Chile", "2010 - 2015"]
        );
    }

    #[test]
    fn test_item_block_moves_to_next_page_instead_of_splitting() {
        let loc = Localizer::new();
        let mut ctx = make_ctx();
        for _ in 0..45 {
            ctx.draw_line("filler", 5.0).unwrap();
        }
        let description = "word ".repeat(60);
        let entries = [experience("Engineer", "Acme", "2022", &description)];
        render_experience(&mut ctx, &entries, Locale::new(&loc, "en")).unwrap();

        let cells = text_cells(ctx.backend());
        let item_pages: Vec<usize> = cells
            .iter()
            .filter(|c| c.3 != "filler")
            .map(|c| c.0)
            .collect();
        assert!(item_pages.iter().all(|&p| p == 2), "pages: {item_pages:?}");
    }

    #[test]
    fn test_oversized_item_block_spills_across_pages() {
        let loc = Localizer::new();
        let mut ctx = make_ctx();
        // Far more description than one 247mm page can hold.
        let description = "lorem ipsum dolor sit amet ".repeat(400);
        let entries = [experience("Engineer", "Acme", "", &description)];
        render_experience(&mut ctx, &entries, Locale::new(&loc, "en")).unwrap();

        let cells = text_cells(ctx.backend());
        assert_eq!(cells[0].0, 1, "title starts on the first page");
        assert!(cells.last().unwrap().0 > 1, "description continues on later pages");
    }

    // ── paragraph sections ─────────────────────────────────────────────────

    #[test]
    fn test_summary_lines_fit_content_width() {
        let loc = Localizer::new();
        let mut ctx = make_ctx();
        let summary = "Lorem ipsum dolor sit amet consectetur adipiscing elit sed do ".repeat(7);
        render_summary(&mut ctx, &summary, Locale::new(&loc, "en")).unwrap();

        let texts = ctx.backend().texts();
        assert_eq!(texts[0], "SUMMARY");
        let body = &texts[1..];
        assert!(body.len() > 1, "400+ chars should wrap");
        for line in body {
            let width = ctx
                .backend()
                .measure(line, Font::new(FontStyle::Regular, 10.0))
                .unwrap();
            assert!(width <= 160.0, "{line:?} is {width}mm");
        }
    }

    #[test]
    fn test_blank_summary_emits_nothing() {
        let loc = Localizer::new();
        let mut ctx = make_ctx();
        render_summary(&mut ctx, " \0 ", Locale::new(&loc, "en")).unwrap();
        assert!(ctx.backend().ops().is_empty());
    }

    #[test]
    fn test_languages_joined_with_bullet() {
        let loc = Localizer::new();
        let mut ctx = make_ctx();
        let langs = vec!["Español".to_string(), "".to_string(), "InglÃ©s".to_string()];
        render_languages(&mut ctx, &langs, Locale::new(&loc, "es")).unwrap();
        assert_eq!(ctx.backend().texts(), vec!["IDIOMAS", "Español • Inglés"]);
    }

    // ── header ──────────────────────────────────────────────────────────────

    #[test]
    fn test_header_contact_line() {
        let loc = Localizer::new();
        let mut ctx = make_ctx();
        let info = PersonalInfo {
            full_name: "Ana Pérez".to_string(),
            email: "ana@example.com".to_string(),
            location: "Madrid".to_string(),
            git_hub: "github.com/ana".to_string(),
            ..Default::default()
        };
        render_header(&mut ctx, &info, Locale::new(&loc, "en")).unwrap();
        assert_eq!(
            ctx.backend().texts(),
            vec!["Ana Pérez", "ana@example.com • Madrid • GitHub: github.com/ana"]
        );
        // 25 + 12 + 3 + 5 + 5 = 50 → rule, then 8mm.
        assert!(ctx
            .backend()
            .ops()
            .iter()
            .any(|op| matches!(op, DrawOp::Line { from: (_, y), .. } if *y == 50.0)));
        assert_eq!(ctx.cursor_y(), 58.0);
    }
}
