//! Paginated PDF writer for rendered reports.
//!
//! The writer consumes only the text of an already-rendered `ReportDocument`;
//! it never sees the original payload. Layout is a manual vertical cursor on
//! fixed US-letter geometry: each line group advances the cursor, long lines
//! are word-wrapped greedily at a fixed column width, and a page break is
//! taken when the cursor would pass the bottom margin.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream, StringFormat};

use crate::report::ReportDocument;

// US letter in point units.
const PAGE_WIDTH: f64 = 612.0;
const PAGE_HEIGHT: f64 = 792.0;
const MARGIN: f64 = 54.0;

const TITLE_SIZE: f64 = 18.0;
const HEADING_SIZE: f64 = 14.0;
const BODY_SIZE: f64 = 11.0;
const FOOTER_SIZE: f64 = 9.0;
const SECTION_GAP: f64 = 8.0;

/// Greedy wrap width in characters, approximating the usable text width of
/// Helvetica at body size between the margins.
pub const WRAP_COLUMNS: usize = 90;

// ────────────────────────────────────────────────────────────────────────────
// Line layout
// ────────────────────────────────────────────────────────────────────────────

struct TextRun {
    text: String,
    size: f64,
    y: f64,
}

/// Vertical cursor over a sequence of pages.
struct Paginator {
    pages: Vec<Vec<TextRun>>,
    y: f64,
}

impl Paginator {
    fn new() -> Self {
        Paginator {
            pages: vec![Vec::new()],
            y: PAGE_HEIGHT - MARGIN,
        }
    }

    fn push(&mut self, text: &str, size: f64) {
        let advance = size * 1.45;
        if self.y - advance < MARGIN {
            self.pages.push(Vec::new());
            self.y = PAGE_HEIGHT - MARGIN;
        }
        self.y -= advance;
        self.pages
            .last_mut()
            .expect("paginator always has a current page")
            .push(TextRun {
                text: text.to_string(),
                size,
                y: self.y,
            });
    }

    fn gap(&mut self, points: f64) {
        self.y -= points;
    }
}

/// Greedy word-wrap at a fixed column width. A single word longer than the
/// width overflows its own line rather than being split mid-word.
pub fn wrap_line(text: &str, max_columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() > max_columns {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        } else {
            current.push(' ');
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new()); // preserve intentional blank lines
    }
    lines
}

fn layout(doc: &ReportDocument) -> Vec<Vec<TextRun>> {
    let mut paginator = Paginator::new();

    paginator.push(&doc.title, TITLE_SIZE);

    for section in &doc.sections {
        paginator.gap(SECTION_GAP);
        paginator.push(&section.heading, HEADING_SIZE);
        for line in &section.lines {
            for wrapped in wrap_line(&line.text, WRAP_COLUMNS) {
                paginator.push(&wrapped, BODY_SIZE);
            }
        }
    }

    paginator.gap(SECTION_GAP);
    let footer = format!("Generated by hrlens on {}", Local::now().format("%Y-%m-%d %H:%M"));
    paginator.push(&footer, FOOTER_SIZE);

    paginator.pages
}

// ────────────────────────────────────────────────────────────────────────────
// PDF assembly
// ────────────────────────────────────────────────────────────────────────────

/// Writes the rendered report to `path` as a PDF.
pub fn write_pdf(report: &ReportDocument, path: &Path) -> Result<()> {
    let pages = layout(report);

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut page_ids: Vec<Object> = Vec::with_capacity(pages.len());
    for runs in &pages {
        let mut operations = Vec::new();
        for run in runs {
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new(
                "Tf",
                vec!["F1".into(), Object::Real(run.size as f32)],
            ));
            operations.push(Operation::new(
                "Td",
                vec![Object::Real(MARGIN as f32), Object::Real(run.y as f32)],
            ));
            operations.push(Operation::new(
                "Tj",
                vec![Object::String(
                    encode_win_ansi(&run.text),
                    StringFormat::Literal,
                )],
            ));
            operations.push(Operation::new("ET", vec![]));
        }

        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().context("encoding page content stream")?,
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        page_ids.push(page_id.into());
    }

    let page_count = page_ids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => page_ids,
            "Count" => page_count,
            "Resources" => resources_id,
            "MediaBox" => vec![
                Object::Integer(0),
                Object::Integer(0),
                Object::Real(PAGE_WIDTH as f32),
                Object::Real(PAGE_HEIGHT as f32),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    doc.save(path)
        .with_context(|| format!("writing PDF to {}", path.display()))?;
    Ok(())
}

/// Encodes report text as WinAnsi bytes for the Helvetica base font.
/// The few non-ASCII characters the renderer emits have WinAnsi code points;
/// anything else degrades to '?'.
fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '•' => 0x95,
            '·' => 0xB7,
            '°' => 0xB0,
            '…' => 0x85,
            '–' => 0x96,
            '—' => 0x97,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            _ => b'?',
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Line;

    fn small_report() -> ReportDocument {
        let mut doc = ReportDocument::new("Resume Screening Report");
        doc.push_section(
            "Match Overview",
            vec![Line::normal("Match Score: 85% (high match)")],
        );
        doc
    }

    #[test]
    fn test_wrap_short_line_is_unchanged() {
        assert_eq!(wrap_line("short line", 90), vec!["short line"]);
    }

    #[test]
    fn test_wrap_empty_line_is_preserved() {
        assert_eq!(wrap_line("", 90), vec![""]);
    }

    #[test]
    fn test_wrap_respects_column_limit() {
        let text = "word ".repeat(60);
        let lines = wrap_line(&text, 30);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(
                line.chars().count() <= 30,
                "line exceeds wrap width: {line:?}"
            );
        }
    }

    #[test]
    fn test_wrap_keeps_all_words_in_order() {
        let text = "the quick brown fox jumps over the lazy dog";
        let rejoined = wrap_line(text, 12).join(" ");
        assert_eq!(rejoined, text);
    }

    #[test]
    fn test_oversized_word_overflows_its_own_line() {
        let lines = wrap_line("supercalifragilisticexpialidocious", 10);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_write_pdf_produces_a_pdf_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");
        write_pdf(&small_report(), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"), "file should start with %PDF");

        let loaded = Document::load(&path).unwrap();
        assert_eq!(loaded.get_pages().len(), 1);
    }

    #[test]
    fn test_long_report_breaks_across_pages() {
        let mut report = ReportDocument::new("Employee Sentiment Analysis Report");
        let lines: Vec<Line> = (0..120)
            .map(|i| Line::normal(format!("Concern number {i} raised during review")))
            .collect();
        report.push_section("Key Concerns", lines);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("long.pdf");
        write_pdf(&report, &path).unwrap();

        let loaded = Document::load(&path).unwrap();
        assert!(
            loaded.get_pages().len() >= 2,
            "120 body lines should not fit on one page"
        );
    }

    #[test]
    fn test_encode_win_ansi_maps_report_glyphs() {
        assert_eq!(encode_win_ansi("• item"), vec![0x95, b' ', b'i', b't', b'e', b'm']);
        assert_eq!(encode_win_ansi("90°"), vec![b'9', b'0', 0xB0]);
        assert_eq!(encode_win_ansi("口"), vec![b'?']);
    }
}
