//! Result rendering.
//!
//! A render pass maps one response payload onto a `ReportDocument`: a title
//! plus ordered sections of already-formatted text lines. The document is the
//! sole state other components may read — terminal printing walks it, and the
//! PDF exporter re-lays out exactly the same text. Builders are pure, so
//! rendering the same payload twice yields the same document.

pub mod screening;
pub mod sentiment;
pub mod view;

use colored::Colorize;

/// Style token attached to a rendered line. The terminal maps tokens to ANSI
/// colors; the PDF exporter ignores them and prints plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Normal,
    Emphasis,
    Success,
    Warning,
    Danger,
    /// Placeholder text substituted for missing optional data.
    Placeholder,
}

#[derive(Debug, Clone)]
pub struct Line {
    pub text: String,
    pub style: LineStyle,
}

impl Line {
    pub fn normal(text: impl Into<String>) -> Self {
        Self::styled(text, LineStyle::Normal)
    }

    pub fn styled(text: impl Into<String>, style: LineStyle) -> Self {
        Line {
            text: text.into(),
            style,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Section {
    pub heading: String,
    pub lines: Vec<Line>,
}

#[derive(Debug, Clone)]
pub struct ReportDocument {
    pub title: String,
    pub sections: Vec<Section>,
}

impl ReportDocument {
    pub fn new(title: impl Into<String>) -> Self {
        ReportDocument {
            title: title.into(),
            sections: Vec::new(),
        }
    }

    pub fn push_section(&mut self, heading: impl Into<String>, lines: Vec<Line>) {
        self.sections.push(Section {
            heading: heading.into(),
            lines,
        });
    }
}

/// Prints a rendered report to the terminal with color styling.
pub fn print_document(doc: &ReportDocument) {
    println!();
    println!("{}", doc.title.cyan().bold());
    println!("{}", "─".repeat(doc.title.chars().count()).dimmed());

    for section in &doc.sections {
        println!();
        println!("{}", section.heading.bold());
        for line in &section.lines {
            let rendered = match line.style {
                LineStyle::Normal => line.text.normal(),
                LineStyle::Emphasis => line.text.bold(),
                LineStyle::Success => line.text.green(),
                LineStyle::Warning => line.text.yellow(),
                LineStyle::Danger => line.text.red(),
                LineStyle::Placeholder => line.text.dimmed(),
            };
            println!("  {rendered}");
        }
    }
    println!();
}

/// Formats list entries as bullets, or the given placeholder when empty.
pub(crate) fn bullets_or_placeholder(items: &[String], placeholder: &str) -> Vec<Line> {
    if items.is_empty() {
        vec![Line::styled(placeholder, LineStyle::Placeholder)]
    } else {
        items
            .iter()
            .map(|item| Line::normal(format!("• {item}")))
            .collect()
    }
}
