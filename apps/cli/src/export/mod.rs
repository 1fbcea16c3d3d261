//! Report export.
//!
//! The exporter holds the most recent successfully rendered report — the only
//! state this tool caches — and writes it out as a PDF on request. Exporting
//! before anything has been rendered is a warning-level no-op, not a crash.

pub mod pdf;

use std::path::Path;

use tracing::info;

use crate::errors::AppError;
use crate::report::ReportDocument;

pub const SENTIMENT_REPORT_FILENAME: &str = "sentiment_analysis_report.pdf";

#[derive(Default)]
pub struct Exporter {
    last: Option<ReportDocument>,
}

impl Exporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caches a rendered report as the export source, replacing any previous one.
    pub fn remember(&mut self, doc: ReportDocument) {
        self.last = Some(doc);
    }

    /// Writes the cached report to `path`. Fails with `ExportWithoutData`
    /// (and writes nothing) when no report has been rendered yet.
    pub fn export_to(&self, path: &Path) -> Result<(), AppError> {
        let doc = self.last.as_ref().ok_or(AppError::ExportWithoutData)?;
        pdf::write_pdf(doc, path).map_err(|e| AppError::Export(e.to_string()))?;
        info!("report exported to {}", path.display());
        Ok(())
    }
}

/// Makes a report filename safe for saving: whitespace becomes '_' and
/// path-hostile characters are replaced.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            c if c.is_whitespace() => '_',
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c => c,
        })
        .collect()
}

pub fn default_screening_filename(candidate: &str) -> String {
    format!("resume_screening_{}.pdf", sanitize_filename(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::Line;

    fn rendered_report() -> ReportDocument {
        let mut doc = ReportDocument::new("Resume Screening Report");
        doc.push_section("Match Overview", vec![Line::normal("Match Score: 72%")]);
        doc
    }

    #[test]
    fn test_export_without_data_warns_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");

        let exporter = Exporter::new();
        let err = exporter.export_to(&path).unwrap_err();
        assert!(matches!(err, AppError::ExportWithoutData));
        assert!(!path.exists(), "no file should be created");
    }

    #[test]
    fn test_export_after_render_writes_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.pdf");

        let mut exporter = Exporter::new();
        exporter.remember(rendered_report());
        exporter.export_to(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_remember_replaces_the_previous_report() {
        let mut exporter = Exporter::new();
        exporter.remember(rendered_report());
        let mut second = ReportDocument::new("Employee Sentiment Analysis Report");
        second.push_section("Sentiment", vec![Line::normal("Sentiment Score: 0.40")]);
        exporter.remember(second);
        assert_eq!(
            exporter.last.as_ref().unwrap().title,
            "Employee Sentiment Analysis Report"
        );
    }

    #[test]
    fn test_sanitize_filename_replaces_whitespace_and_separators() {
        assert_eq!(sanitize_filename("jane doe"), "jane_doe");
        assert_eq!(sanitize_filename("a/b\\c:d"), "a_b_c_d");
        assert_eq!(sanitize_filename("tab\there"), "tab_here");
    }

    #[test]
    fn test_default_screening_filename() {
        assert_eq!(
            default_screening_filename("jane doe"),
            "resume_screening_jane_doe.pdf"
        );
    }
}
