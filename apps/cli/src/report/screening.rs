//! Renders a `ScreeningResult` into a report document.

use chrono::Local;

use crate::models::ScreeningResult;
use crate::report::view::ScoreTier;
use crate::report::{bullets_or_placeholder, Line, LineStyle, ReportDocument};

pub const TITLE: &str = "Resume Screening Report";

pub const NO_SKILLS_MATCHED: &str = "No skills matched.";
pub const NO_SKILLS_MISSING: &str = "None";

/// Builds the screening report. `candidate` is the uploaded file's name and
/// `position` the job description; both are echoed into the header the way
/// the result page shows them. `recommendations` comes from the advisor and
/// is never empty.
pub fn build_report(
    candidate: &str,
    position: &str,
    result: &ScreeningResult,
    recommendations: &[String],
) -> ReportDocument {
    let mut doc = ReportDocument::new(TITLE);

    doc.push_section(
        "Candidate",
        vec![
            Line::styled(format!("Candidate: {candidate}"), LineStyle::Emphasis),
            Line::normal(format!("Position: {}", summarize(position, 72))),
            Line::normal(format!("Date: {}", Local::now().format("%Y-%m-%d"))),
        ],
    );

    let score = result.rounded_score();
    let tier = ScoreTier::from_score(result.match_score);
    doc.push_section(
        "Match Overview",
        vec![
            Line::styled(
                format!("Match Score: {score}% ({} match)", tier.label()),
                tier.style(),
            ),
            match_line("Experience", result.experience_match),
            match_line("Education", result.education_match),
        ],
    );

    // Sorted alphabetically for readability, same as the result page.
    let mut matched = result.skills_matched.clone();
    matched.sort();
    doc.push_section(
        "Matched Skills",
        bullets_or_placeholder(&matched, NO_SKILLS_MATCHED),
    );

    let mut missing = result.skills_missing.clone();
    missing.sort();
    doc.push_section(
        "Missing Skills",
        bullets_or_placeholder(&missing, NO_SKILLS_MISSING),
    );

    let mut rec_lines: Vec<Line> = recommendations
        .iter()
        .map(|rec| Line::normal(format!("• {rec}")))
        .collect();
    if let Some(server_notes) = result.recommendations.as_deref() {
        for note in server_notes.lines().filter(|l| !l.trim().is_empty()) {
            rec_lines.push(Line::normal(note.trim().to_string()));
        }
    }
    doc.push_section("Recommendations", rec_lines);

    doc
}

fn match_line(label: &str, matched: bool) -> Line {
    if matched {
        Line::styled(format!("{label}: Match"), LineStyle::Success)
    } else {
        Line::styled(format!("{label}: No Match"), LineStyle::Danger)
    }
}

/// Collapses a long job description to a single header-sized line.
fn summarize(text: &str, max_chars: usize) -> String {
    let one_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if one_line.chars().count() <= max_chars {
        one_line
    } else {
        let truncated: String = one_line.chars().take(max_chars - 1).collect();
        format!("{truncated}…")
    }
}
