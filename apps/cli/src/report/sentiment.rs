//! Renders a `SentimentResult` into a report document.

use crate::models::SentimentResult;
use crate::report::view::{gauge_degrees, risk_bar, GaugeBand, RiskLevel, SentimentTone};
use crate::report::{bullets_or_placeholder, Line, LineStyle, ReportDocument};

pub const TITLE: &str = "Employee Sentiment Analysis Report";

pub const NO_CONCERNS: &str = "No significant concerns detected";
pub const NO_POSITIVES: &str = "No specific positive factors highlighted";
pub const NO_SUMMARY: &str = "No summary provided.";

/// Fixed advice used when the payload carries no recommendations at all.
pub const FALLBACK_RECOMMENDATIONS: [&str; 2] = [
    "Continue monitoring employee engagement",
    "Consider follow-up discussions for more detailed feedback",
];

pub fn build_report(result: &SentimentResult) -> ReportDocument {
    let mut doc = ReportDocument::new(TITLE);

    let interpretation = result.interpretation.as_deref().unwrap_or("Neutral");
    let tone_style = SentimentTone::from_interpretation(interpretation)
        .map(|t| t.style())
        .unwrap_or(LineStyle::Normal);
    let band = GaugeBand::from_score(result.sentiment_score);
    doc.push_section(
        "Sentiment",
        vec![
            Line::normal(format!("Sentiment Score: {:.2}", result.sentiment_score)),
            Line::normal(format!(
                "Gauge: {:.0}° of 180° ({} band)",
                gauge_degrees(result.sentiment_score),
                band.label()
            )),
            Line::styled(format!("Interpretation: {interpretation}"), tone_style),
        ],
    );

    let risk = RiskLevel::from_label(result.attrition_risk.as_deref());
    doc.push_section(
        "Attrition Risk",
        vec![Line::styled(
            format!(
                "{} {} Risk ({}%)",
                risk_bar(risk.bar_percent()),
                risk.label(),
                risk.bar_percent()
            ),
            risk.style(),
        )],
    );

    doc.push_section(
        "Summary",
        vec![match result.summary.as_deref() {
            Some(summary) if !summary.trim().is_empty() => Line::normal(summary.trim()),
            _ => Line::styled(NO_SUMMARY, LineStyle::Placeholder),
        }],
    );

    doc.push_section(
        "Key Concerns",
        bullets_or_placeholder(&result.key_concerns, NO_CONCERNS),
    );
    doc.push_section(
        "Positive Factors",
        bullets_or_placeholder(&result.positive_factors, NO_POSITIVES),
    );

    doc.push_section(
        "Engagement Recommendations",
        recommendation_lines(result),
    );

    doc
}

/// Recommendation fallback chain: the preformatted `recommendations` string
/// wins, then the `engagement_recommendations` list, then fixed advice.
fn recommendation_lines(result: &SentimentResult) -> Vec<Line> {
    if let Some(text) = result.recommendations.as_deref() {
        let lines: Vec<Line> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(Line::normal)
            .collect();
        if !lines.is_empty() {
            return lines;
        }
    }

    if !result.engagement_recommendations.is_empty() {
        return result
            .engagement_recommendations
            .iter()
            .map(|rec| Line::normal(format!("• {rec}")))
            .collect();
    }

    FALLBACK_RECOMMENDATIONS
        .iter()
        .map(|rec| Line::normal(format!("• {rec}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section<'a>(doc: &'a ReportDocument, heading: &str) -> &'a crate::report::Section {
        doc.sections
            .iter()
            .find(|s| s.heading == heading)
            .unwrap_or_else(|| panic!("missing section {heading}"))
    }

    #[test]
    fn test_high_risk_renders_full_bar_with_danger_style() {
        let result = SentimentResult {
            attrition_risk: Some("High".to_string()),
            ..Default::default()
        };
        let doc = build_report(&result);
        let risk = &section(&doc, "Attrition Risk").lines[0];
        assert!(risk.text.contains("High Risk (100%)"));
        assert!(risk.text.contains(&"#".repeat(24)));
        assert_eq!(risk.style, LineStyle::Danger);
    }

    #[test]
    fn test_missing_risk_defaults_to_medium() {
        let doc = build_report(&SentimentResult::default());
        let risk = &section(&doc, "Attrition Risk").lines[0];
        assert!(risk.text.contains("Medium Risk (66%)"));
        assert_eq!(risk.style, LineStyle::Warning);
    }

    #[test]
    fn test_missing_interpretation_defaults_to_neutral() {
        let doc = build_report(&SentimentResult::default());
        let sentiment = section(&doc, "Sentiment");
        assert_eq!(sentiment.lines[2].text, "Interpretation: Neutral");
    }

    #[test]
    fn test_gauge_line_shows_degrees_and_band() {
        let result = SentimentResult {
            sentiment_score: 1.0,
            ..Default::default()
        };
        let doc = build_report(&result);
        let gauge = &section(&doc, "Sentiment").lines[1];
        assert!(gauge.text.contains("180°"));
        assert!(gauge.text.contains("positive band"));
    }

    #[test]
    fn test_empty_lists_get_placeholders() {
        let doc = build_report(&SentimentResult::default());
        assert_eq!(section(&doc, "Key Concerns").lines[0].text, NO_CONCERNS);
        assert_eq!(
            section(&doc, "Positive Factors").lines[0].text,
            NO_POSITIVES
        );
        assert_eq!(section(&doc, "Summary").lines[0].text, NO_SUMMARY);
    }

    #[test]
    fn test_preformatted_recommendations_win_over_list() {
        let result = SentimentResult {
            recommendations: Some("• Do A\n• Do B".to_string()),
            engagement_recommendations: vec!["Do C".to_string()],
            ..Default::default()
        };
        let doc = build_report(&result);
        let recs = section(&doc, "Engagement Recommendations");
        assert_eq!(recs.lines.len(), 2);
        assert_eq!(recs.lines[0].text, "• Do A");
    }

    #[test]
    fn test_engagement_list_is_bulleted_when_no_preformatted_text() {
        let result = SentimentResult {
            engagement_recommendations: vec!["Hold regular check-ins".to_string()],
            ..Default::default()
        };
        let doc = build_report(&result);
        let recs = section(&doc, "Engagement Recommendations");
        assert_eq!(recs.lines[0].text, "• Hold regular check-ins");
    }

    #[test]
    fn test_fallback_recommendations_when_payload_has_none() {
        let doc = build_report(&SentimentResult::default());
        let recs = section(&doc, "Engagement Recommendations");
        assert_eq!(recs.lines.len(), 2);
        assert!(recs.lines[0].text.contains(FALLBACK_RECOMMENDATIONS[0]));
    }

    #[test]
    fn test_render_is_idempotent() {
        let result = SentimentResult {
            sentiment_score: 0.4,
            interpretation: Some("Positive".to_string()),
            key_concerns: vec!["pay".to_string()],
            ..Default::default()
        };
        let first = build_report(&result);
        let second = build_report(&result);
        assert_eq!(first.sections.len(), second.sections.len());
        for (a, b) in first.sections.iter().zip(second.sections.iter()) {
            assert_eq!(a.heading, b.heading);
            let texts_a: Vec<&str> = a.lines.iter().map(|l| l.text.as_str()).collect();
            let texts_b: Vec<&str> = b.lines.iter().map(|l| l.text.as_str()).collect();
            assert_eq!(texts_a, texts_b);
        }
    }
}
