use serde::Deserialize;

/// Result of screening one resume against one job description.
///
/// `match_score` is integer-like on the wire but some backends emit it as a
/// float; it is deserialized as `f64` and rounded at the display boundary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScreeningResult {
    #[serde(default)]
    pub match_score: f64,
    #[serde(default)]
    pub experience_match: bool,
    #[serde(default)]
    pub education_match: bool,
    #[serde(default)]
    pub skills_matched: Vec<String>,
    #[serde(default)]
    pub skills_missing: Vec<String>,
    /// Free-text advisory from the server, shown in addition to the locally
    /// derived recommendations.
    pub recommendations: Option<String>,
}

impl ScreeningResult {
    /// Score rounded for display, clamped to the documented 0–100 range.
    pub fn rounded_score(&self) -> u32 {
        self.match_score.round().clamp(0.0, 100.0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload_deserializes_with_defaults() {
        let result: ScreeningResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result.match_score, 0.0);
        assert!(!result.experience_match);
        assert!(result.skills_matched.is_empty());
        assert!(result.recommendations.is_none());
    }

    #[test]
    fn test_float_score_is_accepted_and_rounded() {
        let result: ScreeningResult =
            serde_json::from_str(r#"{"match_score": 86.6}"#).unwrap();
        assert_eq!(result.rounded_score(), 87);
    }

    #[test]
    fn test_out_of_range_score_is_clamped_for_display() {
        let result: ScreeningResult =
            serde_json::from_str(r#"{"match_score": 140}"#).unwrap();
        assert_eq!(result.rounded_score(), 100);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let result: ScreeningResult = serde_json::from_str(
            r#"{"match_score": 72, "model_version": "x", "skills_missing": ["SQL"]}"#,
        )
        .unwrap();
        assert_eq!(result.rounded_score(), 72);
        assert_eq!(result.skills_missing, vec!["SQL"]);
    }
}
