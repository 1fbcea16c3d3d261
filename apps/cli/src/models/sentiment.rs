use serde::Deserialize;

/// Result of analyzing one piece of employee feedback.
///
/// Optional fields mirror the backend's fallback chain: it may return a
/// preformatted `recommendations` string, an `engagement_recommendations`
/// list, both, or neither. The renderer picks the first available and falls
/// back to fixed advice when none is present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SentimentResult {
    /// Sentiment score in [-1, 1]. Missing defaults to neutral.
    #[serde(default)]
    pub sentiment_score: f64,
    /// Free-text label such as "Very Positive"; substrings drive styling.
    pub interpretation: Option<String>,
    /// "Low" | "Medium" | "High". Missing or unrecognized defaults to Medium.
    pub attrition_risk: Option<String>,
    #[serde(default)]
    pub key_concerns: Vec<String>,
    #[serde(default)]
    pub positive_factors: Vec<String>,
    #[serde(default)]
    pub engagement_recommendations: Vec<String>,
    /// Preformatted recommendation text, preferred over the list when present.
    pub recommendations: Option<String>,
    /// Narrative summary, used by the report exporter.
    pub summary: Option<String>,
}
