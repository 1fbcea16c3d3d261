//! Numeric-to-visual mappings for the report widgets.
//!
//! Every mapping here is a fixed linear function or table lookup, and every
//! function is pure: payload value in, display attribute out. Rendering calls
//! them independently, so a render pass is idempotent by construction.

use crate::report::LineStyle;

// ────────────────────────────────────────────────────────────────────────────
// Match score tier (score circle)
// ────────────────────────────────────────────────────────────────────────────

/// Tier of an overall match score: high ≥ 80, medium ≥ 60, low otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreTier::High
        } else if score >= 60.0 {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreTier::High => "high",
            ScoreTier::Medium => "medium",
            ScoreTier::Low => "low",
        }
    }

    pub fn style(&self) -> LineStyle {
        match self {
            ScoreTier::High => LineStyle::Success,
            ScoreTier::Medium => LineStyle::Warning,
            ScoreTier::Low => LineStyle::Danger,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sentiment gauge
// ────────────────────────────────────────────────────────────────────────────

/// Maps a sentiment score in [-1, 1] to a gauge needle rotation in [0°, 180°].
///
/// Affine map: degrees = (score + 1) / 2 × 180. Inputs outside [-1, 1] are
/// clamped rather than rejected — the rendering layer never validates.
pub fn gauge_degrees(score: f64) -> f64 {
    (((score + 1.0) / 2.0) * 180.0).clamp(0.0, 180.0)
}

/// Gauge color band, from the normalized score n = (score + 1) / 2:
/// n < 0.33 negative, n < 0.66 neutral, otherwise positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeBand {
    Negative,
    Neutral,
    Positive,
}

impl GaugeBand {
    pub fn from_score(score: f64) -> Self {
        let normalized = (score + 1.0) / 2.0;
        if normalized < 0.33 {
            GaugeBand::Negative
        } else if normalized < 0.66 {
            GaugeBand::Neutral
        } else {
            GaugeBand::Positive
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GaugeBand::Negative => "negative",
            GaugeBand::Neutral => "neutral",
            GaugeBand::Positive => "positive",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Interpretation tone (free-text label styling)
// ────────────────────────────────────────────────────────────────────────────

/// Tone derived from substrings of the free-text interpretation label.
/// Checked in order so "very negative" is not swallowed by "negative".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentTone {
    VeryNegative,
    Negative,
    Neutral,
    VeryPositive,
    Positive,
}

impl SentimentTone {
    pub fn from_interpretation(interpretation: &str) -> Option<Self> {
        let lower = interpretation.to_lowercase();
        if lower.contains("very negative") {
            Some(SentimentTone::VeryNegative)
        } else if lower.contains("negative") {
            Some(SentimentTone::Negative)
        } else if lower.contains("neutral") {
            Some(SentimentTone::Neutral)
        } else if lower.contains("very positive") {
            Some(SentimentTone::VeryPositive)
        } else if lower.contains("positive") {
            Some(SentimentTone::Positive)
        } else {
            None
        }
    }

    pub fn style(&self) -> LineStyle {
        match self {
            SentimentTone::VeryNegative | SentimentTone::Negative => LineStyle::Danger,
            SentimentTone::Neutral => LineStyle::Normal,
            SentimentTone::VeryPositive | SentimentTone::Positive => LineStyle::Success,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Attrition risk bar
// ────────────────────────────────────────────────────────────────────────────

pub const RISK_BAR_WIDTH: usize = 24;

/// Attrition risk level. Unknown or missing labels default to Medium, the
/// same fallback the backend itself applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn from_label(label: Option<&str>) -> Self {
        match label.map(|l| l.trim().to_lowercase()).as_deref() {
            Some("low") => RiskLevel::Low,
            Some("high") => RiskLevel::High,
            _ => RiskLevel::Medium,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    /// Bar width as a percentage of full scale: Low=33, Medium=66, High=100.
    pub fn bar_percent(&self) -> u8 {
        match self {
            RiskLevel::Low => 33,
            RiskLevel::Medium => 66,
            RiskLevel::High => 100,
        }
    }

    /// Color token the bar is drawn with: success, warning, or danger.
    pub fn token(&self) -> &'static str {
        match self {
            RiskLevel::Low => "success",
            RiskLevel::Medium => "warning",
            RiskLevel::High => "danger",
        }
    }

    pub fn style(&self) -> LineStyle {
        match self {
            RiskLevel::Low => LineStyle::Success,
            RiskLevel::Medium => LineStyle::Warning,
            RiskLevel::High => LineStyle::Danger,
        }
    }
}

/// Draws the risk bar at a given percentage of `RISK_BAR_WIDTH` columns.
/// Uses '#' and '·' so the same text survives both terminal and PDF output.
pub fn risk_bar(percent: u8) -> String {
    let filled = (usize::from(percent.min(100)) * RISK_BAR_WIDTH) / 100;
    let mut bar = String::with_capacity(RISK_BAR_WIDTH + 2);
    bar.push('[');
    for i in 0..RISK_BAR_WIDTH {
        bar.push(if i < filled { '#' } else { '·' });
    }
    bar.push(']');
    bar
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
