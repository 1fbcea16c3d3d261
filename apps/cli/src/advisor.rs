//! Screening recommendation deriver.
//!
//! A pure rule table: each rule inspects one facet of the screening result
//! independently and appends its advisory string in fixed order. The final
//! fallback guarantees the list is never empty.

use crate::models::ScreeningResult;
use crate::report::view::ScoreTier;

pub fn derive_recommendations(result: &ScreeningResult) -> Vec<String> {
    let mut recommendations = Vec::new();

    // Rule 1: overall score tier.
    match ScoreTier::from_score(result.match_score) {
        ScoreTier::Low => recommendations.push(
            "Consider exploring candidates with more relevant skills for this position."
                .to_string(),
        ),
        ScoreTier::High => recommendations.push(
            "This candidate appears to be a strong match for the position. Consider moving \
             forward with an interview."
                .to_string(),
        ),
        ScoreTier::Medium => recommendations.push(
            "This candidate has some relevant skills but may need additional training in \
             certain areas."
                .to_string(),
        ),
    }

    // Rule 2: experience mismatch.
    if !result.experience_match {
        recommendations.push(
            "The candidate lacks the required experience level. Consider discussing their \
             practical knowledge in key areas during an interview."
                .to_string(),
        );
    }

    // Rule 3: missing skills, by count and content.
    let missing = &result.skills_missing;
    if !missing.is_empty() {
        if missing.len() <= 2 {
            recommendations.push(format!(
                "The candidate is missing {}. Consider assessing their ability to learn these \
                 skills quickly.",
                missing.join(" and ")
            ));
        } else if missing.iter().any(|s| s == "Business Analysis") {
            recommendations.push(
                "Consider providing Business Analysis training if hiring this candidate."
                    .to_string(),
            );
        } else {
            recommendations.push(format!(
                "The candidate is missing {} required skills. Evaluate their learning capacity \
                 and willingness to acquire new skills.",
                missing.len()
            ));
        }
    }

    // The score rule always fires, but keep the guarantee explicit.
    if recommendations.is_empty() {
        recommendations.push(
            "Review the candidate's background and consider how well they might fit with your \
             team culture."
                .to_string(),
        );
    }

    recommendations
}
