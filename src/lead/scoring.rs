use super::LeadAttributes;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ceiling for the additive scale. The per-attribute maxima already sum to
/// exactly 100, so the clamp only matters for malformed inputs.
const MAX_SCORE: u32 = 100;

/// Qualitative lead tier derived from a qualification score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Temperature {
    Hot,
    Warm,
    Cold,
}

impl Temperature {
    /// Threshold lookup on a score: >= 70 is hot, >= 50 is warm, else cold.
    pub fn from_score(score: u8) -> Self {
        if score >= 70 {
            Temperature::Hot
        } else if score >= 50 {
            Temperature::Warm
        } else {
            Temperature::Cold
        }
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Temperature::Hot => write!(f, "hot"),
            Temperature::Warm => write!(f, "warm"),
            Temperature::Cold => write!(f, "cold"),
        }
    }
}

/// Calculates the qualification score for a lead, in [0, 100].
///
/// The scale is additive and each rule is independent: a known goal is +20,
/// budget is tiered by magnitude (up to +30), timeline is tiered by urgency
/// (up to +20), a known industry is +10, and a contact email is +20. Missing
/// attributes contribute nothing; the score never drops below 0.
pub fn score(attrs: &LeadAttributes) -> u8 {
    let mut score: u32 = 0;

    if is_known(&attrs.goal) {
        score += 20;
    }

    // Budget tiers are evaluated high-to-low, first match wins.
    if let Some(budget) = attrs.budget {
        if budget >= 50_000.0 {
            score += 30;
        } else if budget >= 20_000.0 {
            score += 25;
        } else if budget >= 5_000.0 {
            score += 15;
        } else if budget > 0.0 {
            score += 10;
        }
    }

    // Shorter timelines score higher.
    if let Some(timeline) = attrs.timeline.as_deref().filter(|t| !t.is_empty()) {
        let timeline = timeline.to_lowercase();
        if timeline.contains("week") || timeline.contains("day") {
            score += 20;
        } else if timeline.contains("month") {
            score += 15;
        } else {
            score += 10;
        }
    }

    if is_known(&attrs.industry) {
        score += 10;
    }

    if is_known(&attrs.contact_email) {
        score += 20;
    }

    score.min(MAX_SCORE) as u8
}

fn is_known(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|text| !text.is_empty())
}
