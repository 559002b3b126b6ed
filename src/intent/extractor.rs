use super::{GOAL_KEYWORDS, INDUSTRY_KEYWORDS};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static BUDGET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$?(\d[\d,]*)(?:k|\s*thousand)?|budget\s*(?:is|of)?\s*\$?(\d[\d,]*)")
        .expect("BUDGET_RE pattern is valid and well-formed")
});

static TIMELINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*(day|week|month|quarter|year)")
        .expect("TIMELINE_RE pattern is valid and well-formed")
});

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\w.-]+@[\w.-]+\.\w+").expect("EMAIL_RE pattern is valid and well-formed")
});

/// A single classified fact extracted from one free-text message.
///
/// Exactly one variant is produced per call; extraction is single-shot, not
/// multi-label. Serializes as the external `{type, value}` record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Intent {
    Budget(u64),
    Goal(String),
    Timeline(String),
    ContactEmail(String),
    Industry(String),
    /// No rule matched; carries the original message verbatim.
    Unknown(String),
}

/// Classifies one free-text message into at most one fact.
///
/// Rules run in a fixed precedence order and the first match short-circuits
/// the rest: budget, goal, timeline, contact email, industry. The order is
/// the ambiguity resolution: a message containing both a dollar figure and
/// the word "month" is a budget, not a timeline. Matching is
/// case-insensitive throughout.
pub fn extract_intent(message: &str) -> Intent {
    let lower = message.to_lowercase();

    if let Some(intent) = budget(&lower) {
        return intent;
    }
    if let Some(keyword) = GOAL_KEYWORDS.iter().copied().find(|kw| lower.contains(kw)) {
        return Intent::Goal(keyword.to_string());
    }
    if let Some(intent) = timeline(&lower) {
        return intent;
    }
    if let Some(found) = EMAIL_RE.find(&lower) {
        return Intent::ContactEmail(found.as_str().to_string());
    }
    if let Some(keyword) = INDUSTRY_KEYWORDS
        .iter()
        .copied()
        .find(|kw| lower.contains(kw))
    {
        return Intent::Industry(keyword.to_string());
    }

    Intent::Unknown(message.to_string())
}

/// Matches a currency-like numeric token: a bare or `$`-prefixed number with
/// an optional "k"/"thousand" suffix, or a number following "budget is/of".
/// The multiplier check inspects the whole message, not just the match.
fn budget(lower: &str) -> Option<Intent> {
    let caps = BUDGET_RE.captures(lower)?;
    let digits = caps.get(1).or_else(|| caps.get(2))?.as_str().replace(',', "");
    let amount: u64 = digits.parse().ok()?;

    let amount = if lower.contains('k') || lower.contains("thousand") {
        amount.saturating_mul(1000)
    } else {
        amount
    };
    Some(Intent::Budget(amount))
}

/// Matches `<integer> <unit>`; the value is always pluralized regardless of
/// the count.
fn timeline(lower: &str) -> Option<Intent> {
    let caps = TIMELINE_RE.captures(lower)?;
    Some(Intent::Timeline(format!("{} {}s", &caps[1], &caps[2])))
}
