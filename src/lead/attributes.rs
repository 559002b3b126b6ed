use crate::error::ScoringError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The attribute record for a single lead, as collected so far by the caller.
///
/// No field is required; absence means the attribute is not yet known and
/// simply skips its scoring contribution. An empty string is treated the same
/// as an absent field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadAttributes {
    pub goal: Option<String>,
    pub budget: Option<f64>,
    pub timeline: Option<String>,
    pub industry: Option<String>,
    pub contact_email: Option<String>,
}

impl LeadAttributes {
    /// Reads attributes from a plain JSON mapping.
    ///
    /// Absent fields and explicit nulls are valid. A field that is present
    /// but cannot be coerced to its semantic type (e.g. a non-numeric
    /// `budget`) fails with [`ScoringError::InvalidInput`].
    pub fn from_value(value: &Value) -> Result<Self, ScoringError> {
        Ok(Self {
            goal: text_field(value, "goal")?,
            budget: number_field(value, "budget")?,
            timeline: text_field(value, "timeline")?,
            industry: text_field(value, "industry")?,
            contact_email: text_field(value, "contactEmail")?,
        })
    }
}

fn text_field(value: &Value, field: &'static str) -> Result<Option<String>, ScoringError> {
    match value.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(other) => Err(ScoringError::InvalidInput {
            field,
            expected: "text",
            found: other.to_string(),
        }),
    }
}

fn number_field(value: &Value, field: &'static str) -> Result<Option<f64>, ScoringError> {
    match value.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => Ok(number.as_f64()),
        // Numeric strings coerce; anything else is rejected.
        Some(Value::String(text)) => match text.trim().parse::<f64>() {
            Ok(number) => Ok(Some(number)),
            Err(_) => Err(ScoringError::InvalidInput {
                field,
                expected: "a number",
                found: text.clone(),
            }),
        },
        Some(other) => Err(ScoringError::InvalidInput {
            field,
            expected: "a number",
            found: other.to_string(),
        }),
    }
}
