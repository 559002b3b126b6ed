//! Return-on-investment arithmetic over cost/benefit inputs.

use crate::error::RoiError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cost and benefit figures for one ROI computation.
///
/// Every field carries a configuration default, so a partial (or empty)
/// record is valid input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoiInputs {
    pub tools_cost: f64,
    pub labor_hours_saved: f64,
    pub labor_cost_per_hour: f64,
    pub referral_revenue: f64,
    pub estimated_lead_value: f64,
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self {
            tools_cost: 200.0,
            labor_hours_saved: 40.0,
            labor_cost_per_hour: 50.0,
            referral_revenue: 0.0,
            estimated_lead_value: 0.0,
        }
    }
}

/// Whether the benefits already cover the tooling cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaybackPeriod {
    Immediate,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl fmt::Display for PaybackPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaybackPeriod::Immediate => write!(f, "Immediate"),
            PaybackPeriod::NotApplicable => write!(f, "N/A"),
        }
    }
}

/// The computed return-on-investment summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiResult {
    /// Echo of the tools cost that was charged against the benefits.
    pub monthly_cost: f64,
    pub labor_savings: f64,
    pub total_benefit: f64,
    /// Percentage return, preformatted to one decimal place (e.g. "900.0%").
    pub roi: String,
    pub payback_period: PaybackPeriod,
}

/// Computes the return-on-investment summary for the given inputs.
///
/// `labor_savings = hours * cost_per_hour`; benefits are labor savings plus
/// referral revenue plus estimated lead value; the return is measured against
/// the tools cost. A zero or negative tools cost fails with
/// [`RoiError::InvalidConfig`] rather than dividing by it.
pub fn calculate_roi(inputs: &RoiInputs) -> Result<RoiResult, RoiError> {
    if inputs.tools_cost <= 0.0 {
        return Err(RoiError::InvalidConfig {
            tools_cost: inputs.tools_cost,
        });
    }

    let labor_savings = inputs.labor_hours_saved * inputs.labor_cost_per_hour;
    let total_benefit = labor_savings + inputs.referral_revenue + inputs.estimated_lead_value;
    let roi = (total_benefit - inputs.tools_cost) / inputs.tools_cost * 100.0;
    let payback_period = if total_benefit > inputs.tools_cost {
        PaybackPeriod::Immediate
    } else {
        PaybackPeriod::NotApplicable
    };

    Ok(RoiResult {
        monthly_cost: inputs.tools_cost,
        labor_savings,
        total_benefit,
        roi: format!("{roi:.1}%"),
        payback_period,
    })
}
