use super::MetricRecord;
use crate::error::AnalysisError;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Width of the trend comparison windows, in reporting periods.
const TREND_WINDOW: usize = 7;
/// Conversion-rate floor below which `LowConversion` is raised.
const CONVERSION_TARGET: f64 = 30.0;
/// Cost-per-acquisition ceiling above which `HighCpa` is raised.
const CPA_TARGET: f64 = 100.0;
/// Trend delta below which performance counts as declining.
const DECLINE_THRESHOLD: f64 = -5.0;

/// Sums and averages over the full record sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregates {
    pub total_leads: u64,
    pub total_qualified: u64,
    pub total_converted: u64,
    pub total_revenue: f64,
    pub avg_cpa: f64,
    /// Overall conversion rate, `converted / qualified * 100`; 0 when nothing
    /// qualified.
    pub avg_conversion_rate: f64,
}

/// Which way the conversion rate is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Improving,
    Declining,
    Stable,
}

/// Delta between the most recent window and the one before it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
    pub conversion_trend: f64,
    pub direction: TrendDirection,
}

/// The rule that raised an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueKind {
    LowConversion,
    HighCpa,
    DecliningPerformance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
}

/// One triggered issue flag with its caller-facing message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub message: String,
    pub severity: Severity,
}

/// The complete output of one analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub aggregates: Aggregates,
    pub trends: Trend,
    pub issues: Vec<Issue>,
    /// True iff any triggered issue has high severity.
    pub requires_optimization: bool,
}

/// Aggregates a recency-ordered sequence of metric records into totals, a
/// trend delta, and rule-based issue flags.
///
/// The issue rules are independent: all are evaluated and every triggered one
/// is appended, in rule order. An empty sequence fails with
/// [`AnalysisError::EmptyInput`] since averages are undefined.
pub fn analyze(records: &[MetricRecord]) -> Result<AnalysisResult, AnalysisError> {
    if records.is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let total_leads = records.iter().map(|r| r.leads).sum();
    let total_qualified: u64 = records.iter().map(|r| r.qualified).sum();
    let total_converted: u64 = records.iter().map(|r| r.converted).sum();
    let total_revenue = records.iter().map(|r| r.revenue).sum();
    let avg_cpa = records.iter().map(|r| r.cpa).sum::<f64>() / records.len() as f64;
    let avg_conversion_rate = if total_qualified > 0 {
        total_converted as f64 / total_qualified as f64 * 100.0
    } else {
        0.0
    };

    // Recent window = first 7 records, previous = the next 7. Windows
    // narrower than 7 use whatever elements exist; a missing window
    // contributes a mean of 0 rather than propagating NaN.
    let window_chunks = records.iter().chunks(TREND_WINDOW);
    let mut windows = window_chunks.into_iter();
    let recent_rate = windows.next().map_or(0.0, |window| window_mean(window));
    let previous_rate = windows.next().map_or(0.0, |window| window_mean(window));
    let conversion_trend = recent_rate - previous_rate;

    let direction = if conversion_trend > 0.0 {
        TrendDirection::Improving
    } else if conversion_trend < 0.0 {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    };

    let mut issues = Vec::new();
    if avg_conversion_rate < CONVERSION_TARGET {
        issues.push(Issue {
            kind: IssueKind::LowConversion,
            message: format!("Conversion rate ({avg_conversion_rate:.1}%) is below 30% target"),
            severity: Severity::High,
        });
    }
    if avg_cpa > CPA_TARGET {
        issues.push(Issue {
            kind: IssueKind::HighCpa,
            message: format!("CPA (${avg_cpa:.2}) exceeds $100 target"),
            severity: Severity::Medium,
        });
    }
    if conversion_trend < DECLINE_THRESHOLD {
        issues.push(Issue {
            kind: IssueKind::DecliningPerformance,
            message: format!(
                "Conversion rate declining by {:.1}%",
                conversion_trend.abs()
            ),
            severity: Severity::High,
        });
    }

    let requires_optimization = issues.iter().any(|issue| issue.severity == Severity::High);

    Ok(AnalysisResult {
        aggregates: Aggregates {
            total_leads,
            total_qualified,
            total_converted,
            total_revenue,
            avg_cpa,
            avg_conversion_rate,
        },
        trends: Trend {
            conversion_trend,
            direction,
        },
        issues,
        requires_optimization,
    })
}

fn window_mean<'a>(window: impl Iterator<Item = &'a MetricRecord>) -> f64 {
    let rates: Vec<f64> = window.map(|r| r.conversion_rate).collect();
    if rates.is_empty() {
        0.0
    } else {
        rates.iter().sum::<f64>() / rates.len() as f64
    }
}
