use serde::{Deserialize, Serialize};

/// One reporting-period observation of campaign performance.
///
/// Sequence ordering is significant: index 0 is the most recent period and
/// ascending indexes are older periods. Trend windowing depends on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricRecord {
    pub leads: u64,
    pub qualified: u64,
    pub converted: u64,
    pub revenue: f64,
    /// Cost per acquisition for the period.
    pub cpa: f64,
    /// Period-local conversion rate, as a percentage.
    pub conversion_rate: f64,
}
