//! Common test utilities for building lead attributes and metric sequences.
use mikomi::prelude::*;

/// Attributes with every field populated at its maximal scoring tier.
///
/// Scores 20 (goal) + 30 (budget) + 20 (timeline) + 10 (industry) + 20
/// (email) = 100.
#[allow(dead_code)]
pub fn maximal_attributes() -> LeadAttributes {
    LeadAttributes {
        goal: Some("lead generation".to_string()),
        budget: Some(60_000.0),
        timeline: Some("2 weeks".to_string()),
        industry: Some("saas".to_string()),
        contact_email: Some("ops@example.com".to_string()),
    }
}

/// A metric record with the given conversion figures; revenue is derived so
/// records stay distinguishable.
#[allow(dead_code)]
pub fn record(qualified: u64, converted: u64, cpa: f64, conversion_rate: f64) -> MetricRecord {
    MetricRecord {
        leads: qualified * 2,
        qualified,
        converted,
        revenue: converted as f64 * 500.0,
        cpa,
        conversion_rate,
    }
}

/// A recency-first sequence of identical records.
#[allow(dead_code)]
pub fn flat_records(count: usize, cpa: f64, conversion_rate: f64) -> Vec<MetricRecord> {
    vec![record(10, 5, cpa, conversion_rate); count]
}

/// Fixed id seed source for asserting exact generated graphs.
#[allow(dead_code)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}
