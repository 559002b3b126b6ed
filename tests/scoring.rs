//! Tests for the lead scoring engine.
mod common;
use common::*;
use mikomi::prelude::*;
use serde_json::json;

#[test]
fn maximal_attributes_score_100_and_run_hot() {
    let attrs = maximal_attributes();
    assert_eq!(score(&attrs), 100);
    assert_eq!(Temperature::from_score(score(&attrs)), Temperature::Hot);
}

#[test]
fn empty_attributes_score_0_and_run_cold() {
    let attrs = LeadAttributes::default();
    assert_eq!(score(&attrs), 0);
    assert_eq!(Temperature::from_score(0), Temperature::Cold);
}

#[test]
fn score_is_monotonic_in_each_attribute() {
    // Adding any qualifying field never decreases the score.
    let mut attrs = LeadAttributes::default();
    let mut last = score(&attrs);

    attrs.goal = Some("growth".to_string());
    assert!(score(&attrs) >= last);
    last = score(&attrs);

    attrs.budget = Some(8_000.0);
    assert!(score(&attrs) >= last);
    last = score(&attrs);

    attrs.timeline = Some("6 months".to_string());
    assert!(score(&attrs) >= last);
    last = score(&attrs);

    attrs.industry = Some("finance".to_string());
    assert!(score(&attrs) >= last);
    last = score(&attrs);

    attrs.contact_email = Some("a@b.com".to_string());
    assert!(score(&attrs) >= last);
}

#[test]
fn budget_tiers_are_mutually_exclusive() {
    let budget_only = |budget: f64| {
        score(&LeadAttributes {
            budget: Some(budget),
            ..Default::default()
        })
    };

    assert_eq!(budget_only(50_000.0), 30);
    assert_eq!(budget_only(49_999.0), 25);
    assert_eq!(budget_only(20_000.0), 25);
    assert_eq!(budget_only(19_999.0), 15);
    assert_eq!(budget_only(5_000.0), 15);
    assert_eq!(budget_only(4_999.0), 10);
    assert_eq!(budget_only(1.0), 10);
}

#[test]
fn non_positive_budget_scores_nothing() {
    let budget_only = |budget: f64| {
        score(&LeadAttributes {
            budget: Some(budget),
            ..Default::default()
        })
    };

    assert_eq!(budget_only(0.0), 0);
    assert_eq!(budget_only(-100.0), 0);
}

#[test]
fn timeline_urgency_tiers() {
    let timeline_only = |timeline: &str| {
        score(&LeadAttributes {
            timeline: Some(timeline.to_string()),
            ..Default::default()
        })
    };

    assert_eq!(timeline_only("2 weeks"), 20);
    assert_eq!(timeline_only("10 DAYS"), 20);
    assert_eq!(timeline_only("6 months"), 15);
    assert_eq!(timeline_only("next quarter"), 10);
    assert_eq!(timeline_only(""), 0);
}

#[test]
fn empty_strings_count_as_unknown() {
    let attrs = LeadAttributes {
        goal: Some(String::new()),
        industry: Some(String::new()),
        contact_email: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(score(&attrs), 0);
}

#[test]
fn temperature_threshold_boundaries() {
    assert_eq!(Temperature::from_score(100), Temperature::Hot);
    assert_eq!(Temperature::from_score(70), Temperature::Hot);
    assert_eq!(Temperature::from_score(69), Temperature::Warm);
    assert_eq!(Temperature::from_score(50), Temperature::Warm);
    assert_eq!(Temperature::from_score(49), Temperature::Cold);
    assert_eq!(Temperature::from_score(0), Temperature::Cold);
}

#[test]
fn attributes_parse_from_a_plain_json_mapping() {
    let value = json!({
        "goal": "automation",
        "budget": 25_000,
        "contactEmail": "lead@corp.io"
    });

    let attrs = LeadAttributes::from_value(&value).expect("valid mapping");
    assert_eq!(attrs.goal.as_deref(), Some("automation"));
    assert_eq!(attrs.budget, Some(25_000.0));
    assert_eq!(attrs.contact_email.as_deref(), Some("lead@corp.io"));
    assert_eq!(attrs.timeline, None);

    // goal 20 + budget 25 + email 20
    assert_eq!(score(&attrs), 65);
}

#[test]
fn numeric_string_budget_coerces() {
    let value = json!({ "budget": "20000" });
    let attrs = LeadAttributes::from_value(&value).expect("numeric string coerces");
    assert_eq!(attrs.budget, Some(20_000.0));
}

#[test]
fn non_numeric_budget_is_invalid_input() {
    let value = json!({ "budget": "call me" });
    let err = LeadAttributes::from_value(&value).expect_err("non-numeric budget");
    assert!(matches!(
        err,
        ScoringError::InvalidInput { field: "budget", .. }
    ));
    assert!(err.to_string().contains("budget"));
}

#[test]
fn null_fields_are_simply_unknown() {
    let value = json!({ "goal": null, "budget": null });
    let attrs = LeadAttributes::from_value(&value).expect("nulls are valid");
    assert_eq!(attrs, LeadAttributes::default());
}
