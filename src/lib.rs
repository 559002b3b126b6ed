//! # Mikomi - Lead Qualification and Campaign Analysis Rules
//!
//! **Mikomi** is a small library of stateless business-rule functions for
//! sales-pipeline automation: it scores leads, extracts structured facts from
//! free-text messages, summarizes campaign performance, computes
//! return-on-investment, and emits declarative automation-workflow templates.
//!
//! ## Core Workflow
//!
//! Every function is pure data-in/data-out and each call is a complete,
//! independent transaction. An external orchestrator composes them per event:
//!
//! 1.  **Extract**: Run [`intent::extract_intent`] on each inbound message to
//!     pull at most one classified fact (budget, goal, timeline, contact
//!     email, industry) out of the free text.
//! 2.  **Score**: At each qualification checkpoint, feed the accumulated
//!     [`lead::LeadAttributes`] to [`lead::score`] and map the result to a
//!     [`lead::Temperature`] tier.
//! 3.  **Analyze**: Per reporting cycle, pass the recency-ordered
//!     [`metrics::MetricRecord`] sequence to [`metrics::analyze`] for totals,
//!     trend deltas, and issue flags; feed cost figures to
//!     [`roi::calculate_roi`].
//! 4.  **Emit**: When a lead needs automated handling, generate a declarative
//!     workflow graph with [`workflow::generate_template`] for the downstream
//!     execution engine.
//!
//! No component calls another, nothing is persisted, and there is no shared
//! mutable state: every operation is safe to run in parallel without
//! coordination.
//!
//! ## Quick Start
//!
//! ```rust
//! use mikomi::prelude::*;
//!
//! // Classify one inbound message.
//! let intent = extract_intent("My budget is $20k");
//! assert_eq!(intent, Intent::Budget(20_000));
//!
//! // Score a lead from the attributes collected so far.
//! let attrs = LeadAttributes {
//!     goal: Some("lead generation".to_string()),
//!     budget: Some(60_000.0),
//!     ..Default::default()
//! };
//! let score = score(&attrs);
//! assert_eq!(score, 50);
//! assert_eq!(Temperature::from_score(score), Temperature::Warm);
//! ```

pub mod error;
pub mod intent;
pub mod lead;
pub mod metrics;
pub mod prelude;
pub mod roi;
pub mod workflow;
