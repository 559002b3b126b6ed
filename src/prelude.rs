//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! mikomi crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust
//! use mikomi::prelude::*;
//!
//! let temperature = Temperature::from_score(score(&LeadAttributes::default()));
//! assert_eq!(temperature, Temperature::Cold);
//! ```

// Scoring engine
pub use crate::lead::{LeadAttributes, Temperature, score};

// Intent extraction
pub use crate::intent::{Intent, extract_intent};

// Metrics analysis
pub use crate::metrics::{
    Aggregates, AnalysisResult, Issue, IssueKind, MetricRecord, Severity, Trend, TrendDirection,
    analyze,
};

// ROI calculation
pub use crate::roi::{PaybackPeriod, RoiInputs, RoiResult, calculate_roi};

// Workflow template emission
pub use crate::workflow::{
    Clock, Node, SystemClock, TemplateGenerator, TemplateKind, WorkflowTemplate, generate_template,
};

// Error types
pub use crate::error::{AnalysisError, RoiError, ScoringError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
