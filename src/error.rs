use thiserror::Error;

/// Errors that can occur while reading lead attributes for scoring.
#[derive(Error, Debug, Clone)]
pub enum ScoringError {
    #[error("Field '{field}' cannot be read as {expected}: found '{found}'")]
    InvalidInput {
        field: &'static str,
        expected: &'static str,
        found: String,
    },
}

/// Errors that can occur during metrics analysis.
#[derive(Error, Debug, Clone)]
pub enum AnalysisError {
    #[error("Cannot analyze an empty metrics sequence: averages are undefined")]
    EmptyInput,
}

/// Errors that can occur during ROI calculation.
#[derive(Error, Debug, Clone)]
pub enum RoiError {
    #[error("Tools cost must be positive to compute a return, but was {tools_cost}")]
    InvalidConfig { tools_cost: f64 },
}
