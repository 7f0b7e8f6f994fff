//! Data types shared by the aggregator, the session and the report.

use serde::{Deserialize, Serialize};

use crate::calculator::feedback::FeedbackTier;

/// One course module as entered by the user.
///
/// `grade` is `None` while the module is ungraded. A grade that is not on the
/// scale is kept as-is; it simply never contributes to the aggregate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleEntry {
    pub name: String,
    pub grade: Option<String>,
    pub credits: f64,
}

impl ModuleEntry {
    pub fn new(name: impl Into<String>, grade: Option<&str>, credits: f64) -> Self {
        Self {
            name: name.into(),
            grade: grade.map(str::to_string),
            credits,
        }
    }

    /// Shorthand for a graded module with an empty name.
    pub fn graded(grade: &str, credits: f64) -> Self {
        Self::new("", Some(grade), credits)
    }
}

/// Result of one aggregation pass. Values are unrounded.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AggregateResult {
    pub total_credits: f64,
    pub total_grade_points: f64,
    pub gpa: f64,
    /// Grade points per input module, aligned with the input order.
    /// Non-contributing modules hold `0.0`.
    pub per_module_grade_points: Vec<f64>,
}

impl AggregateResult {
    pub fn feedback(&self) -> FeedbackTier {
        FeedbackTier::classify(self.gpa)
    }

    /// `true` when at least one module contributed.
    pub fn has_credits(&self) -> bool {
        self.total_credits > 0.0
    }
}
