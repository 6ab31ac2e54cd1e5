use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord, Debug, Serialize)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    /// Classifies a risk score into its severity bucket. Total over any
    /// unsigned score, including values outside the nominal `[1,25]` range.
    pub fn from_score(score: u32) -> Severity {
        if score >= 20 {
            Severity::Critical
        } else if score >= 15 {
            Severity::High
        } else if score >= 10 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Severity::Critical => "Critical",
                Severity::High => "High",
                Severity::Medium => "Medium",
                Severity::Low => "Low",
            }
        )
    }
}
