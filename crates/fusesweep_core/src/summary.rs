//! Sweep outcome records
//!
//! Engine failures do not abort a sweep; they are captured here per
//! combination so the operator gets a complete picture at the end and
//! automation can key off the overall success predicate.

use serde::{Deserialize, Serialize};

use crate::catalogue::FusionMethod;

/// Why one combination failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    /// The engine process could not be started
    Spawn(String),
    /// The engine exited with a non-zero status (`None` = killed by signal)
    NonZeroExit(Option<i32>),
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Spawn(reason) => write!(f, "engine could not be started: {reason}"),
            FailureKind::NonZeroExit(Some(code)) => write!(f, "engine exited with status {code}"),
            FailureKind::NonZeroExit(None) => write!(f, "engine terminated by signal"),
        }
    }
}

/// Result of one planned combination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinationOutcome {
    /// Fusion method of this combination
    pub method: FusionMethod,

    /// Combination identity, e.g. `rrf depth=100 k=10`
    pub combination: String,

    /// Canonical output filename (written only on success)
    pub output_file: String,

    /// Failure record, absent when the fused ranking was persisted
    pub failure: Option<FailureKind>,
}

impl CombinationOutcome {
    pub fn succeeded(&self) -> bool {
        self.failure.is_none()
    }
}

/// Aggregate outcome of a whole sweep, in plan order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SweepSummary {
    pub outcomes: Vec<CombinationOutcome>,
}

impl SweepSummary {
    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    /// True when every planned combination produced an output file
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// The failed combinations, in plan order
    pub fn failures(&self) -> impl Iterator<Item = &CombinationOutcome> {
        self.outcomes.iter().filter(|o| !o.succeeded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(failure: Option<FailureKind>) -> CombinationOutcome {
        CombinationOutcome {
            method: FusionMethod::Rrf,
            combination: "rrf depth=100 k=10".to_string(),
            output_file: "rrf_depth:100_k:10.run".to_string(),
            failure,
        }
    }

    #[test]
    fn test_counts_and_success_predicate() {
        let summary = SweepSummary {
            outcomes: vec![
                outcome(None),
                outcome(Some(FailureKind::NonZeroExit(Some(3)))),
                outcome(None),
            ],
        };

        assert_eq!(summary.total(), 3);
        assert_eq!(summary.succeeded(), 2);
        assert_eq!(summary.failed(), 1);
        assert!(!summary.is_success());
        assert_eq!(summary.failures().count(), 1);
    }

    #[test]
    fn test_empty_summary_is_success() {
        assert!(SweepSummary::default().is_success());
    }

    #[test]
    fn test_failure_display_names_exit_status() {
        let kind = FailureKind::NonZeroExit(Some(3));
        assert!(kind.to_string().contains("status 3"));
        let kind = FailureKind::Spawn("no such file".to_string());
        assert!(kind.to_string().contains("no such file"));
    }
}
