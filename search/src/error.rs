//! Typed search errors.
//!
//! `SearchError` covers both pre-flight failures (policy validation) and
//! runtime terminations without a path. A zero-action path is a success and
//! never surfaces here.

use thiserror::Error;

use crate::contract::Cost;

/// Why a search produced no path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The policy failed pre-flight validation. No search steps were taken.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },

    /// Frontier emptied before the objective was reached.
    #[error("no solution: frontier exhausted after {expansions} expansions")]
    NoSolution { expansions: u64 },

    /// `max_expansions` budget was hit.
    #[error("expansion budget of {max_expansions} exceeded")]
    ExpansionBudgetExceeded { max_expansions: u64 },

    /// `time_limit_ms` budget was hit.
    #[error("time limit of {limit_ms} ms exceeded after {expansions} expansions")]
    TimeLimitExceeded { limit_ms: u64, expansions: u64 },

    /// Frontier emptied, but only because `max_depth` cut candidates off.
    /// The target may still be reachable on a longer path.
    #[error("depth limit of {max_depth} cut off the search after {expansions} expansions")]
    DepthLimitExceeded { max_depth: u32, expansions: u64 },

    /// Pop from an empty frontier. The kernel checks emptiness first, so
    /// seeing this is a kernel defect.
    #[error("extracted from an empty frontier")]
    EmptyFrontier,

    /// The problem reported a negative step cost.
    #[error("problem reported negative step cost {cost}")]
    NegativeStepCost { cost: Cost },
}

impl SearchError {
    /// Returns `true` for the ordinary "target unreachable" outcome.
    #[must_use]
    pub fn is_no_solution(&self) -> bool {
        matches!(self, Self::NoSolution { .. })
    }

    /// Returns `true` if a budget stopped the search before it could decide.
    #[must_use]
    pub fn is_budget_exhausted(&self) -> bool {
        matches!(
            self,
            Self::ExpansionBudgetExceeded { .. }
                | Self::TimeLimitExceeded { .. }
                | Self::DepthLimitExceeded { .. }
        )
    }
}
