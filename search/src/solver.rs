//! Two-leg composition: initial → key, then key → goal.

use std::fmt;

use thiserror::Error;
use tracing::info;

use crate::contract::{Cost, KeyedProblem};
use crate::error::SearchError;
use crate::policy::SearchPolicy;
use crate::report::{canonical_json_bytes, content_digest, SearchReport};
use crate::search::search;

/// Which of the two sequential searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Leg {
    /// From the initial state to the key.
    ToKey,
    /// From the key to a goal.
    ToGoal,
}

impl Leg {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ToKey => "to_key",
            Self::ToGoal => "to_goal",
        }
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a solve produced no action list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The problem declares no goal states.
    #[error("problem declares no goal states")]
    NoGoalStates,

    /// One leg failed; the whole solve is aborted.
    #[error("{leg} leg failed: {source}")]
    Leg {
        leg: Leg,
        #[source]
        source: SearchError,
    },
}

impl SolveError {
    /// Returns `true` when a leg proved its target unreachable.
    #[must_use]
    pub fn is_no_solution(&self) -> bool {
        matches!(self, Self::Leg { source, .. } if source.is_no_solution())
    }
}

/// One completed leg.
#[derive(Debug, Clone)]
pub struct LegSummary<S> {
    pub leg: Leg,
    pub from: S,
    /// State the leg ended on (the key, or whichever goal was reached).
    pub reached: S,
    pub action_count: usize,
    pub report: SearchReport,
}

/// A full solve: both legs concatenated.
#[derive(Debug, Clone)]
pub struct Solution<S, A> {
    pub actions: Vec<A>,
    pub legs: [LegSummary<S>; 2],
}

impl<S, A> Solution<S, A> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Total accumulated cost over both legs.
    #[must_use]
    pub fn path_cost(&self) -> Cost {
        self.legs.iter().map(|l| l.report.path_cost).sum()
    }

    /// Canonical JSON of the solve, with `actions` rendered by `Display`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value
    where
        A: fmt::Display,
        S: fmt::Display,
    {
        let legs: Vec<serde_json::Value> = self
            .legs
            .iter()
            .map(|l| {
                serde_json::json!({
                    "action_count": l.action_count,
                    "from": l.from.to_string(),
                    "leg": l.leg.as_str(),
                    "reached": l.reached.to_string(),
                    "report": l.report.to_json_value(),
                    "report_digest": l.report.digest(),
                })
            })
            .collect();
        serde_json::json!({
            "actions": self.actions.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "legs": legs,
            "path_cost": self.path_cost(),
            "path_len": self.len(),
        })
    }

    /// `sha256:<hex>` of [`to_json_value`](Self::to_json_value).
    #[must_use]
    pub fn digest(&self) -> String
    where
        A: fmt::Display,
        S: fmt::Display,
    {
        content_digest(&canonical_json_bytes(&self.to_json_value()))
    }
}

/// Solve `problem`: search initial → key, then key → first goal state.
///
/// The second leg runs in goal mode, so any goal state ends it.
///
/// # Errors
///
/// - [`SolveError::NoGoalStates`] if `goal_states()` is empty.
/// - [`SolveError::Leg`] wrapping the first leg failure. A failed second leg
///   discards the first leg: no partial action list is ever returned.
pub fn solve<P: KeyedProblem>(
    problem: &P,
    policy: &SearchPolicy,
) -> Result<Solution<P::State, P::Action>, SolveError> {
    let goal = problem
        .goal_states()
        .first()
        .ok_or(SolveError::NoGoalStates)?;
    let initial = problem.initial_state();
    let key = problem.key_state();

    let to_key = search(problem, initial, key, policy).map_err(|source| SolveError::Leg {
        leg: Leg::ToKey,
        source,
    })?;
    info!(
        leg = %Leg::ToKey,
        actions = to_key.actions.len(),
        expansions = to_key.report.total_expansions,
        "leg solved"
    );

    let to_goal = search(problem, key, goal, policy).map_err(|source| SolveError::Leg {
        leg: Leg::ToGoal,
        source,
    })?;
    info!(
        leg = %Leg::ToGoal,
        actions = to_goal.actions.len(),
        expansions = to_goal.report.total_expansions,
        "leg solved"
    );

    let legs = [
        LegSummary {
            leg: Leg::ToKey,
            from: initial.clone(),
            reached: to_key.reached,
            action_count: to_key.actions.len(),
            report: to_key.report,
        },
        LegSummary {
            leg: Leg::ToGoal,
            from: key.clone(),
            reached: to_goal.reached,
            action_count: to_goal.actions.len(),
            report: to_goal.report,
        },
    ];

    let mut actions = to_key.actions;
    actions.extend(to_goal.actions);

    Ok(Solution { actions, legs })
}
