//! Search objective: what counts as arrival, and how far away it looks.

use crate::contract::{Cost, SearchProblem};

/// Termination predicate and heuristic for one search call.
///
/// The kernel is reused for two kinds of queries: reach one exact state, or
/// reach whichever goal the problem recognises. Bundling both the predicate
/// and the heuristic here keeps a single code path in the search loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Objective<S> {
    /// Stop at this state only; estimate with `problem.distance(s, target)`.
    ExactState(S),
    /// Stop at any declared goal; estimate with `problem.distance_to_goal(s)`.
    AnyGoal,
}

/// Serializable tag for [`Objective`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectiveKind {
    ExactState,
    AnyGoal,
}

impl ObjectiveKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ExactState => "exact_state",
            Self::AnyGoal => "any_goal",
        }
    }
}

impl std::fmt::Display for ObjectiveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<S: Clone> Objective<S> {
    /// Pick the objective for a search towards `target`.
    ///
    /// A target the problem declares as a goal switches to goal mode, so any
    /// goal state terminates the search.
    #[must_use]
    pub fn select<P>(problem: &P, target: &S) -> Self
    where
        P: SearchProblem<State = S>,
    {
        if problem.is_goal(target) {
            Self::AnyGoal
        } else {
            Self::ExactState(target.clone())
        }
    }
}

impl<S: Eq> Objective<S> {
    #[must_use]
    pub fn kind(&self) -> ObjectiveKind {
        match self {
            Self::ExactState(_) => ObjectiveKind::ExactState,
            Self::AnyGoal => ObjectiveKind::AnyGoal,
        }
    }

    /// Whether `state` terminates the search.
    pub fn is_reached<P>(&self, problem: &P, state: &S) -> bool
    where
        P: SearchProblem<State = S>,
    {
        match self {
            Self::ExactState(target) => state == target,
            Self::AnyGoal => problem.is_goal(state),
        }
    }

    /// Heuristic estimate of the remaining cost from `state`.
    pub fn estimate<P>(&self, problem: &P, state: &S) -> Cost
    where
        P: SearchProblem<State = S>,
    {
        match self {
            Self::ExactState(target) => problem.distance(state, target),
            Self::AnyGoal => problem.distance_to_goal(state),
        }
    }
}
