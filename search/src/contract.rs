//! Problem contract traits.

use std::fmt::Debug;
use std::hash::Hash;

/// Integer path cost. Heuristics and step costs share this unit.
pub type Cost = i64;

/// One legal move out of a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<A, S> {
    /// Label of the move.
    pub action: A,
    /// State the move leads to.
    pub state: S,
}

impl<A, S> Transition<A, S> {
    #[must_use]
    pub fn new(action: A, state: S) -> Self {
        Self { action, state }
    }
}

/// Trait for domains that support best-first search.
///
/// # Contract
///
/// - `transitions` must be deterministic: same state → same transitions in
///   the same order. Action labels must be unique within one call.
/// - `step_cost` must be non-negative. The kernel rejects negative costs with
///   [`SearchError::NegativeStepCost`](crate::error::SearchError::NegativeStepCost).
/// - `distance_to_goal` and `distance` are heuristic estimates. The returned
///   path is only guaranteed optimal when they are consistent, and even then
///   duplicate suppression may keep an earlier, costlier discovery.
pub trait SearchProblem {
    /// Position in the search space.
    type State: Clone + Eq + Hash + Debug;
    /// Label for a transition between two states.
    type Action: Clone + Debug;

    /// Whether `state` is one of the problem's declared goals.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Estimated cost from `state` to the nearest declared goal.
    fn distance_to_goal(&self, state: &Self::State) -> Cost;

    /// Estimated cost between two arbitrary states.
    fn distance(&self, from: &Self::State, to: &Self::State) -> Cost;

    /// Cost of moving from `from` to its successor `to`.
    ///
    /// The kernel accumulates these along the search tree, so the cost from
    /// the start of a node always matches the transitions that produced it.
    fn step_cost(&self, _from: &Self::State, _to: &Self::State) -> Cost {
        1
    }

    /// Enumerate the legal moves out of `state`.
    fn transitions(&self, state: &Self::State) -> Vec<Transition<Self::Action, Self::State>>;
}

/// A search problem with a fixed start, an intermediate key and goal states.
///
/// [`solve`](crate::solver::solve) searches initial → key, then key → goal.
pub trait KeyedProblem: SearchProblem {
    fn initial_state(&self) -> &Self::State;

    fn key_state(&self) -> &Self::State;

    /// Declared goal states in a stable order. The solver targets the first.
    fn goal_states(&self) -> &[Self::State];
}
