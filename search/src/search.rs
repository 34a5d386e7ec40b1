//! Search entry point and expansion loop.

use std::collections::HashSet;
use std::time::Instant;

use tracing::{debug, trace, warn};

use crate::contract::{Cost, SearchProblem, Transition};
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::node::{FrontierKey, NodeId, SearchTree};
use crate::objective::Objective;
use crate::path::{build_path, build_state_path};
use crate::policy::SearchPolicy;
use crate::report::SearchReport;

/// Result of a search that reached its objective.
#[derive(Debug, Clone)]
pub struct SearchOutcome<S, A> {
    /// Actions from start to the reached state. Empty when start already
    /// satisfies the objective.
    pub actions: Vec<A>,
    /// States visited, start and reached state included.
    pub states: Vec<S>,
    /// The state that terminated the search.
    pub reached: S,
    /// Accumulated step cost of `actions`.
    pub path_cost: Cost,
    pub report: SearchReport,
}

#[derive(Debug, Default)]
struct Counters {
    expansions: u64,
    candidates: u64,
    duplicates: u64,
    depth_skipped: u64,
}

/// Search from `start` towards `target`.
///
/// If the problem declares `target` a goal, any goal state terminates the
/// search; otherwise only `target` itself does. See [`Objective::select`].
///
/// # Errors
///
/// See [`search_objective`].
pub fn search<P: SearchProblem>(
    problem: &P,
    start: &P::State,
    target: &P::State,
    policy: &SearchPolicy,
) -> Result<SearchOutcome<P::State, P::Action>, SearchError> {
    let objective = Objective::select(problem, target);
    search_objective(problem, start, &objective, policy)
}

/// Run best-first search from `start` until `objective` is reached.
///
/// Candidates whose state is already explored or already queued are dropped,
/// whatever their cost: the first discovery of a state wins and explored
/// states are never reopened.
///
/// # Errors
///
/// - [`SearchError::InvalidPolicy`] before any step if `policy` is invalid.
/// - [`SearchError::NoSolution`] if the frontier empties first and no
///   candidate was dropped by `max_depth`.
/// - [`SearchError::DepthLimitExceeded`] if the frontier empties after the
///   depth cutoff dropped at least one candidate.
/// - [`SearchError::ExpansionBudgetExceeded`] / [`SearchError::TimeLimitExceeded`]
///   when a budget stops the search.
/// - [`SearchError::NegativeStepCost`] if the problem breaks its cost contract.
/// - [`SearchError::EmptyFrontier`] only on an internal invariant violation.
pub fn search_objective<P: SearchProblem>(
    problem: &P,
    start: &P::State,
    objective: &Objective<P::State>,
    policy: &SearchPolicy,
) -> Result<SearchOutcome<P::State, P::Action>, SearchError> {
    policy.validate()?;

    let started = Instant::now();
    let time_limit = policy.time_limit();
    let mut counters = Counters::default();

    let mut tree = SearchTree::with_root(start.clone(), objective.estimate(problem, start));
    let mut frontier = Frontier::new();
    let mut explored: HashSet<P::State> = HashSet::new();
    frontier.push(FrontierKey::from(tree.root()), start.clone());

    debug!(objective = %objective.kind(), ?start, "search started");

    loop {
        if frontier.is_empty() {
            if counters.depth_skipped > 0 {
                warn!(
                    max_depth = policy.max_depth,
                    depth_skipped = counters.depth_skipped,
                    "search stopped by depth limit"
                );
                return Err(SearchError::DepthLimitExceeded {
                    max_depth: policy.max_depth,
                    expansions: counters.expansions,
                });
            }
            debug!(expansions = counters.expansions, "frontier exhausted");
            return Err(SearchError::NoSolution {
                expansions: counters.expansions,
            });
        }

        let current_id = frontier.pop()?;
        let current = tree.node(current_id);
        explored.insert(current.state.clone());

        if objective.is_reached(problem, &current.state) {
            return Ok(finish(
                &tree,
                current_id,
                objective,
                &counters,
                frontier.high_water(),
            ));
        }

        if counters.expansions >= policy.max_expansions {
            warn!(
                max_expansions = policy.max_expansions,
                "search stopped by expansion budget"
            );
            return Err(SearchError::ExpansionBudgetExceeded {
                max_expansions: policy.max_expansions,
            });
        }
        if let (Some(limit), Some(limit_ms)) = (time_limit, policy.time_limit_ms) {
            if started.elapsed() >= limit {
                warn!(limit_ms, expansions = counters.expansions, "search stopped by time limit");
                return Err(SearchError::TimeLimitExceeded {
                    limit_ms,
                    expansions: counters.expansions,
                });
            }
        }

        counters.expansions += 1;
        trace!(
            node = %current_id,
            priority = current.priority(),
            depth = current.depth,
            state = ?current.state,
            "expanding"
        );

        let parent_state = current.state.clone();
        let parent_g = current.g_cost;
        let parent_depth = current.depth;

        for Transition { action, state } in problem.transitions(&parent_state) {
            counters.candidates += 1;

            // First-seen-wins: a later, cheaper route to a known state is dropped.
            if explored.contains(&state) || frontier.contains_state(&state) {
                counters.duplicates += 1;
                continue;
            }
            if parent_depth >= policy.max_depth {
                counters.depth_skipped += 1;
                continue;
            }

            let step = problem.step_cost(&parent_state, &state);
            if step < 0 {
                return Err(SearchError::NegativeStepCost { cost: step });
            }
            let g_cost = parent_g.saturating_add(step);
            let h_cost = objective.estimate(problem, &state);

            let child = tree.add_child(current_id, action, state.clone(), g_cost, h_cost);
            frontier.push(FrontierKey::from(tree.node(child)), state);
        }
    }
}

fn finish<S: Clone + Eq, A: Clone>(
    tree: &SearchTree<S, A>,
    terminal: NodeId,
    objective: &Objective<S>,
    counters: &Counters,
    frontier_high_water: usize,
) -> SearchOutcome<S, A> {
    let node = tree.node(terminal);
    let actions = build_path(tree, terminal);
    let states = build_state_path(tree, terminal);

    debug!(
        expansions = counters.expansions,
        path_len = actions.len(),
        path_cost = node.g_cost,
        "objective reached"
    );

    let report = SearchReport {
        objective: objective.kind(),
        total_expansions: counters.expansions,
        total_candidates_generated: counters.candidates,
        total_duplicates_suppressed: counters.duplicates,
        total_depth_skipped: counters.depth_skipped,
        nodes_created: tree.len() as u64,
        frontier_high_water: frontier_high_water as u64,
        path_len: actions.len() as u64,
        path_cost: node.g_cost,
    };

    SearchOutcome {
        actions,
        states,
        reached: node.state.clone(),
        path_cost: node.g_cost,
        report,
    }
}
