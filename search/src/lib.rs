//! Keymaze Search: deterministic best-first search over implicit graphs.
//!
//! This crate owns the search kernel only. It never sees maze text; problem
//! domains plug in through [`SearchProblem`] and [`KeyedProblem`].
//!
//! # Crate dependency graph
//!
//! ```text
//! keymaze_search  ←  keymaze_maze   ←  lock-tests
//! (kernel, solver)   (grid problem)    (integration locks)
//! ```
//!
//! # Key types
//!
//! - [`SearchProblem`]: transition model, step costs and heuristics
//! - [`Objective`]: termination predicate + heuristic for one search call
//! - [`SearchTree`] / [`SearchNode`]: per-run node arena addressed by [`NodeId`]
//! - [`Frontier`]: min-heap on `(priority, depth, node id)` with state membership
//! - [`SearchPolicy`]: expansion, depth and wall-clock budgets
//! - [`SearchReport`]: per-leg counters with a canonical JSON digest
//! - [`solve`]: start → key → goal composition
//!
//! [`SearchProblem`]: contract::SearchProblem
//! [`KeyedProblem`]: contract::KeyedProblem
//! [`Objective`]: objective::Objective
//! [`SearchTree`]: node::SearchTree
//! [`SearchNode`]: node::SearchNode
//! [`NodeId`]: node::NodeId
//! [`Frontier`]: frontier::Frontier
//! [`SearchPolicy`]: policy::SearchPolicy
//! [`SearchReport`]: report::SearchReport
//! [`solve`]: solver::solve

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod node;
pub mod objective;
pub mod path;
pub mod policy;
pub mod report;
pub mod search;
pub mod solver;

#[cfg(test)]
pub(crate) mod test_support;
