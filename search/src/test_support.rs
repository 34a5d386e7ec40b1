//! Explicit-graph problem for kernel unit tests.

use std::cell::RefCell;

use crate::contract::{Cost, KeyedProblem, SearchProblem, Transition};

type Heuristic = Box<dyn Fn(u32) -> Cost>;

/// States are `0..n`; actions are `(from, to)` pairs.
///
/// `distance(a, b)` is `|a - b|`. `distance_to_goal` uses the installed
/// heuristic, or the minimum `|s - g|` over goals when none is set.
pub(crate) struct TableProblem {
    arcs: Vec<Vec<(u32, Cost)>>,
    goals: Vec<u32>,
    key: u32,
    heuristic: Option<Heuristic>,
    expanded: RefCell<Vec<u32>>,
}

impl TableProblem {
    pub(crate) fn new(states: u32) -> Self {
        Self {
            arcs: (0..states).map(|_| Vec::new()).collect(),
            goals: Vec::new(),
            key: 0,
            heuristic: None,
            expanded: RefCell::new(Vec::new()),
        }
    }

    /// Undirected edge.
    pub(crate) fn edge(self, a: u32, b: u32, cost: Cost) -> Self {
        self.arc(a, b, cost).arc(b, a, cost)
    }

    /// Directed edge.
    pub(crate) fn arc(mut self, from: u32, to: u32, cost: Cost) -> Self {
        self.arcs[from as usize].push((to, cost));
        self
    }

    pub(crate) fn goals(mut self, goals: &[u32]) -> Self {
        self.goals = goals.to_vec();
        self
    }

    pub(crate) fn key(mut self, key: u32) -> Self {
        self.key = key;
        self
    }

    pub(crate) fn heuristic(mut self, h: impl Fn(u32) -> Cost + 'static) -> Self {
        self.heuristic = Some(Box::new(h));
        self
    }

    /// States whose transitions were requested, in order.
    pub(crate) fn expanded(&self) -> Vec<u32> {
        self.expanded.borrow().clone()
    }
}

impl SearchProblem for TableProblem {
    type State = u32;
    type Action = (u32, u32);

    fn is_goal(&self, state: &u32) -> bool {
        self.goals.contains(state)
    }

    fn distance_to_goal(&self, state: &u32) -> Cost {
        if let Some(h) = &self.heuristic {
            return h(*state);
        }
        self.goals
            .iter()
            .map(|g| self.distance(state, g))
            .min()
            .unwrap_or(0)
    }

    fn distance(&self, from: &u32, to: &u32) -> Cost {
        (i64::from(*from) - i64::from(*to)).abs()
    }

    fn step_cost(&self, from: &u32, to: &u32) -> Cost {
        self.arcs[*from as usize]
            .iter()
            .find(|(t, _)| t == to)
            .map_or(1, |(_, c)| *c)
    }

    fn transitions(&self, state: &u32) -> Vec<Transition<(u32, u32), u32>> {
        self.expanded.borrow_mut().push(*state);
        self.arcs[*state as usize]
            .iter()
            .map(|(to, _)| Transition::new((*state, *to), *to))
            .collect()
    }
}

impl KeyedProblem for TableProblem {
    fn initial_state(&self) -> &u32 {
        &0
    }

    fn key_state(&self) -> &u32 {
        &self.key
    }

    fn goal_states(&self) -> &[u32] {
        &self.goals
    }
}
