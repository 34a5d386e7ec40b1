//! Search tree nodes and the per-run node arena.

use std::fmt;

use crate::contract::Cost;

/// Index of a node in its [`SearchTree`].
///
/// Ids are handed out in creation order, so comparing two ids compares
/// which node was discovered first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The root of every tree.
    pub const ROOT: NodeId = NodeId(0);
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An immutable node in the search tree.
///
/// The root (and only the root) has neither `parent` nor `action`.
///
/// Equality compares `state` only: two nodes for the same state are
/// duplicates regardless of cost or path.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    pub id: NodeId,
    /// Parent node (`None` for root).
    pub parent: Option<NodeId>,
    pub state: S,
    /// The action that produced this node from its parent.
    pub action: Option<A>,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Accumulated step cost from the search start.
    pub g_cost: Cost,
    /// Heuristic estimate under the run's objective.
    pub h_cost: Cost,
}

impl<S, A> SearchNode<S, A> {
    /// Frontier ordering value: `g_cost + h_cost`.
    #[must_use]
    pub fn priority(&self) -> Cost {
        self.g_cost.saturating_add(self.h_cost)
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

impl<S: PartialEq, A> PartialEq for SearchNode<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<S: Eq, A> Eq for SearchNode<S, A> {}

impl<S: fmt::Display, A> fmt::Display for SearchNode<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} , {})", self.priority(), self.state)
    }
}

/// The frontier ordering key: `(priority, depth, node)`.
///
/// Lower priority first, then shallower depth, then the earlier-created node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub priority: Cost,
    pub depth: u32,
    pub node: NodeId,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.depth.cmp(&other.depth))
            .then(self.node.cmp(&other.node))
    }
}

impl<S, A> From<&SearchNode<S, A>> for FrontierKey {
    fn from(node: &SearchNode<S, A>) -> Self {
        Self {
            priority: node.priority(),
            depth: node.depth,
            node: node.id,
        }
    }
}

/// Arena of every node created during one search run.
///
/// Nodes are never removed; the whole tree is freed when the arena drops.
#[derive(Debug, Clone)]
pub struct SearchTree<S, A> {
    nodes: Vec<SearchNode<S, A>>,
}

impl<S, A> SearchTree<S, A> {
    /// Start a tree whose root holds `state` with heuristic `h_cost`.
    #[must_use]
    pub fn with_root(state: S, h_cost: Cost) -> Self {
        Self {
            nodes: vec![SearchNode {
                id: NodeId::ROOT,
                parent: None,
                state,
                action: None,
                depth: 0,
                g_cost: 0,
                h_cost,
            }],
        }
    }

    /// Append a child of `parent` and return its id.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this tree.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        action: A,
        state: S,
        g_cost: Cost,
        h_cost: Cost,
    ) -> NodeId {
        let depth = self.nodes[parent.0].depth + 1;
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            id,
            parent: Some(parent),
            state,
            action: Some(action),
            depth,
            g_cost,
            h_cost,
        });
        id
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &SearchNode<S, A> {
        &self.nodes[id.0]
    }

    #[must_use]
    pub fn root(&self) -> &SearchNode<S, A> {
        &self.nodes[0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree has at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchNode<S, A>> {
        self.nodes.iter()
    }
}
