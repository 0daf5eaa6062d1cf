//! MCTS tree node representation.
//!
//! Each node owns one position snapshot and the outcome statistics recorded
//! for it. Nodes live in the tree arena and refer to each other by [`NodeId`].

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// A node in the MCTS tree.
#[derive(Debug, Clone)]
pub struct MctsNode<S> {
    /// Parent node index (NONE for root). Only walked during backpropagation.
    pub parent: NodeId,

    /// Position at this node
    pub state: S,

    /// Children in creation order. Each distinct successor appears at most once.
    pub children: Vec<NodeId>,

    /// Number of outcomes recorded at this node
    pub visit_count: u32,

    /// Sum of the signed outcomes recorded at this node.
    /// Stays 0.0 while `visit_count` is 0.
    pub value_sum: f64,
}

impl<S> MctsNode<S> {
    /// Create a new root node.
    pub fn new_root(state: S) -> Self {
        Self::new_child(NodeId::NONE, state)
    }

    /// Create a new child node.
    pub fn new_child(parent: NodeId, state: S) -> Self {
        Self {
            parent,
            state,
            children: Vec::new(),
            visit_count: 0,
            value_sum: 0.0,
        }
    }

    /// Record one outcome.
    #[inline]
    pub fn record(&mut self, result: f64) {
        self.visit_count += 1;
        self.value_sum += result;
    }

    /// Calculate mean outcome = value_sum / visit_count.
    /// Returns 0.0 if never visited.
    #[inline]
    pub fn mean_value(&self) -> f64 {
        if self.visit_count == 0 {
            0.0
        } else {
            self.value_sum / self.visit_count as f64
        }
    }

    /// Calculate the UCB1 score of a visited child.
    /// UCB1 = mean + c * sqrt(ln(N_parent) / N)
    ///
    /// Takes pre-computed ln(parent_visits) so it is evaluated once per
    /// comparison round. Unvisited nodes score +inf.
    #[inline]
    pub fn ucb1_score(&self, parent_visits_ln: f64, exploration: f64) -> f64 {
        if self.visit_count == 0 {
            return f64::INFINITY;
        }
        let visits = self.visit_count as f64;
        self.mean_value() + exploration * (parent_visits_ln / visits).sqrt()
    }

    /// Check if any child has been materialized.
    #[inline]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}
