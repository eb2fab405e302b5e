// Node arena and root registry.
//
// Trees are built bottom-up: a node can only refer to nodes added before it,
// so sub-trees (e.g. a gender/number/state tail) are added once and shared
// by every parent that links to them.

use std::hash::Hash;

use hashbrown::HashMap;

use crate::TreeError;
use crate::node::{DecisionNode, NodeId};

/// A validated, immutable set of decision trees keyed by `K`.
#[derive(Debug, Clone)]
pub struct Grammar<K, T> {
    nodes: Vec<DecisionNode<T>>,
    roots: HashMap<K, NodeId>,
}

impl<K: Eq + Hash, T: Copy> Grammar<K, T> {
    /// Root node registered under `key`.
    pub fn root(&self, key: &K) -> Option<NodeId> {
        self.roots.get(key).copied()
    }

    pub fn node(&self, id: NodeId) -> Option<&DecisionNode<T>> {
        self.nodes.get(id.0)
    }

    /// Number of nodes in the arena (shared nodes counted once).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root_keys(&self) -> impl Iterator<Item = &K> {
        self.roots.keys()
    }
}

/// Incremental constructor for a [`Grammar`].
#[derive(Debug)]
pub struct GrammarBuilder<K, T> {
    nodes: Vec<DecisionNode<T>>,
    roots: HashMap<K, NodeId>,
}

impl<K: Eq + Hash, T: Copy> GrammarBuilder<K, T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            roots: HashMap::new(),
        }
    }

    /// Add a node and return its id.
    pub fn add(&mut self, node: DecisionNode<T>) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Add a node and register it as the root for `key`.
    pub fn root(&mut self, key: K, node: DecisionNode<T>) -> NodeId {
        let id = self.add(node);
        self.roots.insert(key, id);
        id
    }

    /// Validate every successor and root reference and freeze the grammar.
    pub fn build(self) -> Result<Grammar<K, T>, TreeError> {
        if self.roots.is_empty() {
            return Err(TreeError::NoRoots);
        }
        let len = self.nodes.len();
        let referenced = self
            .nodes
            .iter()
            .flat_map(|n| n.step().targets())
            .chain(self.roots.values().copied());
        for id in referenced {
            if id.0 >= len {
                return Err(TreeError::DanglingNode { node: id.0, len });
            }
        }
        Ok(Grammar {
            nodes: self.nodes,
            roots: self.roots,
        })
    }
}

impl<K: Eq + Hash, T: Copy> Default for GrammarBuilder<K, T> {
    fn default() -> Self {
        Self::new()
    }
}
