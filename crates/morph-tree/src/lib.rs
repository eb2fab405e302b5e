//! Decision-tree engine for decoding single-letter morphology codes.
//!
//! A grammar is a set of immutable decision trees stored in one arena. Each
//! node names the category it decodes and the lookup table that turns the
//! current code letter into a label, then says how to reach the next node:
//! not at all ([`Step::Leaf`]), unconditionally ([`Step::Linear`]), or by a
//! predicate over the letter just consumed ([`Step::Branch`]).
//!
//! # Architecture
//!
//! - [`table`] -- letter-to-label lookup tables
//! - [`node`] -- decision nodes and successor steps
//! - [`grammar`] -- node arena, root registry and builder validation
//! - [`walk`] -- the cursor that consumes a code one letter at a time

pub mod grammar;
pub mod node;
pub mod table;
pub mod walk;

pub use grammar::{Grammar, GrammarBuilder};
pub use node::{DecisionNode, NodeId, Predicate, Step};
pub use table::LookupTable;
pub use walk::{Cursor, PART_KEY, walk};

/// Error type for grammar construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("node {node} is referenced but the grammar only has {len} nodes")]
    DanglingNode { node: usize, len: usize },
    #[error("grammar has no roots")]
    NoRoots,
}

/// Resolves the table identifiers stored in decision nodes.
///
/// Nodes carry a small copyable identifier `T` instead of a table reference,
/// so one grammar can be paired with any table set that knows those ids.
pub trait TableSource<T> {
    /// The table registered under `id`, if any.
    fn table(&self, id: T) -> Option<&LookupTable>;

    /// Translate `code` through table `id`. `None` means no label was
    /// produced and the caller leaves the attribute absent.
    fn lookup(&self, id: T, code: char) -> Option<&'static str> {
        self.table(id).and_then(|t| t.get(code))
    }
}
