// Walking a decision tree over a code string.
//
// The tree itself is never mutated: a `Cursor` holds the current node id and
// advances it as letters are consumed, so one grammar serves any number of
// concurrent walks.

use std::hash::Hash;

use morph_core::Attributes;
use tracing::trace;

use crate::TableSource;
use crate::grammar::Grammar;
use crate::node::NodeId;

/// Attribute key under which the tree's part-of-speech label is stored.
pub const PART_KEY: &str = "Part";

/// Position of an in-progress walk.
#[derive(Debug)]
pub struct Cursor<'g, K, T> {
    grammar: &'g Grammar<K, T>,
    current: Option<NodeId>,
}

impl<'g, K: Eq + Hash, T: Copy> Cursor<'g, K, T> {
    pub fn new(grammar: &'g Grammar<K, T>, root: NodeId) -> Self {
        Self {
            grammar,
            current: Some(root),
        }
    }

    /// Node the next letter will be decoded against.
    pub fn current(&self) -> Option<NodeId> {
        self.current
    }

    pub fn is_done(&self) -> bool {
        self.current.is_none()
    }

    /// Decode `code` at the current node into `attrs`, then advance.
    ///
    /// Returns `false` once the walk has run off the tree; the letter is
    /// then ignored.
    pub fn consume<S>(&mut self, code: char, tables: &S, attrs: &mut Attributes) -> bool
    where
        S: TableSource<T> + ?Sized,
    {
        let grammar = self.grammar;
        let Some(node) = self.current.and_then(|id| grammar.node(id)) else {
            self.current = None;
            return false;
        };
        if !node.is_placeholder() {
            match node.table().and_then(|t| tables.lookup(t, code)) {
                Some(label) => attrs.set(node.category(), label),
                None => trace!(category = node.category(), %code, "no label"),
            }
        }
        self.current = node.step().next(code);
        true
    }
}

/// Decode `codes` against the tree rooted at `root`.
///
/// The result always holds [`PART_KEY`]; other categories appear only when
/// the walk visited them and their table knew the letter. Codes shorter than
/// the tree is deep simply leave the remaining categories absent.
pub fn walk<K, T, S>(grammar: &Grammar<K, T>, root: NodeId, codes: &str, tables: &S) -> Attributes
where
    K: Eq + Hash,
    T: Copy,
    S: TableSource<T> + ?Sized,
{
    let mut attrs = Attributes::new();
    if let Some(node) = grammar.node(root) {
        attrs.set(PART_KEY, node.label());
    }
    let mut cursor = Cursor::new(grammar, root);
    for code in codes.chars() {
        if !cursor.consume(code, tables, &mut attrs) {
            break;
        }
    }
    attrs
}
