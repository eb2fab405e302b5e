// Decision nodes and how a walk leaves them.

/// Index of a node inside its [`Grammar`](crate::Grammar) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Predicate over the letter consumed at a branching node.
pub type Predicate = fn(char) -> bool;

/// How the walk selects the node for the next letter.
#[derive(Debug, Clone, Copy)]
pub enum Step {
    /// No successor; any remaining letters are left undecoded.
    Leaf,
    /// Always continue with the given node.
    Linear(NodeId),
    /// Evaluate `predicate` on the letter just consumed at this node.
    Branch {
        predicate: Predicate,
        on_true: NodeId,
        on_false: NodeId,
    },
}

impl Step {
    /// The successor after consuming `code` at the owning node.
    #[inline]
    pub fn next(&self, code: char) -> Option<NodeId> {
        match *self {
            Step::Leaf => None,
            Step::Linear(next) => Some(next),
            Step::Branch {
                predicate,
                on_true,
                on_false,
            } => Some(if predicate(code) { on_true } else { on_false }),
        }
    }

    /// Every node this step can lead to.
    pub fn targets(&self) -> Vec<NodeId> {
        match *self {
            Step::Leaf => Vec::new(),
            Step::Linear(next) => vec![next],
            Step::Branch {
                on_true, on_false, ..
            } => vec![on_true, on_false],
        }
    }
}

/// One grammatical category decode step.
///
/// `T` identifies the lookup table through a
/// [`TableSource`](crate::TableSource). A node without a table decodes
/// nothing for its letter. A placeholder node consumes its letter without
/// storing anything.
#[derive(Debug, Clone)]
pub struct DecisionNode<T> {
    category: &'static str,
    table: Option<T>,
    top_label: Option<&'static str>,
    placeholder: bool,
    step: Step,
}

impl<T: Copy> DecisionNode<T> {
    /// A leaf node for `category` with no table.
    pub fn new(category: &'static str) -> Self {
        Self {
            category,
            table: None,
            top_label: None,
            placeholder: false,
            step: Step::Leaf,
        }
    }

    pub fn with_table(mut self, table: T) -> Self {
        self.table = Some(table);
        self
    }

    /// Part-of-speech label reported when this node is a tree root.
    pub fn with_top_label(mut self, label: &'static str) -> Self {
        self.top_label = Some(label);
        self
    }

    /// Mark the node as a non-contributing placeholder slot.
    pub fn placeholder(mut self) -> Self {
        self.placeholder = true;
        self
    }

    /// Continue unconditionally with `next`.
    pub fn then(mut self, next: NodeId) -> Self {
        self.step = Step::Linear(next);
        self
    }

    /// Continue with `on_true` or `on_false` depending on the consumed letter.
    pub fn branch(mut self, predicate: Predicate, on_true: NodeId, on_false: NodeId) -> Self {
        self.step = Step::Branch {
            predicate,
            on_true,
            on_false,
        };
        self
    }

    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn table(&self) -> Option<T> {
        self.table
    }

    pub fn top_label(&self) -> Option<&'static str> {
        self.top_label
    }

    /// `top_label` if set, otherwise the category name.
    pub fn label(&self) -> &'static str {
        self.top_label.unwrap_or(self.category)
    }

    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    pub fn step(&self) -> &Step {
        &self.step
    }
}
