// Letter-to-label lookup tables.

use hashbrown::HashMap;

/// Immutable mapping from a one-letter code to a human-readable label.
///
/// Built once from literal data and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct LookupTable {
    name: &'static str,
    entries: HashMap<char, &'static str>,
}

impl LookupTable {
    /// Build a table from `(code, label)` pairs. Later duplicates win.
    pub fn from_pairs(name: &'static str, pairs: &[(char, &'static str)]) -> Self {
        let mut entries = HashMap::with_capacity(pairs.len());
        for &(code, label) in pairs {
            entries.insert(code, label);
        }
        Self { name, entries }
    }

    /// Table name, used in diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Label for `code`, or `None` if the letter is outside the table's domain.
    #[inline]
    pub fn get(&self, code: char) -> Option<&'static str> {
        self.entries.get(&code).copied()
    }

    pub fn contains(&self, code: char) -> bool {
        self.entries.contains_key(&code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
