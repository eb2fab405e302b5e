// Ordered attribute maps produced by the decoders.
//
// An `Attributes` value holds the decoded categories of one morpheme in the
// order the decoder visited them. A word's `Morphology` is the sequence of
// those maps, one per "/"-separated sub-entry for WLC codes and exactly one
// for GNT codes.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Separator between `key=value` pairs in the flattened form.
pub const PAIR_SEPARATOR: char = ',';

/// Separator between sub-entries in the flattened form.
pub const ENTRY_SEPARATOR: char = '|';

/// Category-to-label map that remembers insertion order.
///
/// Absent categories are simply missing; a decoder never stores an empty
/// label to mean "unknown".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    /// Create a new empty attribute map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Set an attribute value. Replaces any previous value for the same key
    /// without moving it.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Get an attribute value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Remove an attribute by key.
    pub fn remove(&mut self, key: &str) {
        self.entries.retain(|(k, _)| k != key);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as `key=value` pairs joined by `,`.
    pub fn to_flat_string(&self) -> String {
        let mut out = String::new();
        for (i, (k, v)) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push(PAIR_SEPARATOR);
            }
            out.push_str(k);
            out.push('=');
            out.push_str(v);
        }
        out
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// The decoded morphology of one word: one attribute map per morpheme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Morphology {
    entries: Vec<Attributes>,
}

impl Morphology {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: Attributes) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[Attributes] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Flattened textual form: each sub-entry rendered by
    /// [`Attributes::to_flat_string`], sub-entries joined by `|`.
    pub fn to_flat_string(&self) -> String {
        let mut out = String::new();
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push(ENTRY_SEPARATOR);
            }
            out.push_str(&entry.to_flat_string());
        }
        out
    }
}

impl From<Vec<Attributes>> for Morphology {
    fn from(entries: Vec<Attributes>) -> Self {
        Self { entries }
    }
}

impl FromIterator<Attributes> for Morphology {
    fn from_iter<I: IntoIterator<Item = Attributes>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
