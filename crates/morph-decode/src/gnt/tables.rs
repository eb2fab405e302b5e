// GNT lookup data: part-of-speech prefixes and one table per code position.

use hashbrown::HashMap;
use morph_tree::LookupTable;

/// Two-letter part-of-speech prefixes. The set is closed.
pub(crate) const PARTS: &[(&str, &str)] = &[
    ("A-", "adjective"),
    ("C-", "conjunction"),
    ("D-", "adverb"),
    ("I-", "interjection"),
    ("N-", "noun"),
    ("P-", "preposition"),
    ("RA", "definite article"),
    ("RD", "demonstrative pronoun"),
    ("RI", "interrogative/indefinite pronoun"),
    ("RP", "personal pronoun"),
    ("RR", "relative pronoun"),
    ("V-", "verb"),
    ("X-", "particle"),
];

pub(crate) const PERSON: &[(char, &str)] = &[('1', "first"), ('2', "second"), ('3', "third")];

pub(crate) const TENSE: &[(char, &str)] = &[
    ('P', "present"),
    ('I', "imperfect"),
    ('F', "future"),
    ('A', "aorist"),
    ('X', "perfect"),
    ('Y', "pluperfect"),
];

pub(crate) const VOICE: &[(char, &str)] = &[('A', "active"), ('M', "middle"), ('P', "passive")];

pub(crate) const MOOD: &[(char, &str)] = &[
    ('I', "indicative"),
    ('D', "imperative"),
    ('S', "subjunctive"),
    ('O', "optative"),
    ('N', "infinitive"),
    ('P', "participle"),
];

pub(crate) const CASE: &[(char, &str)] = &[
    ('N', "nominative"),
    ('G', "genitive"),
    ('D', "dative"),
    ('A', "accusative"),
];

pub(crate) const NUMBER: &[(char, &str)] = &[('S', "singular"), ('P', "plural")];

pub(crate) const GENDER: &[(char, &str)] = &[('M', "masculine"), ('F', "feminine"), ('N', "neuter")];

pub(crate) const DEGREE: &[(char, &str)] = &[('C', "comparative"), ('S', "superlative")];

/// Category decoded at each position of a GNT morphology code.
pub const POSITIONS: [&str; 8] = [
    "person", "tense", "voice", "mood", "case", "number", "gender", "degree",
];

/// Immutable GNT lookup tables, built once and shared by every decoder.
#[derive(Debug, Clone)]
pub struct GntTables {
    parts: HashMap<&'static str, &'static str>,
    positions: [LookupTable; 8],
}

impl GntTables {
    pub fn new() -> Self {
        Self {
            parts: PARTS.iter().copied().collect(),
            positions: [
                LookupTable::from_pairs(POSITIONS[0], PERSON),
                LookupTable::from_pairs(POSITIONS[1], TENSE),
                LookupTable::from_pairs(POSITIONS[2], VOICE),
                LookupTable::from_pairs(POSITIONS[3], MOOD),
                LookupTable::from_pairs(POSITIONS[4], CASE),
                LookupTable::from_pairs(POSITIONS[5], NUMBER),
                LookupTable::from_pairs(POSITIONS[6], GENDER),
                LookupTable::from_pairs(POSITIONS[7], DEGREE),
            ],
        }
    }

    /// Label for a part-of-speech prefix.
    pub fn part(&self, prefix: &str) -> Option<&'static str> {
        self.parts.get(prefix).copied()
    }

    /// Table for code position `index` (0-7).
    pub fn position(&self, index: usize) -> Option<&LookupTable> {
        self.positions.get(index)
    }
}

impl Default for GntTables {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_prefix_resolves() {
        let t = GntTables::new();
        for (prefix, label) in PARTS {
            assert_eq!(t.part(prefix), Some(*label));
        }
        assert_eq!(t.part("Q-"), None);
        assert_eq!(t.part("n-"), None);
    }

    #[test]
    fn position_tables_are_named_after_categories() {
        let t = GntTables::new();
        for (i, name) in POSITIONS.iter().enumerate() {
            assert_eq!(t.position(i).unwrap().name(), *name);
        }
        assert!(t.position(8).is_none());
    }

    #[test]
    fn same_letter_differs_by_position() {
        let t = GntTables::new();
        assert_eq!(t.position(1).unwrap().get('P'), Some("present"));
        assert_eq!(t.position(2).unwrap().get('P'), Some("passive"));
        assert_eq!(t.position(3).unwrap().get('P'), Some("participle"));
        assert_eq!(t.position(5).unwrap().get('P'), Some("plural"));
    }
}
