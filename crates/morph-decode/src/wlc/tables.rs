// WLC lookup data.
//
// Verb stems differ between Hebrew and Aramaic; every other table is shared
// by both languages.

use hashbrown::HashMap;
use morph_core::Language;
use morph_tree::{LookupTable, TableSource};

pub(crate) const PART_OF_SPEECH: &[(char, &str)] = &[
    ('A', "adjective"),
    ('C', "conjunction"),
    ('D', "adverb"),
    ('N', "noun"),
    ('P', "pronoun"),
    ('R', "preposition"),
    ('S', "suffix"),
    ('T', "particle"),
    ('V', "verb"),
];

pub(crate) const HEBREW_STEM: &[(char, &str)] = &[
    ('q', "qal"),
    ('N', "niphal"),
    ('p', "piel"),
    ('P', "pual"),
    ('h', "hiphil"),
    ('H', "hophal"),
    ('t', "hithpael"),
    ('o', "polel"),
    ('O', "polal"),
    ('r', "hithpolel"),
    ('m', "poel"),
    ('M', "poal"),
    ('k', "palel"),
    ('K', "pulal"),
    ('Q', "qal passive"),
    ('l', "pilpel"),
    ('L', "polpal"),
    ('f', "hithpalpel"),
    ('D', "nithpael"),
    ('j', "pealal"),
    ('i', "pilel"),
    ('u', "hothpaal"),
    ('c', "tiphil"),
    ('v', "hishtaphel"),
    ('w', "nithpalel"),
    ('y', "nithpoel"),
    ('z', "hithpoel"),
];

pub(crate) const ARAMAIC_STEM: &[(char, &str)] = &[
    ('q', "peal"),
    ('Q', "peil"),
    ('u', "hithpeel"),
    ('p', "pael"),
    ('P', "ithpaal"),
    ('M', "hithpaal"),
    ('a', "aphel"),
    ('h', "haphel"),
    ('s', "saphel"),
    ('e', "shaphel"),
    ('H', "hophal"),
    ('i', "ithpeel"),
    ('t', "hishtaphel"),
    ('v', "ishtaphel"),
    ('w', "hithaphel"),
    ('o', "polel"),
    ('z', "ithpoel"),
    ('r', "hithpolel"),
    ('f', "hithpalpel"),
    ('b', "hephal"),
    ('c', "tiphel"),
    ('m', "poel"),
    ('l', "palpel"),
    ('L', "ithpalpel"),
    ('O', "ithpolel"),
    ('G', "ittaphal"),
];

pub(crate) const CONJUGATION: &[(char, &str)] = &[
    ('p', "perfect (qatal)"),
    ('q', "sequential perfect (weqatal)"),
    ('i', "imperfect (yiqtol)"),
    ('w', "sequential imperfect (wayyiqtol)"),
    ('h', "cohortative"),
    ('j', "jussive"),
    ('v', "imperative"),
    ('r', "participle active"),
    ('s', "participle passive"),
    ('a', "infinitive absolute"),
    ('c', "infinitive construct"),
];

pub(crate) const ADJECTIVE_TYPE: &[(char, &str)] = &[
    ('a', "adjective"),
    ('c', "cardinal number"),
    ('g', "gentilic"),
    ('o', "ordinal number"),
];

pub(crate) const NOUN_TYPE: &[(char, &str)] =
    &[('c', "common"), ('g', "gentilic"), ('p', "proper name")];

pub(crate) const PRONOUN_TYPE: &[(char, &str)] = &[
    ('d', "demonstrative"),
    ('f', "indefinite"),
    ('i', "interrogative"),
    ('p', "personal"),
    ('r', "relative"),
];

pub(crate) const PREPOSITION_TYPE: &[(char, &str)] = &[('d', "definite article")];

pub(crate) const SUFFIX_TYPE: &[(char, &str)] = &[
    ('d', "directional he"),
    ('h', "paragogic he"),
    ('n', "paragogic nun"),
    ('p', "pronominal"),
];

pub(crate) const PARTICLE_TYPE: &[(char, &str)] = &[
    ('a', "affirmation"),
    ('d', "definite article"),
    ('e', "exhortation"),
    ('i', "interrogative"),
    ('j', "interjection"),
    ('m', "demonstrative"),
    ('n', "negative"),
    ('o', "direct object marker"),
    ('r', "relative"),
];

pub(crate) const PERSON: &[(char, &str)] = &[('1', "first"), ('2', "second"), ('3', "third")];

pub(crate) const GENDER: &[(char, &str)] = &[
    ('b', "both (noun)"),
    ('c', "common (verb)"),
    ('f', "feminine"),
    ('m', "masculine"),
];

pub(crate) const NUMBER: &[(char, &str)] = &[('d', "dual"), ('p', "plural"), ('s', "singular")];

pub(crate) const STATE: &[(char, &str)] =
    &[('a', "absolute"), ('c', "construct"), ('d', "determined")];

pub(crate) const UNUSED: &[(char, &str)] = &[('x', "-")];

/// Identifier of a WLC lookup table, stored in decision nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WlcTable {
    PartOfSpeech,
    HebrewStem,
    AramaicStem,
    Conjugation,
    AdjectiveType,
    NounType,
    PronounType,
    PrepositionType,
    SuffixType,
    ParticleType,
    Person,
    Gender,
    Number,
    State,
    Unused,
}

impl WlcTable {
    pub const ALL: [WlcTable; 15] = [
        WlcTable::PartOfSpeech,
        WlcTable::HebrewStem,
        WlcTable::AramaicStem,
        WlcTable::Conjugation,
        WlcTable::AdjectiveType,
        WlcTable::NounType,
        WlcTable::PronounType,
        WlcTable::PrepositionType,
        WlcTable::SuffixType,
        WlcTable::ParticleType,
        WlcTable::Person,
        WlcTable::Gender,
        WlcTable::Number,
        WlcTable::State,
        WlcTable::Unused,
    ];

    /// Verb stem table for `language`.
    pub fn stem(language: Language) -> Option<Self> {
        match language {
            Language::Hebrew => Some(WlcTable::HebrewStem),
            Language::Aramaic => Some(WlcTable::AramaicStem),
            Language::Greek => None,
        }
    }

    fn data(self) -> (&'static str, &'static [(char, &'static str)]) {
        match self {
            WlcTable::PartOfSpeech => ("part of speech", PART_OF_SPEECH),
            WlcTable::HebrewStem => ("hebrew stem", HEBREW_STEM),
            WlcTable::AramaicStem => ("aramaic stem", ARAMAIC_STEM),
            WlcTable::Conjugation => ("conjugation", CONJUGATION),
            WlcTable::AdjectiveType => ("adjective type", ADJECTIVE_TYPE),
            WlcTable::NounType => ("noun type", NOUN_TYPE),
            WlcTable::PronounType => ("pronoun type", PRONOUN_TYPE),
            WlcTable::PrepositionType => ("preposition type", PREPOSITION_TYPE),
            WlcTable::SuffixType => ("suffix type", SUFFIX_TYPE),
            WlcTable::ParticleType => ("particle type", PARTICLE_TYPE),
            WlcTable::Person => ("person", PERSON),
            WlcTable::Gender => ("gender", GENDER),
            WlcTable::Number => ("number", NUMBER),
            WlcTable::State => ("state", STATE),
            WlcTable::Unused => ("unused", UNUSED),
        }
    }
}

/// Every WLC lookup table, built once.
#[derive(Debug, Clone)]
pub struct WlcTables {
    tables: HashMap<WlcTable, LookupTable>,
}

impl WlcTables {
    pub fn new() -> Self {
        let tables = WlcTable::ALL
            .iter()
            .map(|&id| {
                let (name, pairs) = id.data();
                (id, LookupTable::from_pairs(name, pairs))
            })
            .collect();
        Self { tables }
    }

    /// Whether `code` is a known part-of-speech letter.
    pub fn is_part_of_speech(&self, code: char) -> bool {
        self.lookup(WlcTable::PartOfSpeech, code).is_some()
    }
}

impl Default for WlcTables {
    fn default() -> Self {
        Self::new()
    }
}

impl TableSource<WlcTable> for WlcTables {
    fn table(&self, id: WlcTable) -> Option<&LookupTable> {
        self.tables.get(&id)
    }
}
