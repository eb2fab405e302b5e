// The WLC code grammar: one decision tree per part of speech, two for verbs.
//
// After the part-of-speech letter, a WLC sub-entry is read letter by letter:
//
//   adjective, noun   Type  Gender Number State
//   pronoun           Type  Person Gender Number          (personal)
//                     Type  x      Gender Number State    (all others)
//   suffix            Type  Person Gender Number
//   particle          Type
//   preposition       preposition (the type letter, keyed by the part name)
//   verb              Stem  Conjugation Person Gender Number State   (finite)
//                     Stem  Conjugation Gender Number State          (participle)
//   conjunction, adverb   (nothing)

use std::fmt;

use morph_core::Language;
use morph_tree::{DecisionNode, Grammar, GrammarBuilder, TreeError};

use super::tables::{WlcTable, WlcTables};

/// Key selecting a tree: the part-of-speech letter, plus the language for
/// verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeKey {
    Part(char),
    Verb(Language),
}

impl TreeKey {
    pub const VERB: char = 'V';

    /// Key for `part` in a code of the given language.
    ///
    /// Verbs need a language; a verb with no recognised language has no key.
    pub fn for_part(part: char, language: Option<Language>) -> Option<Self> {
        if part == Self::VERB {
            language.map(TreeKey::Verb)
        } else {
            Some(TreeKey::Part(part))
        }
    }
}

impl fmt::Display for TreeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeKey::Part(c) => write!(f, "{c}"),
            TreeKey::Verb(lang) => write!(f, "{}{}", Self::VERB, lang.wlc_code().unwrap_or('?')),
        }
    }
}

/// Participles continue with gender; every other conjugation with person.
fn is_finite(conjugation: char) -> bool {
    conjugation != 'r' && conjugation != 's'
}

/// Only personal pronouns carry a person; the others hold a placeholder.
fn is_personal(pronoun_type: char) -> bool {
    pronoun_type == 'p'
}

/// Tables and trees for WLC decoding, immutable after construction.
#[derive(Debug, Clone)]
pub struct WlcGrammar {
    tables: WlcTables,
    trees: Grammar<TreeKey, WlcTable>,
}

impl WlcGrammar {
    pub fn new() -> Result<Self, TreeError> {
        Ok(Self {
            tables: WlcTables::new(),
            trees: build_trees()?,
        })
    }

    pub fn tables(&self) -> &WlcTables {
        &self.tables
    }

    pub fn trees(&self) -> &Grammar<TreeKey, WlcTable> {
        &self.trees
    }
}

fn build_trees() -> Result<Grammar<TreeKey, WlcTable>, TreeError> {
    let mut b = GrammarBuilder::new();

    // gender / number / state tail shared by nominals, participles and
    // non-personal pronouns
    let state = b.add(DecisionNode::new("State").with_table(WlcTable::State));
    let gns_number = b.add(
        DecisionNode::new("Number")
            .with_table(WlcTable::Number)
            .then(state),
    );
    let gns = b.add(
        DecisionNode::new("Gender")
            .with_table(WlcTable::Gender)
            .then(gns_number),
    );

    // person / gender / number for suffixes and personal pronouns
    let pgn_number = b.add(DecisionNode::new("Number").with_table(WlcTable::Number));
    let pgn_gender = b.add(
        DecisionNode::new("Gender")
            .with_table(WlcTable::Gender)
            .then(pgn_number),
    );
    let pgn = b.add(
        DecisionNode::new("Person")
            .with_table(WlcTable::Person)
            .then(pgn_gender),
    );

    b.root(TreeKey::Part('C'), DecisionNode::new("conjunction"));
    b.root(TreeKey::Part('D'), DecisionNode::new("adverb"));
    b.root(
        TreeKey::Part('A'),
        DecisionNode::new("Type")
            .with_table(WlcTable::AdjectiveType)
            .with_top_label("adjective")
            .then(gns),
    );
    b.root(
        TreeKey::Part('N'),
        DecisionNode::new("Type")
            .with_table(WlcTable::NounType)
            .with_top_label("noun")
            .then(gns),
    );

    let pronoun_placeholder = b.add(
        DecisionNode::new("-")
            .with_table(WlcTable::Unused)
            .placeholder()
            .then(gns),
    );
    b.root(
        TreeKey::Part('P'),
        DecisionNode::new("Type")
            .with_table(WlcTable::PronounType)
            .with_top_label("pronoun")
            .branch(is_personal, pgn, pronoun_placeholder),
    );
    // the preposition's own letter is stored under the part name itself
    b.root(
        TreeKey::Part('R'),
        DecisionNode::new("preposition").with_table(WlcTable::PrepositionType),
    );
    b.root(
        TreeKey::Part('S'),
        DecisionNode::new("Type")
            .with_table(WlcTable::SuffixType)
            .with_top_label("suffix")
            .then(pgn),
    );
    b.root(
        TreeKey::Part('T'),
        DecisionNode::new("Type")
            .with_table(WlcTable::ParticleType)
            .with_top_label("particle"),
    );

    let verb_person = b.add(
        DecisionNode::new("Person")
            .with_table(WlcTable::Person)
            .then(gns),
    );
    let conjugation = b.add(
        DecisionNode::new("Conjugation")
            .with_table(WlcTable::Conjugation)
            .branch(is_finite, verb_person, gns),
    );
    // Both verb roots report `Part=verb`. Aramaic verbs were labelled `Verb`
    // in earlier exports; the lowercase label is intentional.
    for language in [Language::Hebrew, Language::Aramaic] {
        let Some(stem) = WlcTable::stem(language) else {
            continue;
        };
        b.root(
            TreeKey::Verb(language),
            DecisionNode::new("Stem")
                .with_table(stem)
                .with_top_label("verb")
                .then(conjugation),
        );
    }

    b.build()
}
