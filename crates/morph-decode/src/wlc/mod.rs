// WLC tree-walking decoder.
//
// A WLC code is a language letter followed by one or more "/"-separated
// sub-entries, one per morpheme (`HR/Ncfsa` is a preposition fused with a
// noun). Each sub-entry starts with a part-of-speech letter that selects a
// decision tree; the rest of the sub-entry is walked through that tree.

mod grammar;
mod tables;

pub use grammar::{TreeKey, WlcGrammar};
pub use tables::{WlcTable, WlcTables};

use morph_core::{Attributes, Language, Morphology};
use morph_tree::walk;
use tracing::trace;

use crate::error::DecodeError;

/// Separator between sub-entries of a WLC code.
pub const SUB_ENTRY_SEPARATOR: char = '/';

/// Result of decoding one WLC code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WlcDecoded {
    /// `None` when the leading letter is not a known language.
    pub language: Option<Language>,
    pub morphology: Morphology,
}

/// Decoder for WLC codes. Cheap to create; borrows the shared grammar.
#[derive(Debug, Clone, Copy)]
pub struct WlcDecoder<'g> {
    grammar: &'g WlcGrammar,
}

impl<'g> WlcDecoder<'g> {
    pub fn new(grammar: &'g WlcGrammar) -> Self {
        Self { grammar }
    }

    /// Decode a full word-level code into one attribute map per sub-entry.
    pub fn decode(&self, code: &str) -> Result<WlcDecoded, DecodeError> {
        let mut chars = code.chars();
        let language_code = chars.next().ok_or(DecodeError::EmptyCode)?;
        let language = Language::from_wlc_code(language_code);
        trace!(code, ?language, "decoding");

        let morphology = chars
            .as_str()
            .split(SUB_ENTRY_SEPARATOR)
            .map(|entry| self.decode_entry(entry, language, code))
            .collect::<Result<Morphology, DecodeError>>()?;
        Ok(WlcDecoded {
            language,
            morphology,
        })
    }

    /// Decode one sub-entry (part-of-speech letter plus attribute letters).
    ///
    /// `code` is the full word-level code, used only in error reports.
    pub fn decode_entry(
        &self,
        entry: &str,
        language: Option<Language>,
        code: &str,
    ) -> Result<Attributes, DecodeError> {
        let mut chars = entry.chars();
        let part = chars.next().ok_or_else(|| DecodeError::EmptySubEntry {
            code: code.to_string(),
        })?;
        if !self.grammar.tables().is_part_of_speech(part) {
            return Err(DecodeError::UnknownPart {
                part: part.to_string(),
            });
        }
        let no_tree = || DecodeError::NoTree {
            part,
            language: language.map_or_else(|| "unknown".to_string(), |l| l.to_string()),
        };
        let key = TreeKey::for_part(part, language).ok_or_else(no_tree)?;
        let trees = self.grammar.trees();
        let root = trees.root(&key).ok_or_else(no_tree)?;
        trace!(%key, entry, "walking");
        Ok(walk(trees, root, chars.as_str(), self.grammar.tables()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn decode(code: &str) -> WlcDecoded {
        let g = WlcGrammar::new().unwrap();
        WlcDecoder::new(&g).decode(code).unwrap()
    }

    fn pairs(a: &Attributes) -> Vec<(&str, &str)> {
        a.iter().collect()
    }

    #[test]
    fn hebrew_qal_perfect() {
        let d = decode("HVqp3ms");
        assert_eq!(d.language, Some(Language::Hebrew));
        assert_eq!(d.morphology.len(), 1);
        assert_eq!(
            pairs(&d.morphology.entries()[0]),
            vec![
                ("Part", "verb"),
                ("Stem", "qal"),
                ("Conjugation", "perfect (qatal)"),
                ("Person", "third"),
                ("Gender", "masculine"),
                ("Number", "singular"),
            ]
        );
    }

    #[test]
    fn aramaic_stems_use_aramaic_table() {
        let d = decode("AVqp3ms");
        assert_eq!(d.language, Some(Language::Aramaic));
        let a = &d.morphology.entries()[0];
        assert_eq!(a.get("Part"), Some("verb"));
        assert_eq!(a.get("Stem"), Some("peal"));
    }

    #[test]
    fn participle_skips_person() {
        let d = decode("HVqrmsa");
        assert_eq!(
            pairs(&d.morphology.entries()[0]),
            vec![
                ("Part", "verb"),
                ("Stem", "qal"),
                ("Conjugation", "participle active"),
                ("Gender", "masculine"),
                ("Number", "singular"),
                ("State", "absolute"),
            ]
        );
    }

    #[test]
    fn stacked_entries() {
        let d = decode("HC/Vqw3ms");
        assert_eq!(d.morphology.len(), 2);
        assert_eq!(pairs(&d.morphology.entries()[0]), vec![("Part", "conjunction")]);
        assert_eq!(
            d.morphology.entries()[1].get("Conjugation"),
            Some("sequential imperfect (wayyiqtol)")
        );
    }

    #[test]
    fn preposition_article_noun() {
        let d = decode("HRd/Ncmsa");
        let prep = &d.morphology.entries()[0];
        assert_eq!(
            pairs(prep),
            vec![("Part", "preposition"), ("preposition", "definite article")]
        );
        assert_eq!(prep.get("Type"), None);
        let noun = &d.morphology.entries()[1];
        assert_eq!(
            pairs(noun),
            vec![
                ("Part", "noun"),
                ("Type", "common"),
                ("Gender", "masculine"),
                ("Number", "singular"),
                ("State", "absolute"),
            ]
        );
    }

    #[test]
    fn personal_pronoun_has_person() {
        let d = decode("HPp3ms");
        let a = &d.morphology.entries()[0];
        assert_eq!(a.get("Type"), Some("personal"));
        assert_eq!(a.get("Person"), Some("third"));
        assert_eq!(a.get("Gender"), Some("masculine"));
        assert_eq!(a.get("Number"), Some("singular"));
        assert_eq!(a.get("State"), None);
    }

    #[test]
    fn demonstrative_pronoun_skips_placeholder() {
        let d = decode("HPdxms");
        let a = &d.morphology.entries()[0];
        assert_eq!(
            pairs(a),
            vec![
                ("Part", "pronoun"),
                ("Type", "demonstrative"),
                ("Gender", "masculine"),
                ("Number", "singular"),
            ]
        );
    }

    #[test]
    fn noun_with_pronominal_suffix() {
        let d = decode("HNcmsc/Sp3ms");
        let s = &d.morphology.entries()[1];
        assert_eq!(s.get("Part"), Some("suffix"));
        assert_eq!(s.get("Type"), Some("pronominal"));
        assert_eq!(s.get("Person"), Some("third"));
    }

    #[test]
    fn short_entry_is_not_an_error() {
        let d = decode("HNc");
        assert_eq!(
            pairs(&d.morphology.entries()[0]),
            vec![("Part", "noun"), ("Type", "common")]
        );
        let d = decode("HTo");
        assert_eq!(
            d.morphology.entries()[0].get("Type"),
            Some("direct object marker")
        );
    }

    #[test]
    fn flattened_form() {
        let d = decode("HR/Ncfsa");
        assert_eq!(
            d.morphology.to_flat_string(),
            "Part=preposition|Part=noun,Type=common,Gender=feminine,Number=singular,State=absolute"
        );
    }

    #[test]
    fn unknown_language_decodes_non_verbs() {
        let d = decode("XNcmsa");
        assert_eq!(d.language, None);
        assert_eq!(d.morphology.entries()[0].get("Part"), Some("noun"));
    }

    #[test]
    fn verb_without_language_has_no_tree() {
        let g = WlcGrammar::new().unwrap();
        let err = WlcDecoder::new(&g).decode("XVqp3ms").unwrap_err();
        assert_eq!(
            err,
            DecodeError::NoTree {
                part: 'V',
                language: "unknown".to_string()
            }
        );
    }

    #[test]
    fn unknown_part_is_fatal() {
        let g = WlcGrammar::new().unwrap();
        let err = WlcDecoder::new(&g).decode("HQx").unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnknownPart {
                part: "Q".to_string()
            }
        );
    }

    #[test]
    fn empty_codes_are_structural_errors() {
        let g = WlcGrammar::new().unwrap();
        let d = WlcDecoder::new(&g);
        assert_eq!(d.decode("").unwrap_err(), DecodeError::EmptyCode);
        assert_eq!(
            d.decode("H").unwrap_err(),
            DecodeError::EmptySubEntry {
                code: "H".to_string()
            }
        );
        assert_eq!(
            d.decode("HC/").unwrap_err(),
            DecodeError::EmptySubEntry {
                code: "HC/".to_string()
            }
        );
    }

    proptest! {
        #[test]
        fn one_map_per_sub_entry(
            entries in proptest::collection::vec("[ACDNPRST][a-z0-9]{0,6}", 1..4)
        ) {
            let g = WlcGrammar::new().unwrap();
            let code = format!("H{}", entries.join("/"));
            let d = WlcDecoder::new(&g).decode(&code).unwrap();
            prop_assert_eq!(d.morphology.len(), entries.len());
            for a in d.morphology.entries() {
                prop_assert!(a.contains_key("Part"));
            }
        }

        #[test]
        fn decoding_is_idempotent(
            entries in proptest::collection::vec("[ACDNPRSTV][a-zA-Z0-9]{0,6}", 1..4)
        ) {
            let g = WlcGrammar::new().unwrap();
            let d = WlcDecoder::new(&g);
            let code = format!("A{}", entries.join("/"));
            prop_assert_eq!(d.decode(&code).unwrap(), d.decode(&code).unwrap());
        }
    }
}
