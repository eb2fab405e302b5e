// The decoded word record handed to persistence.

use serde::{Serialize, Serializer};

use crate::language::Language;
use crate::morphology::Morphology;

/// Surface forms carried by GNT input lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Surface {
    /// Text as printed, including punctuation.
    pub text: String,
    /// Word without punctuation.
    pub word: String,
    /// Normalized word form.
    pub normalized: String,
}

/// One decoded word, keyed by its absolute sequence identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedWord {
    #[serde(rename = "id")]
    pub sequence_id: u64,
    #[serde(rename = "verse")]
    pub verse_id: u32,
    pub lemma: String,
    #[serde(rename = "codes")]
    pub raw_code: String,
    /// `None` serializes as an empty string so the key is always present.
    #[serde(serialize_with = "language_or_empty")]
    pub language: Option<Language>,
    pub morphology: Morphology,
    /// Flattened morphology, carried by WLC records.
    #[serde(rename = "MorphologyString", skip_serializing_if = "Option::is_none")]
    pub morphology_string: Option<String>,
    /// Word identifier assigned by the WLC source.
    #[serde(rename = "coreid", skip_serializing_if = "Option::is_none")]
    pub core_id: Option<String>,
    #[serde(flatten)]
    pub surface: Option<Surface>,
}

fn language_or_empty<S: Serializer>(
    language: &Option<Language>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(language.map_or("", Language::label))
}

impl DecodedWord {
    /// Flattened morphology, see [`Morphology::to_flat_string`].
    pub fn flat_morphology(&self) -> String {
        self.morphology.to_flat_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphology::Attributes;

    fn word(surface: Option<Surface>) -> DecodedWord {
        let mut a = Attributes::new();
        a.set("part", "noun");
        DecodedWord {
            sequence_id: 43_001_001_002,
            verse_id: 43_001_001,
            lemma: "λόγος".to_string(),
            raw_code: "----NSM-".to_string(),
            language: Some(Language::Greek),
            morphology: vec![a].into(),
            morphology_string: None,
            core_id: None,
            surface,
        }
    }

    #[test]
    fn serializes_stable_key_fields() {
        let v = serde_json::to_value(word(None)).unwrap();
        assert_eq!(v["id"], 43_001_001_002u64);
        assert_eq!(v["verse"], 43_001_001);
        assert_eq!(v["codes"], "----NSM-");
        assert_eq!(v["language"], "Greek");
        assert_eq!(v["morphology"][0]["part"], "noun");
        assert!(v.get("coreid").is_none());
        assert!(v.get("text").is_none());
        assert!(v.get("MorphologyString").is_none());
    }

    #[test]
    fn unknown_language_keeps_the_key() {
        let mut w = word(None);
        w.language = None;
        let v = serde_json::to_value(w).unwrap();
        assert_eq!(v["language"], "");
    }

    #[test]
    fn morphology_string_is_serialized_when_set() {
        let mut w = word(None);
        w.morphology_string = Some(w.flat_morphology());
        let v = serde_json::to_value(w).unwrap();
        assert_eq!(v["MorphologyString"], "part=noun");
    }

    #[test]
    fn surface_fields_are_flattened() {
        let v = serde_json::to_value(word(Some(Surface {
            text: "λόγος,".to_string(),
            word: "λόγος".to_string(),
            normalized: "λόγος".to_string(),
        })))
        .unwrap();
        assert_eq!(v["text"], "λόγος,");
        assert_eq!(v["normalized"], "λόγος");
    }

    #[test]
    fn flat_morphology_delegates() {
        assert_eq!(word(None).flat_morphology(), "part=noun");
    }
}
