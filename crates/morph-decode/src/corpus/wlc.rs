// WLC corpus reader.
//
// A WLC book file is JSON nested as chapters, verses, words; each word is a
// three-element array `[lemma, id, code]`. The book is identified by the
// file name (`isamuel.json`), chapter and verse by position.

use std::fs;
use std::path::{Path, PathBuf};

use morph_core::{DecodedWord, VerseCounter, VerseRef};
use serde::Deserialize;
use tracing::{debug, warn};

use super::{BookSource, scan_dir};
use crate::books::{Book, OT_BOOKS, wlc_book_for_stem};
use crate::error::CorpusError;
use crate::wlc::WlcDecoder;

/// Extension of WLC book files.
pub const EXTENSION: &str = "json";

/// One word of a WLC book file: lemma, source word id, morphology code.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WlcEntry(pub String, pub String, pub String);

impl WlcEntry {
    pub fn lemma(&self) -> &str {
        &self.0
    }

    pub fn id(&self) -> &str {
        &self.1
    }

    pub fn code(&self) -> &str {
        &self.2
    }
}

/// Parsed book: chapters of verses of words.
pub type WlcChapters = Vec<Vec<Vec<WlcEntry>>>;

/// Verse numbering scheme of the source tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Versification {
    /// Hebrew verse numbers (`hebrew/` directory).
    #[default]
    Hebrew,
    /// Verses remapped to English numbering (`remapped/` directory).
    English,
}

impl Versification {
    /// `"english"` selects English numbering; anything else is Hebrew.
    pub fn from_style(style: &str) -> Self {
        if style.eq_ignore_ascii_case("english") {
            Versification::English
        } else {
            Versification::Hebrew
        }
    }

    pub fn dir_name(self) -> &'static str {
        match self {
            Versification::Hebrew => "hebrew",
            Versification::English => "remapped",
        }
    }

    /// Directory under `root` holding books in this numbering.
    pub fn source_dir(self, root: &Path) -> PathBuf {
        root.join(self.dir_name())
    }
}

/// Parse the JSON text of a WLC book file.
pub fn parse_book(text: &str, path: &Path) -> Result<WlcChapters, CorpusError> {
    serde_json::from_str(text).map_err(|source| CorpusError::Json {
        path: path.to_path_buf(),
        source,
    })
}

fn position(value: usize) -> u32 {
    u32::try_from(value + 1).unwrap_or(u32::MAX)
}

fn decode_word(
    decoder: WlcDecoder<'_>,
    verse: Result<VerseRef, CorpusError>,
    word: u32,
    entry: &WlcEntry,
) -> Result<DecodedWord, CorpusError> {
    let verse = verse?;
    let decoded = decoder.decode(entry.code())?;
    Ok(DecodedWord {
        sequence_id: verse.sequence_id(word)?,
        verse_id: verse.verse_id()?,
        lemma: entry.lemma().to_string(),
        raw_code: entry.code().to_string(),
        language: decoded.language,
        morphology_string: Some(decoded.morphology.to_flat_string()),
        morphology: decoded.morphology,
        core_id: Some(entry.id().to_string()),
        surface: None,
    })
}

/// Decode every word of a parsed book, in source order.
///
/// The word counter restarts at 1 with every verse.
pub fn decode_book<'a>(
    decoder: WlcDecoder<'a>,
    book: Book,
    chapters: &'a WlcChapters,
) -> impl Iterator<Item = Result<DecodedWord, CorpusError>> + 'a {
    let mut counter = VerseCounter::new();
    chapters
        .iter()
        .enumerate()
        .flat_map(|(ci, verses)| {
            verses
                .iter()
                .enumerate()
                .flat_map(move |(vi, words)| words.iter().map(move |w| (ci, vi, w)))
        })
        .map(move |(ci, vi, entry)| {
            let word = counter.advance(&(ci, vi));
            let verse = VerseRef::new(book.number, position(ci), position(vi))
                .map_err(CorpusError::from);
            decode_word(decoder, verse, word, entry)
        })
}

/// Read and decode a whole WLC book file.
pub fn read_book(
    decoder: WlcDecoder<'_>,
    source: &BookSource,
) -> Result<Vec<DecodedWord>, CorpusError> {
    debug!(path = %source.path.display(), book = source.book.name, "parsing");
    let text = fs::read_to_string(&source.path).map_err(|e| CorpusError::io(&source.path, e))?;
    let chapters = parse_book(&text, &source.path)?;
    decode_book(decoder, source.book, &chapters).collect()
}

/// Find the WLC book files in `dir`, in canonical order.
///
/// Each of the 39 books with no file in `dir` is logged as a warning.
pub fn scan(dir: &Path) -> Result<Vec<BookSource>, CorpusError> {
    let sources = scan_dir(dir, EXTENSION, wlc_book_for_stem)?;
    for book in missing_books(&sources) {
        warn!(dir = %dir.display(), book = book.name, "book file missing");
    }
    Ok(sources)
}

/// Old Testament books with no entry in `sources`, in canonical order.
pub fn missing_books(sources: &[BookSource]) -> Vec<Book> {
    (1..=OT_BOOKS.len() as u32)
        .filter_map(Book::old_testament)
        .filter(|book| !sources.iter().any(|s| s.book.number == book.number))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wlc::WlcGrammar;
    use morph_core::Language;

    const RUTH: &str = r#"[
        [
            ["וַיְהִי", "01", "HC/Vqw3ms"],
            ["בִּימֵי", "02", "HR/Ncmpc"],
            ["שְׁפֹט", "03", "HVqc"]
        ],
        [
            ["וַיֵּלֶךְ", "01", "HC/Vqw3ms"],
            ["אִישׁ", "02", "HNcmsa"]
        ]
    ]"#;

    fn wrap_chapter(verses: &str) -> String {
        format!("[{verses}]")
    }

    fn decode(text: &str) -> Vec<DecodedWord> {
        let g = WlcGrammar::new().unwrap();
        let chapters = parse_book(text, Path::new("ruth.json")).unwrap();
        let book = Book::old_testament(8).unwrap();
        decode_book(WlcDecoder::new(&g), book, &chapters)
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn word_counter_resets_per_verse() {
        let words = decode(&wrap_chapter(RUTH));
        let ids: Vec<u64> = words.iter().map(|w| w.sequence_id).collect();
        assert_eq!(
            ids,
            vec![
                8_001_001_001,
                8_001_001_002,
                8_001_001_003,
                8_001_002_001,
                8_001_002_002,
            ]
        );
        assert_eq!(words[3].verse_id, 8_001_002);
    }

    #[test]
    fn chapters_are_numbered_by_position() {
        let text = format!("[[], {}]", RUTH);
        let words = decode(&text);
        assert_eq!(words[0].verse_id, 8_002_001);
    }

    #[test]
    fn record_fields() {
        let words = decode(&wrap_chapter(RUTH));
        let w = &words[0];
        assert_eq!(w.lemma, "וַיְהִי");
        assert_eq!(w.core_id.as_deref(), Some("01"));
        assert_eq!(w.raw_code, "HC/Vqw3ms");
        assert_eq!(w.language, Some(Language::Hebrew));
        assert_eq!(w.morphology.len(), 2);
        assert_eq!(w.surface, None);
        assert_eq!(
            w.morphology_string.as_deref(),
            Some("Part=conjunction|Part=verb,Stem=qal,Conjugation=sequential imperfect (wayyiqtol),Person=third,Gender=masculine,Number=singular")
        );
        assert_eq!(
            words[2].morphology.entries()[0].get("Conjugation"),
            Some("infinitive construct")
        );
    }

    #[test]
    fn wrong_arity_is_a_json_error() {
        let err = parse_book(r#"[[[["a", "b"]]]]"#, Path::new("x.json")).unwrap_err();
        assert!(matches!(err, CorpusError::Json { .. }));
    }

    #[test]
    fn missing_books_lists_the_gaps() {
        let sources: Vec<BookSource> = (2..=OT_BOOKS.len() as u32)
            .filter(|&n| n != 8)
            .filter_map(Book::old_testament)
            .map(|book| BookSource {
                book,
                path: PathBuf::from(format!("{}.json", book.file_stem())),
            })
            .collect();
        let names: Vec<&str> = missing_books(&sources).iter().map(|b| b.name).collect();
        assert_eq!(names, vec!["Genesis", "Ruth"]);
        assert_eq!(missing_books(&[]).len(), 39);
    }

    #[test]
    fn versification_dirs() {
        assert_eq!(Versification::from_style("english"), Versification::English);
        assert_eq!(Versification::from_style(""), Versification::Hebrew);
        assert_eq!(Versification::from_style("hebrew"), Versification::Hebrew);
        assert_eq!(
            Versification::English.source_dir(Path::new("morphhb")),
            Path::new("morphhb/remapped")
        );
    }
}
