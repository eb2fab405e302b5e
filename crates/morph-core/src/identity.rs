// Verse and word identity synthesis.
//
// A verse identifier is the decimal concatenation of a 2-digit book, a
// 3-digit chapter and a 3-digit verse; a word identifier appends a 3-digit
// word-within-verse index. Fixed widths are what keep the concatenation
// unique, so every field is checked against its width before formatting.

use thiserror::Error;

pub const BOOK_WIDTH: usize = 2;
pub const CHAPTER_WIDTH: usize = 3;
pub const VERSE_WIDTH: usize = 3;
pub const WORD_WIDTH: usize = 3;

/// Error raised while synthesizing an identifier.
///
/// Always structural: it means the upstream source file is corrupt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("{field} {value} does not fit in {width} digits")]
    FieldOverflow {
        field: &'static str,
        value: u32,
        width: usize,
    },
    #[error("{field} must be at least 1")]
    ZeroField { field: &'static str },
    #[error("synthesized identifier {0:?} is not numeric")]
    Parse(String),
}

fn check_width(field: &'static str, value: u32, width: usize) -> Result<u32, IdentityError> {
    if value == 0 {
        return Err(IdentityError::ZeroField { field });
    }
    if value >= 10u32.pow(width as u32) {
        return Err(IdentityError::FieldOverflow {
            field,
            value,
            width,
        });
    }
    Ok(value)
}

/// A validated book/chapter/verse position.
///
/// Book numbers are canonical across both corpora: 1-39 for the Hebrew
/// canon, 40-66 for the New Testament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VerseRef {
    book: u32,
    chapter: u32,
    verse: u32,
}

impl VerseRef {
    pub fn new(book: u32, chapter: u32, verse: u32) -> Result<Self, IdentityError> {
        Ok(Self {
            book: check_width("book", book, BOOK_WIDTH)?,
            chapter: check_width("chapter", chapter, CHAPTER_WIDTH)?,
            verse: check_width("verse", verse, VERSE_WIDTH)?,
        })
    }

    pub fn book(&self) -> u32 {
        self.book
    }

    pub fn chapter(&self) -> u32 {
        self.chapter
    }

    pub fn verse(&self) -> u32 {
        self.verse
    }

    /// Zero-padded textual key, e.g. `"01001001"` for Genesis 1:1.
    pub fn key(&self) -> String {
        format!(
            "{:0bw$}{:0cw$}{:0vw$}",
            self.book,
            self.chapter,
            self.verse,
            bw = BOOK_WIDTH,
            cw = CHAPTER_WIDTH,
            vw = VERSE_WIDTH
        )
    }

    /// Numeric verse identifier.
    pub fn verse_id(&self) -> Result<u32, IdentityError> {
        let key = self.key();
        key.parse::<u32>().map_err(|_| IdentityError::Parse(key))
    }

    /// Numeric word identifier for the `word`-th word (1-based) of this verse.
    pub fn sequence_id(&self, word: u32) -> Result<u64, IdentityError> {
        let word = check_width("word", word, WORD_WIDTH)?;
        let key = format!("{}{:0ww$}", self.key(), word, ww = WORD_WIDTH);
        key.parse::<u64>().map_err(|_| IdentityError::Parse(key))
    }
}

/// Per-verse word counter.
///
/// Returns 1 for the first word seen under a new verse key and counts up
/// from there until the key changes.
#[derive(Debug, Clone)]
pub struct VerseCounter<K> {
    current: Option<K>,
    next_word: u32,
}

impl<K: PartialEq + Clone> VerseCounter<K> {
    pub fn new() -> Self {
        Self {
            current: None,
            next_word: 1,
        }
    }

    /// Register one word under `key` and return its 1-based index within
    /// the verse.
    pub fn advance(&mut self, key: &K) -> u32 {
        if self.current.as_ref() != Some(key) {
            self.current = Some(key.clone());
            self.next_word = 1;
        }
        let word = self.next_word;
        self.next_word += 1;
        word
    }
}

impl<K: PartialEq + Clone> Default for VerseCounter<K> {
    fn default() -> Self {
        Self::new()
    }
}
