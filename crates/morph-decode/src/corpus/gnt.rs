// GNT corpus reader.
//
// Each line of a GNT book file describes one word:
//
//   010101 N- ----NSF- Βίβλος Βίβλος βίβλος βίβλος
//
// verse key (book, chapter and verse, two digits each, book counted within
// the New Testament), part-of-speech prefix, morphology code, text, word,
// normalized form, lemma.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use morph_core::{DecodedWord, Language, Surface, VerseCounter, VerseRef};
use tracing::debug;

use super::{BookSource, scan_dir};
use crate::books::{Book, gnt_book_for_stem};
use crate::error::CorpusError;
use crate::gnt::GntDecoder;

/// Extension of GNT book files.
pub const EXTENSION: &str = "txt";

/// Minimum number of whitespace-separated fields on a line.
pub const FIELD_COUNT: usize = 7;

const VERSE_KEY_LEN: usize = 6;

/// The fields of one GNT line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GntLine<'a> {
    pub verse_key: &'a str,
    pub part: &'a str,
    pub code: &'a str,
    pub text: &'a str,
    pub word: &'a str,
    pub normalized: &'a str,
    pub lemma: &'a str,
}

impl<'a> GntLine<'a> {
    /// Split a line into its fields. Fields past the seventh are ignored.
    pub fn parse(line: &'a str, line_no: usize) -> Result<Self, CorpusError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < FIELD_COUNT {
            return Err(CorpusError::MalformedLine {
                line: line_no,
                reason: format!(
                    "expected at least {FIELD_COUNT} fields, found {}",
                    fields.len()
                ),
            });
        }
        Ok(Self {
            verse_key: fields[0],
            part: fields[1],
            code: fields[2],
            text: fields[3],
            word: fields[4],
            normalized: fields[5],
            lemma: fields[6],
        })
    }

    /// Canonical verse position of this line.
    pub fn verse_ref(&self, line_no: usize) -> Result<VerseRef, CorpusError> {
        verse_ref_from_key(self.verse_key, line_no)
    }
}

/// Parse a 6-digit GNT verse key into a canonical verse position.
pub fn verse_ref_from_key(key: &str, line_no: usize) -> Result<VerseRef, CorpusError> {
    let malformed = |reason: String| CorpusError::MalformedLine {
        line: line_no,
        reason,
    };
    if key.len() != VERSE_KEY_LEN || !key.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed(format!(
            "verse key {key:?} is not {VERSE_KEY_LEN} digits"
        )));
    }
    let field = |from: usize| {
        key[from..from + 2]
            .parse::<u32>()
            .map_err(|e| malformed(format!("verse key {key:?}: {e}")))
    };
    let order = field(0)?;
    let book = Book::new_testament(order)
        .ok_or_else(|| malformed(format!("verse key {key:?} names no New Testament book")))?;
    Ok(VerseRef::new(book.number, field(2)?, field(4)?)?)
}

/// Iterator decoding GNT lines into word records.
pub struct GntWords<'t, I> {
    decoder: GntDecoder<'t>,
    lines: I,
    line_no: usize,
    counter: VerseCounter<VerseRef>,
}

impl<'t, I> GntWords<'t, I>
where
    I: Iterator<Item = Result<String, CorpusError>>,
{
    pub fn new(decoder: GntDecoder<'t>, lines: I) -> Self {
        Self {
            decoder,
            lines,
            line_no: 0,
            counter: VerseCounter::new(),
        }
    }

    fn decode_line(&mut self, line: &str) -> Result<DecodedWord, CorpusError> {
        let fields = GntLine::parse(line, self.line_no)?;
        let verse = fields.verse_ref(self.line_no)?;
        let word = self.counter.advance(&verse);
        let attrs = self.decoder.decode(fields.part, fields.code)?;
        Ok(DecodedWord {
            sequence_id: verse.sequence_id(word)?,
            verse_id: verse.verse_id()?,
            lemma: fields.lemma.to_string(),
            raw_code: fields.code.to_string(),
            language: Some(Language::Greek),
            morphology: vec![attrs].into(),
            morphology_string: None,
            core_id: None,
            surface: Some(Surface {
                text: fields.text.to_string(),
                word: fields.word.to_string(),
                normalized: fields.normalized.to_string(),
            }),
        })
    }
}

impl<I> Iterator for GntWords<'_, I>
where
    I: Iterator<Item = Result<String, CorpusError>>,
{
    type Item = Result<DecodedWord, CorpusError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };
            self.line_no += 1;
            if line.trim().is_empty() {
                continue;
            }
            return Some(self.decode_line(&line));
        }
    }
}

/// Decode GNT lines held in memory.
pub fn words_from_str<'t, 's>(
    decoder: GntDecoder<'t>,
    text: &'s str,
) -> GntWords<'t, impl Iterator<Item = Result<String, CorpusError>> + 's> {
    GntWords::new(decoder, text.lines().map(|l| Ok(l.to_string())))
}

/// Read and decode a whole GNT book file.
pub fn read_book(decoder: GntDecoder<'_>, path: &Path) -> Result<Vec<DecodedWord>, CorpusError> {
    debug!(path = %path.display(), "parsing");
    let file = File::open(path).map_err(|e| CorpusError::io(path, e))?;
    let lines = BufReader::new(file)
        .lines()
        .map(|l| l.map_err(|e| CorpusError::io(path, e)));
    GntWords::new(decoder, lines).collect()
}

/// Find the GNT book files in `dir`, in canonical order.
pub fn scan(dir: &Path) -> Result<Vec<BookSource>, CorpusError> {
    scan_dir(dir, EXTENSION, gnt_book_for_stem)
}
