// Corpus readers: turn source files into decoded word records.
//
// Readers yield `Result<DecodedWord, CorpusError>` items in source order, so
// a consumer sees records and failures through one ordered stream.

#[cfg(feature = "gnt")]
pub mod gnt;
#[cfg(feature = "wlc")]
pub mod wlc;

use std::fs;
use std::path::{Path, PathBuf};

use morph_core::DecodedWord;
use tracing::{debug, warn};

use crate::books::Book;
use crate::error::{CorpusError, ErrorClass};

/// One book file found while scanning a corpus directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSource {
    pub book: Book,
    pub path: PathBuf,
}

/// Every word of one book, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBook {
    pub source: BookSource,
    pub words: Vec<DecodedWord>,
}

/// A book that could not be decoded.
#[derive(Debug, thiserror::Error)]
#[error("{}: {error}", .book.name)]
pub struct BookError {
    pub book: Book,
    #[source]
    pub error: CorpusError,
}

impl BookError {
    pub fn class(&self) -> ErrorClass {
        self.error.class()
    }
}

/// List the files in `dir` with extension `extension`, resolve each file
/// stem to a book, and return them in canonical book order.
///
/// Files with any other extension are skipped, and so is a matching file
/// whose stem names no known book.
pub(crate) fn scan_dir(
    dir: &Path,
    extension: &str,
    resolve: fn(&str) -> Option<Book>,
) -> Result<Vec<BookSource>, CorpusError> {
    let entries = fs::read_dir(dir).map_err(|e| CorpusError::io(dir, e))?;
    let mut sources = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| CorpusError::io(dir, e))?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(extension) {
            debug!(path = %path.display(), "skipping");
            continue;
        }
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        let Some(book) = resolve(&stem) else {
            warn!(path = %path.display(), "not a book file, skipping");
            continue;
        };
        sources.push(BookSource { book, path });
    }
    sources.sort_by_key(|s| s.book.number);
    Ok(sources)
}
