// JSON-lines sink: one file per book under `<output>/<table>/`.
//
// Files are opened in append mode for every batch, so a book written in
// several batches ends up in one file.

use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use morph_core::DecodedWord;
use tracing::debug;

use crate::retry::BatchWriter;
use crate::{Sink, SinkError};

/// Records per batch.
pub const BATCH_SIZE: usize = 100;

/// File extension of the written files.
pub const EXTENSION: &str = "jsonl";

#[derive(Debug)]
pub struct JsonLinesSink {
    dir: PathBuf,
    current: Option<PathBuf>,
}

impl JsonLinesSink {
    /// Sink writing to `<output>/<table>/<book>.jsonl`.
    pub fn new(output: &Path, table: &str) -> Self {
        Self {
            dir: output.join(table),
            current: None,
        }
    }

    /// Directory holding the book files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file for `book`.
    pub fn book_path(&self, book: &str) -> PathBuf {
        self.dir.join(format!("{book}.{EXTENSION}"))
    }
}

impl BatchWriter<DecodedWord> for JsonLinesSink {
    fn write_batch(&mut self, batch: &[DecodedWord]) -> Result<Vec<DecodedWord>, SinkError> {
        let path = self.current.as_ref().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "batch written before start_book")
        })?;
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut out = BufWriter::new(file);
        for word in batch {
            serde_json::to_writer(&mut out, word)?;
            out.write_all(b"\n")?;
        }
        out.flush()?;
        out.get_ref().sync_data()?;
        Ok(Vec::new())
    }
}

impl Sink for JsonLinesSink {
    fn batch_size(&self) -> usize {
        BATCH_SIZE
    }

    fn start_book(&mut self, book: &str) -> Result<(), SinkError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.book_path(book);
        debug!(path = %path.display(), "writing");
        self.current = Some(path);
        Ok(())
    }
}
