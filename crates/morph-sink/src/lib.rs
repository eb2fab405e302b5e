//! Persistence for decoded word records.
//!
//! Records of one book are cut into fixed-size batches and handed to a
//! [`Sink`]. A sink may accept only part of a batch; the remainder is
//! retried with doubling back-off until the backend takes everything or the
//! retry budget runs out.
//!
//! # Architecture
//!
//! - [`partition`] -- fixed-size index ranges over a record slice
//! - [`retry`] -- [`BatchWriter`], [`RetryPolicy`] and the per-book driver
//! - [`jsonl`] -- one JSON-lines file per book
//! - [`print`] -- records on stdout

pub mod jsonl;
pub mod partition;
pub mod print;
pub mod retry;

use std::io;

use morph_core::DecodedWord;

pub use jsonl::JsonLinesSink;
pub use partition::partition;
pub use print::{PrintFormat, PrintSink};
pub use retry::{BatchWriter, RetryPolicy, persist_book, write_with_retry};

/// Error type for persistence.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("gave up after {attempts} attempts with {remaining} records unwritten")]
    RetriesExhausted { attempts: u32, remaining: usize },
}

/// A backend that stores decoded words, one book at a time.
pub trait Sink: BatchWriter<DecodedWord> {
    /// Largest batch the backend accepts in one write.
    fn batch_size(&self) -> usize;

    /// Called before the first batch of `book` is written.
    fn start_book(&mut self, _book: &str) -> Result<(), SinkError> {
        Ok(())
    }

    /// Called once after every book has been written.
    fn finish(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}
