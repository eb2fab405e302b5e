// Batch writing with retry of partially accepted batches.
//
// Backends with bulk-write APIs may accept only part of a batch and report
// the rest as unprocessed. The unprocessed records are resubmitted after a
// back-off that doubles on every retry.

use std::thread;
use std::time::Duration;

use morph_core::DecodedWord;
use tracing::{debug, info, warn};

use crate::partition::partition;
use crate::{Sink, SinkError};

/// A backend write of one batch.
pub trait BatchWriter<T> {
    /// Write `batch`, returning the records the backend did not accept.
    fn write_batch(&mut self, batch: &[T]) -> Result<Vec<T>, SinkError>;
}

/// Back-off schedule for unprocessed records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Wait before the first retry; doubled for each retry after it.
    pub initial_backoff: Duration,
    /// Total writes allowed per batch, the first one included.
    pub max_attempts: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            initial_backoff: Duration::from_secs(1),
            max_attempts: 10,
        }
    }
}

impl RetryPolicy {
    /// No waiting between attempts.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            initial_backoff: Duration::ZERO,
            max_attempts,
        }
    }

    /// Wait before retry number `retry` (0-based).
    pub fn backoff(&self, retry: u32) -> Duration {
        let factor = 1u32.checked_shl(retry).unwrap_or(u32::MAX);
        self.initial_backoff.saturating_mul(factor)
    }
}

/// Write `batch` through `writer`, resubmitting unprocessed records until
/// none are left.
pub fn write_with_retry<T, W>(
    writer: &mut W,
    batch: &[T],
    policy: &RetryPolicy,
) -> Result<(), SinkError>
where
    W: BatchWriter<T> + ?Sized,
{
    let mut pending = writer.write_batch(batch)?;
    let mut attempts = 1;
    while !pending.is_empty() {
        if attempts >= policy.max_attempts {
            return Err(SinkError::RetriesExhausted {
                attempts,
                remaining: pending.len(),
            });
        }
        let wait = policy.backoff(attempts - 1);
        warn!(
            retry = attempts,
            remaining = pending.len(),
            backoff_ms = wait.as_millis() as u64,
            "backing off"
        );
        thread::sleep(wait);
        pending = writer.write_batch(&pending)?;
        attempts += 1;
    }
    Ok(())
}

/// Write all words of one book to `sink` in batches of the sink's size.
pub fn persist_book<S>(
    sink: &mut S,
    book: &str,
    words: &[DecodedWord],
    policy: &RetryPolicy,
) -> Result<(), SinkError>
where
    S: Sink + ?Sized,
{
    let size = sink.batch_size();
    debug!(size, "partition size");
    info!(book, words = words.len(), "saving");
    sink.start_book(book)?;
    for range in partition(words.len(), size) {
        let end = range.end;
        write_with_retry(sink, &words[range], policy)?;
        info!(book, percent = end * 100 / words.len(), "complete");
    }
    Ok(())
}
