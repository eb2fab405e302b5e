// Stdout sink.

use std::io::{self, Write};

use morph_core::DecodedWord;

use crate::retry::BatchWriter;
use crate::{Sink, SinkError};

/// Records per batch.
pub const BATCH_SIZE: usize = 100;

/// How each record is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrintFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// `id<TAB>lemma<TAB>code<TAB>flattened morphology`.
    Flat,
}

/// Writes records to a byte stream, stdout by default.
#[derive(Debug)]
pub struct PrintSink<W = io::Stdout> {
    out: W,
    format: PrintFormat,
}

impl PrintSink {
    pub fn stdout(format: PrintFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W: Write> PrintSink<W> {
    pub fn new(out: W, format: PrintFormat) -> Self {
        Self { out, format }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_word(&mut self, word: &DecodedWord) -> Result<(), SinkError> {
        match self.format {
            PrintFormat::Json => serde_json::to_writer(&mut self.out, word)?,
            PrintFormat::Flat => write!(
                self.out,
                "{}\t{}\t{}\t{}",
                word.sequence_id,
                word.lemma,
                word.raw_code,
                word.flat_morphology()
            )?,
        }
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write> BatchWriter<DecodedWord> for PrintSink<W> {
    fn write_batch(&mut self, batch: &[DecodedWord]) -> Result<Vec<DecodedWord>, SinkError> {
        for word in batch {
            self.write_word(word)?;
        }
        Ok(Vec::new())
    }
}

impl<W: Write> Sink for PrintSink<W> {
    fn batch_size(&self) -> usize {
        BATCH_SIZE
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        self.out.flush()?;
        Ok(())
    }
}
