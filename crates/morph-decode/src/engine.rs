// MorphEngine: owns the decoding tables and trees of both corpora.
//
// Everything the engine owns is immutable after construction, so one engine
// can be shared by reference across threads. Decoders are small borrowing
// views created per call.

use std::path::Path;

use morph_core::{Attributes, DecodedWord};

use crate::corpus::BookSource;
#[cfg(all(feature = "gnt", feature = "wlc"))]
use crate::corpus::{BookError, DecodedBook};
use crate::error::{CorpusError, DecodeError};
#[cfg(feature = "gnt")]
use crate::gnt::{GntDecoder, GntTables};
#[cfg(feature = "wlc")]
use crate::wlc::{WlcDecoded, WlcDecoder, WlcGrammar};

/// Shared, read-only decoding state for GNT and WLC codes.
#[derive(Debug, Clone)]
pub struct MorphEngine {
    #[cfg(feature = "gnt")]
    gnt: GntTables,
    #[cfg(feature = "wlc")]
    wlc: WlcGrammar,
}

impl MorphEngine {
    /// Build all tables and validate the WLC trees.
    pub fn new() -> Result<Self, DecodeError> {
        Ok(Self {
            #[cfg(feature = "gnt")]
            gnt: GntTables::new(),
            #[cfg(feature = "wlc")]
            wlc: WlcGrammar::new()?,
        })
    }

    // -----------------------------------------------------------------------
    // GNT
    // -----------------------------------------------------------------------

    #[cfg(feature = "gnt")]
    pub fn gnt_decoder(&self) -> GntDecoder<'_> {
        GntDecoder::new(&self.gnt)
    }

    /// Decode one GNT word given its part-of-speech prefix and code.
    #[cfg(feature = "gnt")]
    pub fn decode_gnt(&self, prefix: &str, code: &str) -> Result<Attributes, DecodeError> {
        self.gnt_decoder().decode(prefix, code)
    }

    #[cfg(feature = "gnt")]
    pub fn read_gnt_book(&self, path: &Path) -> Result<Vec<DecodedWord>, CorpusError> {
        crate::corpus::gnt::read_book(self.gnt_decoder(), path)
    }

    // -----------------------------------------------------------------------
    // WLC
    // -----------------------------------------------------------------------

    #[cfg(feature = "wlc")]
    pub fn wlc_decoder(&self) -> WlcDecoder<'_> {
        WlcDecoder::new(&self.wlc)
    }

    /// Decode one WLC word-level code.
    #[cfg(feature = "wlc")]
    pub fn decode_wlc(&self, code: &str) -> Result<WlcDecoded, DecodeError> {
        self.wlc_decoder().decode(code)
    }

    #[cfg(feature = "wlc")]
    pub fn read_wlc_book(&self, source: &BookSource) -> Result<Vec<DecodedWord>, CorpusError> {
        crate::corpus::wlc::read_book(self.wlc_decoder(), source)
    }

    /// Read a book of either corpus, chosen by the book's testament.
    #[cfg(all(feature = "gnt", feature = "wlc"))]
    pub fn read_book(&self, source: &BookSource) -> Result<Vec<DecodedWord>, CorpusError> {
        if source.book.is_new_testament() {
            self.read_gnt_book(&source.path)
        } else {
            self.read_wlc_book(source)
        }
    }

    /// Read a book, keeping the book alongside its words or its error.
    #[cfg(all(feature = "gnt", feature = "wlc"))]
    pub fn decode_book(&self, source: BookSource) -> Result<DecodedBook, BookError> {
        match self.read_book(&source) {
            Ok(words) => Ok(DecodedBook { source, words }),
            Err(error) => Err(BookError {
                book: source.book,
                error,
            }),
        }
    }
}
