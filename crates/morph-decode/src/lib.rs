//! Morphology code decoders for the Greek New Testament (GNT) and the
//! Westminster Leningrad Codex (WLC), with readers for both corpora.
//!
//! GNT codes are fixed-width: each position maps to one category. WLC codes
//! are a language letter followed by `/`-separated sub-entries, each decoded
//! by walking a decision tree (see `morph-tree`).
//!
//! # Architecture
//!
//! - [`books`] -- canonical book numbering for both corpora
//! - [`gnt`] -- positional GNT decoder and its tables
//! - [`wlc`] -- WLC tables, decision trees and decoder
//! - [`corpus`] -- book file readers yielding ordered word records
//! - [`engine`] -- [`MorphEngine`], owning the immutable tables of both decoders
//! - [`error`] -- error types and their severity classes

pub mod books;
pub mod corpus;
pub mod engine;
pub mod error;
#[cfg(feature = "gnt")]
pub mod gnt;
#[cfg(feature = "wlc")]
pub mod wlc;

pub use books::Book;
pub use corpus::{BookError, BookSource, DecodedBook};
pub use engine::MorphEngine;
pub use error::{CorpusError, DecodeError, ErrorClass};
