//! Shared types for biblical-language morphology records.
//!
//! Everything in this crate is plain data: the decoders in `morph-decode`
//! produce these values and the sinks in `morph-sink` serialize them.
//!
//! - [`language`] -- source language of a decoded word
//! - [`morphology`] -- ordered attribute maps, one per morpheme
//! - [`identity`] -- fixed-width verse and word identifiers
//! - [`word`] -- the decoded word record

pub mod identity;
pub mod language;
pub mod morphology;
pub mod word;

pub use identity::{IdentityError, VerseCounter, VerseRef};
pub use language::Language;
pub use morphology::{Attributes, Morphology};
pub use word::{DecodedWord, Surface};
