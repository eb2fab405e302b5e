// GNT positional decoder.
//
// A GNT morphology code is read by absolute position: position 0 is always
// person, 1 tense, 2 voice, 3 mood, 4 case, 5 number, 6 gender, 7 degree,
// whatever the part of speech. `-` marks an empty slot.

mod tables;

pub use tables::{GntTables, POSITIONS};

use morph_core::Attributes;
use tracing::trace;

use crate::error::DecodeError;

/// Attribute key for the part-of-speech label.
pub const PART_KEY: &str = "part";

/// Number of meaningful positions in a GNT code.
pub const CODE_LEN: usize = POSITIONS.len();

/// Decoder for GNT codes. Cheap to create; borrows shared tables.
#[derive(Debug, Clone, Copy)]
pub struct GntDecoder<'t> {
    tables: &'t GntTables,
}

impl<'t> GntDecoder<'t> {
    pub fn new(tables: &'t GntTables) -> Self {
        Self { tables }
    }

    /// Label for a two-letter part-of-speech prefix.
    ///
    /// An unknown prefix is a configuration error: the prefix set is closed.
    pub fn part(&self, prefix: &str) -> Result<&'static str, DecodeError> {
        self.tables
            .part(prefix)
            .ok_or_else(|| DecodeError::UnknownPart {
                part: prefix.to_string(),
            })
    }

    /// Decode `code` under the part-of-speech `prefix`.
    ///
    /// Letters past position 7 are ignored. A shorter code, an empty slot or
    /// a letter outside a position's table leaves that category absent.
    pub fn decode(&self, prefix: &str, code: &str) -> Result<Attributes, DecodeError> {
        let mut attrs = Attributes::new();
        attrs.set(PART_KEY, self.part(prefix)?);
        for (i, letter) in code.chars().take(CODE_LEN).enumerate() {
            let Some(table) = self.tables.position(i) else {
                break;
            };
            if let Some(label) = table.get(letter) {
                attrs.set(POSITIONS[i], label);
            } else if letter != '-' {
                trace!(position = i, %letter, code, "no label");
            }
        }
        Ok(attrs)
    }
}
