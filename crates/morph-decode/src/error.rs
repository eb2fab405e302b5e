// Error types for decoding and corpus reading.

use std::io;
use std::path::PathBuf;

use morph_core::IdentityError;
use morph_tree::TreeError;

/// How far an error reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The closed code domain was violated: abort the whole run.
    Configuration,
    /// The current input source is corrupt: abort that source only.
    Structural,
}

/// Error raised while decoding a single morphology code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("empty morphology code")]
    EmptyCode,
    #[error("empty sub-entry in morphology code {code:?}")]
    EmptySubEntry { code: String },
    #[error("unknown part of speech {part:?}")]
    UnknownPart { part: String },
    #[error("no decision tree for part {part:?} in language {language}")]
    NoTree { part: char, language: String },
    #[error("invalid grammar: {0}")]
    Grammar(#[from] TreeError),
}

impl DecodeError {
    pub fn class(&self) -> ErrorClass {
        match self {
            DecodeError::EmptyCode | DecodeError::EmptySubEntry { .. } => ErrorClass::Structural,
            DecodeError::UnknownPart { .. }
            | DecodeError::NoTree { .. }
            | DecodeError::Grammar(_) => ErrorClass::Configuration,
        }
    }
}

/// Error raised while reading a corpus file or directory.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("failed to read {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },
    #[error(transparent)]
    Identity(#[from] IdentityError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl CorpusError {
    pub fn class(&self) -> ErrorClass {
        match self {
            CorpusError::Decode(e) => e.class(),
            _ => ErrorClass::Structural,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CorpusError::Io {
            path: path.into(),
            source,
        }
    }
}
