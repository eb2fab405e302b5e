// Source language of a decoded word.

use std::fmt;

use serde::Serialize;

/// Language a word was written in.
///
/// WLC codes open with a single language letter (`H` or `A`); GNT words are
/// always Greek.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Language {
    Hebrew,
    Aramaic,
    Greek,
}

impl Language {
    /// Resolve the leading language letter of a WLC code.
    pub fn from_wlc_code(code: char) -> Option<Self> {
        match code {
            'H' => Some(Language::Hebrew),
            'A' => Some(Language::Aramaic),
            _ => None,
        }
    }

    /// The WLC language letter, if this language appears in the WLC corpus.
    pub fn wlc_code(self) -> Option<char> {
        match self {
            Language::Hebrew => Some('H'),
            Language::Aramaic => Some('A'),
            Language::Greek => None,
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Language::Hebrew => "Hebrew",
            Language::Aramaic => "Aramaic",
            Language::Greek => "Greek",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
