//! Domain models for the ASD-STE100 vocabulary.
//!
//! This module contains the vocabulary record types (words, meanings and
//! notes), the closed code enumerations that classify them, and the
//! configuration used to choose vocabulary sources.

/// Vocabulary entry model.
pub mod word;
pub use word::Word;

mod word_meaning;
pub use word_meaning::WordMeaning;

mod word_note;
pub use word_note::WordNote;

mod word_status;
pub use word_status::WordStatus;

mod word_type;
pub use word_type::WordType;

/// Technical word categories and their descriptions.
pub mod word_category;
pub use word_category::WordCategory;

/// Well-known provenance tags for [`Word::source`].
pub mod word_source;

mod config;
pub use config::Config;

/// A code that is not a member of a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} code '{code}'")]
pub struct InvalidCodeError {
    kind: &'static str,
    code: String,
}

impl InvalidCodeError {
    pub(crate) fn new(kind: &'static str, code: &str) -> Self {
        Self {
            kind,
            code: code.to_string(),
        }
    }

    /// The name of the enumeration the code was parsed for.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// The rejected code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}
