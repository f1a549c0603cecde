use serde::{Deserialize, Serialize};

use super::WordNote;

/// One ASD-STE100 defined meaning of a word.
///
/// Like [`Word`](super::Word), a meaning is immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WordMeaning {
    value: String,
    #[serde(default)]
    ste_example: Option<String>,
    #[serde(default)]
    nonste_example: Option<String>,
    #[serde(default)]
    note: Option<WordNote>,
}

impl WordMeaning {
    /// Construct a meaning without examples or note.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ste_example: None,
            nonste_example: None,
            note: None,
        }
    }

    /// The definition text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// An example of compliant usage of this meaning.
    #[must_use]
    pub fn ste_example(&self) -> Option<&str> {
        self.ste_example.as_deref()
    }

    /// An example of non-compliant usage of this meaning.
    #[must_use]
    pub fn nonste_example(&self) -> Option<&str> {
        self.nonste_example.as_deref()
    }

    /// The note attached to this meaning.
    #[must_use]
    pub const fn note(&self) -> Option<&WordNote> {
        self.note.as_ref()
    }

    /// Replace the compliant example.
    #[must_use]
    pub fn with_ste_example(mut self, example: impl Into<String>) -> Self {
        self.ste_example = Some(example.into());
        self
    }

    /// Replace the non-compliant example.
    #[must_use]
    pub fn with_nonste_example(mut self, example: impl Into<String>) -> Self {
        self.nonste_example = Some(example.into());
        self
    }

    /// Replace the note.
    #[must_use]
    pub fn with_note(mut self, note: Option<WordNote>) -> Self {
        self.note = note;
        self
    }
}
