use serde::{Deserialize, Serialize};

use super::Word;

/// A note from the ASD-STE100 dictionary.
///
/// Unlike [`Word`], a note is a plain structure with public fields.
/// `words` holds copies of related words, not references into a vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WordNote {
    /// The note text.
    #[serde(default)]
    pub value: Option<String>,
    /// Words the note refers to.
    #[serde(default)]
    pub words: Vec<Word>,
    /// An example of compliant usage.
    #[serde(default)]
    pub ste_example: Option<String>,
    /// An example of non-compliant usage.
    #[serde(default)]
    pub nonste_example: Option<String>,
}
