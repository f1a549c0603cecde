use serde::{Deserialize, Serialize};

use super::{WordCategory, WordMeaning, WordNote, WordStatus, WordType, word_source};

/// An approved or rejected word from the ASD-STE100 standard.
///
/// A `Word` is immutable once constructed. The `with_*` methods consume the
/// word and return a new one with the given field replaced.
///
/// Words are read from line-delimited JSON, one record per line. Only `name`
/// is required; absent fields take their defaults and unknown fields are
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Word {
    name: String,
    #[serde(default)]
    status: WordStatus,
    #[serde(default, rename = "type_")]
    word_type: WordType,
    #[serde(default)]
    meanings: Vec<WordMeaning>,
    #[serde(default)]
    spellings: Vec<String>,
    #[serde(default)]
    alternatives: Vec<Word>,
    #[serde(default = "default_source")]
    source: String,
    #[serde(default)]
    category: WordCategory,
    #[serde(default)]
    ste_example: Vec<String>,
    #[serde(default)]
    nonste_example: Vec<String>,
    #[serde(default)]
    note: Option<WordNote>,
}

fn default_source() -> String {
    word_source::UNKNOWN.to_string()
}

impl Word {
    /// Construct a word with the given name and every other field defaulted.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: WordStatus::default(),
            word_type: WordType::default(),
            meanings: Vec::new(),
            spellings: Vec::new(),
            alternatives: Vec::new(),
            source: default_source(),
            category: WordCategory::default(),
            ste_example: Vec::new(),
            nonste_example: Vec::new(),
            note: None,
        }
    }

    /// The lexical form of the word.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The approval status.
    #[must_use]
    pub const fn status(&self) -> WordStatus {
        self.status
    }

    /// The grammatical type.
    #[must_use]
    pub const fn word_type(&self) -> WordType {
        self.word_type
    }

    /// The meanings, in definition order.
    #[must_use]
    pub fn meanings(&self) -> &[WordMeaning] {
        &self.meanings
    }

    /// Alternate written forms (for example, irregular verb forms).
    #[must_use]
    pub fn spellings(&self) -> &[String] {
        &self.spellings
    }

    /// Words to use instead of this one.
    #[must_use]
    pub fn alternatives(&self) -> &[Self] {
        &self.alternatives
    }

    /// The provenance tag.
    ///
    /// See [`word_source`] for the well-known values.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The technical category.
    #[must_use]
    pub const fn category(&self) -> WordCategory {
        self.category
    }

    /// Examples of compliant usage.
    #[must_use]
    pub fn ste_example(&self) -> &[String] {
        &self.ste_example
    }

    /// Examples of non-compliant usage.
    #[must_use]
    pub fn nonste_example(&self) -> &[String] {
        &self.nonste_example
    }

    /// The dictionary note, if any.
    #[must_use]
    pub const fn note(&self) -> Option<&WordNote> {
        self.note.as_ref()
    }

    /// Replace the status.
    #[must_use]
    pub fn with_status(mut self, status: WordStatus) -> Self {
        self.status = status;
        self
    }

    /// Replace the grammatical type.
    #[must_use]
    pub fn with_word_type(mut self, word_type: WordType) -> Self {
        self.word_type = word_type;
        self
    }

    /// Replace the meanings.
    #[must_use]
    pub fn with_meanings(mut self, meanings: Vec<WordMeaning>) -> Self {
        self.meanings = meanings;
        self
    }

    /// Replace the spellings.
    #[must_use]
    pub fn with_spellings(mut self, spellings: Vec<String>) -> Self {
        self.spellings = spellings;
        self
    }

    /// Replace the alternatives.
    #[must_use]
    pub fn with_alternatives(mut self, alternatives: Vec<Self>) -> Self {
        self.alternatives = alternatives;
        self
    }

    /// Replace the provenance tag.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Replace the category.
    #[must_use]
    pub fn with_category(mut self, category: WordCategory) -> Self {
        self.category = category;
        self
    }

    /// Replace the compliant usage examples.
    #[must_use]
    pub fn with_ste_example(mut self, examples: Vec<String>) -> Self {
        self.ste_example = examples;
        self
    }

    /// Replace the non-compliant usage examples.
    #[must_use]
    pub fn with_nonste_example(mut self, examples: Vec<String>) -> Self {
        self.nonste_example = examples;
        self
    }

    /// Replace the note.
    #[must_use]
    pub fn with_note(mut self, note: Option<WordNote>) -> Self {
        self.note = note;
        self
    }
}

impl TryFrom<serde_json::Value> for Word {
    type Error = serde_json::Error;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn absent_fields_take_defaults() {
        let word = Word::try_from(json!({ "name": "ABOUT" })).unwrap();

        assert_eq!(word, Word::new("ABOUT"));
        assert_eq!(word.status(), WordStatus::Unknown);
        assert_eq!(word.word_type(), WordType::Unknown);
        assert_eq!(word.source(), word_source::UNKNOWN);
        assert_eq!(word.category(), WordCategory::Default);
        assert!(word.meanings().is_empty());
        assert!(word.alternatives().is_empty());
        assert!(word.note().is_none());
    }

    #[test]
    fn name_is_required() {
        let error = Word::try_from(json!({ "status": "approved" })).unwrap_err();
        assert!(error.to_string().contains("name"), "{error}");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let error = Word::try_from(json!({ "name": "A", "colour": "red" })).unwrap_err();
        assert!(error.to_string().contains("colour"), "{error}");
    }

    #[test]
    fn unknown_codes_are_rejected() {
        assert!(Word::try_from(json!({ "name": "A", "status": "pending" })).is_err());
        assert!(Word::try_from(json!({ "name": "A", "type_": "noun" })).is_err());
        assert!(Word::try_from(json!({ "name": "A", "category": "TN99" })).is_err());
    }

    #[test]
    fn null_sequences_are_rejected() {
        assert!(Word::try_from(json!({ "name": "A", "spellings": null })).is_err());
    }

    #[test]
    fn null_note_is_none() {
        let word = Word::try_from(json!({ "name": "A", "note": null })).unwrap();
        assert!(word.note().is_none());
    }

    #[test]
    fn nested_records_recurse() {
        let word = Word::try_from(json!({
            "name": "ABANDON",
            "status": "rejected",
            "type_": "v",
            "alternatives": [
                { "name": "STOP", "status": "approved", "type_": "v" }
            ],
            "note": { "words": [ { "name": "LEAVE" } ] }
        }))
        .unwrap();

        assert_eq!(
            word.alternatives(),
            [Word::new("STOP")
                .with_status(WordStatus::Approved)
                .with_word_type(WordType::Verb)]
        );
        assert_eq!(word.note().unwrap().words, [Word::new("LEAVE")]);
    }

    #[test]
    fn with_methods_leave_the_original_untouched() {
        let original = Word::new("ABOVE").with_status(WordStatus::Approved);
        let changed = original.clone().with_status(WordStatus::Rejected);

        assert_eq!(original.status(), WordStatus::Approved);
        assert_eq!(changed.status(), WordStatus::Rejected);
        assert_eq!(original.name(), changed.name());
    }

    #[test]
    fn serializes_type_with_wire_name() {
        let word = Word::new("OIL").with_word_type(WordType::TechnicalNoun);
        let value = serde_json::to_value(&word).unwrap();
        assert_eq!(value["type_"], "TN");
        assert_eq!(value["source"], word_source::UNKNOWN);
    }
}
