use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::InvalidCodeError;

/// Grammatical type of a word (ASD-STE100 Issue 9, page 2-0-4f).
///
/// Types order by their wire code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WordType {
    /// No type was recorded.
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
    /// Noun.
    #[serde(rename = "n")]
    Noun,
    /// Verb.
    #[serde(rename = "v")]
    Verb,
    /// Adjective.
    #[serde(rename = "adj")]
    Adjective,
    /// Adverb.
    #[serde(rename = "adv")]
    Adverb,
    /// Pronoun.
    #[serde(rename = "pron")]
    Pronoun,
    /// Article.
    #[serde(rename = "art")]
    Article,
    /// Preposition.
    #[serde(rename = "prep")]
    Preposition,
    /// Conjunction.
    #[serde(rename = "conj")]
    Conjunction,
    /// Prefix.
    #[serde(rename = "prefix")]
    Prefix,
    /// Technical noun.
    #[serde(rename = "TN")]
    TechnicalNoun,
    /// Technical verb.
    #[serde(rename = "TV")]
    TechnicalVerb,
}

impl WordType {
    /// All word types in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Unknown,
        Self::Noun,
        Self::Verb,
        Self::Adjective,
        Self::Adverb,
        Self::Pronoun,
        Self::Article,
        Self::Preposition,
        Self::Conjunction,
        Self::Prefix,
        Self::TechnicalNoun,
        Self::TechnicalVerb,
    ];

    /// The code used in vocabulary files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Noun => "n",
            Self::Verb => "v",
            Self::Adjective => "adj",
            Self::Adverb => "adv",
            Self::Pronoun => "pron",
            Self::Article => "art",
            Self::Preposition => "prep",
            Self::Conjunction => "conj",
            Self::Prefix => "prefix",
            Self::TechnicalNoun => "TN",
            Self::TechnicalVerb => "TV",
        }
    }

    /// Whether this is a technical noun or technical verb.
    #[must_use]
    pub const fn is_technical(self) -> bool {
        matches!(self, Self::TechnicalNoun | Self::TechnicalVerb)
    }
}

impl fmt::Display for WordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WordType {
    type Err = InvalidCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|word_type| word_type.as_str() == s)
            .ok_or_else(|| InvalidCodeError::new("word type", s))
    }
}

impl PartialOrd for WordType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WordType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}
