//! The source of a word is a free-form tag, typically naming the edition of
//! the standard the entry was taken from. These are the tags the built-in
//! vocabulary uses.

/// No provenance was recorded. This is the default source of a [`Word`].
///
/// [`Word`]: super::Word
pub const UNKNOWN: &str = "unknown";

/// ASD-STE100 Issue 9.
pub const STE100_ISSUE_9: &str = "STE100:9";
