//! ASD-STE100 Simplified Technical English vocabulary.
//!
//! Vocabulary entries are stored as line-delimited JSON, one word per line.
//! A [`Vocab`] loads the built-in ASD-STE100 dictionary, optionally the
//! built-in technical words, and any additional files, and holds the result
//! as an ordered, mutable collection of [`Word`]s.
//!
//! ```no_run
//! use ste100vocab::{Vocab, WordStatus};
//!
//! let approved = Vocab::builder()
//!     .use_builtin_technical(true)
//!     .predicate(|word| word.status() == WordStatus::Approved)
//!     .load()?;
//!
//! for word in &approved {
//!     println!("{} ({})", word.name(), word.word_type());
//! }
//! # Ok::<(), ste100vocab::LoadError>(())
//! ```

pub mod domain;
pub use domain::{
    Config, InvalidCodeError, Word, WordCategory, WordMeaning, WordNote, WordStatus, WordType,
};

/// Vocabulary file loading and the in-memory collection.
pub mod storage;
pub use storage::{
    BuiltInVocab, FileLoad, LineDiagnostic, LoadError, ParseError, Vocab, VocabBuilder, VocabError,
    load_file, parse_line,
};
