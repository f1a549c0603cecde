/// The built-in ASD-STE100 vocabulary sources.
pub mod builtin;
/// Line-delimited JSON reading for vocabulary files.
pub mod jsonl;
/// The in-memory vocabulary collection.
pub mod vocab;

pub use builtin::BuiltInVocab;
pub use jsonl::{FileLoad, LineDiagnostic, LoadError, ParseError, load_file, parse_line};
pub use vocab::{Vocab, VocabBuilder, VocabError, default_sort_key};
