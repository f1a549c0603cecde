use std::{
    env,
    path::{Path, PathBuf},
};

/// Environment variable that overrides the built-in data directory.
pub const DATA_DIR_ENV: &str = "STE100VOCAB_DATA_DIR";

/// A vocabulary file shipped with the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltInVocab {
    /// The ASD-STE100 Issue 9 dictionary.
    Base,
    /// The ASD-STE100 Issue 9 technical nouns and verbs.
    TechnicalWords,
}

impl BuiltInVocab {
    /// Name of the directory holding the built-in files.
    pub const DATA_DIR: &str = "data";

    /// The file name of this source inside the data directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Base => "asdste100_issue9_base.jsonl",
            Self::TechnicalWords => "asdste100_issue9_technical_words.jsonl",
        }
    }

    /// The path of this source inside `data_dir`.
    #[must_use]
    pub fn path_in(self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name())
    }

    /// The path of this source in the default data directory.
    #[must_use]
    pub fn path(self) -> PathBuf {
        self.path_in(&default_data_dir())
    }
}

/// The directory the built-in vocabulary files are read from.
///
/// This is the value of [`DATA_DIR_ENV`] if it is set, otherwise the `data`
/// directory beside the crate manifest.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    env::var_os(DATA_DIR_ENV).map_or_else(
        || Path::new(env!("CARGO_MANIFEST_DIR")).join(BuiltInVocab::DATA_DIR),
        PathBuf::from,
    )
}
