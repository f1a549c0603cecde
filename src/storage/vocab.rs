//! A vocabulary is an ordered, mutable, in-memory collection of [`Word`]s.
//!
//! The [`Vocab`] is built by a [`VocabBuilder`], which resolves the list of
//! vocabulary sources (the built-in base file, the built-in technical words,
//! then any caller-supplied files, in that order), reads every source, and
//! sorts the result once by [`default_sort_key`].

use std::{
    cmp::Reverse,
    fmt,
    path::{Path, PathBuf},
    slice, vec,
};

use crate::{
    Config, Word,
    storage::{
        BuiltInVocab,
        builtin::default_data_dir,
        jsonl::{self, LineDiagnostic, LoadError},
    },
};

type Predicate = dyn Fn(&Word) -> bool + Send + Sync;

/// The default ordering of a vocabulary: case-insensitive by name.
#[must_use]
pub fn default_sort_key(word: &Word) -> String {
    word.name().to_lowercase()
}

fn accept_all(_: &Word) -> bool {
    true
}

/// An ordered collection of vocabulary words.
pub struct Vocab {
    files: Vec<PathBuf>,
    items: Vec<Word>,
    predicate: Box<Predicate>,
    diagnostics: Vec<LineDiagnostic>,
}

impl Vocab {
    /// Load the built-in base vocabulary.
    ///
    /// This is shorthand for `Vocab::builder().load()`.
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in base file cannot be found or read.
    pub fn new() -> Result<Self, LoadError> {
        Self::builder().load()
    }

    /// Start configuring which sources a vocabulary is loaded from.
    #[must_use]
    pub fn builder() -> VocabBuilder {
        VocabBuilder::default()
    }

    /// The number of words in the vocabulary.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the vocabulary holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the words in their current order.
    pub fn iter(&self) -> slice::Iter<'_, Word> {
        self.items.iter()
    }

    /// The words in their current order.
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.items
    }

    /// The word at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::IndexOutOfRange`] if `index` is not less than
    /// [`len`](Self::len).
    pub fn get(&self, index: usize) -> Result<&Word, VocabError> {
        self.items.get(index).ok_or(VocabError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// The first word, if any.
    #[must_use]
    pub fn first(&self) -> Option<&Word> {
        self.items.first()
    }

    /// The last word, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Word> {
        self.items.last()
    }

    /// Add a word to the end of the vocabulary.
    pub fn append(&mut self, word: Word) {
        self.items.push(word);
    }

    /// Remove the first word equal to `word`.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::NotFound`] if no equal word is present. The
    /// vocabulary is left unchanged.
    pub fn remove(&mut self, word: &Word) -> Result<(), VocabError> {
        let pos = self
            .items
            .iter()
            .position(|w| w == word)
            .ok_or_else(|| VocabError::NotFound(word.name().to_string()))?;
        self.items.remove(pos);
        Ok(())
    }

    /// Remove and return the last word.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::IndexOutOfRange`] if the vocabulary is empty.
    pub fn pop(&mut self) -> Result<Word, VocabError> {
        self.items
            .pop()
            .ok_or(VocabError::IndexOutOfRange { index: 0, len: 0 })
    }

    /// Remove and return the word at `index`, shifting later words down.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::IndexOutOfRange`] if `index` is out of bounds.
    /// The vocabulary is left unchanged.
    pub fn pop_at(&mut self, index: usize) -> Result<Word, VocabError> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    /// Remove the word at `index`, shifting later words down.
    ///
    /// # Errors
    ///
    /// Returns [`VocabError::IndexOutOfRange`] if `index` is out of bounds.
    /// The vocabulary is left unchanged.
    pub fn delete_at(&mut self, index: usize) -> Result<(), VocabError> {
        self.pop_at(index).map(drop)
    }

    fn check_index(&self, index: usize) -> Result<(), VocabError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(VocabError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }

    /// Sort the words by [`default_sort_key`], ascending.
    pub fn sort(&mut self) {
        self.sort_by_key(default_sort_key, false);
    }

    /// Sort the words by the key `key` extracts.
    ///
    /// The sort is stable in both directions: words with equal keys keep
    /// their relative order, even when `reverse` is `true`. The key is
    /// computed once per word.
    pub fn sort_by_key<K, F>(&mut self, mut key: F, reverse: bool)
    where
        K: Ord,
        F: FnMut(&Word) -> K,
    {
        if reverse {
            self.items.sort_by_cached_key(|word| Reverse(key(word)));
        } else {
            self.items.sort_by_cached_key(key);
        }
    }

    /// The sources the vocabulary was loaded from, in load order.
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Lines that were skipped while loading because they could not be
    /// parsed.
    #[must_use]
    pub fn diagnostics(&self) -> &[LineDiagnostic] {
        &self.diagnostics
    }

    /// Whether the inclusion predicate the vocabulary was loaded with accepts
    /// `word`.
    #[must_use]
    pub fn accepts(&self, word: &Word) -> bool {
        (self.predicate)(word)
    }
}

impl Default for Vocab {
    /// An empty vocabulary with no sources.
    fn default() -> Self {
        Self {
            files: Vec::new(),
            items: Vec::new(),
            predicate: Box::new(accept_all),
            diagnostics: Vec::new(),
        }
    }
}

impl fmt::Debug for Vocab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vocab")
            .field("files", &self.files)
            .field("items", &self.items)
            .field("diagnostics", &self.diagnostics)
            .finish_non_exhaustive()
    }
}

impl Extend<Word> for Vocab {
    fn extend<I: IntoIterator<Item = Word>>(&mut self, words: I) {
        self.items.extend(words);
    }
}

impl FromIterator<Word> for Vocab {
    fn from_iter<I: IntoIterator<Item = Word>>(words: I) -> Self {
        Self {
            items: words.into_iter().collect(),
            ..Self::default()
        }
    }
}

impl IntoIterator for Vocab {
    type Item = Word;
    type IntoIter = vec::IntoIter<Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Vocab {
    type Item = &'a Word;
    type IntoIter = slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Construction parameters for a [`Vocab`].
///
/// By default only the built-in base vocabulary is loaded and every word is
/// accepted.
pub struct VocabBuilder {
    files: Vec<PathBuf>,
    use_builtin_base: bool,
    use_builtin_technical: bool,
    data_dir: Option<PathBuf>,
    predicate: Box<Predicate>,
}

impl Default for VocabBuilder {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            use_builtin_base: true,
            use_builtin_technical: false,
            data_dir: None,
            predicate: Box::new(accept_all),
        }
    }
}

impl fmt::Debug for VocabBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VocabBuilder")
            .field("files", &self.files)
            .field("use_builtin_base", &self.use_builtin_base)
            .field("use_builtin_technical", &self.use_builtin_technical)
            .field("data_dir", &self.data_dir)
            .finish_non_exhaustive()
    }
}

impl VocabBuilder {
    /// Add a vocabulary file, loaded after the built-in files and any files
    /// added before it.
    #[must_use]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    /// Add several vocabulary files, in order.
    #[must_use]
    pub fn files<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Whether to load the built-in base vocabulary (default `true`).
    #[must_use]
    pub fn use_builtin_base(mut self, value: bool) -> Self {
        self.use_builtin_base = value;
        self
    }

    /// Whether to load the built-in technical words (default `false`).
    #[must_use]
    pub fn use_builtin_technical(mut self, value: bool) -> Self {
        self.use_builtin_technical = value;
        self
    }

    /// Read the built-in files from `dir` instead of the default data
    /// directory.
    #[must_use]
    pub fn data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Only keep words for which `predicate` returns `true`.
    #[must_use]
    pub fn predicate<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Word) -> bool + Send + Sync + 'static,
    {
        self.predicate = Box::new(predicate);
        self
    }

    /// Apply the source selection from a configuration file.
    ///
    /// The configuration's files are added after any files already added.
    #[must_use]
    pub fn with_config(mut self, config: &Config) -> Self {
        if let Some(dir) = &config.data_dir {
            self.data_dir = Some(dir.clone());
        }
        self.use_builtin_base = config.use_builtin_base;
        self.use_builtin_technical = config.use_builtin_technical;
        self.files.extend(config.files().iter().cloned());
        self
    }

    /// The sources that will be loaded, in load order.
    #[must_use]
    pub fn sources(&self) -> Vec<PathBuf> {
        let data_dir = self.data_dir.clone().unwrap_or_else(default_data_dir);
        let builtins = [
            (self.use_builtin_base, BuiltInVocab::Base),
            (self.use_builtin_technical, BuiltInVocab::TechnicalWords),
        ];

        builtins
            .into_iter()
            .filter_map(|(enabled, builtin)| enabled.then(|| builtin.path_in(&data_dir)))
            .chain(self.files.iter().cloned())
            .collect()
    }

    /// Read every source and build the vocabulary.
    ///
    /// Sources are read in order. Lines that cannot be parsed are skipped and
    /// recorded in [`Vocab::diagnostics`]; lines the predicate rejects are
    /// skipped silently. The resulting words are sorted by
    /// [`default_sort_key`].
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::SourceNotFound`] naming the first source that does
    /// not exist, or [`LoadError::Io`] if a source cannot be read. No
    /// vocabulary is produced in either case.
    pub fn load(self) -> Result<Vocab, LoadError> {
        let files = self.sources();
        let mut items = Vec::new();
        let mut diagnostics = Vec::new();

        for path in &files {
            let load = read_source(path, self.predicate.as_ref())?;
            items.extend(load.words);
            diagnostics.extend(load.diagnostics);
        }

        tracing::info!(
            "Loaded {} words from {} sources ({} lines rejected)",
            items.len(),
            files.len(),
            diagnostics.len()
        );

        let mut vocab = Vocab {
            files,
            items,
            predicate: self.predicate,
            diagnostics,
        };
        vocab.sort();

        Ok(vocab)
    }
}

fn read_source(path: &Path, predicate: &Predicate) -> Result<jsonl::FileLoad, LoadError> {
    if !path.exists() {
        return Err(LoadError::SourceNotFound(path.to_path_buf()));
    }
    tracing::debug!("Reading vocabulary source {}", path.display());
    jsonl::load_file(path, predicate)
}

/// Errors from accessing or mutating a [`Vocab`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VocabError {
    /// The index is not within the vocabulary.
    #[error("index {index} out of range for vocabulary of length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The length of the vocabulary at the time of the call.
        len: usize,
    },
    /// No word equal to the given word is present.
    #[error("word '{0}' not found in vocabulary")]
    NotFound(String),
}
