//! Vocabulary files hold one JSON word record per line.
//!
//! [`parse_line`] turns a single line into a [`Word`] and reports any failure
//! to the caller. [`load_file`] wraps it for a whole file: a line that cannot
//! be parsed is skipped and recorded as a [`LineDiagnostic`], so one bad
//! record never aborts the load.

use std::{
    fmt,
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};

use crate::Word;

/// Parse a single vocabulary line into a [`Word`].
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns an error if the line is blank, is not valid JSON, or does not
/// describe a word (missing `name`, unknown field, unknown status, type or
/// category code, and so on).
pub fn parse_line(text: &str) -> Result<Word, ParseError> {
    parse_bytes(text.as_bytes())
}

fn parse_bytes(line: &[u8]) -> Result<Word, ParseError> {
    let line = line.trim_ascii();
    if line.is_empty() {
        return Err(ParseError::Blank);
    }
    Ok(serde_json::from_slice(line)?)
}

/// Read every word from a vocabulary file.
///
/// Each non-blank line is parsed and offered to `predicate`; accepted words
/// are returned in line order. Lines that fail to parse are skipped and
/// reported in [`FileLoad::diagnostics`] (and logged as warnings). Blank lines
/// are skipped silently.
///
/// Lines are parsed in parallel, but the result always preserves line order.
///
/// # Errors
///
/// Returns [`LoadError::SourceNotFound`] if the file does not exist, or
/// [`LoadError::Io`] if it cannot be read.
pub fn load_file<P>(path: &Path, predicate: P) -> Result<FileLoad, LoadError>
where
    P: Fn(&Word) -> bool,
{
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::SourceNotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let lines = BufReader::new(file)
        .split(b'\n')
        .collect::<Result<Vec<_>, _>>()
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let parsed: Vec<_> = lines
        .par_iter()
        .enumerate()
        .filter(|(_, line)| !line.trim_ascii().is_empty())
        .map(|(idx, line)| (idx + 1, parse_bytes(line)))
        .collect();

    let mut load = FileLoad::default();
    for (line, result) in parsed {
        match result {
            Ok(word) => {
                if predicate(&word) {
                    load.words.push(word);
                }
            }
            Err(error) => {
                let diagnostic = LineDiagnostic {
                    path: path.to_path_buf(),
                    line,
                    error,
                };
                tracing::debug!("Skipping {diagnostic}");
                load.diagnostics.push(diagnostic);
            }
        }
    }

    if !load.diagnostics.is_empty() {
        tracing::warn!(
            "Skipped {} malformed lines in {}",
            load.diagnostics.len(),
            path.display()
        );
    }
    tracing::debug!(
        "Read {} words from {} ({} lines rejected)",
        load.words.len(),
        path.display(),
        load.diagnostics.len()
    );

    Ok(load)
}

/// The outcome of reading one vocabulary file.
#[derive(Debug, Default)]
pub struct FileLoad {
    /// Words accepted by the predicate, in line order.
    pub words: Vec<Word>,
    /// Lines that could not be parsed, in line order.
    pub diagnostics: Vec<LineDiagnostic>,
}

/// A line that was skipped because it could not be parsed.
#[derive(Debug)]
pub struct LineDiagnostic {
    /// The file containing the line.
    pub path: PathBuf,
    /// The 1-based line number.
    pub line: usize,
    /// Why the line was rejected.
    pub error: ParseError,
}

impl fmt::Display for LineDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[#{}]: {}", self.path.display(), self.line, self.error)
    }
}

/// Errors that can occur when parsing a vocabulary line.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The line contains only whitespace.
    #[error("line is blank")]
    Blank,
    /// The line is not a valid word record.
    #[error("invalid word record: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that abort loading a vocabulary source.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source file does not exist.
    #[error("vocabulary source not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    /// The source file exists but could not be read.
    #[error("failed to read vocabulary source {}", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}
