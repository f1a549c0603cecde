use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for loading a vocabulary.
///
/// This struct selects which vocabulary sources are loaded: the built-in
/// ASD-STE100 files, where they live, and any additional user-supplied files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Directory holding the built-in vocabulary files.
    ///
    /// When `None`, the default data location is used.
    pub data_dir: Option<PathBuf>,

    /// Whether to load the built-in base vocabulary.
    pub use_builtin_base: bool,

    /// Whether to load the built-in technical words.
    pub use_builtin_technical: bool,

    /// Additional vocabulary files, loaded after the built-in files in this
    /// order.
    files: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            use_builtin_base: true,
            use_builtin_technical: false,
            files: Vec::new(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// The additional vocabulary files, in load order.
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Adds a vocabulary file to the end of the file list.
    ///
    /// Returns `true` if the file was added, `false` if it was already listed.
    pub fn add_file(&mut self, path: PathBuf) -> bool {
        if self.files.contains(&path) {
            false
        } else {
            self.files.push(path);
            true
        }
    }

    /// Appends a vocabulary file to the end of the file list, even if it is
    /// already listed. A repeated file is loaded once per listing.
    pub fn push_file(&mut self, path: PathBuf) {
        self.files.push(path);
    }

    /// Removes a vocabulary file from the file list.
    ///
    /// Returns `true` if the file was removed, `false` if it wasn't listed.
    pub fn remove_file(&mut self, path: &Path) -> bool {
        if let Some(pos) = self.files.iter().position(|p| p == path) {
            self.files.remove(pos);
            true
        } else {
            false
        }
    }
}

const fn default_use_builtin_base() -> bool {
    true
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data_dir: Option<PathBuf>,

        #[serde(default = "default_use_builtin_base")]
        use_builtin_base: bool,

        #[serde(default)]
        use_builtin_technical: bool,

        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        files: Vec<PathBuf>,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                data_dir,
                use_builtin_base,
                use_builtin_technical,
                files,
            } => Self {
                data_dir,
                use_builtin_base,
                use_builtin_technical,
                files,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            data_dir: config.data_dir,
            use_builtin_base: config.use_builtin_base,
            use_builtin_technical: config.use_builtin_technical,
            files: config.files,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"_version = \"1\"\ndata_dir = \"/opt/ste100\"\nuse_builtin_base = false\nuse_builtin_technical = true\nfiles = [\"extra.jsonl\", \"site.jsonl\"]\n",
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.data_dir, Some(PathBuf::from("/opt/ste100")));
        assert!(!config.use_builtin_base);
        assert!(config.use_builtin_technical);
        assert_eq!(
            config.files(),
            &[PathBuf::from("extra.jsonl"), PathBuf::from("site.jsonl")]
        );
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(error.starts_with("Failed to read config file:"));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nuse_builtin_base = \"yes\"\n")
            .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(error.starts_with("Failed to parse config file:"));
    }

    #[test]
    fn missing_version_is_rejected() {
        assert!(toml::from_str::<Config>("use_builtin_base = true").is_err());
    }

    #[test]
    fn empty_file_returns_default() {
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("ste100.toml");

        let mut config = Config {
            use_builtin_technical: true,
            ..Config::default()
        };
        config.add_file(PathBuf::from("site.jsonl"));
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn files_are_not_duplicated() {
        let mut config = Config::default();

        assert!(config.add_file(PathBuf::from("a.jsonl")));
        assert!(!config.add_file(PathBuf::from("a.jsonl")));
        assert_eq!(config.files().len(), 1);

        assert!(config.remove_file(Path::new("a.jsonl")));
        assert!(!config.remove_file(Path::new("a.jsonl")));
        assert!(config.files().is_empty());
    }

    #[test]
    fn pushed_files_keep_repeats_in_order() {
        let mut config = Config::default();
        config.add_file(PathBuf::from("a.jsonl"));

        config.push_file(PathBuf::from("b.jsonl"));
        config.push_file(PathBuf::from("a.jsonl"));

        assert_eq!(
            config.files(),
            [
                PathBuf::from("a.jsonl"),
                PathBuf::from("b.jsonl"),
                PathBuf::from("a.jsonl")
            ]
        );
    }
}
