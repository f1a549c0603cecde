use anyhow::Context;
use clap::{Parser, ValueEnum};
use regex::Regex;
use ste100vocab::{
    Config, Vocab, Word, WordCategory, WordStatus, WordType, storage::default_sort_key,
};
use tracing::instrument;

use super::terminal::{self, Colorize};

/// Command arguments for `ste100 list`.
#[derive(Debug, Default, Parser)]
#[command(about = "List vocabulary words with filters")]
pub struct List {
    /// Filter by status (approved, rejected, unknown).
    #[arg(long)]
    status: Option<WordStatus>,

    /// Filter by word type code (for example n, v, adj, TN, TV).
    #[arg(long = "type", value_name = "TYPE")]
    word_type: Option<WordType>,

    /// Filter by category code (for example 0, TN1, TV2).
    #[arg(long)]
    category: Option<WordCategory>,

    /// Show only technical nouns and verbs.
    #[arg(long, conflicts_with = "word_type")]
    technical_only: bool,

    /// Case-insensitive substring match against the name.
    #[arg(long, conflicts_with = "regex")]
    contains: Option<String>,

    /// Regular expression match against the name.
    #[arg(long)]
    regex: Option<String>,

    /// Sort field (default: name).
    #[arg(long, value_enum, default_value_t)]
    sort: SortField,

    /// Reverse the sort order.
    #[arg(long)]
    reverse: bool,

    /// Limit number of rows returned.
    #[arg(long, value_name = "N")]
    limit: Option<usize>,

    /// Output format (default: table).
    #[arg(long, value_enum, default_value_t)]
    output: OutputFormat,
}

/// Output formats supported by `list`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Sortable fields.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum, Default)]
pub enum SortField {
    #[default]
    Name,
    Status,
    Type,
    Category,
}

impl List {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let filter = self.filter()?;
        let mut vocab = Vocab::builder()
            .with_config(config)
            .predicate(move |word| filter.matches(word))
            .load()
            .context("failed to load vocabulary")?;

        match self.sort {
            SortField::Name => vocab.sort_by_key(default_sort_key, self.reverse),
            SortField::Status => vocab.sort_by_key(Word::status, self.reverse),
            SortField::Type => vocab.sort_by_key(Word::word_type, self.reverse),
            SortField::Category => vocab.sort_by_key(Word::category, self.reverse),
        }

        let words: Vec<&Word> = vocab
            .iter()
            .take(self.limit.unwrap_or(usize::MAX))
            .collect();

        match self.output {
            OutputFormat::Table => print_table(&words),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&words)?),
        }
        Ok(())
    }

    fn filter(&self) -> anyhow::Result<Filter> {
        let regex = self
            .regex
            .as_deref()
            .map(Regex::new)
            .transpose()
            .context("invalid --regex pattern")?;

        Ok(Filter {
            status: self.status,
            word_type: self.word_type,
            category: self.category,
            technical_only: self.technical_only,
            contains: self.contains.as_deref().map(str::to_lowercase),
            regex,
        })
    }
}

/// Word filter evaluated while the vocabulary is loaded.
#[derive(Debug, Default)]
struct Filter {
    status: Option<WordStatus>,
    word_type: Option<WordType>,
    category: Option<WordCategory>,
    technical_only: bool,
    contains: Option<String>,
    regex: Option<Regex>,
}

impl Filter {
    fn matches(&self, word: &Word) -> bool {
        self.status.is_none_or(|status| word.status() == status)
            && self.word_type.is_none_or(|ty| word.word_type() == ty)
            && self.category.is_none_or(|category| word.category() == category)
            && (!self.technical_only || word.word_type().is_technical())
            && self
                .contains
                .as_deref()
                .is_none_or(|needle| word.name().to_lowercase().contains(needle))
            && self
                .regex
                .as_ref()
                .is_none_or(|regex| regex.is_match(word.name()))
    }
}

fn print_table(words: &[&Word]) {
    if words.is_empty() {
        println!("{}", "No words matched".dim());
        return;
    }

    let name_width = words
        .iter()
        .map(|word| word.name().chars().count())
        .max()
        .unwrap_or(0)
        .max("NAME".len());
    // type (6) + status (9) + category (9) + separators
    let fixed = name_width + 6 + 9 + 9 + 4;
    let meaning_width = terminal::terminal_width().map(|width| width.saturating_sub(fixed));

    let header = format!(
        "{:<name_width$} {:<6} {:<9} {:<9} MEANING",
        "NAME", "TYPE", "STATUS", "CATEGORY"
    );
    println!("{}", header.dim());

    for word in words {
        let meaning = word.meanings().first().map_or("", |m| m.value());
        let meaning = meaning_width.map_or_else(
            || meaning.to_string(),
            |width| terminal::truncate(meaning, width),
        );
        let status = format!("{:<9}", word.status().as_str()).status(word.status());
        println!(
            "{:<name_width$} {:<6} {status} {:<9} {meaning}",
            word.name(),
            word.word_type().as_str(),
            word.category().as_str(),
        );
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn filter(args: &[&str]) -> Filter {
        let mut argv = vec!["list"];
        argv.extend_from_slice(args);
        List::parse_from(argv).filter().unwrap()
    }

    fn sample() -> Vec<Word> {
        vec![
            Word::new("ABANDON").with_status(WordStatus::Rejected),
            Word::new("ABOUT")
                .with_status(WordStatus::Approved)
                .with_word_type(WordType::Preposition),
            Word::new("ACCESS PANEL")
                .with_status(WordStatus::Approved)
                .with_word_type(WordType::TechnicalNoun)
                .with_category(WordCategory::OfficialParts),
            Word::new("ABRADE")
                .with_status(WordStatus::Approved)
                .with_word_type(WordType::TechnicalVerb)
                .with_category(WordCategory::ManufacturingProcesses),
        ]
    }

    fn matching(filter: &Filter) -> Vec<String> {
        sample()
            .iter()
            .filter(|word| filter.matches(word))
            .map(|word| word.name().to_string())
            .collect()
    }

    #[test_case(&[], &["ABANDON", "ABOUT", "ACCESS PANEL", "ABRADE"]; "no filter")]
    #[test_case(&["--status", "rejected"], &["ABANDON"]; "status")]
    #[test_case(&["--type", "prep"], &["ABOUT"]; "word type")]
    #[test_case(&["--category", "TV1"], &["ABRADE"]; "category")]
    #[test_case(&["--technical-only"], &["ACCESS PANEL", "ABRADE"]; "technical only")]
    #[test_case(&["--contains", "ab"], &["ABANDON", "ABOUT", "ABRADE"]; "contains ignores case")]
    #[test_case(&["--regex", "^A.+E$"], &["ABRADE"]; "regex")]
    #[test_case(&["--status", "approved", "--contains", "panel"], &["ACCESS PANEL"]; "combined")]
    fn filters_words(args: &[&str], expected: &[&str]) {
        assert_eq!(matching(&filter(args)), expected);
    }

    #[test]
    fn unknown_status_is_rejected_by_parser() {
        assert!(List::try_parse_from(["list", "--status", "pending"]).is_err());
    }

    #[test]
    fn invalid_regex_is_reported() {
        let list = List::parse_from(["list", "--regex", "("]);
        assert!(list.filter().is_err());
    }
}
