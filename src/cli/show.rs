use std::fmt;

use anyhow::Context;
use clap::Parser;
use ste100vocab::{Config, Vocab, Word, WordNote};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Display every vocabulary entry for a word")]
pub struct Show {
    /// The word to display (case-insensitive)
    name: String,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_enum, default_value_t)]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl Show {
    #[instrument(level = "debug", skip(self, config), fields(name = %self.name))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let needle = self.name.to_lowercase();
        let vocab = Vocab::builder()
            .with_config(config)
            .predicate(move |word| word.name().to_lowercase() == needle)
            .load()
            .context("failed to load vocabulary")?;

        if vocab.is_empty() {
            anyhow::bail!("word '{}' not found", self.name);
        }

        match self.output {
            OutputFormat::Pretty => {
                for (index, word) in vocab.iter().enumerate() {
                    if index > 0 {
                        println!();
                    }
                    print!("{}", Entry(word));
                }
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(vocab.as_slice())?),
        }
        Ok(())
    }
}

/// One entry rendered as indented, human-readable text.
struct Entry<'a>(&'a Word);

impl fmt::Display for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = self.0;

        writeln!(f, "{}", word.name())?;
        writeln!(
            f,
            "  {} {}",
            "Status:  ".dim(),
            word.status().as_str().status(word.status())
        )?;
        writeln!(f, "  {} {}", "Type:    ".dim(), word.word_type())?;
        writeln!(
            f,
            "  {} {} ({})",
            "Category:".dim(),
            word.category(),
            word.category().description()
        )?;
        writeln!(f, "  {} {}", "Source:  ".dim(), word.source())?;

        if !word.spellings().is_empty() {
            writeln!(f, "  {} {}", "Spelling:".dim(), word.spellings().join(", "))?;
        }

        if !word.meanings().is_empty() {
            writeln!(f, "  {}", "Meanings:".dim())?;
            for (index, meaning) in word.meanings().iter().enumerate() {
                writeln!(f, "    {}. {}", index + 1, meaning.value())?;
                if let Some(example) = meaning.ste_example() {
                    writeln!(f, "       {} {example}", "STE:".success())?;
                }
                if let Some(example) = meaning.nonste_example() {
                    writeln!(f, "       {} {example}", "Non-STE:".warning())?;
                }
                if let Some(note) = meaning.note() {
                    write_note(f, note, "       ")?;
                }
            }
        }

        for example in word.ste_example() {
            writeln!(f, "  {} {example}", "STE:".success())?;
        }
        for example in word.nonste_example() {
            writeln!(f, "  {} {example}", "Non-STE:".warning())?;
        }

        if !word.alternatives().is_empty() {
            writeln!(f, "  {}", "Use instead:".dim())?;
            for alternative in word.alternatives() {
                writeln!(f, "    • {} ({})", alternative.name(), alternative.word_type())?;
            }
        }

        if let Some(note) = word.note() {
            write_note(f, note, "  ")?;
        }

        Ok(())
    }
}

fn write_note(f: &mut fmt::Formatter<'_>, note: &WordNote, indent: &str) -> fmt::Result {
    if let Some(value) = &note.value {
        writeln!(f, "{indent}{} {value}", "Note:".dim())?;
    }
    if !note.words.is_empty() {
        let names: Vec<&str> = note.words.iter().map(Word::name).collect();
        writeln!(f, "{indent}{} {}", "See:".dim(), names.join(", "))?;
    }
    if let Some(example) = &note.ste_example {
        writeln!(f, "{indent}{} {example}", "STE:".success())?;
    }
    if let Some(example) = &note.nonste_example {
        writeln!(f, "{indent}{} {example}", "Non-STE:".warning())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use ste100vocab::{WordMeaning, WordStatus, WordType};

    use super::*;

    #[test]
    fn renders_rejected_word_with_alternatives() {
        let word = Word::new("ABANDON")
            .with_status(WordStatus::Rejected)
            .with_word_type(WordType::Verb)
            .with_alternatives(vec![
                Word::new("STOP").with_word_type(WordType::Verb),
                Word::new("LEAVE").with_word_type(WordType::Verb),
            ])
            .with_nonste_example(vec!["ABANDON THE TEST.".to_string()]);

        let text = Entry(&word).to_string();

        assert!(text.starts_with("ABANDON\n"));
        assert!(text.contains("rejected"));
        assert!(text.contains("• STOP (v)"));
        assert!(text.contains("• LEAVE (v)"));
        assert!(text.contains("ABANDON THE TEST."));
    }

    #[test]
    fn renders_numbered_meanings_and_notes() {
        let word = Word::new("ABOUT")
            .with_status(WordStatus::Approved)
            .with_meanings(vec![
                WordMeaning::new("CONCERNED WITH")
                    .with_ste_example("THIS PROCEDURE IS ABOUT THE ENGINE."),
                WordMeaning::new("APPROXIMATELY"),
            ])
            .with_note(Some(WordNote {
                value: Some("Use only as a preposition.".to_string()),
                ..WordNote::default()
            }));

        let text = Entry(&word).to_string();

        assert!(text.contains("1. CONCERNED WITH"));
        assert!(text.contains("2. APPROXIMATELY"));
        assert!(text.contains("THIS PROCEDURE IS ABOUT THE ENGINE."));
        assert!(text.contains("Use only as a preposition."));
    }
}
