use anyhow::Context;
use clap::Parser;
use ste100vocab::WordCategory;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "List technical word categories")]
pub struct Categories {
    /// Case-insensitive regular expression matched against the descriptions
    pattern: Option<String>,
}

impl Categories {
    pub fn run(self) -> anyhow::Result<()> {
        let categories = self.categories()?;
        if categories.is_empty() {
            println!("{}", "No categories matched".dim());
        }
        for category in categories {
            println!("{:<5} {}", category.as_str(), category.description());
        }
        Ok(())
    }

    fn categories(&self) -> anyhow::Result<Vec<WordCategory>> {
        match &self.pattern {
            Some(pattern) => WordCategory::matching(pattern)
                .with_context(|| format!("invalid category pattern '{pattern}'")),
            None => Ok(WordCategory::ALL.to_vec()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_category_without_pattern() {
        let categories = Categories { pattern: None }.categories().unwrap();
        assert_eq!(categories, WordCategory::ALL);
    }

    #[test]
    fn filters_by_description() {
        let categories = Categories {
            pattern: Some("process".to_string()),
        }
        .categories()
        .unwrap();
        assert_eq!(
            categories,
            [
                WordCategory::ManufacturingProcesses,
                WordCategory::ComputerProcesses
            ]
        );
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let categories = Categories {
            pattern: Some("[".to_string()),
        };
        assert!(categories.categories().is_err());
    }
}
