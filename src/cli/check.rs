use anyhow::Context;
use ste100vocab::{Config, Vocab};
use tracing::instrument;

use super::terminal::Colorize;

/// Loads every configured source and reports lines that were skipped.
#[derive(Debug)]
pub struct Check;

impl Check {
    #[instrument(level = "debug", skip(config))]
    pub fn run(config: &Config) -> anyhow::Result<()> {
        let vocab = Vocab::builder()
            .with_config(config)
            .load()
            .context("failed to load vocabulary")?;

        for diagnostic in vocab.diagnostics() {
            println!("{}", diagnostic.to_string().warning());
        }

        let summary = format!(
            "{} words loaded from {} source(s)",
            vocab.len(),
            vocab.files().len()
        );
        let rejected = vocab.diagnostics().len();
        if rejected > 0 {
            println!("{}", summary.dim());
            anyhow::bail!("{rejected} line(s) could not be parsed");
        }

        println!("{}", summary.success());
        Ok(())
    }
}
