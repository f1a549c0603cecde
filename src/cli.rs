use std::path::PathBuf;

mod categories;
mod check;
mod list;
mod show;
mod terminal;

use anyhow::Context;
use categories::Categories;
use check::Check;
use clap::ArgAction;
use list::List;
use show::Show;
use ste100vocab::Config;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a configuration file
    #[arg(short, long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(flatten)]
    sources: Sources,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("failed to load configuration {}", path.display()))?,
            None => Config::default(),
        };
        self.sources.apply(&mut config);

        self.command
            .unwrap_or_else(|| Command::List(List::default()))
            .run(&config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false)
            .with_writer(std::io::stderr);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// Vocabulary source selection, applied on top of the configuration file.
#[derive(Debug, clap::Args)]
struct Sources {
    /// Additional vocabulary file to load (repeatable)
    #[arg(short, long = "file", value_name = "PATH", global = true)]
    files: Vec<PathBuf>,

    /// Do not load the built-in base vocabulary
    #[arg(long, global = true)]
    no_base: bool,

    /// Load the built-in technical words
    #[arg(long, global = true)]
    technical: bool,

    /// Directory holding the built-in vocabulary files
    #[arg(long, value_name = "DIR", global = true)]
    data_dir: Option<PathBuf>,
}

impl Sources {
    fn apply(self, config: &mut Config) {
        if self.no_base {
            config.use_builtin_base = false;
        }
        if self.technical {
            config.use_builtin_technical = true;
        }
        if let Some(dir) = self.data_dir {
            config.data_dir = Some(dir);
        }
        for file in self.files {
            config.push_file(file);
        }
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// List vocabulary words (default)
    List(List),

    /// Show every entry for a word
    Show(Show),

    /// List technical word categories
    Categories(Categories),

    /// Load the vocabulary and report lines that could not be parsed
    Check,
}

impl Command {
    fn run(self, config: &Config) -> anyhow::Result<()> {
        match self {
            Self::List(command) => command.run(config)?,
            Self::Show(command) => command.run(config)?,
            Self::Categories(command) => command.run()?,
            Self::Check => Check::run(config)?,
        }
        Ok(())
    }
}
