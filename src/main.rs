//! `ste100` command line: browse and check ASD-STE100 vocabulary files.

use clap::Parser;

mod cli;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse().run()
}
