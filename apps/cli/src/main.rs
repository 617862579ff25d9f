//! docbase CLI — offline Markdown knowledge-base extractor.
//!
//! Converts a documentation tree into a flat JSON knowledge base of
//! `{id, about, text}` records, and sample-project trees into a JSON catalog.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
