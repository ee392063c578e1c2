use anyhow::{Context, Result};
use clap::Parser as _;
use tracing_subscriber::EnvFilter;

use crate::args::Parser;

mod args;
mod evaluate;

fn main() -> Result<()> {
    let Parser {
        mixed,
        log,
        subcommand,
    } = Parser::parse();

    init_logging(&log)?;

    let output = evaluate::evaluate(subcommand, mixed)?;

    println!("{output}");

    Ok(())
}

fn init_logging(directives: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directives)
        .with_context(|| format!("Invalid log filter directives `{directives}`!"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
