//! promptgen - AI coding prompt generator
//!
//! CLI entry point for rendering coding prompts from feature specs.

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use promptgen::cli::Cli;
use promptgen::{PromptBuilder, read_file, read_stdin};

fn setup_logging() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();
    info!("promptgen starting");

    let spec_text = match &cli.spec_file {
        Some(path) => read_file(path).context("Failed to read specification file")?,
        None => {
            eprintln!(
                "{}",
                "Enter feature specification (press Ctrl+D when finished):".dimmed()
            );
            read_stdin().context("Failed to read specification from stdin")?
        }
    };

    let context_text = cli
        .context_file
        .as_deref()
        .map(|path| read_file(path).context("Failed to read context file"))
        .transpose()?;

    let prompt = PromptBuilder::build(&cli.feature_name, &spec_text, context_text.as_deref())?;

    info!(
        "Generated prompt for feature '{}' ({} bytes, context: {})",
        cli.feature_name.trim(),
        prompt.len(),
        context_text.is_some()
    );
    println!("{}", prompt);

    Ok(())
}
