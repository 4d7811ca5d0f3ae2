//! CLI argument parsing for promptgen

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pg")]
#[command(author, version, about = "Generate AI coding prompts from feature specs", long_about = None)]
pub struct Cli {
    /// Name of the software feature
    pub feature_name: String,

    /// File containing the feature specification (reads stdin if omitted)
    #[arg(short = 'f', long)]
    pub spec_file: Option<PathBuf>,

    /// File containing project context to include in the prompt
    #[arg(short = 'c', long)]
    pub context_file: Option<PathBuf>,
}
