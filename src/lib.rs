//! promptgen - structured AI coding prompts from feature specifications
//!
//! Renders a fixed prompt-generator template for a named feature. The
//! feature name lands in a heading and in the task output paths, while the
//! specification text is embedded verbatim in a fenced block. Project
//! context, when given, is appended as its own section at the end.
//!
//! # Modules
//!
//! - `cli` - Argument parsing for the `pg` binary
//! - `input` - File and stdin acquisition
//! - `template` - The embedded prompt skeleton and its markers
//! - `prompt` - Validation and marker substitution
//!
//! # Example
//!
//! ```ignore
//! use promptgen::PromptBuilder;
//!
//! let prompt = PromptBuilder::build("Login", "Users can log in.", None)?;
//! println!("{}", prompt);
//! ```

pub mod cli;
mod error;
mod input;
mod prompt;
mod template;

pub use error::PromptError;
pub use input::{STDIN_PATH, read_file, read_stdin};
pub use prompt::PromptBuilder;
