//! Prompt assembly
//!
//! Substitutes the caller's inputs into the embedded template. The spec and
//! context blocks are carried verbatim, so whatever markdown they contain
//! survives untouched in the output.

use crate::error::PromptError;
use crate::template::{CONTEXT_SECTION, PROMPT_TEMPLATE};

/// Renders coding prompts from a feature name, spec text, and optional context
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build the full prompt for a feature.
    ///
    /// `feature_name` is trimmed before substitution; it and `spec_text`
    /// must be non-empty after trimming. A whitespace-only `context_text`
    /// is treated the same as `None` and produces no context section.
    pub fn build(
        feature_name: &str,
        spec_text: &str,
        context_text: Option<&str>,
    ) -> Result<String, PromptError> {
        let feature_name = feature_name.trim();
        if feature_name.is_empty() {
            return Err(PromptError::InvalidInput { field: "feature name" });
        }
        if spec_text.trim().is_empty() {
            return Err(PromptError::InvalidInput { field: "specification text" });
        }

        // Feature name goes in first; the spec block is inserted afterwards
        // and never rescanned, so marker-like text inside it stays literal.
        let mut prompt = PROMPT_TEMPLATE
            .replace("{{feature_name}}", feature_name)
            .replace("{{spec}}", spec_text);

        if let Some(context) = context_text.filter(|text| !text.trim().is_empty()) {
            prompt.push_str(&CONTEXT_SECTION.replace("{{context}}", context));
        }

        Ok(prompt)
    }
}
