//! User interaction handling for gen-mq.
//! Wraps the interactive project type menu behind a trait so orchestration
//! can be tested without a terminal.

use crate::error::{Error, Result};
use dialoguer::Select;

/// Trait for interactive selection prompts.
pub trait Prompter {
    /// Presents a numbered menu and returns the chosen item index.
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize>;
}

/// Prompter backed by dialoguer.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, prompt: &str, items: &[String]) -> Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .default(0)
            .items(items)
            .interact()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}
