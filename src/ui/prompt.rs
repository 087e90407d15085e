//! Interactive selection prompts

use dialoguer::{theme::ColorfulTheme, Select};

use crate::error::{GistError, Result};

/// Single-choice prompt capability
pub trait Prompter {
    /// Present `options` under `message` and return the chosen index.
    /// Cancellation yields `GistError::PromptCancelled`.
    fn select(&self, message: &str, options: &[String]) -> Result<usize>;
}

/// Terminal prompter backed by dialoguer
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn select(&self, message: &str, options: &[String]) -> Result<usize> {
        Select::with_theme(&ColorfulTheme::default())
            .with_prompt(message)
            .items(options)
            .default(0)
            .interact_opt()
            .map_err(|e| GistError::Resolution(e.to_string()))?
            .ok_or(GistError::PromptCancelled)
    }
}
