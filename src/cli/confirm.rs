//! Interactive delete confirmation

use colored::Colorize;
use dialoguer::{Confirm as ConfirmPrompt, theme::ColorfulTheme};

use crate::error::Result;
use crate::views::{Confirm, DeletePrompt};

/// Always shows what will be deleted; asks on the terminal unless `--yes` was given.
pub struct PromptConfirm {
    assume_yes: bool,
}

impl PromptConfirm {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirm for PromptConfirm {
    fn confirm(&self, prompt: &DeletePrompt) -> Result<bool> {
        eprintln!("{} {}", "Deleting".yellow(), prompt.subject.bold());
        if let Some(cascade) = &prompt.cascade {
            eprintln!("{} {}", "⚠".yellow(), cascade);
        }

        if self.assume_yes {
            return Ok(true);
        }

        let answer = ConfirmPrompt::with_theme(&ColorfulTheme::default())
            .with_prompt(&prompt.message)
            .default(false)
            .interact()?;
        Ok(answer)
    }
}
