//! Shared reporting helpers for command handlers

use colored::Colorize;

use crate::error::{Error, Result};
use crate::views::{DeleteOutcome, SubmitOutcome};

/// Turn a view's error banner into the command's failure.
pub fn banner(message: &str) -> Error {
    Error::Other(message.to_string())
}

/// Print field errors, one per line, and fail the command.
pub fn invalid<'a>(errors: impl IntoIterator<Item = (&'a str, &'a str)>) -> Error {
    for (field, message) in errors {
        eprintln!("  {} {}: {}", "✗".red(), field.bold(), message);
    }
    Error::Other("Input is invalid; nothing was sent.".to_string())
}

/// Report a form submission that did not save.
///
/// `fields` and `banner_text` are read from the form after submit.
pub fn unsaved<'a, T>(
    outcome: &SubmitOutcome<T>,
    fields: impl IntoIterator<Item = (&'a str, &'a str)>,
    banner_text: Option<&str>,
) -> Error {
    match (outcome, banner_text) {
        (SubmitOutcome::Invalid, _) => invalid(fields),
        (_, Some(text)) => banner(text),
        (SubmitOutcome::Rejected, None) => invalid(fields),
        _ => Error::Other("The record could not be saved.".to_string()),
    }
}

/// Print the outcome of a list-view delete.
pub fn deleted<T>(outcome: DeleteOutcome<T>, describe: impl FnOnce(&T) -> String) -> Result<()> {
    match outcome {
        DeleteOutcome::Spliced(record) => {
            println!("{} Deleted {}", "✓".green(), describe(&record));
            Ok(())
        }
        DeleteOutcome::Cancelled => {
            println!("{}", "Cancelled.".dimmed());
            Ok(())
        }
        DeleteOutcome::Failed(message) => Err(banner(&message)),
    }
}
