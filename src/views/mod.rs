//! View-models over the admin API
//!
//! Each view owns the snapshot it fetched and nothing else. Views are built
//! fresh for every command and dropped when it returns; no state is shared
//! between them.
//!
//! Mutations never leave the caller guessing about the snapshot: deleting
//! through a list view splices the record out locally, while a saved form
//! reports that the list must be fetched again.

pub mod dashboard;
pub mod forms;
pub mod organizations;
pub mod users;

pub use dashboard::{Dashboard, DashboardSummary};
pub use forms::{
    FormState, OrganizationField, OrganizationForm, SubmitOutcome, UserField, UserForm,
};
pub use organizations::OrganizationListView;
pub use users::{UserListView, resolve};

use crate::error::Result;

/// Lifecycle of a fetched snapshot
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// Fetch in flight (or not yet started)
    Loading,
    /// Snapshot available
    Ready(T),
    /// Fetch failed; the banner replaces the content
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn banner(&self) -> Option<&str> {
        match self {
            LoadState::Failed(banner) => Some(banner),
            _ => None,
        }
    }
}

/// What the operator is asked before a delete is issued
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePrompt {
    /// Display name of the record, e.g. `organization "Acme"`
    pub subject: String,
    /// The question itself
    pub message: String,
    /// Side effects the backend will perform, shown as part of the same question
    pub cascade: Option<String>,
}

/// Operator confirmation for destructive actions.
///
/// Implemented for closures so tests can answer inline; the CLI answers
/// with an interactive prompt or `--yes`.
pub trait Confirm {
    fn confirm(&self, prompt: &DeletePrompt) -> Result<bool>;
}

impl<F> Confirm for F
where
    F: Fn(&DeletePrompt) -> bool,
{
    fn confirm(&self, prompt: &DeletePrompt) -> Result<bool> {
        Ok(self(prompt))
    }
}

/// Result of a delete issued through a list view
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome<T> {
    /// Backend confirmed; the record was removed from the local snapshot
    Spliced(T),
    /// Operator declined; no request was sent
    Cancelled,
    /// Request failed or the record is unknown; the snapshot is untouched
    Failed(String),
}

/// Case-insensitive substring match; an empty term matches everything.
pub(crate) fn contains_ci(haystack: &str, term: &str) -> bool {
    term.is_empty() || haystack.to_lowercase().contains(&term.to_lowercase())
}
