//! Create/edit forms for organizations and users
//!
//! A form walks `Loading → Idle` (edit mode only), then on submit validates
//! every field, and either returns to `Idle` with field errors or moves to
//! `Submitting`. A successful submit ends in `Submitted`; a failed one goes
//! back to `Idle` with the input intact and an error banner or field error.
//! A record that cannot be loaded leaves the form in the terminal
//! `LoadFailed` state.

mod organization;
mod user;
pub mod validate;

use std::collections::BTreeMap;

pub use organization::{OrganizationField, OrganizationForm, OrganizationInput};
pub use user::{UserField, UserForm, UserInput};

use crate::client::models::RecordId;

/// Form lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Loading,
    Idle,
    Submitting,
    Submitted,
    LoadFailed,
}

impl FormState {
    /// Whether a submit may start from this state
    pub fn accepts_submit(self) -> bool {
        matches!(self, FormState::Idle)
    }
}

/// Create a new record or replace an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Create,
    Edit(RecordId),
}

impl Mode {
    pub fn verb(&self) -> &'static str {
        match self {
            Mode::Create => "create",
            Mode::Edit(_) => "update",
        }
    }
}

/// Field-scoped messages, at most one per field
pub type FormErrors<F> = BTreeMap<F, String>;

/// Result of [`OrganizationForm::submit`] / [`UserForm::submit`]
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome<T> {
    /// Saved by the backend. Nothing was added to any list snapshot; the
    /// list must be fetched again to show the change.
    Saved(T),
    /// Local validation failed; no request was sent
    Invalid,
    /// The backend rejected the request; see the form's errors and banner
    Rejected,
    /// The form is loading, already submitting, or finished
    Blocked,
}
