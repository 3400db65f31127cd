//! Organization form

use std::sync::Arc;

use log::{debug, warn};

use super::{FormErrors, FormState, Mode, SubmitOutcome, validate};
use crate::client::OrganizationApi;
use crate::client::models::{Organization, OrganizationPayload, RecordId};

const LOAD_FAILED: &str = "Failed to load organization. Please try again.";

/// Organization form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrganizationField {
    Name,
    Address,
}

impl OrganizationField {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrganizationField::Name => "name",
            OrganizationField::Address => "address",
        }
    }
}

/// Raw operator input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationInput {
    pub name: String,
    pub address: String,
}

impl OrganizationInput {
    fn payload(&self) -> OrganizationPayload {
        OrganizationPayload {
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
        }
    }
}

pub struct OrganizationForm<C: ?Sized> {
    client: Arc<C>,
    mode: Mode,
    input: OrganizationInput,
    state: FormState,
    errors: FormErrors<OrganizationField>,
    banner: Option<String>,
}

impl<C: OrganizationApi + ?Sized> OrganizationForm<C> {
    /// Blank form for a new organization
    pub fn create(client: Arc<C>) -> Self {
        Self {
            client,
            mode: Mode::Create,
            input: OrganizationInput::default(),
            state: FormState::Idle,
            errors: FormErrors::new(),
            banner: None,
        }
    }

    /// Form pre-filled from the existing record.
    ///
    /// If the record cannot be fetched the form ends in `LoadFailed`.
    pub async fn edit(client: Arc<C>, id: RecordId) -> Self {
        let mut form = Self {
            client,
            mode: Mode::Edit(id.clone()),
            input: OrganizationInput::default(),
            state: FormState::Loading,
            errors: FormErrors::new(),
            banner: None,
        };

        match form.client.get_organization(&id).await {
            Ok(org) => {
                form.input = OrganizationInput {
                    name: org.name,
                    address: org.address,
                };
                form.state = FormState::Idle;
            }
            Err(e) => {
                warn!("Error fetching organization {}: {}", id, e);
                form.banner = Some(LOAD_FAILED.to_string());
                form.state = FormState::LoadFailed;
            }
        }
        form
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    #[cfg(test)]
    pub fn state(&self) -> FormState {
        self.state
    }

    #[cfg(test)]
    pub fn input(&self) -> &OrganizationInput {
        &self.input
    }

    pub fn errors(&self) -> &FormErrors<OrganizationField> {
        &self.errors
    }

    #[cfg(test)]
    pub fn error(&self, field: OrganizationField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Edit one field. Clears that field's error and no other.
    pub fn set(&mut self, field: OrganizationField, value: impl Into<String>) {
        let value = value.into();
        match field {
            OrganizationField::Name => self.input.name = value,
            OrganizationField::Address => self.input.address = value,
        }
        self.errors.remove(&field);
    }

    /// Run every check and replace the error map with the result.
    pub fn validate(&mut self) -> bool {
        self.errors = validate::organization(&self.input);
        self.errors.is_empty()
    }

    /// Validate, then create or replace the organization.
    pub async fn submit(&mut self) -> SubmitOutcome<Organization> {
        if !self.state.accepts_submit() {
            return SubmitOutcome::Blocked;
        }
        if !self.validate() {
            debug!("Organization form invalid: {:?}", self.errors);
            return SubmitOutcome::Invalid;
        }

        self.state = FormState::Submitting;
        self.banner = None;
        let payload = self.input.payload();

        let result = match &self.mode {
            Mode::Create => self.client.create_organization(&payload).await,
            Mode::Edit(id) => self.client.update_organization(id, &payload).await,
        };

        match result {
            Ok(org) => {
                debug!("Organization {} saved", org.id);
                self.state = FormState::Submitted;
                SubmitOutcome::Saved(org)
            }
            Err(e) => {
                warn!("Error saving organization: {}", e);
                self.banner = Some(format!(
                    "Failed to {} organization. Please try again.",
                    self.mode.verb()
                ));
                self.state = FormState::Idle;
                SubmitOutcome::Rejected
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockAdminClient;
    use crate::error::{ApiError, FieldErrors};

    #[tokio::test]
    async fn test_create_round_trip() {
        let mock = Arc::new(MockAdminClient::new());
        let mut form = OrganizationForm::create(mock.clone());
        form.set(OrganizationField::Name, "Acme");
        form.set(OrganizationField::Address, "1 Main St");

        let outcome = form.submit().await;
        assert!(matches!(outcome, SubmitOutcome::Saved(_)));
        assert_eq!(form.state(), FormState::Submitted);

        let orgs = mock.list_organizations().await.unwrap();
        assert_eq!(orgs.len(), 1);
        assert_eq!(orgs[0].name, "Acme");
        assert_eq!(orgs[0].address, "1 Main St");
        assert_eq!(orgs[0].user_count, 0);
    }

    #[tokio::test]
    async fn test_invalid_form_sends_nothing() {
        let mock = Arc::new(MockAdminClient::new());
        let mut form = OrganizationForm::create(mock.clone());
        form.set(OrganizationField::Name, "  ");

        assert_eq!(form.submit().await, SubmitOutcome::Invalid);
        assert_eq!(form.errors().len(), 2);
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(mock.call_counts().await.total(), 0);
    }

    #[tokio::test]
    async fn test_editing_clears_only_that_field() {
        let mut form = OrganizationForm::create(Arc::new(MockAdminClient::new()));
        form.validate();
        assert_eq!(form.errors().len(), 2);

        form.set(OrganizationField::Name, "Acme");
        assert!(form.error(OrganizationField::Name).is_none());
        assert_eq!(form.error(OrganizationField::Address), Some("Address is required"));
    }

    #[tokio::test]
    async fn test_edit_prefills_and_replaces() {
        let mock = MockAdminClient::new();
        let acme = mock.seed_organization("Acme", "1 Main St").await;
        let mock = Arc::new(mock);

        let mut form = OrganizationForm::edit(mock.clone(), acme.id.clone()).await;
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(form.input().name, "Acme");

        form.set(OrganizationField::Address, "2 Side St");
        let SubmitOutcome::Saved(saved) = form.submit().await else {
            panic!("expected save");
        };
        assert_eq!(saved.id, acme.id);
        assert_eq!(saved.name, "Acme");
        assert_eq!(saved.address, "2 Side St");
        assert_eq!(mock.call_counts().await.update_organization, 1);
    }

    #[tokio::test]
    async fn test_edit_load_failure_is_terminal() {
        let mock = Arc::new(MockAdminClient::new());
        let mut form = OrganizationForm::edit(mock.clone(), RecordId::from(5)).await;

        assert_eq!(form.state(), FormState::LoadFailed);
        assert_eq!(form.banner(), Some(LOAD_FAILED));

        form.set(OrganizationField::Name, "Acme");
        form.set(OrganizationField::Address, "1 Main St");
        assert_eq!(form.submit().await, SubmitOutcome::Blocked);
        assert_eq!(mock.call_counts().await.update_organization, 0);
    }

    #[tokio::test]
    async fn test_server_rejection_keeps_input() {
        let mock = Arc::new(MockAdminClient::new());
        mock.fail_next(
            "create_organization",
            ApiError::Validation(FieldErrors::single("name", "too long")),
        )
        .await;
        let mut form = OrganizationForm::create(mock);
        form.set(OrganizationField::Name, "Acme");
        form.set(OrganizationField::Address, "1 Main St");

        assert_eq!(form.submit().await, SubmitOutcome::Rejected);
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(
            form.banner(),
            Some("Failed to create organization. Please try again.")
        );
        assert!(form.errors().is_empty());
        assert_eq!(form.input().name, "Acme");
    }

    #[tokio::test]
    async fn test_submitted_form_rejects_second_submit() {
        let mock = Arc::new(MockAdminClient::new());
        let mut form = OrganizationForm::create(mock.clone());
        form.set(OrganizationField::Name, "Acme");
        form.set(OrganizationField::Address, "1 Main St");

        assert!(matches!(form.submit().await, SubmitOutcome::Saved(_)));
        assert_eq!(form.submit().await, SubmitOutcome::Blocked);
        assert_eq!(mock.call_counts().await.create_organization, 1);
    }
}
