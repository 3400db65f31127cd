//! User form

use std::sync::Arc;

use log::{debug, warn};

use super::{FormErrors, FormState, Mode, SubmitOutcome, validate};
use crate::client::UserApi;
use crate::client::models::{RecordId, Role, User, UserPayload};
use crate::error::Error;

const LOAD_FAILED: &str = "Failed to load user. Please try again.";

/// User form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UserField {
    Name,
    Email,
    Role,
    Organization,
}

impl UserField {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserField::Name => "name",
            UserField::Email => "email",
            UserField::Role => "role",
            UserField::Organization => "organization",
        }
    }
}

/// Raw operator input.
///
/// `organization` holds the selected organization ID; blank means none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub role: String,
    pub organization: String,
}

impl Default for UserInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            role: Role::default().to_string(),
            organization: String::new(),
        }
    }
}

impl UserInput {
    /// Build the request body. Only called after validation passed.
    fn payload(&self) -> UserPayload {
        UserPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            role: self.role.parse().unwrap_or_default(),
            organization: RecordId::from_input(&self.organization),
        }
    }
}

pub struct UserForm<C: ?Sized> {
    client: Arc<C>,
    mode: Mode,
    input: UserInput,
    state: FormState,
    errors: FormErrors<UserField>,
    banner: Option<String>,
}

impl<C: UserApi + ?Sized> UserForm<C> {
    /// Blank form for a new user; role starts as employee
    pub fn create(client: Arc<C>) -> Self {
        Self {
            client,
            mode: Mode::Create,
            input: UserInput::default(),
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
            input: UserInput::default(),
            state: FormState::Loading,
            errors: FormErrors::new(),
            banner: None,
        };

        match form.client.get_user(&id).await {
            Ok(user) => {
                form.input = UserInput {
                    name: user.name,
                    email: user.email,
                    role: user.role.to_string(),
                    organization: user
                        .organization
                        .map(|id| id.to_string())
                        .unwrap_or_default(),
                };
                form.state = FormState::Idle;
            }
            Err(e) => {
                warn!("Error fetching user {}: {}", id, e);
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
    pub fn input(&self) -> &UserInput {
        &self.input
    }

    pub fn errors(&self) -> &FormErrors<UserField> {
        &self.errors
    }

    #[cfg(test)]
    pub fn error(&self, field: UserField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Edit one field. Clears that field's error and no other.
    pub fn set(&mut self, field: UserField, value: impl Into<String>) {
        let value = value.into();
        match field {
            UserField::Name => self.input.name = value,
            UserField::Email => self.input.email = value,
            UserField::Role => self.input.role = value,
            UserField::Organization => self.input.organization = value,
        }
        self.errors.remove(&field);
    }

    /// Run every check and replace the error map with the result.
    pub fn validate(&mut self) -> bool {
        self.errors = validate::user(&self.input);
        self.errors.is_empty()
    }

    /// Validate, then create or replace the user.
    ///
    /// A backend email rejection (e.g. already taken) lands on the email
    /// field; any other failure becomes the banner.
    pub async fn submit(&mut self) -> SubmitOutcome<User> {
        if !self.state.accepts_submit() {
            return SubmitOutcome::Blocked;
        }
        if !self.validate() {
            debug!("User form invalid: {:?}", self.errors);
            return SubmitOutcome::Invalid;
        }

        self.state = FormState::Submitting;
        self.banner = None;
        let payload = self.input.payload();

        let result = match &self.mode {
            Mode::Create => self.client.create_user(&payload).await,
            Mode::Edit(id) => self.client.update_user(id, &payload).await,
        };

        match result {
            Ok(user) => {
                debug!("User {} saved", user.id);
                self.state = FormState::Submitted;
                SubmitOutcome::Saved(user)
            }
            Err(e) => {
                warn!("Error saving user: {}", e);
                let email_error = match &e {
                    Error::Api(api) => api
                        .field_errors()
                        .and_then(|fields| fields.first(UserField::Email.as_str()))
                        .map(str::to_string),
                    _ => None,
                };
                match email_error {
                    Some(message) => {
                        self.errors.insert(UserField::Email, message);
                    }
                    None => {
                        self.banner = Some(format!(
                            "Failed to {} user. Please try again.",
                            self.mode.verb()
                        ));
                    }
                }
                self.state = FormState::Idle;
                SubmitOutcome::Rejected
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::models::UserPayload;
    use crate::client::{MockAdminClient, OrganizationApi};
    use crate::error::{ApiError, FieldErrors};

    fn filled(form: &mut UserForm<MockAdminClient>, email: &str) {
        form.set(UserField::Name, "Ada");
        form.set(UserField::Email, email);
        form.set(UserField::Role, "admin");
    }

    #[tokio::test]
    async fn test_bad_email_rejected_before_request() {
        let mock = Arc::new(MockAdminClient::new());
        let mut form = UserForm::create(mock.clone());
        filled(&mut form, "not-an-email");

        assert_eq!(form.submit().await, SubmitOutcome::Invalid);
        assert_eq!(form.error(UserField::Email), Some("Email is invalid"));
        assert_eq!(mock.call_counts().await.total(), 0);
    }

    #[tokio::test]
    async fn test_short_valid_email_passes() {
        let mock = Arc::new(MockAdminClient::new());
        let mut form = UserForm::create(mock.clone());
        filled(&mut form, "a@b.co");

        assert!(matches!(form.submit().await, SubmitOutcome::Saved(_)));
        assert_eq!(mock.call_counts().await.create_user, 1);
    }

    #[tokio::test]
    async fn test_default_role_is_employee() {
        let mock = Arc::new(MockAdminClient::new());
        let mut form = UserForm::create(mock);
        form.set(UserField::Name, "Ada");
        form.set(UserField::Email, "ada@example.com");

        let SubmitOutcome::Saved(user) = form.submit().await else {
            panic!("expected save");
        };
        assert_eq!(user.role, Role::Employee);
    }

    #[tokio::test]
    async fn test_blank_organization_sent_as_null() {
        let mock = MockAdminClient::new();
        let acme = mock.seed_organization("Acme", "1 Main St").await;
        let ada = mock
            .seed_user("Ada", "ada@example.com", Role::Admin, Some(&acme.id))
            .await;
        let mock = Arc::new(mock);

        let mut form = UserForm::edit(mock.clone(), ada.id.clone()).await;
        assert_eq!(form.input().organization, acme.id.to_string());

        form.set(UserField::Organization, "  ");
        let SubmitOutcome::Saved(saved) = form.submit().await else {
            panic!("expected save");
        };
        assert_eq!(saved.organization, None);
        assert_eq!(saved.organization_name, None);
        assert_eq!(mock.get_organization(&acme.id).await.unwrap().user_count, 0);
    }

    #[tokio::test]
    async fn test_duplicate_email_lands_on_email_field() {
        let mock = MockAdminClient::new();
        mock.seed_user("Taken", "ada@example.com", Role::Intern, None)
            .await;
        let mut form = UserForm::create(Arc::new(mock));
        filled(&mut form, "ada@example.com");

        assert_eq!(form.submit().await, SubmitOutcome::Rejected);
        assert_eq!(
            form.error(UserField::Email),
            Some("A user with this email already exists.")
        );
        assert!(form.banner().is_none());
        assert_eq!(form.state(), FormState::Idle);
        assert_eq!(form.input().email, "ada@example.com");
    }

    #[tokio::test]
    async fn test_other_field_errors_become_banner() {
        let mock = Arc::new(MockAdminClient::new());
        mock.fail_next(
            "create_user",
            ApiError::Validation(FieldErrors::single("name", "too long")),
        )
        .await;
        let mut form = UserForm::create(mock);
        filled(&mut form, "ada@example.com");

        assert_eq!(form.submit().await, SubmitOutcome::Rejected);
        assert!(form.errors().is_empty());
        assert_eq!(form.banner(), Some("Failed to create user. Please try again."));
    }

    #[tokio::test]
    async fn test_transport_failure_on_update_uses_update_banner() {
        let mock = MockAdminClient::new();
        let ada = mock
            .seed_user("Ada", "ada@example.com", Role::Admin, None)
            .await;
        let mock = Arc::new(mock);
        mock.fail_next("update_user", ApiError::Network("down".to_string()))
            .await;

        let mut form = UserForm::edit(mock, ada.id).await;
        form.set(UserField::Name, "Ada L.");

        assert_eq!(form.submit().await, SubmitOutcome::Rejected);
        assert_eq!(form.banner(), Some("Failed to update user. Please try again."));
        assert_eq!(form.input().name, "Ada L.");
    }

    #[tokio::test]
    async fn test_editing_email_clears_only_email_error() {
        let mut form = UserForm::create(Arc::new(MockAdminClient::new()));
        form.set(UserField::Role, "");
        form.set(UserField::Email, "nope");
        form.validate();
        assert_eq!(form.errors().len(), 3);

        form.set(UserField::Email, "ada@example.com");
        assert!(form.error(UserField::Email).is_none());
        assert!(form.error(UserField::Name).is_some());
        assert!(form.error(UserField::Role).is_some());
    }

    #[tokio::test]
    async fn test_edit_missing_user_is_terminal() {
        let form = UserForm::edit(Arc::new(MockAdminClient::new()), RecordId::from(3)).await;
        assert_eq!(form.state(), FormState::LoadFailed);
        assert_eq!(form.banner(), Some(LOAD_FAILED));
    }

    #[test]
    fn test_payload_normalizes_input() {
        let input = UserInput {
            name: " Ada ".to_string(),
            email: "ada@example.com ".to_string(),
            role: "Manager".to_string(),
            organization: "7".to_string(),
        };
        assert_eq!(
            input.payload(),
            UserPayload {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                role: Role::Manager,
                organization: Some(RecordId::from(7)),
            }
        );
    }
}
