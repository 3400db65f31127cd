//! Local validation rules

use std::sync::LazyLock;

use regex::Regex;

use super::FormErrors;
use super::organization::{OrganizationField, OrganizationInput};
use super::user::{UserField, UserInput};
use crate::client::models::Role;

/// Loose `local@domain.tld` shape, unanchored like the web form's check
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Check every organization field; an empty map means valid.
pub fn organization(input: &OrganizationInput) -> FormErrors<OrganizationField> {
    let mut errors = FormErrors::new();
    if input.name.trim().is_empty() {
        errors.insert(
            OrganizationField::Name,
            "Organization name is required".to_string(),
        );
    }
    if input.address.trim().is_empty() {
        errors.insert(OrganizationField::Address, "Address is required".to_string());
    }
    errors
}

/// Check every user field; an empty map means valid.
pub fn user(input: &UserInput) -> FormErrors<UserField> {
    let mut errors = FormErrors::new();
    if input.name.trim().is_empty() {
        errors.insert(UserField::Name, "Name is required".to_string());
    }

    if input.email.trim().is_empty() {
        errors.insert(UserField::Email, "Email is required".to_string());
    } else if !is_valid_email(&input.email) {
        errors.insert(UserField::Email, "Email is invalid".to_string());
    }

    if input.role.trim().is_empty() {
        errors.insert(UserField::Role, "Role is required".to_string());
    } else if input.role.parse::<Role>().is_err() {
        let allowed: Vec<&str> = Role::ALL.iter().map(Role::as_str).collect();
        errors.insert(
            UserField::Role,
            format!("Role must be one of: {}", allowed.join(", ")),
        );
    }
    errors
}
