//! User command implementations

use colored::Colorize;
use log::{debug, warn};

use crate::cli::confirm::PromptConfirm;
use crate::cli::{CommandContext, OutputFormat, report};
use crate::client::models::RecordId;
use crate::client::{OrganizationApi, UserApi};
use crate::error::{Error, Result};
use crate::models::UserDisplay;
use crate::output::formatters::{EMPTY, format_timestamp_local};
use crate::output::{self, json, table};
use crate::views::{SubmitOutcome, UserField, UserForm, UserListView, resolve};

/// Run the user list command
pub async fn list(ctx: &CommandContext, search: Option<&str>, org: Option<&str>) -> Result<()> {
    let view = UserListView::open(ctx.client.clone()).await;
    if let Some(banner) = view.banner() {
        return Err(report::banner(banner));
    }

    let org = org.map(RecordId::new);
    if let Some(org) = &org
        && !view.organizations().iter().any(|o| &o.id == org)
    {
        warn!("Organization {} is not in the current list", org);
    }
    let matched = view.filter(search.unwrap_or_default(), org.as_ref());
    debug!("{} of {} users match", matched.len(), view.users().len());

    let rows: Vec<UserDisplay> = matched.into_iter().map(UserDisplay::from).collect();
    output::print(&rows, ctx.format)
}

/// Run the user get command
pub async fn get(ctx: &CommandContext, id: &str) -> Result<()> {
    let id = RecordId::new(id);
    let (user, organizations) = futures::try_join!(
        ctx.client.get_user(&id),
        ctx.client.list_organizations()
    )?;
    let user = resolve(vec![user], &organizations)
        .pop()
        .ok_or_else(|| Error::Other(format!("User {} could not be resolved", id)))?;

    match ctx.format {
        OutputFormat::Table => {
            let organization = match (&user.organization, &user.organization_name) {
                (Some(org_id), Some(name)) => format!("{} ({})", name, org_id),
                (Some(org_id), None) => org_id.to_string(),
                (None, _) => EMPTY.to_string(),
            };
            println!(
                "{}",
                table::format_details(&[
                    ("ID", user.id.to_string()),
                    ("Name", user.name.clone()),
                    ("Email", user.email.clone()),
                    ("Role", user.role.to_string()),
                    ("Organization", organization),
                    ("Created", format_timestamp_local(&user.created_at)),
                ])
            );
        }
        OutputFormat::Json => println!("{}", json::format_json(&user)?),
    }
    Ok(())
}

/// Run the user create command
pub async fn create(
    ctx: &CommandContext,
    name: &str,
    email: &str,
    role: Option<&str>,
    org: Option<&str>,
) -> Result<()> {
    let mut form = UserForm::create(ctx.client.clone());
    form.set(UserField::Name, name);
    form.set(UserField::Email, email);
    if let Some(role) = role {
        form.set(UserField::Role, role);
    }
    if let Some(org) = org {
        form.set(UserField::Organization, org);
    }
    submit(ctx, form).await
}

/// Fields given to `user update`; `None` keeps the current value.
#[derive(Debug, Default)]
pub struct UserChanges<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub role: Option<&'a str>,
    pub org: Option<&'a str>,
    pub no_org: bool,
}

/// Run the user update command
pub async fn update(ctx: &CommandContext, id: &str, changes: UserChanges<'_>) -> Result<()> {
    let mut form = UserForm::edit(ctx.client.clone(), RecordId::new(id)).await;
    if let Some(banner) = form.banner() {
        return Err(report::banner(banner));
    }

    if let Some(name) = changes.name {
        form.set(UserField::Name, name);
    }
    if let Some(email) = changes.email {
        form.set(UserField::Email, email);
    }
    if let Some(role) = changes.role {
        form.set(UserField::Role, role);
    }
    if changes.no_org {
        form.set(UserField::Organization, "");
    } else if let Some(org) = changes.org {
        form.set(UserField::Organization, org);
    }
    submit(ctx, form).await
}

async fn submit<C: UserApi + ?Sized>(ctx: &CommandContext, mut form: UserForm<C>) -> Result<()> {
    let verb = form.mode().verb();
    let outcome = form.submit().await;

    let user = match outcome {
        SubmitOutcome::Saved(user) => user,
        other => {
            let fields = form
                .errors()
                .iter()
                .map(|(field, message)| (field.as_str(), message.as_str()));
            return Err(report::unsaved(&other, fields, form.banner()));
        }
    };

    match ctx.format {
        OutputFormat::Table => {
            let past = if verb == "create" { "Created" } else { "Updated" };
            println!(
                "{} {} user {} <{}> ({})",
                "✓".green(),
                past,
                user.name.bold(),
                user.email,
                user.id
            );
        }
        OutputFormat::Json => println!("{}", json::format_json(&user)?),
    }
    Ok(())
}

/// Run the user delete command
pub async fn delete(ctx: &CommandContext, id: &str, yes: bool) -> Result<()> {
    let mut view = UserListView::open(ctx.client.clone()).await;
    if let Some(banner) = view.banner() {
        return Err(report::banner(banner));
    }

    let outcome = view
        .delete(&RecordId::new(id), &PromptConfirm::new(yes))
        .await?;
    report::deleted(outcome, |user| format!("user {} <{}>", user.name.bold(), user.email))
}
