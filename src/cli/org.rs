//! Organization command implementations

use colored::Colorize;
use log::debug;

use crate::cli::confirm::PromptConfirm;
use crate::cli::{CommandContext, OutputFormat, report};
use crate::client::OrganizationApi;
use crate::client::models::RecordId;
use crate::error::Result;
use crate::models::{OrgDisplay, UserDisplay};
use crate::output::formatters::format_timestamp_local;
use crate::output::{self, json, table};
use crate::views::{
    OrganizationField, OrganizationForm, OrganizationListView, SubmitOutcome, UserListView,
};

/// Run the org list command
pub async fn list(ctx: &CommandContext, search: Option<&str>) -> Result<()> {
    let view = OrganizationListView::open(ctx.client.clone()).await;
    if let Some(banner) = view.banner() {
        return Err(report::banner(banner));
    }

    let matched = view.search(search.unwrap_or_default());
    debug!(
        "{} of {} organizations match",
        matched.len(),
        view.organizations().len()
    );

    let rows: Vec<OrgDisplay> = matched.into_iter().map(OrgDisplay::from).collect();
    output::print(&rows, ctx.format)
}

/// Run the org get command: the record plus the users that belong to it
pub async fn get(ctx: &CommandContext, id: &str) -> Result<()> {
    let id = RecordId::new(id);
    let org = ctx.client.get_organization(&id).await?;

    let mut members = UserListView::new(ctx.client.clone());
    members.load_for_organization(&org).await;
    if let Some(banner) = members.banner() {
        return Err(report::banner(banner));
    }

    match ctx.format {
        OutputFormat::Table => {
            println!(
                "{}",
                table::format_details(&[
                    ("ID", org.id.to_string()),
                    ("Name", org.name.clone()),
                    ("Address", org.address.clone()),
                    ("Users", org.user_count.to_string()),
                    ("Created", format_timestamp_local(&org.created_at)),
                ])
            );
            println!();
            println!("{}", "Users".bold());
            let rows: Vec<UserDisplay> = members.users().iter().map(UserDisplay::from).collect();
            println!("{}", table::format_table(&rows));
        }
        OutputFormat::Json => {
            let detail = serde_json::json!({
                "organization": org,
                "users": members.users(),
            });
            println!("{}", json::format_json(&detail)?);
        }
    }

    Ok(())
}

/// Run the org create command
pub async fn create(ctx: &CommandContext, name: &str, address: &str) -> Result<()> {
    let mut form = OrganizationForm::create(ctx.client.clone());
    form.set(OrganizationField::Name, name);
    form.set(OrganizationField::Address, address);
    submit(ctx, form).await
}

/// Run the org update command.
///
/// Fields not given keep their current values; the full record is sent.
pub async fn update(
    ctx: &CommandContext,
    id: &str,
    name: Option<&str>,
    address: Option<&str>,
) -> Result<()> {
    let mut form = OrganizationForm::edit(ctx.client.clone(), RecordId::new(id)).await;
    if let Some(banner) = form.banner() {
        return Err(report::banner(banner));
    }

    if let Some(name) = name {
        form.set(OrganizationField::Name, name);
    }
    if let Some(address) = address {
        form.set(OrganizationField::Address, address);
    }
    submit(ctx, form).await
}

async fn submit<C: OrganizationApi + ?Sized>(
    ctx: &CommandContext,
    mut form: OrganizationForm<C>,
) -> Result<()> {
    let verb = form.mode().verb();
    let outcome = form.submit().await;

    let org = match outcome {
        SubmitOutcome::Saved(org) => org,
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
                "{} {} organization {} ({})",
                "✓".green(),
                past,
                org.name.bold(),
                org.id
            );
        }
        OutputFormat::Json => println!("{}", json::format_json(&org)?),
    }
    Ok(())
}

/// Run the org delete command.
///
/// The backend removes the organization's users along with it; the prompt
/// says so before anything is sent.
pub async fn delete(ctx: &CommandContext, id: &str, yes: bool) -> Result<()> {
    let mut view = OrganizationListView::open(ctx.client.clone()).await;
    if let Some(banner) = view.banner() {
        return Err(report::banner(banner));
    }

    let outcome = view
        .delete(&RecordId::new(id), &PromptConfirm::new(yes))
        .await?;
    report::deleted(outcome, |org| format!("organization {}", org.name.bold()))
}
