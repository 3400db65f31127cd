//! Membership command implementations

use colored::Colorize;

use crate::cli::confirm::PromptConfirm;
use crate::cli::{CommandContext, OutputFormat};
use crate::client::MembershipApi;
use crate::client::models::{MembershipFilter, MembershipPayload, RecordId};
use crate::error::Result;
use crate::models::MembershipDisplay;
use crate::output::{self, json};
use crate::views::{Confirm, DeletePrompt};

/// Role given to new memberships when none is specified
pub const DEFAULT_MEMBERSHIP_ROLE: &str = "member";

/// Run the member list command
pub async fn list(ctx: &CommandContext, org: Option<&str>, user: Option<&str>) -> Result<()> {
    let filter = MembershipFilter {
        organization: org.map(RecordId::new),
        user: user.map(RecordId::new),
    };
    let memberships = ctx.client.list_memberships(&filter).await?;

    let rows: Vec<MembershipDisplay> = memberships.iter().map(MembershipDisplay::from).collect();
    output::print(&rows, ctx.format)
}

/// Run the member add command
pub async fn add(ctx: &CommandContext, user: &str, org: &str, role: Option<&str>) -> Result<()> {
    let payload = MembershipPayload {
        user: RecordId::new(user),
        organization: RecordId::new(org),
        role: role
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(DEFAULT_MEMBERSHIP_ROLE)
            .to_string(),
    };
    let membership = ctx.client.create_membership(&payload).await?;

    match ctx.format {
        OutputFormat::Table => println!(
            "{} Added user {} to organization {} as {} (membership {})",
            "✓".green(),
            membership.user,
            membership.organization,
            membership.role.bold(),
            membership.id
        ),
        OutputFormat::Json => println!("{}", json::format_json(&membership)?),
    }
    Ok(())
}

/// Run the member remove command
pub async fn remove(ctx: &CommandContext, id: &str, yes: bool) -> Result<()> {
    let id = RecordId::new(id);
    let prompt = DeletePrompt {
        subject: format!("membership {}", id),
        message: "Are you sure you want to remove this membership?".to_string(),
        cascade: None,
    };
    if !PromptConfirm::new(yes).confirm(&prompt)? {
        println!("{}", "Cancelled.".dimmed());
        return Ok(());
    }

    ctx.client.delete_membership(&id).await?;
    println!("{} Removed membership {}", "✓".green(), id);
    Ok(())
}
