//! Dashboard command implementation

use colored::Colorize;

use crate::cli::{CommandContext, OutputFormat, report};
use crate::error::Result;
use crate::models::{RoleCountDisplay, headline};
use crate::output::{json, table};
use crate::views::Dashboard;

/// Run the dashboard command
pub async fn run(ctx: &CommandContext) -> Result<()> {
    let dashboard = Dashboard::open(ctx.client.clone()).await;
    let Some(summary) = dashboard.summary() else {
        let banner = dashboard.banner().unwrap_or_default();
        return Err(report::banner(banner));
    };

    match ctx.format {
        OutputFormat::Table => {
            println!("{}", "Dashboard".bold());
            println!("{}", table::format_table(&headline(summary)));

            let roles: Vec<RoleCountDisplay> = summary
                .users_by_role
                .iter()
                .map(RoleCountDisplay::from)
                .collect();
            if !roles.is_empty() {
                println!();
                println!("{}", "Users by Role".bold());
                println!("{}", table::format_table(&roles));
            }
        }
        OutputFormat::Json => println!("{}", json::format_json(summary)?),
    }

    Ok(())
}
