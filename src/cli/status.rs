//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::client::{AdminClient, OrganizationApi};
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration and connectivity
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "orgadmin Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    let config = match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            println!("Config file: {}", config_path.display().to_string().cyan());
            config
        }
        Err(_) => {
            println!("{} Configuration not found", "○".dimmed());
            println!(
                "  → Run {} to create {}",
                "orgadmin init".cyan(),
                config_path.display()
            );
            Config::default()
        }
    };
    println!();

    let api_url = config.api_url(opts.api_url_ref());
    let source = if opts.api_url.is_some() {
        "(flag/environment)"
    } else if config.api_url.is_some() {
        "(config file)"
    } else {
        "(default)"
    };
    println!("{} API URL: {} {}", "✓".green(), api_url, source.dimmed());

    if config.api_token.is_some() {
        println!("{} API token configured", "✓".green());
    } else {
        println!("{} No API token (requests are sent unauthenticated)", "○".dimmed());
    }

    // Connectivity is informational only; an unreachable backend is not a failure
    let reachable = match config.client_options(opts.api_url_ref()) {
        Ok(options) => match AdminClient::new(options) {
            Ok(client) => client.organization_stats().await.map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        },
        Err(e) => Err(e.to_string()),
    };
    match reachable {
        Ok(stats) => println!(
            "{} Backend reachable ({} organizations)",
            "✓".green(),
            stats.total_organizations
        ),
        Err(e) => println!("{} Backend not reachable: {}", "✗".red(), e),
    }

    println!();
    Ok(())
}
