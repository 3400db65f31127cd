//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::client::{AdminClient, OrganizationApi};
use crate::config::Config;
use crate::error::Result;

/// Run the init command
///
/// Prompts for the API URL and an optional token, checks that the backend
/// answers, and writes the config file.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to orgadmin!".bold().green());
    println!("Let's point orgadmin at your Organizations & Users service.\n");

    let mut config = Config::load_or_default_at(opts.config_ref())?;
    let theme = ColorfulTheme::default();

    let current_url = config.api_url(opts.api_url_ref());
    let api_url: String = Input::with_theme(&theme)
        .with_prompt("API base URL")
        .default(current_url)
        .interact_text()?;

    let token: String = Password::with_theme(&theme)
        .with_prompt("API token (leave empty for none)")
        .allow_empty_password(true)
        .interact()?;

    config.api_url = Some(api_url.trim().trim_end_matches('/').to_string());
    let token = token.trim();
    config.api_token = if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    };

    println!("\n{}", "Checking connection...".cyan());
    let client = AdminClient::new(config.client_options(None)?)?;
    match client.organization_stats().await {
        Ok(stats) => println!(
            "{} Connected ({} organizations)",
            "✓".green(),
            stats.total_organizations
        ),
        Err(e) => println!(
            "{} Could not reach the backend: {}\n  Saving anyway; re-run init once it is up.",
            "⚠".yellow(),
            e
        ),
    }

    config.save_at(opts.config_ref())?;
    let path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to {}",
        "✓".green(),
        path.display().to_string().cyan()
    );

    Ok(())
}
