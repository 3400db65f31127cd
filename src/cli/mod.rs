//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod confirm;
pub mod context;
pub mod dashboard;
pub mod init;
pub mod member;
pub mod org;
pub mod report;
pub mod status;
pub mod user;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// orgadmin - manage organizations and their users from the terminal
#[derive(Parser, Debug)]
#[command(name = "orgadmin")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(long, global = true, env = "ORGADMIN_FORMAT", hide_env = true)]
    pub format: Option<OutputFormat>,

    /// API base URL, e.g. http://localhost:8000/api
    #[arg(long, global = true, env = "ORGADMIN_API_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Override config file location
    #[arg(long, global = true, env = "ORGADMIN_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "ORGADMIN_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize orgadmin configuration
    Init,

    /// Show configuration and backend status
    Status,

    /// Display version information
    Version,

    /// Show organization and user totals
    Dashboard,

    /// Manage organizations
    #[command(subcommand)]
    Org(OrgCommands),

    /// Manage users
    #[command(subcommand)]
    User(UserCommands),

    /// Manage explicit user/organization memberships
    #[command(subcommand)]
    Member(MemberCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   orgadmin completion bash > /etc/bash_completion.d/orgadmin
  zsh:    orgadmin completion zsh > \"${fpath[1]}/_orgadmin\"
  fish:   orgadmin completion fish > ~/.config/fish/completions/orgadmin.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Organization management subcommands
#[derive(Subcommand, Debug)]
pub enum OrgCommands {
    /// List organizations, newest first
    List {
        /// Case-insensitive match on name or address
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Show one organization and its users
    Get {
        /// Organization ID
        id: String,
    },

    /// Create an organization
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        address: String,
    },

    /// Update an organization; omitted fields keep their values
    Update {
        /// Organization ID
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        address: Option<String>,
    },

    /// Delete an organization and all of its users
    Delete {
        /// Organization ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// User management subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List users, newest first
    List {
        /// Case-insensitive match on name or email
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Only users of this organization ID
        #[arg(long)]
        org: Option<String>,
    },

    /// Show one user
    Get {
        /// User ID
        id: String,
    },

    /// Create a user
    Create {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// admin, manager, employee or intern (default: employee)
        #[arg(long)]
        role: Option<String>,

        /// Organization ID
        #[arg(long)]
        org: Option<String>,
    },

    /// Update a user; omitted fields keep their values
    Update {
        /// User ID
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        role: Option<String>,

        /// Move the user to this organization ID
        #[arg(long, conflicts_with = "no_org")]
        org: Option<String>,

        /// Remove the user from their organization
        #[arg(long)]
        no_org: bool,
    },

    /// Delete a user
    Delete {
        /// User ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Membership subcommands
#[derive(Subcommand, Debug)]
pub enum MemberCommands {
    /// List memberships
    List {
        /// Only memberships of this organization ID
        #[arg(long)]
        org: Option<String>,

        /// Only memberships of this user ID
        #[arg(long)]
        user: Option<String>,
    },

    /// Add a user to an organization
    Add {
        /// User ID
        #[arg(long)]
        user: String,

        /// Organization ID
        #[arg(long)]
        org: String,

        /// Membership role (default: member)
        #[arg(long)]
        role: Option<String>,
    },

    /// Remove a membership
    Remove {
        /// Membership ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}
