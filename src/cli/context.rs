//! Command execution context
//!
//! Provides a unified context for command execution, eliminating boilerplate
//! for config loading and client initialization.

use std::sync::Arc;

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::{AdminApi, AdminClient};
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config, client, and runtime options.
pub struct CommandContext {
    /// Loaded configuration (defaults when no file exists)
    pub config: Config,
    /// API client, Arc-wrapped so views can share it
    pub client: Arc<dyn AdminApi>,
    /// Resolved output format
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// A missing config file is not an error: the API URL may come from
    /// `--api-url` or the environment, and otherwise falls back to the
    /// local development server.
    ///
    /// # Errors
    /// Returns error if the config file is unreadable or the API URL is invalid.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_or_default_at(opts.config_ref())?;
        let format = opts.resolve_format(&config);

        let client = AdminClient::new(config.client_options(opts.api_url_ref())?)?;
        debug!("Using API at {}", client.base_url());
        let client: Arc<dyn AdminApi> = Arc::new(client);

        Ok(Self {
            config,
            client,
            format,
        })
    }
}
