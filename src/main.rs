//! orgadmin - command-line client for the Organizations & Users service

use clap::{CommandFactory, Parser};
use log::LevelFilter;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod views;

use cli::args::GlobalOptions;
use cli::user::UserChanges;
use cli::{Cli, CommandContext, Commands, MemberCommands, OrgCommands, UserCommands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    );
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts).await,
        Commands::Version => {
            println!("orgadmin version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Completion { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "orgadmin",
                &mut std::io::stdout(),
            );
            Ok(())
        }
        Commands::Dashboard => {
            let ctx = CommandContext::new(&opts)?;
            cli::dashboard::run(&ctx).await
        }
        Commands::Org(cmd) => {
            let ctx = CommandContext::new(&opts)?;
            match cmd {
                OrgCommands::List { search } => cli::org::list(&ctx, search.as_deref()).await,
                OrgCommands::Get { id } => cli::org::get(&ctx, &id).await,
                OrgCommands::Create { name, address } => {
                    cli::org::create(&ctx, &name, &address).await
                }
                OrgCommands::Update { id, name, address } => {
                    cli::org::update(&ctx, &id, name.as_deref(), address.as_deref()).await
                }
                OrgCommands::Delete { id, yes } => cli::org::delete(&ctx, &id, yes).await,
            }
        }
        Commands::User(cmd) => {
            let ctx = CommandContext::new(&opts)?;
            match cmd {
                UserCommands::List { search, org } => {
                    cli::user::list(&ctx, search.as_deref(), org.as_deref()).await
                }
                UserCommands::Get { id } => cli::user::get(&ctx, &id).await,
                UserCommands::Create {
                    name,
                    email,
                    role,
                    org,
                } => {
                    cli::user::create(&ctx, &name, &email, role.as_deref(), org.as_deref()).await
                }
                UserCommands::Update {
                    id,
                    name,
                    email,
                    role,
                    org,
                    no_org,
                } => {
                    let changes = UserChanges {
                        name: name.as_deref(),
                        email: email.as_deref(),
                        role: role.as_deref(),
                        org: org.as_deref(),
                        no_org,
                    };
                    cli::user::update(&ctx, &id, changes).await
                }
                UserCommands::Delete { id, yes } => cli::user::delete(&ctx, &id, yes).await,
            }
        }
        Commands::Member(cmd) => {
            let ctx = CommandContext::new(&opts)?;
            match cmd {
                MemberCommands::List { org, user } => {
                    cli::member::list(&ctx, org.as_deref(), user.as_deref()).await
                }
                MemberCommands::Add { user, org, role } => {
                    cli::member::add(&ctx, &user, &org, role.as_deref()).await
                }
                MemberCommands::Remove { id, yes } => cli::member::remove(&ctx, &id, yes).await,
            }
        }
    }
}
