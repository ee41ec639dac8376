pub mod commands;
pub mod config;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::cli::config::CliContext;

#[derive(Parser)]
#[command(name = "admin-console")]
#[command(about = "Admin console - command-line client for the admin API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Login to the admin API")]
    Login {
        #[arg(help = "Username")]
        username: String,
        #[arg(long, help = "Password (will prompt if not provided)")]
        password: Option<String>,
    },

    #[command(about = "Clear the local session")]
    Logout,

    #[command(about = "Show current user information")]
    Whoami,

    #[command(about = "Show the route table generated for the current session")]
    Routes {
        #[arg(long, help = "Run the router guard for this path instead")]
        check: Option<String>,
    },

    #[command(about = "Show the navigation menu tree for the current session")]
    Menus,

    #[command(about = "Role management")]
    Role {
        #[command(subcommand)]
        cmd: commands::resource::CrudCommands,
    },

    #[command(about = "Menu management")]
    Menu {
        #[command(subcommand)]
        cmd: commands::resource::CrudCommands,
    },

    #[command(about = "Admin user management")]
    User {
        #[command(subcommand)]
        cmd: commands::resource::CrudCommands,
    },

    #[command(about = "API registry management")]
    Api {
        #[command(subcommand)]
        cmd: commands::resource::CrudCommands,
    },

    #[command(about = "Role and user permissions")]
    Permission {
        #[command(subcommand)]
        cmd: commands::resource::PermissionCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    use commands::resource::{self, Resource};

    let output_format = OutputFormat::from_cli(&cli);
    let ctx = CliContext::from_config(crate::config::config())?;

    match cli.command {
        Commands::Login { username, password } => {
            commands::auth::login(&ctx, username, password, output_format).await
        }
        Commands::Logout => commands::auth::logout(&ctx, output_format).await,
        Commands::Whoami => commands::auth::whoami(&ctx, output_format).await,
        Commands::Routes { check } => commands::routes::routes(&ctx, check, output_format).await,
        Commands::Menus => commands::routes::menus(&ctx, output_format).await,
        Commands::Role { cmd } => resource::handle(&ctx, Resource::Role, cmd, output_format).await,
        Commands::Menu { cmd } => resource::handle(&ctx, Resource::Menu, cmd, output_format).await,
        Commands::User { cmd } => resource::handle(&ctx, Resource::User, cmd, output_format).await,
        Commands::Api { cmd } => resource::handle(&ctx, Resource::Api, cmd, output_format).await,
        Commands::Permission { cmd } => {
            resource::handle_permissions(&ctx, cmd, output_format).await
        }
    }
}
