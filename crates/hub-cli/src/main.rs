use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hub_infrastructure::bootstrap;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::console::ConsoleNotifier;

#[derive(Parser)]
#[command(name = "hub")]
#[command(about = "Metaverse Hub CLI - sessions, friends and active rooms", long_about = None)]
struct Cli {
    /// Directory holding config.toml and storage/ (defaults to the platform config dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in (unknown emails get a fresh account)
    Login {
        email: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Create a new account
    Signup {
        email: String,
        nickname: String,
        #[arg(long, default_value = "")]
        password: String,
    },
    /// Log out; active rooms are kept
    Logout,
    /// Show the current user
    Whoami,
    /// Change nickname and optionally avatar
    Profile {
        nickname: String,
        /// Image file to use as avatar for this session
        #[arg(long)]
        avatar: Option<PathBuf>,
    },
    /// List friends
    Friends,
    /// Search users that can be added as friends
    Search {
        #[arg(default_value = "")]
        term: String,
    },
    /// Add a friend by user id
    AddFriend { user_id: String },
    /// List maps, optionally by tag
    Maps {
        #[arg(long)]
        tag: Option<String>,
    },
    /// List spaces, optionally filtered
    Spaces {
        #[arg(default_value = "")]
        term: String,
        #[arg(long)]
        public: bool,
    },
    /// Enter a space, recording it as an active room
    Enter { space_id: String },
    /// List recently entered rooms
    Rooms,
    /// Admin panel access check
    Admin,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let runtime = bootstrap(cli.data_dir.as_deref(), Arc::new(ConsoleNotifier))
        .await
        .context("Failed to open hub storage")?;
    debug!("[Cli] Runtime ready (latency {:?})", runtime.config.latency());

    match cli.command {
        Commands::Login { email, password } => {
            commands::session::login(&runtime, &email, &password).await?
        }
        Commands::Signup {
            email,
            nickname,
            password,
        } => commands::session::signup(&runtime, &email, &password, &nickname).await?,
        Commands::Logout => commands::session::logout(&runtime).await?,
        Commands::Whoami => commands::session::whoami(&runtime).await,
        Commands::Profile { nickname, avatar } => {
            commands::session::profile(&runtime, &nickname, avatar.as_deref()).await?
        }
        Commands::Friends => commands::social::friends(&runtime).await,
        Commands::Search { term } => commands::social::search(&runtime, &term).await,
        Commands::AddFriend { user_id } => commands::social::add_friend(&runtime, &user_id).await,
        Commands::Admin => commands::social::admin(&runtime).await?,
        Commands::Maps { tag } => commands::spaces::maps(&runtime, tag.as_deref()).await?,
        Commands::Spaces { term, public } => {
            commands::spaces::spaces(&runtime, &term, public).await?
        }
        Commands::Enter { space_id } => commands::spaces::enter(&runtime, &space_id).await?,
        Commands::Rooms => commands::spaces::rooms(&runtime).await,
    }

    Ok(())
}
