use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod logging;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Roster CLI - browse and manage saved sessions", long_about = None)]
struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the sessions/ folder (overrides config)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Also write daily-rotated logs into this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Print the resulting view-state as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one page of sessions
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Show the most recent sessions and the total count
    Recent,
    /// Create a new session
    New { title: String },
    /// Delete a session
    Delete { id: String },
    /// Star a session (or unstar it with --off)
    Star {
        id: String,
        #[arg(long)]
        off: bool,
    },
    /// Rename a session
    Rename { id: String, title: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init(cli.log_dir.as_deref())?;

    let context = commands::AppContext::load(cli.config, cli.data_dir).await?;
    let output = commands::Output { json: cli.json };

    match cli.command {
        Commands::List { page } => commands::sessions::list(&context, page, output).await,
        Commands::Recent => commands::sessions::recent(&context, output).await,
        Commands::New { title } => commands::sessions::create(&context, title, output).await,
        Commands::Delete { id } => commands::sessions::delete(&context, id, output).await,
        Commands::Star { id, off } => commands::sessions::star(&context, id, !off, output).await,
        Commands::Rename { id, title } => {
            commands::sessions::rename(&context, id, title, output).await
        }
    }
}
