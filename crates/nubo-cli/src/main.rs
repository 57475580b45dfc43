use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

mod commands;
mod context;
mod logging;

use context::AppContext;

#[derive(Parser)]
#[command(name = "nubo")]
#[command(about = "nubo - session and ETF order listing tools", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Keep config and storage under this directory instead of the user's
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    /// Skip the public IP lookup during login
    #[arg(long, global = true)]
    pub offline: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Path originally requested, used to pick the landing page
        #[arg(long)]
        from: Option<String>,
    },
    /// End the current session
    Logout,
    /// Show the current session
    Whoami,
    /// Check whether a path may be opened in the current session
    Guard { path: String },
    /// List ETF orders (requires a session)
    Orders(commands::orders::OrdersArgs),
    /// Show the navigation menu or the breadcrumbs of a path
    Menu {
        #[arg(long)]
        path: Option<String>,
    },
    /// Show dashboard cards, optionally after a drag-reorder
    Cards {
        /// Card being dragged
        #[arg(long = "move", requires = "over")]
        active: Option<String>,
        /// Card it was dropped on
        #[arg(long)]
        over: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;

    match cli.command {
        Commands::Login {
            email,
            password,
            from,
        } => {
            let ctx = AppContext::build(&cli.global).await?;
            commands::session::login(&ctx, &email, &password, from.as_deref()).await?
        }
        Commands::Logout => commands::session::logout(&AppContext::build(&cli.global).await?).await?,
        Commands::Whoami => commands::session::whoami(&AppContext::build(&cli.global).await?).await?,
        Commands::Guard { path } => {
            let ctx = AppContext::build(&cli.global).await?;
            commands::session::guard(&ctx, &path).await?
        }
        Commands::Orders(args) => {
            let ctx = AppContext::build(&cli.global).await?;
            commands::orders::list(&ctx, &args).await?
        }
        Commands::Menu { path } => commands::menu::show(path.as_deref())?,
        Commands::Cards { active, over } => {
            commands::menu::cards(active.as_deref(), over.as_deref())?
        }
    }

    Ok(())
}
