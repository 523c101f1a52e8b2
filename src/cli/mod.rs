use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

pub mod chat;
pub mod guide;
pub mod init;
pub mod serve;
pub mod session;

use crate::core::AppConfig;
use crate::reference::emergency::Severity;

#[derive(Subcommand)]
pub enum SessionAction {
    /// Show who is signed in
    Status,
    /// Sign in with an email address
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account and sign in
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out
    Logout,
}

#[derive(Subcommand)]
pub enum GuideTopic {
    /// Print emergency cards and contacts
    Emergency {
        /// Show a single card
        #[arg(long)]
        id: Option<String>,
        #[arg(long, value_enum)]
        category: Option<Severity>,
    },
    /// List expert articles
    Articles {
        #[arg(long)]
        category: Option<String>,
    },
    /// Print the affirmation of the day
    Affirmation {
        /// Date as YYYY-MM-DD, defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[derive(Subcommand)]
enum Command {
    /// Initialize the database
    Init {
        #[arg(long, action, default_value = "false")]
        db: bool,
    },
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "3000")]
        port: String,
    },
    /// Chat with SnugBot
    Chat {},
    /// Manage the signed-in user
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },
    /// Browse the built-in guides
    Guide {
        #[command(subcommand)]
        topic: GuideTopic,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();
    let config = AppConfig::default();

    // Handle each sub command
    match args.command {
        Some(Command::Init { db }) => {
            init::run(db, &config.db_path).await?;
        }
        Some(Command::Serve { host, port }) => {
            serve::run(host, port, config).await?;
        }
        Some(Command::Chat {}) => {
            chat::run(&config).await?;
        }
        Some(Command::Session { action }) => {
            session::run(action, &config.session_path)?;
        }
        Some(Command::Guide { topic }) => {
            guide::run(topic);
        }
        None => {}
    }

    Ok(())
}
