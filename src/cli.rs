use clap::{Parser, Subcommand};

use crate::types::TicketId;

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "Submit and triage support tickets")]
#[command(version)]
pub struct Cli {
    /// Ticket backend endpoint for this run (overrides config and TRIAGE_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the full-screen Customer Portal / Admin Dashboard (default)
    Tui,

    /// Submit a new ticket
    Submit {
        /// Describe the issue (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List open tickets with resolved/unresolved counts
    #[command(visible_alias = "list")]
    Ls {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show resolved/unresolved counts
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve an open ticket
    Resolve {
        /// Ticket ID
        id: TicketId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print one configuration value
    Get {
        /// Key: api_url or request_timeout
        key: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Set a configuration value
    Set {
        /// Key: api_url or request_timeout
        key: String,

        /// New value
        value: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
