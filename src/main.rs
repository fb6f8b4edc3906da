use clap::Parser;
use std::process::ExitCode;

use triage_desk::cli::{Cli, Commands, ConfigAction};
use triage_desk::commands::{
    cmd_config_get, cmd_config_set, cmd_config_show, cmd_ls, cmd_resolve, cmd_stats, cmd_submit,
    cmd_tui,
};
use triage_desk::logging::init_cli_logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let api_url = cli.api_url.as_deref();

    let command = cli.command.unwrap_or(Commands::Tui);
    if !matches!(command, Commands::Tui) {
        init_cli_logging();
    }

    let result = match command {
        Commands::Tui => cmd_tui(api_url).await,
        Commands::Submit { message, json } => cmd_submit(&message.join(" "), api_url, json).await,
        Commands::Ls { json } => cmd_ls(api_url, json).await,
        Commands::Stats { json } => cmd_stats(api_url, json).await,
        Commands::Resolve { id, yes, json } => cmd_resolve(id, yes, api_url, json).await,
        Commands::Config { action } => match action {
            ConfigAction::Show { json } => cmd_config_show(json),
            ConfigAction::Get { key, json } => cmd_config_get(&key, json),
            ConfigAction::Set { key, value, json } => cmd_config_set(&key, &value, json),
        },
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
