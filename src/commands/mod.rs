mod config;
mod ls;
mod resolve;
mod submit;
mod tui;

pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use ls::{cmd_ls, cmd_stats};
pub use resolve::{StdinConfirm, cmd_resolve};
pub use submit::cmd_submit;
pub use tui::cmd_tui;

use owo_colors::OwoColorize;
use serde_json::json;

use crate::backend::HttpBackend;
use crate::config::Config;
use crate::error::{Result, TriageError};
use crate::triage::state::EMPTY_MESSAGE_ERROR;
use crate::triage::{TriageController, TriageState};
use crate::types::{PriorityColor, TicketPriority, TicketStats};

/// Build a controller for the configured backend, honouring `--api-url`
pub fn controller(api_url: Option<&str>) -> Result<TriageController<HttpBackend>> {
    let config = Config::load()?;
    let backend = HttpBackend::from_config(&config, api_url)?;
    tracing::debug!(url = backend.base_url(), "using ticket backend");
    Ok(TriageController::new(backend))
}

/// Turn the error banner left by an operation into a command failure
pub fn fail_on_error(state: &TriageState) -> Result<()> {
    match state.error.as_deref() {
        None => Ok(()),
        Some(EMPTY_MESSAGE_ERROR) => Err(TriageError::Validation(EMPTY_MESSAGE_ERROR.to_string())),
        Some(message) => Err(TriageError::Other(message.to_string())),
    }
}

/// Pretty-print a JSON value to stdout
pub fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// JSON shape for counts
pub fn stats_json(stats: &TicketStats) -> serde_json::Value {
    json!({
        "resolved": stats.resolved,
        "unresolved": stats.unresolved,
    })
}

/// One-line summary of the counts
pub fn format_stats(stats: &TicketStats) -> String {
    format!(
        "{} unresolved, {} resolved",
        stats.unresolved.to_string().yellow(),
        stats.resolved.to_string().green()
    )
}

/// Priority label in its display color
pub fn format_priority(priority: &TicketPriority) -> String {
    let label = priority.as_str();
    match priority.color() {
        PriorityColor::Red => label.red().bold().to_string(),
        PriorityColor::Orange => label.truecolor(255, 165, 0).to_string(),
        PriorityColor::Green => label.green().to_string(),
        PriorityColor::Gray => label.dimmed().to_string(),
    }
}
