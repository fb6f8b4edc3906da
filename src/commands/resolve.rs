use std::io::{self, BufRead, Write};

use owo_colors::OwoColorize;
use serde_json::json;

use super::{controller, fail_on_error, format_stats, print_json, stats_json};
use crate::error::{Result, TriageError};
use crate::triage::{AssumeYes, Confirm, TriageState, ViewMode};
use crate::types::TicketId;

/// Asks on stderr and reads a `y`/`yes` answer from stdin; anything else declines
pub struct StdinConfirm;

/// Whether a typed answer counts as approval
fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        eprint!("{} [y/N] ", prompt.yellow());
        let _ = io::stderr().flush();

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read confirmation");
                false
            }
        }
    }
}

/// Outcome of a confirmed resolve.
///
/// An alert means the backend refused the transition. Otherwise the ticket is
/// resolved, and a banner left behind can only come from the refetch that
/// follows, so the counts are from the previous snapshot (`Ok(true)`).
fn confirmed_outcome(state: &TriageState) -> Result<bool> {
    match &state.alert {
        Some(alert) => Err(TriageError::Other(alert.clone())),
        None => Ok(state.error.is_some()),
    }
}

/// Resolve a ticket after confirmation, then print the refreshed counts
pub async fn cmd_resolve(
    id: TicketId,
    yes: bool,
    api_url: Option<&str>,
    json: bool,
) -> Result<()> {
    let mut controller = controller(api_url)?;
    controller.switch_view(ViewMode::Admin).await;
    fail_on_error(controller.state())?;

    if !controller.state().tickets.iter().any(|t| t.id == id) {
        tracing::info!(ticket_id = id, "ticket is not in the open list");
    }

    let confirmed = if yes {
        controller.resolve_ticket(id, &AssumeYes).await
    } else {
        controller.resolve_ticket(id, &StdinConfirm).await
    };

    let state = controller.state();
    if !confirmed {
        if json {
            return print_json(&json!({
                "action": "resolve",
                "id": id,
                "resolved": false,
            }));
        }
        println!("{}", "Resolve cancelled.".dimmed());
        return Ok(());
    }

    let stale = confirmed_outcome(state)?;
    if let (true, Some(error)) = (stale, &state.error) {
        tracing::warn!(ticket_id = id, error = %error, "refresh after resolve failed");
    }

    if json {
        print_json(&json!({
            "action": "resolve",
            "id": id,
            "resolved": true,
            "stale": stale,
            "stats": stats_json(&state.stats),
        }))
    } else {
        println!("Resolved ticket {}", format!("#{id}").cyan());
        if let (true, Some(error)) = (stale, &state.error) {
            eprintln!(
                "{} {}",
                "Warning: counts below are from before the resolve.".yellow(),
                error
            );
        }
        println!("{}", format_stats(&state.stats));
        Ok(())
    }
}
