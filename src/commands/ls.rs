use owo_colors::OwoColorize;
use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{controller, fail_on_error, format_priority, format_stats, print_json, stats_json};
use crate::error::Result;
use crate::triage::{AdminRows, ViewMode, compute_view_model};

/// A row in the open-ticket table
#[derive(Tabled)]
struct TicketTableRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Message")]
    message: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Created")]
    created: String,
}

const MESSAGE_PREVIEW_CHARS: usize = 60;

fn preview(message: &str) -> String {
    let first_line = message.lines().next().unwrap_or_default();
    if first_line.chars().count() > MESSAGE_PREVIEW_CHARS {
        let cut: String = first_line.chars().take(MESSAGE_PREVIEW_CHARS - 3).collect();
        format!("{cut}...")
    } else {
        first_line.to_string()
    }
}

/// List open tickets with the resolved/unresolved counts
pub async fn cmd_ls(api_url: Option<&str>, json: bool) -> Result<()> {
    let mut controller = controller(api_url)?;
    controller.switch_view(ViewMode::Admin).await;

    let state = controller.state();
    fail_on_error(state)?;

    if json {
        return print_json(&json!({
            "stats": stats_json(&state.stats),
            "tickets": state.tickets,
        }));
    }

    println!("{}", format_stats(&state.stats));
    println!();

    let Some(admin) = compute_view_model(state).admin else {
        return Ok(());
    };

    match admin.rows {
        AdminRows::Placeholder(text) => println!("{}", text.dimmed()),
        AdminRows::Tickets(rows) => {
            let rows: Vec<TicketTableRow> = state
                .tickets
                .iter()
                .zip(rows)
                .map(|(ticket, row)| TicketTableRow {
                    id: row.id_label.cyan().to_string(),
                    message: preview(&row.message),
                    category: row.category,
                    priority: format_priority(&ticket.priority),
                    created: ticket.created_at.clone().unwrap_or_else(|| "-".to_string()),
                })
                .collect();

            let mut table = Table::new(rows);
            table.with(Style::rounded());
            println!("{table}");
        }
    }

    Ok(())
}

/// Print the resolved/unresolved counts
pub async fn cmd_stats(api_url: Option<&str>, json: bool) -> Result<()> {
    let mut controller = controller(api_url)?;
    controller.switch_view(ViewMode::Admin).await;

    let state = controller.state();
    fail_on_error(state)?;

    if json {
        print_json(&stats_json(&state.stats))
    } else {
        println!("{}", format_stats(&state.stats));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_message() {
        assert_eq!(preview("Printer on fire"), "Printer on fire");
    }

    #[test]
    fn test_preview_uses_first_line_and_truncates() {
        assert_eq!(preview("first\nsecond"), "first");
        let long = "x".repeat(100);
        let p = preview(&long);
        assert_eq!(p.chars().count(), MESSAGE_PREVIEW_CHARS);
        assert!(p.ends_with("..."));
    }
}
