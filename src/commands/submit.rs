use owo_colors::OwoColorize;
use serde_json::json;

use super::{controller, fail_on_error, print_json};
use crate::error::Result;

/// Submit a new ticket from the command line
pub async fn cmd_submit(message: &str, api_url: Option<&str>, json: bool) -> Result<()> {
    let mut controller = controller(api_url)?;
    controller.submit_ticket(message).await;

    let state = controller.state();
    fail_on_error(state)?;

    let success = state.success_msg.clone().unwrap_or_default();
    if json {
        print_json(&json!({
            "action": "submit",
            "success": true,
            "message": success,
        }))
    } else {
        println!("{}", success.green());
        Ok(())
    }
}
