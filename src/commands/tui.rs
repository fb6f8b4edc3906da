use iocraft::prelude::*;

use crate::backend::HttpBackend;
use crate::config::Config;
use crate::error::{Result, TriageError};
use crate::logging::init_tui_logging;
use crate::tui::TriageTui;

/// Full-screen Customer Portal / Admin Dashboard
pub async fn cmd_tui(api_url: Option<&str>) -> Result<()> {
    let log_path = init_tui_logging()?;

    let config = Config::load()?;
    let backend = HttpBackend::from_config(&config, api_url)?;
    tracing::info!(url = backend.base_url(), log = %log_path.display(), "starting triage TUI");

    element!(TriageTui(backend: Some(backend)))
        .fullscreen()
        .await
        .map_err(|e| TriageError::Tui(e.to_string()))
}
