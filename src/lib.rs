pub mod backend;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod triage;
pub mod tui;
pub mod types;

pub use backend::{HttpBackend, TicketBackend};
pub use config::Config;
pub use error::{Result, TriageError};
pub use triage::{
    Confirm, Effect, TriageAction, TriageController, TriageState, ViewMode, compute_view_model,
    reduce_triage_state,
};
pub use types::{NewTicket, Ticket, TicketId, TicketPriority, TicketStats, TicketStatus};
