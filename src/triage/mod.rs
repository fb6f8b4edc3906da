//! Client-side ticket triage: state, transitions and the controller that runs them.

pub mod controller;
pub mod model;
pub mod state;

pub use controller::{AssumeYes, Confirm, TriageController, drive_effects, run_effect};
pub use model::{
    AdminRows, AdminViewModel, ConfirmViewModel, CustomerViewModel, EMPTY_TICKETS_PLACEHOLDER,
    Effect, TicketRow, TriageAction, TriageViewModel, apply_action, compute_view_model,
    reduce_triage_state,
};
pub use state::{TriageState, ViewMode};
