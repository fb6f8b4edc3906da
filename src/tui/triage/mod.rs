//! Triage TUI: Customer Portal and Admin Dashboard in one full-screen app

pub mod admin_table;
pub mod customer_form;
pub mod dialogs;
pub mod keymap;
pub mod view;


pub use view::{TriageTui, TriageTuiProps, compute_shortcuts};
