//! TUI module for the interactive terminal interface
//!
//! - `triage` - the Customer Portal / Admin Dashboard app
//! - `components` - shared building blocks (header, footer, banners, modals)

pub mod components;
pub mod theme;
pub mod triage;

pub use theme::Theme;
pub use triage::{TriageTui, TriageTuiProps};
