//! Shared TUI components

pub mod banner;
pub mod footer;
pub mod header;
pub mod modal_container;
pub mod modal_overlay;
pub mod shortcuts;

pub use banner::{Banner, BannerLevel, BannerProps};
pub use footer::{
    Footer, FooterProps, Shortcut, admin_shortcuts, alert_dialog_shortcuts,
    confirm_dialog_shortcuts, customer_shortcuts,
};
pub use header::{Header, HeaderProps};
pub use modal_container::{ModalBorderColor, ModalContainer, ModalContainerProps};
pub use modal_overlay::{ModalOverlay, ModalOverlayProps};
pub use shortcuts::ShortcutsBuilder;
