//! Resolve confirmation and alert dialogs

use iocraft::prelude::*;

use crate::triage::ConfirmViewModel;
use crate::tui::components::{ModalBorderColor, ModalContainer, ModalOverlay};
use crate::tui::theme::theme;

/// Props for the ConfirmDialog component
#[derive(Default, Props)]
pub struct ConfirmDialogProps {
    pub confirm: Option<ConfirmViewModel>,
}

/// Asks the operator to confirm resolving a ticket
#[component]
pub fn ConfirmDialog(props: &ConfirmDialogProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(confirm) = props.confirm.clone() else {
        return element! { View() }.into_any();
    };

    element! {
        ModalOverlay {
            ModalContainer(
                border_color: Some(ModalBorderColor::Warning),
                title: Some(format!("Resolve ticket #{}", confirm.ticket_id)),
                footer_text: Some("[y]es / [n]o".to_string()),
            ) {
                Text(content: confirm.prompt, color: theme.text)
            }
        }
    }
    .into_any()
}

/// Props for the AlertDialog component
#[derive(Default, Props)]
pub struct AlertDialogProps {
    pub message: Option<String>,
}

/// Blocking notification that must be dismissed
#[component]
pub fn AlertDialog(props: &AlertDialogProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let Some(message) = props.message.clone() else {
        return element! { View() }.into_any();
    };

    element! {
        ModalOverlay {
            ModalContainer(
                border_color: Some(ModalBorderColor::Error),
                title: Some("Error".to_string()),
                footer_text: Some("Press Enter to close".to_string()),
            ) {
                Text(content: message, color: theme.text)
            }
        }
    }
    .into_any()
}
