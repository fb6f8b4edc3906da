//! Key-to-action mapping for the triage TUI
//!
//! Converts raw `(KeyCode, KeyModifiers)` pairs into `TriageAction`s, taking
//! the active view and any open dialog into account so each key press
//! resolves to at most one action.

use iocraft::prelude::{KeyCode, KeyModifiers};

use crate::triage::{TriageAction, TriageState, ViewMode};
use crate::types::TicketId;

/// Read-only snapshot of what the key mapper needs to know
#[derive(Debug, Clone, Default)]
pub struct KeyContext {
    pub view: ViewMode,
    pub alert_active: bool,
    pub confirm_active: bool,
    pub success_visible: bool,
    pub selected_ticket: Option<TicketId>,
}

impl KeyContext {
    pub fn from_state(state: &TriageState) -> Self {
        Self {
            view: state.current_view,
            alert_active: state.alert.is_some(),
            confirm_active: state.pending_resolve.is_some(),
            success_visible: state.success_msg.is_some(),
            selected_ticket: state.selected_ticket().map(|t| t.id),
        }
    }
}

/// Map a raw key event to a `TriageAction`.
///
/// Returns `None` when the key has no mapping in the current context, which
/// lets the focused text input handle it (typing into the draft).
pub fn key_to_action(
    code: KeyCode,
    modifiers: KeyModifiers,
    ctx: &KeyContext,
) -> Option<TriageAction> {
    // Dialogs capture every key
    if ctx.alert_active {
        return alert_key(code);
    }
    if ctx.confirm_active {
        return confirm_key(code);
    }

    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('q') {
        return Some(TriageAction::Quit);
    }
    if code == KeyCode::Tab || code == KeyCode::BackTab {
        return Some(TriageAction::ToggleView);
    }

    match ctx.view {
        ViewMode::Customer => customer_key(code, modifiers, ctx),
        ViewMode::Admin => admin_key(code, ctx),
    }
}

fn alert_key(code: KeyCode) -> Option<TriageAction> {
    match code {
        KeyCode::Enter | KeyCode::Esc => Some(TriageAction::DismissAlert),
        _ => None,
    }
}

fn confirm_key(code: KeyCode) -> Option<TriageAction> {
    match code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            Some(TriageAction::ConfirmResolve)
        }
        KeyCode::Char('n')
        | KeyCode::Char('N')
        | KeyCode::Char('c')
        | KeyCode::Char('C')
        | KeyCode::Esc => Some(TriageAction::CancelResolve),
        _ => None,
    }
}

fn customer_key(code: KeyCode, modifiers: KeyModifiers, ctx: &KeyContext) -> Option<TriageAction> {
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('s') {
        return Some(TriageAction::Submit);
    }
    match code {
        KeyCode::Esc if ctx.success_visible => Some(TriageAction::DismissSuccess),
        KeyCode::Esc => Some(TriageAction::DismissError),
        // Everything else belongs to the draft input
        _ => None,
    }
}

fn admin_key(code: KeyCode, ctx: &KeyContext) -> Option<TriageAction> {
    match code {
        KeyCode::Char('j') | KeyCode::Down => Some(TriageAction::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(TriageAction::MoveUp),
        KeyCode::Char('r') => Some(TriageAction::Refresh),
        KeyCode::Enter | KeyCode::Char('x') => ctx.selected_ticket.map(TriageAction::RequestResolve),
        KeyCode::Esc => Some(TriageAction::DismissError),
        KeyCode::Char('q') => Some(TriageAction::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(view: ViewMode) -> KeyContext {
        KeyContext {
            view,
            ..Default::default()
        }
    }

    #[test]
    fn test_global_keys() {
        for view in [ViewMode::Customer, ViewMode::Admin] {
            assert_eq!(
                key_to_action(KeyCode::Char('q'), KeyModifiers::CONTROL, &ctx(view)),
                Some(TriageAction::Quit)
            );
            assert_eq!(
                key_to_action(KeyCode::Tab, KeyModifiers::NONE, &ctx(view)),
                Some(TriageAction::ToggleView)
            );
        }
    }

    #[test]
    fn test_customer_keys_leave_typing_to_input() {
        let c = ctx(ViewMode::Customer);
        assert_eq!(
            key_to_action(KeyCode::Char('s'), KeyModifiers::CONTROL, &c),
            Some(TriageAction::Submit)
        );
        // Plain letters, including admin bindings, go to the draft
        for ch in ['q', 'r', 'x', 'j'] {
            assert_eq!(key_to_action(KeyCode::Char(ch), KeyModifiers::NONE, &c), None);
        }
        assert_eq!(key_to_action(KeyCode::Enter, KeyModifiers::NONE, &c), None);
    }

    #[test]
    fn test_customer_escape_dismisses_feedback() {
        let mut c = ctx(ViewMode::Customer);
        assert_eq!(
            key_to_action(KeyCode::Esc, KeyModifiers::NONE, &c),
            Some(TriageAction::DismissError)
        );
        c.success_visible = true;
        assert_eq!(
            key_to_action(KeyCode::Esc, KeyModifiers::NONE, &c),
            Some(TriageAction::DismissSuccess)
        );
    }

    #[test]
    fn test_admin_keys() {
        let mut c = ctx(ViewMode::Admin);
        assert_eq!(
            key_to_action(KeyCode::Char('j'), KeyModifiers::NONE, &c),
            Some(TriageAction::MoveDown)
        );
        assert_eq!(
            key_to_action(KeyCode::Up, KeyModifiers::NONE, &c),
            Some(TriageAction::MoveUp)
        );
        assert_eq!(
            key_to_action(KeyCode::Char('r'), KeyModifiers::NONE, &c),
            Some(TriageAction::Refresh)
        );
        // Nothing to resolve without a selection
        assert_eq!(key_to_action(KeyCode::Enter, KeyModifiers::NONE, &c), None);

        c.selected_ticket = Some(12);
        assert_eq!(
            key_to_action(KeyCode::Char('x'), KeyModifiers::NONE, &c),
            Some(TriageAction::RequestResolve(12))
        );
    }

    #[test]
    fn test_confirm_dialog_captures_keys() {
        let c = KeyContext {
            view: ViewMode::Admin,
            confirm_active: true,
            selected_ticket: Some(1),
            ..Default::default()
        };
        assert_eq!(
            key_to_action(KeyCode::Char('y'), KeyModifiers::NONE, &c),
            Some(TriageAction::ConfirmResolve)
        );
        assert_eq!(
            key_to_action(KeyCode::Esc, KeyModifiers::NONE, &c),
            Some(TriageAction::CancelResolve)
        );
        assert_eq!(key_to_action(KeyCode::Char('r'), KeyModifiers::NONE, &c), None);
        assert_eq!(key_to_action(KeyCode::Tab, KeyModifiers::NONE, &c), None);
    }

    #[test]
    fn test_alert_takes_priority() {
        let c = KeyContext {
            view: ViewMode::Admin,
            alert_active: true,
            confirm_active: true,
            ..Default::default()
        };
        assert_eq!(
            key_to_action(KeyCode::Enter, KeyModifiers::NONE, &c),
            Some(TriageAction::DismissAlert)
        );
        assert_eq!(key_to_action(KeyCode::Char('y'), KeyModifiers::NONE, &c), None);
    }
}
