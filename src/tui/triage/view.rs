//! Root triage TUI component
//!
//! Owns a single `TriageState`. Key presses become actions through the
//! keymap; the reducer's effects are handed to an async handler that runs
//! them against the backend and applies the outcomes to the same state.

#![allow(clippy::clone_on_copy)]

use iocraft::prelude::*;

use crate::backend::HttpBackend;
use crate::triage::{
    Effect, TriageState, ViewMode, apply_action, compute_view_model, drive_effects,
};
use crate::tui::components::{
    Banner, BannerLevel, Footer, Header, Shortcut, admin_shortcuts, alert_dialog_shortcuts,
    confirm_dialog_shortcuts, customer_shortcuts,
};
use crate::tui::theme::theme;

use super::admin_table::AdminDashboard;
use super::customer_form::CustomerForm;
use super::dialogs::{AlertDialog, ConfirmDialog};
use super::keymap::{KeyContext, key_to_action};

/// Props for the TriageTui component
#[derive(Default, Props)]
pub struct TriageTuiProps {
    pub backend: Option<HttpBackend>,
}

/// Footer shortcuts for the current state, dialogs first
pub fn compute_shortcuts(state: &TriageState) -> Vec<Shortcut> {
    if state.alert.is_some() {
        return alert_dialog_shortcuts();
    }
    if state.pending_resolve.is_some() {
        return confirm_dialog_shortcuts();
    }
    match state.current_view {
        ViewMode::Customer => customer_shortcuts(),
        ViewMode::Admin => admin_shortcuts(),
    }
}

#[component]
pub fn TriageTui<'a>(props: &TriageTuiProps, mut hooks: Hooks) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();

    let theme = theme();

    let state: State<TriageState> = hooks.use_state(TriageState::new);

    // Runs backend work requested by the reducer and folds outcomes back in
    let effect_handler: Handler<Vec<Effect>> = hooks.use_async_handler({
        let backend = props.backend.clone();
        let state_setter = state.clone();

        move |effects: Vec<Effect>| {
            let backend = backend.clone();
            let mut state_setter = state_setter.clone();

            async move {
                let Some(backend) = backend else {
                    tracing::error!("no ticket backend configured");
                    return;
                };
                drive_effects(&backend, effects, |outcome| {
                    apply_action(&mut state_setter.write(), outcome)
                })
                .await;
            }
        }
    });

    hooks.use_terminal_events({
        let mut state = state.clone();
        let effect_handler = effect_handler.clone();

        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let ctx = KeyContext::from_state(&state.read());
                if let Some(action) = key_to_action(code, modifiers, &ctx) {
                    let effects = apply_action(&mut state.write(), action);
                    if !effects.is_empty() {
                        effect_handler.clone()(effects);
                    }
                }
            }
            _ => {}
        }
    });

    let snapshot = state.read().clone();

    if snapshot.should_exit {
        system.exit();
    }

    let vm = compute_view_model(&snapshot);
    let shortcuts = compute_shortcuts(&snapshot);
    let dialog_open = vm.alert.is_some() || vm.confirm_prompt.is_some();
    let refreshing = vm.admin.as_ref().is_some_and(|a| a.is_refreshing);

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            Header(
                title: Some(vm.title),
                other_view: Some(vm.current_view.toggle().title()),
                refreshing,
            )

            Banner(message: vm.error_banner.clone(), level: BannerLevel::Error)

            View(
                flex_grow: 1.0,
                width: 100pct,
                flex_direction: FlexDirection::Column,
            ) {
                CustomerForm(
                    form: vm.customer.clone(),
                    state: Some(state),
                    has_focus: !dialog_open,
                )
                AdminDashboard(admin: vm.admin.clone())
            }

            Footer(shortcuts)

            ConfirmDialog(confirm: vm.confirm_prompt.clone())
            AlertDialog(message: vm.alert.clone())
        }
    }
}
