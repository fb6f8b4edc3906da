//! Runs triage actions against a ticket backend.
//!
//! The reducer in [`super::model`] decides what should happen; this module
//! performs the backend calls it asks for and feeds the outcomes back in as
//! actions until no work remains.

use std::collections::VecDeque;

use crate::backend::TicketBackend;
use crate::error::TriageError;
use crate::types::{NewTicket, TicketId};

use super::model::{Effect, TriageAction, apply_action};
use super::state::{RESOLVE_CONFIRM_PROMPT, RESOLVE_FAILED, SUBMIT_FAILED, TriageState, ViewMode};

/// Asks the operator to approve an irreversible action
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Approves every prompt without asking
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// User-facing reason for a failed request: the server's own message when it sent one
fn failure_reason(err: &TriageError, fallback: &str) -> String {
    err.server_message().unwrap_or(fallback).to_string()
}

/// Perform one effect and report its outcome as an action
pub async fn run_effect<B: TicketBackend>(backend: &B, effect: Effect) -> TriageAction {
    match effect {
        Effect::FetchTickets => match backend.list_tickets().await {
            Ok(tickets) => {
                tracing::debug!(count = tickets.len(), "fetched tickets");
                TriageAction::TicketsFetched(tickets)
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch tickets");
                TriageAction::FetchFailed
            }
        },
        Effect::CreateTicket(customer_message) => {
            let body = NewTicket { customer_message };
            match backend.create_ticket(&body).await {
                Ok(()) => TriageAction::SubmitSucceeded,
                Err(e) => {
                    tracing::warn!(error = %e, "failed to submit ticket");
                    TriageAction::SubmitFailed(failure_reason(&e, SUBMIT_FAILED))
                }
            }
        }
        Effect::ResolveTicket(id) => match backend.resolve_ticket(id).await {
            Ok(()) => {
                tracing::info!(ticket_id = id, "resolved ticket");
                TriageAction::ResolveSucceeded
            }
            Err(e) => {
                tracing::warn!(ticket_id = id, error = %e, "failed to resolve ticket");
                TriageAction::ResolveFailed(failure_reason(&e, RESOLVE_FAILED))
            }
        },
    }
}

/// Run effects in order, applying each outcome and queueing whatever it requests.
///
/// `apply` is the caller's way into its state, so the same loop serves the
/// controller and the TUI's shared state handle.
pub async fn drive_effects<B, F>(backend: &B, effects: Vec<Effect>, mut apply: F)
where
    B: TicketBackend,
    F: FnMut(TriageAction) -> Vec<Effect>,
{
    let mut queue: VecDeque<Effect> = effects.into();
    while let Some(effect) = queue.pop_front() {
        let outcome = run_effect(backend, effect).await;
        queue.extend(apply(outcome));
    }
}

/// Owns the triage state and the backend it talks to
pub struct TriageController<B> {
    state: TriageState,
    backend: B,
}

impl<B: TicketBackend> TriageController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            state: TriageState::new(),
            backend,
        }
    }

    pub fn state(&self) -> &TriageState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Apply an action and run every backend call it leads to
    pub async fn dispatch(&mut self, action: TriageAction) {
        let effects = apply_action(&mut self.state, action);
        let state = &mut self.state;
        drive_effects(&self.backend, effects, |outcome| apply_action(state, outcome)).await;
    }

    /// Show a view; entering the dashboard loads the ticket list
    pub async fn switch_view(&mut self, view: ViewMode) {
        self.dispatch(TriageAction::SwitchView(view)).await;
    }

    /// Reload the ticket list and counts
    pub async fn fetch_tickets(&mut self) {
        self.dispatch(TriageAction::Refresh).await;
    }

    /// Submit a new ticket with the given message
    pub async fn submit_ticket(&mut self, message: &str) {
        self.dispatch(TriageAction::UpdateDraft(message.to_string()))
            .await;
        self.dispatch(TriageAction::Submit).await;
    }

    /// Resolve a ticket once the operator confirms.
    ///
    /// Returns whether the operator confirmed. Declining leaves the state
    /// untouched and sends nothing.
    pub async fn resolve_ticket(&mut self, id: TicketId, confirm: &impl Confirm) -> bool {
        self.dispatch(TriageAction::RequestResolve(id)).await;
        if confirm.confirm(RESOLVE_CONFIRM_PROMPT) {
            self.dispatch(TriageAction::ConfirmResolve).await;
            true
        } else {
            self.dispatch(TriageAction::CancelResolve).await;
            false
        }
    }
}
