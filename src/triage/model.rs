//! Triage model types for testable state management
//!
//! This module separates state transitions (`reduce_triage_state`) from
//! rendering (`compute_view_model`) so every transition can be tested
//! without a terminal. Network I/O never happens here: the reducer returns
//! `Effect`s and the caller runs them.

use crate::types::{PriorityColor, Ticket, TicketId, TicketStats, partition_tickets};

use super::state::{
    CONNECTIVITY_ERROR, EMPTY_MESSAGE_ERROR, RESOLVE_CONFIRM_PROMPT, SUBMIT_SUCCESS, TriageState,
    ViewMode,
};

/// Placeholder row rendered when there are no open tickets
pub const EMPTY_TICKETS_PLACEHOLDER: &str = "No unresolved tickets right now!";

// ============================================================================
// Action Types
// ============================================================================

/// Everything that can happen to the triage state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriageAction {
    // View
    /// Show the given view; entering the dashboard loads tickets
    SwitchView(ViewMode),
    /// Flip between the two views
    ToggleView,

    // Submission
    /// Replace the draft text
    UpdateDraft(String),
    /// Validate and send the draft
    Submit,
    /// The backend accepted the new ticket
    SubmitSucceeded,
    /// The create request failed with a user-facing message
    SubmitFailed(String),

    // Ticket list
    /// Reload the ticket list
    Refresh,
    /// A list request returned the full ticket set
    TicketsFetched(Vec<Ticket>),
    /// A list request failed
    FetchFailed,

    // Resolve
    /// Ask the operator to confirm resolving a ticket
    RequestResolve(TicketId),
    /// The operator confirmed the pending resolve
    ConfirmResolve,
    /// The operator declined the pending resolve
    CancelResolve,
    /// The backend resolved the ticket
    ResolveSucceeded,
    /// The resolve request failed with a reason
    ResolveFailed(String),

    // Navigation
    /// Move the dashboard cursor up one row
    MoveUp,
    /// Move the dashboard cursor down one row
    MoveDown,

    // Feedback
    DismissAlert,
    DismissError,
    DismissSuccess,

    /// Exit the application
    Quit,
}

/// Backend work requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// List all tickets
    FetchTickets,
    /// Create a ticket with this (already trimmed) message
    CreateTicket(String),
    /// Resolve this ticket
    ResolveTicket(TicketId),
}

// ============================================================================
// Reducer
// ============================================================================

/// Pure function: apply action to state (reducer pattern)
///
/// Returns the next state and the backend work the caller must perform.
/// Results of that work come back in as further actions.
pub fn reduce_triage_state(
    mut state: TriageState,
    action: TriageAction,
) -> (TriageState, Vec<Effect>) {
    let mut effects = Vec::new();

    match action {
        TriageAction::SwitchView(view) => enter_view(&mut state, view, &mut effects),
        TriageAction::ToggleView => {
            let view = state.current_view.toggle();
            enter_view(&mut state, view, &mut effects);
        }

        TriageAction::UpdateDraft(text) => {
            state.message = text;
        }
        TriageAction::Submit => {
            if state.loading {
                // One attempt per user action; the form is disabled meanwhile
            } else if state.message.trim().is_empty() {
                state.error = Some(EMPTY_MESSAGE_ERROR.to_string());
            } else {
                state.loading = true;
                state.error = None;
                state.success_msg = None;
                effects.push(Effect::CreateTicket(state.message.trim().to_string()));
            }
        }
        TriageAction::SubmitSucceeded => {
            state.loading = false;
            state.message.clear();
            state.success_msg = Some(SUBMIT_SUCCESS.to_string());
        }
        TriageAction::SubmitFailed(message) => {
            state.loading = false;
            state.error = Some(message);
        }

        TriageAction::Refresh => begin_fetch(&mut state, &mut effects),
        TriageAction::TicketsFetched(all) => {
            let (open, stats) = partition_tickets(all);
            state.tickets = open;
            state.stats = stats;
            state.fetches_in_flight = state.fetches_in_flight.saturating_sub(1);
            state.selected_index = clamp_selection(state.selected_index, state.tickets.len());
            if state.error.as_deref() == Some(CONNECTIVITY_ERROR) {
                state.error = None;
            }
        }
        TriageAction::FetchFailed => {
            state.fetches_in_flight = state.fetches_in_flight.saturating_sub(1);
            state.error = Some(CONNECTIVITY_ERROR.to_string());
        }

        TriageAction::RequestResolve(id) => {
            state.pending_resolve = Some(id);
        }
        TriageAction::ConfirmResolve => {
            if let Some(id) = state.pending_resolve.take() {
                effects.push(Effect::ResolveTicket(id));
            }
        }
        TriageAction::CancelResolve => {
            state.pending_resolve = None;
        }
        TriageAction::ResolveSucceeded => begin_fetch(&mut state, &mut effects),
        TriageAction::ResolveFailed(reason) => {
            state.alert = Some(format!("Error resolving ticket: {reason}"));
        }

        TriageAction::MoveUp => {
            state.selected_index = state.selected_index.saturating_sub(1);
        }
        TriageAction::MoveDown => {
            if !state.tickets.is_empty() {
                state.selected_index = (state.selected_index + 1).min(state.tickets.len() - 1);
            }
        }

        TriageAction::DismissAlert => state.alert = None,
        TriageAction::DismissError => state.error = None,
        TriageAction::DismissSuccess => state.success_msg = None,

        TriageAction::Quit => state.should_exit = true,
    }

    if !effects.is_empty() {
        tracing::debug!(?effects, "transition requested backend work");
    }

    (state, effects)
}

/// Apply an action in place, returning the effects to run
pub fn apply_action(state: &mut TriageState, action: TriageAction) -> Vec<Effect> {
    let (next, effects) = reduce_triage_state(std::mem::take(state), action);
    *state = next;
    effects
}

fn enter_view(state: &mut TriageState, view: ViewMode, effects: &mut Vec<Effect>) {
    let entering_admin = view == ViewMode::Admin && state.current_view != ViewMode::Admin;
    state.current_view = view;
    if entering_admin {
        begin_fetch(state, effects);
    }
}

fn begin_fetch(state: &mut TriageState, effects: &mut Vec<Effect>) {
    state.fetches_in_flight += 1;
    effects.push(Effect::FetchTickets);
}

fn clamp_selection(selected: usize, len: usize) -> usize {
    if len == 0 { 0 } else { selected.min(len - 1) }
}

// ============================================================================
// View Model Types
// ============================================================================

/// Everything a renderer needs, derived from state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageViewModel {
    pub current_view: ViewMode,
    pub title: &'static str,
    pub error_banner: Option<String>,
    pub customer: Option<CustomerViewModel>,
    pub admin: Option<AdminViewModel>,
    pub confirm_prompt: Option<ConfirmViewModel>,
    pub alert: Option<String>,
}

/// Submission form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerViewModel {
    pub draft: String,
    pub input_enabled: bool,
    pub submit_label: &'static str,
    pub success: Option<String>,
}

/// Dashboard with counts and the open-ticket table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminViewModel {
    pub stats: TicketStats,
    pub rows: AdminRows,
    pub is_refreshing: bool,
}

/// Table body: either ticket rows or a single placeholder row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminRows {
    Placeholder(&'static str),
    Tickets(Vec<TicketRow>),
}

/// One rendered ticket row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketRow {
    pub id: TicketId,
    pub id_label: String,
    pub message: String,
    pub category: String,
    pub priority: String,
    pub priority_color: PriorityColor,
    pub is_selected: bool,
}

/// Resolve confirmation dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmViewModel {
    pub ticket_id: TicketId,
    pub prompt: &'static str,
}

/// Pure function: derive the rendered views from state
pub fn compute_view_model(state: &TriageState) -> TriageViewModel {
    let customer = (state.current_view == ViewMode::Customer).then(|| CustomerViewModel {
        draft: state.message.clone(),
        input_enabled: !state.loading,
        submit_label: if state.loading {
            "Submitting..."
        } else {
            "Submit Ticket"
        },
        success: state.success_msg.clone(),
    });

    let admin = (state.current_view == ViewMode::Admin).then(|| AdminViewModel {
        stats: state.stats,
        rows: compute_admin_rows(state),
        is_refreshing: state.is_refreshing(),
    });

    TriageViewModel {
        current_view: state.current_view,
        title: state.current_view.title(),
        error_banner: state.error.clone(),
        customer,
        admin,
        confirm_prompt: state.pending_resolve.map(|ticket_id| ConfirmViewModel {
            ticket_id,
            prompt: RESOLVE_CONFIRM_PROMPT,
        }),
        alert: state.alert.clone(),
    }
}

fn compute_admin_rows(state: &TriageState) -> AdminRows {
    if state.tickets.is_empty() {
        return AdminRows::Placeholder(EMPTY_TICKETS_PLACEHOLDER);
    }

    AdminRows::Tickets(
        state
            .tickets
            .iter()
            .enumerate()
            .map(|(i, t)| TicketRow {
                id: t.id,
                id_label: format!("#{}", t.id),
                message: t.customer_message.clone(),
                category: t.category.clone(),
                priority: t.priority.to_string(),
                priority_color: t.priority.color(),
                is_selected: i == state.selected_index,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::state::SUBMIT_FAILED;
    use crate::types::{TicketPriority, TicketStatus};

    fn ticket(id: TicketId, status: TicketStatus, priority: TicketPriority) -> Ticket {
        Ticket {
            id,
            customer_message: format!("message {id}"),
            category: "BUG".to_string(),
            priority,
            status,
            created_at: None,
        }
    }

    fn open(id: TicketId) -> Ticket {
        ticket(id, TicketStatus::Open, TicketPriority::Normal)
    }

    fn resolved(id: TicketId) -> Ticket {
        ticket(id, TicketStatus::Resolved, TicketPriority::Normal)
    }

    fn admin_with(tickets: Vec<Ticket>) -> TriageState {
        let mut state = TriageState::new();
        apply_action(&mut state, TriageAction::SwitchView(ViewMode::Admin));
        apply_action(&mut state, TriageAction::TicketsFetched(tickets));
        state
    }

    // === View switching ===

    #[test]
    fn test_entering_admin_requests_one_fetch() {
        let (state, effects) =
            reduce_triage_state(TriageState::new(), TriageAction::SwitchView(ViewMode::Admin));
        assert_eq!(effects, vec![Effect::FetchTickets]);
        assert_eq!(state.current_view, ViewMode::Admin);
        assert!(state.is_refreshing());
    }

    #[test]
    fn test_staying_on_admin_does_not_refetch() {
        let mut state = admin_with(vec![]);
        let effects = apply_action(&mut state, TriageAction::SwitchView(ViewMode::Admin));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_customer_view_never_fetches() {
        let mut state = TriageState::new();
        assert!(apply_action(&mut state, TriageAction::SwitchView(ViewMode::Customer)).is_empty());

        let mut state = admin_with(vec![]);
        assert!(apply_action(&mut state, TriageAction::ToggleView).is_empty());
        assert_eq!(state.current_view, ViewMode::Customer);
    }

    #[test]
    fn test_round_trip_fetches_once_per_entry() {
        let mut state = TriageState::new();
        let mut fetches = 0;
        for view in [ViewMode::Admin, ViewMode::Customer, ViewMode::Admin] {
            fetches += apply_action(&mut state, TriageAction::SwitchView(view))
                .iter()
                .filter(|e| **e == Effect::FetchTickets)
                .count();
        }
        assert_eq!(fetches, 2);
    }

    // === Fetch ===

    #[test]
    fn test_fetch_partitions_snapshot() {
        let state = admin_with(vec![
            ticket(1, TicketStatus::Open, TicketPriority::High),
            resolved(2),
        ]);
        assert_eq!(state.tickets.len(), 1);
        assert_eq!(state.tickets[0].id, 1);
        assert_eq!(
            state.stats,
            TicketStats {
                resolved: 1,
                unresolved: 1
            }
        );
        assert!(!state.is_refreshing());
    }

    #[test]
    fn test_fetch_keeps_only_open_and_counts_match() {
        let state = admin_with(vec![open(5), resolved(1), open(3), resolved(4), open(9)]);
        assert!(state.tickets.iter().all(|t| t.status.is_open()));
        assert_eq!(state.stats.unresolved, state.tickets.len());
        let ids: Vec<TicketId> = state.tickets.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![5, 3, 9]);
    }

    #[test]
    fn test_fetch_failure_preserves_previous_snapshot() {
        let mut state = admin_with(vec![open(1), resolved(2)]);
        let before = (state.tickets.clone(), state.stats);

        apply_action(&mut state, TriageAction::Refresh);
        apply_action(&mut state, TriageAction::FetchFailed);

        assert_eq!((state.tickets.clone(), state.stats), before);
        assert_eq!(state.error.as_deref(), Some(CONNECTIVITY_ERROR));
        assert!(!state.is_refreshing());
    }

    #[test]
    fn test_successful_fetch_clears_connectivity_banner_only() {
        let mut state = TriageState::new();
        apply_action(&mut state, TriageAction::SwitchView(ViewMode::Admin));
        apply_action(&mut state, TriageAction::FetchFailed);
        apply_action(&mut state, TriageAction::Refresh);
        apply_action(&mut state, TriageAction::TicketsFetched(vec![open(1)]));
        assert!(state.error.is_none());

        state.error = Some(EMPTY_MESSAGE_ERROR.to_string());
        apply_action(&mut state, TriageAction::Refresh);
        apply_action(&mut state, TriageAction::TicketsFetched(vec![open(1)]));
        assert_eq!(state.error.as_deref(), Some(EMPTY_MESSAGE_ERROR));
    }

    #[test]
    fn test_later_fetch_response_wins() {
        let mut state = TriageState::new();
        apply_action(&mut state, TriageAction::SwitchView(ViewMode::Admin));
        apply_action(&mut state, TriageAction::Refresh);
        assert_eq!(state.fetches_in_flight, 2);

        apply_action(&mut state, TriageAction::TicketsFetched(vec![open(1), open(2)]));
        assert!(state.is_refreshing());
        apply_action(&mut state, TriageAction::TicketsFetched(vec![open(2)]));

        assert!(!state.is_refreshing());
        assert_eq!(state.tickets.len(), 1);
        assert_eq!(state.stats.unresolved, 1);
    }

    #[test]
    fn test_selection_clamped_after_list_shrinks() {
        let mut state = admin_with(vec![open(1), open(2), open(3)]);
        apply_action(&mut state, TriageAction::MoveDown);
        apply_action(&mut state, TriageAction::MoveDown);
        assert_eq!(state.selected_index, 2);

        apply_action(&mut state, TriageAction::Refresh);
        apply_action(&mut state, TriageAction::TicketsFetched(vec![open(1)]));
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn test_navigation_bounds() {
        let mut state = admin_with(vec![open(1), open(2)]);
        apply_action(&mut state, TriageAction::MoveUp);
        assert_eq!(state.selected_index, 0);
        apply_action(&mut state, TriageAction::MoveDown);
        apply_action(&mut state, TriageAction::MoveDown);
        assert_eq!(state.selected_index, 1);
        assert_eq!(state.selected_ticket().map(|t| t.id), Some(2));

        let mut empty = admin_with(vec![]);
        apply_action(&mut empty, TriageAction::MoveDown);
        assert_eq!(empty.selected_index, 0);
    }

    // === Submit ===

    #[test]
    fn test_whitespace_submission_is_rejected_locally() {
        let mut state = TriageState::new();
        apply_action(&mut state, TriageAction::UpdateDraft("   \n\t ".to_string()));
        let effects = apply_action(&mut state, TriageAction::Submit);

        assert!(effects.is_empty());
        assert_eq!(state.error.as_deref(), Some(EMPTY_MESSAGE_ERROR));
        assert!(!state.loading);
    }

    #[test]
    fn test_submit_sends_trimmed_message_and_clears_feedback() {
        let mut state = TriageState::new();
        state.error = Some("old".to_string());
        state.success_msg = Some("old".to_string());
        apply_action(&mut state, TriageAction::UpdateDraft("  checkout is broken  ".to_string()));

        let effects = apply_action(&mut state, TriageAction::Submit);

        assert_eq!(
            effects,
            vec![Effect::CreateTicket("checkout is broken".to_string())]
        );
        assert!(state.loading);
        assert!(state.error.is_none());
        assert!(state.success_msg.is_none());
    }

    #[test]
    fn test_submit_ignored_while_loading() {
        let mut state = TriageState::new();
        apply_action(&mut state, TriageAction::UpdateDraft("hello".to_string()));
        apply_action(&mut state, TriageAction::Submit);
        assert!(apply_action(&mut state, TriageAction::Submit).is_empty());
    }

    #[test]
    fn test_submit_success_clears_draft() {
        let mut state = TriageState::new();
        apply_action(&mut state, TriageAction::UpdateDraft("hello".to_string()));
        apply_action(&mut state, TriageAction::Submit);
        apply_action(&mut state, TriageAction::SubmitSucceeded);

        assert!(state.message.is_empty());
        assert_eq!(state.success_msg.as_deref(), Some(SUBMIT_SUCCESS));
        assert!(!state.loading);
    }

    #[test]
    fn test_submit_failure_keeps_draft() {
        let mut state = TriageState::new();
        apply_action(&mut state, TriageAction::UpdateDraft("hello".to_string()));
        apply_action(&mut state, TriageAction::Submit);
        apply_action(&mut state, TriageAction::SubmitFailed(SUBMIT_FAILED.to_string()));

        assert_eq!(state.message, "hello");
        assert_eq!(state.error.as_deref(), Some(SUBMIT_FAILED));
        assert!(state.success_msg.is_none());
        assert!(!state.loading);
    }

    // === Resolve ===

    #[test]
    fn test_declined_resolve_changes_nothing() {
        let before = admin_with(vec![open(1), open(2), resolved(3)]);
        let mut state = before.clone();

        assert!(apply_action(&mut state, TriageAction::RequestResolve(1)).is_empty());
        assert!(apply_action(&mut state, TriageAction::CancelResolve).is_empty());

        assert_eq!(state, before);
    }

    #[test]
    fn test_confirmed_resolve_requests_transition_then_refetch() {
        let mut state = admin_with(vec![open(1), open(2)]);
        apply_action(&mut state, TriageAction::RequestResolve(2));
        assert_eq!(state.pending_resolve, Some(2));

        let effects = apply_action(&mut state, TriageAction::ConfirmResolve);
        assert_eq!(effects, vec![Effect::ResolveTicket(2)]);
        assert!(state.pending_resolve.is_none());
        // no optimistic removal
        assert_eq!(state.tickets.len(), 2);

        let effects = apply_action(&mut state, TriageAction::ResolveSucceeded);
        assert_eq!(effects, vec![Effect::FetchTickets]);
    }

    #[test]
    fn test_confirm_without_pending_is_noop() {
        let mut state = admin_with(vec![open(1)]);
        assert!(apply_action(&mut state, TriageAction::ConfirmResolve).is_empty());
    }

    #[test]
    fn test_resolve_failure_raises_alert_and_keeps_list() {
        let mut state = admin_with(vec![open(1)]);
        apply_action(&mut state, TriageAction::RequestResolve(1));
        apply_action(&mut state, TriageAction::ConfirmResolve);
        let effects = apply_action(
            &mut state,
            TriageAction::ResolveFailed("Ticket is already resolved".to_string()),
        );

        assert!(effects.is_empty());
        assert_eq!(
            state.alert.as_deref(),
            Some("Error resolving ticket: Ticket is already resolved")
        );
        assert_eq!(state.tickets.len(), 1);

        apply_action(&mut state, TriageAction::DismissAlert);
        assert!(state.alert.is_none());
    }

    // === View model ===

    #[test]
    fn test_view_model_empty_admin_shows_placeholder() {
        let vm = compute_view_model(&admin_with(vec![]));
        let admin = vm.admin.expect("admin view");
        assert_eq!(admin.rows, AdminRows::Placeholder(EMPTY_TICKETS_PLACEHOLDER));
        assert_eq!(admin.stats, TicketStats::default());
        assert!(vm.customer.is_none());
    }

    #[test]
    fn test_view_model_rows_carry_priority_colors() {
        let state = admin_with(vec![
            ticket(1, TicketStatus::Open, TicketPriority::High),
            ticket(2, TicketStatus::Open, TicketPriority::Low),
            ticket(
                3,
                TicketStatus::Open,
                TicketPriority::Unrecognized("URGENT".to_string()),
            ),
        ]);
        let vm = compute_view_model(&state);
        let AdminRows::Tickets(rows) = vm.admin.expect("admin view").rows else {
            panic!("expected ticket rows");
        };
        let colors: Vec<PriorityColor> = rows.iter().map(|r| r.priority_color).collect();
        assert_eq!(
            colors,
            vec![PriorityColor::Red, PriorityColor::Green, PriorityColor::Gray]
        );
        assert_eq!(rows[0].id_label, "#1");
        assert!(rows[0].is_selected);
        assert_eq!(rows[2].priority, "URGENT");
    }

    #[test]
    fn test_view_model_customer_form() {
        let mut state = TriageState::new();
        apply_action(&mut state, TriageAction::UpdateDraft("hi".to_string()));
        let vm = compute_view_model(&state);
        let form = vm.customer.clone().expect("customer view");
        assert_eq!(form.submit_label, "Submit Ticket");
        assert!(form.input_enabled);
        assert_eq!(vm.title, "Customer Portal");

        apply_action(&mut state, TriageAction::Submit);
        let form = compute_view_model(&state).customer.expect("customer view");
        assert_eq!(form.submit_label, "Submitting...");
        assert!(!form.input_enabled);
    }

    #[test]
    fn test_view_model_confirm_prompt() {
        let mut state = admin_with(vec![open(4)]);
        apply_action(&mut state, TriageAction::RequestResolve(4));
        let vm = compute_view_model(&state);
        assert_eq!(
            vm.confirm_prompt,
            Some(ConfirmViewModel {
                ticket_id: 4,
                prompt: RESOLVE_CONFIRM_PROMPT,
            })
        );
    }

    #[test]
    fn test_error_banner_visible_on_both_views() {
        let mut state = TriageState::new();
        apply_action(&mut state, TriageAction::Submit);
        assert_eq!(
            compute_view_model(&state).error_banner.as_deref(),
            Some(EMPTY_MESSAGE_ERROR)
        );
        apply_action(&mut state, TriageAction::SwitchView(ViewMode::Admin));
        assert_eq!(
            compute_view_model(&state).error_banner.as_deref(),
            Some(EMPTY_MESSAGE_ERROR)
        );
    }
}
