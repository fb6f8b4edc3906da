//! State types for the triage controller

use crate::types::{Ticket, TicketId, TicketStats};

/// Generic banner shown when the ticket list cannot be loaded
pub const CONNECTIVITY_ERROR: &str = "Cannot connect to backend server.";
/// Local validation error for an empty submission
pub const EMPTY_MESSAGE_ERROR: &str = "Message cannot be empty";
/// Fallback when the backend rejects a submission without a reason
pub const SUBMIT_FAILED: &str = "Failed to submit";
/// Confirmation shown after a successful submission
pub const SUBMIT_SUCCESS: &str = "Your ticket has been submitted successfully!";
/// Fallback when the backend rejects a resolve without a reason
pub const RESOLVE_FAILED: &str = "Failed to resolve ticket";
/// Question asked before the irreversible resolve transition
pub const RESOLVE_CONFIRM_PROMPT: &str =
    "Are you sure you want to resolve this ticket? It will be cleared from this list.";

/// Which of the two screens is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Customer,
    Admin,
}

impl ViewMode {
    pub fn toggle(self) -> Self {
        match self {
            ViewMode::Customer => ViewMode::Admin,
            ViewMode::Admin => ViewMode::Customer,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ViewMode::Customer => "Customer Portal",
            ViewMode::Admin => "Admin Dashboard",
        }
    }
}

/// Everything the client knows, owned by a single controller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriageState {
    // View
    /// Currently active screen
    pub current_view: ViewMode,

    // Ticket snapshot (always replaced together)
    /// OPEN tickets from the latest successful fetch, in backend order
    pub tickets: Vec<Ticket>,
    /// Counts partitioned from the same fetch as `tickets`
    pub stats: TicketStats,

    // Submission form
    /// Draft text for a new ticket
    pub message: String,
    /// A create request is in flight
    pub loading: bool,

    // Feedback
    /// Error banner, shown above either view
    pub error: Option<String>,
    /// Confirmation after a successful submission
    pub success_msg: Option<String>,
    /// Blocking notification, currently only for failed resolves
    pub alert: Option<String>,

    // Admin dashboard
    /// Number of list requests still outstanding
    pub fetches_in_flight: usize,
    /// Highlighted row in the ticket table
    pub selected_index: usize,
    /// Ticket waiting for the operator to confirm the resolve
    pub pending_resolve: Option<TicketId>,

    /// Whether the application should exit
    pub should_exit: bool,
}

impl TriageState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The ticket under the cursor on the admin dashboard
    pub fn selected_ticket(&self) -> Option<&Ticket> {
        self.tickets.get(self.selected_index)
    }

    pub fn is_refreshing(&self) -> bool {
        self.fetches_in_flight > 0
    }
}
