//! Ticket backend boundary.
//!
//! The backend owns ticket storage, categorisation and priority assignment.
//! The client only lists tickets, creates them and requests the
//! OPEN -> RESOLVED transition.

pub mod http;

use crate::error::Result;
use crate::types::{NewTicket, Ticket, TicketId};

pub use http::HttpBackend;

/// Common interface for ticket backends
pub trait TicketBackend: Send + Sync {
    /// Fetch every ticket the backend knows about, in backend order
    fn list_tickets(&self) -> impl std::future::Future<Output = Result<Vec<Ticket>>> + Send;

    /// Create a ticket from a customer message
    fn create_ticket(
        &self,
        ticket: &NewTicket,
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Ask the backend to move a ticket from OPEN to RESOLVED
    fn resolve_ticket(
        &self,
        id: TicketId,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
