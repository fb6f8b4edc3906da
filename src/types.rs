use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Backend-assigned ticket identifier
pub type TicketId = u64;

/// Category reported by the backend when triage could not classify a ticket
pub const DEFAULT_CATEGORY: &str = "UNCATEGORIZED";

/// Ticket lifecycle status.
///
/// Values the client does not know are kept verbatim so they can be shown
/// in diagnostics, but they are never listed or counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(into = "String")]
pub enum TicketStatus {
    #[default]
    Open,
    Resolved,
    Unrecognized(String),
}

impl TicketStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TicketStatus::Open => "OPEN",
            TicketStatus::Resolved => "RESOLVED",
            TicketStatus::Unrecognized(s) => s,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, TicketStatus::Open)
    }
}

impl From<String> for TicketStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "OPEN" => TicketStatus::Open,
            "RESOLVED" => TicketStatus::Resolved,
            _ => TicketStatus::Unrecognized(s),
        }
    }
}

impl From<TicketStatus> for String {
    fn from(status: TicketStatus) -> Self {
        status.as_str().to_string()
    }
}

impl<'de> Deserialize<'de> for TicketStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient_string(deserializer).map(TicketStatus::from)
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ticket priority as assigned by the backend's triage step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(into = "String")]
pub enum TicketPriority {
    High,
    #[default]
    Normal,
    Low,
    Unrecognized(String),
}

impl TicketPriority {
    pub fn as_str(&self) -> &str {
        match self {
            TicketPriority::High => "HIGH",
            TicketPriority::Normal => "NORMAL",
            TicketPriority::Low => "LOW",
            TicketPriority::Unrecognized(s) => s,
        }
    }

    /// Display color for this priority. Presentation only.
    pub fn color(&self) -> PriorityColor {
        match self {
            TicketPriority::High => PriorityColor::Red,
            TicketPriority::Normal => PriorityColor::Orange,
            TicketPriority::Low => PriorityColor::Green,
            TicketPriority::Unrecognized(_) => PriorityColor::Gray,
        }
    }
}

impl From<String> for TicketPriority {
    fn from(s: String) -> Self {
        match s.as_str() {
            "HIGH" => TicketPriority::High,
            "NORMAL" => TicketPriority::Normal,
            "LOW" => TicketPriority::Low,
            _ => TicketPriority::Unrecognized(s),
        }
    }
}

impl From<TicketPriority> for String {
    fn from(priority: TicketPriority) -> Self {
        priority.as_str().to_string()
    }
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'de> Deserialize<'de> for TicketPriority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient_string(deserializer).map(TicketPriority::from)
    }
}

/// Read any JSON value as a string. Non-strings (`null`, numbers, objects)
/// keep their JSON text so they land in `Unrecognized` instead of failing
/// the whole listing.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        other => other.to_string(),
    })
}

/// Abstract priority color, mapped to concrete terminal colors by each renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityColor {
    Red,
    Orange,
    Green,
    Gray,
}

/// A support ticket as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub customer_message: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub priority: TicketPriority,
    pub status: TicketStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Request body for creating a ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTicket {
    pub customer_message: String,
}

/// Aggregate counts derived from one ticket snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TicketStats {
    pub resolved: usize,
    pub unresolved: usize,
}

/// Split a full ticket listing into the open tickets (order preserved) and
/// the counts derived from the same snapshot.
pub fn partition_tickets(all: Vec<Ticket>) -> (Vec<Ticket>, TicketStats) {
    let resolved = all
        .iter()
        .filter(|t| t.status == TicketStatus::Resolved)
        .count();
    let open: Vec<Ticket> = all.into_iter().filter(|t| t.status.is_open()).collect();
    let stats = TicketStats {
        resolved,
        unresolved: open.len(),
    };
    (open, stats)
}
