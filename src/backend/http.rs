//! REST implementation of [`TicketBackend`] using reqwest.
//!
//! Endpoints, relative to the configured collection URL:
//! - `GET {url}` lists tickets
//! - `POST {url}` creates a ticket from `{"customer_message": ...}`
//! - `PATCH {url}/{id}/resolve` resolves a ticket

use std::time::Duration;

use reqwest::{Client, Response};
use serde::Deserialize;

use crate::config::Config;
use crate::error::{Result, TriageError};
use crate::types::{NewTicket, Ticket, TicketId};

use super::TicketBackend;

/// Error body shape used by the backend for rejected requests
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Pull the `error` string out of a response body, if the body is JSON and has one
pub fn extract_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .filter(|m| !m.trim().is_empty())
}

/// HTTP client for the triage backend
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(TriageError::Http)?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    /// Build a backend from configuration, honouring an explicit URL override
    pub fn from_config(config: &Config, url_override: Option<&str>) -> Result<Self> {
        let url = match url_override {
            Some(url) => url.to_string(),
            None => config.api_url(),
        };
        Self::new(url, config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn resolve_url(&self, id: TicketId) -> String {
        format!("{}/{}/resolve", self.base_url, id)
    }

    /// Turn a non-success response into an `Api` error carrying the server's reason
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(TriageError::Api {
            status: status.as_u16(),
            message: extract_error_message(&body),
        })
    }
}

impl TicketBackend for HttpBackend {
    async fn list_tickets(&self) -> Result<Vec<Ticket>> {
        tracing::debug!(url = %self.base_url, "listing tickets");
        let response = self.client.get(&self.base_url).send().await?;
        let response = Self::check_status(response).await?;
        let tickets: Vec<Ticket> = response.json().await?;
        Ok(tickets)
    }

    async fn create_ticket(&self, ticket: &NewTicket) -> Result<()> {
        tracing::debug!(url = %self.base_url, "creating ticket");
        let response = self
            .client
            .post(&self.base_url)
            .json(ticket)
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }

    async fn resolve_ticket(&self, id: TicketId) -> Result<()> {
        let url = self.resolve_url(id);
        tracing::debug!(%url, "resolving ticket");
        let response = self.client.patch(&url).send().await?;
        Self::check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message() {
        assert_eq!(
            extract_error_message(r#"{"error": "Ticket not found"}"#),
            Some("Ticket not found".to_string())
        );
        assert_eq!(
            extract_error_message(
                r#"{"error": "Internal Server Error", "message": "db locked"}"#
            ),
            Some("Internal Server Error".to_string())
        );
    }

    #[test]
    fn test_extract_error_message_missing_or_invalid() {
        assert_eq!(extract_error_message(r#"{"message": "nope"}"#), None);
        assert_eq!(extract_error_message(r#"{"error": ""}"#), None);
        assert_eq!(extract_error_message("<html>Bad Gateway</html>"), None);
        assert_eq!(extract_error_message(""), None);
    }

    #[test]
    fn test_urls_are_built_from_base() {
        let backend =
            HttpBackend::new("http://127.0.0.1:5000/api/tickets/", Duration::from_secs(5))
                .unwrap();
        assert_eq!(backend.base_url(), "http://127.0.0.1:5000/api/tickets");
        assert_eq!(
            backend.resolve_url(42),
            "http://127.0.0.1:5000/api/tickets/42/resolve"
        );
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_http_error() {
        // Port 9 (discard) on localhost is closed in test environments
        let backend =
            HttpBackend::new("http://127.0.0.1:9/api/tickets", Duration::from_secs(2)).unwrap();
        let err = backend.list_tickets().await.unwrap_err();
        assert!(matches!(err, TriageError::Http(_)));
    }
}
