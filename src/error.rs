use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("{0}")]
    Validation(String),

    #[error("ticket backend returned {status}{}", api_suffix(.message))]
    Api {
        status: u16,
        /// The `error` string from the response body, when the backend sent one
        message: Option<String>,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TUI error: {0}")]
    Tui(String),

    #[error("{0}")]
    Other(String),
}

impl TriageError {
    /// The server-provided reason for a rejected request, if there is one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            TriageError::Api {
                message: Some(m), ..
            } if !m.is_empty() => Some(m),
            _ => None,
        }
    }
}

fn api_suffix(message: &Option<String>) -> String {
    match message {
        Some(m) if !m.is_empty() => format!(": {m}"),
        _ => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, TriageError>;
