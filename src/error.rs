use serde_json::Value;
use thiserror::Error;

use crate::response::ErrorPayload;

/// Main error type for eversign API operations
#[derive(Debug, Error)]
pub enum EversignError {
    /// Failure reported by the API (`"success": false`)
    #[error("eversign API error: {info}")]
    Api {
        code: Option<i64>,
        /// Machine-readable error type, e.g. `missing_access_key`
        kind: Option<String>,
        info: String,
        /// The error object exactly as the API returned it
        payload: Value,
    },

    /// Non-success HTTP status without an API error envelope
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    /// A download was started without a destination path
    #[error("sink is required to download a file")]
    MissingSink,

    /// Caller passed an argument the request cannot be built from
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Network or protocol failure from the HTTP client
    #[error("HTTP client error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EversignError {
    /// Build an API error from the `error` member of a failure envelope.
    ///
    /// Members are read one by one, so an oddly typed `code` does not cost
    /// the `type` and `info` next to it.
    pub fn from_payload(payload: Value) -> Self {
        let parsed = ErrorPayload::from_value(&payload);
        EversignError::Api {
            code: parsed.code,
            kind: parsed.kind,
            info: parsed.info.unwrap_or_else(|| "unknown error".to_string()),
            payload,
        }
    }

    /// Create a new HTTP error
    pub fn http(status: u16, body: String) -> Self {
        EversignError::Http { status, body }
    }

    /// True for failures reported by the API itself
    pub fn is_api_error(&self) -> bool {
        matches!(self, EversignError::Api { .. })
    }

    /// The API error code, if this is an API error that carried one
    pub fn api_code(&self) -> Option<i64> {
        match self {
            EversignError::Api { code, .. } => *code,
            _ => None,
        }
    }

    /// Get the HTTP status code if this is an HTTP or transport error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            EversignError::Http { status, .. } => Some(*status),
            EversignError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type for eversign operations
pub type Result<T> = std::result::Result<T, EversignError>;
