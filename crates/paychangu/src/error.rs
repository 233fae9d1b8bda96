use std::collections::BTreeMap;

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum PayChanguError {
    /// The request never produced a complete response.
    #[error("Transport error: {0}")]
    Transport(#[source] BoxError),
    /// A payload could not be encoded, or a response body did not have the expected shape.
    #[error("Serialization error: {source}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        body: Option<String>,
    },
    /// The HTTP status differs from the one the endpoint answers with on success.
    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },
    /// The HTTP status matched but the body reports a failure.
    #[error("API error: {message}")]
    Business { status: String, message: String },
    /// Field-level rejection of a payout request.
    #[error("API error ({status}): validation failed: {}", flatten_fields(.fields))]
    Validation {
        status: u16,
        fields: BTreeMap<String, Vec<String>>,
    },
}

impl PayChanguError {
    pub fn transport<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        PayChanguError::Transport(err.into())
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            PayChanguError::Status { status, .. } | PayChanguError::Validation { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, PayChanguError::Validation { .. })
    }

    /// Raw response text kept for decode failures.
    pub fn body(&self) -> Option<&str> {
        match self {
            PayChanguError::Serialization { body, .. } => body.as_deref(),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for PayChanguError {
    fn from(value: reqwest::Error) -> Self {
        PayChanguError::Transport(Box::new(value))
    }
}

pub(crate) fn flatten_fields(fields: &BTreeMap<String, Vec<String>>) -> String {
    fields
        .iter()
        .map(|(field, complaints)| format!("{}: {}", field, complaints.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}
