use std::collections::BTreeMap;

use serde::{de::DeserializeOwned, Deserialize};

use crate::{error::flatten_fields, ErrorShape, PayChanguError, Result};

/// The `message` member of an API body: either field-level validation
/// complaints or a plain string.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub(crate) enum ApiMessage {
    Fields(BTreeMap<String, Vec<String>>),
    Text(String),
    Other(serde_json::Value),
}

impl ApiMessage {
    fn text(&self) -> String {
        match self {
            ApiMessage::Fields(fields) => flatten_fields(fields),
            ApiMessage::Text(text) => text.clone(),
            ApiMessage::Other(value) => value.to_string(),
        }
    }
}

#[derive(Deserialize, Debug)]
pub(crate) struct StatusEnvelope {
    #[serde(default)]
    status: String,
    #[serde(default)]
    message: Option<ApiMessage>,
}

/// Error for a response whose HTTP status is not the expected one.
pub(crate) fn status_error(shape: ErrorShape, status: u16, body: &str) -> PayChanguError {
    let raw = || PayChanguError::Status {
        status,
        message: body.to_owned(),
    };
    if shape == ErrorShape::RawBody {
        return raw();
    }

    let envelope = match serde_json::from_str::<StatusEnvelope>(body) {
        Ok(envelope) => envelope,
        Err(_) => return raw(),
    };
    match envelope.message {
        Some(ApiMessage::Fields(fields))
            if shape == ErrorShape::Validation && !fields.is_empty() =>
        {
            PayChanguError::Validation { status, fields }
        }
        Some(ApiMessage::Text(message)) if !message.is_empty() => {
            PayChanguError::Status { status, message }
        }
        _ => raw(),
    }
}

/// Checks the body `status` member against the endpoint's success literal.
pub(crate) fn check_body(shape: ErrorShape, literal: &str, status: u16, body: &str) -> Result<()> {
    let envelope = serde_json::from_str::<StatusEnvelope>(body).map_err(|source| {
        PayChanguError::Serialization {
            source,
            body: Some(body.to_owned()),
        }
    })?;
    if envelope.status == literal {
        return Ok(());
    }

    match envelope.message {
        Some(ApiMessage::Fields(fields))
            if shape == ErrorShape::Validation && !fields.is_empty() =>
        {
            Err(PayChanguError::Validation { status, fields })
        }
        Some(message) => Err(PayChanguError::Business {
            status: envelope.status,
            message: message.text(),
        }),
        None => Err(PayChanguError::Business {
            status: envelope.status,
            message: body.to_owned(),
        }),
    }
}

pub(crate) fn decode<T: DeserializeOwned>(body: String) -> Result<T> {
    serde_json::from_str(&body).map_err(|source| PayChanguError::Serialization {
        source,
        body: Some(body),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALIDATION: &str = r#"{"status":"failed","message":{"mobile":["is required"],"amount":["must be positive","too large"]}}"#;

    #[test]
    fn test_raw_body_is_kept_verbatim() {
        let err = status_error(ErrorShape::RawBody, 400, r#"{"status":"error","message":"bad"}"#);
        match err {
            PayChanguError::Status { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, r#"{"status":"error","message":"bad"}"#);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_generic_message_is_extracted() {
        let err = status_error(ErrorShape::Generic, 404, r#"{"status":"error","message":"not found"}"#);
        match err {
            PayChanguError::Status { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "not found");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unparsable_body_falls_back_to_raw_text() {
        let err = status_error(ErrorShape::Generic, 502, "<html>Bad Gateway</html>");
        match err {
            PayChanguError::Status { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "<html>Bad Gateway</html>");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_validation_fields_are_decoded_first() {
        let err = status_error(ErrorShape::Validation, 400, VALIDATION);
        match err {
            PayChanguError::Validation { status, fields } => {
                assert_eq!(status, 400);
                assert_eq!(fields.len(), 2);
                assert_eq!(fields["amount"], vec!["must be positive", "too large"]);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_validation_shape_on_generic_endpoint() {
        let err = status_error(ErrorShape::Generic, 422, VALIDATION);
        match err {
            PayChanguError::Status { status, message } => {
                assert_eq!(status, 422);
                assert_eq!(message, VALIDATION);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_check_body_literal() {
        let body = r#"{"status":"success","message":"ok"}"#;
        assert!(check_body(ErrorShape::Generic, "success", 200, body).is_ok());
        let err = check_body(ErrorShape::Generic, "successful", 200, body).unwrap_err();
        match err {
            PayChanguError::Business { status, message } => {
                assert_eq!(status, "success");
                assert_eq!(message, "ok");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_check_body_validation_on_ok_status() {
        let err = check_body(ErrorShape::Validation, "success", 200, VALIDATION).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.status_code(), Some(200));
    }

    #[test]
    fn test_check_body_not_json() {
        let err = check_body(ErrorShape::Generic, "success", 200, "oops").unwrap_err();
        assert_eq!(err.body(), Some("oops"));
    }
}
