pub mod bank;
pub mod error;
pub mod mobile_money;
pub mod payment;
pub mod payout;
mod response;
pub mod transport;
pub mod verify;

use std::sync::Arc;

use env::Env;
use log::{debug, warn};
use serde::{de::DeserializeOwned, Serialize};
use transport::{HttpRequest, Method, ReqwestTransport, Transport};
use url::Url;
use uuid::Uuid;

pub use error::PayChanguError;
pub type Result<T> = std::result::Result<T, PayChanguError>;

const BASE_URL: &str = "https://api.paychangu.com";

pub(crate) const SUCCESS: &str = "success";
pub(crate) const SUCCESSFUL: &str = "successful";

#[derive(Clone)]
pub struct PayChangu {
    secret_key: String,
    transport: Arc<dyn Transport>,
}

impl PayChangu {
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self::with_transport(secret_key, Arc::new(ReqwestTransport::new()))
    }

    pub fn with_transport(secret_key: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self {
            secret_key: secret_key.into(),
            transport,
        }
    }

    pub fn from_env(env: &Env) -> Self {
        Self::with_transport(
            env.secret_key(),
            Arc::new(ReqwestTransport::with_timeout(env.timeout())),
        )
    }

    pub(crate) async fn execute<T>(&self, endpoint: Endpoint, body: Option<Vec<u8>>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut headers = vec![
            ("Accept", "application/json".to_owned()),
            ("Authorization", format!("Bearer {}", self.secret_key)),
        ];
        if body.is_some() {
            headers.push(("Content-Type", "application/json".to_owned()));
        }
        let request = HttpRequest {
            method: endpoint.method,
            url: endpoint.url.to_string(),
            headers,
            body,
        };

        debug!("PayChangu request: {} {}", request.method.as_str(), request.url);
        let reply = self.transport.send(request).await?;
        debug!("PayChangu response: {}", reply.status);

        if let Err(err) = endpoint.check(reply.status, &reply.body) {
            warn!("PayChangu {} failed: {}", endpoint.url.path(), err);
            return Err(err);
        }
        response::decode(reply.body)
    }
}

impl std::fmt::Debug for PayChangu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PayChangu")
            .field("secret_key", &"***")
            .finish()
    }
}

/// How a failed response body is turned into an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorShape {
    RawBody,
    Generic,
    Validation,
}

pub(crate) struct Endpoint {
    pub method: Method,
    pub url: Url,
    pub expected: u16,
    /// Literal the body `status` must carry, if the endpoint reports one.
    pub success: Option<&'static str>,
    pub errors: ErrorShape,
}

impl Endpoint {
    pub fn get(segments: &[&str]) -> Result<Endpoint> {
        Ok(Endpoint {
            method: Method::Get,
            url: endpoint_url(segments)?,
            expected: 200,
            success: Some(SUCCESS),
            errors: ErrorShape::Generic,
        })
    }

    pub fn post(segments: &[&str]) -> Result<Endpoint> {
        Ok(Endpoint {
            method: Method::Post,
            ..Endpoint::get(segments)?
        })
    }

    pub fn expect_status(mut self, status: u16) -> Self {
        self.expected = status;
        self
    }

    pub fn success_literal(mut self, literal: Option<&'static str>) -> Self {
        self.success = literal;
        self
    }

    pub fn errors(mut self, errors: ErrorShape) -> Self {
        self.errors = errors;
        self
    }

    pub fn query(mut self, key: &str, value: &str) -> Self {
        self.url.query_pairs_mut().append_pair(key, value);
        self
    }

    fn check(&self, status: u16, body: &str) -> Result<()> {
        if status != self.expected {
            return Err(response::status_error(self.errors, status, body));
        }
        match self.success {
            Some(literal) => response::check_body(self.errors, literal, status, body),
            None => Ok(()),
        }
    }
}

fn endpoint_url(segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(BASE_URL).map_err(PayChanguError::transport)?;
    url.path_segments_mut()
        .map_err(|_| PayChanguError::transport("base url cannot carry a path"))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

pub(crate) fn encode<T: Serialize>(payload: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(payload)
        .map_err(|source| PayChanguError::Serialization { source, body: None })
}

/// Unique reference usable as a `tx_ref` or payout `charge_id`.
pub fn new_reference(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}
