use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{encode, Endpoint, ErrorShape, PayChangu, Result};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Customization {
    pub title: String,
    pub description: String,
}

/// Hosted-checkout payment request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PaymentRequest {
    pub amount: f64,
    pub currency: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub callback_url: String,
    pub return_url: String,
    /// Must be unique per request.
    pub tx_ref: String,
    pub customization: Customization,
    pub meta: BTreeMap<String, serde_json::Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PaymentResponse {
    pub message: String,
    pub status: String,
    pub data: Checkout,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Checkout {
    #[serde(default)]
    pub event: String,
    pub checkout_url: String,
    pub data: CheckoutTransaction,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CheckoutTransaction {
    pub tx_ref: String,
    pub currency: String,
    pub amount: f64,
    pub mode: String,
    pub status: String,
}

impl PayChangu {
    /// Creates a hosted checkout. The customer is sent to `data.checkout_url`.
    pub async fn initiate_payment(&self, request: &PaymentRequest) -> Result<PaymentResponse> {
        let endpoint = Endpoint::post(&["payment"])?
            .expect_status(201)
            .success_literal(None)
            .errors(ErrorShape::RawBody);
        self.execute(endpoint, Some(encode(request)?)).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::{transport::stub::StubTransport, PayChanguError};

    const CREATED: &str = r#"{
        "message": "Hosted payment session generated successfully.",
        "status": "success",
        "data": {
            "event": "checkout.session:created",
            "checkout_url": "https://checkout.paychangu.com/2839012345",
            "data": {
                "tx_ref": "TX12345ABC",
                "currency": "MWK",
                "amount": 100.5,
                "mode": "live",
                "status": "pending"
            }
        }
    }"#;

    fn request() -> PaymentRequest {
        let mut meta = BTreeMap::new();
        meta.insert("uuid".to_owned(), json!("c1f0"));
        meta.insert("order".to_owned(), json!({"items": 2}));
        PaymentRequest {
            amount: 100.5,
            currency: "MWK".to_owned(),
            email: "customer@example.com".to_owned(),
            first_name: "John".to_owned(),
            last_name: "Doe".to_owned(),
            callback_url: "https://example.com/callback".to_owned(),
            return_url: "https://example.com/return".to_owned(),
            tx_ref: "TX12345ABC".to_owned(),
            customization: Customization {
                title: "Order".to_owned(),
                description: "Two items".to_owned(),
            },
            meta,
        }
    }

    #[tokio::test]
    async fn test_initiate_payment() {
        let stub = Arc::new(StubTransport::reply(201, CREATED));
        let client = PayChangu::with_transport("sec-test", stub.clone());

        let response = client.initiate_payment(&request()).await.unwrap();
        assert_eq!(response.status, "success");
        assert_eq!(
            response.message,
            "Hosted payment session generated successfully."
        );
        assert_eq!(response.data.event, "checkout.session:created");
        assert_eq!(
            response.data.checkout_url,
            "https://checkout.paychangu.com/2839012345"
        );
        assert_eq!(response.data.data.tx_ref, "TX12345ABC");
        assert_eq!(response.data.data.currency, "MWK");
        assert_eq!(response.data.data.amount, 100.5);
        assert_eq!(response.data.data.mode, "live");
        assert_eq!(response.data.data.status, "pending");

        let sent = stub.last_request();
        assert_eq!(sent.method.as_str(), "POST");
        assert_eq!(sent.url, "https://api.paychangu.com/payment");
        assert_eq!(sent.header("Authorization"), Some("Bearer sec-test"));
        assert_eq!(sent.header("Accept"), Some("application/json"));
        assert_eq!(sent.header("Content-Type"), Some("application/json"));

        let body = stub.last_body();
        assert_eq!(body["amount"], json!(100.5));
        assert_eq!(body["tx_ref"], json!("TX12345ABC"));
        assert_eq!(body["callback_url"], json!("https://example.com/callback"));
        assert_eq!(body["customization"]["title"], json!("Order"));
        assert_eq!(body["meta"]["order"]["items"], json!(2));
    }

    #[tokio::test]
    async fn test_initiate_payment_expects_created() {
        // 200 is not the success code of this endpoint
        let stub = Arc::new(StubTransport::reply(200, CREATED));
        let client = PayChangu::with_transport("sec-test", stub);
        let err = client.initiate_payment(&request()).await.unwrap_err();
        assert_eq!(err.status_code(), Some(200));
    }

    #[tokio::test]
    async fn test_initiate_payment_returns_raw_body() {
        let body = r#"{"status":"failed","message":{"tx_ref":["has already been taken"]}}"#;
        let stub = Arc::new(StubTransport::reply(400, body));
        let client = PayChangu::with_transport("sec-test", stub);

        match client.initiate_payment(&request()).await.unwrap_err() {
            PayChanguError::Status { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, body);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_initiate_payment_transport_failure() {
        let client = PayChangu::with_transport("sec-test", Arc::new(StubTransport::new()));
        let err = client.initiate_payment(&request()).await.unwrap_err();
        assert!(matches!(err, PayChanguError::Transport(_)));
    }

    #[tokio::test]
    async fn test_initiate_payment_bad_body() {
        let stub = Arc::new(StubTransport::reply(201, r#"{"status":"success"}"#));
        let client = PayChangu::with_transport("sec-test", stub);
        let err = client.initiate_payment(&request()).await.unwrap_err();
        assert_eq!(err.body(), Some(r#"{"status":"success"}"#));
    }
}
