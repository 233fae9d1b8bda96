use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Endpoint, PayChangu, Result};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VerifyPaymentResponse {
    pub status: String,
    pub message: String,
    pub data: PaymentDetails,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PaymentDetails {
    pub event_type: String,
    pub tx_ref: String,
    pub mode: String,
    #[serde(rename = "type")]
    pub payment_type: String,
    pub status: String,
    #[serde(rename = "number_of_attempts")]
    pub attempts: u32,
    pub reference: String,
    pub currency: String,
    pub amount: f64,
    pub charges: f64,
    pub customization: PaymentCustomization,
    #[serde(default)]
    pub meta: serde_json::Value,
    pub authorization: PaymentAuthorization,
    pub customer: CustomerInfo,
    #[serde(default)]
    pub logs: Vec<PaymentLog>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PaymentCustomization {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

/// Card or mobile details the payment was authorised with.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PaymentAuthorization {
    pub channel: String,
    #[serde(default)]
    pub card_number: Option<String>,
    #[serde(default)]
    pub expiry: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub mobile_number: Option<String>,
    #[serde(default)]
    pub completed_at: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CustomerInfo {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PaymentLog {
    #[serde(rename = "type")]
    pub log_type: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl PayChangu {
    pub async fn verify_payment(&self, tx_ref: &str) -> Result<VerifyPaymentResponse> {
        let endpoint = Endpoint::get(&["verify-payment", tx_ref])?;
        self.execute(endpoint, None).await
    }
}
