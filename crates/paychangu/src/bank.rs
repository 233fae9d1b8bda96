use serde::{Deserialize, Serialize};

use crate::{
    encode,
    payout::{PayoutDetailsResponse, PayoutResponse, PayoutTransaction},
    Endpoint, ErrorShape, PayChangu, Result, SUCCESSFUL,
};

const PAYOUT_METHOD: &str = "bank_transfer";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Bank {
    pub uuid: String,
    pub name: String,
}

#[derive(Deserialize, Debug)]
struct BanksResponse {
    data: Vec<Bank>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct BankPayoutRequest {
    pub bank_uuid: String,
    pub amount: f64,
    /// Must be unique per payout; used to look the payout up later.
    pub charge_id: String,
    pub bank_account_name: String,
    pub bank_account_number: String,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Wire form of [`BankPayoutRequest`]: the endpoint wants the amount as a
/// two-decimal string and an explicit payout method.
#[derive(Serialize, Debug)]
struct BankPayoutPayload<'a> {
    payout_method: &'static str,
    bank_uuid: &'a str,
    amount: String,
    charge_id: &'a str,
    bank_account_name: &'a str,
    bank_account_number: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<&'a str>,
}

impl<'a> From<&'a BankPayoutRequest> for BankPayoutPayload<'a> {
    fn from(request: &'a BankPayoutRequest) -> Self {
        BankPayoutPayload {
            payout_method: PAYOUT_METHOD,
            bank_uuid: &request.bank_uuid,
            amount: format!("{:.2}", request.amount),
            charge_id: &request.charge_id,
            bank_account_name: &request.bank_account_name,
            bank_account_number: &request.bank_account_number,
            email: request.email.as_deref(),
            first_name: request.first_name.as_deref(),
            last_name: request.last_name.as_deref(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BankRecipient {
    pub recipient_account_details: BankAccountDetails,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BankAccountDetails {
    pub bank_uuid: String,
    #[serde(default)]
    pub bank_name: Option<String>,
    pub account_name: String,
    pub account_number: String,
}

pub type BankTransaction = PayoutTransaction<BankRecipient>;
pub type BankPayoutResponse = PayoutResponse<BankRecipient>;
pub type BankPayoutDetails = PayoutDetailsResponse<BankRecipient>;

impl PayChangu {
    pub async fn get_supported_banks(&self, currency: &str) -> Result<Vec<Bank>> {
        let endpoint = Endpoint::get(&["direct-charge", "payouts", "supported-banks"])?
            .query("currency", currency);
        let response: BanksResponse = self.execute(endpoint, None).await?;
        Ok(response.data)
    }

    pub async fn initiate_bank_payout(
        &self,
        request: &BankPayoutRequest,
    ) -> Result<BankPayoutResponse> {
        let endpoint = Endpoint::post(&["direct-charge", "payouts", "initialize"])?
            .errors(ErrorShape::Validation);
        let payload = BankPayoutPayload::from(request);
        self.execute(endpoint, Some(encode(&payload)?)).await
    }

    /// Unlike every other endpoint this one reports `"successful"` in the
    /// body status, and only that literal is accepted.
    pub async fn get_bank_payout_details(&self, charge_id: &str) -> Result<BankPayoutDetails> {
        let endpoint = Endpoint::get(&["direct-charge", "payouts", charge_id, "details"])?
            .success_literal(Some(SUCCESSFUL));
        self.execute(endpoint, None).await
    }
}
