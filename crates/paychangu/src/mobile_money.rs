use serde::{Deserialize, Serialize};

use crate::{
    encode,
    payout::{PayoutDetailsResponse, PayoutResponse, PayoutTransaction},
    Endpoint, ErrorShape, PayChangu, Result,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MobileMoneyOperator {
    pub id: u64,
    pub name: String,
    /// Required as `mobile_money_operator_ref_id` when paying out.
    pub ref_id: String,
    pub short_code: String,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub fee_type: Option<String>,
    #[serde(default)]
    pub transaction_fee: Option<f64>,
    #[serde(default)]
    pub withdrawal_fee: Option<f64>,
    pub supports_withdrawals: bool,
    pub supported_country: SupportedCountry,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SupportedCountry {
    pub name: String,
    pub currency: String,
}

#[derive(Deserialize, Debug)]
struct OperatorsResponse {
    data: Vec<MobileMoneyOperator>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct MobileMoneyPayoutRequest {
    pub mobile: String,
    pub mobile_money_operator_ref_id: String,
    pub amount: f64,
    /// Must be unique per payout; used to look the payout up later.
    pub charge_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Forces the outcome in sandbox mode, e.g. `"successful"` or `"failed"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_status: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MobileMoneyRecipient {
    #[serde(default)]
    pub mobile: Option<String>,
    pub mobile_money: MobileMoneyInfo,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MobileMoneyInfo {
    pub name: String,
    pub ref_id: String,
}

pub type MobileMoneyTransaction = PayoutTransaction<MobileMoneyRecipient>;
pub type MobileMoneyPayoutResponse = PayoutResponse<MobileMoneyRecipient>;
pub type MobileMoneyPayoutDetails = PayoutDetailsResponse<MobileMoneyRecipient>;

impl PayChangu {
    pub async fn get_mobile_money_operators(&self) -> Result<Vec<MobileMoneyOperator>> {
        let endpoint = Endpoint::get(&["mobile-money"])?;
        let response: OperatorsResponse = self.execute(endpoint, None).await?;
        Ok(response.data)
    }

    pub async fn initiate_mobile_money_payout(
        &self,
        request: &MobileMoneyPayoutRequest,
    ) -> Result<MobileMoneyPayoutResponse> {
        let endpoint = Endpoint::post(&["mobile-money", "payouts", "initialize"])?
            .errors(ErrorShape::Validation);
        self.execute(endpoint, Some(encode(request)?)).await
    }

    pub async fn get_mobile_money_payout_details(
        &self,
        charge_id: &str,
    ) -> Result<MobileMoneyPayoutDetails> {
        let endpoint = Endpoint::get(&["mobile-money", "payments", charge_id, "details"])?;
        self.execute(endpoint, None).await
    }
}
