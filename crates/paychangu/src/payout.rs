use serde::{Deserialize, Serialize};

/// Payout transaction as reported by both payout channels. `R` is the
/// channel-specific recipient block.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PayoutTransaction<R> {
    pub charge_id: String,
    pub ref_id: String,
    #[serde(default)]
    pub trans_id: Option<String>,
    pub currency: String,
    pub amount: f64,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub status: String,
    pub attempts: u32,
    pub mode: String,
    pub created_at: String,
    #[serde(default)]
    pub completed_at: Option<String>,
    pub transaction_charges: TransactionCharges,
    #[serde(flatten)]
    pub recipient: R,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TransactionCharges {
    pub currency: String,
    /// Numeric string, e.g. `"30.00"`.
    pub amount: String,
}

/// Body of a payout initiation response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PayoutResponse<R> {
    pub status: String,
    pub message: String,
    pub data: PayoutData<R>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PayoutData<R> {
    pub transaction: PayoutTransaction<R>,
}

/// Body of a payout lookup response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PayoutDetailsResponse<R> {
    pub status: String,
    pub message: String,
    pub data: PayoutTransaction<R>,
}
