use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::BorrowerId;

/// Body of POST /payments/onboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardRequest {
    pub borrower_id: BorrowerId,
}

/// Body of POST /payments/disburse.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisburseRequest {
    pub borrower_id: BorrowerId,
    /// Sent as a JSON number; the backend type-checks this field.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}
