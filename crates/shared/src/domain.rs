use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(BorrowerId);

/// A loan recipient record owned by the backend. The client never mutates
/// one field-by-field; the whole collection is replaced by a fresh fetch
/// after any mutating call succeeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Borrower {
    pub id: BorrowerId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub loan_amount: Decimal,
}

impl Borrower {
    /// Loan amount as rendered in borrower listings, e.g. `$500.00`.
    pub fn display_loan_amount(&self) -> String {
        format_amount(self.loan_amount)
    }
}

/// Client-local staging record for creating a borrower. Doubles as the
/// POST /borrowers request body, so the wire form stays camelCase.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftBorrower {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub loan_amount: Decimal,
}

pub fn format_amount(amount: Decimal) -> String {
    let mut rounded = amount.round_dp(2);
    rounded.rescale(2);
    format!("${rounded}")
}
