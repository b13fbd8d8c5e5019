use rust_decimal::Decimal;

/// Lifecycle of a mutating form. A second submission attempted while one is
/// in flight is rejected without side effects.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl FormPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Parses operator amount input, coercing anything unparseable to zero.
/// Zero fails the disbursement eligibility gate; for creation the backend
/// remains the authority on the value.
pub fn coerce_amount(input: &str) -> Decimal {
    input.trim().parse().unwrap_or(Decimal::ZERO)
}
