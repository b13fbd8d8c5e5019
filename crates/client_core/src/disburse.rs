use std::sync::Arc;

use rust_decimal::Decimal;
use shared::domain::{Borrower, BorrowerId};
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::{
    forms::{coerce_amount, FormPhase},
    gateway::BorrowerGateway,
    notify::{NotificationRelay, Severity},
};

const MSG_FETCH_FAILED: &str = "Failed to fetch borrowers";
const MSG_DISBURSE_OK: &str = "Funds disbursed successfully!";
const MSG_DISBURSE_FAILED: &str = "Failed to disburse funds";

/// Ephemeral disbursement form state: the selected borrower and the amount
/// to transfer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisbursementRequest {
    pub borrower: Option<BorrowerId>,
    pub amount: Decimal,
}

impl DisbursementRequest {
    /// The selected borrower, provided the amount also clears the gate.
    /// The backend may still reject on domain grounds.
    pub fn eligible_borrower(&self) -> Option<BorrowerId> {
        self.borrower.filter(|_| self.amount > Decimal::ZERO)
    }

    pub fn is_eligible(&self) -> bool {
        self.eligible_borrower().is_some()
    }
}

/// Owns the fund-disbursement view's state. Keeps its own borrower cache,
/// independent of the registry's copy.
pub struct DisbursementDesk {
    gateway: Arc<dyn BorrowerGateway>,
    notices: Arc<NotificationRelay>,
    state: Mutex<DeskState>,
}

#[derive(Default)]
struct DeskState {
    borrowers: Vec<Borrower>,
    request: DisbursementRequest,
    submit_phase: FormPhase,
}

impl DisbursementDesk {
    pub fn new(gateway: Arc<dyn BorrowerGateway>, notices: Arc<NotificationRelay>) -> Arc<Self> {
        Arc::new(Self {
            gateway,
            notices,
            state: Mutex::new(DeskState::default()),
        })
    }

    pub async fn load(&self) {
        match self.gateway.list_borrowers().await {
            Ok(borrowers) => {
                debug!(count = borrowers.len(), "refreshed borrower list");
                self.state.lock().await.borrowers = borrowers;
            }
            Err(err) => {
                error!(%err, "borrower list fetch failed");
                self.notices.publish(MSG_FETCH_FAILED, Severity::Error).await;
            }
        }
    }

    pub async fn select_borrower(&self, borrower: Option<BorrowerId>) {
        self.state.lock().await.request.borrower = borrower;
    }

    pub async fn set_amount(&self, input: &str) {
        self.state.lock().await.request.amount = coerce_amount(input);
    }

    pub async fn can_disburse(&self) -> bool {
        self.state.lock().await.request.is_eligible()
    }

    /// Sends the disbursement. Returns `false` without touching the gateway
    /// when the request is ineligible or one is already in flight. Success
    /// resets the form; failure leaves it unchanged for retry. The borrower
    /// list is not re-fetched, as disbursement changes nothing shown here.
    pub async fn disburse(&self) -> bool {
        let (borrower_id, amount) = {
            let mut state = self.state.lock().await;
            let Some(borrower_id) = state.request.eligible_borrower() else {
                debug!("disbursement request ineligible; not dispatched");
                return false;
            };
            if state.submit_phase.is_submitting() {
                debug!("disbursement already in flight; ignoring");
                return false;
            }
            state.submit_phase = FormPhase::Submitting;
            (borrower_id, state.request.amount)
        };

        match self.gateway.initiate_disbursement(borrower_id, amount).await {
            Ok(()) => {
                info!(borrower_id = borrower_id.0, %amount, "funds disbursed");
                {
                    let mut state = self.state.lock().await;
                    state.request = DisbursementRequest::default();
                    state.submit_phase = FormPhase::Succeeded;
                }
                self.notices
                    .publish(MSG_DISBURSE_OK, Severity::Success)
                    .await;
            }
            Err(err) => {
                error!(%err, borrower_id = borrower_id.0, "disbursement failed");
                self.state.lock().await.submit_phase = FormPhase::Failed(err.to_string());
                self.notices
                    .publish(MSG_DISBURSE_FAILED, Severity::Error)
                    .await;
            }
        }
        true
    }

    pub async fn borrowers(&self) -> Vec<Borrower> {
        self.state.lock().await.borrowers.clone()
    }

    pub async fn request(&self) -> DisbursementRequest {
        self.state.lock().await.request.clone()
    }

    pub async fn submit_phase(&self) -> FormPhase {
        self.state.lock().await.submit_phase.clone()
    }

    pub fn notices(&self) -> Arc<NotificationRelay> {
        Arc::clone(&self.notices)
    }
}

#[cfg(test)]
#[path = "tests/disburse_tests.rs"]
mod tests;
