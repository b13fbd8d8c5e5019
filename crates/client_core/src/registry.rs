use std::sync::Arc;

use shared::domain::{Borrower, BorrowerId, DraftBorrower};
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::{
    forms::{coerce_amount, FormPhase},
    gateway::BorrowerGateway,
    navigation::Navigator,
    notify::{NotificationRelay, Severity},
};

const MSG_FETCH_FAILED: &str = "Failed to fetch borrowers";
const MSG_CREATE_OK: &str = "Borrower added successfully";
const MSG_CREATE_FAILED: &str = "Failed to create borrower";
const MSG_ONBOARD_FAILED: &str = "Error onboarding to Stripe";

/// Owns the borrower-management view's state: the cached borrower list, the
/// new-borrower draft, and the submission lifecycle for creating one.
pub struct BorrowerRegistry {
    gateway: Arc<dyn BorrowerGateway>,
    navigator: Arc<dyn Navigator>,
    notices: Arc<NotificationRelay>,
    state: Mutex<RegistryState>,
}

#[derive(Default)]
struct RegistryState {
    borrowers: Vec<Borrower>,
    draft: DraftBorrower,
    submit_phase: FormPhase,
}

impl BorrowerRegistry {
    pub fn new(
        gateway: Arc<dyn BorrowerGateway>,
        navigator: Arc<dyn Navigator>,
        notices: Arc<NotificationRelay>,
    ) -> Arc<Self> {
        Arc::new(Self {
            gateway,
            navigator,
            notices,
            state: Mutex::new(RegistryState::default()),
        })
    }

    /// Refreshes the cached borrower list. On failure the previous list is
    /// kept untouched; concurrent loads race and the last response wins.
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

    pub async fn set_name(&self, value: impl Into<String>) {
        self.state.lock().await.draft.name = value.into();
    }

    pub async fn set_email(&self, value: impl Into<String>) {
        self.state.lock().await.draft.email = value.into();
    }

    pub async fn set_phone(&self, value: impl Into<String>) {
        self.state.lock().await.draft.phone = value.into();
    }

    pub async fn set_loan_amount(&self, input: &str) {
        self.state.lock().await.draft.loan_amount = coerce_amount(input);
    }

    /// Submits the current draft. Returns `false` when the call was not
    /// dispatched because a submission is already in flight. On success the
    /// draft resets and the list is re-fetched; on failure the draft is left
    /// exactly as entered so the operator can retry.
    pub async fn submit(&self) -> bool {
        let draft = {
            let mut state = self.state.lock().await;
            if state.submit_phase.is_submitting() {
                debug!("create submission already in flight; ignoring");
                return false;
            }
            state.submit_phase = FormPhase::Submitting;
            state.draft.clone()
        };

        match self.gateway.create_borrower(&draft).await {
            Ok(created) => {
                info!(borrower_id = created.id.0, "borrower created");
                {
                    let mut state = self.state.lock().await;
                    state.draft = DraftBorrower::default();
                    state.submit_phase = FormPhase::Succeeded;
                }
                self.notices.publish(MSG_CREATE_OK, Severity::Success).await;
                self.load().await;
            }
            Err(err) => {
                error!(%err, "borrower creation failed");
                self.state.lock().await.submit_phase = FormPhase::Failed(err.to_string());
                self.notices
                    .publish(MSG_CREATE_FAILED, Severity::Error)
                    .await;
            }
        }
        true
    }

    /// Starts processor onboarding for one borrower. On success the whole
    /// browsing context leaves for the returned URL via the navigator; on
    /// failure no navigation happens.
    pub async fn onboard(&self, borrower_id: BorrowerId) {
        match self.gateway.initiate_onboarding(borrower_id).await {
            Ok(url) => {
                info!(borrower_id = borrower_id.0, %url, "onboarding redirect issued");
                self.navigator.navigate_to(&url);
            }
            Err(err) => {
                error!(%err, borrower_id = borrower_id.0, "onboarding initiation failed");
                self.notices
                    .publish(MSG_ONBOARD_FAILED, Severity::Error)
                    .await;
            }
        }
    }

    pub async fn borrowers(&self) -> Vec<Borrower> {
        self.state.lock().await.borrowers.clone()
    }

    pub async fn draft(&self) -> DraftBorrower {
        self.state.lock().await.draft.clone()
    }

    pub async fn submit_phase(&self) -> FormPhase {
        self.state.lock().await.submit_phase.clone()
    }

    pub fn notices(&self) -> Arc<NotificationRelay> {
        Arc::clone(&self.notices)
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
