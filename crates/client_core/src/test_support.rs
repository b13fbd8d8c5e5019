//! Hand-rolled doubles shared by the controller tests.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::domain::{Borrower, BorrowerId, DraftBorrower};
use tokio::sync::{Mutex, Notify};
use url::Url;

use crate::{error::GatewayError, gateway::BorrowerGateway, navigation::Navigator};

pub(crate) fn borrower(id: i64, name: &str) -> Borrower {
    Borrower {
        id: BorrowerId(id),
        name: name.into(),
        email: format!("{name}@x.com"),
        phone: "123".into(),
        loan_amount: Decimal::new(50000, 2),
    }
}

pub(crate) fn transport_err() -> GatewayError {
    GatewayError::Transport("connection refused".into())
}

/// Scripted gateway: queued responses are consumed per call, with benign
/// defaults once a queue runs dry. Calls are recorded for assertions, and
/// the optional holds park a call until the test releases it.
#[derive(Default)]
pub(crate) struct FakeGateway {
    pub list_responses: Mutex<VecDeque<Result<Vec<Borrower>, GatewayError>>>,
    pub create_responses: Mutex<VecDeque<Result<Borrower, GatewayError>>>,
    pub onboard_responses: Mutex<VecDeque<Result<Url, GatewayError>>>,
    pub disburse_responses: Mutex<VecDeque<Result<(), GatewayError>>>,
    pub list_calls: Mutex<u32>,
    pub created_drafts: Mutex<Vec<DraftBorrower>>,
    pub onboard_calls: Mutex<Vec<BorrowerId>>,
    pub disbursements: Mutex<Vec<(BorrowerId, Decimal)>>,
    pub hold_create: Option<Arc<Notify>>,
    pub hold_disburse: Option<Arc<Notify>>,
}

impl FakeGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub async fn push_list(&self, response: Result<Vec<Borrower>, GatewayError>) {
        self.list_responses.lock().await.push_back(response);
    }

    pub async fn push_create(&self, response: Result<Borrower, GatewayError>) {
        self.create_responses.lock().await.push_back(response);
    }

    pub async fn push_onboard(&self, response: Result<Url, GatewayError>) {
        self.onboard_responses.lock().await.push_back(response);
    }

    pub async fn push_disburse(&self, response: Result<(), GatewayError>) {
        self.disburse_responses.lock().await.push_back(response);
    }
}

#[async_trait]
impl BorrowerGateway for FakeGateway {
    async fn list_borrowers(&self) -> Result<Vec<Borrower>, GatewayError> {
        *self.list_calls.lock().await += 1;
        self.list_responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn create_borrower(&self, draft: &DraftBorrower) -> Result<Borrower, GatewayError> {
        self.created_drafts.lock().await.push(draft.clone());
        if let Some(gate) = &self.hold_create {
            gate.notified().await;
        }
        self.create_responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| {
                Ok(Borrower {
                    id: BorrowerId(1),
                    name: draft.name.clone(),
                    email: draft.email.clone(),
                    phone: draft.phone.clone(),
                    loan_amount: draft.loan_amount,
                })
            })
    }

    async fn initiate_onboarding(&self, borrower_id: BorrowerId) -> Result<Url, GatewayError> {
        self.onboard_calls.lock().await.push(borrower_id);
        self.onboard_responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| {
                Ok(Url::parse("https://processor.example/onboard/abc").expect("static url"))
            })
    }

    async fn initiate_disbursement(
        &self,
        borrower_id: BorrowerId,
        amount: Decimal,
    ) -> Result<(), GatewayError> {
        self.disbursements.lock().await.push((borrower_id, amount));
        if let Some(gate) = &self.hold_disburse {
            gate.notified().await;
        }
        self.disburse_responses
            .lock()
            .await
            .pop_front()
            .unwrap_or(Ok(()))
    }
}

#[derive(Default)]
pub(crate) struct RecordingNavigator {
    pub visited: std::sync::Mutex<Vec<Url>>,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn visited(&self) -> Vec<Url> {
        self.visited.lock().expect("navigator lock").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate_to(&self, url: &Url) {
        self.visited.lock().expect("navigator lock").push(url.clone());
    }
}
