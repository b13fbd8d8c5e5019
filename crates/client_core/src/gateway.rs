use async_trait::async_trait;
use reqwest::{Client, Response};
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use shared::{
    domain::{Borrower, BorrowerId, DraftBorrower},
    error::ApiError,
    protocol::{DisburseRequest, OnboardRequest},
};
use url::Url;

use crate::{config::ClientConfig, error::GatewayError};

/// Backend-facing façade both controllers depend on. Pure request/response:
/// no retries, no caching; resilience policy lives in the controllers.
#[async_trait]
pub trait BorrowerGateway: Send + Sync {
    async fn list_borrowers(&self) -> Result<Vec<Borrower>, GatewayError>;
    async fn create_borrower(&self, draft: &DraftBorrower) -> Result<Borrower, GatewayError>;
    async fn initiate_onboarding(&self, borrower_id: BorrowerId) -> Result<Url, GatewayError>;
    async fn initiate_disbursement(
        &self,
        borrower_id: BorrowerId,
        amount: Decimal,
    ) -> Result<(), GatewayError>;
}

pub struct HttpBorrowerGateway {
    http: Client,
    config: ClientConfig,
}

impl HttpBorrowerGateway {
    pub fn new(config: ClientConfig) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(config.request_timeout()).build()?;
        Ok(Self { http, config })
    }

    /// Resolves an error status into `Rejected` when the backend supplied a
    /// structured body, `Transport` otherwise.
    async fn check_status(response: Response) -> Result<Response, GatewayError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str::<ApiError>(&body) {
            Ok(api_error) => Err(GatewayError::Rejected(api_error)),
            Err(_) => Err(GatewayError::Transport(format!(
                "HTTP {status} without structured error body"
            ))),
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|err| GatewayError::Schema(err.to_string()))
    }
}

#[async_trait]
impl BorrowerGateway for HttpBorrowerGateway {
    async fn list_borrowers(&self) -> Result<Vec<Borrower>, GatewayError> {
        let response = self
            .http
            .get(self.config.endpoint("/borrowers"))
            .send()
            .await?;
        Self::decode(Self::check_status(response).await?).await
    }

    async fn create_borrower(&self, draft: &DraftBorrower) -> Result<Borrower, GatewayError> {
        let response = self
            .http
            .post(self.config.endpoint("/borrowers"))
            .json(draft)
            .send()
            .await?;
        Self::decode(Self::check_status(response).await?).await
    }

    async fn initiate_onboarding(&self, borrower_id: BorrowerId) -> Result<Url, GatewayError> {
        let response = self
            .http
            .post(self.config.endpoint("/payments/onboard"))
            .json(&OnboardRequest { borrower_id })
            .send()
            .await?;
        let body = Self::check_status(response).await?.text().await?;

        // The processor redirect may arrive as a JSON string or as plain
        // text depending on the server framing; either way it must be an
        // absolute http(s) URL before we hand it to the navigator.
        let raw = serde_json::from_str::<String>(&body).unwrap_or_else(|_| body.trim().to_string());
        let url = Url::parse(&raw)
            .map_err(|err| GatewayError::Schema(format!("redirect URL '{raw}': {err}")))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(GatewayError::Schema(format!(
                "redirect URL '{url}' is not http(s)"
            )));
        }
        Ok(url)
    }

    async fn initiate_disbursement(
        &self,
        borrower_id: BorrowerId,
        amount: Decimal,
    ) -> Result<(), GatewayError> {
        let response = self
            .http
            .post(self.config.endpoint("/payments/disburse"))
            .json(&DisburseRequest {
                borrower_id,
                amount,
            })
            .send()
            .await?;
        Self::check_status(response).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/gateway_tests.rs"]
mod tests;
