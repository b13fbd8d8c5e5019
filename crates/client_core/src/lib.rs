pub mod config;
pub mod disburse;
pub mod error;
pub mod forms;
pub mod gateway;
pub mod navigation;
pub mod notify;
pub mod registry;
#[cfg(test)]
pub(crate) mod test_support;

pub use config::{ClientConfig, ConfigError, BASE_URL_ENV, DEFAULT_REQUEST_TIMEOUT};
pub use disburse::{DisbursementDesk, DisbursementRequest};
pub use error::GatewayError;
pub use forms::FormPhase;
pub use gateway::{BorrowerGateway, HttpBorrowerGateway};
pub use navigation::Navigator;
pub use notify::{Notification, NotificationRelay, Severity, DEFAULT_NOTICE_TTL};
pub use registry::BorrowerRegistry;
