use crate::plan::Locator;
use std::time::Duration;
use wso_core::RecordError;

#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error(transparent)]
    Precondition(#[from] RecordError),

    #[error("{0} must be configured before submitting")]
    MissingSetting(&'static str),

    #[error("clicking submit requires submitter details")]
    MissingSubmitter,

    #[error("element not found: {0}")]
    ElementNotFound(Locator),

    #[error("timed out after {timeout:?} waiting for {locator}")]
    Timeout { locator: Locator, timeout: Duration },

    #[error("browser driver error: {0}")]
    Driver(String),

    #[error("formatting effective date: {0}")]
    Date(#[from] time::error::Format),
}
