//! Service error handling

use thiserror::Error;

use core_kernel::CoreError;
use domain_invoicing::InvoicingError;

/// Service error types
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Invoicing(#[from] InvoicingError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ServiceError {
    /// True when the caller supplied an invalid draft or settings
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ServiceError::Invoicing(InvoicingError::Validation(_))
                | ServiceError::Core(CoreError::Validation(_))
        )
    }
}
