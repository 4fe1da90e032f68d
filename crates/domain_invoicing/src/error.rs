//! Invoicing domain errors

use thiserror::Error;

use core_kernel::{CoreError, StoreError};

/// Errors that can occur in the invoicing domain
#[derive(Debug, Error)]
pub enum InvoicingError {
    /// Input rejected before an invoice or settings record is produced
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error from the core kernel
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Storage port failure
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// JSON encode/decode failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl InvoicingError {
    pub fn validation(message: impl Into<String>) -> Self {
        InvoicingError::Validation(message.into())
    }
}
