//! Fee domain errors

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised when building custom fee structures
///
/// The calculation functions themselves never fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeeError {
    /// Percentage must be a fraction in [0, 1)
    #[error("Invalid fee percentage {0}: must be at least 0 and below 1")]
    InvalidPercentage(Decimal),

    /// Fixed fee must not be negative
    #[error("Negative fixed fee: {0}")]
    NegativeFixedFee(Decimal),
}
