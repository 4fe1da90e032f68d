//! Fee Domain - Payment Processor Fee Engine
//!
//! Pure, deterministic fee arithmetic for the calculator and invoicing
//! tools. Nothing in this crate performs I/O or keeps state between calls.
//!
//! # Components
//!
//! - **Fee Schedule**: static (percentage, fixed fee) table keyed by
//!   [`TransactionType`]
//! - **Fee Calculator**: forward fee, net amount and the reverse
//!   "should request" amount for a single value
//! - **Batch Aggregator**: per-item breakdowns plus double-rounded totals
//!
//! # Rounding
//!
//! Every output is rounded to cents, ties away from zero. Fee and net are
//! rounded independently, and batch totals re-round sums of rounded items.
//!
//! # Example
//!
//! ```rust
//! use domain_fees::{compute_fee, TransactionType};
//! use rust_decimal_macros::dec;
//!
//! let calc = compute_fee(dec!(100), TransactionType::Domestic, false);
//! assert_eq!(calc.paypal_fee, dec!(3.20));
//! assert_eq!(calc.should_request_amount, dec!(103.30));
//! ```

pub mod schedule;
pub mod calculator;
pub mod batch;
pub mod error;

pub use schedule::{FeeSchedule, FeeStructure, PaymentType, TransactionType, MICROPAYMENT_THRESHOLD};
pub use calculator::{
    compute_fee, compute_fee_f64, compute_fee_with, compute_reverse_amount, FeeCalculation,
};
pub use batch::{compute_batch, parse_amounts, BatchResult};
pub use error::FeeError;
