//! Core Kernel - Foundational types for the fee calculator workspace
//!
//! This crate provides the building blocks shared by every other crate:
//! - Decimal money helpers with the workspace-wide cent rounding rule
//! - Strongly-typed identifiers for invoices, items and customers
//! - The key-value storage port used by persistence collaborators

pub mod money;
pub mod identifiers;
pub mod ports;
pub mod error;

pub use money::{
    decimal_from_f64, format_currency, parse_amount, round_cents, Currency, MoneyError, Rate,
    CENT_DECIMAL_PLACES,
};
pub use identifiers::{CustomerId, InvoiceId, InvoiceItemId};
pub use ports::{InMemoryStore, KeyValueStore, StoreError};
pub use error::CoreError;
