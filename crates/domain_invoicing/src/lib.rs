//! Invoicing Domain - Invoice Totals and Lifecycle
//!
//! This crate composes invoice totals on top of the fee engine in
//! `domain_fees` and models the invoices built from them.
//!
//! # Totals Composition
//!
//! The order is fixed:
//! 1. subtotal = sum of item amounts
//! 2. discount = subtotal x discount rate
//! 3. tax = (subtotal - discount) x tax rate
//! 4. total = subtotal - discount + tax (+ processor fee when included)
//!
//! Each figure is rounded to cents from its own unrounded intermediate.
//!
//! # Example
//!
//! ```rust
//! use domain_invoicing::{compute_invoice_totals, InvoiceItem};
//! use rust_decimal::Decimal;
//! use rust_decimal_macros::dec;
//!
//! let items = vec![InvoiceItem::new("Consulting", dec!(2), dec!(50))];
//! let totals = compute_invoice_totals(&items, dec!(10), dec!(5), Decimal::ZERO, false);
//! assert_eq!(totals.total, dec!(104.5));
//! ```

pub mod totals;
pub mod invoice;
pub mod stats;
pub mod settings;
pub mod numbering;
pub mod error;

pub use totals::{compute_invoice_totals, InvoiceTotals, InvoiceTotalsInput};
pub use invoice::{
    line_amount, Address, Customer, CustomerDetails, Invoice, InvoiceDraft, InvoiceItem,
    InvoiceStatus, DEFAULT_DUE_DAYS, DEFAULT_PAYMENT_INSTRUCTIONS, DEFAULT_PAYMENT_TERMS,
};
pub use stats::{compute_invoice_stats, InvoiceStats};
pub use settings::{
    format_company_address, merge_with_defaults, CompanyAddress, CompanyAddressPatch,
    CompanySettings, CompanySettingsPatch, CompanySettingsStore, COMPANY_SETTINGS_KEY,
};
pub use numbering::{format_invoice_number, InvoiceNumberSequence, DEFAULT_INVOICE_PREFIX};
pub use error::InvoicingError;
