//! Sequential invoice numbers backed by the storage port

use tracing::debug;

use core_kernel::{KeyValueStore, StoreError};

use crate::error::InvoicingError;

/// Store key holding the last issued sequence number
pub const INVOICE_COUNTER_KEY: &str = "fee-calculator-invoice-counter";

/// Default invoice number prefix
pub const DEFAULT_INVOICE_PREFIX: &str = "INV";

/// Issues numbers such as `INV-2025-0007`
///
/// The counter is global, not per year; the year only decorates the number.
#[derive(Debug)]
pub struct InvoiceNumberSequence<S> {
    store: S,
    prefix: String,
}

impl<S: KeyValueStore> InvoiceNumberSequence<S> {
    /// Creates a sequence with the default `INV` prefix
    pub fn new(store: S) -> Self {
        Self::with_prefix(store, DEFAULT_INVOICE_PREFIX)
    }

    pub fn with_prefix(store: S, prefix: impl Into<String>) -> Self {
        Self {
            store,
            prefix: prefix.into(),
        }
    }

    /// Last issued sequence number, 0 if none
    pub fn current(&self) -> Result<u64, InvoicingError> {
        match self.store.get(INVOICE_COUNTER_KEY)? {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                InvoicingError::from(StoreError::corrupt(INVOICE_COUNTER_KEY, e.to_string()))
            }),
            None => Ok(0),
        }
    }

    /// Increments the counter and formats the next number
    pub fn next_number(&self, year: i32) -> Result<String, InvoicingError> {
        let next = self.current()?.saturating_add(1);
        self.store.set(INVOICE_COUNTER_KEY, &next.to_string())?;

        let number = format_invoice_number(&self.prefix, year, next);
        debug!(%number, "Issued invoice number");
        Ok(number)
    }

    /// Clears the counter so the next number is 1 again
    pub fn reset(&self) -> Result<(), InvoicingError> {
        self.store.remove(INVOICE_COUNTER_KEY)?;
        Ok(())
    }
}

/// Formats `{prefix}-{year}-{sequence}` with the sequence padded to 4 digits
pub fn format_invoice_number(prefix: &str, year: i32, sequence: u64) -> String {
    format!("{}-{}-{:04}", prefix, year, sequence)
}
