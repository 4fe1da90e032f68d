//! Test Data Builders
//!
//! Provides builder patterns for constructing drafts and issued invoices with
//! sensible defaults. Tests set only the fields they care about.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use domain_fees::TransactionType;
use domain_invoicing::{CustomerDetails, Invoice, InvoiceDraft, InvoiceItem, InvoiceStatus};

use crate::fixtures::{InvoiceFixtures, TemporalFixtures};

/// Builder for invoice drafts and the invoices they finalize into
pub struct TestInvoiceBuilder {
    customer: CustomerDetails,
    items: Vec<InvoiceItem>,
    tax_rate: Decimal,
    discount_rate: Decimal,
    fee_type: Option<TransactionType>,
    due_date: NaiveDate,
    invoice_number: String,
    issued_at: DateTime<Utc>,
    status: InvoiceStatus,
}

impl Default for TestInvoiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestInvoiceBuilder {
    /// Creates a builder with one consulting item and no tax, discount or fee
    pub fn new() -> Self {
        Self {
            customer: InvoiceFixtures::customer(),
            items: vec![InvoiceFixtures::consulting_item()],
            tax_rate: Decimal::ZERO,
            discount_rate: Decimal::ZERO,
            fee_type: None,
            due_date: TemporalFixtures::due_date(),
            invoice_number: "INV-2025-0001".to_string(),
            issued_at: TemporalFixtures::issued_at(),
            status: InvoiceStatus::Draft,
        }
    }

    pub fn with_customer(mut self, customer: CustomerDetails) -> Self {
        self.customer = customer;
        self
    }

    /// Replaces the items
    pub fn with_items(mut self, items: Vec<InvoiceItem>) -> Self {
        self.items = items;
        self
    }

    /// Replaces the items with a single item for `amount`
    pub fn with_amount(self, amount: Decimal) -> Self {
        self.with_items(vec![InvoiceItem::new("Services", Decimal::ONE, amount)])
    }

    pub fn with_tax_rate(mut self, rate: Decimal) -> Self {
        self.tax_rate = rate;
        self
    }

    pub fn with_discount_rate(mut self, rate: Decimal) -> Self {
        self.discount_rate = rate;
        self
    }

    /// Passes the processor fee on for `transaction_type`
    pub fn with_fee(mut self, transaction_type: TransactionType) -> Self {
        self.fee_type = Some(transaction_type);
        self
    }

    pub fn with_due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = date;
        self
    }

    pub fn with_invoice_number(mut self, number: impl Into<String>) -> Self {
        self.invoice_number = number.into();
        self
    }

    /// Status applied after finalizing
    pub fn with_status(mut self, status: InvoiceStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds the draft
    pub fn draft(&self) -> InvoiceDraft {
        let mut draft = InvoiceDraft::new(self.due_date)
            .with_customer(self.customer.clone())
            .with_tax_rate(self.tax_rate)
            .with_discount_rate(self.discount_rate);
        draft.items = self.items.clone();
        if let Some(transaction_type) = self.fee_type {
            draft = draft.include_fee(transaction_type);
        }
        draft
    }

    /// Finalizes the draft and applies the status
    ///
    /// # Panics
    ///
    /// Panics if the configured draft does not validate
    pub fn build(self) -> Invoice {
        let mut invoice = self
            .draft()
            .finalize(self.invoice_number.clone(), self.issued_at)
            .expect("test invoice draft should validate");
        if self.status != InvoiceStatus::Draft {
            invoice.update_status(self.status, self.issued_at);
        }
        invoice
    }
}
