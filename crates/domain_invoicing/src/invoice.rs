//! Invoice model and lifecycle
//!
//! An [`InvoiceDraft`] collects the editable inputs; finalizing it freezes
//! the computed totals into an [`Invoice`]. Only inputs are meant to be
//! persisted by outer layers, totals are always recomputed from them.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{round_cents, Currency, CustomerId, InvoiceId, InvoiceItemId};
use domain_fees::{compute_fee, TransactionType};

use crate::error::InvoicingError;
use crate::totals::{compute_invoice_totals, InvoiceTotals};

pub const DEFAULT_PAYMENT_TERMS: &str = "Payment is due within 30 days of invoice date.";
pub const DEFAULT_PAYMENT_INSTRUCTIONS: &str =
    "Please make payment via PayPal to the email address provided.";

/// Days between issue and due date for new and duplicated invoices
pub const DEFAULT_DUE_DAYS: i64 = 30;

/// Invoice status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Being edited, not yet sent
    Draft,
    /// Sent to the customer
    Sent,
    /// Fully paid
    Paid,
    /// Explicitly marked overdue
    Overdue,
    /// Voided
    Cancelled,
}

/// Postal address; every part is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub country: Option<String>,
}

/// Contact details entered on the invoice form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<Address>,
}

impl CustomerDetails {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }
}

/// The billed customer as stored on an invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    #[serde(flatten)]
    pub details: CustomerDetails,
}

/// A line item
///
/// `amount` is `quantity * rate` rounded to cents and is kept current by the
/// constructor and setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    pub id: InvoiceItemId,
    pub description: String,
    pub quantity: Decimal,
    pub rate: Decimal,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<Decimal>,
}

impl InvoiceItem {
    /// Creates a new line item
    pub fn new(description: impl Into<String>, quantity: Decimal, rate: Decimal) -> Self {
        Self {
            id: InvoiceItemId::new(),
            description: description.into(),
            quantity,
            rate,
            amount: line_amount(quantity, rate),
            tax_rate: None,
            tax_amount: None,
        }
    }

    /// Updates the quantity and the derived amount
    pub fn set_quantity(&mut self, quantity: Decimal) {
        self.quantity = quantity;
        self.amount = line_amount(self.quantity, self.rate);
    }

    /// Updates the unit rate and the derived amount
    pub fn set_rate(&mut self, rate: Decimal) {
        self.rate = rate;
        self.amount = line_amount(self.quantity, self.rate);
    }

    /// True when the item carries something billable
    pub fn is_billable(&self) -> bool {
        !self.description.trim().is_empty() && !self.amount.is_zero()
    }
}

/// `quantity * rate` rounded to cents
pub fn line_amount(quantity: Decimal, rate: Decimal) -> Decimal {
    round_cents(quantity.saturating_mul(rate))
}

/// An issued invoice with frozen totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: InvoiceId,
    pub invoice_number: String,
    pub status: InvoiceStatus,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub customer: Customer,
    pub items: Vec<InvoiceItem>,
    pub currency: Currency,
    pub subtotal: Decimal,
    pub tax_rate: Decimal,
    pub tax_amount: Decimal,
    pub discount_rate: Decimal,
    pub discount_amount: Decimal,
    pub paypal_fee: Decimal,
    pub include_paypal_fee: bool,
    pub total: Decimal,
    pub notes: Option<String>,
    pub terms: Option<String>,
    pub payment_instructions: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
}

impl Invoice {
    /// Changes the status, stamping `paid_at` when it becomes paid
    pub fn update_status(&mut self, status: InvoiceStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now;
        if status == InvoiceStatus::Paid {
            self.paid_at = Some(now);
        }
    }

    /// Checks if the invoice is past due
    ///
    /// Paid and cancelled invoices are never overdue. The due date itself is
    /// still payable.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !matches!(self.status, InvoiceStatus::Paid | InvoiceStatus::Cancelled)
            && today > self.due_date
    }

    /// Recomputes totals from the stored inputs
    pub fn recompute_totals(&self) -> InvoiceTotals {
        compute_invoice_totals(
            &self.items,
            self.tax_rate,
            self.discount_rate,
            self.paypal_fee,
            self.include_paypal_fee,
        )
    }

    /// Copies the invoice as a fresh draft
    ///
    /// Items, customer and amounts are kept; identity, dates and payment
    /// state are reset.
    pub fn duplicate(&self, invoice_number: impl Into<String>, now: DateTime<Utc>) -> Invoice {
        let today = now.date_naive();
        Invoice {
            id: InvoiceId::new_v7(),
            invoice_number: invoice_number.into(),
            status: InvoiceStatus::Draft,
            issue_date: today,
            due_date: today + Duration::days(DEFAULT_DUE_DAYS),
            created_at: now,
            updated_at: now,
            paid_at: None,
            ..self.clone()
        }
    }
}

/// Editable invoice inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDraft {
    pub customer: CustomerDetails,
    pub items: Vec<InvoiceItem>,
    pub currency: Currency,
    pub tax_rate: Decimal,
    pub discount_rate: Decimal,
    pub include_paypal_fee: bool,
    pub transaction_type: TransactionType,
    pub notes: Option<String>,
    pub terms: String,
    pub payment_instructions: String,
    pub due_date: NaiveDate,
}

impl InvoiceDraft {
    /// Creates an empty draft due on `due_date`
    pub fn new(due_date: NaiveDate) -> Self {
        Self {
            customer: CustomerDetails::default(),
            items: Vec::new(),
            currency: Currency::default(),
            tax_rate: Decimal::ZERO,
            discount_rate: Decimal::ZERO,
            include_paypal_fee: false,
            transaction_type: TransactionType::default(),
            notes: None,
            terms: DEFAULT_PAYMENT_TERMS.to_string(),
            payment_instructions: DEFAULT_PAYMENT_INSTRUCTIONS.to_string(),
            due_date,
        }
    }

    /// Creates a draft due [`DEFAULT_DUE_DAYS`] after `today`
    pub fn due_in_default_days(today: NaiveDate) -> Self {
        Self::new(today + Duration::days(DEFAULT_DUE_DAYS))
    }

    pub fn with_customer(mut self, customer: CustomerDetails) -> Self {
        self.customer = customer;
        self
    }

    pub fn add_item(mut self, item: InvoiceItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_tax_rate(mut self, tax_rate: Decimal) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    pub fn with_discount_rate(mut self, discount_rate: Decimal) -> Self {
        self.discount_rate = discount_rate;
        self
    }

    /// Passes the processor fee on to the customer
    pub fn include_fee(mut self, transaction_type: TransactionType) -> Self {
        self.include_paypal_fee = true;
        self.transaction_type = transaction_type;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Fee charged on the discounted, taxed amount; zero unless included
    pub fn processor_fee(&self) -> Decimal {
        if !self.include_paypal_fee {
            return Decimal::ZERO;
        }
        let base = compute_invoice_totals(
            &self.items,
            self.tax_rate,
            self.discount_rate,
            Decimal::ZERO,
            false,
        );
        let chargeable = base
            .subtotal
            .saturating_sub(base.discount_amount)
            .saturating_add(base.tax_amount);
        compute_fee(chargeable, self.transaction_type, false).paypal_fee
    }

    /// Current totals including the processor fee when enabled
    pub fn totals(&self) -> InvoiceTotals {
        compute_invoice_totals(
            &self.items,
            self.tax_rate,
            self.discount_rate,
            self.processor_fee(),
            self.include_paypal_fee,
        )
    }

    /// Checks that the draft can be issued
    ///
    /// Requires a customer name and email, plus at least one item with a
    /// description and a non-zero amount.
    pub fn validate(&self) -> Result<(), InvoicingError> {
        if self.customer.name.trim().is_empty() || self.customer.email.trim().is_empty() {
            return Err(InvoicingError::validation(
                "customer name and email are required",
            ));
        }
        if !self.items.iter().any(InvoiceItem::is_billable) {
            return Err(InvoicingError::validation(
                "at least one item with a description and amount is required",
            ));
        }
        Ok(())
    }

    /// Validates the draft and produces a `Draft`-status invoice
    pub fn finalize(
        &self,
        invoice_number: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<Invoice, InvoicingError> {
        self.validate()?;

        let paypal_fee = self.processor_fee();
        let totals = compute_invoice_totals(
            &self.items,
            self.tax_rate,
            self.discount_rate,
            paypal_fee,
            self.include_paypal_fee,
        );
        let invoice_number = invoice_number.into();

        debug!(
            invoice_number = %invoice_number,
            total = %totals.total,
            fee = %paypal_fee,
            "Finalized invoice draft"
        );

        Ok(Invoice {
            id: InvoiceId::new_v7(),
            invoice_number,
            status: InvoiceStatus::Draft,
            issue_date: now.date_naive(),
            due_date: self.due_date,
            customer: Customer {
                id: CustomerId::new(),
                details: self.customer.clone(),
            },
            items: self.items.clone(),
            currency: self.currency,
            subtotal: totals.subtotal,
            tax_rate: self.tax_rate,
            tax_amount: totals.tax_amount,
            discount_rate: self.discount_rate,
            discount_amount: totals.discount_amount,
            paypal_fee,
            include_paypal_fee: self.include_paypal_fee,
            total: totals.total,
            notes: self.notes.clone(),
            terms: Some(self.terms.clone()),
            payment_instructions: Some(self.payment_instructions.clone()),
            created_at: now,
            updated_at: now,
            paid_at: None,
        })
    }
}
