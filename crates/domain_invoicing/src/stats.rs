//! Invoice portfolio statistics

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::round_cents;

use crate::invoice::{Invoice, InvoiceStatus};

/// Aggregate figures over a set of invoices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceStats {
    pub total_invoices: usize,
    pub total_amount: Decimal,
    pub paid_amount: Decimal,
    pub pending_amount: Decimal,
    pub overdue_amount: Decimal,
    pub average_invoice_amount: Decimal,
}

/// Summarises invoice totals by payment state
///
/// Paid invoices count as paid. Draft and sent invoices count as overdue
/// once `today` is past their due date and as pending before that. Invoices
/// already marked overdue or cancelled only contribute to the grand total.
pub fn compute_invoice_stats(invoices: &[Invoice], today: NaiveDate) -> InvoiceStats {
    if invoices.is_empty() {
        return InvoiceStats::default();
    }

    let mut total = Decimal::ZERO;
    let mut paid = Decimal::ZERO;
    let mut pending = Decimal::ZERO;
    let mut overdue = Decimal::ZERO;

    for invoice in invoices {
        total = total.saturating_add(invoice.total);
        match invoice.status {
            InvoiceStatus::Paid => paid = paid.saturating_add(invoice.total),
            InvoiceStatus::Sent | InvoiceStatus::Draft => {
                if invoice.due_date < today {
                    overdue = overdue.saturating_add(invoice.total);
                } else {
                    pending = pending.saturating_add(invoice.total);
                }
            }
            InvoiceStatus::Overdue | InvoiceStatus::Cancelled => {}
        }
    }

    InvoiceStats {
        total_invoices: invoices.len(),
        total_amount: round_cents(total),
        paid_amount: round_cents(paid),
        pending_amount: round_cents(pending),
        overdue_amount: round_cents(overdue),
        average_invoice_amount: round_cents(total / Decimal::from(invoices.len())),
    }
}
