//! Calculator service
//!
//! Wires the configured defaults into the fee engine and the invoicing
//! domain. All engine calls are pure; the only state is the invoice number
//! sequence held in the store.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use tracing::{info, instrument};

use core_kernel::{format_currency, KeyValueStore};
use domain_fees::{
    compute_batch, compute_fee, compute_reverse_amount, parse_amounts, BatchResult,
    FeeCalculation, TransactionType, MICROPAYMENT_THRESHOLD,
};
use domain_invoicing::{
    Invoice, InvoiceDraft, InvoiceItem, InvoiceNumberSequence, InvoiceTotals, InvoiceTotalsInput,
};

use crate::config::ServiceConfig;
use crate::error::ServiceError;

/// Entry point for callers of the engine
#[derive(Debug)]
pub struct CalculatorService<S> {
    config: ServiceConfig,
    numbers: InvoiceNumberSequence<S>,
}

impl<S: KeyValueStore> CalculatorService<S> {
    /// Creates a service issuing invoice numbers from `store`
    pub fn new(config: ServiceConfig, store: S) -> Self {
        let numbers = InvoiceNumberSequence::with_prefix(store, config.invoice_prefix.clone());
        Self { config, numbers }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Fee for `amount` under the configured transaction type
    ///
    /// Amounts below the micropayment threshold use the micropayment tier,
    /// the same rule `batch` applies per item.
    #[instrument(skip(self))]
    pub fn fee(&self, amount: Decimal) -> FeeCalculation {
        compute_fee(amount, self.config.transaction_type, is_micro(amount))
    }

    /// Fee for `amount` with an explicit type and micropayment flag
    #[instrument(skip(self))]
    pub fn fee_as(
        &self,
        amount: Decimal,
        transaction_type: TransactionType,
        is_micropayment: bool,
    ) -> FeeCalculation {
        compute_fee(amount, transaction_type, is_micropayment)
    }

    /// Amount to request so `desired` arrives after fees
    #[instrument(skip(self))]
    pub fn reverse_amount(&self, desired: Decimal) -> Decimal {
        compute_reverse_amount(desired, self.config.transaction_type, is_micro(desired))
    }

    #[instrument(skip(self, amounts), fields(count = amounts.len()))]
    pub fn batch(&self, amounts: &[Decimal]) -> BatchResult {
        compute_batch(amounts, self.config.transaction_type)
    }

    /// Parses comma or newline separated amounts and aggregates their fees
    #[instrument(skip(self, text))]
    pub fn batch_from_text(&self, text: &str) -> BatchResult {
        let amounts = parse_amounts(text);
        self.batch(&amounts)
    }

    #[instrument(skip(self, items, input), fields(items = items.len()))]
    pub fn invoice_totals(&self, items: &[InvoiceItem], input: InvoiceTotalsInput) -> InvoiceTotals {
        input.compute(items)
    }

    /// Empty draft in the configured currency, due after the default term
    pub fn new_draft(&self, today: NaiveDate) -> InvoiceDraft {
        let mut draft = InvoiceDraft::due_in_default_days(today).with_currency(self.config.currency);
        draft.transaction_type = self.config.transaction_type;
        draft
    }

    /// Validates the draft, then issues the next number and finalizes it
    ///
    /// An invalid draft does not consume a number.
    #[instrument(skip(self, draft))]
    pub fn finalize_draft(
        &self,
        draft: &InvoiceDraft,
        now: DateTime<Utc>,
    ) -> Result<Invoice, ServiceError> {
        draft.validate()?;
        let number = self.numbers.next_number(now.year())?;
        let invoice = draft.finalize(number, now)?;

        info!(
            invoice_number = %invoice.invoice_number,
            total = %invoice.total,
            "Issued invoice"
        );
        Ok(invoice)
    }

    /// Formats `amount` with the configured currency symbol
    pub fn format_amount(&self, amount: Decimal) -> String {
        format_currency(amount, self.config.currency.symbol())
    }
}

fn is_micro(amount: Decimal) -> bool {
    amount < MICROPAYMENT_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::InMemoryStore;
    use rust_decimal_macros::dec;

    fn service() -> CalculatorService<InMemoryStore> {
        CalculatorService::new(ServiceConfig::default(), InMemoryStore::new())
    }

    #[test]
    fn test_fee_uses_configured_type() {
        let config = ServiceConfig {
            transaction_type: TransactionType::International,
            ..Default::default()
        };
        let international = CalculatorService::new(config, InMemoryStore::new());
        assert_eq!(international.fee(dec!(100)).paypal_fee, dec!(4.70));
        assert_eq!(service().fee(dec!(100)).paypal_fee, dec!(3.20));
    }

    #[test]
    fn test_small_amount_matches_batch_tier() {
        let service = service();
        let single = service.fee(dec!(5));
        assert_eq!(single.paypal_fee, dec!(0.30));
        assert_eq!(single, service.batch(&[dec!(5)]).calculations[0]);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(service().format_amount(dec!(3.2)), "$3.20");
    }
}
