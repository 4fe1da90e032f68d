//! Invoice totals composition
//!
//! The composition order is fixed: discount on the subtotal, tax on the
//! discounted subtotal, then the optional pre-computed processor fee.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{round_cents, Rate};

use crate::invoice::InvoiceItem;

/// Derived invoice figures, each rounded to cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    pub subtotal: Decimal,
    pub tax_amount: Decimal,
    pub discount_amount: Decimal,
    pub total: Decimal,
}

/// Optional composer parameters
///
/// Every field defaults to zero / off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceTotalsInput {
    /// Tax rate in percent (10 = 10%)
    pub tax_rate: Decimal,
    /// Discount rate in percent
    pub discount_rate: Decimal,
    /// Fee amount supplied by the caller
    pub paypal_fee: Decimal,
    /// Whether `paypal_fee` is added to the total
    pub include_paypal_fee: bool,
}

impl InvoiceTotalsInput {
    pub fn with_tax_rate(mut self, tax_rate: Decimal) -> Self {
        self.tax_rate = tax_rate;
        self
    }

    pub fn with_discount_rate(mut self, discount_rate: Decimal) -> Self {
        self.discount_rate = discount_rate;
        self
    }

    /// Adds a fee to the total
    pub fn with_paypal_fee(mut self, fee: Decimal) -> Self {
        self.paypal_fee = fee;
        self.include_paypal_fee = true;
        self
    }

    /// Composes totals for `items` using these parameters
    pub fn compute(&self, items: &[InvoiceItem]) -> InvoiceTotals {
        compute_invoice_totals(
            items,
            self.tax_rate,
            self.discount_rate,
            self.paypal_fee,
            self.include_paypal_fee,
        )
    }
}

/// Computes subtotal, discount, tax and grand total
///
/// Item amounts are taken as-is. Rates are percentages and are not
/// clamped; negative or >100 values are applied arithmetically. Each output
/// is rounded from its own unrounded intermediate.
pub fn compute_invoice_totals(
    items: &[InvoiceItem],
    tax_rate: Decimal,
    discount_rate: Decimal,
    paypal_fee: Decimal,
    include_paypal_fee: bool,
) -> InvoiceTotals {
    let subtotal = items
        .iter()
        .fold(Decimal::ZERO, |acc, item| acc.saturating_add(item.amount));

    let discount_amount = Rate::from_percentage(discount_rate).apply(subtotal);
    let discounted_subtotal = subtotal.saturating_sub(discount_amount);
    let tax_amount = Rate::from_percentage(tax_rate).apply(discounted_subtotal);

    let mut total = discounted_subtotal.saturating_add(tax_amount);
    if include_paypal_fee {
        total = total.saturating_add(paypal_fee);
    }

    InvoiceTotals {
        subtotal: round_cents(subtotal),
        tax_amount: round_cents(tax_amount),
        discount_amount: round_cents(discount_amount),
        total: round_cents(total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(quantity: Decimal, rate: Decimal) -> InvoiceItem {
        InvoiceItem::new("Consulting", quantity, rate)
    }

    #[test]
    fn test_reference_scenario() {
        let items = vec![item(dec!(2), dec!(50))];
        let totals = compute_invoice_totals(&items, dec!(10), dec!(5), Decimal::ZERO, false);

        assert_eq!(totals.subtotal, dec!(100));
        assert_eq!(totals.discount_amount, dec!(5));
        assert_eq!(totals.tax_amount, dec!(9.5));
        assert_eq!(totals.total, dec!(104.5));
    }

    #[test]
    fn test_fee_only_added_when_included() {
        let items = vec![item(dec!(2), dec!(50))];
        let without = compute_invoice_totals(&items, dec!(10), dec!(5), dec!(3.20), false);
        let with = compute_invoice_totals(&items, dec!(10), dec!(5), dec!(3.20), true);

        assert_eq!(without.total, dec!(104.5));
        assert_eq!(with.total, dec!(107.7));
    }

    #[test]
    fn test_huge_amounts_saturate() {
        let items = vec![item(Decimal::ONE, Decimal::MAX)];
        let totals = compute_invoice_totals(&items, dec!(200), Decimal::ZERO, Decimal::ZERO, false);
        assert_eq!(totals.subtotal, Decimal::MAX);
        assert_eq!(totals.tax_amount, Decimal::MAX);
        assert_eq!(totals.total, Decimal::MAX);
    }

    #[test]
    fn test_input_defaults() {
        let items = vec![item(dec!(3), dec!(12.5))];
        let totals = InvoiceTotalsInput::default().compute(&items);
        assert_eq!(totals.subtotal, dec!(37.5));
        assert_eq!(totals.total, dec!(37.5));
        assert_eq!(totals.tax_amount, Decimal::ZERO);
        assert_eq!(totals.discount_amount, Decimal::ZERO);
    }
}
