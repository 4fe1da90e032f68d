//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for fee and invoice figures that
//! give more meaningful error messages than standard assertions.

use rust_decimal::Decimal;

use domain_fees::{BatchResult, FeeCalculation};
use domain_invoicing::InvoiceTotals;

/// Asserts that two amounts differ by at most `tolerance`
pub fn assert_amount_approx_eq(actual: Decimal, expected: Decimal, tolerance: Decimal) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "Amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual,
        expected,
        diff,
        tolerance
    );
}

/// Asserts that an amount has at most two decimal places
pub fn assert_cents_precision(amount: Decimal) {
    assert!(
        amount.normalize().scale() <= 2,
        "Expected at most 2 decimal places, got {}",
        amount
    );
}

/// Asserts the fee, net and request figures of a calculation
pub fn assert_fee_breakdown(
    calculation: &FeeCalculation,
    fee: Decimal,
    net: Decimal,
    request: Decimal,
) {
    assert_eq!(
        calculation.paypal_fee, fee,
        "Fee mismatch for amount {}",
        calculation.original_amount
    );
    assert_eq!(
        calculation.net_amount, net,
        "Net mismatch for amount {}",
        calculation.original_amount
    );
    assert_eq!(
        calculation.should_request_amount, request,
        "Request amount mismatch for amount {}",
        calculation.original_amount
    );
}

/// Asserts that every monetary field is zero
pub fn assert_zero_calculation(calculation: &FeeCalculation) {
    assert!(
        calculation.is_zero(),
        "Expected zero calculation, got {:?}",
        calculation
    );
}

/// Asserts that batch totals equal the rounded sums of the per-item figures
pub fn assert_batch_consistent(result: &BatchResult) {
    let sum = |f: fn(&FeeCalculation) -> Decimal| {
        core_kernel::round_cents(result.calculations.iter().map(f).sum::<Decimal>())
    };

    assert_eq!(result.total_original, sum(|c| c.original_amount), "Original total mismatch");
    assert_eq!(result.total_fees, sum(|c| c.paypal_fee), "Fee total mismatch");
    assert_eq!(result.total_net, sum(|c| c.net_amount), "Net total mismatch");
}

/// Asserts the four invoice figures
pub fn assert_invoice_totals(
    totals: &InvoiceTotals,
    subtotal: Decimal,
    discount: Decimal,
    tax: Decimal,
    total: Decimal,
) {
    assert_eq!(totals.subtotal, subtotal, "Subtotal mismatch");
    assert_eq!(totals.discount_amount, discount, "Discount mismatch");
    assert_eq!(totals.tax_amount, tax, "Tax mismatch");
    assert_eq!(totals.total, total, "Total mismatch");
}
