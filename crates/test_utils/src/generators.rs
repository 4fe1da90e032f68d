//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating amounts, rates and invoice
//! items.

use proptest::prelude::*;
use rust_decimal::Decimal;

use core_kernel::Currency;
use domain_fees::TransactionType;
use domain_invoicing::InvoiceItem;

/// Strategy for generating every transaction type
pub fn transaction_type_strategy() -> impl Strategy<Value = TransactionType> {
    prop_oneof![
        Just(TransactionType::Domestic),
        Just(TransactionType::International),
        Just(TransactionType::Micropayment),
    ]
}

/// Strategy for generating supported currencies
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    proptest::sample::select(Currency::ALL.to_vec())
}

/// Strategy for positive amounts with cent precision (0.01 to 10,000,000.00)
pub fn positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for amounts below the micropayment threshold
pub fn micro_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..1_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for zero and negative amounts
pub fn non_positive_amount_strategy() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..=0i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for amounts of either sign, with up to four decimal places
pub fn any_amount_strategy() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000i64, 0u32..=4u32).prop_map(|(m, s)| Decimal::new(m, s))
}

/// Strategy for percentage rates (0% to 100%)
pub fn percentage_strategy() -> impl Strategy<Value = Decimal> {
    (0u32..=10_000u32).prop_map(|n| Decimal::new(i64::from(n), 2))
}

/// Strategy for line items with cent-precision rates and whole quantities
pub fn invoice_item_strategy() -> impl Strategy<Value = InvoiceItem> {
    (1i64..100i64, 0i64..1_000_000i64).prop_map(|(quantity, rate_cents)| {
        InvoiceItem::new("Generated item", Decimal::from(quantity), Decimal::new(rate_cents, 2))
    })
}

/// Strategy for batches of amounts of either sign
pub fn batch_strategy(max_len: usize) -> impl Strategy<Value = Vec<Decimal>> {
    proptest::collection::vec(any_amount_strategy(), 0..=max_len)
}
