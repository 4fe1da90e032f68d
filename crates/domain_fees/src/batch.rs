//! Batch aggregation
//!
//! Applies the fee calculator over many amounts and sums the results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::{parse_amount, round_cents};

use crate::calculator::{compute_fee, FeeCalculation};
use crate::schedule::{TransactionType, MICROPAYMENT_THRESHOLD};

/// Per-item breakdowns plus aggregate totals
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult {
    pub total_original: Decimal,
    pub total_fees: Decimal,
    pub total_net: Decimal,
    pub calculations: Vec<FeeCalculation>,
}

impl BatchResult {
    /// Number of computed items
    pub fn len(&self) -> usize {
        self.calculations.len()
    }

    /// Returns true when no amounts were supplied
    pub fn is_empty(&self) -> bool {
        self.calculations.is_empty()
    }
}

/// Computes fees for each amount and aggregates them
///
/// Micropayment eligibility is decided per item (`amount < 10`). Totals are
/// sums of the already-rounded per-item figures, rounded again. Non-positive
/// amounts are not filtered and contribute zero records.
pub fn compute_batch(amounts: &[Decimal], transaction_type: TransactionType) -> BatchResult {
    let calculations: Vec<FeeCalculation> = amounts
        .iter()
        .map(|&amount| compute_fee(amount, transaction_type, amount < MICROPAYMENT_THRESHOLD))
        .collect();

    let (original, fees, net) = calculations.iter().fold(
        (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO),
        |(original, fees, net), calc| {
            (
                original.saturating_add(calc.original_amount),
                fees.saturating_add(calc.paypal_fee),
                net.saturating_add(calc.net_amount),
            )
        },
    );

    debug!(items = calculations.len(), %transaction_type, "Computed batch");

    BatchResult {
        total_original: round_cents(original),
        total_fees: round_cents(fees),
        total_net: round_cents(net),
        calculations,
    }
}

/// Extracts positive amounts from free text
///
/// Entries are separated by commas and/or newlines. Blank, unparseable and
/// non-positive entries are dropped.
///
/// Each trimmed entry must parse as a whole, in plain or scientific
/// notation. Text such as `"100abc"` or `"$20"` is dropped rather than read
/// as its numeric prefix.
pub fn parse_amounts(text: &str) -> Vec<Decimal> {
    text.split(|c| c == ',' || c == '\n' || c == '\r')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| parse_amount(entry).ok())
        .filter(|amount| *amount > Decimal::ZERO)
        .collect()
}
