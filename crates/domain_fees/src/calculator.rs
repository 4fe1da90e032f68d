//! Forward and reverse fee calculation
//!
//! All functions here are total: any input, including zero, negative or
//! overflowing amounts, yields a value rather than an error.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use core_kernel::{decimal_from_f64, round_cents};

use crate::schedule::{FeeSchedule, FeeStructure, TransactionType};

/// Fee breakdown for a single amount
///
/// `paypal_fee` and `net_amount` are rounded independently from the same
/// unrounded fee, so `paypal_fee + net_amount` can differ from
/// `original_amount` by one cent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeCalculation {
    /// The amount the fee was computed for
    pub original_amount: Decimal,
    /// Fee charged, rounded to cents
    pub paypal_fee: Decimal,
    /// Percentage component scaled to 0-100 (2.9, not 0.029)
    pub fee_percentage: Decimal,
    /// Flat component of the fee
    pub fixed_fee: Decimal,
    /// Amount received after the fee, rounded to cents
    pub net_amount: Decimal,
    /// Amount to request so that the net equals `original_amount`
    pub should_request_amount: Decimal,
}

impl FeeCalculation {
    /// The canonical record returned for non-positive amounts
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns true if this is the zero record
    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }
}

/// Computes the fee breakdown for `amount`
///
/// # Arguments
///
/// * `amount` - Amount being sent; `<= 0` yields [`FeeCalculation::zero`]
/// * `transaction_type` - Schedule classification
/// * `is_micropayment` - Selects the micropayment tier when `amount < 10`
pub fn compute_fee(
    amount: Decimal,
    transaction_type: TransactionType,
    is_micropayment: bool,
) -> FeeCalculation {
    if amount <= Decimal::ZERO {
        return FeeCalculation::zero();
    }

    let structure = FeeSchedule::resolve(amount, transaction_type, is_micropayment);
    compute_fee_with(amount, structure)
}

/// Computes the fee breakdown against an explicit fee structure
pub fn compute_fee_with(amount: Decimal, structure: FeeStructure) -> FeeCalculation {
    if amount <= Decimal::ZERO {
        return FeeCalculation::zero();
    }

    match breakdown(amount, structure) {
        Some(calculation) => {
            debug!(
                %amount,
                fee = %calculation.paypal_fee,
                request = %calculation.should_request_amount,
                "Computed fee"
            );
            calculation
        }
        None => {
            warn!(%amount, "Fee calculation overflowed, returning zero record");
            FeeCalculation::zero()
        }
    }
}

/// Computes the fee for an `f64` amount
///
/// NaN and infinities are treated like a non-positive amount.
pub fn compute_fee_f64(
    amount: f64,
    transaction_type: TransactionType,
    is_micropayment: bool,
) -> FeeCalculation {
    compute_fee(decimal_from_f64(amount), transaction_type, is_micropayment)
}

/// Returns only the amount to request so `desired` arrives after fees
pub fn compute_reverse_amount(
    desired: Decimal,
    transaction_type: TransactionType,
    is_micropayment: bool,
) -> Decimal {
    if desired <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let structure = FeeSchedule::resolve(desired, transaction_type, is_micropayment);
    reverse(desired, structure)
        .map(round_cents)
        .unwrap_or_else(|| {
            warn!(%desired, "Reverse fee calculation overflowed, returning zero");
            Decimal::ZERO
        })
}

fn breakdown(amount: Decimal, structure: FeeStructure) -> Option<FeeCalculation> {
    let fee = amount
        .checked_mul(structure.percentage())?
        .checked_add(structure.fixed())?;
    let net = amount.checked_sub(fee)?;
    let request = reverse(amount, structure)?;

    Some(FeeCalculation {
        original_amount: amount,
        paypal_fee: round_cents(fee),
        fee_percentage: (structure.percentage() * dec!(100)).normalize(),
        fixed_fee: structure.fixed(),
        net_amount: round_cents(net),
        should_request_amount: round_cents(request),
    })
}

/// Solves `request * (1 - p) - fixed = amount` for `request`
fn reverse(amount: Decimal, structure: FeeStructure) -> Option<Decimal> {
    let denominator = Decimal::ONE - structure.percentage();
    amount
        .checked_add(structure.fixed())?
        .checked_div(denominator)
}
