//! Fee schedule
//!
//! Static table of (percentage, fixed fee) pairs keyed by transaction type.
//! Percentages are fractions in `[0, 1)`; the reverse calculation divides by
//! `1 - percentage`, so that bound is what keeps it defined.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::FeeError;

/// Amounts strictly below this may be billed at the micropayment tier
pub const MICROPAYMENT_THRESHOLD: Decimal = dec!(10);

/// Transaction classification used to pick a schedule entry
///
/// Parsing is lenient: any tag other than `international` or
/// `micropayment` is treated as domestic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionType {
    /// Domestic standard rate
    #[default]
    Domestic,
    /// Cross-border standard rate
    International,
    /// Low-amount tier
    Micropayment,
}

impl TransactionType {
    /// Resolves a tag string; unrecognized tags fall through to domestic
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "international" => TransactionType::International,
            "micropayment" => TransactionType::Micropayment,
            _ => TransactionType::Domestic,
        }
    }

    /// Returns the canonical tag
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Domestic => "domestic",
            TransactionType::International => "international",
            TransactionType::Micropayment => "micropayment",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TransactionType {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

impl From<String> for TransactionType {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<TransactionType> for String {
    fn from(t: TransactionType) -> Self {
        t.as_str().to_string()
    }
}

/// Payment purpose, distinguishing commercial from personal transfers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    GoodsAndServices,
    FriendsAndFamily,
}

/// A (percentage, fixed fee) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeeStructure {
    percentage: Decimal,
    fixed: Decimal,
}

impl FeeStructure {
    /// Builds a custom fee structure, enforcing `0 <= percentage < 1`
    /// and a non-negative fixed fee
    pub fn new(percentage: Decimal, fixed: Decimal) -> Result<Self, FeeError> {
        if percentage < Decimal::ZERO || percentage >= Decimal::ONE {
            return Err(FeeError::InvalidPercentage(percentage));
        }
        if fixed < Decimal::ZERO {
            return Err(FeeError::NegativeFixedFee(fixed));
        }
        Ok(Self { percentage, fixed })
    }

    const fn from_constants(percentage: Decimal, fixed: Decimal) -> Self {
        Self { percentage, fixed }
    }

    /// The percentage as a fraction (0.029 for 2.9%)
    pub fn percentage(&self) -> Decimal {
        self.percentage
    }

    /// The flat per-transaction fee
    pub fn fixed(&self) -> Decimal {
        self.fixed
    }
}

/// The built-in fee table
pub struct FeeSchedule;

impl FeeSchedule {
    /// Domestic standard: 2.9% + 0.30
    pub const DOMESTIC_STANDARD: FeeStructure =
        FeeStructure::from_constants(dec!(0.029), dec!(0.30));

    /// Micropayment: 5% + 0.05
    pub const MICROPAYMENT: FeeStructure = FeeStructure::from_constants(dec!(0.05), dec!(0.05));

    /// International standard: 4.4% + 0.30
    pub const INTERNATIONAL_STANDARD: FeeStructure =
        FeeStructure::from_constants(dec!(0.044), dec!(0.30));

    /// Goods and services: 2.9% + 0.30
    pub const GOODS_AND_SERVICES: FeeStructure =
        FeeStructure::from_constants(dec!(0.029), dec!(0.30));

    /// Friends and family: free
    pub const FRIENDS_AND_FAMILY: FeeStructure =
        FeeStructure::from_constants(Decimal::ZERO, Decimal::ZERO);

    /// Picks the schedule entry for a transaction
    ///
    /// First match wins:
    /// 1. micropayment tag, or the flag set with `amount < 10`
    /// 2. international tag
    /// 3. domestic standard
    pub fn resolve(
        amount: Decimal,
        transaction_type: TransactionType,
        is_micropayment: bool,
    ) -> FeeStructure {
        if transaction_type == TransactionType::Micropayment
            || (is_micropayment && amount < MICROPAYMENT_THRESHOLD)
        {
            Self::MICROPAYMENT
        } else if transaction_type == TransactionType::International {
            Self::INTERNATIONAL_STANDARD
        } else {
            Self::DOMESTIC_STANDARD
        }
    }

    /// Schedule entry for a payment purpose
    pub fn for_payment_type(payment_type: PaymentType) -> FeeStructure {
        match payment_type {
            PaymentType::GoodsAndServices => Self::GOODS_AND_SERVICES,
            PaymentType::FriendsAndFamily => Self::FRIENDS_AND_FAMILY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_tag_is_domestic() {
        assert_eq!(TransactionType::from_tag("paypal-express"), TransactionType::Domestic);
        assert_eq!(TransactionType::from_tag(""), TransactionType::Domestic);
        assert_eq!(TransactionType::from_tag("INTERNATIONAL"), TransactionType::Domestic);
    }

    #[test]
    fn test_resolve_priority() {
        assert_eq!(
            FeeSchedule::resolve(dec!(500), TransactionType::Micropayment, false),
            FeeSchedule::MICROPAYMENT
        );
        assert_eq!(
            FeeSchedule::resolve(dec!(5), TransactionType::International, true),
            FeeSchedule::MICROPAYMENT
        );
        assert_eq!(
            FeeSchedule::resolve(dec!(10), TransactionType::International, true),
            FeeSchedule::INTERNATIONAL_STANDARD
        );
        assert_eq!(
            FeeSchedule::resolve(dec!(5), TransactionType::Domestic, false),
            FeeSchedule::DOMESTIC_STANDARD
        );
    }

    #[test]
    fn test_builtin_entries_respect_bounds() {
        for entry in [
            FeeSchedule::DOMESTIC_STANDARD,
            FeeSchedule::MICROPAYMENT,
            FeeSchedule::INTERNATIONAL_STANDARD,
            FeeSchedule::GOODS_AND_SERVICES,
            FeeSchedule::FRIENDS_AND_FAMILY,
        ] {
            assert!(FeeStructure::new(entry.percentage(), entry.fixed()).is_ok());
        }
    }

    #[test]
    fn test_new_rejects_full_percentage() {
        assert_eq!(
            FeeStructure::new(Decimal::ONE, dec!(0.30)),
            Err(FeeError::InvalidPercentage(Decimal::ONE))
        );
        assert!(FeeStructure::new(dec!(-0.01), Decimal::ZERO).is_err());
        assert_eq!(
            FeeStructure::new(dec!(0.02), dec!(-1)),
            Err(FeeError::NegativeFixedFee(dec!(-1)))
        );
    }
}
