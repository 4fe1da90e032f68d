//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for fee and invoice tests.
//! These fixtures are designed to be consistent and predictable for unit tests.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_invoicing::{CustomerDetails, InvoiceItem};

/// Fixture for amounts with known fee outcomes
pub struct AmountFixtures;

impl AmountFixtures {
    /// 100.00; domestic fee 3.20, international fee 4.70
    pub fn hundred() -> Decimal {
        dec!(100.00)
    }

    /// Below the micropayment threshold
    pub fn micro() -> Decimal {
        dec!(5.00)
    }

    /// Exactly at the micropayment threshold, so charged at the standard tier
    pub fn threshold() -> Decimal {
        dec!(10.00)
    }

    pub fn zero() -> Decimal {
        Decimal::ZERO
    }

    pub fn negative() -> Decimal {
        dec!(-25.00)
    }

    /// Mixed batch: standard, micro, zero and a large amount
    pub fn mixed_batch() -> Vec<Decimal> {
        vec![dec!(100), dec!(5), Decimal::ZERO, dec!(1250.75)]
    }

    /// Tolerance for round-trip comparisons
    pub fn cent() -> Decimal {
        dec!(0.01)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard issue instant (Jan 15, 2025 12:00 UTC)
    pub fn issued_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap()
    }

    pub fn issue_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    /// Thirty days after the issue date
    pub fn due_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()
    }

    /// The day after the due date
    pub fn after_due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 15).unwrap()
    }
}

/// Fixture for invoice parts
pub struct InvoiceFixtures;

impl InvoiceFixtures {
    pub fn customer() -> CustomerDetails {
        CustomerDetails::new("Grace Hopper", "grace@example.com")
    }

    /// Two hours of consulting at 50.00
    pub fn consulting_item() -> InvoiceItem {
        InvoiceItem::new("Consulting", dec!(2), dec!(50))
    }

    pub fn hosting_item() -> InvoiceItem {
        InvoiceItem::new("Hosting", dec!(1), dec!(19.99))
    }

    /// Item with no billable amount
    pub fn free_item() -> InvoiceItem {
        InvoiceItem::new("Onboarding call", dec!(1), Decimal::ZERO)
    }
}
