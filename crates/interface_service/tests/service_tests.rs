//! End-to-end tests for the calculator service
//!
//! These tests exercise the fee engine, invoice composition and numbering
//! together through `CalculatorService`.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, InMemoryStore, KeyValueStore};
use domain_fees::TransactionType;
use domain_invoicing::{compute_invoice_stats, InvoiceStatus, InvoiceTotalsInput};
use interface_service::{CalculatorService, ServiceConfig};
use test_utils::*;

fn service() -> CalculatorService<InMemoryStore> {
    CalculatorService::new(ServiceConfig::default(), InMemoryStore::new())
}

// ============================================================================
// Fee Tests
// ============================================================================

mod fee_tests {
    use super::*;

    #[test]
    fn test_reference_amounts() {
        let service = service();

        assert_fee_breakdown(
            &service.fee(AmountFixtures::hundred()),
            dec!(3.20),
            dec!(96.80),
            dec!(103.30),
        );
        assert_fee_breakdown(
            &service.fee_as(AmountFixtures::hundred(), TransactionType::International, false),
            dec!(4.70),
            dec!(95.30),
            dec!(104.92),
        );

        let micro = service.fee_as(AmountFixtures::micro(), TransactionType::Domestic, true);
        assert_eq!(micro.paypal_fee, dec!(0.30));
        assert_eq!(micro.net_amount, dec!(4.70));
    }

    #[test]
    fn test_threshold_amount_is_standard_tier() {
        let calc = service().fee_as(AmountFixtures::threshold(), TransactionType::Domestic, true);
        assert_eq!(calc.fee_percentage, dec!(2.9));
    }

    #[test]
    fn test_small_amount_uses_micropayment_tier() {
        let service = service();
        let single = service.fee(AmountFixtures::micro());

        assert_fee_breakdown(&single, dec!(0.30), dec!(4.70), dec!(5.32));
        assert_eq!(single, service.batch(&[AmountFixtures::micro()]).calculations[0]);
        assert_eq!(service.reverse_amount(AmountFixtures::micro()), dec!(5.32));
    }

    #[test]
    fn test_non_positive_amounts() {
        let service = service();
        assert_zero_calculation(&service.fee(AmountFixtures::zero()));
        assert_zero_calculation(&service.fee(AmountFixtures::negative()));
        assert_eq!(service.reverse_amount(AmountFixtures::negative()), Decimal::ZERO);
    }

    #[test]
    fn test_reverse_matches_forward_request() {
        let service = service();
        let calc = service.fee(dec!(250));
        assert_eq!(service.reverse_amount(dec!(250)), calc.should_request_amount);
    }
}

// ============================================================================
// Batch Tests
// ============================================================================

mod batch_tests {
    use super::*;

    #[test]
    fn test_mixed_batch() {
        let result = service().batch(&AmountFixtures::mixed_batch());

        assert_eq!(result.len(), 4);
        assert_eq!(result.calculations[1].paypal_fee, dec!(0.30));
        assert!(result.calculations[2].is_zero());
        assert_batch_consistent(&result);
    }

    #[test]
    fn test_batch_from_text_skips_invalid_entries() {
        let result = service().batch_from_text("100, abc\n5\r\n-3,,0\n 20 ");

        assert_eq!(result.len(), 3);
        assert_eq!(result.total_original, dec!(125));
        assert_batch_consistent(&result);
    }

    #[test]
    fn test_empty_text() {
        let result = service().batch_from_text("");
        assert!(result.is_empty());
        assert_eq!(result.total_fees, Decimal::ZERO);
    }

    #[test]
    fn test_batch_serializes_camel_case() {
        let result = service().batch(&[dec!(100)]);
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("totalFees").is_some());
        assert!(json["calculations"][0].get("shouldRequestAmount").is_some());
    }
}

// ============================================================================
// Invoice Tests
// ============================================================================

mod invoice_tests {
    use super::*;

    #[test]
    fn test_invoice_totals() {
        let items = vec![InvoiceFixtures::consulting_item()];
        let input = InvoiceTotalsInput::default()
            .with_tax_rate(dec!(10))
            .with_discount_rate(dec!(5));

        let totals = service().invoice_totals(&items, input);
        assert_invoice_totals(&totals, dec!(100), dec!(5), dec!(9.5), dec!(104.5));

        let with_fee = service().invoice_totals(&items, input.with_paypal_fee(dec!(3.20)));
        assert_eq!(with_fee.total, dec!(107.7));
    }

    #[test]
    fn test_invoice_totals_over_several_items() {
        let items = vec![InvoiceFixtures::consulting_item(), InvoiceFixtures::hosting_item()];
        let totals = service().invoice_totals(&items, InvoiceTotalsInput::default());
        assert_invoice_totals(&totals, dec!(119.99), Decimal::ZERO, Decimal::ZERO, dec!(119.99));
    }

    #[test]
    fn test_finalize_issues_sequential_numbers() {
        let service = service();
        let now = TemporalFixtures::issued_at();
        let draft = service
            .new_draft(TemporalFixtures::issue_date())
            .with_customer(InvoiceFixtures::customer())
            .add_item(InvoiceFixtures::consulting_item());

        let first = service.finalize_draft(&draft, now).unwrap();
        let second = service.finalize_draft(&draft, now).unwrap();

        assert_eq!(first.invoice_number, "INV-2025-0001");
        assert_eq!(second.invoice_number, "INV-2025-0002");
        assert_eq!(first.due_date, TemporalFixtures::due_date());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_invalid_draft_does_not_consume_number() {
        let store = Arc::new(InMemoryStore::new());
        let service = CalculatorService::new(ServiceConfig::default(), Arc::clone(&store));
        let now = TemporalFixtures::issued_at();

        let empty = service.new_draft(TemporalFixtures::issue_date());
        let err = service.finalize_draft(&empty, now).unwrap_err();
        assert!(err.is_validation());
        assert!(store.is_empty());

        let free_only = TestInvoiceBuilder::new()
            .with_items(vec![InvoiceFixtures::free_item()])
            .draft();
        assert!(service.finalize_draft(&free_only, now).unwrap_err().is_validation());
        assert!(store.is_empty());

        let draft = TestInvoiceBuilder::new().draft();
        let invoice = service.finalize_draft(&draft, now).unwrap();
        assert_eq!(invoice.invoice_number, "INV-2025-0001");
    }

    #[test]
    fn test_configured_defaults_flow_into_invoices() {
        let config = ServiceConfig {
            transaction_type: TransactionType::International,
            currency: Currency::EUR,
            invoice_prefix: "BILL".to_string(),
            ..Default::default()
        };
        let service = CalculatorService::new(config, InMemoryStore::new());
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();

        let draft = service
            .new_draft(now.date_naive())
            .with_customer(InvoiceFixtures::customer())
            .add_item(InvoiceFixtures::consulting_item())
            .include_fee(service.config().transaction_type);
        let invoice = service.finalize_draft(&draft, now).unwrap();

        assert_eq!(invoice.invoice_number, "BILL-2026-0001");
        assert_eq!(invoice.currency, Currency::EUR);
        assert_eq!(invoice.paypal_fee, dec!(4.70));
        assert_eq!(invoice.total, dec!(104.70));
        assert_eq!(service.format_amount(invoice.total), "€104.70");
    }

    #[test]
    fn test_corrupt_counter_surfaces_store_error() {
        let store = InMemoryStore::new();
        store
            .set(domain_invoicing::numbering::INVOICE_COUNTER_KEY, "not a number")
            .unwrap();
        let service = CalculatorService::new(ServiceConfig::default(), store);

        let draft = TestInvoiceBuilder::new().draft();
        let err = service
            .finalize_draft(&draft, TemporalFixtures::issued_at())
            .unwrap_err();
        assert!(!err.is_validation());
    }

    #[test]
    fn test_stats_over_built_invoices() {
        let later = TemporalFixtures::after_due() + chrono::Duration::days(10);
        let invoices = vec![
            TestInvoiceBuilder::new()
                .with_invoice_number("INV-2025-0001")
                .with_amount(dec!(100))
                .with_status(InvoiceStatus::Paid)
                .build(),
            TestInvoiceBuilder::new()
                .with_invoice_number("INV-2025-0002")
                .with_amount(dec!(60))
                .with_status(InvoiceStatus::Sent)
                .build(),
            TestInvoiceBuilder::new()
                .with_invoice_number("INV-2025-0003")
                .with_amount(dec!(20))
                .with_due_date(later)
                .with_status(InvoiceStatus::Sent)
                .build(),
        ];

        let stats = compute_invoice_stats(&invoices, TemporalFixtures::after_due());
        assert_eq!(stats.total_invoices, 3);
        assert_eq!(stats.paid_amount, dec!(100));
        assert_eq!(stats.overdue_amount, dec!(60));
        assert_eq!(stats.pending_amount, dec!(20));
        assert_eq!(stats.average_invoice_amount, dec!(60));
        assert!(invoices[1].is_overdue(TemporalFixtures::after_due()));
        assert!(!invoices[2].is_overdue(TemporalFixtures::after_due()));
        assert_eq!(invoices[2].invoice_number, "INV-2025-0003");
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn request_amount_nets_back_to_original(
            amount in positive_amount_strategy(),
            transaction_type in transaction_type_strategy(),
        ) {
            let service = service();
            let calc = service.fee_as(amount, transaction_type, false);
            let back = service.fee_as(calc.should_request_amount, transaction_type, false);
            assert_amount_approx_eq(back.net_amount, amount, AmountFixtures::cent());
        }

        #[test]
        fn non_positive_amounts_give_zero_record(amount in non_positive_amount_strategy()) {
            prop_assert!(service().fee(amount).is_zero());
        }

        #[test]
        fn batch_totals_are_consistent(amounts in batch_strategy(20)) {
            let result = service().batch(&amounts);
            prop_assert_eq!(result.len(), amounts.len());
            assert_batch_consistent(&result);
        }

        #[test]
        fn fee_figures_have_cent_precision(amount in positive_amount_strategy()) {
            let calc = service().fee(amount);
            assert_cents_precision(calc.paypal_fee);
            assert_cents_precision(calc.net_amount);
            assert_cents_precision(calc.should_request_amount);
        }

        #[test]
        fn single_fee_matches_batch_item(amount in micro_amount_strategy()) {
            let service = service();
            prop_assert_eq!(service.fee(amount), service.batch(&[amount]).calculations[0]);
        }

        #[test]
        fn fee_is_zero_exactly_for_non_positive(amount in any_amount_strategy()) {
            prop_assert_eq!(service().fee(amount).is_zero(), amount <= Decimal::ZERO);
        }

        #[test]
        fn formatted_amount_uses_configured_symbol(
            currency in currency_strategy(),
            amount in positive_amount_strategy(),
        ) {
            let config = ServiceConfig { currency, ..Default::default() };
            let service = CalculatorService::new(config, InMemoryStore::new());
            prop_assert!(service.format_amount(amount).starts_with(currency.symbol()));
        }

        #[test]
        fn discount_stays_within_subtotal(
            items in proptest::collection::vec(invoice_item_strategy(), 1..8),
            discount in percentage_strategy(),
        ) {
            let input = InvoiceTotalsInput::default().with_discount_rate(discount);
            let totals = service().invoice_totals(&items, input);
            prop_assert!(totals.discount_amount >= Decimal::ZERO);
            prop_assert!(totals.discount_amount <= totals.subtotal);
        }

        #[test]
        fn zero_rates_keep_total_at_subtotal(
            items in proptest::collection::vec(invoice_item_strategy(), 0..8),
        ) {
            let totals = service().invoice_totals(&items, InvoiceTotalsInput::default());
            prop_assert_eq!(totals.total, totals.subtotal);
        }
    }
}
