//! Fee Calculator - Batch Binary
//!
//! Reads amounts separated by commas or newlines from stdin and prints the
//! batch fee breakdown as JSON. Amounts are emitted as decimal strings
//! (`"3.20"`) so no precision is lost to floating point.
//!
//! # Usage
//!
//! ```bash
//! echo "100, 5, 250" | cargo run --bin feecalc
//! FEECALC_TRANSACTION_TYPE=international cargo run --bin feecalc < amounts.txt
//! ```
//!
//! # Environment Variables
//!
//! * `FEECALC_TRANSACTION_TYPE` - domestic, international or micropayment (default: domestic)
//! * `FEECALC_CURRENCY` - USD, EUR, GBP, CAD, AUD or JPY (default: USD)
//! * `FEECALC_INVOICE_PREFIX` - Invoice number prefix (default: INV)
//! * `FEECALC_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::io::Read;

use core_kernel::InMemoryStore;
use interface_service::{telemetry, CalculatorService, ServiceConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, config_error) = match ServiceConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (ServiceConfig::default(), Some(err)),
    };

    telemetry::init_tracing(&config.log_level)?;

    if let Some(err) = config_error {
        tracing::warn!(%err, "Invalid configuration, using defaults");
    }

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let service = CalculatorService::new(config, InMemoryStore::new());
    let result = service.batch_from_text(&input);

    tracing::info!(
        count = result.len(),
        total_fees = %service.format_amount(result.total_fees),
        "Computed batch"
    );

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
