//! Service configuration

use serde::Deserialize;

use core_kernel::Currency;
use domain_fees::TransactionType;
use domain_invoicing::DEFAULT_INVOICE_PREFIX;

/// Environment variable prefix, e.g. `FEECALC_CURRENCY=EUR`
pub const ENV_PREFIX: &str = "FEECALC";

/// Service configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Transaction type used when a caller does not pick one
    pub transaction_type: TransactionType,
    /// Currency for new drafts and formatted amounts
    pub currency: Currency,
    /// Prefix for issued invoice numbers
    pub invoice_prefix: String,
    /// Log level
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            transaction_type: TransactionType::Domestic,
            currency: Currency::USD,
            invoice_prefix: DEFAULT_INVOICE_PREFIX.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Loads configuration from `FEECALC_*` environment variables
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Reads a `.env` file if present, then loads from the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    pub(crate) fn from_environment(
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()
    }
}
