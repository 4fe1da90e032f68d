//! Service Layer
//!
//! Application facade over the fee and invoicing domains.
//!
//! # Architecture
//!
//! - **Config**: `FEECALC_*` environment variables with defaults
//! - **Telemetry**: tracing subscriber setup
//! - **Service**: [`CalculatorService`] applying configured defaults
//!
//! # Example
//!
//! ```rust
//! use core_kernel::InMemoryStore;
//! use interface_service::{CalculatorService, ServiceConfig};
//! use rust_decimal_macros::dec;
//!
//! let service = CalculatorService::new(ServiceConfig::default(), InMemoryStore::new());
//! let result = service.batch_from_text("100, 5\n20");
//! assert_eq!(result.len(), 3);
//! assert_eq!(service.fee(dec!(100)).paypal_fee, dec!(3.20));
//! ```

pub mod config;
pub mod error;
pub mod service;
pub mod telemetry;

pub use config::ServiceConfig;
pub use error::ServiceError;
pub use service::CalculatorService;
