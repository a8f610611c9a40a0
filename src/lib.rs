pub mod domain;
pub mod infrastructure;

// Main exports for external use
pub use infrastructure::contracts::{OracleClient, OracleConfig};
