// Contract integration module
// This module handles all oracle contract interactions

pub mod abis;
pub mod client;
pub mod config;
pub mod keystore;
pub mod types;

// Re-export main components for easy access
pub use client::OracleClient;
pub use types::*;
