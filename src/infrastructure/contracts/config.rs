use std::path::PathBuf;

use ethers::types::Address;

use crate::domain::services::ContractError;
use crate::infrastructure::contracts::types::OracleConfig;

// Matches the 30 gwei override the deployment tooling has always used
pub const DEFAULT_GAS_PRICE_WEI: u64 = 30_000_000_000;
pub const DEFAULT_CONFIRMATION_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_ABI_PATH: &str = "abis/oracle_abi.json";

impl OracleConfig {
    /// Build the full configuration from environment variables.
    ///
    /// `ORACLE_CONTRACT_ADDRESS`, `ORACLE_NODE_ADDRESS`, `KEYSTORE_PATH`
    /// and `KEYSTORE_PASSWORD` are required; everything else falls back to
    /// local-development defaults.
    pub fn from_env() -> Result<Self, ContractError> {
        let rpc_url = std::env::var("ETH_RPC_URL")
            .unwrap_or_else(|_| "http://localhost:8545".to_string());

        let chain_id = std::env::var("CHAIN_ID")
            .unwrap_or_else(|_| "31337".to_string())
            .parse::<u64>()
            .map_err(|e| ContractError::InvalidConfig(format!("CHAIN_ID: {}", e)))?;

        let oracle_address = require_address("ORACLE_CONTRACT_ADDRESS")?;
        let node_address = require_address("ORACLE_NODE_ADDRESS")?;

        let keystore_path = std::env::var("KEYSTORE_PATH")
            .map(PathBuf::from)
            .map_err(|_| ContractError::InvalidConfig("KEYSTORE_PATH must be set".to_string()))?;

        let keystore_password = std::env::var("KEYSTORE_PASSWORD").map_err(|_| {
            ContractError::InvalidConfig("KEYSTORE_PASSWORD must be set".to_string())
        })?;

        let gas_price_wei = parse_u64_or("GAS_PRICE_WEI", DEFAULT_GAS_PRICE_WEI)?;

        let gas_limit = match std::env::var("GAS_LIMIT") {
            Ok(raw) => Some(
                raw.parse::<u64>()
                    .map_err(|e| ContractError::InvalidConfig(format!("GAS_LIMIT: {}", e)))?,
            ),
            Err(_) => None,
        };

        let confirmation_timeout_secs =
            parse_u64_or("CONFIRMATION_TIMEOUT_SECS", DEFAULT_CONFIRMATION_TIMEOUT_SECS)?;

        let abi_path = std::env::var("ORACLE_ABI_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_ABI_PATH));

        let allowed = std::env::var("FULFILLMENT_ALLOWED")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .map_err(|e| ContractError::InvalidConfig(format!("FULFILLMENT_ALLOWED: {}", e)))?;

        Ok(OracleConfig {
            rpc_url,
            chain_id,
            oracle_address,
            node_address,
            keystore_path,
            keystore_password,
            gas_price_wei,
            gas_limit,
            confirmation_timeout_secs,
            abi_path,
            allowed,
        })
    }
}

fn require_address(var: &str) -> Result<Address, ContractError> {
    let raw = std::env::var(var)
        .map_err(|_| ContractError::InvalidConfig(format!("{} must be set", var)))?;
    raw.parse::<Address>()
        .map_err(|e| ContractError::InvalidAddress(format!("{}: {}", var, e)))
}

fn parse_u64_or(var: &str, default: u64) -> Result<u64, ContractError> {
    match std::env::var(var) {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| ContractError::InvalidConfig(format!("{}: {}", var, e))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // All assertions share one test: the variables below are process-global
    // and must not be touched from concurrently running tests.
    #[test]
    fn from_env_round_trip() {
        std::env::remove_var("ETH_RPC_URL");
        std::env::remove_var("CHAIN_ID");
        std::env::remove_var("GAS_PRICE_WEI");
        std::env::remove_var("GAS_LIMIT");
        std::env::remove_var("CONFIRMATION_TIMEOUT_SECS");
        std::env::remove_var("ORACLE_ABI_PATH");
        std::env::remove_var("FULFILLMENT_ALLOWED");
        std::env::remove_var("ORACLE_CONTRACT_ADDRESS");
        std::env::remove_var("ORACLE_NODE_ADDRESS");
        std::env::remove_var("KEYSTORE_PATH");
        std::env::remove_var("KEYSTORE_PASSWORD");

        // Required variables missing
        match OracleConfig::from_env() {
            Err(ContractError::InvalidConfig(msg)) => {
                assert!(msg.contains("ORACLE_CONTRACT_ADDRESS"))
            }
            other => panic!("expected InvalidConfig, got {:?}", other.map(|_| ())),
        }

        std::env::set_var(
            "ORACLE_CONTRACT_ADDRESS",
            "0x4758E84AbAD42355454fC85cdED2e64A82ad15E0",
        );
        std::env::set_var(
            "ORACLE_NODE_ADDRESS",
            "0xaDE5c9d2D994a729AF54FEd9e8b84d05727e19e2",
        );
        std::env::set_var("KEYSTORE_PATH", "/tmp/keystore.json");
        std::env::set_var("KEYSTORE_PASSWORD", "password");

        let config = OracleConfig::from_env().unwrap();
        assert_eq!(config.rpc_url, "http://localhost:8545");
        assert_eq!(config.chain_id, 31337);
        assert_eq!(config.gas_price_wei, DEFAULT_GAS_PRICE_WEI);
        assert!(config.gas_limit.is_none());
        assert_eq!(config.confirmation_timeout_secs, DEFAULT_CONFIRMATION_TIMEOUT_SECS);
        assert_eq!(config.abi_path, PathBuf::from(DEFAULT_ABI_PATH));
        assert!(config.allowed);
        assert_eq!(
            format!("{:x}", config.oracle_address),
            "4758e84abad42355454fc85cded2e64a82ad15e0"
        );

        // Overrides
        std::env::set_var("GAS_PRICE_WEI", "20000000000");
        std::env::set_var("GAS_LIMIT", "500000");
        std::env::set_var("CONFIRMATION_TIMEOUT_SECS", "60");
        std::env::set_var("FULFILLMENT_ALLOWED", "false");
        let config = OracleConfig::from_env().unwrap();
        assert_eq!(config.gas_price_wei, 20_000_000_000);
        assert_eq!(config.gas_limit, Some(500_000));
        assert_eq!(config.confirmation_timeout_secs, 60);
        assert!(!config.allowed);

        // Malformed address
        std::env::set_var("ORACLE_NODE_ADDRESS", "not-an-address");
        assert!(matches!(
            OracleConfig::from_env(),
            Err(ContractError::InvalidAddress(_))
        ));

        std::env::remove_var("GAS_PRICE_WEI");
        std::env::remove_var("GAS_LIMIT");
        std::env::remove_var("CONFIRMATION_TIMEOUT_SECS");
        std::env::remove_var("FULFILLMENT_ALLOWED");
        std::env::remove_var("ORACLE_CONTRACT_ADDRESS");
        std::env::remove_var("ORACLE_NODE_ADDRESS");
        std::env::remove_var("KEYSTORE_PATH");
        std::env::remove_var("KEYSTORE_PASSWORD");
    }

    #[test]
    fn redacts_password_in_debug_output() {
        let config = OracleConfig {
            rpc_url: "http://localhost:8545".to_string(),
            chain_id: 31337,
            oracle_address: Address::zero(),
            node_address: Address::zero(),
            keystore_path: PathBuf::from("/tmp/keystore.json"),
            keystore_password: "hunter2".to_string(),
            gas_price_wei: DEFAULT_GAS_PRICE_WEI,
            gas_limit: None,
            confirmation_timeout_secs: DEFAULT_CONFIRMATION_TIMEOUT_SECS,
            abi_path: PathBuf::from(DEFAULT_ABI_PATH),
            allowed: true,
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
