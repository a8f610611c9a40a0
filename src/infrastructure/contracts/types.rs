use std::fmt;
use std::path::PathBuf;

use ethers::types::Address;

// ============ CONTRACT CONFIGURATION TYPES ============

/// Everything the client needs to grant fulfillment permission:
/// endpoint, signer material, contract binding and transaction settings.
#[derive(Clone)]
pub struct OracleConfig {
    pub rpc_url: String,
    pub chain_id: u64,
    pub oracle_address: Address,
    pub node_address: Address,
    pub keystore_path: PathBuf,
    pub keystore_password: String,
    pub gas_price_wei: u64,
    /// When unset the node estimates gas; a fixed limit skips estimation
    /// so reverting calls still reach the chain and produce a receipt.
    pub gas_limit: Option<u64>,
    pub confirmation_timeout_secs: u64,
    pub abi_path: PathBuf,
    pub allowed: bool,
}

impl fmt::Debug for OracleConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OracleConfig")
            .field("rpc_url", &self.rpc_url)
            .field("chain_id", &self.chain_id)
            .field("oracle_address", &self.oracle_address)
            .field("node_address", &self.node_address)
            .field("keystore_path", &self.keystore_path)
            .field("keystore_password", &"<redacted>")
            .field("gas_price_wei", &self.gas_price_wei)
            .field("gas_limit", &self.gas_limit)
            .field("confirmation_timeout_secs", &self.confirmation_timeout_secs)
            .field("abi_path", &self.abi_path)
            .field("allowed", &self.allowed)
            .finish()
    }
}
