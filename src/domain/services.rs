use thiserror::Error;

// ============ CONTRACT ERROR TYPES ============

#[derive(Debug, Error)]
pub enum ContractError {
    #[error("RPC error: {0}")]
    RpcError(String),

    #[error("Keystore decryption failed: {reason}")]
    DecryptionError { reason: String },

    #[error("Contract call error: {0}")]
    ContractCallError(String),

    #[error("Transaction error: {0}")]
    TransactionError(String),

    #[error("Transaction not confirmed within {seconds}s")]
    ConfirmationTimeout { seconds: u64 },

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("ABI error: {0}")]
    AbiError(String),
}

impl From<ethers::contract::AbiError> for ContractError {
    fn from(err: ethers::contract::AbiError) -> Self {
        ContractError::AbiError(err.to_string())
    }
}
