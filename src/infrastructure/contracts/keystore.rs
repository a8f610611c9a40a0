use std::fs;
use std::path::Path;

use ethers::signers::{LocalWallet, Signer};
use serde::Deserialize;

use crate::domain::services::ContractError;

// Web3 secret storage definition, the only version geth ever wrote
const SUPPORTED_KEYSTORE_VERSION: u64 = 3;

/// The plaintext envelope of a keystore file. The `crypto` blob itself is
/// handled by the wallet library; we only look at the declared address and
/// the format version.
#[derive(Debug, Deserialize)]
struct KeystoreMetadata {
    #[serde(default)]
    address: Option<String>,
    version: u64,
}

/// Decrypt an encrypted keystore file into a signing wallet.
///
/// Fails with `DecryptionError` when the password is wrong, the blob is
/// malformed, or the decrypted key does not match the address the keystore
/// declares.
pub fn load_signer(path: &Path, password: &str) -> Result<LocalWallet, ContractError> {
    let metadata = read_metadata(path)?;

    if metadata.version != SUPPORTED_KEYSTORE_VERSION {
        return Err(ContractError::DecryptionError {
            reason: format!(
                "unsupported keystore version {} (expected {})",
                metadata.version, SUPPORTED_KEYSTORE_VERSION
            ),
        });
    }

    let wallet = LocalWallet::decrypt_keystore(path, password)
        .map_err(|e| ContractError::DecryptionError { reason: e.to_string() })?;

    // Keystores written by geth declare the account address without a 0x
    // prefix; when present it must match the key we just derived.
    if let Some(declared) = metadata.address.as_deref() {
        let declared_bytes = hex::decode(declared.trim_start_matches("0x")).map_err(|e| {
            ContractError::DecryptionError {
                reason: format!("keystore address field is not hex: {}", e),
            }
        })?;

        if declared_bytes != wallet.address().as_bytes() {
            return Err(ContractError::DecryptionError {
                reason: format!(
                    "keystore declares address {}, decrypted key derives 0x{:x}",
                    declared,
                    wallet.address()
                ),
            });
        }
    }

    Ok(wallet)
}

fn read_metadata(path: &Path) -> Result<KeystoreMetadata, ContractError> {
    let content = fs::read_to_string(path).map_err(|e| ContractError::DecryptionError {
        reason: format!("failed to read keystore {}: {}", path.display(), e),
    })?;

    serde_json::from_str(&content).map_err(|e| ContractError::DecryptionError {
        reason: format!("keystore {} is not valid JSON: {}", path.display(), e),
    })
}
