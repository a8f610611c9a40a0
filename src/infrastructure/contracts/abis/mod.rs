use std::fs;
use std::path::Path;

use ethers::abi::Abi;

use crate::domain::services::ContractError;

/// Load the Oracle contract ABI from a JSON file.
///
/// The ABI ships as data next to the binary rather than inlined in source,
/// so a contract upgrade is a file swap instead of a rebuild.
pub fn load_oracle_abi(path: &Path) -> Result<Abi, ContractError> {
    let abi_content = fs::read_to_string(path).map_err(|e| {
        ContractError::AbiError(format!("Failed to read ABI file {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&abi_content).map_err(|e| {
        ContractError::AbiError(format!("Failed to parse ABI file {}: {}", path.display(), e))
    })
}
