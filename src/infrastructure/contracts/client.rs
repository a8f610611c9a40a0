use std::sync::Arc;
use std::time::Duration;

use ethers::{
    contract::Contract,
    middleware::SignerMiddleware,
    providers::{Http, Middleware, PendingTransaction, Provider},
    signers::{LocalWallet, Signer},
    types::{Address, TransactionReceipt, U256},
};
use tokio::time::timeout;
use tracing::{debug, info};

use crate::domain::models::{
    AuthorizationStatus, SetFulfillmentPermissionRequest, SetFulfillmentPermissionResponse,
};
use crate::domain::services::ContractError;
use crate::infrastructure::contracts::types::OracleConfig;
use crate::infrastructure::contracts::{abis, keystore};

type OracleMiddleware = SignerMiddleware<Provider<Http>, LocalWallet>;

// Main client for interacting with the Oracle contract
#[derive(Clone)]
pub struct OracleClient {
    provider: Arc<Provider<Http>>,
    wallet_address: Address,
    config: OracleConfig,
    oracle: Contract<OracleMiddleware>,
}

impl OracleClient {
    /// Decrypt the keystore, load the ABI and bind the oracle contract.
    ///
    /// Every write goes through a `SignerMiddleware`, so transactions are
    /// signed locally and submitted raw; the node never sees the key.
    pub fn new(config: OracleConfig) -> Result<Self, ContractError> {
        // Create provider
        let provider = Provider::<Http>::try_from(&config.rpc_url)
            .map_err(|e| ContractError::RpcError(e.to_string()))?;

        // Decrypt the signing key
        let wallet = keystore::load_signer(&config.keystore_path, &config.keystore_password)?
            .with_chain_id(config.chain_id);
        let wallet_address = wallet.address();

        // Load ABI and bind the contract instance
        let oracle_abi = abis::load_oracle_abi(&config.abi_path)?;
        let signer = Arc::new(SignerMiddleware::new(provider.clone(), wallet));
        let oracle = Contract::new(config.oracle_address, oracle_abi, signer);

        Ok(Self {
            provider: Arc::new(provider),
            wallet_address,
            config,
            oracle,
        })
    }

    // ============ ORACLE PERMISSION OPERATIONS ============

    /// Allow or deny a node address to fulfill oracle requests.
    ///
    /// Submits the transaction with the configured gas-price override and
    /// waits for its receipt before returning.
    pub async fn set_fulfillment_permission(
        &self,
        request: SetFulfillmentPermissionRequest,
    ) -> Result<SetFulfillmentPermissionResponse, ContractError> {
        let node = request
            .node
            .parse::<Address>()
            .map_err(|e| ContractError::InvalidAddress(e.to_string()))?;

        info!(node = %request.node, allowed = request.allowed, "setting fulfillment permission");

        // Build the call with the gas price override
        let mut call = self
            .oracle
            .method::<_, ()>("setFulfillmentPermission", (node, request.allowed))
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?
            .gas_price(U256::from(self.config.gas_price_wei));
        if let Some(gas_limit) = self.config.gas_limit {
            call = call.gas(U256::from(gas_limit));
        }

        // Send the transaction
        let pending_tx = call
            .send()
            .await
            .map_err(|e| ContractError::TransactionError(e.to_string()))?;

        // Wait for the transaction to be mined, bounded
        let receipt = self.await_confirmation(pending_tx).await?;

        info!(
            transaction_hash = %format!("0x{:x}", receipt.transaction_hash),
            block_number = receipt.block_number.unwrap_or_default().as_u64(),
            "fulfillment permission transaction confirmed"
        );

        Ok(SetFulfillmentPermissionResponse {
            node: request.node,
            allowed: request.allowed,
            transaction_hash: Arc::from(format!("0x{:x}", receipt.transaction_hash)),
            block_number: receipt.block_number.unwrap_or_default().as_u64(),
            gas_used: receipt.gas_used.unwrap_or_default().as_u64(),
        })
    }

    /// Read back whether a node is currently authorized to fulfill requests.
    pub async fn get_authorization_status(&self, node: Address) -> Result<bool, ContractError> {
        let call = self
            .oracle
            .method::<_, bool>("getAuthorizationStatus", node)
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?;

        call.call()
            .await
            .map_err(|e| ContractError::ContractCallError(e.to_string()))
    }

    /// The single end-to-end operation: write the permission flag, wait for
    /// the receipt, then verify with a read. The read happens strictly
    /// after confirmation so it observes the mutated state.
    pub async fn grant_and_verify(
        &self,
        request: SetFulfillmentPermissionRequest,
    ) -> Result<AuthorizationStatus, ContractError> {
        let node_label = request.node.clone();
        let node = request
            .node
            .parse::<Address>()
            .map_err(|e| ContractError::InvalidAddress(e.to_string()))?;

        self.set_fulfillment_permission(request).await?;
        let authorized = self.get_authorization_status(node).await?;

        Ok(AuthorizationStatus {
            node: node_label,
            authorized,
        })
    }

    async fn await_confirmation(
        &self,
        pending_tx: PendingTransaction<'_, Http>,
    ) -> Result<TransactionReceipt, ContractError> {
        let seconds = self.config.confirmation_timeout_secs;
        debug!(seconds, "waiting for transaction confirmation");

        let receipt = timeout(Duration::from_secs(seconds), pending_tx)
            .await
            .map_err(|_| ContractError::ConfirmationTimeout { seconds })?
            .map_err(|e| ContractError::TransactionError(e.to_string()))?
            .ok_or_else(|| {
                ContractError::TransactionError("Transaction dropped without a receipt".to_string())
            })?;

        ensure_not_reverted(&receipt)?;
        Ok(receipt)
    }

    // ============ CONTRACT READS ============

    /// Get the oracle contract owner
    pub async fn get_owner(&self) -> Result<Address, ContractError> {
        let call = self
            .oracle
            .method::<_, Address>("owner", ())
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?;

        call.call()
            .await
            .map_err(|e| ContractError::ContractCallError(e.to_string()))
    }

    /// Get the LINK amount withdrawable by the oracle owner
    pub async fn get_withdrawable(&self) -> Result<U256, ContractError> {
        let call = self
            .oracle
            .method::<_, U256>("withdrawable", ())
            .map_err(|e| ContractError::ContractCallError(e.to_string()))?;

        call.call()
            .await
            .map_err(|e| ContractError::ContractCallError(e.to_string()))
    }

    // ============ UTILITY FUNCTIONS ============

    /// Get the current wallet address
    pub fn get_wallet_address(&self) -> Address {
        self.wallet_address
    }

    /// Get the current configuration
    pub fn get_config(&self) -> &OracleConfig {
        &self.config
    }

    /// Get wallet balance
    pub async fn get_wallet_balance(&self) -> Result<U256, ContractError> {
        self.provider
            .get_balance(self.wallet_address, None)
            .await
            .map_err(|e| ContractError::RpcError(e.to_string()))
    }
}

// A receipt with status 0 means the call ran and reverted on-chain
fn ensure_not_reverted(receipt: &TransactionReceipt) -> Result<(), ContractError> {
    if let Some(status) = receipt.status {
        if status == 0.into() {
            return Err(ContractError::TransactionError(
                "Transaction reverted".to_string(),
            ));
        }
    }
    Ok(())
}
