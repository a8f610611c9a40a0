use std::sync::Arc;

use serde::{Deserialize, Serialize};

// ============ ORACLE PERMISSION MODELS ============

/// Request to allow or deny a node address to fulfill oracle requests
#[derive(Debug, Clone, Deserialize)]
pub struct SetFulfillmentPermissionRequest {
    pub node: Arc<str>,
    pub allowed: bool,
}

#[derive(Debug, Serialize)]
pub struct SetFulfillmentPermissionResponse {
    pub node: Arc<str>,
    pub allowed: bool,
    pub transaction_hash: Arc<str>,
    pub block_number: u64,
    pub gas_used: u64,
}

/// Result of the read-back verification against the oracle contract
#[derive(Debug, Serialize)]
pub struct AuthorizationStatus {
    pub node: Arc<str>,
    pub authorized: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_request_deserializes_from_json() {
        let json = r#"{"node":"0xaDE5c9d2D994a729AF54FEd9e8b84d05727e19e2","allowed":true}"#;
        let request: SetFulfillmentPermissionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(&*request.node, "0xaDE5c9d2D994a729AF54FEd9e8b84d05727e19e2");
        assert!(request.allowed);
    }

    #[test]
    fn authorization_status_serializes_flat() {
        let status = AuthorizationStatus {
            node: Arc::from("0xaDE5c9d2D994a729AF54FEd9e8b84d05727e19e2"),
            authorized: false,
        };
        let value = serde_json::to_value(&status).unwrap();
        assert_eq!(value["authorized"], serde_json::json!(false));
        assert_eq!(
            value["node"],
            serde_json::json!("0xaDE5c9d2D994a729AF54FEd9e8b84d05727e19e2")
        );
    }
}
