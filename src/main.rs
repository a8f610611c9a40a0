use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber;

use oracle_permissioner::domain::models::SetFulfillmentPermissionRequest;
use oracle_permissioner::{OracleClient, OracleConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = OracleConfig::from_env()?;
    let request = SetFulfillmentPermissionRequest {
        node: format!("0x{:x}", config.node_address).into(),
        allowed: config.allowed,
    };

    let client = OracleClient::new(config)?;
    info!(
        wallet = %format!("0x{:x}", client.get_wallet_address()),
        oracle = %format!("0x{:x}", client.get_config().oracle_address),
        "granting oracle fulfillment permission"
    );

    let status = client.grant_and_verify(request).await?;

    // The post-call authorization status is the program's one output
    println!("{}", status.authorized);

    Ok(())
}
