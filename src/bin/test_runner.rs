use oracle_permissioner::tests::oracle_tests::{
    test_confirmation_timeout, test_connection, test_grant_permission, test_idempotent_grant,
    test_non_owner_write_reverts, test_read_missing_contract, test_revoke_permission,
    test_unfunded_signer_rejected,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Oracle Permissioner Test Runner");
    println!("===============================\n");

    // Get command line arguments
    let args: Vec<String> = std::env::args().collect();
    let test_name = args.get(1).map(|s| s.as_str()).unwrap_or("all");

    match test_name {
        "connection" => {
            println!("Running connection test...");
            test_connection().await?;
        }
        "grant" => {
            println!("Running permission grant test...");
            test_grant_permission().await?;
        }
        "revoke" => {
            println!("Running permission revoke test...");
            test_revoke_permission().await?;
        }
        "idempotent" => {
            println!("Running idempotent grant test...");
            test_idempotent_grant().await?;
        }
        "missing_contract" => {
            println!("Running missing contract read test...");
            test_read_missing_contract().await?;
        }
        "unfunded" => {
            println!("Running unfunded signer test...");
            test_unfunded_signer_rejected().await?;
        }
        "timeout" => {
            println!("Running confirmation timeout test...");
            test_confirmation_timeout().await?;
        }
        "non_owner" => {
            println!("Running non-owner revert test...");
            test_non_owner_write_reverts().await?;
        }
        "all" => {
            println!("1. Connection test...");
            test_connection().await?;

            println!("\n2. Permission grant test...");
            test_grant_permission().await?;

            println!("\n3. Idempotent grant test...");
            test_idempotent_grant().await?;

            println!("\n4. Permission revoke test...");
            test_revoke_permission().await?;

            println!("\n5. Missing contract read test...");
            test_read_missing_contract().await?;

            println!("\n6. Unfunded signer test...");
            test_unfunded_signer_rejected().await?;

            println!("\n7. Confirmation timeout test...");
            test_confirmation_timeout().await?;

            println!("\n8. Non-owner revert test...");
            test_non_owner_write_reverts().await?;

            println!("\nAll tests completed successfully!");
        }
        _ => {
            println!("Unknown test: {}", test_name);
            println!("Available tests:");
            println!("  connection - Test wallet, balance and contract reads");
            println!("  grant - Grant fulfillment permission and verify");
            println!("  revoke - Revoke fulfillment permission and verify");
            println!("  idempotent - Grant twice with identical arguments");
            println!("  missing_contract - Read against an address with no contract");
            println!("  unfunded - Submit from a signer with no funds");
            println!("  timeout - Elapse the confirmation window");
            println!("  non_owner - Submit from a funded non-owner (needs NON_OWNER_KEYSTORE_*)");
            println!("  all - Run all tests");
        }
    }

    Ok(())
}
