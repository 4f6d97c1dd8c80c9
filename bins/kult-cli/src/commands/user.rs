//! User commands.

use crate::client::KultClient;

/// Register the wallet, or report that it is already known.
pub async fn create(address: &str, client: &KultClient) -> anyhow::Result<()> {
    let response = client.create_user(address).await?;

    println!("{}", response.message);
    if let Some(user) = response.user {
        println!("  Wallet: {}", user.wallet_address);
        println!("  Paying: {}", user.paying);
    }
    Ok(())
}

pub async fn check(address: &str, client: &KultClient) -> anyhow::Result<()> {
    let response = client.check_user(address).await?;

    if response.exists {
        println!("✓ User {} exists", address);
        println!("  Paying: {}", response.paying.unwrap_or(false));
    } else {
        println!("✗ User {} not found", address);
    }
    Ok(())
}
