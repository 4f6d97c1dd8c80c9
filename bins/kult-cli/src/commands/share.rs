//! Share commands.

use crate::client::KultClient;
use crate::commands::artwork::print_artwork;
use crate::viewer::{ImportState, PageState, SharedArtworkView};
use kult_common::{ShareLinks, ShareSettings};

/// Print the public link and QR code URL for an artwork.
pub async fn link(id: i64, client: &KultClient) -> anyhow::Result<()> {
    let links = client.share_links(id).await?;
    println!("Share link: {}", links.share_url);
    println!("QR code:    {}", links.qr_code_url);
    Ok(())
}

/// Links built locally from the configured public base URL, without asking
/// the server.
pub fn offline_link(id: i64, settings: &ShareSettings) {
    let links = ShareLinks::new(settings, id);
    println!("Share link: {}", links.share_url);
    println!("QR code:    {}", links.qr_code_url);
}

/// Open a shared artwork and, with a wallet configured, add it to that
/// wallet's collection.
pub async fn open(id: i64, wallet: Option<&str>, client: &KultClient) -> anyhow::Result<()> {
    let mut view = SharedArtworkView::new(client.clone(), id);

    match view.load().await {
        PageState::Loaded(artwork) => {
            println!("Shared artwork:");
            print_artwork(artwork);
        }
        PageState::NotFound(reason) => {
            println!("✗ {}", reason);
            return Ok(());
        }
        PageState::Loading => {}
    }

    let Some(address) = wallet else {
        println!("\nConnect a wallet (--address or KULT_WALLET_ADDRESS) to add it to your collection.");
        return Ok(());
    };

    view.begin_connect();
    let state = view.wallet_connected(address).await;
    if let Some(message) = state.message() {
        println!("\n{}", message);
    }
    if let ImportState::ImportFailed(reason) = state {
        anyhow::bail!("Import failed: {}", reason);
    }
    Ok(())
}
