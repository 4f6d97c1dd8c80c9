//! Public view of a shared artwork, with one-shot import into the viewer's
//! own collection once a wallet is connected.

use crate::client::KultClient;
use crate::error::CliError;
use crate::types::{AddOutcome, Artwork};
use tracing::{debug, info, warn};

/// What the shared page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Loading,
    NotFound(String),
    Loaded(Artwork),
}

/// Progress of importing the shared artwork into the viewer's collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportState {
    /// No wallet yet, or nothing to import because the page is missing.
    Unconnected,
    /// Wallet connection in progress, or connected and waiting for the page.
    Connecting,
    Importing,
    Imported { already_owned: bool },
    ImportFailed(String),
}

impl ImportState {
    /// User-facing status line.
    pub fn message(&self) -> Option<String> {
        match self {
            ImportState::Unconnected => None,
            ImportState::Connecting => Some("Connecting wallet...".to_string()),
            ImportState::Importing => Some("Adding to your collection...".to_string()),
            ImportState::Imported {
                already_owned: false,
            } => Some("Added to your collection!".to_string()),
            ImportState::Imported {
                already_owned: true,
            } => Some("This artwork is already in your collection.".to_string()),
            ImportState::ImportFailed(reason) => {
                Some(format!("Failed to add artwork to your collection: {}", reason))
            }
        }
    }
}

pub struct SharedArtworkView {
    client: KultClient,
    id: i64,
    page: PageState,
    import: ImportState,
    wallet: Option<String>,
    import_started: bool,
}

impl SharedArtworkView {
    pub fn new(client: KultClient, id: i64) -> Self {
        Self {
            client,
            id,
            page: PageState::Loading,
            import: ImportState::Unconnected,
            wallet: None,
            import_started: false,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn import_state(&self) -> &ImportState {
        &self.import
    }

    pub fn wallet(&self) -> Option<&str> {
        self.wallet.as_deref()
    }

    /// Fetch the shared artwork. Runs a pending import when a wallet is
    /// already connected.
    pub async fn load(&mut self) -> &PageState {
        self.page = match self.client.get_shared_artwork(self.id).await {
            Ok(artwork) => PageState::Loaded(artwork),
            Err(CliError::NotFound(message)) => PageState::NotFound(message),
            Err(e) => {
                warn!(id = self.id, "Failed to load shared artwork: {}", e);
                PageState::NotFound("Failed to load artwork".to_string())
            }
        };

        self.try_import().await;
        &self.page
    }

    pub fn begin_connect(&mut self) {
        if self.import == ImportState::Unconnected {
            self.import = ImportState::Connecting;
        }
    }

    pub fn connect_failed(&mut self) {
        if self.import == ImportState::Connecting && self.wallet.is_none() {
            self.import = ImportState::Unconnected;
        }
    }

    /// Record the connected wallet and import if the page is ready.
    /// Later connection events are ignored once an import has run.
    pub async fn wallet_connected(&mut self, address: &str) -> &ImportState {
        if self.import_started {
            debug!(id = self.id, "Ignoring wallet event, import already ran");
            return &self.import;
        }

        self.wallet = Some(address.to_string());
        if self.import == ImportState::Unconnected {
            self.import = ImportState::Connecting;
        }

        self.try_import().await;
        &self.import
    }

    async fn try_import(&mut self) {
        if self.import_started {
            return;
        }
        // Nothing can be imported from a missing page.
        if matches!(self.page, PageState::NotFound(_)) {
            self.import = ImportState::Unconnected;
            return;
        }
        let (PageState::Loaded(artwork), Some(wallet)) = (&self.page, &self.wallet) else {
            return;
        };

        self.import_started = true;
        self.import = ImportState::Importing;

        // The user row may not exist yet; a failure here should not stop the add.
        if let Err(e) = self.client.create_user(wallet).await {
            warn!(wallet = %wallet, "Ensure user failed, continuing with import: {}", e);
        }

        self.import = match self.client.add_artwork(wallet, &artwork.to_input()).await {
            Ok(AddOutcome::Added(added)) => {
                info!(id = added.id, "Imported shared artwork {}", self.id);
                ImportState::Imported {
                    already_owned: false,
                }
            }
            Ok(AddOutcome::AlreadyOwned { id }) => {
                debug!(id, "Shared artwork already in collection");
                ImportState::Imported {
                    already_owned: true,
                }
            }
            Err(e) => ImportState::ImportFailed(e.to_string()),
        };
    }
}
