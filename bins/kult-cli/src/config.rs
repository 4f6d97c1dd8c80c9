use crate::error::CliError;
use kult_common::ShareSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI configuration, read from `~/.kult/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub wallet: WalletSettings,
    #[serde(default)]
    pub share: ShareSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    pub url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            url: "http://localhost:3000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalletSettings {
    /// Connected wallet address. Commands that act on a collection need it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Config {
    /// Load config: env var → file → default
    pub fn load() -> Result<Self, CliError> {
        let config_path = Self::config_path();

        let mut config = if config_path.exists() {
            Self::from_file(&config_path)?
        } else {
            Self::default()
        };

        config.apply_env();

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| CliError::Config(format!("Parse error: {}", e)))
    }

    pub fn save(&self, path: &Path) -> Result<(), CliError> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Serialize error: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".kult/config.toml"))
            .unwrap_or_else(|| PathBuf::from(".kult/config.toml"))
    }

    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var("KULT_API_URL")
            && url::Url::parse(&url).is_ok()
        {
            self.api.url = url;
        }

        if let Ok(address) = std::env::var("KULT_WALLET_ADDRESS")
            && !address.trim().is_empty()
        {
            self.wallet.address = Some(address.trim().to_string());
        }

        if let Ok(base) = std::env::var("KULT_PUBLIC_BASE_URL") {
            self.share.public_base_url = base;
        }
    }

    /// The connected wallet, or a config error telling the user how to set one.
    pub fn wallet_address(&self) -> Result<&str, CliError> {
        self.wallet
            .address
            .as_deref()
            .filter(|a| !a.trim().is_empty())
            .ok_or_else(|| {
                CliError::Config(
                    "No wallet connected. Set [wallet] address in the config file, \
                     KULT_WALLET_ADDRESS, or pass --address."
                        .to_string(),
                )
            })
    }
}
