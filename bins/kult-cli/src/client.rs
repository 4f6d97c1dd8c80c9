use crate::error::CliError;
use crate::types::*;
use kult_common::{ArtworkKind, ShareLinks, ShareMetadata};
use reqwest::{Client, StatusCode};

/// HTTP client for the Kult API.
#[derive(Clone, Debug)]
pub struct KultClient {
    client: Client,
    base_url: String,
}

impl KultClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn health(&self) -> Result<HealthResponse, CliError> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::OK {
            Ok(response.json().await?)
        } else {
            Err(self.error_from_response(response).await)
        }
    }

    // =========================================================================
    // User Operations
    // =========================================================================

    /// Create the user if it does not exist yet. Not an error when it does.
    pub async fn create_user(&self, wallet_address: &str) -> Result<CreateUserResponse, CliError> {
        let url = format!("{}/user/create", self.base_url);
        let req = CreateUserRequest {
            wallet_address: wallet_address.to_string(),
        };
        let response = self.client.post(&url).json(&req).send().await?;

        if response.status() == StatusCode::OK {
            Ok(response.json().await?)
        } else {
            Err(self.error_from_response(response).await)
        }
    }

    pub async fn check_user(&self, wallet_address: &str) -> Result<CheckUserResponse, CliError> {
        let url = format!("{}/user/check", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("address", wallet_address)])
            .send()
            .await?;

        if response.status() == StatusCode::OK {
            Ok(response.json().await?)
        } else {
            Err(self.error_from_response(response).await)
        }
    }

    // =========================================================================
    // Artwork Operations
    // =========================================================================

    pub async fn add_artwork(
        &self,
        wallet_address: &str,
        artwork: &ArtworkInput,
    ) -> Result<AddOutcome, CliError> {
        let url = format!("{}/artwork/add", self.base_url);
        let req = AddArtworkRequest {
            wallet_address,
            artwork,
        };
        let response = self.client.post(&url).json(&req).send().await?;

        if response.status() != StatusCode::OK {
            return Err(self.error_from_response(response).await);
        }

        let body: AddArtworkResponse = response.json().await?;
        match (body.artwork, body.exists, body.id) {
            (Some(artwork), _, _) => Ok(AddOutcome::Added(artwork)),
            (None, true, Some(id)) => Ok(AddOutcome::AlreadyOwned { id }),
            _ => Err(CliError::Api {
                status: 200,
                message: format!("unexpected add response: {}", body.message),
            }),
        }
    }

    pub async fn list_artworks(
        &self,
        wallet_address: &str,
        kind: Option<ArtworkKind>,
    ) -> Result<ListArtworksResponse, CliError> {
        let url = format!("{}/artwork/list", self.base_url);
        let mut query = vec![("address", wallet_address)];
        if let Some(kind) = kind {
            query.push(("type", kind.as_str()));
        }
        let response = self.client.get(&url).query(&query).send().await?;

        if response.status() == StatusCode::OK {
            Ok(response.json().await?)
        } else {
            Err(self.error_from_response(response).await)
        }
    }

    /// Public view of an artwork, whoever owns it.
    pub async fn get_shared_artwork(&self, id: i64) -> Result<Artwork, CliError> {
        let url = format!("{}/artwork/shared/{}", self.base_url, id);
        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::OK {
            let envelope: ArtworkEnvelope = response.json().await?;
            Ok(envelope.artwork)
        } else {
            Err(self.error_from_response(response).await)
        }
    }

    pub async fn share_links(&self, id: i64) -> Result<ShareLinks, CliError> {
        let url = format!("{}/artwork/shared/{}/links", self.base_url, id);
        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::OK {
            Ok(response.json().await?)
        } else {
            Err(self.error_from_response(response).await)
        }
    }

    pub async fn share_metadata(&self, id: i64) -> Result<ShareMetadata, CliError> {
        let url = format!("{}/artwork/shared/{}/metadata", self.base_url, id);
        let response = self.client.get(&url).send().await?;

        if response.status() == StatusCode::OK {
            Ok(response.json().await?)
        } else {
            Err(self.error_from_response(response).await)
        }
    }

    pub async fn update_artwork(
        &self,
        id: i64,
        wallet_address: &str,
        artwork: &ArtworkInput,
    ) -> Result<Artwork, CliError> {
        let url = format!("{}/artwork/update", self.base_url);
        let req = UpdateArtworkRequest {
            id,
            wallet_address,
            artwork,
        };
        let response = self.client.put(&url).json(&req).send().await?;

        if response.status() == StatusCode::OK {
            let envelope: ArtworkEnvelope = response.json().await?;
            Ok(envelope.artwork)
        } else {
            Err(self.error_from_response(response).await)
        }
    }

    pub async fn delete_artwork(&self, id: i64, wallet_address: &str) -> Result<String, CliError> {
        let url = format!("{}/artwork/delete", self.base_url);
        let req = DeleteArtworkRequest { id, wallet_address };
        let response = self.client.delete(&url).json(&req).send().await?;

        if response.status() == StatusCode::OK {
            let body: MessageResponse = response.json().await?;
            Ok(body.message)
        } else {
            Err(self.error_from_response(response).await)
        }
    }

    async fn error_from_response(&self, response: reqwest::Response) -> CliError {
        let status = response.status();
        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or(text);

        if status == StatusCode::NOT_FOUND {
            CliError::NotFound(message)
        } else {
            CliError::Api {
                status: status.as_u16(),
                message,
            }
        }
    }
}
