use thiserror::Error;

/// Errors surfaced by the Kult client and CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Non-2xx answer from the Kult API, with the `{error}` message when present.
    #[error("Kult API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Could not reach the Kult API: {0}")]
    Network(#[from] reqwest::Error),

    /// Bad or incomplete `~/.kult/config.toml`, or no wallet to act as.
    #[error("Kult config: {0}")]
    Config(String),

    /// 404 from the API: unknown user, or an artwork that is missing or not yours.
    #[error("{0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_shows_server_message_verbatim() {
        let err = CliError::NotFound("Artwork not found".to_string());
        assert_eq!(err.to_string(), "Artwork not found");
    }

    #[test]
    fn test_api_error_names_status() {
        let err = CliError::Api {
            status: 400,
            message: "You already have an artwork with this name and author".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Kult API returned 400: You already have an artwork with this name and author"
        );
    }

    #[test]
    fn test_config_error_prefix() {
        let err = CliError::Config("No wallet connected".to_string());
        assert_eq!(err.to_string(), "Kult config: No wallet connected");
    }
}
