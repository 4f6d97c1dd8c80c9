use kult_cli::client::KultClient;
use kult_cli::error::CliError;
use kult_cli::types::{AddOutcome, ArtworkInput};
use kult_common::ArtworkKind;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn dune_json(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Dune",
        "author": "Frank Herbert",
        "publicationYear": 1965,
        "type": "book",
        "description": null,
        "rating": 5,
        "addedAt": "2025-06-01T12:00:00Z"
    })
}

fn dune_input() -> ArtworkInput {
    ArtworkInput {
        name: "Dune".into(),
        author: "Frank Herbert".into(),
        publication_year: 1965,
        kind: ArtworkKind::Book,
        description: None,
        rating: Some(5),
    }
}

#[tokio::test]
async fn test_health_success() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&mock)
        .await;

    let client = KultClient::new(mock.uri());
    let response = client.health().await.unwrap();
    assert_eq!(response.status, "ok");
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&mock)
        .await;

    let client = KultClient::new(format!("{}/", mock.uri()));
    assert!(client.health().await.is_ok());
}

#[tokio::test]
async fn test_server_error_body_is_parsed() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/check"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "Database error"})))
        .mount(&mock)
        .await;

    let client = KultClient::new(mock.uri());
    match client.check_user("0xabc").await.unwrap_err() {
        CliError::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Database error");
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_plain_text_error_is_kept() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad gateway"))
        .mount(&mock)
        .await;

    let client = KultClient::new(mock.uri());
    match client.health().await.unwrap_err() {
        CliError::Api { status, message } => {
            assert_eq!(status, 502);
            assert_eq!(message, "Bad gateway");
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_create_user_sends_wallet_address() {
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/user/create"))
        .and(body_json(json!({"walletAddress": "0xabc"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "User created successfully",
            "user": {"walletAddress": "0xabc", "paying": false}
        })))
        .expect(1)
        .mount(&mock)
        .await;

    let client = KultClient::new(mock.uri());
    let response = client.create_user("0xabc").await.unwrap();
    assert!(!response.exists);
    let user = response.user.unwrap();
    assert_eq!(user.wallet_address, "0xabc");
    assert!(!user.paying);
}

#[tokio::test]
async fn test_create_user_existing() {
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/user/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "User already exists",
            "exists": true
        })))
        .mount(&mock)
        .await;

    let client = KultClient::new(mock.uri());
    let response = client.create_user("0xabc").await.unwrap();
    assert!(response.exists);
    assert!(response.user.is_none());
}

#[tokio::test]
async fn test_check_user_passes_address_query() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/check"))
        .and(query_param("address", "0xabc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"exists": true, "paying": true})),
        )
        .mount(&mock)
        .await;

    let client = KultClient::new(mock.uri());
    let response = client.check_user("0xabc").await.unwrap();
    assert!(response.exists);
    assert_eq!(response.paying, Some(true));
}

#[tokio::test]
async fn test_add_artwork_created() {
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/artwork/add"))
        .and(body_json(json!({
            "walletAddress": "0xabc",
            "name": "Dune",
            "author": "Frank Herbert",
            "publicationYear": 1965,
            "type": "book",
            "description": null,
            "rating": 5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Artwork added successfully",
            "artwork": dune_json(42)
        })))
        .mount(&mock)
        .await;

    let client = KultClient::new(mock.uri());
    match client.add_artwork("0xabc", &dune_input()).await.unwrap() {
        AddOutcome::Added(artwork) => {
            assert_eq!(artwork.id, 42);
            assert_eq!(artwork.kind, ArtworkKind::Book);
            assert_eq!(artwork.rating, Some(5));
            assert!(artwork.description.is_none());
        }
        other => panic!("Expected Added, got {:?}", other),
    }
}

#[tokio::test]
async fn test_add_artwork_already_owned() {
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/artwork/add"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Artwork already exists in your collection",
            "exists": true,
            "id": 42
        })))
        .mount(&mock)
        .await;

    let client = KultClient::new(mock.uri());
    let outcome = client.add_artwork("0xabc", &dune_input()).await.unwrap();
    assert_eq!(outcome, AddOutcome::AlreadyOwned { id: 42 });
}

#[tokio::test]
async fn test_add_artwork_unknown_user_is_not_found() {
    let mock = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/artwork/add"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "User does not exist. Please connect your wallet first."
        })))
        .mount(&mock)
        .await;

    let client = KultClient::new(mock.uri());
    match client.add_artwork("0xnobody", &dune_input()).await.unwrap_err() {
        CliError::NotFound(message) => assert!(message.starts_with("User does not exist")),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_list_artworks_with_type_filter() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/artwork/list"))
        .and(query_param("address", "0xabc"))
        .and(query_param("type", "book"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "artworks": [dune_json(42)]
        })))
        .mount(&mock)
        .await;

    let client = KultClient::new(mock.uri());
    let response = client
        .list_artworks("0xabc", Some(ArtworkKind::Book))
        .await
        .unwrap();
    assert_eq!(response.count, 1);
    assert_eq!(response.artworks[0].name, "Dune");
}

#[tokio::test]
async fn test_get_shared_artwork_not_found() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/artwork/shared/99"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"error": "Artwork not found"})),
        )
        .mount(&mock)
        .await;

    let client = KultClient::new(mock.uri());
    match client.get_shared_artwork(99).await.unwrap_err() {
        CliError::NotFound(message) => assert_eq!(message, "Artwork not found"),
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_share_links() {
    let mock = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/artwork/shared/42/links"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "shareUrl": "https://kult.example/shared/42",
            "qrCodeUrl": "https://qr.example/?size=200x200&data=https%3A%2F%2Fkult.example%2Fshared%2F42"
        })))
        .mount(&mock)
        .await;

    let client = KultClient::new(mock.uri());
    let links = client.share_links(42).await.unwrap();
    assert_eq!(links.share_url, "https://kult.example/shared/42");
    assert!(links.qr_code_url.ends_with("data=https%3A%2F%2Fkult.example%2Fshared%2F42"));
}

#[tokio::test]
async fn test_update_artwork_sends_full_record() {
    let mock = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/artwork/update"))
        .and(body_json(json!({
            "id": 42,
            "walletAddress": "0xabc",
            "name": "Dune",
            "author": "Frank Herbert",
            "publicationYear": 1965,
            "type": "book",
            "description": null,
            "rating": 5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Artwork updated successfully",
            "artwork": dune_json(42)
        })))
        .mount(&mock)
        .await;

    let client = KultClient::new(mock.uri());
    let artwork = client
        .update_artwork(42, "0xabc", &dune_input())
        .await
        .unwrap();
    assert_eq!(artwork.id, 42);
}

#[tokio::test]
async fn test_update_duplicate_is_api_error() {
    let mock = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/artwork/update"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "You already have an artwork with this name and author"
        })))
        .mount(&mock)
        .await;

    let client = KultClient::new(mock.uri());
    match client
        .update_artwork(42, "0xabc", &dune_input())
        .await
        .unwrap_err()
    {
        CliError::Api { status, message } => {
            assert_eq!(status, 400);
            assert!(message.contains("already have"));
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_delete_artwork() {
    let mock = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/artwork/delete"))
        .and(body_json(json!({"id": 42, "walletAddress": "0xabc"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Artwork deleted successfully"})),
        )
        .mount(&mock)
        .await;

    let client = KultClient::new(mock.uri());
    let message = client.delete_artwork(42, "0xabc").await.unwrap();
    assert_eq!(message, "Artwork deleted successfully");
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let client = KultClient::new("http://127.0.0.1:9");
    assert!(matches!(
        client.health().await.unwrap_err(),
        CliError::Network(_)
    ));
}
