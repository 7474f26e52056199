//! HTTP-level tests for the project endpoints against a mock server.

use deeploy_client::{
    ClientConfig, ClientError, ConfigStore, DeeployClient, ProjectId, ProjectRequest,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> DeeployClient {
    DeeployClient::new(&ClientConfig::new(server.uri(), "T")).unwrap()
}

#[tokio::test]
async fn list_sends_bearer_token_and_decodes_projects() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .and(header("Authorization", "Bearer T"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "title": "A" },
            { "id": "2", "title": "B", "description": "web" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let projects = client_for(&server).list_projects().await.unwrap();

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id, ProjectId::from(1));
    assert_eq!(projects[0].title, "A");
    assert_eq!(projects[1].description, "web");
}

#[tokio::test]
async fn list_empty_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    assert!(client_for(&server).list_projects().await.unwrap().is_empty());
}

#[tokio::test]
async fn unauthorized_maps_to_reconnect_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid token"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_projects().await.unwrap_err();
    assert_eq!(err, ClientError::Unauthorized);
    assert!(err.requires_reconnect());
}

#[tokio::test]
async fn server_error_keeps_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database down"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_projects().await.unwrap_err();
    assert_eq!(
        err,
        ClientError::Status {
            status: 500,
            body: "database down".to_string()
        }
    );
    assert!(!err.requires_reconnect());
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).list_projects().await.unwrap_err();
    assert!(matches!(err, ClientError::Parse(_)));
}

#[tokio::test]
async fn create_posts_json_and_returns_created() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/projects"))
        .and(header("Authorization", "Bearer T"))
        .and(body_json(json!({ "title": "D" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 4, "title": "D" })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server)
        .create_project(&ProjectRequest::new("D"))
        .await
        .unwrap();

    assert_eq!(created.id, ProjectId::from(4));
    assert_eq!(created.title, "D");
}

#[tokio::test]
async fn update_puts_to_project_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/projects/2"))
        .and(body_json(json!({ "title": "B2", "description": "docs" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 2, "title": "B2", "description": "docs"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let updated = client_for(&server)
        .update_project(
            &ProjectId::from(2),
            &ProjectRequest::new("B2").with_description("docs"),
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "B2");
    assert_eq!(updated.description, "docs");
}

#[tokio::test]
async fn update_with_empty_body_echoes_request() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/projects/2"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let updated = client_for(&server)
        .update_project(&ProjectId::from(2), &ProjectRequest::new("B2"))
        .await
        .unwrap();

    assert_eq!(updated.id, ProjectId::from(2));
    assert_eq!(updated.title, "B2");
}

#[tokio::test]
async fn create_without_content_is_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_project(&ProjectRequest::new("D"))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Parse(_)), "unexpected: {err:?}");
}

#[tokio::test]
async fn delete_accepts_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/projects/2"))
        .and(header("Authorization", "Bearer T"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .delete_project(&ProjectId::from(2))
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_not_found_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/projects/9"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not found"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .delete_project(&ProjectId::from(9))
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Status { status: 404, .. }));
    assert!(err.is_expected());
}

#[tokio::test]
async fn connection_refused_is_network_error() {
    // Bind then drop a server so the port is very likely closed.
    let uri = {
        let server = MockServer::start().await;
        server.uri()
    };

    let client = DeeployClient::new(&ClientConfig::new(uri, "T")).unwrap();
    let err = client.list_projects().await.unwrap_err();
    assert!(
        matches!(err, ClientError::Network(_) | ClientError::Timeout(_)),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn from_store_without_config_requires_reconnect() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("config.json"));

    let err = DeeployClient::from_store(&store).await.unwrap_err();
    assert!(matches!(err, ClientError::ConfigMissing(_)));
    assert!(err.requires_reconnect());
}

#[tokio::test]
async fn from_store_uses_saved_server_and_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .and(header("Authorization", "Bearer saved-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("config.json"));
    store
        .save(&ClientConfig::new(server.uri(), "saved-token"))
        .await
        .unwrap();

    let client = DeeployClient::from_store(&store).await.unwrap();
    assert!(client.list_projects().await.unwrap().is_empty());
}
