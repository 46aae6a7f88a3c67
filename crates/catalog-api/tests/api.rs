//! HTTP-level tests for the partner catalog API.
//!
//! Each test gets a fresh store seeded with one product
//! (`Produto Base de Teste`, 10.0, id 1) and the `testing` profile.

use axum::http::{header::AUTHORIZATION, HeaderValue, StatusCode};
use axum_test::TestServer;
use catalog_api::{create_router, AppConfig, AppState};
use catalog_auth::{CredentialStore, TokenSigner};
use catalog_core::{InMemoryProductStore, NewProduct, ProductRepository};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use std::sync::Arc;

const CLIENT_ID: &str = "partner_123";
const CLIENT_SECRET: &str = "super_secret_key_123";

fn test_server() -> (TestServer, Arc<InMemoryProductStore>) {
    let store = Arc::new(InMemoryProductStore::new());
    store.clear();
    let seed = json!({"name": "Produto Base de Teste", "price": 10.0});
    store.save(NewProduct::try_from(seed).unwrap());

    let state = AppState::from_parts(
        AppConfig::testing(),
        CredentialStore::builtin(),
        store.clone(),
    );
    let server = TestServer::new(create_router(state)).unwrap();
    (server, store)
}

fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {}", token)).unwrap()
}

async fn auth_token(server: &TestServer) -> String {
    let response = server
        .post("/auth/login")
        .json(&json!({"client_id": CLIENT_ID, "client_secret": CLIENT_SECRET}))
        .await;
    response.json::<Value>()["data"]["token"]
        .as_str()
        .unwrap()
        .to_string()
}

fn error_message(body: &Value) -> &str {
    body["erro"]["message"].as_str().unwrap()
}

// --- Authentication ---

#[tokio::test]
async fn test_login_success() {
    let (server, _) = test_server();

    let response = server
        .post("/auth/login")
        .json(&json!({"client_id": CLIENT_ID, "client_secret": CLIENT_SECRET}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "success");

    let token = body["data"]["token"].as_str().unwrap();
    let claims = TokenSigner::new("test_secret_key").verify(token).unwrap();
    assert_eq!(claims.client_id, CLIENT_ID);
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let (server, _) = test_server();

    let response = server
        .post("/auth/login")
        .json(&json!({"client_id": CLIENT_ID, "client_secret": "wrong_secret"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["status"], "error");
    assert!(error_message(&body).contains("Credenciais inválidas"));
}

#[tokio::test]
async fn test_login_missing_fields() {
    let (server, _) = test_server();

    let response = server
        .post("/auth/login")
        .json(&json!({"client_id": CLIENT_ID}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = server.post("/auth/login").text("not json").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(error_message(&body).contains("client_id"));
}

// --- Request gate ---

#[tokio::test]
async fn test_protected_routes_require_token() {
    let (server, _) = test_server();

    for path in ["/produtos", "/produtos/1", "/produtos/count", "/produtos/search?name=x"] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED, "{}", path);
        let body: Value = response.json();
        assert!(error_message(&body).contains("Token de autenticação ausente"));
    }

    let response = server.delete("/produtos/1").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_authorization_header() {
    let (server, _) = test_server();

    for value in ["Bearer", "Basic abc123", "Bearer a b"] {
        let response = server
            .get("/produtos")
            .add_header(AUTHORIZATION, HeaderValue::from_static(value))
            .await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{}", value);
        let body: Value = response.json();
        assert!(error_message(&body).contains("malformado"));
    }

    // Not valid UTF-8
    let response = server
        .get("/produtos")
        .add_header(AUTHORIZATION, HeaderValue::from_bytes(b"Bearer \xff").unwrap())
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], "error");
    assert!(error_message(&body).contains("malformado"));
}

#[tokio::test]
async fn test_expired_token() {
    let (server, _) = test_server();
    let expired = TokenSigner::new("test_secret_key")
        .issue_at(CLIENT_ID, Utc::now() - Duration::hours(2))
        .unwrap();

    let response = server
        .get("/produtos")
        .add_header(AUTHORIZATION, bearer(&expired))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert!(error_message(&body).contains("Token expirado"));
}

#[tokio::test]
async fn test_token_signed_with_other_key() {
    let (server, _) = test_server();
    let forged = TokenSigner::new("not-the-server-key").issue(CLIENT_ID).unwrap();

    let response = server
        .get("/produtos")
        .add_header(AUTHORIZATION, bearer(&forged))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert!(error_message(&body).contains("Token inválido"));
}

// --- Products ---

#[tokio::test]
async fn test_get_all_products() {
    let (server, _) = test_server();
    let token = auth_token(&server).await;

    let response = server
        .get("/produtos")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_product() {
    let (server, store) = test_server();
    let token = auth_token(&server).await;

    let response = server
        .post("/produtos")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({
            "name": "Novo Produto Criado",
            "price": 150.75,
            "description": "Descrição do novo produto"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["data"]["name"], "Novo Produto Criado");
    assert_eq!(body["data"]["id"], 2);
    assert_eq!(body["data"]["description"], "Descrição do novo produto");
    assert_eq!(store.count(), 2);
}

#[tokio::test]
async fn test_create_product_keeps_exact_price() {
    let (server, _) = test_server();
    let token = auth_token(&server).await;

    let response = server
        .post("/produtos")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({"name": "Lote", "price": 9007199254740993u64}))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let id = response.json::<Value>()["data"]["id"].as_u64().unwrap();

    let response = server
        .get(&format!("/produtos/{}", id))
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    let body: Value = response.json();
    assert_eq!(body["data"]["price"].as_u64(), Some(9007199254740993));

    // Integer prices stay integers
    let response = server
        .get("/produtos")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    assert!(response.text().contains(r#""price":9007199254740993"#));
}

#[tokio::test]
async fn test_create_product_validation() {
    let (server, store) = test_server();
    let token = auth_token(&server).await;

    let response = server
        .post("/produtos")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({"price": 5.0}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(error_message(&body), "Nome e preço são obrigatórios.");

    let response = server
        .post("/produtos")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({"name": "Negativo", "price": -1}))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(error_message(&body), "O preço do produto não pode ser negativo.");

    assert_eq!(store.count(), 1);
}

#[tokio::test]
async fn test_get_product_by_id() {
    let (server, _) = test_server();
    let token = auth_token(&server).await;

    let response = server
        .get("/produtos/1")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["name"], "Produto Base de Teste");
}

#[tokio::test]
async fn test_get_nonexistent_product() {
    let (server, _) = test_server();
    let token = auth_token(&server).await;

    for path in ["/produtos/999", "/produtos/abc"] {
        let response = server
            .get(path)
            .add_header(AUTHORIZATION, bearer(&token))
            .await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND, "{}", path);
        let body: Value = response.json();
        assert_eq!(body["status"], "error");
        assert_eq!(error_message(&body), "Produto não encontrado.");
    }
}

#[tokio::test]
async fn test_undecodable_product_id_is_not_found() {
    let (server, store) = test_server();
    let token = auth_token(&server).await;

    let response = server
        .get("/produtos/%FF")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["status"], "error");
    assert_eq!(error_message(&body), "Produto não encontrado.");

    let response = server
        .put("/produtos/%FF")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({"price": 1}))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(error_message(&response.json::<Value>()), "Produto não encontrado.");

    let response = server
        .delete("/produtos/%FF")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(error_message(&response.json::<Value>()), "Produto não encontrado.");

    assert_eq!(store.count(), 1);
}

#[tokio::test]
async fn test_update_product() {
    let (server, _) = test_server();
    let token = auth_token(&server).await;

    let response = server
        .put("/produtos/1")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({"price": 99.99}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["data"]["price"], 99.99);
    assert_eq!(body["data"]["name"], "Produto Base de Teste");
}

#[tokio::test]
async fn test_patch_merges_attributes() {
    let (server, _) = test_server();
    let token = auth_token(&server).await;

    server
        .patch("/produtos/1")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({"color": "azul"}))
        .await;
    let response = server
        .patch("/produtos/1")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({"id": 77, "name": "Renomeado"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["name"], "Renomeado");
    assert_eq!(body["data"]["price"], 10.0);
    assert_eq!(body["data"]["color"], "azul");
}

#[tokio::test]
async fn test_update_nonexistent_product() {
    let (server, _) = test_server();
    let token = auth_token(&server).await;

    let response = server
        .put("/produtos/999")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({"price": 1.0}))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_product() {
    let (server, _) = test_server();
    let token = auth_token(&server).await;

    let response = server
        .delete("/produtos/1")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());

    let response = server
        .get("/produtos/1")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = server
        .delete("/produtos/1")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_count_products() {
    let (server, _) = test_server();
    let token = auth_token(&server).await;

    server
        .post("/produtos")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({"name": "Segundo", "price": 2.0}))
        .await;

    let response = server
        .get("/produtos/count")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["data"]["total_produtos"], 2);
}

#[tokio::test]
async fn test_search_products() {
    let (server, _) = test_server();
    let token = auth_token(&server).await;

    server
        .post("/produtos")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&json!({"name": "Caneca", "price": 20.0}))
        .await;

    let response = server
        .get("/produtos/search?name=BASE")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    let found = body["data"].as_array().unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["name"], "Produto Base de Teste");

    let response = server
        .get("/produtos/search")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(error_message(&body), "O parâmetro 'name' é obrigatório.");

    let response = server
        .get("/produtos/search?name=")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(error_message(&body), "O parâmetro 'name' é obrigatório.");

    // Repeated parameter cannot be decoded
    let response = server
        .get("/produtos/search?name=a&name=b")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["status"], "error");
    assert_eq!(error_message(&body), "Parâmetros de consulta inválidos.");
}

// --- Public routes ---

#[tokio::test]
async fn test_index_and_health_are_public() {
    let (server, _) = test_server();

    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "API de Parceiros está online!");

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
}
