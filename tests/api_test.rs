//! Integration tests for the callable API
//!
//! Build the router in-process and drive it with `tower::ServiceExt::oneshot`.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use toko_assistant::{
    create_router, AppConfig, AppError, AppResult, AppState, ConversationalAIProvider,
    MarketplaceAuthProvider, PartnerToken, SecretString, ServerConfig,
};
use tower::ServiceExt;

fn app(partner_key: Option<&str>, ai_key: Option<&str>) -> Router {
    let config = Arc::new(AppConfig::with_credentials(partner_key, ai_key));
    create_router(Arc::new(AppState::new(config)))
}

async fn call(app: Router, path: &str, body: &str) -> (StatusCode, serde_json::Value) {
    let req = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn test_refresh_access_token_success() {
    let (status, json) = call(app(Some("partner-secret"), None), "/refreshAccessToken", r#"{"data":{}}"#).await;

    assert_eq!(status, StatusCode::OK);
    let result = &json["result"];
    assert_eq!(result["status"], "success");
    assert_eq!(result["shopId"], "simulasi_shop_123");
    assert_eq!(result["partnerId"], "simulasi_partner_456");
    assert_eq!(result["accessToken"], "simulasi_token_abc");
    assert_eq!(result["message"], "Token berhasil dimuat (Simulasi)");
}

#[tokio::test]
async fn test_refresh_access_token_ignores_request_body() {
    let req = Request::builder()
        .method("POST")
        .uri("/refreshAccessToken")
        .body(Body::from("not even json"))
        .unwrap();

    let resp = app(Some("partner-secret"), None).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_refresh_access_token_without_partner_key() {
    let (status, json) = call(app(None, Some("ai-secret")), "/refreshAccessToken", r#"{"data":{}}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json.get("result").is_none());
    assert_eq!(json["error"]["status"], "FAILED_PRECONDITION");
    assert_eq!(json["error"]["details"]["code"], "CFG_MISSING_CREDENTIAL");
    assert!(json["error"]["message"]
        .as_str()
        .unwrap()
        .contains("Shopee Partner Key"));
}

#[tokio::test]
async fn test_chat_assistant_truncates_long_message() {
    let body = r#"{"data":{"message":"Tanya tentang stok sepatu lari"}}"#;
    let (status, json) = call(app(None, Some("ai-secret")), "/chatAssistant", body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["result"]["response"],
        "Tentu! Saya melihat stok produk 'Tanya tentang s...' masih tersedia."
    );
}

#[tokio::test]
async fn test_chat_assistant_empty_message_scenario() {
    let expected = "Tentu! Saya melihat stok produk 'Pesan Kosong...' masih tersedia.";

    for body in [r#"{"data":{"message":""}}"#, r#"{"data":{}}"#, r#"{}"#] {
        let (status, json) = call(app(None, Some("ai-secret")), "/chatAssistant", body).await;
        assert_eq!(status, StatusCode::OK, "body: {}", body);
        assert_eq!(json["result"]["response"], expected, "body: {}", body);
    }
}

#[tokio::test]
async fn test_chat_assistant_without_ai_key() {
    let body = r#"{"data":{"message":"halo"}}"#;
    let (status, json) = call(app(Some("partner-secret"), None), "/chatAssistant", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["status"], "FAILED_PRECONDITION");
    assert!(json["error"]["message"].as_str().unwrap().contains("Gemini API Key"));
}

#[tokio::test]
async fn test_chat_assistant_rejects_non_string_message() {
    let body = r#"{"data":{"message":42}}"#;
    let (status, json) = call(app(None, Some("ai-secret")), "/chatAssistant", body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["status"], "INVALID_ARGUMENT");
    assert_eq!(json["error"]["details"]["code"], "API_INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_chat_assistant_rejects_malformed_json() {
    let (status, json) = call(app(None, Some("ai-secret")), "/chatAssistant", "{oops").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["status"], "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_health_reports_credential_status_without_values() {
    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let resp = app(Some("partner-secret"), None).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(!text.contains("partner-secret"));

    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(json["result"]["status"], "healthy");
    assert_eq!(json["result"]["credentials"]["partnerKey"], "loaded");
    assert_eq!(json["result"]["credentials"]["aiKey"], "missing");
}

#[tokio::test]
async fn test_server_is_servable_with_no_credentials() {
    let config = Arc::new(AppConfig::with_credentials(None, None));
    let report = toko_assistant::check_credentials(&config);
    assert_eq!(report.missing.len(), 2);

    let router = create_router(Arc::new(AppState::new(config)));
    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let resp = router.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

// ============================================
// Upstream failures stay distinguishable from missing configuration
// ============================================

struct DownMarketplace;

#[async_trait]
impl MarketplaceAuthProvider for DownMarketplace {
    fn name(&self) -> &'static str {
        "down"
    }

    async fn exchange_partner_credential_for_token(
        &self,
        _partner_key: &SecretString,
    ) -> AppResult<PartnerToken> {
        Err(AppError::auth_unavailable("marketplace timed out"))
    }
}

struct RejectingAssistant;

#[async_trait]
impl ConversationalAIProvider for RejectingAssistant {
    fn name(&self) -> &'static str {
        "rejecting"
    }

    async fn generate_reply(&self, _ai_key: &SecretString, _message: &str) -> AppResult<String> {
        Err(AppError::provider_rejected("API key not valid"))
    }
}

fn failing_app() -> Router {
    let config = Arc::new(AppConfig::with_credentials(Some("partner"), Some("ai")));
    let state = AppState::with_providers(config, Arc::new(DownMarketplace), Arc::new(RejectingAssistant));
    create_router(Arc::new(state))
}

#[tokio::test]
async fn test_marketplace_outage_maps_to_unavailable() {
    let (status, json) = call(failing_app(), "/refreshAccessToken", r#"{"data":{}}"#).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"]["status"], "UNAVAILABLE");
    assert_eq!(json["error"]["details"]["code"], "AUTH_UNAVAILABLE");
    assert_eq!(json["error"]["details"]["retryable"], true);
}

#[tokio::test]
async fn test_provider_rejection_maps_to_permission_denied() {
    let (status, json) = call(failing_app(), "/chatAssistant", r#"{"data":{"message":"halo"}}"#).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["status"], "PERMISSION_DENIED");
    assert_eq!(json["error"]["details"]["code"], "PROVIDER_REJECTED");
}

struct BlankTokenMarketplace;

#[async_trait]
impl MarketplaceAuthProvider for BlankTokenMarketplace {
    fn name(&self) -> &'static str {
        "blank-token"
    }

    async fn exchange_partner_credential_for_token(
        &self,
        _partner_key: &SecretString,
    ) -> AppResult<PartnerToken> {
        Ok(PartnerToken {
            shop_id: String::new(),
            partner_id: "partner".to_string(),
            access_token: "token".to_string(),
        })
    }
}

#[tokio::test]
async fn test_incomplete_upstream_token_maps_to_internal() {
    let config = Arc::new(AppConfig::with_credentials(Some("partner"), Some("ai")));
    let state = AppState::with_providers(
        config,
        Arc::new(BlankTokenMarketplace),
        Arc::new(RejectingAssistant),
    );
    let (status, json) = call(create_router(Arc::new(state)), "/refreshAccessToken", r#"{"data":{}}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json.get("result").is_none());
    assert_eq!(json["error"]["status"], "INTERNAL");
    assert_eq!(json["error"]["details"]["code"], "API_INTERNAL_ERROR");
    assert_eq!(json["error"]["details"]["retryable"], false);
}

// ============================================
// Concurrency
// ============================================

/// Assistant that holds each call open and records peak concurrency
struct SlowAssistant {
    in_flight: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
}

#[async_trait]
impl ConversationalAIProvider for SlowAssistant {
    fn name(&self) -> &'static str {
        "slow"
    }

    async fn generate_reply(&self, _ai_key: &SecretString, message: &str) -> AppResult<String> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(50)).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(format!("ok: {}", message))
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_max_instances_caps_in_flight_invocations() {
    let config = AppConfig::from_lookup(|name| match name {
        "ASSISTANT_MAX_INSTANCES" => Some("2".to_string()),
        "GEMINI_API_KEY" => Some("ai-secret".to_string()),
        _ => None,
    });
    assert_eq!(config.server.max_instances, 2);

    let in_flight = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));
    let assistant = SlowAssistant {
        in_flight: in_flight.clone(),
        peak: peak.clone(),
    };
    let state = AppState::with_providers(Arc::new(config), Arc::new(DownMarketplace), Arc::new(assistant));
    let router = create_router(Arc::new(state));

    let mut handles = Vec::new();
    for _ in 0..10 {
        let router = router.clone();
        handles.push(tokio::spawn(async move {
            call(router, "/chatAssistant", r#"{"data":{"message":"halo"}}"#).await
        }));
    }

    for handle in handles {
        let (status, json) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["result"]["response"], "ok: halo");
    }

    let peak = peak.load(Ordering::SeqCst);
    assert!(peak >= 1);
    assert!(peak <= 2, "peak in-flight was {}", peak);
    assert_eq!(in_flight.load(Ordering::SeqCst), 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_invocations_are_identical() {
    let router = app(Some("partner-secret"), Some("ai-secret"));

    let mut handles = Vec::new();
    for _ in 0..50 {
        let router = router.clone();
        handles.push(tokio::spawn(async move {
            call(router, "/chatAssistant", r#"{"data":{"message":"kemeja batik lengan panjang"}}"#).await
        }));
    }

    let mut replies = Vec::new();
    for handle in handles {
        let (status, json) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        replies.push(json);
    }

    assert!(replies.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(
        replies[0]["result"]["response"],
        "Tentu! Saya melihat stok produk 'kemeja batik le...' masih tersedia."
    );
}

// ============================================
// Listener
// ============================================

#[tokio::test]
async fn test_bind_addr_accepts_hostnames() {
    let server = ServerConfig {
        host: "localhost".to_string(),
        port: 0,
        ..ServerConfig::default()
    };

    let listener = TcpListener::bind(server.bind_addr()).await.unwrap();
    let local_addr = listener.local_addr().unwrap();
    assert!(local_addr.ip().is_loopback());
    assert_ne!(local_addr.port(), 0);
}
