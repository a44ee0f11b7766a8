//! API Request Handlers

use axum::{
    extract::{rejection::JsonRejection, Json, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;
use tracing::warn;

use super::types::*;
use crate::core::{ChatHandler, TokenRefreshHandler};
use crate::models::{AppConfig, AppError, ChatReply, Credential, InboundChatRequest, TokenBundle};
use crate::providers::{ConversationalAIProvider, MarketplaceAuthProvider};
use crate::utils::constants::{APP_VERSION, FN_CHAT_ASSISTANT, FN_REFRESH_ACCESS_TOKEN};

type CallableResult<T> = Result<Json<CallableResponse<T>>, (StatusCode, Json<CallableErrorBody>)>;

/// Shared application state
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub token_refresh: TokenRefreshHandler,
    pub chat: ChatHandler,
    pub start_time: Instant,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// State wired to the simulated providers
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self {
            token_refresh: TokenRefreshHandler::simulated(config.clone()),
            chat: ChatHandler::simulated(config.clone()),
            config,
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// State wired to caller-supplied providers
    pub fn with_providers(
        config: Arc<AppConfig>,
        marketplace: Arc<dyn MarketplaceAuthProvider>,
        assistant: Arc<dyn ConversationalAIProvider>,
    ) -> Self {
        Self {
            token_refresh: TokenRefreshHandler::new(config.clone(), marketplace),
            chat: ChatHandler::new(config.clone(), assistant),
            config,
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// Map an `AppError` onto the callable error contract
fn callable_error(function: &str, err: AppError) -> (StatusCode, Json<CallableErrorBody>) {
    warn!(function, code = err.code_str(), "{} failed: {}", function, err.message);

    let status =
        StatusCode::from_u16(err.code.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(CallableErrorBody::from(&err)))
}

// ============================================
// Health Check
// ============================================

pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<CallableResponse<HealthData>> {
    let status_of = |c: Credential| {
        if state.config.has_credential(c) {
            "loaded"
        } else {
            "missing"
        }
    };

    let data = HealthData {
        status: "healthy".to_string(),
        version: APP_VERSION.to_string(),
        uptime_seconds: state.uptime_seconds(),
        started_at: state.started_at.to_rfc3339(),
        credentials: CredentialStatus {
            partner_key: status_of(Credential::PartnerKey),
            ai_key: status_of(Credential::AiKey),
        },
    };

    Json(CallableResponse::new(data))
}

// ============================================
// refreshAccessToken
// ============================================

/// Takes no input; any request body is ignored.
pub async fn refresh_access_token(State(state): State<Arc<AppState>>) -> CallableResult<TokenBundle> {
    state
        .token_refresh
        .refresh()
        .await
        .map(|bundle| Json(CallableResponse::new(bundle)))
        .map_err(|e| callable_error(FN_REFRESH_ACCESS_TOKEN, e))
}

// ============================================
// chatAssistant
// ============================================

pub async fn chat_assistant(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CallableRequest<InboundChatRequest>>, JsonRejection>,
) -> CallableResult<ChatReply> {
    let Json(request) = payload.map_err(|rejection| {
        callable_error(
            FN_CHAT_ASSISTANT,
            AppError::invalid_argument(format!("Invalid request payload: {}", rejection.body_text())),
        )
    })?;

    state
        .chat
        .reply(&request.data)
        .await
        .map(|reply| Json(CallableResponse::new(reply)))
        .map_err(|e| callable_error(FN_CHAT_ASSISTANT, e))
}
