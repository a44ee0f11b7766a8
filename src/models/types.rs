//! Request/result types exchanged with the callable functions.
//!
//! Field names are camelCase on the wire to match what the frontend reads.

use serde::{Deserialize, Serialize};

use crate::utils::constants::{DEFAULT_CHAT_MESSAGE, TOKEN_LOADED_MESSAGE};

/// Outcome flag carried inside a token bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenStatus {
    Success,
    Failure,
}

/// Identifiers returned by a marketplace token exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnerToken {
    pub shop_id: String,
    pub partner_id: String,
    pub access_token: String,
}

impl PartnerToken {
    /// Every identifier the frontend needs is non-empty
    pub fn is_complete(&self) -> bool {
        !self.shop_id.is_empty() && !self.partner_id.is_empty() && !self.access_token.is_empty()
    }
}

/// Result of `refreshAccessToken`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBundle {
    pub status: TokenStatus,
    pub shop_id: String,
    pub partner_id: String,
    pub access_token: String,
    pub message: String,
}

impl TokenBundle {
    /// Successful bundle built from an exchanged token
    pub fn loaded(token: PartnerToken) -> Self {
        Self {
            status: TokenStatus::Success,
            shop_id: token.shop_id,
            partner_id: token.partner_id,
            access_token: token.access_token,
            message: TOKEN_LOADED_MESSAGE.to_string(),
        }
    }
}

/// Payload of `chatAssistant`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InboundChatRequest {
    #[serde(default)]
    pub message: Option<String>,
}

impl InboundChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// Message with the "Pesan Kosong" default applied to absent or empty input
    pub fn effective_message(&self) -> &str {
        match self.message.as_deref() {
            Some(m) if !m.is_empty() => m,
            _ => DEFAULT_CHAT_MESSAGE,
        }
    }
}

/// Result of `chatAssistant`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}
