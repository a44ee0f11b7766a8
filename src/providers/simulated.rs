//! Simulated providers.
//!
//! Stand-ins for the marketplace OAuth exchange and the generative-language
//! call. They never touch the network, so the frontend can move past its
//! "Loading..." state without spending API quota.

use async_trait::async_trait;

use super::{ConversationalAIProvider, MarketplaceAuthProvider};
use crate::models::{AppResult, PartnerToken, SecretString};
use crate::utils::constants::{
    REPLY_PREVIEW_CHARS, SIMULATED_ACCESS_TOKEN, SIMULATED_PARTNER_ID, SIMULATED_SHOP_ID,
    STOCK_REPLY_ELLIPSIS, STOCK_REPLY_PREFIX, STOCK_REPLY_SUFFIX,
};

/// Returns fixed placeholder identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedMarketplaceAuth;

#[async_trait]
impl MarketplaceAuthProvider for SimulatedMarketplaceAuth {
    fn name(&self) -> &'static str {
        "simulated-marketplace"
    }

    async fn exchange_partner_credential_for_token(
        &self,
        _partner_key: &SecretString,
    ) -> AppResult<PartnerToken> {
        Ok(PartnerToken {
            shop_id: SIMULATED_SHOP_ID.to_string(),
            partner_id: SIMULATED_PARTNER_ID.to_string(),
            access_token: SIMULATED_ACCESS_TOKEN.to_string(),
        })
    }
}

/// Answers every message with a templated "in stock" reply
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedShoppingAssistant;

#[async_trait]
impl ConversationalAIProvider for SimulatedShoppingAssistant {
    fn name(&self) -> &'static str {
        "simulated-assistant"
    }

    async fn generate_reply(&self, _ai_key: &SecretString, message: &str) -> AppResult<String> {
        Ok(stock_reply(message))
    }
}

/// First `REPLY_PREVIEW_CHARS` characters of the message, cut on char boundaries.
pub fn message_preview(message: &str) -> &str {
    match message.char_indices().nth(REPLY_PREVIEW_CHARS) {
        Some((idx, _)) => &message[..idx],
        None => message,
    }
}

pub fn stock_reply(message: &str) -> String {
    format!(
        "{}{}{}{}",
        STOCK_REPLY_PREFIX,
        message_preview(message),
        STOCK_REPLY_ELLIPSIS,
        STOCK_REPLY_SUFFIX
    )
}
