//! `chatAssistant` - reply to a shopper's message.
//!
//! User content is kept out of INFO logs: only its length is recorded there,
//! the raw payload goes to DEBUG.

use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::models::{AppConfig, AppError, AppResult, ChatReply, Credential, InboundChatRequest};
use crate::providers::{ConversationalAIProvider, SimulatedShoppingAssistant};
use crate::utils::constants::FN_CHAT_ASSISTANT;

#[derive(Clone)]
pub struct ChatHandler {
    config: Arc<AppConfig>,
    provider: Arc<dyn ConversationalAIProvider>,
}

impl ChatHandler {
    pub fn new(config: Arc<AppConfig>, provider: Arc<dyn ConversationalAIProvider>) -> Self {
        Self { config, provider }
    }

    pub fn simulated(config: Arc<AppConfig>) -> Self {
        Self::new(config, Arc::new(SimulatedShoppingAssistant))
    }

    pub async fn reply(&self, request: &InboundChatRequest) -> AppResult<ChatReply> {
        let invocation_id = Uuid::new_v4();
        let ai_key = self.config.credential(Credential::AiKey);
        let message = request.effective_message();

        info!(
            %invocation_id,
            api_key = if ai_key.is_some() { "Loaded" } else { "Missing" },
            message_chars = message.chars().count(),
            "{} invoked",
            FN_CHAT_ASSISTANT
        );
        debug!(%invocation_id, payload = ?request, "{} payload", FN_CHAT_ASSISTANT);

        let ai_key = ai_key.ok_or_else(|| {
            AppError::missing_credential(Credential::AiKey.label(), Credential::AiKey.env_var())
        })?;

        let response = self
            .provider
            .generate_reply(ai_key, message)
            .await
            .map_err(|e| {
                warn!(
                    %invocation_id,
                    provider = self.provider.name(),
                    code = e.code_str(),
                    "⚠️ Reply generation failed: {}",
                    e.message
                );
                e
            })?;

        if response.trim().is_empty() {
            warn!(%invocation_id, provider = self.provider.name(), "⚠️ Empty reply from provider");
            return Err(AppError::internal(format!(
                "{} returned an empty reply",
                self.provider.name()
            )));
        }

        Ok(ChatReply { response })
    }
}
