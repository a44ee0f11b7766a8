//! Toko Assistant Library
//!
//! Callable backend for a chat-style shopping assistant:
//! - `refreshAccessToken`: marketplace token bundle (simulated exchange)
//! - `chatAssistant`: assistant reply to a shopper message (simulated model)
//! - startup credential gate that warns about missing secrets

pub mod api;
pub mod core;
pub mod models;
pub mod providers;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::core::{check_credentials, ChatHandler, CredentialReport, TokenRefreshHandler};
pub use api::{create_router, AppState};
pub use models::{
    AppConfig, AppError, AppResult, ChatReply, Credential, ErrorCategory, ErrorCode,
    InboundChatRequest, PartnerToken, SecretString, ServerConfig, TokenBundle, TokenStatus,
};
pub use providers::{
    ConversationalAIProvider, MarketplaceAuthProvider, SimulatedMarketplaceAuth,
    SimulatedShoppingAssistant,
};
