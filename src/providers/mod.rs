//! Providers Module - External Collaborators
//!
//! Jalur ke layanan luar: token exchange marketplace dan model AI.
//! Saat ini hanya ada implementasi simulasi; integrasi nyata cukup
//! mengimplementasikan trait yang sama.

pub mod simulated;

use async_trait::async_trait;

use crate::models::{AppResult, PartnerToken, SecretString};

pub use simulated::{SimulatedMarketplaceAuth, SimulatedShoppingAssistant};

/// Exchanges the marketplace partner credential for shop access.
///
/// Implementations fail with an `AUTH_*` error when the marketplace rejects
/// the credential or cannot be reached.
#[async_trait]
pub trait MarketplaceAuthProvider: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    async fn exchange_partner_credential_for_token(
        &self,
        partner_key: &SecretString,
    ) -> AppResult<PartnerToken>;
}

/// Produces the assistant's reply to a user message.
///
/// Implementations fail with a `PROVIDER_*` error on an invalid key,
/// exhausted quota or network failure.
#[async_trait]
pub trait ConversationalAIProvider: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    async fn generate_reply(&self, ai_key: &SecretString, message: &str) -> AppResult<String>;
}
