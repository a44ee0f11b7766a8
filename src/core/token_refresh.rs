//! `refreshAccessToken` - marketplace token bundle for the frontend.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{AppConfig, AppError, AppResult, Credential, TokenBundle};
use crate::providers::{MarketplaceAuthProvider, SimulatedMarketplaceAuth};
use crate::utils::constants::FN_REFRESH_ACCESS_TOKEN;

/// Stateless handler; clone freely across tasks.
#[derive(Clone)]
pub struct TokenRefreshHandler {
    config: Arc<AppConfig>,
    provider: Arc<dyn MarketplaceAuthProvider>,
}

impl TokenRefreshHandler {
    pub fn new(config: Arc<AppConfig>, provider: Arc<dyn MarketplaceAuthProvider>) -> Self {
        Self { config, provider }
    }

    /// Handler backed by the simulated marketplace
    pub fn simulated(config: Arc<AppConfig>) -> Self {
        Self::new(config, Arc::new(SimulatedMarketplaceAuth))
    }

    /// Exchange the configured partner key for a token bundle.
    pub async fn refresh(&self) -> AppResult<TokenBundle> {
        let invocation_id = Uuid::new_v4();
        let partner_key = self.config.credential(Credential::PartnerKey);

        info!(
            %invocation_id,
            key = if partner_key.is_some() { "Loaded" } else { "Missing" },
            "{} invoked",
            FN_REFRESH_ACCESS_TOKEN
        );

        let partner_key = partner_key.ok_or_else(|| {
            AppError::missing_credential(
                Credential::PartnerKey.label(),
                Credential::PartnerKey.env_var(),
            )
        })?;

        let token = self
            .provider
            .exchange_partner_credential_for_token(partner_key)
            .await
            .map_err(|e| {
                warn!(
                    %invocation_id,
                    provider = self.provider.name(),
                    code = e.code_str(),
                    "⚠️ Token exchange failed: {}",
                    e.message
                );
                e
            })?;

        if !token.is_complete() {
            warn!(%invocation_id, provider = self.provider.name(), "⚠️ Incomplete token from marketplace");
            return Err(AppError::internal(format!(
                "{} returned an incomplete token",
                self.provider.name()
            )));
        }

        Ok(TokenBundle::loaded(token))
    }
}
