//! Configuration module
//!
//! Snapshot konfigurasi dibaca sekali saat startup, lalu dibagikan
//! (read-only) ke setiap handler lewat `Arc<AppConfig>`.
//! Secret values are NEVER logged; they live in `secrecy::SecretString`.

use tracing::warn;

pub use secrecy::{ExposeSecret, SecretString};

use crate::utils::constants::{
    DEFAULT_HOST, DEFAULT_MAX_INSTANCES, DEFAULT_PORT, ENV_AI_KEY, ENV_ASSISTANT_HOST,
    ENV_ASSISTANT_PORT, ENV_MAX_INSTANCES, ENV_PARTNER_KEY, ENV_PORT,
};

/// Wrap a raw value as a secret. Empty or whitespace-only values count as absent.
pub fn non_blank_secret(raw: impl Into<String>) -> Option<SecretString> {
    let raw = raw.into();
    if raw.trim().is_empty() {
        None
    } else {
        Some(SecretString::from(raw))
    }
}

/// Which credential a check refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential {
    PartnerKey,
    AiKey,
}

impl Credential {
    pub const ALL: [Credential; 2] = [Credential::AiKey, Credential::PartnerKey];

    /// Environment variable the value is read from
    pub fn env_var(&self) -> &'static str {
        match self {
            Self::PartnerKey => ENV_PARTNER_KEY,
            Self::AiKey => ENV_AI_KEY,
        }
    }

    /// Human-readable name used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::PartnerKey => "Shopee Partner Key",
            Self::AiKey => "Gemini API Key",
        }
    }
}

/// HTTP listener settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Concurrent in-flight invocation cap
    pub max_instances: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_instances: DEFAULT_MAX_INSTANCES,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Process-wide configuration snapshot
#[derive(Debug, Default)]
pub struct AppConfig {
    pub partner_key: Option<SecretString>,
    pub ai_key: Option<SecretString>,
    pub server: ServerConfig,
}

impl AppConfig {
    /// Build from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup (tests pass a map)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Container platforms set PORT, fallback to ASSISTANT_PORT for local dev
        let port = lookup(ENV_PORT)
            .map(|v| (ENV_PORT, v))
            .or_else(|| lookup(ENV_ASSISTANT_PORT).map(|v| (ENV_ASSISTANT_PORT, v)));

        let server = ServerConfig {
            host: lookup(ENV_ASSISTANT_HOST)
                .filter(|h| !h.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or_default(port, DEFAULT_PORT),
            max_instances: parse_or_default(
                lookup(ENV_MAX_INSTANCES).map(|v| (ENV_MAX_INSTANCES, v)),
                DEFAULT_MAX_INSTANCES,
            )
            .max(1),
        };

        Self {
            partner_key: lookup(ENV_PARTNER_KEY).and_then(non_blank_secret),
            ai_key: lookup(ENV_AI_KEY).and_then(non_blank_secret),
            server,
        }
    }

    /// Credentials only, default server settings
    pub fn with_credentials(partner_key: Option<&str>, ai_key: Option<&str>) -> Self {
        Self {
            partner_key: partner_key.and_then(non_blank_secret),
            ai_key: ai_key.and_then(non_blank_secret),
            server: ServerConfig::default(),
        }
    }

    pub fn credential(&self, which: Credential) -> Option<&SecretString> {
        match which {
            Credential::PartnerKey => self.partner_key.as_ref(),
            Credential::AiKey => self.ai_key.as_ref(),
        }
    }

    pub fn has_credential(&self, which: Credential) -> bool {
        self.credential(which).is_some()
    }
}

fn parse_or_default<T: std::str::FromStr + Copy>(entry: Option<(&str, String)>, default: T) -> T {
    match entry {
        Some((name, raw)) => raw.trim().parse().unwrap_or_else(|_| {
            warn!(variable = name, value = %raw, "⚠️ Unparsable value, using default");
            default
        }),
        None => default,
    }
}
