//! Startup credential check.
//!
//! Runs once before the server accepts traffic. Missing secrets are an early
//! warning only: the process keeps starting and the affected callable fails
//! per call with `CFG_MISSING_CREDENTIAL`.

use tracing::{error, info};

use crate::models::{AppConfig, Credential};

/// Outcome of the startup check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialReport {
    pub missing: Vec<Credential>,
}

impl CredentialReport {
    pub fn all_present(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Log one ERROR entry per missing credential. Never fails.
pub fn check_credentials(config: &AppConfig) -> CredentialReport {
    let missing: Vec<Credential> = Credential::ALL
        .into_iter()
        .filter(|c| !config.has_credential(*c))
        .collect();

    for credential in &missing {
        error!(
            credential = credential.env_var(),
            "❌ {} is not set in environment variables!",
            credential.env_var()
        );
    }

    if missing.is_empty() {
        info!("🔑 All credentials loaded (values hidden)");
    }

    CredentialReport { missing }
}
