//! Callable Protocol Types
//!
//! Request:  `{"data": <payload>}`
//! Success:  `{"result": <value>}`
//! Failure:  `{"error": {"status", "message", "details"}}`

use serde::{Deserialize, Serialize};

use crate::models::AppError;

/// Inbound callable envelope. A missing `data` field means an empty payload.
#[derive(Debug, Default, Deserialize)]
pub struct CallableRequest<T> {
    #[serde(default)]
    pub data: T,
}

/// Successful callable response
#[derive(Debug, Serialize)]
pub struct CallableResponse<T: Serialize> {
    pub result: T,
}

impl<T: Serialize> CallableResponse<T> {
    pub fn new(result: T) -> Self {
        Self { result }
    }
}

/// Failed callable response
#[derive(Debug, Serialize)]
pub struct CallableErrorBody {
    pub error: CallableError,
}

#[derive(Debug, Serialize)]
pub struct CallableError {
    /// Callable status, e.g. `FAILED_PRECONDITION`
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ErrorDetails>,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    /// `ErrorCode` string, e.g. `CFG_MISSING_CREDENTIAL`
    pub code: String,
    pub retryable: bool,
}

impl From<&AppError> for CallableErrorBody {
    fn from(err: &AppError) -> Self {
        Self {
            error: CallableError {
                status: err.code.callable_status().to_string(),
                message: err.message.clone(),
                details: Some(ErrorDetails {
                    code: err.code_str().to_string(),
                    retryable: err.code.is_retryable(),
                }),
            },
        }
    }
}

// ============================================
// Health Check
// ============================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthData {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    /// RFC 3339 start time
    pub started_at: String,
    pub credentials: CredentialStatus,
}

/// `loaded` / `missing` per credential, never the value
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialStatus {
    pub partner_key: &'static str,
    pub ai_key: &'static str,
}
