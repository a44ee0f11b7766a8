//! Centralized Error Handling Module
//!
//! Setiap kegagalan memiliki kode error yang unik, supaya log production
//! bisa difilter per kode.
//!
//! Error codes follow pattern: CATEGORY_SPECIFIC_ERROR
//! - CFG_xxx: Configuration errors (credential not set)
//! - AUTH_xxx: Marketplace token exchange errors
//! - PROVIDER_xxx: Conversational AI provider errors
//! - API_xxx: Request errors at the callable boundary

use std::fmt;

/// Application-wide error type
#[derive(Debug)]
pub struct AppError {
    /// Unique error code for logging/monitoring
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Optional underlying error
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new AppError
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Create AppError with source error
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Get error code as string (for logging)
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }

    /// True when a required credential was not configured
    pub fn is_configuration_error(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Coarse error family, lets callers tell "not configured" apart from
/// "upstream rejected/unavailable".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Auth,
    Provider,
    Request,
    Internal,
}

/// Unique error codes for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // ============================================
    // Configuration Errors
    // ============================================
    /// Required credential missing from the environment
    ConfigMissingCredential,

    // ============================================
    // Marketplace Auth Errors
    // ============================================
    /// Marketplace rejected the partner credential
    AuthRejected,
    /// Marketplace unreachable or timed out
    AuthUnavailable,

    // ============================================
    // Conversational AI Provider Errors
    // ============================================
    /// Provider rejected the AI key
    ProviderRejected,
    /// Provider quota exhausted
    ProviderQuotaExhausted,
    /// Provider unreachable or timed out
    ProviderUnavailable,

    // ============================================
    // API Errors
    // ============================================
    /// Payload does not match the callable schema
    ApiInvalidArgument,
    /// Upstream answered with something unusable
    ApiInternalError,
}

impl ErrorCode {
    /// Get string representation of error code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigMissingCredential => "CFG_MISSING_CREDENTIAL",

            Self::AuthRejected => "AUTH_REJECTED",
            Self::AuthUnavailable => "AUTH_UNAVAILABLE",

            Self::ProviderRejected => "PROVIDER_REJECTED",
            Self::ProviderQuotaExhausted => "PROVIDER_QUOTA_EXHAUSTED",
            Self::ProviderUnavailable => "PROVIDER_UNAVAILABLE",

            Self::ApiInvalidArgument => "API_INVALID_ARGUMENT",
            Self::ApiInternalError => "API_INTERNAL_ERROR",
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigMissingCredential => ErrorCategory::Configuration,
            Self::AuthRejected | Self::AuthUnavailable => ErrorCategory::Auth,
            Self::ProviderRejected | Self::ProviderQuotaExhausted | Self::ProviderUnavailable => {
                ErrorCategory::Provider
            }
            Self::ApiInvalidArgument => ErrorCategory::Request,
            Self::ApiInternalError => ErrorCategory::Internal,
        }
    }

    /// Get HTTP status code for API responses
    pub fn http_status(&self) -> u16 {
        match self {
            Self::ConfigMissingCredential | Self::ApiInvalidArgument => 400,
            Self::AuthRejected | Self::ProviderRejected => 403,
            Self::ProviderQuotaExhausted => 429,
            Self::AuthUnavailable | Self::ProviderUnavailable => 503,
            _ => 500,
        }
    }

    /// Status string of the callable-function error contract
    pub fn callable_status(&self) -> &'static str {
        match self {
            Self::ConfigMissingCredential => "FAILED_PRECONDITION",
            Self::ApiInvalidArgument => "INVALID_ARGUMENT",
            Self::AuthRejected | Self::ProviderRejected => "PERMISSION_DENIED",
            Self::ProviderQuotaExhausted => "RESOURCE_EXHAUSTED",
            Self::AuthUnavailable | Self::ProviderUnavailable => "UNAVAILABLE",
            _ => "INTERNAL",
        }
    }

    /// Check if error is transient (nothing retries today, callers may)
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::AuthUnavailable | Self::ProviderUnavailable | Self::ProviderQuotaExhausted
        )
    }
}

// ============================================
// Convenience constructors
// ============================================

impl AppError {
    /// Required credential not configured
    pub fn missing_credential(label: &str, env_var: &str) -> Self {
        Self::new(
            ErrorCode::ConfigMissingCredential,
            format!("{} is missing. Set {} in the deployment secrets.", label, env_var),
        )
    }

    /// Marketplace rejected the partner credential
    pub fn auth_rejected(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthRejected, msg)
    }

    /// Marketplace unreachable
    pub fn auth_unavailable(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthUnavailable, msg)
    }

    /// AI provider rejected the key
    pub fn provider_rejected(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ProviderRejected, msg)
    }

    /// AI provider quota exhausted
    pub fn provider_quota_exhausted(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ProviderQuotaExhausted, msg)
    }

    /// AI provider unreachable
    pub fn provider_unavailable(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ProviderUnavailable, msg)
    }

    /// Payload rejected at the callable boundary
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ApiInvalidArgument, msg)
    }

    /// API internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::ApiInternalError, msg)
    }
}

// ============================================
// Result type alias
// ============================================

/// Application Result type
pub type AppResult<T> = Result<T, AppError>;

// ============================================
// Conversion from common error types
// ============================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(ErrorCode::ApiInvalidArgument, "JSON parse error", err)
    }
}
