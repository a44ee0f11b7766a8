//! Constants Module - Single Source of Truth
//!
//! Semua nama environment variable, default, dan nilai simulasi
//! yang digunakan di seluruh aplikasi didefinisikan di sini.
//! Tidak ada hardcoded values di modul lain!

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "TokoAssistant";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================
// CREDENTIALS (names only, values come from the deployment)
// ============================================

/// Marketplace partner key
pub const ENV_PARTNER_KEY: &str = "SHOPEE_PARTNER_KEY";

/// Generative-language API key
pub const ENV_AI_KEY: &str = "GEMINI_API_KEY";

// ============================================
// SERVER CONFIGURATION
// ============================================

/// Port variable set by most container platforms
pub const ENV_PORT: &str = "PORT";
/// Port fallback for local development
pub const ENV_ASSISTANT_PORT: &str = "ASSISTANT_PORT";
pub const ENV_ASSISTANT_HOST: &str = "ASSISTANT_HOST";
pub const ENV_MAX_INSTANCES: &str = "ASSISTANT_MAX_INSTANCES";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Ceiling on concurrent in-flight invocations (cost control)
pub const DEFAULT_MAX_INSTANCES: usize = 10;

// ============================================
// CALLABLE FUNCTION NAMES
// ============================================

pub const FN_REFRESH_ACCESS_TOKEN: &str = "refreshAccessToken";
pub const FN_CHAT_ASSISTANT: &str = "chatAssistant";

// ============================================
// CHAT
// ============================================

/// Substituted when the inbound message is absent or empty ("Empty message")
pub const DEFAULT_CHAT_MESSAGE: &str = "Pesan Kosong";

/// Number of characters of the user message echoed into the reply
pub const REPLY_PREVIEW_CHARS: usize = 15;

/// Simulated reply: "Sure! I see product '<preview>...' is still in stock."
pub const STOCK_REPLY_PREFIX: &str = "Tentu! Saya melihat stok produk '";
pub const STOCK_REPLY_ELLIPSIS: &str = "...";
pub const STOCK_REPLY_SUFFIX: &str = "' masih tersedia.";

// ============================================
// SIMULATED MARKETPLACE TOKEN
// ============================================

pub const SIMULATED_SHOP_ID: &str = "simulasi_shop_123";
pub const SIMULATED_PARTNER_ID: &str = "simulasi_partner_456";
pub const SIMULATED_ACCESS_TOKEN: &str = "simulasi_token_abc";

/// Message attached to a successful token bundle
pub const TOKEN_LOADED_MESSAGE: &str = "Token berhasil dimuat (Simulasi)";
