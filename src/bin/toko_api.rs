//! Toko Assistant Callable API Server
//!
//! Hosts the `refreshAccessToken` and `chatAssistant` callables.
//!
//! Usage:
//!   cargo run --bin toko_api
//!
//! Environment:
//!   SHOPEE_PARTNER_KEY      - Marketplace partner key
//!   GEMINI_API_KEY          - Generative-language API key
//!   PORT / ASSISTANT_PORT   - Server port (default: 8080)
//!   ASSISTANT_HOST          - Server host (default: 0.0.0.0)
//!   ASSISTANT_MAX_INSTANCES - Concurrent invocation cap (default: 10)
//!   RUST_LOG                - Log level (default: info)

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use toko_assistant::utils::constants::{APP_NAME, APP_VERSION};
use toko_assistant::utils::init_logging;
use toko_assistant::{check_credentials, create_router, AppConfig, AppState};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    init_logging();

    print_banner();

    // Snapshot konfigurasi, dibaca sekali saja
    let config = Arc::new(AppConfig::from_env());

    // Missing secrets are logged, not fatal
    let report = check_credentials(&config);
    if !report.all_present() {
        warn!(
            missing = report.missing.len(),
            "⚠️ Starting with missing credentials; affected callables will fail per call"
        );
    }

    let bind_addr = config.server.bind_addr();
    let max_instances = config.server.max_instances;

    let state = Arc::new(AppState::new(config));
    let app = create_router(state);

    // Host may be a name (e.g. "localhost"); let tokio resolve it
    let listener = TcpListener::bind(&bind_addr).await?;
    let local_addr = listener.local_addr()?;

    info!(
        requested = %bind_addr,
        "🚀 {} v{} listening on http://{}",
        APP_NAME,
        APP_VERSION,
        local_addr
    );
    info!("");
    info!("Callables:");
    info!("  POST /refreshAccessToken - Marketplace token bundle (simulated)");
    info!("  POST /chatAssistant      - Assistant reply (simulated)");
    info!("  GET  /health             - Health check");
    info!("");
    info!("Max concurrent invocations: {}", max_instances);
    info!("Press Ctrl+C for graceful shutdown");

    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("⚠️ Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("🛑 {} shutdown complete", APP_NAME);

    Ok(())
}

fn print_banner() {
    println!(
        r#"
    ╔══════════════════════════════════════════════╗
    ║                                              ║
    ║        T O K O   A S S I S T A N T           ║
    ║                                              ║
    ║      Callable API  v{:<10}               ║
    ║      Token refresh + AI chat                 ║
    ║                                              ║
    ╚══════════════════════════════════════════════╝
    "#,
        APP_VERSION
    );
}
