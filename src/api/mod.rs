//! Callable Function API Module
//! Exposes `refreshAccessToken` and `chatAssistant` over HTTP

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod types;

pub use handlers::AppState;
pub use routes::create_router;
pub use types::*;
