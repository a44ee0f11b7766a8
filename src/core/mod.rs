//! Core Module - Callable Handlers
//!
//! Otak aplikasi: credential gate dan dua handler callable.
//! Handler tidak menyimpan state; semua dependensi di-inject.

pub mod chat;
pub mod credential_gate;
pub mod token_refresh;

pub use chat::*;
pub use credential_gate::*;
pub use token_refresh::*;
