//! Utils Module - Helper Functions & Shared Utilities
//!
//! Berisi konstanta dan setup logging yang digunakan di seluruh aplikasi.

pub mod constants;
pub mod logging;

pub use constants::*;
pub use logging::init_logging;
