//! Test utilities for Decora services.
//!
//! Provides bearer-token minting so tests can exercise authenticated
//! endpoints without a running identity service. Import in `#[cfg(test)]`
//! blocks and `[dev-dependencies]` only — never in production code.

pub mod auth;
