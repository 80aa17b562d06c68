//! Decora designs service: generates AI-composited room designs from a
//! user's photo, budget and saved preferences, and serves the resulting
//! design records.

pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod infra;
pub mod router;
pub mod state;
pub mod usecase;
