//! HTTP API for Einhard datasets.
//!
//! This crate provides an Axum HTTP server that exposes a single resource,
//! `/datasets/`:
//!
//! - **`GET`** lists every registered dataset, keyed by name
//! - **`POST`** builds a dataset from a JSON definition, registers it, and
//!   echoes its serialized form
//!
//! # Architecture
//!
//! The [`DatasetRegistry`] lives in [`AppState`] behind a
//! [`tokio::sync::RwLock`], so list requests read concurrently and create
//! requests take exclusive access. Every failure is reported as
//! `{"message": ...}` with status 500.
//!
//! [`DatasetRegistry`]: einhard_dataset::DatasetRegistry

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
