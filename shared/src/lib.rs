//! Shared types and models for the Farm Shop Ledger
//!
//! This crate contains the domain model and the pure derivation logic shared
//! between the backend, the browser dashboard (via WASM), and tests.

pub mod format;
pub mod models;
pub mod state;
pub mod types;
pub mod validation;

pub use format::*;
pub use models::*;
pub use types::*;
pub use validation::*;
