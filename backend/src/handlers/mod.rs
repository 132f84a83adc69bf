//! HTTP handlers for the Farm Shop Ledger API

use serde::Serialize;

pub mod dealer;
pub mod health;
pub mod insight;
pub mod transaction;

pub use dealer::*;
pub use health::*;
pub use insight::*;
pub use transaction::*;

/// `{ "success": true }` acknowledgement for mutations without a body
#[derive(Debug, Serialize)]
pub struct Success {
    pub success: bool,
}

impl Default for Success {
    fn default() -> Self {
        Self { success: true }
    }
}
