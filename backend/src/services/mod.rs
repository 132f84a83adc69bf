//! Business logic services for the Farm Shop Ledger

pub mod dealer;
pub mod insight;
pub mod transaction;

pub use dealer::DealerService;
pub use insight::{InsightService, TextGenerator};
pub use transaction::{LedgerView, TransactionService};
