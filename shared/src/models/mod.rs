//! Domain models for the Farm Shop Ledger

mod dealer;
mod filter;
mod insight;
mod stats;
mod transaction;

pub use dealer::*;
pub use filter::*;
pub use insight::*;
pub use stats::*;
pub use transaction::*;
