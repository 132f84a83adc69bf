//! Aggregate business statistics

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Transaction;

/// Totals over a set of transactions. Derived on demand, never persisted.
///
/// `paid_amount + pending_amount == total_revenue` for any input.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BusinessStats {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_weight: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
    pub total_chickens: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub paid_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub pending_amount: Decimal,
    pub transaction_count: u64,
}

impl BusinessStats {
    /// Saturating, so sums over any input stay defined
    fn record(mut self, tx: &Transaction) -> Self {
        self.total_weight = self.total_weight.saturating_add(tx.weight_kg);
        self.total_revenue = self.total_revenue.saturating_add(tx.total_amount);
        self.total_chickens = self.total_chickens.saturating_add(i64::from(tx.chicken_count));
        if tx.is_paid {
            self.paid_amount = self.paid_amount.saturating_add(tx.total_amount);
        } else {
            self.pending_amount = self.pending_amount.saturating_add(tx.total_amount);
        }
        self.transaction_count += 1;
        self
    }
}

/// Compute statistics in a single pass over `transactions`
pub fn compute_stats<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> BusinessStats {
    transactions
        .into_iter()
        .fold(BusinessStats::default(), BusinessStats::record)
}
