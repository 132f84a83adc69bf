//! Ledger storage
//!
//! The persistence gateway talks to storage through [`LedgerStore`]. Records
//! here are the stored shape: a transaction never carries its dealer name.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::{Dealer, Transaction};
use uuid::Uuid;

use crate::error::AppResult;

pub mod memory;
pub mod postgres;

pub use memory::MemoryLedgerStore;
pub use postgres::PgLedgerStore;

/// A transaction as persisted
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct TransactionRecord {
    pub id: Uuid,
    pub dealer_id: Option<Uuid>,
    pub date: NaiveDate,
    pub chicken_count: i32,
    pub weight_kg: Decimal,
    pub price_per_kg: Decimal,
    pub total_amount: Decimal,
    pub is_paid: bool,
    pub created_at: i64,
    pub note: Option<String>,
}

impl TransactionRecord {
    /// Attach the resolved dealer name for a client response
    pub fn into_transaction(self, dealer_name: String) -> Transaction {
        Transaction {
            id: self.id,
            dealer_id: self.dealer_id,
            dealer_name,
            date: self.date,
            chicken_count: self.chicken_count,
            weight_kg: self.weight_kg,
            price_per_kg: self.price_per_kg,
            total_amount: self.total_amount,
            is_paid: self.is_paid,
            created_at: self.created_at,
            note: self.note,
        }
    }
}

/// The mutable fields of a transaction, already validated and with the
/// total computed
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionFields {
    pub dealer_id: Option<Uuid>,
    pub date: NaiveDate,
    pub chicken_count: i32,
    pub weight_kg: Decimal,
    pub price_per_kg: Decimal,
    pub total_amount: Decimal,
    pub is_paid: bool,
    pub note: Option<String>,
}

impl TransactionFields {
    pub fn into_record(self, id: Uuid, created_at: i64) -> TransactionRecord {
        TransactionRecord {
            id,
            dealer_id: self.dealer_id,
            date: self.date,
            chicken_count: self.chicken_count,
            weight_kg: self.weight_kg,
            price_per_kg: self.price_per_kg,
            total_amount: self.total_amount,
            is_paid: self.is_paid,
            created_at,
            note: self.note,
        }
    }
}

/// Storage operations behind the persistence gateway.
///
/// Mutations report whether a record matched; mapping a miss to `NotFound`
/// is the gateway's job.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// All transactions, newest `created_at` first
    async fn list_transactions(&self) -> AppResult<Vec<TransactionRecord>>;

    async fn insert_transaction(&self, record: TransactionRecord) -> AppResult<TransactionRecord>;

    /// Replace every mutable field; `None` when no record has `id`
    async fn replace_transaction(
        &self,
        id: Uuid,
        fields: TransactionFields,
    ) -> AppResult<Option<TransactionRecord>>;

    async fn set_paid(&self, id: Uuid, is_paid: bool) -> AppResult<bool>;

    async fn delete_transaction(&self, id: Uuid) -> AppResult<bool>;

    /// All dealers, name ascending
    async fn list_dealers(&self) -> AppResult<Vec<Dealer>>;

    async fn insert_dealer(&self, dealer: Dealer) -> AppResult<Dealer>;

    async fn rename_dealer(&self, id: Uuid, name: &str) -> AppResult<bool>;

    /// Connectivity check for the health endpoint
    async fn ping(&self) -> AppResult<()>;
}
