//! In-process ledger store
//!
//! Backs the test suites and the `memory` storage backend. Contents are lost
//! when the process exits.

use async_trait::async_trait;
use shared::Dealer;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{LedgerStore, TransactionFields, TransactionRecord};
use crate::error::AppResult;

#[derive(Default)]
struct Collections {
    /// Insertion order
    transactions: Vec<TransactionRecord>,
    dealers: Vec<Dealer>,
}

#[derive(Default)]
pub struct MemoryLedgerStore {
    inner: RwLock<Collections>,
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LedgerStore for MemoryLedgerStore {
    async fn list_transactions(&self) -> AppResult<Vec<TransactionRecord>> {
        let inner = self.inner.read().await;
        // Latest insertion wins ties on created_at
        let mut records: Vec<_> = inner.transactions.iter().rev().cloned().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }

    async fn insert_transaction(&self, record: TransactionRecord) -> AppResult<TransactionRecord> {
        let mut inner = self.inner.write().await;
        inner.transactions.push(record.clone());
        Ok(record)
    }

    async fn replace_transaction(
        &self,
        id: Uuid,
        fields: TransactionFields,
    ) -> AppResult<Option<TransactionRecord>> {
        let mut inner = self.inner.write().await;
        let Some(existing) = inner.transactions.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        *existing = fields.into_record(existing.id, existing.created_at);
        Ok(Some(existing.clone()))
    }

    async fn set_paid(&self, id: Uuid, is_paid: bool) -> AppResult<bool> {
        let mut inner = self.inner.write().await;
        match inner.transactions.iter_mut().find(|t| t.id == id) {
            Some(record) => {
                record.is_paid = is_paid;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_transaction(&self, id: Uuid) -> AppResult<bool> {
        let mut inner = self.inner.write().await;
        let before = inner.transactions.len();
        inner.transactions.retain(|t| t.id != id);
        Ok(inner.transactions.len() < before)
    }

    async fn list_dealers(&self) -> AppResult<Vec<Dealer>> {
        let inner = self.inner.read().await;
        let mut dealers = inner.dealers.clone();
        dealers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(dealers)
    }

    async fn insert_dealer(&self, dealer: Dealer) -> AppResult<Dealer> {
        let mut inner = self.inner.write().await;
        inner.dealers.push(dealer.clone());
        Ok(dealer)
    }

    async fn rename_dealer(&self, id: Uuid, name: &str) -> AppResult<bool> {
        let mut inner = self.inner.write().await;
        match inner.dealers.iter_mut().find(|d| d.id == id) {
            Some(dealer) => {
                dealer.name = name.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
