//! Dealer registry

use std::sync::Arc;

use chrono::Utc;
use shared::{Dealer, DealerInput, RenameDealerInput};
use uuid::Uuid;
use validator::Validate;

use super::transaction::parse_id;
use crate::error::{AppError, AppResult};
use crate::store::LedgerStore;

#[derive(Clone)]
pub struct DealerService {
    store: Arc<dyn LedgerStore>,
}

impl DealerService {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// All dealers sorted by name
    pub async fn list_dealers(&self) -> AppResult<Vec<Dealer>> {
        self.store.list_dealers().await
    }

    /// Register a dealer. Duplicate names are allowed.
    pub async fn create_dealer(&self, input: DealerInput) -> AppResult<Dealer> {
        let input = input.normalized();
        input.validate()?;

        let dealer = self
            .store
            .insert_dealer(Dealer {
                id: Uuid::new_v4(),
                name: input.name,
                created_at: Utc::now().timestamp_millis(),
            })
            .await?;

        tracing::info!(dealer_id = %dealer.id, name = %dealer.name, "Dealer registered");
        Ok(dealer)
    }

    /// Rename a dealer; existing transactions pick the name up on their next read
    pub async fn rename_dealer(&self, input: RenameDealerInput) -> AppResult<()> {
        let input = input.normalized();
        let id = parse_id(&input.id, "dealer")?;
        input.validate()?;

        if !self.store.rename_dealer(id, &input.name).await? {
            return Err(AppError::NotFound("Dealer".to_string()));
        }

        tracing::info!(dealer_id = %id, name = %input.name, "Dealer renamed");
        Ok(())
    }
}
