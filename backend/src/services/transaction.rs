//! Transaction gateway: ledger reads and writes with dealer names resolved

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use shared::{
    compute_stats, filter_for_dashboard, filter_transactions, paginate, BusinessStats,
    DashboardFilter, DealerNames, Pagination, PaginationMeta, Transaction, TransactionFilter,
    TransactionInput,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::store::{LedgerStore, TransactionFields};

/// Parse a storage key, failing before any storage access
pub fn parse_id(raw: &str, resource: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::InvalidIdentifier(resource.to_string()))
}

/// Optional dealer reference from a request body; blank means no dealer
pub fn parse_dealer_ref(raw: Option<&str>) -> AppResult<Option<Uuid>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(id) => parse_id(id, "dealer").map(Some),
    }
}

/// A filtered ledger page with the stats of the whole filtered set
#[derive(Debug, Clone, Serialize)]
pub struct LedgerView {
    pub data: Vec<Transaction>,
    pub pagination: PaginationMeta,
    pub stats: BusinessStats,
}

#[derive(Clone)]
pub struct TransactionService {
    store: Arc<dyn LedgerStore>,
}

impl TransactionService {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    async fn dealer_names(&self) -> AppResult<DealerNames> {
        let dealers = self.store.list_dealers().await?;
        Ok(DealerNames::new(&dealers))
    }

    /// All transactions, newest first
    pub async fn list_transactions(&self) -> AppResult<Vec<Transaction>> {
        let records = self.store.list_transactions().await?;
        let names = self.dealer_names().await?;

        Ok(records
            .into_iter()
            .map(|r| {
                if let Some(dealer_id) = r.dealer_id.filter(|id| !names.contains(*id)) {
                    tracing::debug!(transaction_id = %r.id, %dealer_id, "Unresolved dealer reference");
                }
                let name = names.resolve(r.dealer_id);
                r.into_transaction(name)
            })
            .collect())
    }

    pub async fn create_transaction(&self, input: TransactionInput) -> AppResult<Transaction> {
        let fields = validated_fields(input)?;
        let record = fields.into_record(Uuid::new_v4(), Utc::now().timestamp_millis());

        let record = self.store.insert_transaction(record).await?;
        let name = self.dealer_names().await?.resolve(record.dealer_id);

        tracing::info!(
            transaction_id = %record.id,
            total_amount = %record.total_amount,
            "Transaction recorded"
        );

        Ok(record.into_transaction(name))
    }

    /// Replace every mutable field of a transaction
    pub async fn update_transaction(
        &self,
        id: &str,
        input: TransactionInput,
    ) -> AppResult<Transaction> {
        let id = parse_id(id, "transaction")?;
        let fields = validated_fields(input)?;

        let record = self
            .store
            .replace_transaction(id, fields)
            .await?
            .ok_or_else(|| AppError::NotFound("Transaction".to_string()))?;
        let name = self.dealer_names().await?.resolve(record.dealer_id);

        tracing::info!(transaction_id = %id, "Transaction updated");

        Ok(record.into_transaction(name))
    }

    pub async fn set_payment_status(&self, id: &str, is_paid: bool) -> AppResult<()> {
        let id = parse_id(id, "transaction")?;

        if !self.store.set_paid(id, is_paid).await? {
            return Err(AppError::NotFound("Transaction".to_string()));
        }

        tracing::info!(transaction_id = %id, is_paid, "Payment status changed");
        Ok(())
    }

    pub async fn delete_transaction(&self, id: &str) -> AppResult<()> {
        let id = parse_id(id, "transaction")?;

        if !self.store.delete_transaction(id).await? {
            return Err(AppError::NotFound("Transaction".to_string()));
        }

        tracing::info!(transaction_id = %id, "Transaction deleted");
        Ok(())
    }

    /// One page of the filtered ledger
    pub async fn ledger_view(
        &self,
        filter: &TransactionFilter,
        pagination: Pagination,
    ) -> AppResult<LedgerView> {
        let all = self.list_transactions().await?;
        let filtered = filter_transactions(&all, filter);

        Ok(LedgerView {
            data: paginate(&filtered, pagination.page, pagination.page_size),
            pagination: PaginationMeta::new(pagination, filtered.len()),
            stats: compute_stats(&filtered),
        })
    }

    pub async fn dashboard_stats(&self, filter: &DashboardFilter) -> AppResult<BusinessStats> {
        let all = self.list_transactions().await?;
        Ok(compute_stats(&filter_for_dashboard(&all, filter)))
    }
}

/// Validate input and compute the total server-side
fn validated_fields(input: TransactionInput) -> AppResult<TransactionFields> {
    let dealer_id = parse_dealer_ref(input.dealer_id.as_deref())?;
    input.validate()?;

    let total_amount = input
        .total_amount()
        .ok_or_else(|| AppError::validation("totalAmount", "Total amount is out of range"))?;

    Ok(TransactionFields {
        dealer_id,
        date: input.date,
        chicken_count: input.chicken_count,
        weight_kg: input.weight_kg,
        price_per_kg: input.price_per_kg,
        total_amount,
        is_paid: input.is_paid(),
        note: input.normalized_note(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_rejects_malformed() {
        assert!(matches!(
            parse_id("not-a-uuid", "transaction"),
            Err(AppError::InvalidIdentifier(r)) if r == "transaction"
        ));
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string(), "transaction").unwrap(), id);
    }

    #[test]
    fn test_blank_dealer_ref_is_none() {
        assert_eq!(parse_dealer_ref(None).unwrap(), None);
        assert_eq!(parse_dealer_ref(Some("  ")).unwrap(), None);
        assert!(parse_dealer_ref(Some("abc")).is_err());
    }
}
