//! HTTP handlers for ledger transactions

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use shared::{
    empty_string_as_none, BusinessStats, DashboardFilter, Pagination, PaymentFilter,
    PaymentStatusUpdate, Transaction, TransactionFilter, TransactionInput, DEFAULT_PAGE_SIZE,
};

use crate::{
    error::{AppError, AppResult},
    extract::JsonBody,
    handlers::Success,
    services::transaction::{parse_dealer_ref, LedgerView},
    services::TransactionService,
    AppState,
};

/// Query parameters for a filtered ledger page
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub dealer_id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub page: Option<u32>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub page_size: Option<u32>,
}

impl LedgerQuery {
    fn filter(&self) -> AppResult<TransactionFilter> {
        let status = match self.status.as_deref().map(str::trim) {
            None | Some("") => PaymentFilter::All,
            Some(raw) => raw
                .parse::<PaymentFilter>()
                .map_err(|e| AppError::validation("status", e.to_string()))?,
        };

        Ok(TransactionFilter {
            search: self.search.clone().unwrap_or_default(),
            status,
            start_date: self.start_date,
            end_date: self.end_date,
            dealer_id: parse_dealer_ref(self.dealer_id.as_deref())?,
        })
    }

    fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page.unwrap_or(1),
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

/// Query parameters for dashboard stats
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsQuery {
    #[serde(default)]
    pub dealer_id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub end_date: Option<NaiveDate>,
}

/// List every transaction, newest first
pub async fn list_transactions(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Transaction>>> {
    let service = TransactionService::new(state.store);
    let transactions = service.list_transactions().await?;
    Ok(Json(transactions))
}

/// Record a delivery batch
pub async fn create_transaction(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<TransactionInput>,
) -> AppResult<(StatusCode, Json<Transaction>)> {
    let service = TransactionService::new(state.store);
    let transaction = service.create_transaction(input).await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

/// Replace a transaction's mutable fields
pub async fn update_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<TransactionInput>,
) -> AppResult<Json<Transaction>> {
    let service = TransactionService::new(state.store);
    let transaction = service.update_transaction(&id, input).await?;
    Ok(Json(transaction))
}

/// Mark a transaction paid or unpaid
pub async fn update_payment_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<PaymentStatusUpdate>,
) -> AppResult<Json<Success>> {
    let service = TransactionService::new(state.store);
    service.set_payment_status(&id, input.is_paid).await?;
    Ok(Json(Success::default()))
}

pub async fn delete_transaction(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Success>> {
    let service = TransactionService::new(state.store);
    service.delete_transaction(&id).await?;
    Ok(Json(Success::default()))
}

/// Filtered, paginated ledger with stats of the filtered set
pub async fn get_ledger(
    State(state): State<AppState>,
    Query(query): Query<LedgerQuery>,
) -> AppResult<Json<LedgerView>> {
    let filter = query.filter()?;
    let service = TransactionService::new(state.store);
    let view = service.ledger_view(&filter, query.pagination()).await?;
    Ok(Json(view))
}

/// Summary cards for the dashboard
pub async fn get_stats(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> AppResult<Json<BusinessStats>> {
    let filter = DashboardFilter {
        dealer_id: parse_dealer_ref(query.dealer_id.as_deref())?,
        start_date: query.start_date,
        end_date: query.end_date,
    };
    let service = TransactionService::new(state.store);
    let stats = service.dashboard_stats(&filter).await?;
    Ok(Json(stats))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_query_defaults() {
        let query = LedgerQuery::default();
        let filter = query.filter().unwrap();
        assert_eq!(filter.status, PaymentFilter::All);
        assert!(filter.search.is_empty());
        assert_eq!(query.pagination(), Pagination::default());
    }

    #[test]
    fn test_ledger_query_rejects_unknown_status() {
        let query = LedgerQuery {
            status: Some("overdue".into()),
            ..Default::default()
        };
        assert!(matches!(
            query.filter(),
            Err(AppError::ValidationFailed { field, .. }) if field == "status"
        ));
    }
}
