//! Ledger insight handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{
    services::{insight::SERVICE_ERROR_MESSAGE, TransactionService},
    AppState,
};

#[derive(Debug, Serialize)]
pub struct InsightResponse {
    pub insight: String,
}

/// Summarize the whole ledger. Always succeeds; failures become a fallback text.
pub async fn get_insights(State(state): State<AppState>) -> Json<InsightResponse> {
    let service = TransactionService::new(state.store);

    let insight = match service.list_transactions().await {
        Ok(transactions) => state.insights.summarize(&transactions).await,
        Err(e) => {
            tracing::warn!(error = %e, "Could not load ledger for insights");
            SERVICE_ERROR_MESSAGE.to_string()
        }
    };

    Json(InsightResponse { insight })
}
