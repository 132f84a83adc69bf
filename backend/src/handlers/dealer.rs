//! HTTP handlers for dealers

use axum::{extract::State, http::StatusCode, Json};
use shared::{Dealer, DealerInput, RenameDealerInput};

use crate::{
    error::AppResult, extract::JsonBody, handlers::Success, services::DealerService, AppState,
};

/// List dealers sorted by name
pub async fn list_dealers(State(state): State<AppState>) -> AppResult<Json<Vec<Dealer>>> {
    let service = DealerService::new(state.store);
    let dealers = service.list_dealers().await?;
    Ok(Json(dealers))
}

pub async fn create_dealer(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<DealerInput>,
) -> AppResult<(StatusCode, Json<Dealer>)> {
    let service = DealerService::new(state.store);
    let dealer = service.create_dealer(input).await?;
    Ok((StatusCode::CREATED, Json(dealer)))
}

/// Rename a dealer identified in the request body
pub async fn rename_dealer(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<RenameDealerInput>,
) -> AppResult<Json<Success>> {
    let service = DealerService::new(state.store);
    service.rename_dealer(input).await?;
    Ok(Json(Success::default()))
}
