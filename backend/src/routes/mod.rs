//! Route definitions for the Farm Shop Ledger

use axum::{
    routing::{get, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(transaction_routes())
        .merge(dealer_routes())
        // Derived views
        .route("/ledger", get(handlers::get_ledger))
        .route("/stats", get(handlers::get_stats))
        .route("/insights", get(handlers::get_insights))
}

fn transaction_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/transactions",
            get(handlers::list_transactions).post(handlers::create_transaction),
        )
        .route(
            "/transactions/:id",
            put(handlers::update_transaction)
                .patch(handlers::update_payment_status)
                .delete(handlers::delete_transaction),
        )
}

/// Renames address the collection; the dealer id travels in the body
fn dealer_routes() -> Router<AppState> {
    Router::new().route(
        "/dealers",
        get(handlers::list_dealers)
            .post(handlers::create_dealer)
            .put(handlers::rename_dealer),
    )
}
