//! WebAssembly module for the Farm Shop Ledger dashboard
//!
//! Provides client-side computation for:
//! - Business statistics over the loaded ledger
//! - Ledger filtering and pagination
//! - Dashboard state transitions
//! - Currency and weight display formatting

use rust_decimal::Decimal;
use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::state::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Log to the browser console and build the error thrown to JavaScript
fn js_error(message: &str) -> JsValue {
    web_sys::console::error_1(&JsValue::from_str(message));
    JsValue::from(js_sys::Error::new(message))
}

fn parse<T: DeserializeOwned>(json: &str, what: &str) -> Result<T, JsValue> {
    serde_json::from_str(json).map_err(|e| js_error(&format!("Invalid {} JSON: {}", what, e)))
}

/// `None` for NaN, infinities and values outside the decimal range
fn finite_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::try_from(value).ok()
}

fn decimal_arg(value: f64, what: &str) -> Result<Decimal, JsValue> {
    finite_decimal(value).ok_or_else(|| js_error(&format!("Invalid {}: {}", what, value)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from(js_sys::Error::new(&format!("Serialization failed: {}", e))))
}

/// Compute business statistics for a JSON array of transactions
#[wasm_bindgen]
pub fn compute_business_stats(transactions_json: &str) -> Result<String, JsValue> {
    let transactions: Vec<Transaction> = parse(transactions_json, "transactions")?;
    to_json(&compute_stats(&transactions))
}

/// Filter a JSON array of transactions with JSON filter criteria
#[wasm_bindgen]
pub fn filter_ledger(transactions_json: &str, filter_json: &str) -> Result<String, JsValue> {
    let transactions: Vec<Transaction> = parse(transactions_json, "transactions")?;
    let filter: TransactionFilter = parse(filter_json, "filter")?;
    to_json(&filter_transactions(&transactions, &filter))
}

/// Slice one page out of a JSON array of transactions, with page metadata,
/// the `showingFrom`/`showingTo` caption and `hasControls`
#[wasm_bindgen]
pub fn paginate_ledger(transactions_json: &str, page: u32, page_size: u32) -> Result<String, JsValue> {
    let transactions: Vec<Transaction> = parse(transactions_json, "transactions")?;
    to_json(&PaginatedResponse::from_items(
        &transactions,
        Pagination { page, page_size },
    ))
}

/// Number of pages for `count` rows
#[wasm_bindgen]
pub fn ledger_total_pages(count: u32, page_size: u32) -> u32 {
    total_pages(count as usize, page_size)
}

/// Page buttons to render around the current page
#[wasm_bindgen]
pub fn ledger_page_window(current: u32, total_pages: u32) -> Vec<u32> {
    page_window(current, total_pages, PAGE_WINDOW_WIDTH)
}

/// Initial dashboard state
#[wasm_bindgen]
pub fn initial_state() -> Result<String, JsValue> {
    to_json(&LedgerState::default())
}

/// Apply one action to the dashboard state and return the next state
#[wasm_bindgen]
pub fn reduce_state(state_json: &str, action_json: &str) -> Result<String, JsValue> {
    let state: LedgerState = parse(state_json, "state")?;
    let action: LedgerAction = parse(action_json, "action")?;
    to_json(&state.reduce(action))
}

/// Format an amount as `LKR 12,500`; throws on NaN or infinite input
#[wasm_bindgen]
pub fn format_amount(amount: f64) -> Result<String, JsValue> {
    Ok(shared::format_currency(decimal_arg(amount, "amount")?))
}

/// Format a weight as `12.50 kg`; throws on NaN or infinite input
#[wasm_bindgen]
pub fn format_weight_kg(weight_kg: f64) -> Result<String, JsValue> {
    Ok(shared::format_weight(decimal_arg(weight_kg, "weight")?))
}

/// Form check before submitting a batch
#[wasm_bindgen]
pub fn is_valid_batch(weight_kg: f64, price_per_kg: f64) -> bool {
    match (finite_decimal(weight_kg), finite_decimal(price_per_kg)) {
        (Some(w), Some(p)) => validate_batch_amounts(w, p).is_ok(),
        _ => false,
    }
}

/// Form check before registering or renaming a dealer
#[wasm_bindgen]
pub fn is_valid_dealer_name(name: &str) -> bool {
    validate_dealer_name(name).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEDGER: &str = r#"[
        {"id":"6a1f1b8e-3c1e-4d5c-9a44-0f3b2f3f9d01","dealerId":"","dealerName":"Perera Poultry",
         "date":"2024-03-15","chickenCount":40,"weightKg":10,"pricePerKg":250,"totalAmount":2500,
         "isPaid":true,"createdAt":1710460800000},
        {"id":"6a1f1b8e-3c1e-4d5c-9a44-0f3b2f3f9d02","dealerId":null,"dealerName":"Silva Traders",
         "date":"2024-02-28","chickenCount":20,"weightKg":5,"pricePerKg":300,"totalAmount":1500,
         "isPaid":false,"createdAt":1709078400000,"note":"short by two birds"}
    ]"#;

    #[test]
    fn test_compute_business_stats() {
        let stats: BusinessStats =
            serde_json::from_str(&compute_business_stats(LEDGER).unwrap()).unwrap();
        assert_eq!(stats.transaction_count, 2);
        assert_eq!(stats.paid_amount, Decimal::from(2500));
        assert_eq!(stats.pending_amount, Decimal::from(1500));
        assert_eq!(stats.total_chickens, 60);
    }

    #[test]
    fn test_filter_ledger() {
        let filtered: Vec<Transaction> =
            serde_json::from_str(&filter_ledger(LEDGER, r#"{"status":"unpaid"}"#).unwrap()).unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].dealer_name, "Silva Traders");
    }

    #[test]
    fn test_pagination_helpers() {
        assert_eq!(ledger_total_pages(25, 10), 3);
        assert_eq!(ledger_page_window(1, 3), vec![1, 2, 3]);

        let page: PaginatedResponse<Transaction> =
            serde_json::from_str(&paginate_ledger(LEDGER, 2, 1).unwrap()).unwrap();
        assert_eq!(page.data[0].dealer_name, "Silva Traders");
        assert_eq!(page.pagination.total_pages, 2);
        assert_eq!((page.showing_from, page.showing_to), (Some(2), Some(2)));
        assert!(page.has_controls);

        let whole: serde_json::Value =
            serde_json::from_str(&paginate_ledger(LEDGER, 1, 10).unwrap()).unwrap();
        assert_eq!(whole["showingFrom"], 1);
        assert_eq!(whole["showingTo"], 2);
        assert_eq!(whole["hasControls"], false);

        let past_end: serde_json::Value =
            serde_json::from_str(&paginate_ledger(LEDGER, 5, 10).unwrap()).unwrap();
        assert!(past_end["showingFrom"].is_null());
    }

    #[test]
    fn test_reduce_state() {
        let state = initial_state().unwrap();
        let action = format!(r#"{{"type":"transactionsLoaded","payload":{}}}"#, LEDGER);
        let next: LedgerState = serde_json::from_str(&reduce_state(&state, &action).unwrap()).unwrap();
        assert!(!next.is_loading);
        assert_eq!(next.transactions.len(), 2);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_amount(2500.0).unwrap(), "LKR 2,500");
        assert_eq!(format_weight_kg(12.5).unwrap(), "12.50 kg");
        assert!(is_valid_batch(10.0, 250.0));
        assert!(!is_valid_batch(0.0, 250.0));
        assert!(!is_valid_batch(f64::NAN, 250.0));
        assert!(!is_valid_batch(10.0, f64::INFINITY));
        assert!(is_valid_dealer_name(" Perera "));
        assert!(!is_valid_dealer_name("   "));
    }

    #[test]
    fn test_non_finite_numbers_are_not_decimals() {
        assert_eq!(finite_decimal(f64::NAN), None);
        assert_eq!(finite_decimal(f64::INFINITY), None);
        assert_eq!(finite_decimal(f64::NEG_INFINITY), None);
        assert_eq!(finite_decimal(1e40), None);
        assert_eq!(finite_decimal(12.5), Some(Decimal::new(125, 1)));
    }
}
