//! Delivery batch (transaction) models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::types::empty_string_as_none;

/// One delivery batch from one dealer, as returned to clients.
///
/// `dealer_name` is a read-time projection of `dealer_id` and is never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub dealer_id: Option<Uuid>,
    pub dealer_name: String,
    pub date: NaiveDate,
    pub chicken_count: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub weight_kg: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub price_per_kg: Decimal,
    /// Always `weight_kg * price_per_kg`, computed server-side
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub is_paid: bool,
    /// Epoch milliseconds
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Input for creating or fully replacing a transaction.
///
/// Any `totalAmount` sent by the client is ignored: the field does not exist
/// here and unknown fields are dropped during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dealer_id: Option<String>,
    pub date: NaiveDate,
    #[validate(range(min = 0, message = "Chicken count cannot be negative"))]
    pub chicken_count: i32,
    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom = "crate::validation::validate_batch_quantity")]
    pub weight_kg: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom = "crate::validation::validate_batch_quantity")]
    pub price_per_kg: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_paid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl TransactionInput {
    /// Total amount for this batch, `None` on decimal overflow
    pub fn total_amount(&self) -> Option<Decimal> {
        self.weight_kg.checked_mul(self.price_per_kg)
    }

    /// Payment flag with the unset case treated as unpaid
    pub fn is_paid(&self) -> bool {
        self.is_paid.unwrap_or(false)
    }

    /// Note with surrounding whitespace removed; blank notes become `None`
    pub fn normalized_note(&self) -> Option<String> {
        self.note
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string)
    }
}

/// Body of the payment status toggle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatusUpdate {
    pub is_paid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_total_amount_is_weight_times_price() {
        let input = TransactionInput {
            dealer_id: None,
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            chicken_count: 40,
            weight_kg: Decimal::from_str("10.5").unwrap(),
            price_per_kg: Decimal::from(250),
            is_paid: None,
            note: None,
        };
        assert_eq!(input.total_amount(), Some(Decimal::from_str("2625").unwrap()));
        assert!(!input.is_paid());
    }

    #[test]
    fn test_client_total_amount_is_ignored() {
        let input: TransactionInput = serde_json::from_value(serde_json::json!({
            "dealerId": "",
            "date": "2024-03-15",
            "chickenCount": 12,
            "weightKg": 10,
            "pricePerKg": 250,
            "totalAmount": 1
        }))
        .unwrap();

        assert_eq!(input.total_amount(), Some(Decimal::from(2500)));
    }

    #[test]
    fn test_blank_note_is_dropped() {
        let mut input: TransactionInput = serde_json::from_value(serde_json::json!({
            "date": "2024-03-15",
            "chickenCount": 1,
            "weightKg": 1.5,
            "pricePerKg": 2,
            "note": "   "
        }))
        .unwrap();
        assert_eq!(input.normalized_note(), None);

        input.note = Some("  late delivery ".into());
        assert_eq!(input.normalized_note().as_deref(), Some("late delivery"));
    }

    #[test]
    fn test_negative_weight_fails_validation() {
        let input: TransactionInput = serde_json::from_value(serde_json::json!({
            "date": "2024-03-15",
            "chickenCount": 1,
            "weightKg": -3,
            "pricePerKg": 2
        }))
        .unwrap();

        assert!(input.validate().is_err());
    }

    #[test]
    fn test_transaction_wire_format_is_camel_case() {
        let tx = Transaction {
            id: Uuid::nil(),
            dealer_id: None,
            dealer_name: "Unknown Dealer".into(),
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            chicken_count: 3,
            weight_kg: Decimal::from(4),
            price_per_kg: Decimal::from(5),
            total_amount: Decimal::from(20),
            is_paid: false,
            created_at: 1_700_000_000_000,
            note: None,
        };

        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["dealerName"], "Unknown Dealer");
        assert_eq!(value["totalAmount"], 20.0);
        assert_eq!(value["date"], "2024-03-15");
        assert!(value.get("note").is_none());
    }
}
