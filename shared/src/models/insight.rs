//! Compact ledger summary sent to the text-generation service

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Transaction;

/// One transaction reduced to the fields the summarizer needs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsightRecord {
    pub dealer: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub weight: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub paid: bool,
    pub date: NaiveDate,
}

impl From<&Transaction> for InsightRecord {
    fn from(tx: &Transaction) -> Self {
        Self {
            dealer: tx.dealer_name.clone(),
            weight: tx.weight_kg,
            price: tx.price_per_kg,
            total: tx.total_amount,
            paid: tx.is_paid,
            date: tx.date,
        }
    }
}

pub fn insight_records(transactions: &[Transaction]) -> Vec<InsightRecord> {
    transactions.iter().map(InsightRecord::from).collect()
}

/// Build the prompt asking for a short performance summary
pub fn build_insight_prompt(records: &[InsightRecord]) -> Result<String, serde_json::Error> {
    let data = serde_json::to_string(records)?;
    Ok(format!(
        "Analyze the following chicken farm shop sales data and provide a concise \
         3-sentence summary of business performance.\n\
         Identify the most active dealer and any concerns regarding unpaid balances.\n\
         Data: {data}"
    ))
}
