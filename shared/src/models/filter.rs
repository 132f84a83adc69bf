//! Ledger filtering

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::Transaction;
use crate::types::empty_string_as_none;

/// Payment status filter
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentFilter {
    #[default]
    All,
    Paid,
    Unpaid,
}

impl PaymentFilter {
    pub fn matches(&self, is_paid: bool) -> bool {
        match self {
            PaymentFilter::All => true,
            PaymentFilter::Paid => is_paid,
            PaymentFilter::Unpaid => !is_paid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentFilter::All => "all",
            PaymentFilter::Paid => "paid",
            PaymentFilter::Unpaid => "unpaid",
        }
    }
}

impl fmt::Display for PaymentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown payment filter: {0}")]
pub struct UnknownPaymentFilter(pub String);

impl FromStr for PaymentFilter {
    type Err = UnknownPaymentFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(PaymentFilter::All),
            "paid" => Ok(PaymentFilter::Paid),
            "unpaid" => Ok(PaymentFilter::Unpaid),
            other => Err(UnknownPaymentFilter(other.to_string())),
        }
    }
}

/// Criteria for the ledger table. Every absent criterion matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionFilter {
    /// Case-insensitive substring of the dealer name
    pub search: String,
    pub status: PaymentFilter,
    #[serde(deserialize_with = "empty_string_as_none", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(deserialize_with = "empty_string_as_none", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(deserialize_with = "empty_string_as_none", skip_serializing_if = "Option::is_none")]
    pub dealer_id: Option<Uuid>,
}

impl TransactionFilter {
    pub fn matches(&self, tx: &Transaction) -> bool {
        let matches_search = self.search.is_empty()
            || tx
                .dealer_name
                .to_lowercase()
                .contains(&self.search.to_lowercase());

        matches_search
            && self.status.matches(tx.is_paid)
            && within_dates(tx.date, self.start_date, self.end_date)
            && matches_dealer(tx, self.dealer_id)
    }
}

/// Criteria for the statistics cards: dealer and date range only
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardFilter {
    #[serde(deserialize_with = "empty_string_as_none", skip_serializing_if = "Option::is_none")]
    pub dealer_id: Option<Uuid>,
    #[serde(deserialize_with = "empty_string_as_none", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(deserialize_with = "empty_string_as_none", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl DashboardFilter {
    pub fn matches(&self, tx: &Transaction) -> bool {
        within_dates(tx.date, self.start_date, self.end_date) && matches_dealer(tx, self.dealer_id)
    }
}

/// Inclusive on both ends; a missing bound is unbounded
fn within_dates(date: NaiveDate, start: Option<NaiveDate>, end: Option<NaiveDate>) -> bool {
    start.map_or(true, |s| date >= s) && end.map_or(true, |e| date <= e)
}

fn matches_dealer(tx: &Transaction, dealer_id: Option<Uuid>) -> bool {
    dealer_id.map_or(true, |id| tx.dealer_id == Some(id))
}

/// Stable filter of the ledger; relative order is preserved
pub fn filter_transactions(transactions: &[Transaction], filter: &TransactionFilter) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|tx| filter.matches(tx))
        .cloned()
        .collect()
}

/// Transactions feeding the statistics cards
pub fn filter_for_dashboard(transactions: &[Transaction], filter: &DashboardFilter) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|tx| filter.matches(tx))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn tx(dealer: &str, day: &str, is_paid: bool) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            dealer_id: Some(Uuid::new_v4()),
            dealer_name: dealer.to_string(),
            date: date(day),
            chicken_count: 10,
            weight_kg: Decimal::from(20),
            price_per_kg: Decimal::from(300),
            total_amount: Decimal::from(6000),
            is_paid,
            created_at: 0,
            note: None,
        }
    }

    fn ledger() -> Vec<Transaction> {
        vec![
            tx("Perera Poultry", "2024-03-15", true),
            tx("Silva Traders", "2024-02-28", false),
            tx("perera brothers", "2024-03-31", false),
            tx("Fernando", "2024-04-01", true),
        ]
    }

    #[test]
    fn test_default_filter_matches_everything_in_order() {
        let all = ledger();
        let filtered = filter_transactions(&all, &TransactionFilter::default());
        assert_eq!(filtered, all);
    }

    #[test]
    fn test_status_filters() {
        let all = ledger();

        let paid = filter_transactions(
            &all,
            &TransactionFilter { status: PaymentFilter::Paid, ..Default::default() },
        );
        assert_eq!(paid.len(), 2);
        assert!(paid.iter().all(|t| t.is_paid));

        let unpaid = filter_transactions(
            &all,
            &TransactionFilter { status: PaymentFilter::Unpaid, ..Default::default() },
        );
        assert_eq!(unpaid.len(), 2);
        assert!(unpaid.iter().all(|t| !t.is_paid));
        assert_eq!(unpaid[0].dealer_name, "Silva Traders");
        assert_eq!(unpaid[1].dealer_name, "perera brothers");
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let all = ledger();
        let march = TransactionFilter {
            start_date: Some(date("2024-03-01")),
            end_date: Some(date("2024-03-31")),
            ..Default::default()
        };
        let filtered = filter_transactions(&all, &march);

        let dates: Vec<_> = filtered.iter().map(|t| t.date).collect();
        assert_eq!(dates, vec![date("2024-03-15"), date("2024-03-31")]);
    }

    #[test]
    fn test_open_ended_range() {
        let all = ledger();
        let from_march = TransactionFilter {
            start_date: Some(date("2024-03-01")),
            ..Default::default()
        };
        assert_eq!(filter_transactions(&all, &from_march).len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let all = ledger();
        let filter = TransactionFilter { search: "PERERA".into(), ..Default::default() };
        let filtered = filter_transactions(&all, &filter);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_dealer_equality_and_conjunction() {
        let all = ledger();
        let target = all[2].dealer_id;

        let filter = TransactionFilter {
            dealer_id: target,
            status: PaymentFilter::Paid,
            ..Default::default()
        };
        assert!(filter_transactions(&all, &filter).is_empty());

        let filter = TransactionFilter { dealer_id: target, ..Default::default() };
        assert_eq!(filter_transactions(&all, &filter), vec![all[2].clone()]);
    }

    #[test]
    fn test_dashboard_filter_ignores_status() {
        let all = ledger();
        let filter = DashboardFilter {
            end_date: Some(date("2024-03-15")),
            ..Default::default()
        };
        let filtered = filter_for_dashboard(&all, &filter);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_empty_strings_deserialize_as_unbounded() {
        let filter: TransactionFilter = serde_json::from_value(serde_json::json!({
            "search": "",
            "status": "unpaid",
            "startDate": "",
            "endDate": "2024-03-31",
            "dealerId": ""
        }))
        .unwrap();

        assert_eq!(filter.status, PaymentFilter::Unpaid);
        assert_eq!(filter.start_date, None);
        assert_eq!(filter.end_date, Some(date("2024-03-31")));
        assert_eq!(filter.dealer_id, None);
    }

    #[test]
    fn test_payment_filter_from_str() {
        assert_eq!("paid".parse::<PaymentFilter>(), Ok(PaymentFilter::Paid));
        assert!("overdue".parse::<PaymentFilter>().is_err());
        assert_eq!(PaymentFilter::Unpaid.to_string(), "unpaid");
    }
}
