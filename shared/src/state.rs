//! Dashboard state
//!
//! The browser dashboard holds one `LedgerState` and moves it forward with
//! [`LedgerState::reduce`]. Collections are always replaced wholesale with a
//! fresh server read after a mutation; a failed mutation leaves them untouched.

use serde::{Deserialize, Serialize};

use crate::models::{
    compute_stats, filter_for_dashboard, filter_transactions, BusinessStats, DashboardFilter,
    Dealer, Transaction, TransactionFilter,
};
use crate::types::{paginate, Pagination, PaginationMeta, DEFAULT_PAGE_SIZE};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LedgerState {
    pub transactions: Vec<Transaction>,
    pub dealers: Vec<Dealer>,
    pub is_loading: bool,
    pub filters: TransactionFilter,
    pub dashboard_filters: DashboardFilter,
    pub current_page: u32,
    pub page_size: u32,
    /// Key of the in-flight action (`"adding"` or a transaction id)
    pub busy: Option<String>,
    /// Last failure, shown to the user until dismissed
    pub error: Option<String>,
}

impl Default for LedgerState {
    fn default() -> Self {
        Self {
            transactions: Vec::new(),
            dealers: Vec::new(),
            is_loading: true,
            filters: TransactionFilter::default(),
            dashboard_filters: DashboardFilter::default(),
            current_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            busy: None,
            error: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum LedgerAction {
    TransactionsLoaded(Vec<Transaction>),
    DealersLoaded(Vec<Dealer>),
    FilterChanged(TransactionFilter),
    DashboardFilterChanged(DashboardFilter),
    PageRequested(u32),
    ActionStarted(String),
    MutationFailed(String),
    NoticeDismissed,
}

impl LedgerState {
    pub fn reduce(self, action: LedgerAction) -> Self {
        match action {
            LedgerAction::TransactionsLoaded(transactions) => {
                let next = Self {
                    transactions,
                    is_loading: false,
                    busy: None,
                    ..self
                };
                let page = next.clamp_page(next.current_page);
                Self { current_page: page, ..next }
            }
            LedgerAction::DealersLoaded(dealers) => Self { dealers, ..self },
            LedgerAction::FilterChanged(filters) => Self {
                filters,
                current_page: 1,
                ..self
            },
            LedgerAction::DashboardFilterChanged(dashboard_filters) => Self {
                dashboard_filters,
                ..self
            },
            LedgerAction::PageRequested(page) => {
                let current_page = self.clamp_page(page);
                Self { current_page, ..self }
            }
            LedgerAction::ActionStarted(key) => Self {
                busy: Some(key),
                error: None,
                ..self
            },
            LedgerAction::MutationFailed(message) => Self {
                busy: None,
                is_loading: false,
                error: Some(message),
                ..self
            },
            LedgerAction::NoticeDismissed => Self { error: None, ..self },
        }
    }

    fn clamp_page(&self, page: u32) -> u32 {
        let total = self.pagination().total_pages;
        page.clamp(1, total.max(1))
    }

    pub fn filtered_transactions(&self) -> Vec<Transaction> {
        filter_transactions(&self.transactions, &self.filters)
    }

    /// Rows of the ledger table on the current page
    pub fn visible_transactions(&self) -> Vec<Transaction> {
        paginate(&self.filtered_transactions(), self.current_page, self.page_size)
    }

    pub fn pagination(&self) -> PaginationMeta {
        let pagination = Pagination {
            page: self.current_page,
            page_size: self.page_size,
        };
        PaginationMeta::new(pagination, self.filtered_transactions().len())
    }

    /// Totals over every loaded transaction
    pub fn ledger_stats(&self) -> BusinessStats {
        compute_stats(&self.transactions)
    }

    /// Totals for the statistics cards under the dashboard filter
    pub fn dashboard_stats(&self) -> BusinessStats {
        compute_stats(&filter_for_dashboard(&self.transactions, &self.dashboard_filters))
    }
}
