//! Common types used across the ledger

use std::fmt::Display;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};

/// Rows shown per ledger page on the dashboard
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Page buttons shown at once by the dashboard
pub const PAGE_WINDOW_WIDTH: u32 = 5;

/// Pagination parameters (1-based page)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of rows with everything the page controls need
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
    /// First item number for the "Showing X to Y of N" caption
    pub showing_from: Option<u64>,
    pub showing_to: Option<u64>,
    pub has_controls: bool,
}

impl<T: Clone> PaginatedResponse<T> {
    pub fn from_items(items: &[T], pagination: Pagination) -> Self {
        let meta = PaginationMeta::new(pagination, items.len());
        let range = meta.showing_range();
        Self {
            data: paginate(items, pagination.page, pagination.page_size),
            pagination: meta,
            showing_from: range.map(|(first, _)| first),
            showing_to: range.map(|(_, last)| last),
            has_controls: meta.has_controls(),
        }
    }
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u32,
}

impl PaginationMeta {
    pub fn new(pagination: Pagination, total_items: usize) -> Self {
        Self {
            page: pagination.page,
            page_size: pagination.page_size,
            total_items: total_items as u64,
            total_pages: total_pages(total_items, pagination.page_size),
        }
    }

    /// 1-based `(first, last)` item numbers on the current page, for the
    /// "Showing X to Y of N" caption. `None` when the page is empty.
    pub fn showing_range(&self) -> Option<(u64, u64)> {
        if self.page == 0 || self.page > self.total_pages {
            return None;
        }
        let first = u64::from(self.page - 1) * u64::from(self.page_size) + 1;
        let last = (u64::from(self.page) * u64::from(self.page_size)).min(self.total_items);
        Some((first, last))
    }

    /// Page controls are only shown when there is more than one page
    pub fn has_controls(&self) -> bool {
        self.total_pages > 1
    }
}

/// `ceil(count / page_size)`; zero for an empty set or a zero page size
pub fn total_pages(count: usize, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = count.div_ceil(page_size as usize);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// The `page_size` slice starting at `(page - 1) * page_size`.
///
/// Empty when `page` is past the last page, or when either argument is zero.
pub fn paginate<T: Clone>(items: &[T], page: u32, page_size: u32) -> Vec<T> {
    if page == 0 || page_size == 0 {
        return Vec::new();
    }
    let start = (page as usize - 1).saturating_mul(page_size as usize);
    items
        .iter()
        .skip(start)
        .take(page_size as usize)
        .cloned()
        .collect()
}

/// Up to `width` consecutive page numbers centred on `current` where possible
pub fn page_window(current: u32, total_pages: u32, width: u32) -> Vec<u32> {
    if total_pages == 0 || width == 0 {
        return Vec::new();
    }
    let half = width / 2;
    let latest_start = total_pages.saturating_sub(width - 1).max(1);
    let start = current.saturating_sub(half).min(latest_start).max(1);
    let end = (start + width - 1).min(total_pages);
    (start..=end).collect()
}

/// Deserialize an optional value where an empty or blank string means absent
pub fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: u32) -> Vec<u32> {
        (1..=n).collect()
    }

    #[test]
    fn test_paginate_last_partial_page() {
        let list = items(25);
        assert_eq!(paginate(&list, 3, 10), vec![21, 22, 23, 24, 25]);
        assert_eq!(paginate(&list, 1, 10), items(10));
    }

    #[test]
    fn test_paginate_past_end_is_empty() {
        let list = items(25);
        assert!(paginate(&list, 4, 10).is_empty());
        assert!(paginate(&list, 0, 10).is_empty());
        assert!(paginate(&list, 1, 0).is_empty());
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(30, 10), 3);
        assert_eq!(total_pages(31, 10), 4);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_showing_range() {
        let meta = PaginationMeta::new(Pagination { page: 3, page_size: 10 }, 25);
        assert_eq!(meta.total_pages, 3);
        assert_eq!(meta.showing_range(), Some((21, 25)));
        assert!(meta.has_controls());

        let empty = PaginationMeta::new(Pagination::default(), 0);
        assert_eq!(empty.total_pages, 0);
        assert_eq!(empty.showing_range(), None);
        assert!(!empty.has_controls());
    }

    #[test]
    fn test_paginated_response_caption() {
        let page = PaginatedResponse::from_items(&items(25), Pagination { page: 3, page_size: 10 });
        assert_eq!(page.data, vec![21, 22, 23, 24, 25]);
        assert_eq!((page.showing_from, page.showing_to), (Some(21), Some(25)));
        assert!(page.has_controls);

        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["showingFrom"], 21);
        assert_eq!(json["hasControls"], true);

        let single = PaginatedResponse::from_items(&items(3), Pagination::default());
        assert_eq!((single.showing_from, single.showing_to), (Some(1), Some(3)));
        assert!(!single.has_controls);

        let past_end = PaginatedResponse::from_items(&items(3), Pagination { page: 2, page_size: 10 });
        assert!(past_end.data.is_empty());
        assert_eq!(past_end.showing_from, None);
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 3, 5), vec![1, 2, 3]);
        assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(6, 10, 5), vec![4, 5, 6, 7, 8]);
        assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
        assert!(page_window(1, 0, 5).is_empty());
    }

    #[test]
    fn test_pagination_defaults_when_fields_missing() {
        let p: Pagination = serde_json::from_str(r#"{"page": 2}"#).unwrap();
        assert_eq!(p, Pagination { page: 2, page_size: DEFAULT_PAGE_SIZE });
    }
}
