//! Transaction query engine
//!
//! A pure filter -> sort -> paginate pipeline over an in-memory dataset.
//! Deterministic: identical inputs always produce identical output, which the
//! caller-side caching layers rely on.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::transaction::{Transaction, TransactionStatus};

/// Filter predicate set for a transaction query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionFilters {
    /// Case-insensitive substring match against concept or merchant
    pub search: Option<String>,
    pub status: StatusFilter,
    /// Inclusive lower bound on the transaction date
    pub date_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the transaction date
    pub date_to: Option<DateTime<Utc>>,
}

impl TransactionFilters {
    fn matches(&self, tx: &Transaction) -> bool {
        if let Some(search) = self.search.as_deref() {
            let needle = search.to_lowercase();
            if !needle.is_empty()
                && !tx.concept.to_lowercase().contains(&needle)
                && !tx.merchant.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        if let StatusFilter::Only(status) = self.status {
            if tx.status != status {
                return false;
            }
        }
        if let Some(from) = self.date_from {
            if tx.date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if tx.date > to {
                return false;
            }
        }
        true
    }
}

/// Status filter; `All` is equivalent to no status filter at all
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TransactionStatus),
}

impl std::str::FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(StatusFilter::All)
        } else {
            s.parse().map(StatusFilter::Only)
        }
    }
}

/// Field to sort by
///
/// `Amount` compares the signed value, not the absolute magnitude: ascending
/// order puts the largest debit first and the largest credit last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Date,
    Amount,
}

impl std::str::FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "date" => Ok(SortField::Date),
            "amount" => Ok(SortField::Amount),
            other => Err(format!("unknown sort field: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl std::str::FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("unknown sort direction: {}", other)),
        }
    }
}

/// Sort key and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionSort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for TransactionSort {
    fn default() -> Self {
        Self {
            field: SortField::Date,
            direction: SortDirection::Desc,
        }
    }
}

/// A complete query: pagination state, filters, and sort
///
/// Owned by the UI layer and passed by value into the engine on every query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionQuery {
    pub page: usize,
    pub page_size: usize,
    pub filters: TransactionFilters,
    pub sort: TransactionSort,
}

pub const DEFAULT_PAGE_SIZE: usize = 10;

impl Default for TransactionQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            filters: TransactionFilters::default(),
            sort: TransactionSort::default(),
        }
    }
}

impl TransactionQuery {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page,
            page_size,
            ..Self::default()
        }
    }

    /// Run the query against a dataset
    ///
    /// Total: a page past the end yields an empty slice, and degenerate
    /// `page`/`page_size` values are clamped to 1 rather than rejected.
    pub fn run(&self, dataset: &[Transaction]) -> Paginated<Transaction> {
        let page = self.page.max(1);
        let page_size = self.page_size.max(1);

        // 1. Filter
        let mut rows: Vec<&Transaction> =
            dataset.iter().filter(|tx| self.filters.matches(tx)).collect();

        // 2. Sort (stable: equal keys keep their dataset order, which makes
        // pagination deterministic)
        match (self.sort.field, self.sort.direction) {
            (SortField::Date, SortDirection::Asc) => rows.sort_by(|a, b| a.date.cmp(&b.date)),
            (SortField::Date, SortDirection::Desc) => rows.sort_by(|a, b| b.date.cmp(&a.date)),
            (SortField::Amount, SortDirection::Asc) => {
                rows.sort_by(|a, b| a.amount.cmp(&b.amount))
            }
            (SortField::Amount, SortDirection::Desc) => {
                rows.sort_by(|a, b| b.amount.cmp(&a.amount))
            }
        }

        // 3. Paginate
        let total = rows.len();
        let total_pages = total.div_ceil(page_size);
        let start = (page - 1).saturating_mul(page_size).min(total);
        let end = start.saturating_add(page_size).min(total);
        let data = rows[start..end].iter().map(|tx| (*tx).clone()).collect();

        Paginated {
            data,
            total,
            page,
            page_size,
            total_pages,
        }
    }
}

/// One page of query results plus totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal::Decimal;

    fn tx(id: &str, day: u32, cents: i64, status: TransactionStatus) -> Transaction {
        Transaction {
            id: id.to_string(),
            date: Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
            concept: format!("Concept {}", id),
            amount: Decimal::new(cents, 2),
            status,
            merchant: format!("Merchant {}", id),
            category: "General".to_string(),
        }
    }

    fn dataset() -> Vec<Transaction> {
        vec![
            tx("a", 5, -1500, TransactionStatus::Confirmed),
            tx("b", 3, 2500, TransactionStatus::Pending),
            tx("c", 9, -4200, TransactionStatus::Failed),
            tx("d", 3, 800, TransactionStatus::Confirmed),
            tx("e", 7, -50, TransactionStatus::Confirmed),
        ]
    }

    fn ids(result: &Paginated<Transaction>) -> Vec<&str> {
        result.data.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        let data = dataset();
        let result = TransactionQuery::new(1, 2).run(&data);
        assert_eq!(result.total, 5);
        assert_eq!(result.total_pages, 3);
        assert!(result.data.len() <= 2);
    }

    #[test]
    fn test_empty_dataset_has_zero_pages() {
        let result = TransactionQuery::new(1, 10).run(&[]);
        assert_eq!(result.total, 0);
        assert_eq!(result.total_pages, 0);
        assert!(result.data.is_empty());
    }

    #[test]
    fn test_page_past_the_end_is_empty_not_an_error() {
        let data = dataset();
        let result = TransactionQuery::new(99, 2).run(&data);
        assert!(result.data.is_empty());
        assert_eq!(result.total, 5);
        assert_eq!(result.page, 99);
    }

    #[test]
    fn test_degenerate_page_and_size_are_clamped() {
        let data = dataset();
        let result = TransactionQuery::new(0, 0).run(&data);
        assert_eq!(result.page, 1);
        assert_eq!(result.page_size, 1);
        assert_eq!(result.data.len(), 1);
    }

    #[test]
    fn test_date_sort_directions_are_reverses() {
        let data = dataset();
        let mut asc = TransactionQuery::new(1, 10);
        asc.sort = TransactionSort {
            field: SortField::Date,
            direction: SortDirection::Asc,
        };
        let mut desc = asc.clone();
        desc.sort.direction = SortDirection::Desc;

        // b and d share a date; the tie must keep dataset order (b before d)
        // in both directions, so only the distinct-date spans reverse.
        assert_eq!(ids(&asc.run(&data)), vec!["b", "d", "a", "e", "c"]);
        assert_eq!(ids(&desc.run(&data)), vec!["c", "e", "a", "b", "d"]);
    }

    #[test]
    fn test_amount_sorts_by_signed_value() {
        let data = dataset();
        let mut query = TransactionQuery::new(1, 10);
        query.sort = TransactionSort {
            field: SortField::Amount,
            direction: SortDirection::Asc,
        };
        // Largest debit first, largest credit last; -42.00 < -15.00 < -0.50 < 8.00 < 25.00
        assert_eq!(ids(&query.run(&data)), vec!["c", "a", "e", "d", "b"]);
    }

    #[test]
    fn test_status_all_equals_no_status_filter() {
        let data = dataset();
        let mut explicit = TransactionQuery::new(1, 10);
        explicit.filters.status = StatusFilter::All;
        let default = TransactionQuery::new(1, 10);

        assert_eq!(explicit.run(&data), default.run(&data));
    }

    #[test]
    fn test_status_filter_counts_exact_matches() {
        let data = dataset();
        for page_size in [1, 2, 10] {
            let mut query = TransactionQuery::new(1, page_size);
            query.filters.status = StatusFilter::Only(TransactionStatus::Confirmed);
            let result = query.run(&data);
            assert_eq!(result.total, 3);
        }
    }

    #[test]
    fn test_search_is_case_insensitive_over_concept_and_merchant() {
        let data = dataset();
        let mut query = TransactionQuery::new(1, 10);
        query.filters.search = Some("CONCEPT A".to_string());
        assert_eq!(ids(&query.run(&data)), vec!["a"]);

        query.filters.search = Some("merchant c".to_string());
        assert_eq!(ids(&query.run(&data)), vec!["c"]);

        query.filters.search = Some("no such thing".to_string());
        assert_eq!(query.run(&data).total, 0);
    }

    #[test]
    fn test_date_range_bounds_are_inclusive() {
        let data = dataset();
        let mut query = TransactionQuery::new(1, 10);
        query.filters.date_from = Some(Utc.with_ymd_and_hms(2024, 3, 3, 12, 0, 0).unwrap());
        query.filters.date_to = Some(Utc.with_ymd_and_hms(2024, 3, 7, 12, 0, 0).unwrap());
        let result = query.run(&data);
        // 3rd and 7th land exactly on the bounds and are kept; the 9th is out
        assert_eq!(ids(&result), vec!["e", "a", "b", "d"]);
    }

    #[test]
    fn test_identical_inputs_give_identical_results() {
        let data = dataset();
        let mut query = TransactionQuery::new(2, 2);
        query.filters.search = Some("concept".to_string());
        assert_eq!(query.run(&data), query.run(&data));
    }

    #[test]
    fn test_status_filter_parses() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "pending".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(TransactionStatus::Pending)
        );
        assert!("bogus".parse::<StatusFilter>().is_err());
    }
}
