//! List query, text search and page slicing shared by every list endpoint

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PER_PAGE: usize = 10;

/// Search and pagination parameters
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Case-insensitive substring filter
    pub search: Option<String>,
    /// Page number (default: 1)
    pub page: Option<i64>,
    /// Items per page (default: 10)
    pub per_page: Option<i64>,
}

impl ListQuery {
    pub fn page(&self) -> usize {
        match self.page {
            Some(p) if p >= 1 => p as usize,
            _ => 1,
        }
    }

    pub fn per_page(&self) -> usize {
        match self.per_page {
            Some(p) if p > 0 => p as usize,
            _ => DEFAULT_PER_PAGE,
        }
    }

    /// Normalized search term
    pub fn term(&self) -> String {
        normalize_search(self.search.as_deref().unwrap_or_default())
    }
}

pub fn normalize_search(search: &str) -> String {
    search.trim().to_lowercase()
}

/// `term` must already be normalized. An empty term matches everything.
pub fn matches_search<S: AsRef<str>>(term: &str, values: &[S]) -> bool {
    if term.is_empty() {
        return true;
    }

    values
        .iter()
        .any(|value| value.as_ref().trim().to_lowercase().contains(term))
}

/// Slice `items` to the requested page. Out-of-range pages are empty.
pub fn paginate<T>(items: Vec<T>, query: &ListQuery) -> Vec<T> {
    let per_page = query.per_page();
    let start = (query.page() - 1).saturating_mul(per_page);

    if start >= items.len() {
        return Vec::new();
    }

    items.into_iter().skip(start).take(per_page).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl Pagination {
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = if total == 0 { 1 } else { total.div_ceil(per_page) };

        Self {
            page: page.max(1),
            per_page,
            total,
            total_pages,
        }
    }
}

/// Paginated response wrapper
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// Items on the requested page
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> PaginatedResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// Filter `items` with `matches`, then slice out the requested page
    pub fn search<F>(items: Vec<T>, query: &ListQuery, matches: F) -> Self
    where
        F: Fn(&str, &T) -> bool,
    {
        let term = query.term();
        let filtered: Vec<T> = items.into_iter().filter(|item| matches(&term, item)).collect();
        let total = filtered.len();

        Self {
            items: paginate(filtered, query),
            pagination: Pagination::new(query.page(), query.per_page(), total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<i64>, per_page: Option<i64>) -> ListQuery {
        ListQuery {
            search: None,
            page,
            per_page,
        }
    }

    #[test]
    fn test_defaults() {
        let q = query(None, None);
        assert_eq!(q.page(), 1);
        assert_eq!(q.per_page(), 10);

        let q = query(Some(0), Some(-5));
        assert_eq!(q.page(), 1);
        assert_eq!(q.per_page(), 10);
    }

    #[test]
    fn test_empty_total_has_one_page() {
        let items: Vec<i32> = paginate(Vec::new(), &query(Some(1), Some(10)));
        assert!(items.is_empty());
        assert_eq!(Pagination::new(1, 10, 0).total_pages, 1);
    }

    #[test]
    fn test_last_partial_page() {
        let items: Vec<i32> = (1..=25).collect();
        let page = paginate(items, &query(Some(3), Some(10)));
        assert_eq!(page, vec![21, 22, 23, 24, 25]);
        assert_eq!(Pagination::new(3, 10, 25).total_pages, 3);
    }

    #[test]
    fn test_page_beyond_range_is_empty() {
        let items: Vec<i32> = (1..=25).collect();
        assert!(paginate(items, &query(Some(4), Some(10))).is_empty());
    }

    #[test]
    fn test_matches_search() {
        let term = normalize_search("  ARRI ");
        assert_eq!(term, "arri");
        assert!(matches_search(&term, &["Camera", " Arri Alexa "]));
        assert!(!matches_search(&term, &["Camera", "Sony"]));
        assert!(matches_search("", &["anything"]));
        assert!(matches_search::<&str>("", &[]));
    }
}
