//! Filters for the list and get endpoints.

use chrono::NaiveDate;

/// Page size the API uses when none is given.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// First page number.
pub const DEFAULT_PAGE: u32 = 1;

/// Query filters for listing cards.
///
/// `page_size` and `page` are always sent; the other filters only when set.
/// Nothing is validated locally: the server rejects out-of-range page sizes
/// or malformed account tokens.
///
/// ## Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use privacy_lib::CardListParams;
///
/// let params = CardListParams::new()
///     .begin(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
///     .page_size(10);
///
/// let pairs = params.query_pairs();
/// assert_eq!(pairs[0], ("begin", "2024-01-01".to_string()));
/// assert_eq!(pairs.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardListParams {
    /// Only return cards belonging to this account (UUID v4).
    pub account_token: Option<String>,
    /// Cards created on or after this date.
    pub begin: Option<NaiveDate>,
    /// Cards created before this date; cards created on it are excluded.
    pub end: Option<NaiveDate>,
    /// Entries per page, 1–1000 on the server side.
    pub page_size: u32,
    /// 1-based page number.
    pub page: u32,
}

impl Default for CardListParams {
    fn default() -> Self {
        Self {
            account_token: None,
            begin: None,
            end: None,
            page_size: DEFAULT_PAGE_SIZE,
            page: DEFAULT_PAGE,
        }
    }
}

impl CardListParams {
    /// Creates filters with default paging and no other constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts results to one account.
    pub fn account_token(mut self, token: impl Into<String>) -> Self {
        self.account_token = Some(token.into());
        self
    }

    /// Sets the inclusive lower bound on creation date.
    pub fn begin(mut self, date: NaiveDate) -> Self {
        self.begin = Some(date);
        self
    }

    /// Sets the exclusive upper bound on creation date.
    pub fn end(mut self, date: NaiveDate) -> Self {
        self.end = Some(date);
        self
    }

    /// Sets the page size.
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the page number.
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Returns the query pairs in wire order:
    /// `account_token`, `begin`, `end`, `page_size`, `page`.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(5);
        if let Some(token) = &self.account_token {
            pairs.push(("account_token", token.clone()));
        }
        if let Some(begin) = self.begin {
            pairs.push(("begin", begin.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end {
            pairs.push(("end", end.format("%Y-%m-%d").to_string()));
        }
        pairs.push(("page_size", self.page_size.to_string()));
        pairs.push(("page", self.page.to_string()));
        pairs
    }
}
