//! Paged list envelope.

use serde::{Deserialize, Serialize};

/// One page of results from a list endpoint.
///
/// `data` keeps the order the server returned. Every field is required, so a
/// body that is not an envelope fails to decode instead of becoming an empty
/// page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Entries on this page.
    pub data: Vec<T>,
    /// Total number of entries across all pages.
    pub total_entries: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// 1-based number of this page.
    pub page: u64,
}

impl<T> Page<T> {
    /// Number of entries on this page.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if this page has no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `true` if pages after this one exist.
    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }

    /// Returns the first entry, if any.
    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    /// Iterates over the entries on this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Card;

    #[test]
    fn test_deserialize_envelope() {
        let page: Page<Card> = serde_json::from_str(
            r#"{
                "data": [{"token": "a"}, {"token": "b"}],
                "total_entries": 5,
                "total_pages": 3,
                "page": 1
            }"#,
        )
        .unwrap();

        assert_eq!(page.len(), 2);
        assert_eq!(page.total_entries, 5);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next_page());
        let tokens: Vec<_> = page.iter().map(Card::token).collect();
        assert_eq!(tokens, vec!["a", "b"]);
    }

    #[test]
    fn test_last_page() {
        let page: Page<Card> =
            serde_json::from_str(r#"{"data": [], "total_entries": 0, "total_pages": 0, "page": 1}"#)
                .unwrap();
        assert!(page.is_empty());
        assert!(!page.has_next_page());
        assert!(page.first().is_none());
    }

    #[test]
    fn test_empty_object_rejected() {
        assert!(serde_json::from_str::<Page<Card>>("{}").is_err());
    }

    #[test]
    fn test_bare_card_rejected() {
        let result = serde_json::from_str::<Page<Card>>(r#"{"token": "abc", "memo": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_page_number_rejected() {
        let result = serde_json::from_str::<Page<Card>>(
            r#"{"data": [], "total_entries": 0, "total_pages": 0}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_counts_rejected() {
        let result = serde_json::from_str::<Page<Card>>(r#"{"total_entries": -1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_into_iter_keeps_order() {
        let page = Page {
            data: vec![3, 1, 2],
            total_entries: 3,
            total_pages: 1,
            page: 1,
        };
        assert_eq!(page.into_iter().collect::<Vec<_>>(), vec![3, 1, 2]);
    }
}
