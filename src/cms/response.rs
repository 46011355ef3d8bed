//! The paginated list envelope every collection endpoint returns.

use serde::Deserialize;

/// A page of documents plus the pagination bookkeeping Payload sends
/// alongside it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    /// The documents on this page, in requested sort order.
    pub docs: Vec<T>,

    #[serde(default)]
    pub total_docs: u64,

    #[serde(default)]
    pub total_pages: u64,

    #[serde(default)]
    pub page: u64,

    #[serde(default)]
    pub paging_counter: u64,

    #[serde(default)]
    pub has_prev_page: bool,

    #[serde(default)]
    pub has_next_page: bool,

    #[serde(default)]
    pub prev_page: Option<u64>,

    #[serde(default)]
    pub next_page: Option<u64>,
}

impl<T> Paginated<T> {
    /// Take the first document, for queries expected to match at most one.
    pub fn into_first(self) -> Option<T> {
        self.docs.into_iter().next()
    }

    /// Number of documents on this page.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Whether this page holds no documents.
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}
