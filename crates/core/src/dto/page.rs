//! Pagination envelope.

use serde::{Deserialize, Serialize};

/// One page of a paginated listing.
///
/// The backend emits more envelope fields than these (sort metadata and
/// so on); only the ones clients consume are mapped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page.
    pub content: Vec<T>,
    /// Total items across all pages.
    pub total_elements: i64,
    /// Total number of pages.
    pub total_pages: i64,
    /// Requested page size.
    pub size: i64,
    /// Zero-based index of this page.
    pub number: i64,
}

impl<T> Page<T> {
    /// Whether this page carries no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Whether a later page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.number + 1 < self.total_pages
    }
}
