//! Page envelope and page arithmetic.

use serde::{Deserialize, Serialize};

use crate::PageSize;

/// Number of pages needed to show `total_count` items; at least one.
///
/// # Examples
///
/// ```
/// use pagination::{PageSize, total_pages};
///
/// let six = PageSize::new(6).expect("non-zero");
/// assert_eq!(total_pages(24, six), 4);
/// assert_eq!(total_pages(25, six), 5);
/// assert_eq!(total_pages(0, six), 1);
/// ```
#[must_use]
pub const fn total_pages(total_count: usize, page_size: PageSize) -> usize {
    let pages = total_count.div_ceil(page_size.get());
    if pages == 0 { 1 } else { pages }
}

/// Coerces `requested` into `[1, total_pages]`.
///
/// A `total_pages` of zero is treated as one.
///
/// # Examples
///
/// ```
/// use pagination::clamp_page;
///
/// assert_eq!(clamp_page(0, 4), 1);
/// assert_eq!(clamp_page(3, 4), 3);
/// assert_eq!(clamp_page(9, 4), 4);
/// ```
#[must_use]
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// One page of items plus the metadata needed to navigate the rest.
///
/// ## Invariants
/// - `1 <= page_number <= total_pages`
/// - `total_pages == max(1, ceil(total_count / page_size))`
/// - `items.len() <= page_size`
///
/// The fields are private so the invariants can only be established through
/// [`Page::slice`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    page_number: usize,
    page_size: PageSize,
    total_count: usize,
    total_pages: usize,
    items: Vec<T>,
}

impl<T: Clone> Page<T> {
    /// Cuts the page nearest to `requested_page` out of `dataset`.
    ///
    /// The requested page is clamped first, so an out-of-range request
    /// silently yields the first or last page rather than failing. Callers
    /// must read [`Page::page_number`] instead of assuming the request was
    /// honoured verbatim.
    #[must_use]
    pub fn slice(dataset: &[T], requested_page: usize, page_size: PageSize) -> Self {
        let total_count = dataset.len();
        let total_pages = total_pages(total_count, page_size);
        let page_number = clamp_page(requested_page, total_pages);
        let start = page_number.saturating_sub(1).saturating_mul(page_size.get());
        let items = dataset
            .iter()
            .skip(start)
            .take(page_size.get())
            .cloned()
            .collect();

        Self {
            page_number,
            page_size,
            total_count,
            total_pages,
            items,
        }
    }
}

impl<T> Page<T> {
    /// The 1-based page number actually served.
    #[must_use]
    pub const fn page_number(&self) -> usize {
        self.page_number
    }

    /// The page size the page was cut with.
    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Size of the whole dataset.
    #[must_use]
    pub const fn total_count(&self) -> usize {
        self.total_count
    }

    /// Number of pages in the dataset at this page size.
    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Items on this page, in dataset order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the page, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Returns `true` when a later page exists.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }

    /// Returns `true` when an earlier page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page_number > 1
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    fn size(value: usize) -> PageSize {
        PageSize::new(value).expect("non-zero page size")
    }

    #[fixture]
    fn dataset() -> Vec<u32> {
        (1..=24).collect()
    }

    #[rstest]
    #[case(24, 6, 4)]
    #[case(24, 10, 3)]
    #[case(24, 15, 2)]
    #[case(1, 6, 1)]
    #[case(0, 6, 1)]
    fn computes_total_pages(
        #[case] total_count: usize,
        #[case] page_size: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(total_pages(total_count, size(page_size)), expected);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(4, 4)]
    #[case(5, 4)]
    #[case(usize::MAX, 4)]
    fn slice_clamps_requested_page(
        dataset: Vec<u32>,
        #[case] requested: usize,
        #[case] expected: usize,
    ) {
        let page = Page::slice(&dataset, requested, size(6));

        assert_eq!(page.page_number(), expected);
        assert!(page.page_number() >= 1);
        assert!(page.page_number() <= page.total_pages());
    }

    #[rstest]
    fn slice_returns_contiguous_window(dataset: Vec<u32>) {
        let page = Page::slice(&dataset, 2, size(10));

        assert_eq!(page.items(), (11..=20).collect::<Vec<_>>().as_slice());
        assert_eq!(page.total_count(), 24);
        assert_eq!(page.total_pages(), 3);
    }

    #[rstest]
    fn last_page_may_be_short(dataset: Vec<u32>) {
        let page = Page::slice(&dataset, 3, size(10));

        assert_eq!(page.items(), &[21, 22, 23, 24]);
        assert!(!page.has_next());
        assert!(page.has_previous());
    }

    #[test]
    fn empty_dataset_yields_single_empty_page() {
        let page = Page::<u32>::slice(&[], 3, size(6));

        assert_eq!(page.page_number(), 1);
        assert_eq!(page.total_pages(), 1);
        assert!(page.items().is_empty());
    }

    #[rstest]
    fn serializes_metadata_in_camel_case(dataset: Vec<u32>) {
        let page = Page::slice(&dataset, 1, size(6));
        let json = serde_json::to_value(&page).expect("serialize");

        assert_eq!(json["pageNumber"], 1);
        assert_eq!(json["pageSize"], 6);
        assert_eq!(json["totalCount"], 24);
        assert_eq!(json["totalPages"], 4);
    }
}
