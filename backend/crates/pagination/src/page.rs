//! Window selection over ordered sequences and the page envelope.

use serde::Serialize;

use crate::params::{PageNumber, PageSize};

/// Return the window `[(page - 1) * size, page * size)` of `items`.
///
/// The window is intersected with the valid index range of `items`, so a
/// page past the end yields an empty slice. Ordering is preserved and at most
/// `size` items are returned.
///
/// # Examples
///
/// ```
/// use pagination::{PageNumber, PageSize, paginate};
///
/// let items = ["a", "b", "c"];
/// let size = PageSize::new(2).expect("non-zero size");
///
/// assert_eq!(paginate(PageNumber::new(1), &items, size), &["a", "b"]);
/// assert_eq!(paginate(PageNumber::new(2), &items, size), &["c"]);
/// assert!(paginate(PageNumber::new(3), &items, size).is_empty());
/// ```
#[must_use]
pub fn paginate<T>(page: PageNumber, items: &[T], size: PageSize) -> &[T] {
    let len = items.len();
    let start = page.offset(size).min(len);
    let end = start.saturating_add(size.get()).min(len);
    items.get(start..end).unwrap_or_default()
}

/// One page of results alongside the size of the full sequence.
///
/// # Examples
///
/// ```
/// use pagination::{Page, PageNumber, PageSize};
///
/// let items: Vec<u32> = (1..=12).collect();
/// let size = PageSize::new(10).expect("non-zero size");
/// let page = Page::from_slice(PageNumber::new(2), &items, size);
///
/// assert_eq!(page.items(), &[11, 12]);
/// assert_eq!(page.total(), 12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    number: PageNumber,
    items: Vec<T>,
    total: usize,
}

impl<T: Clone> Page<T> {
    /// Copy the requested window of `items` into a page.
    #[must_use]
    pub fn from_slice(number: PageNumber, items: &[T], size: PageSize) -> Self {
        Self {
            number,
            items: paginate(number, items, size).to_vec(),
            total: items.len(),
        }
    }
}

impl<T> Page<T> {
    /// Page number this window was computed for.
    #[must_use]
    pub const fn number(&self) -> PageNumber {
        self.number
    }

    /// Items in this page, in their original order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items in the full sequence.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Whether this page holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the page, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    //! Window arithmetic and envelope behaviour.
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn twelve() -> Vec<u32> {
        (1..=12).collect()
    }

    #[fixture]
    fn ten() -> PageSize {
        PageSize::new(10).expect("non-zero size")
    }

    #[rstest]
    fn first_page_returns_leading_items(twelve: Vec<u32>, ten: PageSize) {
        let expected: Vec<u32> = (1..=10).collect();
        assert_eq!(paginate(PageNumber::FIRST, &twelve, ten), expected.as_slice());
    }

    #[rstest]
    fn second_page_returns_remainder(twelve: Vec<u32>, ten: PageSize) {
        assert_eq!(paginate(PageNumber::new(2), &twelve, ten), &[11, 12]);
    }

    #[rstest]
    #[case(3)]
    #[case(4)]
    #[case(u64::MAX)]
    fn pages_past_the_end_are_empty(twelve: Vec<u32>, ten: PageSize, #[case] page: u64) {
        assert!(paginate(PageNumber::new(page), &twelve, ten).is_empty());
    }

    #[rstest]
    fn short_sequence_fits_on_first_page(ten: PageSize) {
        let items = [4, 5, 6];
        assert_eq!(paginate(PageNumber::FIRST, &items, ten), &[4, 5, 6]);
    }

    #[rstest]
    fn empty_sequence_yields_empty_first_page(ten: PageSize) {
        let items: [u32; 0] = [];
        assert!(paginate(PageNumber::FIRST, &items, ten).is_empty());
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(7)]
    fn windows_never_exceed_size_or_reorder(twelve: Vec<u32>, #[case] size: usize) {
        let size = PageSize::new(size).expect("non-zero size");
        let mut rebuilt = Vec::new();
        for number in 1..=12 {
            let window = paginate(PageNumber::new(number), &twelve, size);
            assert!(window.len() <= size.get());
            rebuilt.extend_from_slice(window);
        }
        assert_eq!(rebuilt, twelve);
    }

    #[rstest]
    fn page_envelope_reports_total_and_items(twelve: Vec<u32>, ten: PageSize) {
        let page = Page::from_slice(PageNumber::new(2), &twelve, ten);
        assert_eq!(page.items(), &[11, 12]);
        assert_eq!(page.total(), 12);
        assert_eq!(page.number(), PageNumber::new(2));
        assert!(!page.is_empty());
    }
}
