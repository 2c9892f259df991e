//! Request parameters controlling which window of a sequence is returned.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// One-based page number.
///
/// Page numbers are coerced rather than validated: anything that is not a
/// positive integer resolves to the first page so a malformed query string
/// never fails a request.
///
/// # Examples
///
/// ```
/// use pagination::PageNumber;
///
/// assert_eq!(PageNumber::from_query(None).get(), 1);
/// assert_eq!(PageNumber::from_query(Some("abc")).get(), 1);
/// assert_eq!(PageNumber::from_query(Some("0")).get(), 1);
/// assert_eq!(PageNumber::from_query(Some("3")).get(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u64", into = "u64")]
pub struct PageNumber(u64);

impl PageNumber {
    /// The first page.
    pub const FIRST: Self = Self(1);

    /// Build a page number, coercing zero to the first page.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        if value == 0 { Self::FIRST } else { Self(value) }
    }

    /// Coerce a raw query-string value into a page number.
    ///
    /// Absent, empty, non-numeric, zero, and negative values all resolve to
    /// the first page. Positive integers too large for `u64` saturate so the
    /// request still resolves to an (empty) page far beyond the data.
    #[must_use]
    pub fn from_query(raw: Option<&str>) -> Self {
        let Some(trimmed) = raw.map(str::trim) else {
            return Self::FIRST;
        };
        match trimmed.parse::<u64>() {
            Ok(value) => Self::new(value),
            Err(_) if is_unsigned_digits(trimmed) => Self(u64::MAX),
            Err(_) => Self::FIRST,
        }
    }

    /// Return the one-based page number.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Number of items preceding this page for the given page size.
    ///
    /// Saturates at `usize::MAX` instead of overflowing.
    #[must_use]
    pub fn offset(self, size: PageSize) -> usize {
        let preceding_pages = usize::try_from(self.0.saturating_sub(1)).unwrap_or(usize::MAX);
        preceding_pages.saturating_mul(size.get())
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl From<u64> for PageNumber {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<PageNumber> for u64 {
    fn from(value: PageNumber) -> Self {
        value.0
    }
}

fn is_unsigned_digits(value: &str) -> bool {
    let digits = value.strip_prefix('+').unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|byte| byte.is_ascii_digit())
}

/// Error returned when constructing a [`PageSize`] of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("page size must be greater than zero")]
pub struct PageSizeError;

/// Maximum number of items in one page.
///
/// # Examples
///
/// ```
/// use pagination::PageSize;
///
/// assert_eq!(PageSize::new(10).map(PageSize::get), Ok(10));
/// assert!(PageSize::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Build a page size.
    ///
    /// # Errors
    ///
    /// Returns [`PageSizeError`] when `value` is zero.
    pub const fn new(value: usize) -> Result<Self, PageSizeError> {
        match NonZeroUsize::new(value) {
            Some(size) => Ok(Self(size)),
            None => Err(PageSizeError),
        }
    }

    /// Return the page size.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}
