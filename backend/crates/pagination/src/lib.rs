//! Page-number pagination primitives for list endpoints.
//!
//! The crate exposes a coercing [`PageNumber`], a validated [`PageSize`], the
//! pure [`paginate`] window function, and the serialisable [`Page`] envelope
//! carrying one window plus the size of the full sequence.
//!
//! Pagination never fails: a page beyond the end of the sequence yields an
//! empty window, and callers decide whether an empty window means "not
//! found".
//!
//! # Example
//!
//! ```
//! use pagination::{PageNumber, PageSize, paginate};
//!
//! let items: Vec<u32> = (1..=12).collect();
//! let page = PageNumber::from_query(Some("2"));
//! let size = PageSize::new(10).expect("non-zero size");
//!
//! assert_eq!(paginate(page, &items, size), &[11, 12]);
//! ```

mod page;
mod params;

pub use page::{Page, paginate};
pub use params::{PageNumber, PageSize, PageSizeError};
