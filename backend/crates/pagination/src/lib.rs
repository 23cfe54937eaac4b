//! Page envelope and page-number clamping primitives.
//!
//! Every paged read in the user directory goes through the helpers here so
//! that the data source and its callers agree on the arithmetic:
//!
//! - [`total_pages`] is `max(1, ceil(total_count / page_size))`.
//! - [`clamp_page`] coerces any requested page into `[1, total_pages]`.
//! - [`Page::slice`] cuts the contiguous window for a clamped page.
//!
//! # Example
//!
//! ```
//! use pagination::{Page, PageSize};
//!
//! let dataset: Vec<u32> = (1..=24).collect();
//! let size = PageSize::new(6).expect("non-zero");
//!
//! let page = Page::slice(&dataset, 5, size);
//! assert_eq!(page.page_number(), 4);
//! assert_eq!(page.total_pages(), 4);
//! assert_eq!(page.items(), &[19, 20, 21, 22, 23, 24]);
//! ```

mod error;
mod page;
mod size;

pub use error::PaginationError;
pub use page::{Page, clamp_page, total_pages};
pub use size::PageSize;
