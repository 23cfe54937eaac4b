//! Validated page size.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PaginationError;

/// Number of items per page; never zero.
///
/// # Examples
///
/// ```
/// use pagination::{PageSize, PaginationError};
///
/// assert_eq!(PageSize::new(6).map(PageSize::get), Ok(6));
/// assert_eq!(PageSize::new(0), Err(PaginationError::ZeroPageSize));
/// assert_eq!(PageSize::default().get(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    /// Page size used when nothing else has been configured.
    pub const DEFAULT: Self = Self(NonZeroUsize::MIN.saturating_add(5));

    /// Validates a raw page size.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::ZeroPageSize`] when `value` is zero.
    pub fn new(value: usize) -> Result<Self, PaginationError> {
        NonZeroUsize::new(value)
            .map(Self)
            .ok_or(PaginationError::ZeroPageSize)
    }

    /// Returns the size as a plain integer.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for PageSize {
    type Error = PaginationError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PageSize> for usize {
    fn from(value: PageSize) -> Self {
        value.get()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PageSize {
    type Err = PaginationError;

    /// Parses a decimal page size, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<usize>()
            .map_err(|_| PaginationError::InvalidPageSize {
                input: trimmed.to_owned(),
            })?;
        Self::new(value)
    }
}
