//! Domain primitives, services and ports for the user directory.
//!
//! Purpose: define the user model, the query engine and the pagination
//! controller independently of any storage or presentation layer.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — domain error payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - User / UserId — directory records.
//! - QueryConfig and its keyword enums — search, filter and sort settings.
//! - DirectoryController — paging, querying and persistence.
//! - ThemeService — the dark-mode flag.

pub mod error;
mod keyword;
pub mod ports;
pub mod preferences;
pub mod query;
mod theme;
pub mod user;

mod directory_controller;

pub use self::directory_controller::{DirectoryController, FetchOutcome, LoadState};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::keyword::ParseKeywordError;
pub use self::preferences::{DirectoryPreferences, DisplayMode, keys};
pub use self::query::{FilterKind, QueryConfig, SearchScope, SortDirection, SortField};
pub use self::theme::ThemeService;
pub use self::user::{User, UserId};

/// Convenient domain result alias.
///
/// # Examples
/// ```
/// use user_directory::domain::{DomainResult, Error};
///
/// fn lookup() -> DomainResult<u32> {
///     Err(Error::not_found("user 999 not found"))
/// }
///
/// assert!(lookup().is_err());
/// ```
pub type DomainResult<T> = Result<T, Error>;
