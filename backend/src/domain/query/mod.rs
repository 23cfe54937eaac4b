//! Query configuration and the filter/sort engine.
//!
//! [`QueryConfig`] captures everything the user can tweak about which
//! records are shown and in what order. [`apply`] turns a base list plus a
//! configuration into the display list.

mod engine;

pub use engine::apply;

use serde::{Deserialize, Serialize};

use super::keyword::keyword_enum;

keyword_enum! {
    /// User field the display list can be ordered by.
    pub enum SortField {
        /// Order by given name.
        FirstName => "first_name",
        /// Order by email address.
        Email => "email",
    }
}

keyword_enum! {
    /// Sort direction.
    pub enum SortDirection {
        /// Smallest first.
        Asc => "asc",
        /// Largest first.
        Desc => "desc",
    }
}

impl SortDirection {
    /// Returns the other direction.
    pub fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

keyword_enum! {
    /// Structured filter applied after text search.
    pub enum FilterKind {
        /// No structured filter.
        None => "none",
        /// Keep emails at the given domain.
        Domain => "domain",
        /// Keep first names starting with the given letter.
        FirstLetter => "first_letter",
    }
}

keyword_enum! {
    /// Whether the engine runs over the current page or the whole dataset.
    pub enum SearchScope {
        /// Only the currently fetched page.
        Page => "page",
        /// Every page of the dataset.
        Global => "global",
    }
}

/// Search, filter and sort settings for the display list.
///
/// # Examples
/// ```
/// use user_directory::domain::{QueryConfig, SortDirection, SortField};
///
/// let mut config = QueryConfig::default();
/// config.toggle_sort(SortField::Email);
/// assert_eq!(config.sort_key, Some(SortField::Email));
/// assert_eq!(config.sort_direction, SortDirection::Asc);
///
/// config.toggle_sort(SortField::Email);
/// assert_eq!(config.sort_direction, SortDirection::Desc);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryConfig {
    /// Free text matched against `"first last"` and email.
    pub search_text: String,
    /// Explicitly selected sort field, if any.
    pub sort_key: Option<SortField>,
    /// Direction applied to whichever sort field is in effect.
    pub sort_direction: SortDirection,
    /// Sort field used when `sort_key` is unset.
    pub sort_fallback: SortField,
    /// Structured filter kind.
    pub filter_kind: FilterKind,
    /// Operand of the structured filter.
    pub filter_value: String,
    /// Where the engine looks for records.
    pub search_scope: SearchScope,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            sort_key: None,
            sort_direction: SortDirection::Asc,
            sort_fallback: SortField::FirstName,
            filter_kind: FilterKind::None,
            filter_value: String::new(),
            search_scope: SearchScope::Page,
        }
    }
}

impl QueryConfig {
    /// The field the engine actually sorts by.
    pub fn effective_sort_key(&self) -> SortField {
        self.sort_key.unwrap_or(self.sort_fallback)
    }

    /// Selects `key` as the sort field.
    ///
    /// Reselecting the current key flips the direction; selecting a
    /// different key resets the direction to ascending.
    pub fn toggle_sort(&mut self, key: SortField) {
        if self.sort_key == Some(key) {
            self.sort_direction = self.sort_direction.reversed();
        } else {
            self.sort_key = Some(key);
            self.sort_direction = SortDirection::Asc;
        }
    }
}
