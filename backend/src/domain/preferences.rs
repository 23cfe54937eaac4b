//! Directory preferences and their key-value representation.
//!
//! [`DirectoryPreferences`] is the aggregate the controller persists after
//! every mutation. It maps onto flat string entries so any key-value store
//! can hold it. Missing or unparseable entries fall back to defaults.

use std::str::FromStr;

use pagination::PageSize;
use serde::{Deserialize, Serialize};

use super::keyword::keyword_enum;
use super::ports::SettingsEntries;
use super::{FilterKind, QueryConfig, SearchScope, SortDirection, SortField};

/// Store keys used by the directory.
pub mod keys {
    /// Items per page.
    pub const PAGE_SIZE: &str = "page_size";
    /// Free-text search.
    pub const SEARCH_TEXT: &str = "search_text";
    /// Selected sort field; empty when none is selected.
    pub const SORT_KEY: &str = "sort_key";
    /// Sort direction.
    pub const SORT_DIRECTION: &str = "sort_direction";
    /// Structured filter kind.
    pub const FILTER_KIND: &str = "filter_kind";
    /// Structured filter operand.
    pub const FILTER_VALUE: &str = "filter_value";
    /// Table or card layout.
    pub const DISPLAY_MODE: &str = "display_mode";
    /// Compact row flag.
    pub const COMPACT: &str = "compact";
    /// Page or global search scope.
    pub const SEARCH_SCOPE: &str = "search_scope";
    /// Sort field used when none is selected.
    pub const SORT_FALLBACK: &str = "sort_fallback";
    /// Dark theme flag, owned by the theme service.
    pub const DARK_MODE: &str = "dark_mode";
}

keyword_enum! {
    /// Layout used by the presentation layer.
    pub enum DisplayMode {
        /// One row per user.
        Table => "table",
        /// One card per user.
        Card => "card",
    }
}

impl Default for DisplayMode {
    fn default() -> Self {
        Self::Table
    }
}

/// Everything the directory remembers between sessions, apart from theme.
///
/// # Examples
/// ```
/// use user_directory::domain::{DirectoryPreferences, SearchScope};
///
/// let prefs = DirectoryPreferences::default();
/// assert_eq!(prefs.page_size.get(), 6);
/// assert_eq!(prefs.query.search_scope, SearchScope::Page);
///
/// let entries = prefs.to_entries();
/// assert_eq!(DirectoryPreferences::from_entries(&entries), prefs);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryPreferences {
    /// Items per page.
    pub page_size: PageSize,
    /// Search, filter and sort settings.
    pub query: QueryConfig,
    /// Table or card layout.
    pub display_mode: DisplayMode,
    /// Whether rows are rendered compactly.
    pub compact: bool,
}

impl DirectoryPreferences {
    /// Rebuilds preferences from stored entries, defaulting anything absent
    /// or malformed.
    pub fn from_entries(entries: &SettingsEntries) -> Self {
        let defaults = Self::default();
        let query = QueryConfig {
            search_text: entries
                .get(keys::SEARCH_TEXT)
                .map(str::to_owned)
                .unwrap_or(defaults.query.search_text),
            sort_key: entries
                .get(keys::SORT_KEY)
                .and_then(|raw| raw.parse::<SortField>().ok()),
            sort_direction: parse_or(
                entries,
                keys::SORT_DIRECTION,
                defaults.query.sort_direction,
            ),
            sort_fallback: parse_or(entries, keys::SORT_FALLBACK, defaults.query.sort_fallback),
            filter_kind: parse_or(entries, keys::FILTER_KIND, defaults.query.filter_kind),
            filter_value: entries
                .get(keys::FILTER_VALUE)
                .map(str::to_owned)
                .unwrap_or(defaults.query.filter_value),
            search_scope: parse_or(entries, keys::SEARCH_SCOPE, defaults.query.search_scope),
        };

        Self {
            page_size: parse_or(entries, keys::PAGE_SIZE, defaults.page_size),
            query,
            display_mode: parse_or(entries, keys::DISPLAY_MODE, defaults.display_mode),
            compact: parse_or(entries, keys::COMPACT, defaults.compact),
        }
    }

    /// Flattens preferences into store entries.
    pub fn to_entries(&self) -> SettingsEntries {
        let mut entries = SettingsEntries::default();
        entries.insert(keys::PAGE_SIZE, self.page_size.to_string());
        entries.insert(keys::SEARCH_TEXT, self.query.search_text.clone());
        entries.insert(
            keys::SORT_KEY,
            self.query
                .sort_key
                .map(|key| key.as_str().to_owned())
                .unwrap_or_default(),
        );
        entries.insert(keys::SORT_DIRECTION, self.query.sort_direction.to_string());
        entries.insert(keys::FILTER_KIND, self.query.filter_kind.to_string());
        entries.insert(keys::FILTER_VALUE, self.query.filter_value.clone());
        entries.insert(keys::DISPLAY_MODE, self.display_mode.to_string());
        entries.insert(keys::COMPACT, self.compact.to_string());
        entries.insert(keys::SEARCH_SCOPE, self.query.search_scope.to_string());
        entries.insert(keys::SORT_FALLBACK, self.query.sort_fallback.to_string());
        entries
    }
}

fn parse_or<T: FromStr>(entries: &SettingsEntries, key: &str, default: T) -> T {
    entries
        .get(key)
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}
