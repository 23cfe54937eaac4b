//! The search, filter and sort pipeline.

use std::cmp::Reverse;

use super::{FilterKind, QueryConfig, SortDirection, SortField};
use crate::domain::User;

/// Produces the display list for `base` under `config`.
///
/// The pipeline runs strictly in this order:
///
/// 1. text search over `"first last"` and email,
/// 2. the structured filter,
/// 3. a stable sort on the effective sort key.
///
/// Matching and ordering are case-insensitive. The function is total: an
/// empty input yields an empty output and a filter value that makes no sense
/// simply matches nothing.
///
/// # Examples
/// ```
/// use user_directory::domain::{FilterKind, QueryConfig, User, query};
///
/// let users: Vec<User> = example_data::generate_example_users(24)
///     .expect("generated")
///     .into_iter()
///     .map(User::from)
///     .collect();
/// let config = QueryConfig {
///     filter_kind: FilterKind::Domain,
///     filter_value: "gmail.com".to_owned(),
///     ..QueryConfig::default()
/// };
///
/// let shown = query::apply(&users, &config);
/// assert!(shown.iter().all(|user| user.email.ends_with("@gmail.com")));
/// ```
pub fn apply(base: &[User], config: &QueryConfig) -> Vec<User> {
    let search = config.search_text.trim().to_lowercase();
    let filter = StructuredFilter::from_config(config);

    let mut shown: Vec<User> = base
        .iter()
        .filter(|user| matches_search(user, &search))
        .filter(|user| filter.matches(user))
        .cloned()
        .collect();

    let key = config.effective_sort_key();
    match config.sort_direction {
        SortDirection::Asc => shown.sort_by_cached_key(|user| sort_value(user, key)),
        SortDirection::Desc => shown.sort_by_cached_key(|user| Reverse(sort_value(user, key))),
    }
    shown
}

fn matches_search(user: &User, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    user.full_name().to_lowercase().contains(search) || user.email.to_lowercase().contains(search)
}

fn sort_value(user: &User, key: SortField) -> String {
    match key {
        SortField::FirstName => user.first_name.to_lowercase(),
        SortField::Email => user.email.to_lowercase(),
    }
}

/// Normalised form of the structured filter.
enum StructuredFilter {
    Pass,
    EmailDomain(String),
    FirstLetter(String),
}

impl StructuredFilter {
    fn from_config(config: &QueryConfig) -> Self {
        let value = config.filter_value.trim();
        if value.is_empty() {
            return Self::Pass;
        }
        match config.filter_kind {
            FilterKind::None => Self::Pass,
            FilterKind::Domain => Self::EmailDomain(format!("@{}", value.to_lowercase())),
            FilterKind::FirstLetter => value
                .chars()
                .next()
                .map_or(Self::Pass, |letter| {
                    Self::FirstLetter(letter.to_lowercase().collect())
                }),
        }
    }

    fn matches(&self, user: &User) -> bool {
        match self {
            Self::Pass => true,
            Self::EmailDomain(suffix) => user.email.to_lowercase().ends_with(suffix.as_str()),
            Self::FirstLetter(prefix) => user
                .first_name
                .to_lowercase()
                .starts_with(prefix.as_str()),
        }
    }
}
