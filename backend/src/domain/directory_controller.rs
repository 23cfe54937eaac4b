//! Pagination controller for the user directory.
//!
//! [`DirectoryController`] owns the navigation state, the persisted
//! [`DirectoryPreferences`] and the last data fetched from a
//! [`UserPageSource`]. It produces the display list by running the query
//! engine over either the current page or the aggregated dataset.
//!
//! Page loads and aggregation each take request tokens from their own
//! monotonic counter. When a response arrives after a newer request of the
//! same kind has started it is dropped and the caller receives
//! [`FetchOutcome::Superseded`], so a slow response can never overwrite a
//! newer one. Navigation never cancels aggregation: the two write disjoint
//! state. State lives behind a mutex that is only held between suspension
//! points.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use pagination::{Page, PageSize, clamp_page};
use tracing::{debug, info, warn};

use super::ports::{ConfigStore, UserPageSource, UserPageSourceError};
use super::{
    DirectoryPreferences, DisplayMode, Error, FilterKind, QueryConfig, SearchScope, SortField,
    User, UserId, query,
};

const STATUS_FETCHING: &str = "Fetching users…";
const STATUS_LOADED: &str = "Loaded";
const STATUS_FETCH_FAILED: &str = "Failed to fetch users";
const STATUS_FETCHING_ALL: &str = "Fetching all pages…";
const STATUS_ALL_LOADED: &str = "All pages loaded";
const STATUS_FETCH_ALL_FAILED: &str = "Error fetching all pages";

/// Progress of the most recent request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No request in flight; the last one succeeded or none was made.
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The last request failed. Stays until the next request starts.
    Failed,
}

/// Result of a fetch that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response was applied to the controller state.
    Applied,
    /// A newer request started first; the response was discarded.
    Superseded,
}

#[derive(Debug, Default)]
struct ControllerState {
    preferences: DirectoryPreferences,
    page_number: usize,
    total_pages: usize,
    total_count: usize,
    current_page: Option<Page<User>>,
    all_users: Option<Vec<User>>,
    load_state: LoadState,
    status: String,
}

impl ControllerState {
    fn with_preferences(preferences: DirectoryPreferences) -> Self {
        Self {
            preferences,
            page_number: 1,
            total_pages: 1,
            ..Self::default()
        }
    }

    fn page_items(&self) -> &[User] {
        self.current_page.as_ref().map_or(&[] as &[User], Page::items)
    }
}

/// Coordinates paging, querying and persistence for the user directory.
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// use user_directory::domain::DirectoryController;
/// use user_directory::outbound::config_store::InMemoryConfigStore;
/// use user_directory::outbound::{LatencyProfile, SimulatedUserSource};
///
/// # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
/// let source = SimulatedUserSource::generate(24, LatencyProfile::fixed(Duration::ZERO)).unwrap();
/// let store = InMemoryConfigStore::default();
/// let controller = DirectoryController::new(Arc::new(source), Arc::new(store)).await;
///
/// controller.start().await.unwrap();
/// assert_eq!(controller.total_pages(), 4);
/// assert_eq!(controller.display_list().len(), 6);
/// # });
/// ```
pub struct DirectoryController<S, C> {
    source: Arc<S>,
    store: Arc<C>,
    state: Mutex<ControllerState>,
    page_requests: AtomicU64,
    aggregate_requests: AtomicU64,
}

impl<S, C> DirectoryController<S, C> {
    fn lock(&self) -> MutexGuard<'_, ControllerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn update<R>(&self, mutate: impl FnOnce(&mut ControllerState) -> R) -> R {
        mutate(&mut self.lock())
    }

    /// Current 1-based page number.
    pub fn page_number(&self) -> usize {
        self.lock().page_number
    }

    /// Total pages reported by the last fetch.
    pub fn total_pages(&self) -> usize {
        self.lock().total_pages
    }

    /// Total records reported by the last fetch.
    pub fn total_count(&self) -> usize {
        self.lock().total_count
    }

    /// Items per page.
    pub fn page_size(&self) -> PageSize {
        self.lock().preferences.page_size
    }

    /// Snapshot of the query configuration.
    pub fn query(&self) -> QueryConfig {
        self.lock().preferences.query.clone()
    }

    /// Snapshot of every persisted preference.
    pub fn preferences(&self) -> DirectoryPreferences {
        self.lock().preferences.clone()
    }

    /// Progress of the most recent request.
    pub fn load_state(&self) -> LoadState {
        self.lock().load_state
    }

    /// Human-readable status of the most recent request.
    pub fn status_message(&self) -> String {
        self.lock().status.clone()
    }

    /// The last successfully fetched page, if any.
    pub fn current_page(&self) -> Option<Page<User>> {
        self.lock().current_page.clone()
    }

    /// Number of records in the aggregated dataset, once loaded.
    pub fn aggregated_count(&self) -> Option<usize> {
        self.lock().all_users.as_ref().map(Vec::len)
    }

    /// Records to show, after search, filter and sort.
    ///
    /// Global scope runs over the aggregated dataset, falling back to the
    /// current page until aggregation has completed.
    pub fn display_list(&self) -> Vec<User> {
        let state = self.lock();
        let config = &state.preferences.query;
        let base = match config.search_scope {
            SearchScope::Global => state
                .all_users
                .as_deref()
                .unwrap_or_else(|| state.page_items()),
            SearchScope::Page => state.page_items(),
        };
        query::apply(base, config)
    }

    fn begin_request(&self, counter: &AtomicU64, status: &str) -> u64 {
        let mut state = self.lock();
        let token = counter.fetch_add(1, Ordering::SeqCst) + 1;
        state.load_state = LoadState::Loading;
        status.clone_into(&mut state.status);
        token
    }

    fn is_latest(counter: &AtomicU64, token: u64) -> bool {
        counter.load(Ordering::SeqCst) == token
    }
}

impl<S, C> DirectoryController<S, C>
where
    S: UserPageSource,
    C: ConfigStore,
{
    /// Create a controller, restoring preferences from `store`.
    ///
    /// An unreadable store is logged and treated as empty.
    pub async fn new(source: Arc<S>, store: Arc<C>) -> Self {
        let preferences = match store.load().await {
            Ok(entries) => DirectoryPreferences::from_entries(&entries),
            Err(error) => {
                warn!(%error, "failed to read directory settings; using defaults");
                DirectoryPreferences::default()
            }
        };
        Self {
            source,
            store,
            state: Mutex::new(ControllerState::with_preferences(preferences)),
            page_requests: AtomicU64::new(0),
            aggregate_requests: AtomicU64::new(0),
        }
    }

    /// Load the first page and, for a persisted global scope, every page.
    ///
    /// # Errors
    ///
    /// Returns an `Unavailable` error when the source fails.
    pub async fn start(&self) -> Result<FetchOutcome, Error> {
        let outcome = self.load_page(1).await?;
        if self.query().search_scope == SearchScope::Global {
            return self.fetch_all_pages().await;
        }
        Ok(outcome)
    }

    /// Change the page size, return to page 1 and refetch.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidArgument` error for a zero size and an
    /// `Unavailable` error when the source fails.
    pub async fn set_page_size(&self, size: usize) -> Result<FetchOutcome, Error> {
        let page_size = PageSize::new(size)?;
        self.update(|state| {
            state.preferences.page_size = page_size;
            state.page_number = 1;
        });
        self.persist().await;
        self.load_page(1).await
    }

    /// Navigate to page `page_number`, clamped into the known page range.
    ///
    /// # Errors
    ///
    /// Returns an `Unavailable` error when the source fails.
    pub async fn go_to_page(&self, page_number: usize) -> Result<FetchOutcome, Error> {
        let target = clamp_page(page_number, self.total_pages());
        self.load_page(target).await
    }

    /// Navigate to the first page.
    ///
    /// # Errors
    ///
    /// Returns an `Unavailable` error when the source fails.
    pub async fn go_to_first(&self) -> Result<FetchOutcome, Error> {
        self.go_to_page(1).await
    }

    /// Navigate to the previous page, staying on page 1 if already there.
    ///
    /// # Errors
    ///
    /// Returns an `Unavailable` error when the source fails.
    pub async fn go_to_previous(&self) -> Result<FetchOutcome, Error> {
        self.go_to_page(self.page_number().saturating_sub(1)).await
    }

    /// Navigate to the next page, staying on the last page if already there.
    ///
    /// # Errors
    ///
    /// Returns an `Unavailable` error when the source fails.
    pub async fn go_to_next(&self) -> Result<FetchOutcome, Error> {
        self.go_to_page(self.page_number().saturating_add(1)).await
    }

    /// Navigate to the last known page.
    ///
    /// # Errors
    ///
    /// Returns an `Unavailable` error when the source fails.
    pub async fn go_to_last(&self) -> Result<FetchOutcome, Error> {
        self.go_to_page(self.total_pages()).await
    }

    /// Fetch every page in order and cache the concatenation for global
    /// scope.
    ///
    /// Pages are requested one after another, so the cost grows with the
    /// number of pages.
    ///
    /// # Errors
    ///
    /// Returns an `Unavailable` error when any page fails; the cached
    /// aggregate is cleared in that case.
    pub async fn fetch_all_pages(&self) -> Result<FetchOutcome, Error> {
        let token = self.begin_request(&self.aggregate_requests, STATUS_FETCHING_ALL);
        let page_size = self.page_size();
        let mut users = Vec::new();
        let mut page_number = 1;
        loop {
            let page = match self.source.fetch_page(page_number, page_size).await {
                Ok(page) => page,
                Err(error) => return self.fail_fetch_all(token, &error),
            };
            if !Self::is_latest(&self.aggregate_requests, token) {
                debug!(token, page_number, "aggregation superseded");
                return Ok(FetchOutcome::Superseded);
            }
            let total_pages = page.total_pages();
            let total_count = page.total_count();
            users.extend(page.into_items());
            if page_number >= total_pages {
                let mut state = self.lock();
                if !Self::is_latest(&self.aggregate_requests, token) {
                    return Ok(FetchOutcome::Superseded);
                }
                debug!(users = users.len(), pages = total_pages, "aggregated all pages");
                state.total_pages = total_pages;
                state.total_count = total_count;
                state.all_users = Some(users);
                state.load_state = LoadState::Idle;
                STATUS_ALL_LOADED.clone_into(&mut state.status);
                return Ok(FetchOutcome::Applied);
            }
            page_number += 1;
        }
    }

    fn fail_fetch_all(
        &self,
        token: u64,
        error: &UserPageSourceError,
    ) -> Result<FetchOutcome, Error> {
        let mut state = self.lock();
        if !Self::is_latest(&self.aggregate_requests, token) {
            return Ok(FetchOutcome::Superseded);
        }
        warn!(%error, "failed to aggregate pages");
        state.all_users = None;
        state.load_state = LoadState::Failed;
        STATUS_FETCH_ALL_FAILED.clone_into(&mut state.status);
        Err(Error::unavailable(error.to_string()))
    }

    /// Set the free-text search.
    pub async fn set_search_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.update(|state| state.preferences.query.search_text = text);
        self.persist().await;
    }

    /// Select a sort field; reselecting the current one flips direction.
    pub async fn set_sort_key(&self, key: SortField) {
        self.update(|state| state.preferences.query.toggle_sort(key));
        self.persist().await;
    }

    /// Set the field used when no sort field is selected.
    pub async fn set_sort_fallback(&self, key: SortField) {
        self.update(|state| state.preferences.query.sort_fallback = key);
        self.persist().await;
    }

    /// Set the structured filter.
    pub async fn set_filter(&self, kind: FilterKind, value: impl Into<String>) {
        let value = value.into();
        self.update(|state| {
            state.preferences.query.filter_kind = kind;
            state.preferences.query.filter_value = value;
        });
        self.persist().await;
    }

    /// Set the search scope. Switching to global aggregates every page.
    ///
    /// # Errors
    ///
    /// Returns an `Unavailable` error when aggregation fails.
    pub async fn set_search_scope(&self, scope: SearchScope) -> Result<FetchOutcome, Error> {
        self.update(|state| state.preferences.query.search_scope = scope);
        self.persist().await;
        match scope {
            SearchScope::Global => self.fetch_all_pages().await,
            SearchScope::Page => Ok(FetchOutcome::Applied),
        }
    }

    /// Set the presentation layout.
    pub async fn set_display_mode(&self, mode: DisplayMode) {
        self.update(|state| state.preferences.display_mode = mode);
        self.persist().await;
    }

    /// Flip compact rows and return the new value.
    pub async fn toggle_compact(&self) -> bool {
        let compact = self.update(|state| {
            state.preferences.compact = !state.preferences.compact;
            state.preferences.compact
        });
        self.persist().await;
        compact
    }

    /// Clear the store, restore default preferences and reload page 1.
    ///
    /// # Errors
    ///
    /// Returns an `Unavailable` error when the reload fails.
    pub async fn reset_all_config(&self) -> Result<FetchOutcome, Error> {
        if let Err(error) = self.store.clear().await {
            warn!(%error, "failed to clear directory settings");
        }
        self.update(|state| {
            state.preferences = DirectoryPreferences::default();
            state.page_number = 1;
        });
        info!("directory settings reset to defaults");
        self.load_page(1).await
    }

    /// Look up a user anywhere in the dataset.
    ///
    /// # Errors
    ///
    /// Returns a `NotFound` error when no user has `id` and an `Unavailable`
    /// error when the source fails.
    pub async fn lookup_user_by_id(&self, id: UserId) -> Result<User, Error> {
        self.source
            .find_user(id)
            .await
            .map_err(|error| Error::unavailable(error.to_string()))?
            .ok_or_else(|| Error::not_found(format!("user {id} not found")))
    }

    async fn load_page(&self, requested: usize) -> Result<FetchOutcome, Error> {
        let token = self.begin_request(&self.page_requests, STATUS_FETCHING);
        let page_size = self.page_size();
        let result = self.source.fetch_page(requested, page_size).await;

        let mut state = self.lock();
        if !Self::is_latest(&self.page_requests, token) {
            debug!(token, requested, "discarding superseded page");
            return Ok(FetchOutcome::Superseded);
        }
        match result {
            Ok(page) => {
                debug!(
                    requested,
                    page = page.page_number(),
                    total_pages = page.total_pages(),
                    "page loaded"
                );
                state.page_number = page.page_number();
                state.total_pages = page.total_pages();
                state.total_count = page.total_count();
                state.current_page = Some(page);
                state.load_state = LoadState::Idle;
                STATUS_LOADED.clone_into(&mut state.status);
                Ok(FetchOutcome::Applied)
            }
            Err(error) => {
                warn!(%error, requested, "failed to fetch page");
                state.current_page = None;
                state.load_state = LoadState::Failed;
                STATUS_FETCH_FAILED.clone_into(&mut state.status);
                Err(Error::unavailable(error.to_string()))
            }
        }
    }

    async fn persist(&self) {
        let entries = self.lock().preferences.to_entries();
        if let Err(error) = self.store.write(&entries).await {
            warn!(%error, "failed to persist directory settings");
        }
    }
}

#[cfg(test)]
#[path = "directory_controller_tests.rs"]
mod tests;
