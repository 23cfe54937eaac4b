//! Behavioural tests for the paginated user directory.

#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use std::sync::Arc;
use std::time::Duration;

use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use tokio::runtime::Runtime;
use user_directory::domain::ports::{ConfigStore, SettingsEntries};
use user_directory::domain::{
    DirectoryController, Error, ErrorCode, FilterKind, SearchScope, SortDirection, SortField,
    User, UserId, keys,
};
use user_directory::outbound::config_store::InMemoryConfigStore;
use user_directory::outbound::{LatencyProfile, SimulatedUserSource};

type Controller = DirectoryController<SimulatedUserSource, InMemoryConfigStore>;

#[derive(Clone)]
struct RuntimeHandle(Arc<Runtime>);

/// Scenario state shared by the directory steps.
#[derive(Default, ScenarioState)]
struct DirectoryWorld {
    runtime: Slot<RuntimeHandle>,
    source: Slot<Arc<SimulatedUserSource>>,
    store: Slot<Arc<InMemoryConfigStore>>,
    controller: Slot<Arc<Controller>>,
    page_results: Slot<usize>,
    lookup: Slot<Result<User, Error>>,
}

impl DirectoryWorld {
    fn runtime(&self) -> Arc<Runtime> {
        if let Some(RuntimeHandle(runtime)) = self.runtime.get() {
            return runtime;
        }
        let runtime = Arc::new(Runtime::new().expect("create runtime"));
        self.runtime.set(RuntimeHandle(Arc::clone(&runtime)));
        runtime
    }

    fn store(&self) -> Arc<InMemoryConfigStore> {
        if let Some(store) = self.store.get() {
            return store;
        }
        let store = Arc::new(InMemoryConfigStore::default());
        self.store.set(Arc::clone(&store));
        store
    }

    fn controller(&self) -> Arc<Controller> {
        self.controller.get().expect("directory should be started")
    }

    fn open(&self) -> Arc<Controller> {
        let source = self.source.get().expect("users should be generated");
        let controller = self
            .runtime()
            .block_on(DirectoryController::new(source, self.store()));
        let controller = Arc::new(controller);
        self.controller.set(Arc::clone(&controller));
        controller
    }
}

#[fixture]
fn world() -> DirectoryWorld {
    DirectoryWorld::default()
}

fn unquote(raw: &str) -> &str {
    raw.trim_matches('"')
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a directory of {count:u32} users")]
fn a_directory_of_users(world: &DirectoryWorld, count: u32) {
    let source = SimulatedUserSource::generate(count, LatencyProfile::fixed(Duration::ZERO))
        .expect("generate users");
    world.source.set(Arc::new(source));
}

#[given("the search scope is stored as {scope}")]
fn the_search_scope_is_stored_as(world: &DirectoryWorld, scope: String) {
    let mut entries = SettingsEntries::default();
    entries.insert(keys::SEARCH_SCOPE, unquote(&scope));
    world
        .runtime()
        .block_on(world.store().write(&entries))
        .expect("seed store");
}

// ============================================================================
// When steps
// ============================================================================

#[when("the directory starts")]
fn the_directory_starts(world: &DirectoryWorld) {
    let controller = world.open();
    world
        .runtime()
        .block_on(controller.start())
        .expect("initial load");
}

#[when("the directory is reopened")]
fn the_directory_is_reopened(world: &DirectoryWorld) {
    world.open();
}

#[when("the user goes to page {page:usize}")]
fn the_user_goes_to_page(world: &DirectoryWorld, page: usize) {
    world
        .runtime()
        .block_on(world.controller().go_to_page(page))
        .expect("navigate");
}

#[when("the page size is set to {size:usize}")]
fn the_page_size_is_set_to(world: &DirectoryWorld, size: usize) {
    world
        .runtime()
        .block_on(world.controller().set_page_size(size))
        .expect("resize");
}

#[when("the search text is set to {text}")]
fn the_search_text_is_set_to(world: &DirectoryWorld, text: String) {
    world
        .runtime()
        .block_on(world.controller().set_search_text(unquote(&text)));
}

#[when("the page results are recorded")]
fn the_page_results_are_recorded(world: &DirectoryWorld) {
    world
        .page_results
        .set(world.controller().display_list().len());
}

#[when("the search scope is set to {scope}")]
fn the_search_scope_is_set_to(world: &DirectoryWorld, scope: String) {
    let scope: SearchScope = unquote(&scope).parse().expect("known scope");
    world
        .runtime()
        .block_on(world.controller().set_search_scope(scope))
        .expect("change scope");
}

#[when("the filter is set to domain {domain}")]
fn the_filter_is_set_to_domain(world: &DirectoryWorld, domain: String) {
    world.runtime().block_on(
        world
            .controller()
            .set_filter(FilterKind::Domain, unquote(&domain)),
    );
}

#[when("the sort key is set to {key}")]
fn the_sort_key_is_set_to(world: &DirectoryWorld, key: String) {
    let key: SortField = unquote(&key).parse().expect("known sort key");
    world
        .runtime()
        .block_on(world.controller().set_sort_key(key));
}

#[when("the user looks up user {id:u32}")]
fn the_user_looks_up_user(world: &DirectoryWorld, id: u32) {
    let result = world
        .runtime()
        .block_on(world.controller().lookup_user_by_id(UserId::new(id)));
    world.lookup.set(result);
}

#[when("all settings are reset")]
fn all_settings_are_reset(world: &DirectoryWorld) {
    world
        .runtime()
        .block_on(world.controller().reset_all_config())
        .expect("reset reload");
}

// ============================================================================
// Then steps
// ============================================================================

#[then("there are {expected:usize} pages")]
fn there_are_pages(world: &DirectoryWorld, expected: usize) {
    assert_eq!(world.controller().total_pages(), expected);
}

#[then("the current page is {expected:usize}")]
fn the_current_page_is(world: &DirectoryWorld, expected: usize) {
    assert_eq!(world.controller().page_number(), expected);
}

#[then("the global results are at least the page results")]
fn the_global_results_are_at_least_the_page_results(world: &DirectoryWorld) {
    let page_results = world.page_results.get().expect("page results recorded");
    let global_results = world.controller().display_list().len();
    assert!(
        global_results >= page_results,
        "global {global_results} < page {page_results}"
    );
}

#[then("every result matches the search text")]
fn every_result_matches_the_search_text(world: &DirectoryWorld) {
    let controller = world.controller();
    let needle = controller.query().search_text.to_lowercase();
    for user in controller.display_list() {
        let haystack = format!("{} {}", user.full_name(), user.email).to_lowercase();
        assert!(haystack.contains(&needle), "{haystack} lacks {needle}");
    }
}

#[then("every result has a gmail.com address")]
fn every_result_has_a_gmail_address(world: &DirectoryWorld) {
    let results = world.controller().display_list();
    assert!(!results.is_empty());
    for user in results {
        assert!(user.email.ends_with("@gmail.com"), "{}", user.email);
    }
}

#[then("the results are ordered by first name")]
fn the_results_are_ordered_by_first_name(world: &DirectoryWorld) {
    let names: Vec<String> = world
        .controller()
        .display_list()
        .iter()
        .map(|user| user.first_name.to_lowercase())
        .collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[then("the lookup fails with a not found error")]
fn the_lookup_fails_with_a_not_found_error(world: &DirectoryWorld) {
    match world.lookup.get() {
        Some(Err(error)) => assert_eq!(error.code(), ErrorCode::NotFound),
        other => panic!("expected NotFound, got: {other:?}"),
    }
}

#[then("the sort direction is {direction}")]
fn the_sort_direction_is(world: &DirectoryWorld, direction: String) {
    let expected: SortDirection = unquote(&direction).parse().expect("known direction");
    assert_eq!(world.controller().query().sort_direction, expected);
}

#[then("the search text is empty")]
fn the_search_text_is_empty(world: &DirectoryWorld) {
    assert!(world.controller().query().search_text.is_empty());
    let stored = world
        .runtime()
        .block_on(world.store().load())
        .expect("load store");
    assert!(stored.is_empty());
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/user_directory.feature",
    name = "Out-of-range pages are clamped"
)]
fn out_of_range_pages_are_clamped(world: DirectoryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/user_directory.feature",
    name = "Changing the page size returns to the first page"
)]
fn changing_the_page_size_returns_to_the_first_page(world: DirectoryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/user_directory.feature",
    name = "Global search covers every page"
)]
fn global_search_covers_every_page(world: DirectoryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/user_directory.feature",
    name = "Domain filter with name sort"
)]
fn domain_filter_with_name_sort(world: DirectoryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/user_directory.feature",
    name = "Looking up a missing user fails"
)]
fn looking_up_a_missing_user_fails(world: DirectoryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/user_directory.feature",
    name = "Preferences survive reopening the directory"
)]
fn preferences_survive_reopening_the_directory(world: DirectoryWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/user_directory.feature",
    name = "Resetting restores defaults"
)]
fn resetting_restores_defaults(world: DirectoryWorld) {
    let _ = world;
}
