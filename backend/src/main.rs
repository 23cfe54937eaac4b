//! Command-line entry-point: browse the simulated user directory.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io;
use std::sync::Arc;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use ortho_config::OrthoConfig;
use pagination::Page;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use user_directory::DirectorySettings;
use user_directory::domain::ports::ConfigStore;
use user_directory::domain::{
    DirectoryController, DisplayMode, FetchOutcome, FilterKind, SearchScope, SortField,
    ThemeService, User, UserId,
};
use user_directory::outbound::SimulatedUserSource;
use user_directory::outbound::config_store::{InMemoryConfigStore, JsonFileConfigStore};

/// `user-directory` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "user-directory",
    about = "Browse a paginated, searchable directory of generated users",
    version
)]
struct CliArgs {
    #[command(subcommand)]
    action: Action,
}

#[derive(Debug, Clone, Subcommand)]
enum Action {
    /// Show the first page.
    List,
    /// Show the given page, clamped into range.
    Page {
        /// 1-based page number.
        number: usize,
    },
    /// Aggregate every page and search across all of them.
    All,
    /// Show a single user.
    Show {
        /// User identifier.
        id: u32,
    },
    /// Change the page size and show the first page.
    PageSize {
        /// Items per page.
        size: usize,
    },
    /// Set the free-text search and show the result.
    Search {
        /// Text matched against names and emails; empty clears it.
        #[arg(default_value = "")]
        text: String,
    },
    /// Select a sort field; repeating it flips the direction.
    Sort {
        /// `first_name` or `email`.
        key: SortField,
    },
    /// Set the structured filter.
    Filter {
        /// `none`, `domain` or `first_letter`.
        kind: FilterKind,
        /// Filter operand.
        #[arg(default_value = "")]
        value: String,
    },
    /// Set the search scope.
    Scope {
        /// `page` or `global`.
        scope: SearchScope,
    },
    /// Set the layout.
    Display {
        /// `table` or `card`.
        mode: DisplayMode,
    },
    /// Toggle compact rows.
    Compact,
    /// Toggle the dark theme.
    Theme,
    /// Forget every stored setting and show the first page.
    Reset,
}

fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let settings = DirectorySettings::load_from_iter([OsString::from("user-directory")])
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;
    let source = SimulatedUserSource::generate(settings.user_count, settings.latency_profile())
        .map_err(|error| io::Error::other(error.to_string()))?;

    match &settings.store_path {
        Some(path) => {
            let path = Utf8PathBuf::from_path_buf(path.clone()).map_err(|path| {
                io::Error::other(format!("store path is not UTF-8: {}", path.display()))
            })?;
            let store = JsonFileConfigStore::open(&path).map_err(io::Error::other)?;
            run(args.action, source, Arc::new(store)).await
        }
        None => run(args.action, source, Arc::new(InMemoryConfigStore::default())).await,
    }
}

async fn run<C: ConfigStore>(
    action: Action,
    source: SimulatedUserSource,
    store: Arc<C>,
) -> io::Result<()> {
    if matches!(action, Action::Theme) {
        let theme = ThemeService::new(store);
        let dark = theme.toggle().await;
        println!("dark mode: {}", if dark { "on" } else { "off" });
        return Ok(());
    }

    let controller = DirectoryController::new(Arc::new(source), store).await;
    let outcome = match action {
        Action::Show { id } => {
            let user = controller
                .lookup_user_by_id(UserId::new(id))
                .await
                .map_err(io::Error::other)?;
            print_card(&user);
            return Ok(());
        }
        Action::Reset => controller.reset_all_config().await,
        Action::PageSize { size } => controller.set_page_size(size).await,
        other => {
            controller.start().await.map_err(io::Error::other)?;
            apply_action(&controller, other).await
        }
    }
    .map_err(io::Error::other)?;

    if outcome == FetchOutcome::Superseded {
        warn!("listing superseded by a newer request");
    }
    print_listing(&controller);
    Ok(())
}

async fn apply_action<C: ConfigStore>(
    controller: &DirectoryController<SimulatedUserSource, C>,
    action: Action,
) -> Result<FetchOutcome, user_directory::domain::Error> {
    match action {
        Action::Page { number } => controller.go_to_page(number).await,
        Action::All => controller.set_search_scope(SearchScope::Global).await,
        Action::Search { text } => {
            controller.set_search_text(text).await;
            Ok(FetchOutcome::Applied)
        }
        Action::Sort { key } => {
            controller.set_sort_key(key).await;
            Ok(FetchOutcome::Applied)
        }
        Action::Filter { kind, value } => {
            controller.set_filter(kind, value).await;
            Ok(FetchOutcome::Applied)
        }
        Action::Scope { scope } => controller.set_search_scope(scope).await,
        Action::Display { mode } => {
            controller.set_display_mode(mode).await;
            Ok(FetchOutcome::Applied)
        }
        Action::Compact => {
            controller.toggle_compact().await;
            Ok(FetchOutcome::Applied)
        }
        Action::List
        | Action::Show { .. }
        | Action::PageSize { .. }
        | Action::Theme
        | Action::Reset => Ok(FetchOutcome::Applied),
    }
}

fn print_listing<C: ConfigStore>(controller: &DirectoryController<SimulatedUserSource, C>) {
    let preferences = controller.preferences();
    let users = controller.display_list();
    for user in &users {
        match preferences.display_mode {
            DisplayMode::Table => println!(
                "{:>4}  {:<24} {}",
                user.id.get(),
                user.full_name(),
                user.email
            ),
            DisplayMode::Card => {
                print_card(user);
                if !preferences.compact {
                    println!();
                }
            }
        }
    }
    let scope = match preferences.query.search_scope {
        SearchScope::Global => "all pages".to_owned(),
        SearchScope::Page => {
            let position = format!(
                "page {} of {}",
                controller.page_number(),
                controller.total_pages()
            );
            match controller.current_page().as_ref().and_then(navigation_hint) {
                Some(hint) => format!("{position} ({hint})"),
                None => position,
            }
        }
    };
    println!(
        "{} shown, {scope}, {} users total ({})",
        users.len(),
        controller.total_count(),
        controller.status_message()
    );
}

fn print_card(user: &User) {
    println!("#{} {}", user.id, user.full_name());
    println!("  {}", user.email);
    println!("  {}", user.avatar_url);
}

/// Which neighbouring pages exist, for the listing summary.
fn navigation_hint<T>(page: &Page<T>) -> Option<&'static str> {
    match (page.has_previous(), page.has_next()) {
        (true, true) => Some("previous and next available"),
        (true, false) => Some("previous available"),
        (false, true) => Some("next available"),
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for listing helpers.

    use pagination::{Page, PageSize};
    use rstest::rstest;

    use super::navigation_hint;

    #[rstest]
    #[case(1, Some("next available"))]
    #[case(2, Some("previous and next available"))]
    #[case(4, Some("previous available"))]
    fn hint_reflects_neighbouring_pages(#[case] page: usize, #[case] expected: Option<&str>) {
        let dataset: Vec<u32> = (1..=24).collect();
        let size = PageSize::new(6).expect("non-zero page size");

        assert_eq!(navigation_hint(&Page::slice(&dataset, page, size)), expected);
    }

    #[rstest]
    fn single_page_has_no_hint() {
        let dataset: Vec<u32> = (1..=4).collect();

        assert_eq!(navigation_hint(&Page::slice(&dataset, 1, PageSize::DEFAULT)), None);
    }
}
