//! In-memory user source with simulated network latency.
//!
//! The dataset is generated once from a user count and never changes. Every
//! call sleeps for a jittered delay before answering so callers experience
//! the same suspension points a remote endpoint would impose.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pagination::{Page, PageSize};
use rand::Rng;
use tracing::debug;

use crate::domain::ports::{UserPageSource, UserPageSourceError};
use crate::domain::{Error, User, UserId};

/// Inclusive range the simulated latency is drawn from.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use user_directory::outbound::LatencyProfile;
///
/// let profile = LatencyProfile::new(Duration::from_millis(400), Duration::from_millis(200));
/// assert_eq!(profile.min(), Duration::from_millis(200));
/// assert_eq!(profile.max(), Duration::from_millis(400));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    min: Duration,
    max: Duration,
}

impl LatencyProfile {
    /// Default lower bound of a simulated round-trip.
    pub const DEFAULT_MIN: Duration = Duration::from_millis(200);
    /// Default upper bound of a simulated round-trip.
    pub const DEFAULT_MAX: Duration = Duration::from_millis(400);

    /// Build a profile from two bounds given in either order.
    pub fn new(a: Duration, b: Duration) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// A profile that always waits exactly `delay`.
    pub fn fixed(delay: Duration) -> Self {
        Self::new(delay, delay)
    }

    /// Lower bound.
    pub fn min(&self) -> Duration {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> Duration {
        self.max
    }

    /// Draw a delay uniformly from the profile's range.
    pub fn sample(&self) -> Duration {
        if self.min == self.max {
            return self.min;
        }
        let min_ms = u64::try_from(self.min.as_millis()).unwrap_or(u64::MAX);
        let max_ms = u64::try_from(self.max.as_millis()).unwrap_or(u64::MAX);
        Duration::from_millis(rand::thread_rng().gen_range(min_ms..=max_ms))
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN, Self::DEFAULT_MAX)
    }
}

/// User source backed by a generated, immutable dataset.
#[derive(Debug, Clone)]
pub struct SimulatedUserSource {
    users: Arc<[User]>,
    latency: LatencyProfile,
}

impl SimulatedUserSource {
    /// Generate `count` example users and serve them with `latency`.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::domain::ErrorCode::InvalidArgument`] error when
    /// `count` is zero.
    pub fn generate(count: u32, latency: LatencyProfile) -> Result<Self, Error> {
        let users = example_data::generate_example_users(count)?
            .into_iter()
            .map(User::from)
            .collect::<Vec<_>>();
        Ok(Self::from_users(users, latency))
    }

    /// Serve an existing list of users.
    pub fn from_users(users: Vec<User>, latency: LatencyProfile) -> Self {
        Self {
            users: users.into(),
            latency,
        }
    }

    async fn simulate_round_trip(&self) {
        tokio::time::sleep(self.latency.sample()).await;
    }
}

#[async_trait]
impl UserPageSource for SimulatedUserSource {
    async fn fetch_page(
        &self,
        page_number: usize,
        page_size: PageSize,
    ) -> Result<Page<User>, UserPageSourceError> {
        self.simulate_round_trip().await;
        let page = Page::slice(&self.users, page_number, page_size);
        debug!(
            requested = page_number,
            served = page.page_number(),
            page_size = page_size.get(),
            "served simulated page"
        );
        Ok(page)
    }

    async fn find_user(&self, id: UserId) -> Result<Option<User>, UserPageSourceError> {
        self.simulate_round_trip().await;
        Ok(self.users.iter().find(|user| user.id == id).cloned())
    }
}
