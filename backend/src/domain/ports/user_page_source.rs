//! Port for paged access to the user dataset.
//!
//! The [`UserPageSource`] trait models a remote, paginated users endpoint.
//! Implementations clamp out-of-range page numbers instead of failing, so
//! callers must read the page number from the returned [`Page`].

use async_trait::async_trait;
use pagination::{Page, PageSize};

use crate::domain::{User, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user page source adapters.
    pub enum UserPageSourceError {
        /// The source could not be reached or refused to answer.
        Unavailable => "user source unavailable",
    }
}

/// Port for fetching pages of users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserPageSource: Send + Sync {
    /// Fetch the page nearest to `page_number` at the given size.
    ///
    /// The returned page satisfies `1 <= page_number <= total_pages`.
    async fn fetch_page(
        &self,
        page_number: usize,
        page_size: PageSize,
    ) -> Result<Page<User>, UserPageSourceError>;

    /// Look up a single user by identifier.
    ///
    /// Returns `None` when the dataset holds no such user.
    async fn find_user(&self, id: UserId) -> Result<Option<User>, UserPageSourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_error_formats_correctly() {
        let error = UserPageSourceError::unavailable("connection reset");
        assert_eq!(
            error.to_string(),
            "user source unavailable: connection reset"
        );
    }

    #[tokio::test]
    async fn mock_source_returns_configured_page() {
        let mut source = MockUserPageSource::new();
        source.expect_fetch_page().times(1).return_once(|page, size| {
            let users: Vec<User> = vec![User::from(example_data::example_user(1))];
            Ok(Page::slice(&users, page, size))
        });

        let page = source
            .fetch_page(3, PageSize::default())
            .await
            .expect("mock fetch succeeds");

        assert_eq!(page.page_number(), 1);
        assert_eq!(page.items().len(), 1);
    }
}
