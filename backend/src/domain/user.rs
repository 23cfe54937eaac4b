//! User data model.

use std::fmt;

use example_data::ExampleUserSeed;
use serde::{Deserialize, Serialize};

/// Positive integer identifying a user for the lifetime of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u32);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for UserId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// A user record as shown in the directory.
///
/// # Examples
/// ```
/// use user_directory::domain::{User, UserId};
///
/// let user = User::from(example_data::example_user(1));
/// assert_eq!(user.id, UserId::new(1));
/// assert_eq!(user.full_name(), "Diana Das");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Stable identifier.
    pub id: UserId,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Contact email address.
    pub email: String,
    /// Avatar image URL.
    pub avatar_url: String,
}

impl User {
    /// Returns `"first last"`, the text searched alongside the email.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<ExampleUserSeed> for User {
    fn from(seed: ExampleUserSeed) -> Self {
        Self {
            id: UserId::new(seed.id),
            first_name: seed.first_name,
            last_name: seed.last_name,
            email: seed.email,
            avatar_url: seed.avatar_url,
        }
    }
}
