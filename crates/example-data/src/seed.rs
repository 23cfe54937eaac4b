//! Generated user seed types.
//!
//! This module defines the output type of user generation. It is independent
//! of backend domain types to avoid circular dependencies.

use serde::{Deserialize, Serialize};

/// A generated example user record.
///
/// # Example
///
/// ```
/// use example_data::ExampleUserSeed;
///
/// let user = ExampleUserSeed {
///     id: 7,
///     first_name: "Ada".to_owned(),
///     last_name: "Lovelace".to_owned(),
///     email: "ada.lovelace7@example.com".to_owned(),
///     avatar_url: "https://i.pravatar.cc/150?img=8".to_owned(),
/// };
///
/// assert_eq!(user.full_name(), "Ada Lovelace");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleUserSeed {
    /// Positive identifier, unique within the dataset.
    pub id: u32,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address derived from the name, id and domain.
    pub email: String,
    /// Avatar image URL derived from the id.
    pub avatar_url: String,
}

impl ExampleUserSeed {
    /// Returns `"first last"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_user_seed_serializes_to_camel_case() {
        let user = ExampleUserSeed {
            id: 1,
            first_name: "Test".to_owned(),
            last_name: "User".to_owned(),
            email: "test.user1@example.com".to_owned(),
            avatar_url: "https://i.pravatar.cc/150?img=2".to_owned(),
        };
        let json = serde_json::to_string(&user).expect("serialize");
        assert!(json.contains("firstName"));
        assert!(json.contains("lastName"));
        assert!(json.contains("avatarUrl"));
    }
}
