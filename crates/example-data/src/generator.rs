//! Deterministic user generation.
//!
//! Each record is derived from its 1-based id alone by modular indexing into
//! the fixed tables in [`crate::tables`]. The same id always yields the same
//! record, whatever the dataset size.

use crate::error::GenerationError;
use crate::seed::ExampleUserSeed;
use crate::tables::{DOMAINS, FIRST_NAMES, LAST_NAMES, pick};

const FIRST_NAME_STRIDE: u32 = 3;
const LAST_NAME_STRIDE: u32 = 7;
const DOMAIN_STRIDE: u32 = 5;

/// Email suffixes cycle through `0..EMAIL_SUFFIX_MODULUS`.
const EMAIL_SUFFIX_MODULUS: u32 = 9;

/// Number of distinct avatar images served by the avatar host.
const AVATAR_COUNT: u32 = 70;

const AVATAR_BASE_URL: &str = "https://i.pravatar.cc/150?img=";

/// Generates `count` example users with ids `1..=count`.
///
/// # Errors
///
/// Returns [`GenerationError::InvalidArgument`] when `count` is zero.
///
/// # Example
///
/// ```
/// use example_data::generate_example_users;
///
/// let users = generate_example_users(24).expect("generated");
/// assert_eq!(users.len(), 24);
///
/// // Same count produces identical users
/// let again = generate_example_users(24).expect("generated");
/// assert_eq!(users, again);
/// ```
pub fn generate_example_users(count: u32) -> Result<Vec<ExampleUserSeed>, GenerationError> {
    if count == 0 {
        return Err(GenerationError::InvalidArgument { count });
    }
    Ok((1..=count).map(example_user).collect())
}

/// Derives the record for a single id.
///
/// # Example
///
/// ```
/// use example_data::example_user;
///
/// let user = example_user(1);
/// assert_eq!(user.first_name, "Diana");
/// assert_eq!(user.email, "diana.das1@company.org");
/// ```
#[must_use]
pub fn example_user(id: u32) -> ExampleUserSeed {
    let first_name = pick(FIRST_NAMES, id.wrapping_mul(FIRST_NAME_STRIDE));
    let last_name = pick(LAST_NAMES, id.wrapping_mul(LAST_NAME_STRIDE));
    let domain = pick(DOMAINS, id.wrapping_mul(DOMAIN_STRIDE));
    let suffix = id.rem_euclid(EMAIL_SUFFIX_MODULUS);
    let email = format!(
        "{}.{}{suffix}@{domain}",
        first_name.to_lowercase(),
        last_name.to_lowercase()
    );
    let avatar = id.rem_euclid(AVATAR_COUNT).saturating_add(1);

    ExampleUserSeed {
        id,
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email,
        avatar_url: format!("{AVATAR_BASE_URL}{avatar}"),
    }
}
