//! Deterministic example user records for the user directory demo.
//!
//! This crate derives a fixed-size user dataset from nothing more than a
//! count. Every field of the i-th record is a pure function of `i`, so the
//! same count always reproduces the same dataset and pages cut from it stay
//! stable across reloads. It is kept independent of backend domain types;
//! the backend converts [`ExampleUserSeed`] values at the point of use.
//!
//! # Example
//!
//! ```
//! use example_data::generate_example_users;
//!
//! let users = generate_example_users(3).expect("count is positive");
//!
//! assert_eq!(users.len(), 3);
//! assert_eq!(users.first().map(|user| user.id), Some(1));
//! ```

mod error;
mod generator;
mod seed;
mod tables;

pub use error::GenerationError;
pub use generator::{example_user, generate_example_users};
pub use seed::ExampleUserSeed;
pub use tables::{DOMAINS, FIRST_NAMES, LAST_NAMES};
