//! Fixed lookup tables the generator indexes into.
//!
//! Changing the order or length of any table changes every generated record,
//! so treat these as part of the dataset contract.

/// Given names, indexed by `(id * 3) % len`.
pub const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Charlie", "Diana", "Ethan", "Fiona", "George", "Hannah", "Ishan", "Jaya",
    "Karan", "Lina", "Mohan", "Nisha", "Omar", "Priya", "Quinn", "Ravi", "Sara", "Tanya", "Uma",
    "Vikram", "Walt", "Xena", "Yash", "Zara",
];

/// Family names, indexed by `(id * 7) % len`.
pub const LAST_NAMES: &[&str] = &[
    "Patel", "Sharma", "Gupta", "Kumar", "Singh", "Bose", "Reddy", "Das", "Ghosh", "Iyer",
    "Mehta", "Kapoor", "Nair", "Khan", "Ibrahim",
];

/// Email domains, indexed by `(id * 5) % len`.
pub const DOMAINS: &[&str] = &[
    "example.com",
    "gmail.com",
    "reqres.in",
    "hotmail.com",
    "yahoo.com",
    "company.org",
];

/// Returns the table entry at `position`, wrapping around the table length.
pub(crate) fn pick(table: &'static [&'static str], position: u32) -> &'static str {
    let index = usize::try_from(position).map_or(0, |value| value.rem_euclid(table.len()));
    table.get(index).copied().unwrap_or_default()
}
