//! Adapters for the settings store port.

mod atomic_io;
mod in_memory;
mod json_file;

pub use in_memory::InMemoryConfigStore;
pub use json_file::JsonFileConfigStore;
