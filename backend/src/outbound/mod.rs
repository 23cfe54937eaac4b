//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **simulated_source**: generated dataset served with simulated latency
//! - **config_store**: in-memory and JSON-file settings stores
//!
//! Adapters are thin translators between domain types and their backing
//! representation. They contain no business logic.

pub mod config_store;
mod simulated_source;

pub use simulated_source::{LatencyProfile, SimulatedUserSource};
