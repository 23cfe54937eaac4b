//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod config_store;
mod user_page_source;

#[cfg(test)]
pub use config_store::MockConfigStore;
pub use config_store::{ConfigStore, ConfigStoreError, SettingsEntries};
#[cfg(test)]
pub use user_page_source::MockUserPageSource;
pub use user_page_source::{UserPageSource, UserPageSourceError};
