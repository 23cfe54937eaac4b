//! User directory library: domain, outbound adapters and settings.

pub mod domain;
pub mod outbound;
pub mod settings;

pub use settings::DirectorySettings;
