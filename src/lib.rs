//! locale-service
//!
//! Resolves the active locale, loads its translation table from persistent
//! storage or a remote source, and translates keys.

pub mod config;
pub mod error;
pub mod service;
pub mod storage;
pub mod translation;
pub mod transport;

#[cfg(test)]
mod test_utils;

pub use config::LocaleSettings;
pub use error::LocaleError;
pub use service::LocaleService;
