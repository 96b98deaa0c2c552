//! Service configuration
/// Config file loader
mod loader;
/// Configuration types and settings
mod types;

pub use loader::load_from_file;
pub use types::{
    ConfigError,
    LocaleSettings,
    ValidationError,
};
