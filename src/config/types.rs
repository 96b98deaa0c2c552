use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "storagePrefix")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleSettings {
    /// Base address; the locale name and `trailing_suffix` are appended to it.
    pub url: String,

    /// Used when no locale has been selected.
    pub default_locale_name: String,

    /// Appended after the locale name, e.g. ".json".
    pub trailing_suffix: String,

    /// Prefix of the storage key holding a locale's cached table.
    pub storage_prefix: String,

    pub selected_locale_storage_key: String,

    /// Separator used when flattening nested tables into lookup keys.
    pub key_separator: String,
}

impl LocaleSettings {
    /// Settings for `url` with every other field at its default.
    #[must_use]
    pub fn with_url(url: impl Into<String>) -> Self {
        Self { url: url.into(), ..Self::default() }
    }

    /// # Errors
    /// - Required field is empty
    /// - Selected-locale key starts with the storage prefix
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.url.is_empty() {
            errors.push(ValidationError::new(
                "url",
                "The url cannot be empty. Example: \"https://example.com/locales/\"",
            ));
        }

        if self.default_locale_name.is_empty() {
            errors.push(ValidationError::new(
                "defaultLocaleName",
                "The default locale cannot be empty. Example: \"en\"",
            ));
        }

        if self.storage_prefix.is_empty() {
            errors.push(ValidationError::new(
                "storagePrefix",
                "The prefix cannot be empty. Example: \"localeService-locale-\"",
            ));
        }

        if self.selected_locale_storage_key.is_empty() {
            errors.push(ValidationError::new(
                "selectedLocaleStorageKey",
                "The storage key cannot be empty. Example: \"localeService-selected-locale-name\"",
            ));
        } else if !self.storage_prefix.is_empty()
            && self.selected_locale_storage_key.starts_with(&self.storage_prefix)
        {
            errors.push(ValidationError::new(
                "storagePrefix/selectedLocaleStorageKey",
                format!(
                    "The selected locale key '{}' starts with the storage prefix '{}' and would \
                     be removed when clearing a locale of the same name",
                    self.selected_locale_storage_key, self.storage_prefix
                ),
            ));
        }

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            url: String::new(),
            default_locale_name: "en".to_string(),
            trailing_suffix: String::new(),
            storage_prefix: "localeService-locale-".to_string(),
            selected_locale_storage_key: "localeService-selected-locale-name".to_string(),
            key_separator: ".".to_string(),
        }
    }
}
