//! Cache-first loading of the active locale's translation table

use std::sync::{
    Arc,
    PoisonError,
    RwLock,
    RwLockReadGuard,
};

use tokio::sync::Mutex;

use crate::config::{
    ConfigError,
    LocaleSettings,
};
use crate::error::LocaleError;
use crate::storage::KeyValueStore;
use crate::translation::TranslationTable;
use crate::transport::{
    RequestOptions,
    Transport,
};

/// Table currently held in memory together with the locale it belongs to
#[derive(Debug)]
struct LoadedLocale {
    /// Locale the table was loaded for
    name: String,
    /// Complete table; never partially populated
    table: TranslationTable,
}

/// Resolves the active locale, loads its translation table (storage first,
/// remote on a miss) and answers key lookups.
///
/// `load_locale_data` must complete before lookups return translations;
/// until then [`LocaleService::translation`] echoes the key back.
#[derive(Debug)]
pub struct LocaleService {
    /// Validated configuration
    settings: LocaleSettings,
    /// Persistent cache and selected-locale record
    store: Arc<dyn KeyValueStore>,
    /// Remote source of translation tables
    transport: Arc<dyn Transport>,
    /// Loaded table, `None` until loaded or after a clear
    loaded: RwLock<Option<LoadedLocale>>,
    /// Serializes loads and clears so overlapping loads fetch once
    load_guard: Mutex<()>,
}

impl LocaleService {
    /// Create a service. Performs no I/O; call [`Self::initialize`] to drop
    /// the stale cache of the effective locale.
    ///
    /// # Errors
    /// Returns [`ConfigError::ValidationErrors`] when `settings` are invalid.
    pub fn new(
        settings: LocaleSettings,
        store: Arc<dyn KeyValueStore>,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, ConfigError> {
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        Ok(Self {
            settings,
            store,
            transport,
            loaded: RwLock::new(None),
            load_guard: Mutex::new(()),
        })
    }

    /// Clear the cached table of the effective locale so the next load
    /// fetches fresh data.
    pub async fn initialize(&self) -> Result<(), LocaleError> {
        tracing::debug!("Initializing locale service");
        self.clear_locale_data(None).await
    }

    /// Configuration the service was created with
    #[must_use]
    pub const fn settings(&self) -> &LocaleSettings {
        &self.settings
    }

    /// Storage key holding the cached table for `locale_name`
    #[must_use]
    pub fn storage_key(&self, locale_name: &str) -> String {
        format!("{}{locale_name}", self.settings.storage_prefix)
    }

    /// Remote address of the table for `locale_name`
    #[must_use]
    pub fn locale_url(&self, locale_name: &str) -> String {
        format!("{}{locale_name}{}", self.settings.url, self.settings.trailing_suffix)
    }

    /// Persist the user's locale choice.
    ///
    /// The loaded table is left untouched; clear and reload to switch to it.
    pub async fn set_selected_locale(&self, locale_name: &str) -> Result<(), LocaleError> {
        self.store.set(&self.settings.selected_locale_storage_key, locale_name).await?;
        Ok(())
    }

    /// Load the table of the effective locale unless one is already loaded.
    ///
    /// Reads the cached copy first; a missing or unusable copy is replaced by
    /// a fresh fetch, which is written back to storage.
    pub async fn load_locale_data(&self) -> Result<(), LocaleError> {
        if self.is_loaded() {
            return Ok(());
        }

        let _guard = self.load_guard.lock().await;
        // Another caller may have finished loading while we waited.
        if self.is_loaded() {
            return Ok(());
        }

        let locale_name = self.effective_locale_name().await?;
        let storage_key = self.storage_key(&locale_name);
        let cached = self.store.get(&storage_key).await?;

        let cached_table = cached
            .as_deref()
            .and_then(|text| TranslationTable::from_cached(text, &self.settings.key_separator));

        let table = if let Some(table) = cached_table {
            tracing::debug!(
                locale = %locale_name,
                entries = table.len(),
                "Loaded locale data from storage"
            );
            table
        } else {
            if cached.is_some() {
                tracing::warn!(key = %storage_key, "Cached locale data is unusable, fetching again");
            } else {
                tracing::debug!(locale = %locale_name, "No cached locale data");
            }
            self.fetch_and_cache(&locale_name).await?
        };

        self.replace_loaded(Some(LoadedLocale { name: locale_name, table }));
        Ok(())
    }

    /// Discard the loaded table and remove a cached table from storage.
    ///
    /// `locale_name` selects the cache entry to remove; `None` uses the
    /// effective locale. The selected-locale record is kept.
    pub async fn clear_locale_data(&self, locale_name: Option<&str>) -> Result<(), LocaleError> {
        let _guard = self.load_guard.lock().await;

        let locale_name = match locale_name {
            Some(name) => name.to_string(),
            None => self.effective_locale_name().await?,
        };

        self.replace_loaded(None);
        self.store.remove(&self.storage_key(&locale_name)).await?;
        tracing::debug!(locale = %locale_name, "Cleared locale data");
        Ok(())
    }

    /// Forget the user's locale choice. Cached tables are kept.
    pub async fn clear_selected_locale_name(&self) -> Result<(), LocaleError> {
        self.store.remove(&self.settings.selected_locale_storage_key).await?;
        Ok(())
    }

    /// Translation for `key`, or `key` itself when no table is loaded or the
    /// table has no entry for it.
    #[must_use]
    pub fn translation(&self, key: &str) -> String {
        self.read_loaded()
            .as_ref()
            .and_then(|loaded| loaded.table.get(key))
            .map_or_else(|| key.to_string(), str::to_string)
    }

    /// `true` once a table is held in memory
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.read_loaded().is_some()
    }

    /// Locale of the loaded table
    #[must_use]
    pub fn current_locale_name(&self) -> Option<String> {
        self.read_loaded().as_ref().map(|loaded| loaded.name.clone())
    }

    /// Selected locale if one is recorded, otherwise the default
    async fn effective_locale_name(&self) -> Result<String, LocaleError> {
        let selected = self.store.get(&self.settings.selected_locale_storage_key).await?;

        Ok(selected
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| self.settings.default_locale_name.clone()))
    }

    /// Fetch the table for `locale_name` and cache the raw payload.
    async fn fetch_and_cache(&self, locale_name: &str) -> Result<TranslationTable, LocaleError> {
        let url = self.locale_url(locale_name);
        tracing::debug!(locale = %locale_name, url = %url, "Fetching locale data");

        let payload = self.transport.get(&url, &[], RequestOptions::unauthenticated()).await?;
        let serialized = serde_json::to_string(&payload)?;
        self.store.set(&self.storage_key(locale_name), &serialized).await?;

        Ok(TranslationTable::from_value(&payload, &self.settings.key_separator))
    }

    /// Read access to the loaded table
    fn read_loaded(&self) -> RwLockReadGuard<'_, Option<LoadedLocale>> {
        self.loaded.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Swap the loaded table in one step
    fn replace_loaded(&self, loaded: Option<LoadedLocale>) {
        *self.loaded.write().unwrap_or_else(PoisonError::into_inner) = loaded;
    }
}
