//! In-memory translation table

use std::collections::HashMap;

use serde_json::Value;

/// Key to localized string mapping for one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    /// Flattened translation key map (e.g., "common.hello" -> "Hello").
    entries: HashMap<String, String>,
}

impl TranslationTable {
    /// Build a table from a fetched payload.
    ///
    /// Nested objects are flattened with `separator`; a payload that is not an
    /// object or array yields an empty table.
    #[must_use]
    pub fn from_value(value: &Value, separator: &str) -> Self {
        Self { entries: flatten_json(value, separator) }
    }

    /// Parse a table previously written to storage.
    ///
    /// Any JSON value other than `null` is accepted and built exactly as
    /// [`Self::from_value`] builds a fetched payload, so whatever a fetch
    /// cached is reused by the next session. Returns `None` for `null` or
    /// unparsable text, which callers treat the same as a cache miss.
    #[must_use]
    pub fn from_cached(text: &str, separator: &str) -> Option<Self> {
        match serde_json::from_str::<Value>(text) {
            Ok(Value::Null) => None,
            Ok(value) => Some(Self::from_value(&value, separator)),
            Err(e) => {
                tracing::debug!("Cached locale data is not valid JSON: {e}");
                None
            }
        }
    }

    /// Localized string stored under `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of lookup keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when the table has no lookup keys
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<HashMap<String, String>> for TranslationTable {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

/// Lookup keys for every leaf of a locale payload.
///
/// Object members are joined to their parent key with `separator` and array
/// elements get an `[index]` suffix. Strings are kept as-is; numbers and
/// booleans keep their JSON text. A bare scalar payload has no key and
/// produces nothing.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use locale_service::translation::flatten_json;
///
/// let payload = json!({
///     "title": "Inställningar",
///     "buttons": { "save": "Spara", "retry": ["Försök igen"] }
/// });
///
/// let keys = flatten_json(&payload, ".");
/// assert_eq!(keys.get("title").map(String::as_str), Some("Inställningar"));
/// assert_eq!(keys.get("buttons.save").map(String::as_str), Some("Spara"));
/// assert_eq!(keys.get("buttons.retry[0]").map(String::as_str), Some("Försök igen"));
/// ```
#[must_use]
pub fn flatten_json(payload: &Value, separator: &str) -> HashMap<String, String> {
    let mut entries = HashMap::new();
    insert_leaves(payload, separator, None, &mut entries);
    entries
}

/// Walk `value`, inserting each leaf under the key built from `parent`.
fn insert_leaves(
    value: &Value,
    separator: &str,
    parent: Option<&str>,
    entries: &mut HashMap<String, String>,
) {
    match (value, parent) {
        (Value::Object(members), _) => {
            for (name, member) in members {
                let key =
                    parent.map_or_else(|| name.clone(), |p| format!("{p}{separator}{name}"));
                insert_leaves(member, separator, Some(&key), entries);
            }
        }
        (Value::Array(elements), _) => {
            for (index, element) in elements.iter().enumerate() {
                let key = format!("{}[{index}]", parent.unwrap_or_default());
                insert_leaves(element, separator, Some(&key), entries);
            }
        }
        (_, None) => {}
        (Value::String(text), Some(key)) => {
            entries.insert(key.to_string(), text.clone());
        }
        (scalar, Some(key)) => {
            entries.insert(key.to_string(), scalar.to_string());
        }
    }
}
