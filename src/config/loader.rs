//! 設定ファイルの読み込み関数

use std::path::Path;

use super::{
    ConfigError,
    LocaleSettings,
};

/// 設定ファイルを読み込む
///
/// # Arguments
/// * `config_path` - JSON 設定ファイルのパス
///
/// # Returns
/// - `Ok(Some(settings))`: 設定ファイルが見つかり、読み込みとバリデーションに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: 読み込み、パース、またはバリデーションのエラー
pub fn load_from_file(config_path: &Path) -> Result<Option<LocaleSettings>, ConfigError> {
    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(config_path)?;
    let settings: LocaleSettings = serde_json::from_str(&content)?;
    settings.validate().map_err(ConfigError::ValidationErrors)?;

    Ok(Some(settings))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    /// `load_from_file`: 設定ファイルが存在する場合
    #[rstest]
    fn test_load_from_file_with_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("locale.json");
        fs::write(&path, r#"{"url": "https://cdn.example.com/", "defaultLocaleName": "sv"}"#)
            .unwrap();

        let settings = load_from_file(&path).unwrap().unwrap();

        assert_eq!(settings.url, "https://cdn.example.com/");
        assert_eq!(settings.default_locale_name, "sv");
    }

    /// `load_from_file`: 設定ファイルが存在しない場合
    #[rstest]
    fn test_load_from_file_no_config_file() {
        let temp_dir = TempDir::new().unwrap();

        let result = load_from_file(&temp_dir.path().join("locale.json"));

        assert!(result.unwrap().is_none());
    }

    /// `load_from_file`: JSON パースエラー
    #[rstest]
    fn test_load_from_file_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("locale.json");
        fs::write(&path, "invalid json").unwrap();

        let result = load_from_file(&path);

        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    /// `load_from_file`: バリデーションエラー
    #[rstest]
    fn test_load_from_file_missing_url() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("locale.json");
        fs::write(&path, r#"{"defaultLocaleName": "sv"}"#).unwrap();

        let result = load_from_file(&path);

        assert!(matches!(result, Err(ConfigError::ValidationErrors(errors)) if errors.len() == 1));
    }
}
