//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::normalizer::Normalizer;

/// 설정 로드/검증 에러
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 읽기/쓰기 실패
    IoError(std::io::Error),
    /// JSON 파싱/직렬화 실패
    ParseError(String),
    /// 설정 형식 오류
    FormatError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "파일 입출력 오류: {}", e),
            ConfigError::ParseError(s) => write!(f, "JSON 파싱 오류: {}", s),
            ConfigError::FormatError(s) => write!(f, "설정 형식 오류: {}", s),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

/// 정규화 설정
///
/// ```json
/// { "overrides": { "０": "零", "〜": "~" } }
/// ```
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// 기본 치환 테이블 위에 겹칠 사용자 테이블 (키는 한 글자)
    #[serde(default)]
    pub overrides: HashMap<String, String>,
}

impl NormalizerConfig {
    /// 사용자 테이블을 문자 키로 변환
    /// 키가 정확히 한 글자가 아니면 에러
    pub fn override_map(&self) -> Result<HashMap<char, String>, ConfigError> {
        self.overrides
            .iter()
            .map(|(key, value)| parse_key(key).map(|c| (c, value.clone())))
            .collect()
    }

    /// 설정으로 정규화기 생성
    pub fn build_normalizer(&self) -> Result<Normalizer, ConfigError> {
        Ok(Normalizer::with_overrides(self.override_map()?))
    }
}

/// 치환 키 파싱 (정확히 한 글자)
pub fn parse_key(key: &str) -> Result<char, ConfigError> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::FormatError(format!(
            "치환 키는 한 글자여야 합니다: {:?}",
            key
        ))),
    }
}

/// 설정 파일 경로: ~/.config/neologdish/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config").join("neologdish").join("config.json")
}

/// 설정 파일 로드
pub fn load_config(path: &Path) -> Result<NormalizerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: NormalizerConfig =
        serde_json::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    log::debug!(
        "설정 로드: {} (치환 항목 {}개)",
        path.display(),
        config.overrides.len()
    );
    Ok(config)
}

/// 기본 경로에서 설정 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config_or_default() -> NormalizerConfig {
    let path = config_path();
    match load_config(&path) {
        Ok(config) => config,
        Err(ConfigError::IoError(_)) => NormalizerConfig::default(),
        Err(e) => {
            log::warn!("설정 파일 무시 ({}): {}", path.display(), e);
            NormalizerConfig::default()
        }
    }
}

/// 설정 파일 저장
pub fn save_config(path: &Path, config: &NormalizerConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json =
        serde_json::to_string_pretty(config).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NormalizerConfig::default();
        assert!(config.overrides.is_empty());
        assert!(config.override_map().unwrap().is_empty());
    }

    #[test]
    fn test_missing_field() {
        let config: NormalizerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, NormalizerConfig::default());
    }

    #[test]
    fn test_override_map() {
        let json = r#"{"overrides": {"０": "零", "あ": "亜"}}"#;
        let config: NormalizerConfig = serde_json::from_str(json).unwrap();
        let map = config.override_map().unwrap();
        assert_eq!(map.get(&'０').map(String::as_str), Some("零"));
        assert_eq!(map.get(&'あ').map(String::as_str), Some("亜"));
    }

    #[test]
    fn test_multi_char_key_rejected() {
        let json = r#"{"overrides": {"ab": "x"}}"#;
        let config: NormalizerConfig = serde_json::from_str(json).unwrap();
        assert!(matches!(
            config.override_map(),
            Err(ConfigError::FormatError(_))
        ));
    }

    #[test]
    fn test_parse_key() {
        assert_eq!(parse_key("ア").unwrap(), 'ア');
        assert!(parse_key("").is_err());
        assert!(parse_key("アイ").is_err());
    }

    #[test]
    fn test_build_normalizer() {
        let json = r#"{"overrides": {"９": "九"}}"#;
        let config: NormalizerConfig = serde_json::from_str(json).unwrap();
        let normalizer = config.build_normalizer().unwrap();
        assert_eq!(normalizer.normalize("８９"), "8九");
    }

    #[test]
    fn test_invalid_json() {
        let dir = std::env::temp_dir().join(format!("neologdish-test-{}", std::process::id()));
        let path = dir.join("broken.json");
        fs::create_dir_all(&dir).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::ParseError(_))));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("neologdish-save-{}", std::process::id()));
        let path = dir.join("nested").join("config.json");
        let mut config = NormalizerConfig::default();
        config.overrides.insert("〜".into(), "~".into());

        save_config(&path, &config).unwrap();
        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded, config);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("neologdish-does-not-exist.json");
        assert!(matches!(load_config(&path), Err(ConfigError::IoError(_))));
    }
}
