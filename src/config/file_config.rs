use crate::config::DEFAULT_ENDPOINT;
use crate::domain::model::SeatSet;
use crate::utils::error::{Result, ScoutError};
use crate::utils::validation::{
    validate_clock_time, validate_non_empty_string, validate_required_field, validate_url,
    Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// 設定檔的原始內容。所有欄位都是可選的，缺漏由 `validate` 回報。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    pub city_from: Option<String>,
    /// 以 ";" 分隔的目的地城市
    pub cities_to: Option<String>,
    pub date: Option<String>,
    pub first_time: Option<String>,
    pub last_time: Option<String>,
    /// 班次類型標籤 -> 以 ";" 分隔的座位代碼
    pub types: Option<BTreeMap<String, String>>,
    pub endpoint: Option<String>,
}

impl FileConfig {
    /// 從檔案載入設定。副檔名 `.toml` 用 TOML 解析，其餘一律視為 JSON。
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(ScoutError::IoError)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::from_toml_str(&content),
            _ => Self::from_json_str(&content),
        }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| ScoutError::ConfigParseError {
            format: "JSON".to_string(),
            message: e.to_string(),
        })
    }

    /// 從 TOML 字串解析設定，先替換 `${VAR}` 環境變數
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ScoutError::ConfigParseError {
            format: "TOML".to_string(),
            message: e.to_string(),
        })
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ScoutError::ConfigParseError {
            format: "TOML".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("city_from", &self.city_from),
            ("cities_to", &self.cities_to),
            ("date", &self.date),
            ("first_time", &self.first_time),
            ("last_time", &self.last_time),
        ] {
            let value = validate_required_field(field, value)?;
            validate_non_empty_string(field, value)?;
        }

        let types = validate_required_field("types", &self.types)?;
        if types.is_empty() {
            return Err(ScoutError::InvalidConfigValueError {
                field: "types".to_string(),
                value: String::new(),
                reason: "At least one service type must be configured".to_string(),
            });
        }
        let mut labels = BTreeSet::new();
        for (label, codes) in types {
            // 標籤比對時會去掉前後空白
            if label.trim().is_empty() || !labels.insert(label.trim()) {
                return Err(ScoutError::InvalidConfigValueError {
                    field: "types".to_string(),
                    value: label.clone(),
                    reason: "Type labels must be non-blank and unique after trimming".to_string(),
                });
            }
            if SeatSet::parse(codes).is_empty() {
                return Err(ScoutError::InvalidConfigValueError {
                    field: format!("types.{}", label),
                    value: codes.clone(),
                    reason: "Must list at least one seat code".to_string(),
                });
            }
        }

        let cities = self.cities_to.as_deref().unwrap_or_default();
        if cities.split(';').all(|city| city.trim().is_empty()) {
            return Err(ScoutError::InvalidConfigValueError {
                field: "cities_to".to_string(),
                value: cities.to_string(),
                reason: "Must name at least one destination city".to_string(),
            });
        }

        let first =
            validate_clock_time("first_time", self.first_time.as_deref().unwrap_or_default())?;
        let last =
            validate_clock_time("last_time", self.last_time.as_deref().unwrap_or_default())?;
        // 不支援跨午夜的時間窗
        if last < first {
            return Err(ScoutError::InvalidConfigValueError {
                field: "last_time".to_string(),
                value: self.last_time.clone().unwrap_or_default(),
                reason: "Must not be earlier than first_time".to_string(),
            });
        }

        validate_url("endpoint", self.endpoint())?;

        Ok(())
    }
}
