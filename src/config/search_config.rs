use crate::config::file_config::FileConfig;
use crate::domain::model::SeatSet;
use crate::utils::error::{Result, ScoutError};
use crate::utils::validation::{validate_clock_time, Validate};
use chrono::NaiveTime;
use std::collections::BTreeMap;

/// 驗證過、型別化的查詢設定。建立後在整個執行期間唯讀。
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    pub city_from: String,
    pub cities_to: Vec<String>,
    pub date: String,
    pub first_time: NaiveTime,
    pub last_time: NaiveTime,
    pub types: BTreeMap<String, SeatSet>,
    pub endpoint: String,
}

impl SearchConfig {
    /// 依班次類型標籤查詢要求的座位代碼
    pub fn seats_for(&self, label: &str) -> Option<&SeatSet> {
        self.types.get(label).filter(|seats| !seats.is_empty())
    }
}

impl TryFrom<FileConfig> for SearchConfig {
    type Error = ScoutError;

    fn try_from(raw: FileConfig) -> Result<Self> {
        raw.validate()?;

        let endpoint = raw.endpoint().to_string();
        let first_time =
            validate_clock_time("first_time", raw.first_time.as_deref().unwrap_or_default())?;
        let last_time =
            validate_clock_time("last_time", raw.last_time.as_deref().unwrap_or_default())?;

        let cities_to = raw
            .cities_to
            .unwrap_or_default()
            .split(';')
            .map(str::trim)
            .filter(|city| !city.is_empty())
            .map(String::from)
            .collect();

        let types = raw
            .types
            .unwrap_or_default()
            .into_iter()
            .map(|(label, codes)| (label.trim().to_string(), SeatSet::parse(&codes)))
            .collect();

        Ok(Self {
            city_from: raw.city_from.unwrap_or_default(),
            cities_to,
            date: raw.date.unwrap_or_default(),
            first_time,
            last_time,
            types,
            endpoint,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_config_from_file_config() {
        let raw = FileConfig::from_json_str(
            r#"{
                "city_from": "MONTEVIDEO",
                "cities_to": "SALTO; PAYSANDU;",
                "date": "18/10/2026",
                "first_time": "08:00",
                "last_time": "09:15",
                "types": {"Executive": "E1;E2"},
                "endpoint": "http://127.0.0.1:9/cgi-bin/br5.cgi"
            }"#,
        )
        .unwrap();

        let config = SearchConfig::try_from(raw).unwrap();
        assert_eq!(config.cities_to, vec!["SALTO", "PAYSANDU"]);
        assert_eq!(config.first_time, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(config.last_time, NaiveTime::from_hms_opt(9, 15, 0).unwrap());
        assert_eq!(config.seats_for("Executive").unwrap().codes(), &["E1", "E2"]);
        assert!(config.seats_for("Comun").is_none());
        assert_eq!(config.endpoint, "http://127.0.0.1:9/cgi-bin/br5.cgi");
    }

    #[test]
    fn test_invalid_file_config_is_rejected() {
        let raw = FileConfig {
            city_from: Some("MONTEVIDEO".to_string()),
            ..FileConfig::default()
        };
        assert!(SearchConfig::try_from(raw).is_err());
    }
}
