use crate::utils::error::{Result, ScoutError};
use chrono::NaiveTime;
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn clock_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d{2}):(\d{2})$").expect("clock pattern is valid"))
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ScoutError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ScoutError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ScoutError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| ScoutError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScoutError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(ScoutError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// 解析 "HH:MM" 格式的時間。兩組兩位數字，小時 0-23、分鐘 0-59。
pub fn validate_clock_time(field_name: &str, value: &str) -> Result<NaiveTime> {
    let invalid = |reason: &str| ScoutError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let caps = clock_pattern()
        .captures(value)
        .ok_or_else(|| invalid("Expected a clock time formatted as HH:MM"))?;

    let hour: u32 = caps[1]
        .parse()
        .map_err(|_| invalid("Hour is not a number"))?;
    let minute: u32 = caps[2]
        .parse()
        .map_err(|_| invalid("Minute is not a number"))?;

    validate_range(&format!("{}.hour", field_name), hour, 0, 23)?;
    validate_range(&format!("{}.minute", field_name), minute, 0, 59)?;

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| invalid("Not a valid time of day"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("endpoint", "https://example.com/cgi-bin/br5.cgi").is_ok());
        assert!(validate_url("endpoint", "http://example.com").is_ok());
        assert!(validate_url("endpoint", "").is_err());
        assert!(validate_url("endpoint", "invalid-url").is_err());
        assert!(validate_url("endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_clock_time() {
        let time = validate_clock_time("first_time", "08:00").unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert!(validate_clock_time("last_time", "23:59").is_ok());
        assert!(validate_clock_time("last_time", "00:00").is_ok());
    }

    #[test]
    fn test_validate_clock_time_rejects_malformed_values() {
        for bad in ["", "8:00", "0800", "08:0", "ab:cd", "08:00:00", " 08:00", "08-00"] {
            assert!(
                validate_clock_time("first_time", bad).is_err(),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_validate_clock_time_rejects_out_of_range() {
        assert!(validate_clock_time("first_time", "24:00").is_err());
        assert!(validate_clock_time("first_time", "12:60").is_err());
        assert!(validate_clock_time("first_time", "99:99").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("Montevideo".to_string());
        let missing: Option<String> = None;
        assert_eq!(
            validate_required_field("city_from", &present).unwrap(),
            "Montevideo"
        );
        assert!(matches!(
            validate_required_field("city_from", &missing),
            Err(ScoutError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("date", "18/10/2026").is_ok());
        assert!(validate_non_empty_string("date", "   ").is_err());
    }
}
