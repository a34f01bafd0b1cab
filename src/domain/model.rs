use serde::{Deserialize, Serialize};

/// 以 ";" 分隔的座位代碼集合，保留設定檔中的順序
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeatSet(Vec<String>);

impl SeatSet {
    pub fn parse(raw: &str) -> Self {
        let codes = raw
            .split(';')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(String::from)
            .collect();
        Self(codes)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.0.iter().any(|c| c == code)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn codes(&self) -> &[String] {
        &self.0
    }
}

/// A row of the vendor's service table, reduced to what the pipeline reads.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ServiceRow {
    pub cells: Vec<String>,
    pub control: Option<FormControl>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormControl {
    pub name: Option<String>,
    pub value: Option<String>,
}

/// 第一階段找到、尚未確認有空位的班次
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateService {
    pub city_to: String,
    pub time: String,
    pub seats: SeatSet,
    pub service: String,
}

/// 確認有空位的班次，`seats` 只保留實際空著的座位代碼
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableService {
    pub city_to: String,
    pub time: String,
    pub seats: Vec<String>,
    pub service: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_set_parse() {
        let seats = SeatSet::parse("A1;A2; B3 ;;");
        assert_eq!(seats.codes(), &["A1", "A2", "B3"]);
        assert!(seats.contains("A2"));
        assert!(seats.contains("B3"));
        assert!(!seats.contains("A"));
        assert!(SeatSet::parse(" ; ").is_empty());
    }
}
