use crate::utils::error::Result;
use async_trait::async_trait;

/// 查詢班次的表單參數
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryQuery {
    pub city_from: String,
    pub city_to: String,
    pub date: String,
}

impl DiscoveryQuery {
    /// Form fields in the order the vendor's search form posts them.
    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("txt_desde", self.city_from.as_str()),
            ("fecha", self.date.as_str()),
            ("fecha_vuelta", self.date.as_str()),
            ("Ida", "soloida"),
            ("Submit2", ""),
            ("txt_hasta", self.city_to.as_str()),
        ]
    }
}

/// 查詢單一班次座位的表單參數
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatQuery {
    pub city_from: String,
    pub city_to: String,
    pub date: String,
    pub service: String,
}

impl SeatQuery {
    pub fn form_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("desde", self.city_from.as_str()),
            ("fecha", self.date.as_str()),
            ("fecha_vuelta", self.date.as_str()),
            ("op", "servicio"),
            ("enviar", ""),
            ("hasta", self.city_to.as_str()),
            ("srv_ida", self.service.as_str()),
        ]
    }
}

/// The vendor's booking form. Both calls return the raw HTML page.
#[async_trait]
pub trait VendorClient: Send + Sync {
    async fn search_services(&self, query: &DiscoveryQuery) -> Result<String>;
    async fn service_details(&self, query: &SeatQuery) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discovery_form_fields_duplicate_date() {
        let query = DiscoveryQuery {
            city_from: "MONTEVIDEO".to_string(),
            city_to: "SALTO".to_string(),
            date: "18/10/2026".to_string(),
        };
        let fields = query.form_fields();
        assert!(fields.contains(&("fecha", "18/10/2026")));
        assert!(fields.contains(&("fecha_vuelta", "18/10/2026")));
        assert!(fields.contains(&("Ida", "soloida")));
        assert!(fields.contains(&("txt_hasta", "SALTO")));
    }

    #[test]
    fn test_seat_form_fields_carry_service_id() {
        let query = SeatQuery {
            city_from: "MONTEVIDEO".to_string(),
            city_to: "SALTO".to_string(),
            date: "18/10/2026".to_string(),
            service: "1234|5".to_string(),
        };
        let fields = query.form_fields();
        assert!(fields.contains(&("op", "servicio")));
        assert!(fields.contains(&("hasta", "SALTO")));
        assert!(fields.contains(&("srv_ida", "1234|5")));
        assert_eq!(fields.len(), 7);
    }
}
