use crate::domain::ports::{DiscoveryQuery, SeatQuery, VendorClient};
use crate::utils::error::{Result, ScoutError};
use async_trait::async_trait;
use reqwest::Client;

/// 以表單 POST 呼叫業者訂票頁面的 HTTP 客戶端
#[derive(Debug, Clone)]
pub struct HttpVendorClient {
    client: Client,
    endpoint: String,
}

impl HttpVendorClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 指向另一個端點，沿用同一個連線池
    pub fn with_endpoint(&self, endpoint: impl Into<String>) -> Self {
        Self {
            client: self.client.clone(),
            endpoint: endpoint.into(),
        }
    }

    async fn post_form(&self, fields: &[(&str, &str)]) -> Result<String> {
        tracing::debug!("POST {} with {} form fields", self.endpoint, fields.len());
        let response = self.client.post(&self.endpoint).form(fields).send().await?;

        let status = response.status();
        tracing::debug!("Vendor response status: {}", status);
        if !status.is_success() {
            return Err(ScoutError::VendorError {
                message: format!("{} returned {}", self.endpoint, status),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl VendorClient for HttpVendorClient {
    async fn search_services(&self, query: &DiscoveryQuery) -> Result<String> {
        self.post_form(&query.form_fields()).await
    }

    async fn service_details(&self, query: &SeatQuery) -> Result<String> {
        self.post_form(&query.form_fields()).await
    }
}
