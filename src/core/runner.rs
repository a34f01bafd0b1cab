use crate::adapters::HttpVendorClient;
use crate::config::{FileConfig, SearchConfig};
use crate::core::availability::check_availability;
use crate::core::context::SearchContext;
use crate::core::discovery::discover_services;
use crate::domain::model::AvailableService;
use crate::domain::ports::VendorClient;
use crate::utils::error::{Result, ScoutError};
use serde::Serialize;
use std::fmt;
use std::path::Path;

/// 查詢結果：確認有空位的班次
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RunReport {
    pub services: Vec<AvailableService>,
}

impl RunReport {
    /// 攤平成座位代碼列表
    pub fn seat_codes(&self) -> Vec<String> {
        self.services
            .iter()
            .flat_map(|service| service.seats.iter().cloned())
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// How a run ended. Every variant is a normal termination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    InvalidConfig(String),
    NoServices,
    NoSeats,
    Found(RunReport),
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::InvalidConfig(_) => write!(f, "invalid config"),
            RunOutcome::NoServices => write!(f, "services data not found"),
            RunOutcome::NoSeats => write!(f, "seats not found"),
            RunOutcome::Found(report) => match report.to_json() {
                Ok(json) => write!(f, "{}", json),
                Err(_) => write!(f, "{:?}", report.services),
            },
        }
    }
}

/// 載入並驗證設定檔。`endpoint` 有值時覆蓋設定檔中的端點。
pub fn load_search_config<P: AsRef<Path>>(
    path: P,
    endpoint: Option<&str>,
) -> Result<SearchConfig> {
    let mut raw = FileConfig::from_file(path)?;
    if let Some(endpoint) = endpoint {
        raw.endpoint = Some(endpoint.to_string());
    }
    SearchConfig::try_from(raw)
}

pub struct SeatScout<V: VendorClient> {
    client: V,
}

impl<V: VendorClient> SeatScout<V> {
    pub fn new(client: V) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &V {
        &self.client
    }

    pub async fn run(&self, config: SearchConfig) -> RunOutcome {
        let ctx = SearchContext::new(config);
        tracing::debug!(
            "Time window {} - {}",
            ctx.window.first.format("%H:%M"),
            ctx.window.last.format("%H:%M")
        );
        self.run_with_context(&ctx).await
    }

    pub async fn run_with_context(&self, ctx: &SearchContext) -> RunOutcome {
        run_pipeline(&self.client, ctx).await
    }
}

impl SeatScout<HttpVendorClient> {
    /// 從設定檔開始跑完整流程。請求一律送往設定檔中的 `endpoint`。
    pub async fn run_from_file<P: AsRef<Path>>(&self, path: P) -> RunOutcome {
        let path = path.as_ref();
        tracing::info!("Loading config from {}", path.display());

        let config = match load_search_config(path, None) {
            Ok(config) => config,
            Err(e) => return rejected_config(e),
        };

        if config.endpoint == self.client.endpoint() {
            return self.run(config).await;
        }

        tracing::info!(
            "Using endpoint {} from config instead of {}",
            config.endpoint,
            self.client.endpoint()
        );
        let client = self.client.with_endpoint(config.endpoint.clone());
        let ctx = SearchContext::new(config);
        run_pipeline(&client, &ctx).await
    }
}

/// 把載入設定時的錯誤轉成 `InvalidConfig`
pub fn rejected_config(e: ScoutError) -> RunOutcome {
    if e.is_config_error() {
        tracing::error!("❌ Configuration rejected: {}", e);
    } else {
        tracing::error!("❌ Could not read configuration: {}", e);
    }
    RunOutcome::InvalidConfig(e.to_string())
}

async fn run_pipeline<C>(client: &C, ctx: &SearchContext) -> RunOutcome
where
    C: VendorClient + ?Sized,
{
    tracing::info!(
        "🔍 Searching services from {} to {} destination(s) on {}",
        ctx.config.city_from,
        ctx.config.cities_to.len(),
        ctx.config.date
    );
    let candidates = discover_services(client, ctx).await;
    if candidates.is_empty() {
        tracing::info!("No candidate services found");
        return RunOutcome::NoServices;
    }
    tracing::info!("Found {} candidate services", candidates.len());

    let services = check_availability(client, ctx, &candidates).await;
    if services.is_empty() {
        tracing::info!("No requested seats available");
        return RunOutcome::NoSeats;
    }

    tracing::info!("✅ {} services with free seats", services.len());
    RunOutcome::Found(RunReport { services })
}
