use crate::adapters::html::parse_service_rows;
use crate::core::context::SearchContext;
use crate::domain::model::{CandidateService, ServiceRow};
use crate::domain::ports::{DiscoveryQuery, VendorClient};

/// 班次選擇欄位的表單名稱
pub const SERVICE_FIELD: &str = "srv_ida";

const TIME_CELL: usize = 1;
const TYPE_CELL: usize = 5;

/// 依設定的目的地順序查詢班次，回傳符合時間窗與類型的候選班次。
///
/// 某個城市的請求失敗時只記錄警告並略過該城市。
pub async fn discover_services<V>(client: &V, ctx: &SearchContext) -> Vec<CandidateService>
where
    V: VendorClient + ?Sized,
{
    let mut candidates = Vec::new();

    for city in &ctx.config.cities_to {
        let query = DiscoveryQuery {
            city_from: ctx.config.city_from.clone(),
            city_to: city.clone(),
            date: ctx.config.date.clone(),
        };

        let html = match client.search_services(&query).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("⚠️ Service search for {} failed, skipping: {}", city, e);
                continue;
            }
        };

        let rows = parse_service_rows(&html);
        let found = select_candidates(&rows, city, ctx);
        tracing::debug!(
            "{}: {} rows, {} candidate services",
            city,
            rows.len(),
            found.len()
        );
        candidates.extend(found);
    }

    candidates
}

/// 從一個城市的班次列中挑出候選班次，保留頁面順序
pub fn select_candidates(
    rows: &[ServiceRow],
    city: &str,
    ctx: &SearchContext,
) -> Vec<CandidateService> {
    rows.iter()
        .filter_map(|row| candidate_from_row(row, city, ctx))
        .collect()
}

fn candidate_from_row(
    row: &ServiceRow,
    city: &str,
    ctx: &SearchContext,
) -> Option<CandidateService> {
    let control = row.control.as_ref()?;
    if control.name.as_deref() != Some(SERVICE_FIELD) {
        return None;
    }

    let time = row.cells.get(TIME_CELL)?.trim();
    let label = row.cells.get(TYPE_CELL)?.trim();

    let Some(seats) = ctx.config.seats_for(label) else {
        tracing::debug!(
            "Skipping {} service at {}: type {:?} not requested",
            city,
            time,
            label
        );
        return None;
    };
    if !ctx.window.contains_clock(time) {
        tracing::debug!("Skipping {} service at {}: outside time window", city, time);
        return None;
    }

    let Some(service) = control.value.as_deref() else {
        tracing::debug!("Skipping {} service at {}: no service id", city, time);
        return None;
    };

    Some(CandidateService {
        city_to: city.to_string(),
        time: time.to_string(),
        seats: seats.clone(),
        service: service.to_string(),
    })
}
