use crate::adapters::html::parse_free_seats;
use crate::core::context::SearchContext;
use crate::domain::model::{AvailableService, CandidateService};
use crate::domain::ports::{SeatQuery, VendorClient};

/// 逐一查詢候選班次的座位，只留下至少有一個要求座位空著的班次
pub async fn check_availability<V>(
    client: &V,
    ctx: &SearchContext,
    candidates: &[CandidateService],
) -> Vec<AvailableService>
where
    V: VendorClient + ?Sized,
{
    let mut available = Vec::new();

    for candidate in candidates {
        let query = SeatQuery {
            city_from: ctx.config.city_from.clone(),
            city_to: candidate.city_to.clone(),
            date: ctx.config.date.clone(),
            service: candidate.service.clone(),
        };

        let html = match client.service_details(&query).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(
                    "⚠️ Seat lookup for service {} to {} failed, skipping: {}",
                    candidate.service,
                    candidate.city_to,
                    e
                );
                continue;
            }
        };

        let free = parse_free_seats(&html);
        match confirm_seats(candidate, &free) {
            Some(service) => {
                tracing::info!(
                    "🎫 {} at {}: {} free seat(s)",
                    service.city_to,
                    service.time,
                    service.seats.len()
                );
                available.push(service);
            }
            None => tracing::debug!(
                "No requested seats free on service {} to {}",
                candidate.service,
                candidate.city_to
            ),
        }
    }

    available
}

/// Keeps the free cells that the candidate asked for, in page order.
pub fn confirm_seats(candidate: &CandidateService, free: &[String]) -> Option<AvailableService> {
    let seats: Vec<String> = free
        .iter()
        .filter(|code| candidate.seats.contains(code))
        .cloned()
        .collect();

    if seats.is_empty() {
        return None;
    }

    Some(AvailableService {
        city_to: candidate.city_to.clone(),
        time: candidate.time.clone(),
        seats,
        service: candidate.service.clone(),
    })
}
