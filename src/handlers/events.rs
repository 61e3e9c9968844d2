use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::store::StoreEnvelope;

#[derive(Debug, Deserialize)]
pub struct EventsQuery {
    pub since: Option<u64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsPage {
    pub last_sequence: u64,
    pub shifts_revision: u64,
    pub events: Vec<StoreEnvelope>,
}

/// Poll for store changes after a known sequence number
pub async fn get_events(
    state: web::Data<AppState>,
    query: web::Query<EventsQuery>,
) -> Result<HttpResponse, AppError> {
    let store = state.store()?;
    let page = EventsPage {
        last_sequence: store.last_event_sequence(),
        shifts_revision: store.shifts_revision(),
        events: store.events_since(query.since.unwrap_or(0)),
    };
    Ok(HttpResponse::Ok().json(ApiResponse::success(page)))
}

pub async fn get_activity(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let entries = state
        .activity_logger
        .recent()
        .ok_or_else(|| AppError::internal_server_error_message("activity feed unavailable"))?;

    let message = format!("{} recent entries", entries.len());
    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(entries, &message)))
}
