use actix_web::{HttpRequest, HttpResponse, web};
use serde::Serialize;

use crate::AppState;
use crate::error::AppError;
use crate::handlers::shared::{ApiResponse, MutationResponse};
use crate::middleware::RequestIdExt;
use crate::models::StaticOfferAcceptance;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticOfferStatus {
    pub doctor_name: String,
    pub accepted: bool,
}

pub async fn get_open_offers(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let store = state.store()?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(store.open_offers().to_vec())))
}

/// Accept a fixed offer identified by the offering doctor's name
pub async fn accept_static_offer(
    state: web::Data<AppState>,
    input: web::Json<StaticOfferAcceptance>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let input = input.into_inner();
    if input.doctor_name.trim().is_empty() {
        return Err(AppError::BadRequest("Doctor name is required".to_string()));
    }

    let mut store = state.store()?;
    let events = store.accept_static_swap_offer(&input.doctor_name, &input.date, &input.department);

    log::info!(
        "[{}] Accept static offer from {}: {}",
        req.correlation_id().unwrap_or_default(),
        input.doctor_name,
        if events.is_empty() { "already accepted" } else { "applied" }
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(MutationResponse {
        applied: !events.is_empty(),
        events,
        accepted_swaps: store.accepted_swaps().to_vec(),
        shifts_revision: store.shifts_revision(),
    })))
}

pub async fn get_static_offer_status(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let doctor_name = path.into_inner();
    let store = state.store()?;
    let accepted = store.is_static_offer_accepted(&doctor_name);

    Ok(HttpResponse::Ok().json(ApiResponse::success(StaticOfferStatus {
        doctor_name,
        accepted,
    })))
}
