use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::AppState;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub year: i32,
    pub month: u32,
}

/// Shifts for one month; months that are not tracked come back empty
pub async fn get_shifts(
    state: web::Data<AppState>,
    query: web::Query<MonthQuery>,
) -> Result<HttpResponse, AppError> {
    let store = state.store()?;
    let shifts = store.shifts_for_month(query.month, query.year).to_vec();
    Ok(HttpResponse::Ok().json(ApiResponse::success(shifts)))
}

pub async fn get_tracked_months(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let store = state.store()?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(store.tracked_months())))
}

pub async fn get_today_shift(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let store = state.store()?;
    let shift = store
        .today_shift()
        .cloned()
        .ok_or_else(|| AppError::NotFound("No shift today".to_string()))?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(shift)))
}

pub async fn get_next_shift(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let store = state.store()?;
    let shift = store
        .next_shift()
        .cloned()
        .ok_or_else(|| AppError::NotFound("No upcoming shift".to_string()))?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(shift)))
}
