use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::AppState;
use crate::config::Config;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;
use crate::models::MonthKey;

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// Get dashboard statistics, defaulting to the session's current month
pub async fn get_dashboard_stats(
    state: web::Data<AppState>,
    config: web::Data<Config>,
    query: web::Query<StatsQuery>,
) -> Result<HttpResponse, AppError> {
    let store = state.store()?;
    let current = MonthKey::of(store.today());

    let year = query.year.unwrap_or(current.year);
    let month = query.month.unwrap_or(current.month);
    let key = MonthKey::new(year, month)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid month: {}", month)))?;

    let stats = store.dashboard_stats(key, config.monthly_target_hours);
    Ok(HttpResponse::Ok().json(ApiResponse::success(stats)))
}
