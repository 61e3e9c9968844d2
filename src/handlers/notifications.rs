use actix_web::{HttpResponse, web};

use crate::AppState;
use crate::error::AppError;
use crate::handlers::shared::ApiResponse;

pub async fn get_notifications(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let store = state.store()?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(store.notifications().to_vec())))
}

pub async fn get_current_user(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let store = state.store()?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(store.current_user().clone())))
}
