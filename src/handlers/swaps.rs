use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use crate::AppState;
use crate::error::AppError;
use crate::handlers::shared::{ApiResponse, MutationResponse};
use crate::middleware::RequestIdExt;
use crate::models::{NewSwapRequest, SwapStatus};

#[derive(Debug, Deserialize)]
pub struct SwapQuery {
    pub status: Option<String>,
}

/// List swap requests, optionally narrowed to the `new` or `pending` view
pub async fn get_swap_requests(
    state: web::Data<AppState>,
    query: web::Query<SwapQuery>,
) -> Result<HttpResponse, AppError> {
    let store = state.store()?;

    let requests = match query.status.as_deref() {
        None => store.swap_requests().to_vec(),
        Some(raw) => match raw.parse::<SwapStatus>() {
            Ok(SwapStatus::New) => store.new_swap_requests(),
            Ok(SwapStatus::Pending) => store.pending_swap_requests(),
            _ => {
                return Err(AppError::BadRequest(format!(
                    "Unsupported status filter: {}",
                    raw
                )));
            }
        },
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(requests)))
}

/// Get a swap request or open offer by ID
pub async fn get_swap_request(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let swap_id = path.into_inner();
    let store = state.store()?;

    let request = store
        .find_swap(&swap_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Swap request {}", swap_id)))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(request)))
}

/// Raise a new swap request for the current user
pub async fn create_swap_request(
    state: web::Data<AppState>,
    input: web::Json<NewSwapRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let input = input.into_inner();
    if input.requested_shift_id.trim().is_empty() || input.offered_shift_id.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Both requested and offered shift ids are required".to_string(),
        ));
    }

    let mut store = state.store()?;
    let created = store.create_swap_request(input);

    log::info!(
        "[{}] Swap request {} created",
        req.correlation_id().unwrap_or_default(),
        created.id
    );

    Ok(HttpResponse::Created().json(ApiResponse::success(created)))
}

/// Accept a swap request or open offer; repeating the call is a no-op
pub async fn accept_swap(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let swap_id = path.into_inner();
    let mut store = state.store()?;

    let events = store
        .accept_by_id(&swap_id)
        .ok_or_else(|| AppError::NotFound(format!("Swap request {}", swap_id)))?;

    log::info!(
        "[{}] Accept swap {}: {}",
        req.correlation_id().unwrap_or_default(),
        swap_id,
        if events.is_empty() { "already accepted" } else { "applied" }
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(MutationResponse {
        applied: !events.is_empty(),
        events,
        accepted_swaps: store.accepted_swaps().to_vec(),
        shifts_revision: store.shifts_revision(),
    })))
}

/// Swaps accepted during this session, including the seeded ones
pub async fn get_accepted_swaps(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let store = state.store()?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(store.accepted_swaps().to_vec())))
}
