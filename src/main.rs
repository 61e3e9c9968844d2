use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, middleware::Logger, web};
use anyhow::{Context, Result};

use shiftcare::middleware::RequestId;
use shiftcare::{AppState, Config, ShiftStore, StoreSeed, routes};

#[get("/")]
async fn hello() -> impl Responder {
    HttpResponse::Ok().body("ShiftCare API v1.0")
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now()
    }))
}

#[actix_web::main]
async fn main() -> Result<()> {
    // Load configuration (also reads .env)
    let config = Config::from_env()?;

    // Initialize logger; RUST_LOG still wins over the environment default
    let default_filter = if config.is_production() { "info" } else { "debug" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    log::info!(
        "Starting ShiftCare API server (environment: {})",
        config.environment
    );

    let seed = StoreSeed::from_path(&config.seed_path)
        .with_context(|| format!("loading session seed from {}", config.seed_path))?;
    let mut store = ShiftStore::from_seed(seed);
    if let Some(date) = config.reference_date {
        log::info!("Using reference date {}", date);
        store = store.with_reference_date(date);
    }
    log::info!(
        "Session seeded with {} tracked months, {} swap requests, {} open offers",
        store.tracked_months().len(),
        store.swap_requests().len(),
        store.open_offers().len()
    );

    let app_state = web::Data::new(AppState::new(store, config.activity_capacity));
    let config_data = web::Data::new(config.clone());

    let server_address = config.server_address();
    log::info!("Server starting on http://{}", server_address);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .app_data(config_data.clone())
            .wrap(
                Cors::default()
                    .allowed_origin(&config.client_base_url)
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec!["Content-Type", "Accept", "X-Correlation-ID"])
                    .max_age(3600),
            )
            .wrap(RequestId)
            .wrap(Logger::new(
                r#"%a "%r" %s %b "%{User-Agent}i" %T correlation_id=%{x-correlation-id}o"#,
            ))
            .service(hello)
            .service(health)
            .configure(routes::configure)
    })
    .bind(&server_address)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
