#![allow(dead_code)]

use actix_web::dev::ServiceResponse;
use actix_web::{test, web};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::Value;

use shiftcare::{AppState, Config, ShiftStore, StoreSeed, routes};

pub const SEED_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/seed.json");

pub fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 15).expect("valid reference date")
}

/// Store built from the bundled sample seed, pinned to the sample "today".
pub fn seeded_store() -> ShiftStore {
    let seed = StoreSeed::from_path(SEED_PATH).expect("bundled seed should load");
    ShiftStore::from_seed(seed).with_reference_date(reference_date())
}

// Test application wrapper
pub struct TestApp {
    pub state: web::Data<AppState>,
    pub config: Config,
}

impl TestApp {
    /// Must be called inside an actix test runtime.
    pub fn new() -> Self {
        let config = Config::test_config();
        let state = web::Data::new(AppState::new(seeded_store(), config.activity_capacity));
        TestApp { state, config }
    }

    /// Registers app data and routes; use with `App::new().configure(..)`.
    pub fn configure(&self) -> impl FnOnce(&mut web::ServiceConfig) {
        let state = self.state.clone();
        let config = web::Data::new(self.config.clone());
        move |cfg| {
            cfg.app_data(state).app_data(config);
            routes::configure(cfg);
        }
    }
}

pub async fn read_data<T: DeserializeOwned>(resp: ServiceResponse) -> T {
    let body = test::read_body(resp).await;
    let envelope: Value = serde_json::from_slice(&body).expect("Response should be valid JSON");
    assert_eq!(envelope["success"], true, "expected success envelope: {}", envelope);
    serde_json::from_value(envelope["data"].clone()).expect("Response data should deserialize")
}

pub async fn read_error(resp: ServiceResponse) -> String {
    let body = test::read_body(resp).await;
    let envelope: Value = serde_json::from_slice(&body).expect("Response should be valid JSON");
    assert_eq!(envelope["success"], false);
    envelope["message"].as_str().unwrap_or_default().to_string()
}
