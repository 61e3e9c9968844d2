pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

#[cfg(test)]
pub mod test_utils;

use std::sync::MutexGuard;

pub use config::Config;
pub use error::AppError;
pub use services::ActivityLogger;
pub use store::{SharedStore, ShiftStore, StoreSeed};

pub struct AppState {
    pub store: SharedStore,
    pub activity_logger: ActivityLogger,
}

impl AppState {
    /// Wires an activity logger to the store. Must be called inside a Tokio runtime.
    pub fn new(store: ShiftStore, activity_capacity: usize) -> Self {
        let activity_logger = ActivityLogger::new(activity_capacity);
        activity_logger.spawn(store.subscribe());

        AppState {
            store: store.into_shared(),
            activity_logger,
        }
    }

    pub fn store(&self) -> Result<MutexGuard<'_, ShiftStore>, AppError> {
        self.store.lock().map_err(|_| {
            log::error!("Store lock poisoned");
            AppError::StoreUnavailable
        })
    }
}
