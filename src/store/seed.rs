use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;

use crate::models::{MonthKey, Notification, Shift, SwapRequest, User};

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed seed data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Month {month} of {year} is out of range")]
    InvalidMonth { year: i32, month: u32 },

    #[error("Month {0} is seeded more than once")]
    DuplicateMonth(MonthKey),

    #[error("Shift {shift_id} dated {date} does not belong to month {month}")]
    MisplacedShift {
        shift_id: String,
        date: chrono::NaiveDate,
        month: MonthKey,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSeed {
    pub year: i32,
    pub month: u32,
    #[serde(default)]
    pub shifts: Vec<Shift>,
}

/// Initial state handed to the store by the sample-data provider.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSeed {
    pub current_user: User,
    #[serde(default)]
    pub today_shift: Option<Shift>,
    #[serde(default)]
    pub next_shift: Option<Shift>,
    #[serde(default)]
    pub months: Vec<MonthSeed>,
    #[serde(default)]
    pub swap_requests: Vec<SwapRequest>,
    #[serde(default)]
    pub open_offers: Vec<SwapRequest>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    #[serde(default)]
    pub accepted_swaps: Vec<SwapRequest>,
    #[serde(default)]
    pub static_offer_times: HashMap<String, String>,
}

impl StoreSeed {
    pub fn empty(current_user: User) -> Self {
        StoreSeed {
            current_user,
            today_shift: None,
            next_shift: None,
            months: Vec::new(),
            swap_requests: Vec::new(),
            open_offers: Vec::new(),
            notifications: Vec::new(),
            accepted_swaps: Vec::new(),
            static_offer_times: HashMap::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let seed: StoreSeed = serde_json::from_str(json)?;
        seed.validate()?;
        Ok(seed)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), SeedError> {
        let mut seen = HashSet::new();
        for month in &self.months {
            let key = month.key()?;
            if !seen.insert(key) {
                return Err(SeedError::DuplicateMonth(key));
            }
            if let Some(shift) = month.shifts.iter().find(|s| s.month_key() != key) {
                return Err(SeedError::MisplacedShift {
                    shift_id: shift.id.clone(),
                    date: shift.date,
                    month: key,
                });
            }
        }
        Ok(())
    }
}

impl MonthSeed {
    pub fn key(&self) -> Result<MonthKey, SeedError> {
        MonthKey::new(self.year, self.month).ok_or(SeedError::InvalidMonth {
            year: self.year,
            month: self.month,
        })
    }
}
