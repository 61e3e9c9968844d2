use anyhow::Result;
use chrono::NaiveDate;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub client_base_url: String,
    pub seed_path: String,
    pub monthly_target_hours: f64,
    pub reference_date: Option<NaiveDate>,
    pub activity_capacity: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_env_only()
    }

    /// Load configuration from environment variables only (without loading .env files)
    /// This is useful for testing where you want to control the environment directly
    pub fn from_env_only() -> Result<Self> {
        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            client_base_url: env::var("BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            seed_path: env::var("SEED_PATH").unwrap_or_else(|_| "data/seed.json".to_string()),
            monthly_target_hours: env::var("MONTHLY_TARGET_HOURS")
                .ok()
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|hours| hours.is_finite() && *hours >= 0.0)
                .unwrap_or(180.0),
            reference_date: env::var("REFERENCE_DATE")
                .ok()
                .and_then(|v| NaiveDate::parse_from_str(&v, "%Y-%m-%d").ok()),
            activity_capacity: env::var("ACTIVITY_CAPACITY")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .unwrap_or(100),
        })
    }

    /// Create a test configuration
    pub fn test_config() -> Self {
        Config {
            host: "127.0.0.1".to_string(),
            port: 0, // Let OS choose available port
            environment: "test".to_string(),
            client_base_url: "http://localhost:3000".to_string(),
            seed_path: "data/seed.json".to_string(),
            monthly_target_hours: 180.0,
            reference_date: NaiveDate::from_ymd_opt(2025, 10, 15),
            activity_capacity: 100,
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
