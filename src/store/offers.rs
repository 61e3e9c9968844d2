use std::collections::HashMap;

const DEFAULT_OFFER_TIME: &str = "9 AM - 5 PM";

const BUILTIN_OFFER_TIMES: &[(&str, &str)] = &[
    ("Dr. Priya Patel", "8 AM - 12 PM"),
    ("Dr. Rajesh Kumar", "2 PM - 10 PM"),
    ("Dr. Anjali Singh", "9 AM - 5 PM"),
];

pub const STATIC_REQUESTER_ID: &str = "static_user";

pub fn static_offer_id(doctor_name: &str) -> String {
    format!("static_{}", doctor_name)
}

/// Shift window advertised by each static swap offer, keyed by doctor name.
#[derive(Debug, Clone)]
pub struct StaticOfferTimes {
    times: HashMap<String, String>,
}

impl StaticOfferTimes {
    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        let mut times: HashMap<String, String> = BUILTIN_OFFER_TIMES
            .iter()
            .map(|(name, time)| (name.to_string(), time.to_string()))
            .collect();
        times.extend(overrides);
        Self { times }
    }

    pub fn time_for(&self, doctor_name: &str) -> &str {
        self.times
            .get(doctor_name)
            .map(String::as_str)
            .unwrap_or(DEFAULT_OFFER_TIME)
    }
}

impl Default for StaticOfferTimes {
    fn default() -> Self {
        Self::with_overrides(HashMap::new())
    }
}
