use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::MonthKey;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub month: MonthKey,
    pub total_shifts: usize,
    pub shifts_by_status: BTreeMap<String, usize>,
    pub scheduled_hours: f64,
    pub monthly_target_hours: f64,
    pub accepted_swaps: usize,
    pub total_swap_requests: usize,
    pub pending_swap_requests: usize,
    pub new_swap_requests: usize,
    pub approval_rate: f64,
    pub open_offers: usize,
    pub notifications: usize,
    pub urgent_notifications: usize,
    pub rest_alert: bool,
}
