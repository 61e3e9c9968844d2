use std::collections::BTreeMap;

use crate::models::{DashboardStats, MonthKey, ShiftStatus};
use crate::store::ShiftStore;
use crate::store::time_window::window_hours;

// Share of the monthly target after which the dashboard suggests rest.
const REST_ALERT_RATIO: f64 = 0.85;

impl ShiftStore {
    pub fn dashboard_stats(&self, month: MonthKey, monthly_target_hours: f64) -> DashboardStats {
        let shifts = self.calendar.shifts_for(month);

        let mut shifts_by_status: BTreeMap<String, usize> = ShiftStatus::ALL
            .iter()
            .map(|status| (status.to_string(), 0))
            .collect();
        for shift in shifts {
            *shifts_by_status.entry(shift.status.to_string()).or_default() += 1;
        }

        let scheduled_hours: f64 = shifts
            .iter()
            .filter(|s| s.status.is_worked())
            .filter_map(|s| window_hours(&s.start_time, &s.end_time))
            .sum();

        let accepted = self.accepted_swaps.len();
        let pending = self.pending_swap_requests().len();
        let approval_rate = if accepted + pending == 0 {
            0.0
        } else {
            accepted as f64 / (accepted + pending) as f64 * 100.0
        };

        DashboardStats {
            month,
            total_shifts: shifts.len(),
            shifts_by_status,
            scheduled_hours,
            monthly_target_hours,
            accepted_swaps: accepted,
            total_swap_requests: self.swap_requests.len(),
            pending_swap_requests: pending,
            new_swap_requests: self.new_swap_requests().len(),
            approval_rate,
            open_offers: self.open_offers.len(),
            notifications: self.notifications.len(),
            urgent_notifications: self.notifications.iter().filter(|n| n.is_urgent).count(),
            rest_alert: monthly_target_hours > 0.0
                && scheduled_hours >= monthly_target_hours * REST_ALERT_RATIO,
        }
    }
}
