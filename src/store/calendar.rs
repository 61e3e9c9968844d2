use std::collections::BTreeMap;

use crate::models::{MonthKey, Shift, ShiftStatus};
use crate::store::time_window::ShiftWindow;

/// Shifts partitioned by month. Only months that were seeded are tracked.
#[derive(Debug, Clone, Default)]
pub struct ShiftCalendar {
    months: BTreeMap<MonthKey, Vec<Shift>>,
}

/// Where a swap rewrite landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewrittenShift {
    pub month: MonthKey,
    pub shift_id: String,
}

impl ShiftCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_month(&mut self, key: MonthKey, shifts: Vec<Shift>) {
        self.months.insert(key, shifts);
    }

    pub fn shifts_for(&self, key: MonthKey) -> &[Shift] {
        self.months.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn tracked_months(&self) -> Vec<MonthKey> {
        self.months.keys().copied().collect()
    }

    pub fn is_tracked(&self, key: MonthKey) -> bool {
        self.months.contains_key(&key)
    }

    /// Rewrites the first shift on `day` of the earliest tracked partition for
    /// calendar `month` into a swapped slot. Returns `None` when nothing matched.
    pub fn rewrite_for_swap(
        &mut self,
        month: u32,
        day: u32,
        department: &str,
        window: &ShiftWindow,
    ) -> Option<RewrittenShift> {
        let (key, shifts) = self
            .months
            .iter_mut()
            .find(|(key, _)| key.month == month)?;

        let shift = shifts.iter_mut().find(|s| s.day_of_month() == day)?;
        shift.status = ShiftStatus::Swapped;
        shift.department = department.to_string();
        shift.start_time = window.start.clone();
        shift.end_time = window.end.clone();

        Some(RewrittenShift {
            month: *key,
            shift_id: shift.id.clone(),
        })
    }
}
