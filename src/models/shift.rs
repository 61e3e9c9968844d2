use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::macros::string_enum;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: String,
    pub doctor_id: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub department: String,
    pub location: String,
    pub status: ShiftStatus,
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    pub enum ShiftStatus {
        Assigned => "assigned",
        Available => "available",
        Swapped => "swapped",
        Overtime => "overtime",
        Completed => "completed",
        Swap => "swap",
    }
}

impl ShiftStatus {
    /// Whether a shift in this state counts towards the doctor's worked hours.
    pub fn is_worked(&self) -> bool {
        matches!(
            self,
            ShiftStatus::Assigned
                | ShiftStatus::Swapped
                | ShiftStatus::Overtime
                | ShiftStatus::Completed
        )
    }
}

impl Shift {
    pub fn day_of_month(&self) -> u32 {
        self.date.day()
    }

    pub fn month_key(&self) -> MonthKey {
        MonthKey::of(self.date)
    }
}

/// Identifies one month partition of the shift calendar. Months are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(MonthKey { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        MonthKey {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl std::fmt::Display for MonthKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
