use chrono::NaiveDate;
use fake::Fake;
use fake::faker::name::en::Name;

use crate::models::*;
use crate::store::{MonthSeed, ShiftStore, StoreSeed};

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Builders for store fixtures
pub struct MockData;

impl MockData {
    pub fn user() -> User {
        User {
            id: "1".to_string(),
            name: "Dr. Sharma".to_string(),
            role: "Surgeon".to_string(),
            specialization: "Cardiology".to_string(),
            hospital_unit: "Main Hospital".to_string(),
            email: "sharma@hospital.com".to_string(),
            phone: "+91 9876543210".to_string(),
        }
    }

    pub fn shift(id: &str, date: NaiveDate, start: &str, end: &str, status: ShiftStatus) -> Shift {
        Shift {
            id: id.to_string(),
            doctor_id: "1".to_string(),
            date,
            start_time: start.to_string(),
            end_time: end.to_string(),
            department: "Cardiology Dept".to_string(),
            location: "Main Hospital".to_string(),
            status,
        }
    }

    pub fn swap(id: &str, status: SwapStatus, date: &str, time: &str, department: &str) -> SwapRequest {
        SwapRequest {
            id: id.to_string(),
            requester_id: "3".to_string(),
            requester_name: Name().fake(),
            offered_shift_id: "5".to_string(),
            requested_shift_id: "1".to_string(),
            status,
            date: date.to_string(),
            time: time.to_string(),
            department: department.to_string(),
            shift_date: String::new(),
            is_accepted: false,
        }
    }

    pub fn offer(id: &str, doctor: &str, date: &str, time: &str, department: &str) -> SwapRequest {
        SwapRequest {
            requester_name: doctor.to_string(),
            shift_date: date.to_string(),
            ..Self::swap(id, SwapStatus::Pending, date, time, department)
        }
    }

    pub fn notification(id: &str, urgent: bool) -> Notification {
        Notification {
            id: id.to_string(),
            title: format!("Notice {}", id),
            message: "Staffing update".to_string(),
            notification_type: if urgent {
                NotificationType::UrgentNeed
            } else {
                NotificationType::General
            },
            date: "Now".to_string(),
            is_urgent: urgent,
            action_text: urgent.then(|| "Tap to volunteer".to_string()),
        }
    }

    /// A session with October to January tracked, two swap requests and three open offers.
    pub fn seed() -> StoreSeed {
        let october = vec![
            Self::shift("oct-01", ymd(2025, 10, 1), "08:00 AM", "04:00 PM", ShiftStatus::Assigned),
            Self::shift("oct-07", ymd(2025, 10, 7), "08:00 AM", "12:00 PM", ShiftStatus::Available),
            Self::shift("oct-26", ymd(2025, 10, 26), "02:00 PM", "10:00 PM", ShiftStatus::Assigned),
            Self::shift("oct-27", ymd(2025, 10, 27), "12:00 PM", "05:00 PM", ShiftStatus::Available),
            Self::shift("oct-28", ymd(2025, 10, 28), "08:00 AM", "12:00 PM", ShiftStatus::Available),
        ];
        let november = vec![
            Self::shift("nov-02", ymd(2025, 11, 2), "02:00 PM", "10:00 PM", ShiftStatus::Assigned),
            Self::shift("nov-05", ymd(2025, 11, 5), "09:00 AM", "05:00 PM", ShiftStatus::Assigned),
        ];
        let december = vec![
            Self::shift("dec-05", ymd(2025, 12, 5), "08:00 AM", "04:00 PM", ShiftStatus::Assigned),
            Self::shift("dec-12", ymd(2025, 12, 12), "08:00 AM", "04:00 PM", ShiftStatus::Assigned),
        ];
        let january = vec![
            Self::shift("jan-07", ymd(2026, 1, 7), "08:00 AM", "04:00 PM", ShiftStatus::Assigned),
        ];

        StoreSeed {
            today_shift: Some(Self::shift(
                "today",
                ymd(2025, 10, 15),
                "08:00 AM",
                "05:00 PM",
                ShiftStatus::Assigned,
            )),
            next_shift: Some(Self::shift(
                "next",
                ymd(2025, 10, 16),
                "08:00 AM",
                "12:00 PM",
                ShiftStatus::Assigned,
            )),
            months: vec![
                MonthSeed { year: 2025, month: 10, shifts: october },
                MonthSeed { year: 2025, month: 11, shifts: november },
                MonthSeed { year: 2025, month: 12, shifts: december },
                MonthSeed { year: 2026, month: 1, shifts: january },
            ],
            swap_requests: vec![
                Self::swap("1", SwapStatus::New, "Mon, Oct 26", "08:00 AM - 05:00 PM", "Cardiology"),
                Self::swap("2", SwapStatus::Pending, "Tue, Oct 27", "08:00 AM - 05:00 PM", "Cardiology"),
            ],
            open_offers: vec![
                Self::offer("3", "Dr. Priya Patel", "Oct 28", "8 AM - 12 PM", "Cardiology Dept"),
                Self::offer("4", "Dr. Rajesh Kumar", "Nov 2", "2 PM - 10 PM", "ICU"),
                Self::offer("5", "Dr. Anjali Singh", "Nov 5", "9 AM - 5 PM", "Emergency Ward"),
            ],
            notifications: vec![Self::notification("1", true), Self::notification("2", false)],
            ..StoreSeed::empty(Self::user())
        }
    }

    pub fn store() -> ShiftStore {
        ShiftStore::from_seed(Self::seed()).with_reference_date(ymd(2025, 10, 15))
    }
}

/// Test assertion helpers
pub struct TestAssertions;

impl TestAssertions {
    /// Assert that response is successful and contains expected data
    pub fn assert_success_response<T>(body: &[u8]) -> T
    where
        T: serde::de::DeserializeOwned,
    {
        let response: serde_json::Value =
            serde_json::from_slice(body).expect("Response should be valid JSON");

        assert_eq!(response["success"], true, "Response should be successful");

        serde_json::from_value(response["data"].clone())
            .expect("Response data should deserialize correctly")
    }

    /// Assert that response is an error envelope with a message
    pub fn assert_error_response(body: &[u8]) -> String {
        let response: serde_json::Value =
            serde_json::from_slice(body).expect("Response should be valid JSON");

        assert_eq!(response["success"], false, "Response should be an error");
        response["message"]
            .as_str()
            .expect("Error should have message")
            .to_string()
    }
}
