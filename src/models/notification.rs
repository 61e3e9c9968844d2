use serde::{Deserialize, Serialize};

use crate::models::macros::string_enum;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub date: String,
    #[serde(default)]
    pub is_urgent: bool,
    #[serde(default)]
    pub action_text: Option<String>,
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub enum NotificationType {
        UrgentNeed => "urgent_need",
        SwapApproval => "swap_approval",
        Training => "training",
        ShiftUpdate => "shift_update",
        General => "general",
    }
}
