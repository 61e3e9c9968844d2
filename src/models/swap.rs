use serde::{Deserialize, Serialize};

use crate::models::macros::string_enum;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    pub id: String,
    pub requester_id: String,
    pub requester_name: String,
    pub offered_shift_id: String,
    pub requested_shift_id: String,
    pub status: SwapStatus,
    pub date: String,
    pub time: String,
    pub department: String,
    #[serde(default)]
    pub shift_date: String,
    // Mirrors `status == Accepted`; always written together with it.
    #[serde(default)]
    pub is_accepted: bool,
}

string_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum SwapStatus {
        Pending => "pending",
        Accepted => "accepted",
        Rejected => "rejected",
        New => "new",
        Completed => "completed",
    }
}

impl SwapRequest {
    pub fn mark_accepted(&mut self) {
        self.status = SwapStatus::Accepted;
        self.is_accepted = true;
    }

    /// Copy of this request in the accepted state.
    pub fn accepted(&self) -> SwapRequest {
        let mut copy = self.clone();
        copy.mark_accepted();
        copy
    }
}

/// Body of a swap request raised by the current user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSwapRequest {
    pub requested_shift_id: String,
    pub offered_shift_id: String,
    pub date: String,
    pub time: String,
    pub department: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticOfferAcceptance {
    pub doctor_name: String,
    pub date: String,
    pub department: String,
}
