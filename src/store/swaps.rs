use chrono::Utc;
use uuid::Uuid;

use crate::models::{NewSwapRequest, SwapRequest, SwapStatus};
use crate::store::date_resolution::{DateSource, resolve_swap_date};
use crate::store::offers::{STATIC_REQUESTER_ID, static_offer_id};
use crate::store::time_window::ShiftWindow;
use crate::store::{ShiftStore, StoreEvent};

impl ShiftStore {
    /// Accepts a swap request. Repeated calls with an already accepted id are
    /// no-ops and return no events.
    pub fn accept_swap(&mut self, request: &SwapRequest) -> Vec<StoreEvent> {
        if !self.accepted_ids.insert(request.id.clone()) {
            log::debug!("Swap {} already accepted, ignoring", request.id);
            return Vec::new();
        }

        let mut events = Vec::new();

        let mut matched = false;
        for existing in self.swap_requests.iter_mut().filter(|r| r.id == request.id) {
            existing.mark_accepted();
            matched = true;
        }
        if matched {
            events.push(StoreEvent::SwapRequestsChanged);
        }

        if !self.accepted_swaps.iter().any(|s| s.id == request.id) {
            self.accepted_swaps.push(request.accepted());
            events.push(StoreEvent::AcceptedSwapsChanged {
                total: self.accepted_swaps.len(),
            });
        }

        events.push(self.rewrite_shift(&request.date, &request.department, &request.time));

        log::info!(
            "Swap accepted: {} (total accepted: {})",
            request.requester_name,
            self.accepted_swaps.len()
        );

        self.publish(events)
    }

    /// Accepts a swap request or open offer by id. Open offers go through the
    /// static offer path so they leave the open list and share its guard.
    /// Returns `None` when the id is unknown.
    pub fn accept_by_id(&mut self, swap_id: &str) -> Option<Vec<StoreEvent>> {
        if self.accepted_ids.contains(swap_id) {
            log::debug!("Swap {} already accepted, ignoring", swap_id);
            return Some(Vec::new());
        }

        if let Some(request) = self.swap_requests.iter().find(|r| r.id == swap_id).cloned() {
            return Some(self.accept_swap(&request));
        }

        let offer = self.open_offers.iter().find(|o| o.id == swap_id).cloned()?;
        let events =
            self.accept_static_swap_offer(&offer.requester_name, &offer.date, &offer.department);
        self.accepted_ids.insert(offer.id);
        Some(events)
    }

    /// Accepts one of the fixed swap offers shown to the user, identified only
    /// by the offering doctor's name.
    pub fn accept_static_swap_offer(
        &mut self,
        doctor_name: &str,
        date: &str,
        department: &str,
    ) -> Vec<StoreEvent> {
        let swap_id = static_offer_id(doctor_name);
        if !self.accepted_ids.insert(swap_id.clone()) {
            log::debug!("Static offer from {} already accepted, ignoring", doctor_name);
            return Vec::new();
        }

        let time = self.offer_times.time_for(doctor_name).to_string();
        let stamp = Utc::now().timestamp_millis();
        let synthesized = SwapRequest {
            id: swap_id.clone(),
            requester_id: STATIC_REQUESTER_ID.to_string(),
            requester_name: doctor_name.to_string(),
            offered_shift_id: format!("static_offered_{}", stamp),
            requested_shift_id: format!("static_requested_{}", stamp),
            status: SwapStatus::Accepted,
            date: date.to_string(),
            time: time.clone(),
            department: department.to_string(),
            shift_date: String::new(),
            is_accepted: true,
        };

        let mut events = Vec::new();

        if !self.accepted_swaps.iter().any(|s| s.id == swap_id) {
            self.accepted_swaps.push(synthesized);
            events.push(StoreEvent::AcceptedSwapsChanged {
                total: self.accepted_swaps.len(),
            });
        }

        let before = self.open_offers.len();
        self.open_offers.retain(|offer| offer.requester_name != doctor_name);
        if self.open_offers.len() != before {
            events.push(StoreEvent::OpenOffersChanged {
                remaining: self.open_offers.len(),
            });
        }

        events.push(self.rewrite_shift(date, department, &time));

        log::info!(
            "Static swap accepted: {} (total accepted: {})",
            doctor_name,
            self.accepted_swaps.len()
        );

        self.publish(events)
    }

    /// Raises a new pending request on behalf of the current user.
    pub fn create_swap_request(&mut self, input: NewSwapRequest) -> SwapRequest {
        let request = SwapRequest {
            id: Uuid::new_v4().to_string(),
            requester_id: self.current_user.id.clone(),
            requester_name: self.current_user.name.clone(),
            offered_shift_id: input.offered_shift_id,
            requested_shift_id: input.requested_shift_id,
            status: SwapStatus::Pending,
            date: input.date,
            time: input.time,
            department: input.department,
            shift_date: String::new(),
            is_accepted: false,
        };

        self.swap_requests.push(request.clone());
        log::info!(
            "Swap request {} created for shift {}",
            request.id,
            request.requested_shift_id
        );

        self.publish(vec![StoreEvent::SwapRequestsChanged]);
        request
    }

    fn rewrite_shift(&mut self, date: &str, department: &str, time: &str) -> StoreEvent {
        let resolved = resolve_swap_date(date, self.today());
        if resolved.source == DateSource::Fallback {
            log::debug!("Unrecognised swap date '{}', using today", date);
        }

        let window = ShiftWindow::split(time);
        let rewritten = self.calendar.rewrite_for_swap(
            resolved.month_day.month,
            resolved.month_day.day,
            department,
            &window,
        );

        match rewritten {
            Some(shift) => StoreEvent::ShiftsChanged {
                month: Some(shift.month),
                shift_id: Some(shift.shift_id),
            },
            None => {
                log::debug!(
                    "No shift on {}/{} to rewrite for swap dated '{}'",
                    resolved.month_day.month,
                    resolved.month_day.day,
                    date
                );
                StoreEvent::ShiftsChanged {
                    month: None,
                    shift_id: None,
                }
            }
        }
    }
}
