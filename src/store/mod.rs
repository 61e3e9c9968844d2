//! In-memory shift and swap state for one user session.
//!
//! [`ShiftStore`] is an owned value: callers that need to share it wrap it
//! themselves (the HTTP layer uses [`SharedStore`]). Every mutation publishes
//! [`StoreEvent`]s once it has finished, and returns the events it emitted.

use chrono::{Local, NaiveDate};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;

use crate::models::{MonthKey, Notification, Shift, SwapRequest, SwapStatus, User};

pub mod calendar;
pub mod date_resolution;
pub mod events;
pub mod offers;
pub mod seed;
pub mod stats;
pub mod swaps;
pub mod time_window;


pub use calendar::{RewrittenShift, ShiftCalendar};
pub use events::{EventBus, StoreEnvelope, StoreEvent};
pub use offers::StaticOfferTimes;
pub use seed::{MonthSeed, SeedError, StoreSeed};

pub type SharedStore = Arc<Mutex<ShiftStore>>;

#[derive(Debug)]
pub struct ShiftStore {
    current_user: User,
    today_shift: Option<Shift>,
    next_shift: Option<Shift>,
    calendar: ShiftCalendar,
    swap_requests: Vec<SwapRequest>,
    open_offers: Vec<SwapRequest>,
    accepted_swaps: Vec<SwapRequest>,
    accepted_ids: HashSet<String>,
    notifications: Vec<Notification>,
    offer_times: StaticOfferTimes,
    reference_date: Option<NaiveDate>,
    events: EventBus,
}

impl ShiftStore {
    /// Builds the store from an already validated seed.
    pub fn from_seed(seed: StoreSeed) -> Self {
        let mut calendar = ShiftCalendar::new();
        for month in seed.months {
            match month.key() {
                Ok(key) => calendar.insert_month(key, month.shifts),
                Err(e) => log::warn!("Skipping seeded month: {}", e),
            }
        }

        let accepted_ids = seed.accepted_swaps.iter().map(|s| s.id.clone()).collect();

        ShiftStore {
            current_user: seed.current_user,
            today_shift: seed.today_shift,
            next_shift: seed.next_shift,
            calendar,
            swap_requests: seed.swap_requests,
            open_offers: seed.open_offers,
            accepted_swaps: seed.accepted_swaps,
            accepted_ids,
            notifications: seed.notifications,
            offer_times: StaticOfferTimes::with_overrides(seed.static_offer_times),
            reference_date: None,
            events: EventBus::new(),
        }
    }

    /// Pins "today" for date fallbacks instead of reading the local clock.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(Mutex::new(self))
    }

    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    pub fn current_user(&self) -> &User {
        &self.current_user
    }

    pub fn today_shift(&self) -> Option<&Shift> {
        self.today_shift.as_ref()
    }

    pub fn next_shift(&self) -> Option<&Shift> {
        self.next_shift.as_ref()
    }

    pub fn swap_requests(&self) -> &[SwapRequest] {
        &self.swap_requests
    }

    pub fn open_offers(&self) -> &[SwapRequest] {
        &self.open_offers
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Requests still marked new that nobody has accepted yet.
    pub fn new_swap_requests(&self) -> Vec<SwapRequest> {
        self.swap_requests
            .iter()
            .filter(|r| r.status == SwapStatus::New && !self.accepted_ids.contains(&r.id))
            .cloned()
            .collect()
    }

    pub fn pending_swap_requests(&self) -> Vec<SwapRequest> {
        self.swap_requests
            .iter()
            .filter(|r| r.status == SwapStatus::Pending)
            .cloned()
            .collect()
    }

    pub fn accepted_swaps(&self) -> &[SwapRequest] {
        &self.accepted_swaps
    }

    pub fn is_accepted(&self, swap_id: &str) -> bool {
        self.accepted_ids.contains(swap_id)
    }

    pub fn is_static_offer_accepted(&self, doctor_name: &str) -> bool {
        self.is_accepted(&offers::static_offer_id(doctor_name))
    }

    /// Looks in the swap requests first, then the open offers.
    pub fn find_swap(&self, swap_id: &str) -> Option<&SwapRequest> {
        self.swap_requests
            .iter()
            .chain(self.open_offers.iter())
            .find(|r| r.id == swap_id)
    }

    /// The month's shifts, or an empty slice when the month is not tracked.
    pub fn shifts_for_month(&self, month: u32, year: i32) -> &[Shift] {
        match MonthKey::new(year, month) {
            Some(key) => self.calendar.shifts_for(key),
            None => &[],
        }
    }

    pub fn tracked_months(&self) -> Vec<MonthKey> {
        self.calendar.tracked_months()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEnvelope> {
        self.events.subscribe()
    }

    pub fn events_since(&self, sequence: u64) -> Vec<StoreEnvelope> {
        self.events.since(sequence)
    }

    pub fn last_event_sequence(&self) -> u64 {
        self.events.last_sequence()
    }

    /// Bumped every time shifts may have changed; observers re-read calendars on change.
    pub fn shifts_revision(&self) -> u64 {
        self.events.shifts_revision()
    }

    fn publish(&mut self, events: Vec<StoreEvent>) -> Vec<StoreEvent> {
        for event in &events {
            self.events.publish(event.clone());
        }
        events
    }
}
