use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use tokio::sync::broadcast;

use crate::models::MonthKey;

const CHANNEL_CAPACITY: usize = 64;
const JOURNAL_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum StoreEvent {
    SwapRequestsChanged,
    #[serde(rename_all = "camelCase")]
    AcceptedSwapsChanged { total: usize },
    #[serde(rename_all = "camelCase")]
    OpenOffersChanged { remaining: usize },
    /// Emitted after every accepted swap, even when no shift matched its date.
    #[serde(rename_all = "camelCase")]
    ShiftsChanged {
        month: Option<MonthKey>,
        shift_id: Option<String>,
    },
}

impl std::fmt::Display for StoreEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreEvent::SwapRequestsChanged => write!(f, "swap requests changed"),
            StoreEvent::AcceptedSwapsChanged { total } => {
                write!(f, "accepted swaps changed ({} total)", total)
            }
            StoreEvent::OpenOffersChanged { remaining } => {
                write!(f, "open offers changed ({} remaining)", remaining)
            }
            StoreEvent::ShiftsChanged {
                month: Some(month),
                shift_id: Some(shift_id),
            } => write!(f, "shift {} in {} swapped", shift_id, month),
            StoreEvent::ShiftsChanged { .. } => write!(f, "shifts refreshed"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreEnvelope {
    pub sequence: u64,
    pub emitted_at: DateTime<Utc>,
    pub event: StoreEvent,
}

/// Fans store events out to subscribers and keeps a short journal for pollers.
#[derive(Debug)]
pub struct EventBus {
    sender: broadcast::Sender<StoreEnvelope>,
    journal: VecDeque<StoreEnvelope>,
    last_sequence: u64,
    shifts_revision: u64,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            sender,
            journal: VecDeque::with_capacity(JOURNAL_CAPACITY),
            last_sequence: 0,
            shifts_revision: 0,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEnvelope> {
        self.sender.subscribe()
    }

    pub fn publish(&mut self, event: StoreEvent) {
        if matches!(event, StoreEvent::ShiftsChanged { .. }) {
            self.shifts_revision += 1;
        }
        self.last_sequence += 1;

        let envelope = StoreEnvelope {
            sequence: self.last_sequence,
            emitted_at: Utc::now(),
            event,
        };

        if self.journal.len() == JOURNAL_CAPACITY {
            self.journal.pop_front();
        }
        self.journal.push_back(envelope.clone());

        // No receivers is the normal state outside the server.
        if self.sender.send(envelope).is_err() {
            log::trace!("No subscribers for store event {}", self.last_sequence);
        }
    }

    /// Journal entries after `sequence`, oldest first.
    pub fn since(&self, sequence: u64) -> Vec<StoreEnvelope> {
        self.journal
            .iter()
            .filter(|e| e.sequence > sequence)
            .cloned()
            .collect()
    }

    pub fn last_sequence(&self) -> u64 {
        self.last_sequence
    }

    pub fn shifts_revision(&self) -> u64 {
        self.shifts_revision
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
