use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::store::StoreEnvelope;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub sequence: u64,
    pub description: String,
    pub recorded_at: DateTime<Utc>,
}

/// Keeps a bounded, human readable feed of store events for the session.
#[derive(Clone)]
pub struct ActivityLogger {
    entries: Arc<Mutex<VecDeque<ActivityEntry>>>,
    capacity: usize,
}

impl ActivityLogger {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    /// Record one store event, dropping the oldest entry once full
    pub fn record(&self, envelope: &StoreEnvelope) {
        let entry = ActivityEntry {
            sequence: envelope.sequence,
            description: envelope.event.to_string(),
            recorded_at: envelope.emitted_at,
        };

        match self.entries.lock() {
            Ok(mut entries) => {
                if entries.len() == self.capacity {
                    entries.pop_front();
                }
                log::debug!("Activity #{}: {}", entry.sequence, entry.description);
                entries.push_back(entry);
            }
            Err(_) => log::error!("Activity feed lock poisoned, dropping entry"),
        }
    }

    /// Newest first. `None` if the feed lock was poisoned.
    pub fn recent(&self) -> Option<Vec<ActivityEntry>> {
        let entries = self.entries.lock().ok()?;
        Some(entries.iter().rev().cloned().collect())
    }

    /// Drain store events into the feed until the store's bus is dropped
    pub fn spawn(&self, mut receiver: broadcast::Receiver<StoreEnvelope>) -> JoinHandle<()> {
        let logger = self.clone();
        tokio::spawn(async move {
            loop {
                match receiver.recv().await {
                    Ok(envelope) => logger.record(&envelope),
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        log::warn!("Activity feed lagged, skipped {} events", skipped);
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
            log::debug!("Activity feed stopped");
        })
    }
}
