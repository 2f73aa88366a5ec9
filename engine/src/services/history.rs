//! Session-scoped history of completed forecasts

use chrono::Utc;
use shared::models::{ForecastRequest, ForecastResult, HistoryEntry};
use uuid::Uuid;

/// Ordered, session-scoped log of completed forecasts
///
/// Owned by the caller and created at session start; there is no global
/// instance. Entries are append-only, so iteration order is oldest-first and
/// display order is newest-last. Appending is always the caller's decision,
/// never the forecast service's.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Create an empty log for a new session
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot a completed forecast and append it
    ///
    /// Captures the coefficients the forecast ran with alongside the inputs
    /// and the mean depth, stamped with the current time.
    pub fn record(&mut self, request: &ForecastRequest, result: &ForecastResult) -> HistoryEntry {
        let entry = HistoryEntry {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            crop: request.crop,
            phase: request.phase,
            method: request.method,
            kc: request.crop.kc(request.phase),
            efficiency: request.method.efficiency(),
            location: request.location,
            mean_depth_mm: result.mean_depth_mm,
        };
        self.append(entry.clone());
        entry
    }

    /// Append an already-built snapshot, taking ownership of it
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
        tracing::debug!("Session history now holds {} entries", self.entries.len());
    }

    /// Entries in append order (newest last)
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
