//! Domain event sink trait and implementations.

use std::sync::{Arc, Mutex};

use log::debug;

use crate::cache::TtlCache;
use crate::personalization::DonorPreferenceProfile;

use super::DomainEvent;

/// Trait for receiving domain events.
///
/// # Design Rules
///
/// - `emit()` must be fast and non-blocking (no network calls, no DB writes)
/// - Failure to handle an event must not affect domain operations
pub trait DomainEventSink: Send + Sync {
    /// Emit a single domain event.
    fn emit(&self, event: DomainEvent);

    /// Emit multiple domain events.
    ///
    /// Default implementation calls `emit()` for each event.
    fn emit_batch(&self, events: Vec<DomainEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// No-op implementation for tests or contexts that don't need events.
#[derive(Clone, Default)]
pub struct NoOpDomainEventSink;

impl DomainEventSink for NoOpDomainEventSink {
    fn emit(&self, _event: DomainEvent) {
        // Intentionally empty - events are discarded
    }
}

/// Mock sink for testing - collects emitted events.
#[derive(Clone, Default)]
pub struct MockDomainEventSink {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MockDomainEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emitted(&self) -> Vec<DomainEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }
}

impl DomainEventSink for MockDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

/// Sink that keeps the donor-profile cache consistent: a recorded donation
/// drops that donor's cached profile so the next personalized request
/// rebuilds it.
pub struct ProfileCacheInvalidator {
    cache: Arc<TtlCache<String, DonorPreferenceProfile>>,
}

impl ProfileCacheInvalidator {
    pub fn new(cache: Arc<TtlCache<String, DonorPreferenceProfile>>) -> Self {
        ProfileCacheInvalidator { cache }
    }
}

impl DomainEventSink for ProfileCacheInvalidator {
    fn emit(&self, event: DomainEvent) {
        if let DomainEvent::DonationRecorded { donor_id, .. } = event {
            debug!("invalidating cached profile for donor {}", donor_id);
            self.cache.invalidate(&donor_id);
        }
    }
}
