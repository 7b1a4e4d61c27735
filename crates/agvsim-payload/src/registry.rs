//! The payload registry: an ordered collection of [`Payload`]s.

use agvsim_core::{PayloadId, SimTime};

use crate::{Payload, PayloadError};

/// All payloads for a run, sorted once at construction by `(priority
/// ascending, dispatch_time ascending)` — the order the pickup
/// sub-algorithm consumes them in.
pub struct PayloadRegistry {
    payloads: Vec<Payload>,
}

impl PayloadRegistry {
    /// Sort `payloads` into canonical order and wrap them.
    pub fn new(mut payloads: Vec<Payload>) -> Self {
        payloads.sort();
        Self { payloads }
    }

    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Payload> {
        self.payloads.iter()
    }

    pub fn get(&self, id: &PayloadId) -> Option<&Payload> {
        self.payloads.iter().find(|p| &p.id == id)
    }

    /// Payloads eligible for pickup at `now`: not delivered, dispatch time
    /// at or before `now`.
    pub fn undelivered_at(&self, now: SimTime) -> impl Iterator<Item = &Payload> {
        self.payloads.iter().filter(move |p| p.is_pending_at(now))
    }

    /// Mark `id` delivered.
    ///
    /// # Errors
    ///
    /// [`PayloadError::UnknownPayload`] if `id` is not in the registry.
    pub fn mark_delivered(&mut self, id: &PayloadId) -> Result<(), PayloadError> {
        let payload = self
            .payloads
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| PayloadError::UnknownPayload(id.clone()))?;
        payload.delivered = true;
        Ok(())
    }

    /// Mark `id` claimed, so it drops out of [`Self::undelivered_at`] and
    /// `plan_pickup`'s eligible pool for every other AGV, even before it is
    /// physically attached.
    ///
    /// # Errors
    ///
    /// [`PayloadError::UnknownPayload`] if `id` is not in the registry.
    pub fn claim(&mut self, id: &PayloadId) -> Result<(), PayloadError> {
        let payload = self
            .payloads
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| PayloadError::UnknownPayload(id.clone()))?;
        payload.claimed = true;
        Ok(())
    }

    /// Release a claim on `id`, e.g. after a failed pickup attempt, so it
    /// becomes eligible for pickup again.
    ///
    /// # Errors
    ///
    /// [`PayloadError::UnknownPayload`] if `id` is not in the registry.
    pub fn unclaim(&mut self, id: &PayloadId) -> Result<(), PayloadError> {
        let payload = self
            .payloads
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or_else(|| PayloadError::UnknownPayload(id.clone()))?;
        payload.claimed = false;
        Ok(())
    }

    /// `true` iff every payload has been delivered.
    pub fn all_delivered(&self) -> bool {
        self.payloads.iter().all(|p| p.delivered)
    }

    pub fn delivered_count(&self) -> usize {
        self.payloads.iter().filter(|p| p.delivered).count()
    }
}
