//! In-flight submission registry
//!
//! One status transition per (session, touchpoint, record) may be in flight at
//! a time. A second commit of the same transition while the first is still
//! waiting on the backend is rejected; different sessions are not coordinated.

use ck_core::{Session, Touchpoint};

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::debug;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubmissionKey {
    pub session: Session,
    pub touchpoint: Touchpoint,
    pub record_id: String,
}

/// Registry of transitions currently awaiting the backend
#[derive(Clone, Default)]
pub struct SubmissionRegistry {
    inner: Arc<Mutex<HashSet<SubmissionKey>>>,
}

impl SubmissionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `key`; `None` when the same transition is already in flight.
    ///
    /// The claim is released when the returned guard drops, including when the
    /// request future is abandoned mid-flight.
    pub fn begin(&self, key: SubmissionKey) -> Option<SubmissionGuard> {
        let mut in_flight = self.lock();

        if !in_flight.insert(key.clone()) {
            debug!(
                "Rejected duplicate {} submission for record {}",
                key.touchpoint, key.record_id
            );
            return None;
        }

        Some(SubmissionGuard {
            registry: self.clone(),
            key: Some(key),
        })
    }

    /// Number of transitions currently awaiting the backend
    pub fn in_flight(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<SubmissionKey>> {
        // The set stays consistent even if a holder panicked
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Releases its claim on drop
pub struct SubmissionGuard {
    registry: SubmissionRegistry,
    key: Option<SubmissionKey>,
}

impl Drop for SubmissionGuard {
    fn drop(&mut self) {
        if let Some(key) = self.key.take() {
            self.registry.lock().remove(&key);
        }
    }
}
