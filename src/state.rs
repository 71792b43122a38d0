//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It owns the enrollment service, which in turn holds the roster store
//! handle. The store is created and seeded in `main` and passed in here;
//! nothing reaches it through a global.

use crate::roster::{CapacityPolicy, RosterStore};
use crate::services::enrollment::EnrollmentService;

/// Shared application state. Clone is required by Axum; the store is
/// Arc-backed so clones share one catalog.
#[derive(Clone)]
pub struct AppState {
    pub enrollment: EnrollmentService,
}

impl AppState {
    #[must_use]
    pub fn new(store: RosterStore, capacity: CapacityPolicy) -> Self {
        Self { enrollment: EnrollmentService::new(store, capacity) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// Fresh state over the default catalog, capacity unenforced.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(RosterStore::seeded(), CapacityPolicy::Unenforced)
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
