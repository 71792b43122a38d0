//! Roster store: the authoritative activity catalog.
//!
//! DESIGN
//! ======
//! The catalog is a `BTreeMap<String, Activity>` behind a single
//! `std::sync::Mutex`. Every mutation performs its existence check,
//! duplicate/absence check and write inside one critical section, so two
//! concurrent signups for the same email can never both succeed.
//!
//! Activity names are exact keys: no case folding, no trimming. Rosters
//! keep insertion order so listings read the same way students joined.
//!
//! LIFECYCLE
//! =========
//! The store is seeded once at startup (`RosterStore::seeded`) and never
//! gains or loses activities afterwards. `reset` swaps the whole catalog in
//! one step and exists for test isolation and operator recovery.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use crate::catalog;

// =============================================================================
// ACTIVITY
// =============================================================================

/// One extracurricular offering. Serialized as-is in `GET /activities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Declared capacity. Only enforced under `CapacityPolicy::Enforced`.
    pub max_participants: u32,
    /// Enrolled student emails, unique within this activity.
    pub participants: Vec<String>,
}

impl Activity {
    #[must_use]
    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Remaining spots against the declared capacity, floored at zero.
    #[must_use]
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("Activity not found")]
    ActivityNotFound(String),
    #[error("Student already signed up for this activity")]
    AlreadyRegistered { activity: String, email: String },
    #[error("Student not signed up for this activity")]
    NotRegistered { activity: String, email: String },
    #[error("Activity is full")]
    ActivityFull { activity: String, max_participants: u32 },
}

/// Whether signup honours `max_participants`. Off unless configured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CapacityPolicy {
    #[default]
    Unenforced,
    Enforced,
}

// =============================================================================
// STORE
// =============================================================================

/// Cloneable handle to the shared catalog.
#[derive(Clone)]
pub struct RosterStore {
    inner: Arc<Mutex<BTreeMap<String, Activity>>>,
}

impl RosterStore {
    #[must_use]
    pub fn new(activities: BTreeMap<String, Activity>) -> Self {
        Self { inner: Arc::new(Mutex::new(activities)) }
    }

    /// Store seeded with the school's fixed activity catalog.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(catalog::default_catalog())
    }

    // Critical sections never leave the map half-written, so a poisoned
    // lock still guards a consistent catalog.
    fn lock(&self) -> MutexGuard<'_, BTreeMap<String, Activity>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the entire catalog in one step.
    pub fn reset(&self, activities: BTreeMap<String, Activity>) {
        *self.lock() = activities;
    }

    /// Owned snapshot of every activity, ordered by name.
    #[must_use]
    pub fn get_all(&self) -> BTreeMap<String, Activity> {
        self.lock().clone()
    }

    /// Exact-match lookup.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Activity> {
        self.lock().get(name).cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Append `email` to the roster of `name`.
    ///
    /// # Errors
    ///
    /// `ActivityNotFound` for an unknown name, `AlreadyRegistered` when the
    /// email is already on the roster, and `ActivityFull` when the policy is
    /// enforced and the roster has reached capacity.
    pub fn add_participant(&self, name: &str, email: &str, policy: CapacityPolicy) -> Result<(), RosterError> {
        let mut activities = self.lock();
        let activity = activities
            .get_mut(name)
            .ok_or_else(|| RosterError::ActivityNotFound(name.to_owned()))?;

        if activity.is_enrolled(email) {
            return Err(RosterError::AlreadyRegistered { activity: name.to_owned(), email: email.to_owned() });
        }

        if policy == CapacityPolicy::Enforced && activity.spots_left() == 0 {
            return Err(RosterError::ActivityFull {
                activity: name.to_owned(),
                max_participants: activity.max_participants,
            });
        }

        activity.participants.push(email.to_owned());
        Ok(())
    }

    /// Remove `email` from the roster of `name`, keeping the order of the rest.
    ///
    /// # Errors
    ///
    /// `ActivityNotFound` for an unknown name and `NotRegistered` when the
    /// email is not on the roster.
    pub fn remove_participant(&self, name: &str, email: &str) -> Result<(), RosterError> {
        let mut activities = self.lock();
        let activity = activities
            .get_mut(name)
            .ok_or_else(|| RosterError::ActivityNotFound(name.to_owned()))?;

        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(RosterError::NotRegistered { activity: name.to_owned(), email: email.to_owned() });
        };

        activity.participants.remove(pos);
        Ok(())
    }
}

impl Default for RosterStore {
    fn default() -> Self {
        Self::seeded()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "roster_test.rs"]
mod tests;
