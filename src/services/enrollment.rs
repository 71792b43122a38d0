//! Enrollment service: signup and unregistration rules.
//!
//! DESIGN
//! ======
//! Stateless over an injected `RosterStore`. Route handlers parse raw path
//! and query strings into `ActivityName` / `Email`, call the service, and
//! translate `EnrollmentError` into a status code. Each (activity, email)
//! pair is a two-state machine: `sign_up` moves it to enrolled, `unregister`
//! moves it back, and the wrong-direction call fails without touching state.
//!
//! Emails are opaque identifiers. Any non-empty string is accepted verbatim.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use tracing::{debug, info};

use crate::roster::{Activity, CapacityPolicy, RosterError, RosterStore};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnrollmentError {
    #[error("Activity name must not be empty")]
    InvalidActivityName,
    #[error("Email must not be empty")]
    InvalidEmail,
    #[error(transparent)]
    Roster(#[from] RosterError),
}

/// Activity name as it arrived in the (percent-decoded) path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityName(String);

impl ActivityName {
    /// # Errors
    ///
    /// Returns `InvalidActivityName` for empty input.
    pub fn parse(raw: &str) -> Result<Self, EnrollmentError> {
        if raw.is_empty() {
            return Err(EnrollmentError::InvalidActivityName);
        }
        Ok(Self(raw.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Student identifier. No syntax checks beyond non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    /// # Errors
    ///
    /// Returns `InvalidEmail` for empty input.
    pub fn parse(raw: &str) -> Result<Self, EnrollmentError> {
        if raw.is_empty() {
            return Err(EnrollmentError::InvalidEmail);
        }
        Ok(Self(raw.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Successful transition, rendered to clients as `{"message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Confirmation {
    pub message: String,
}

// =============================================================================
// SERVICE
// =============================================================================

#[derive(Clone)]
pub struct EnrollmentService {
    store: RosterStore,
    capacity: CapacityPolicy,
}

impl EnrollmentService {
    #[must_use]
    pub fn new(store: RosterStore, capacity: CapacityPolicy) -> Self {
        Self { store, capacity }
    }

    #[must_use]
    pub fn store(&self) -> &RosterStore {
        &self.store
    }

    /// Every activity with its current roster.
    #[must_use]
    pub fn list_activities(&self) -> BTreeMap<String, Activity> {
        self.store.get_all()
    }

    /// Enroll `email` in `activity`.
    ///
    /// # Errors
    ///
    /// Propagates `ActivityNotFound`, `AlreadyRegistered` and (when capacity
    /// is enforced) `ActivityFull` from the store.
    pub fn sign_up(&self, activity: &ActivityName, email: &Email) -> Result<Confirmation, EnrollmentError> {
        if let Err(e) = self.store.add_participant(activity.as_str(), email.as_str(), self.capacity) {
            debug!(%activity, %email, error = %e, "signup rejected");
            return Err(e.into());
        }

        info!(%activity, %email, "student signed up");
        Ok(Confirmation { message: format!("Signed up {email} for {activity}") })
    }

    /// Remove `email` from `activity`.
    ///
    /// # Errors
    ///
    /// Propagates `ActivityNotFound` and `NotRegistered` from the store.
    pub fn unregister(&self, activity: &ActivityName, email: &Email) -> Result<Confirmation, EnrollmentError> {
        if let Err(e) = self.store.remove_participant(activity.as_str(), email.as_str()) {
            debug!(%activity, %email, error = %e, "unregister rejected");
            return Err(e.into());
        }

        info!(%activity, %email, "student unregistered");
        Ok(Confirmation { message: format!("Unregistered {email} from {activity}") })
    }
}

#[cfg(test)]
#[path = "enrollment_test.rs"]
mod tests;
