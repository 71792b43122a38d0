//! Mergington High School extracurricular activities API.
//!
//! A fixed catalog of activities lives in a `RosterStore`; the
//! `EnrollmentService` applies signup and unregistration rules on top of it;
//! `routes` exposes both over HTTP.

pub mod catalog;
pub mod config;
pub mod roster;
pub mod routes;
pub mod services;
pub mod state;
