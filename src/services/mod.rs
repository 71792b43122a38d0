//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the enrollment rules so route handlers can stay
//! focused on protocol translation.

pub mod enrollment;
