//! Filesystem utilities for cadence.
//!
//! This module provides atomic writes for the schedule, plan and suggestion
//! files kept in a content library.

pub mod atomic;

pub use atomic::{atomic_write_file, atomic_write_json};
