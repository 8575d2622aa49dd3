//! Core module for common functionality across all targets

pub mod calendar;
pub mod config;
pub mod gpa;
pub mod gradebook;
pub mod models;
pub mod services;
pub mod store;

/// Returns the current version of the `StudyFlow` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
