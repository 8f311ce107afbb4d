//! Symptom-record domain logic: triage persistence and diagnosis updates.

mod entity;
mod error;

pub use entity::RecordFilter;
pub use error::*;
