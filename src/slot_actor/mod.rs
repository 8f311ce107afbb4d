//! Availability-slot domain logic, including the atomic reserve action.

mod actions;
mod entity;
mod error;

pub use actions::*;
pub use entity::SlotFilter;
pub use error::*;
