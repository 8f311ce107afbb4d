//! Appointment domain logic: ownership checks and the forward-only
//! status state machine.

mod actions;
mod entity;
mod error;

pub use actions::*;
pub use entity::AppointmentFilter;
pub use error::*;
