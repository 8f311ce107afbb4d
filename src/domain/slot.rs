use chrono::{DateTime, Utc};

/// A doctor-declared block of time available for booking.
///
/// The `booked` flag flips to `true` exactly once, inside the slot actor,
/// when a patient reserves the slot. There is no release path back to
/// `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilitySlot {
    pub id: String,
    pub doctor_id: String,
    pub time: DateTime<Utc>,
    pub booked: bool,
}

/// Payload for declaring a new availability slot.
#[derive(Debug, Clone)]
pub struct SlotCreate {
    pub doctor_id: String,
    pub time: DateTime<Utc>,
}
