use crate::domain::AvailabilitySlot;

/// Custom actions for availability slots.
#[derive(Debug, Clone)]
pub enum SlotAction {
    /// Atomically checks the slot is unbooked and flips it to booked.
    ///
    /// Runs inside the slot actor, so two concurrent reservation attempts on
    /// the same slot resolve to exactly one success.
    Reserve,
}

/// Results from SlotActions - variants match 1:1 with SlotAction
#[derive(Debug, Clone)]
pub enum SlotActionResult {
    /// The slot after the flip; carries doctor and time for the linked
    /// appointment.
    Reserved(AvailabilitySlot),
}
