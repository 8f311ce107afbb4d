use super::actions::{SlotAction, SlotActionResult};
use super::error::SlotError;
use crate::actor_framework::Entity;
use crate::domain::{AvailabilitySlot, SlotCreate};

/// Listing filter for slots. No overlap checks are made when declaring
/// slots, so a listing may contain slots at identical times.
#[derive(Debug, Clone)]
pub struct SlotFilter {
    pub doctor_id: String,
    pub open_only: bool,
}

impl Entity for AvailabilitySlot {
    type Id = String;
    type CreatePayload = SlotCreate;
    type Patch = ();
    type Action = SlotAction;
    type ActionResult = SlotActionResult;
    type Filter = SlotFilter;
    type Error = SlotError;

    fn from_create(id: String, payload: SlotCreate) -> Result<Self, SlotError> {
        Ok(Self {
            id,
            doctor_id: payload.doctor_id,
            time: payload.time,
            booked: false,
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), SlotError> {
        Ok(())
    }

    /// The single-acquisition gate: the booked flag flips true at most once.
    fn handle_action(&mut self, action: SlotAction) -> Result<SlotActionResult, SlotError> {
        match action {
            SlotAction::Reserve => {
                if self.booked {
                    return Err(SlotError::SlotUnavailable(self.id.clone()));
                }
                self.booked = true;
                Ok(SlotActionResult::Reserved(self.clone()))
            }
        }
    }

    fn matches(&self, filter: &SlotFilter) -> bool {
        self.doctor_id == filter.doctor_id && (!filter.open_only || !self.booked)
    }
}
