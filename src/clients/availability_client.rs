use chrono::{DateTime, Utc};
use tracing::{error, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::clients::AppointmentClient;
use crate::domain::{Appointment, AppointmentCreate, AvailabilitySlot, SlotCreate};
use crate::impl_client_methods;
use crate::slot_actor::{SlotAction, SlotActionResult, SlotError, SlotFilter};

/// Client for the availability ledger.
///
/// `reserve_slot` orchestrates the two services involved in a booking: the
/// slot actor performs the atomic check-and-flip, then the appointment
/// ledger records the linked appointment.
#[derive(Clone)]
pub struct AvailabilityClient {
    inner: ResourceClient<AvailabilitySlot>,
    appointments: AppointmentClient,
}

impl AvailabilityClient {
    pub fn new(inner: ResourceClient<AvailabilitySlot>, appointments: AppointmentClient) -> Self {
        Self { inner, appointments }
    }

    /// Declares an unbooked slot for a doctor. No overlap check is made
    /// against the doctor's existing slots.
    #[instrument(skip(self))]
    pub async fn declare_slot(
        &self,
        doctor_id: String,
        time: DateTime<Utc>,
    ) -> Result<String, SlotError> {
        info!("Processing declare_slot request");
        self.inner.create(SlotCreate { doctor_id, time }).await
    }

    /// Lists a doctor's unbooked slots, sorted by time.
    #[instrument(skip(self))]
    pub async fn open_slots(&self, doctor_id: String) -> Result<Vec<AvailabilitySlot>, SlotError> {
        let mut slots = self
            .inner
            .list(SlotFilter { doctor_id, open_only: true })
            .await?;
        slots.sort_by(|a, b| (a.time, &a.id).cmp(&(b.time, &b.id)));
        Ok(slots)
    }

    /// Reserves a slot for a patient and books the linked appointment.
    ///
    /// Of N concurrent reservations on one slot, exactly one passes the
    /// actor's check-and-flip; the rest fail with
    /// [`SlotError::SlotUnavailable`].
    #[instrument(skip(self))]
    pub async fn reserve_slot(
        &self,
        slot_id: String,
        patient_id: String,
    ) -> Result<Appointment, SlotError> {
        info!("Processing reserve_slot request");

        let slot = match self.inner.perform_action(slot_id, SlotAction::Reserve).await? {
            SlotActionResult::Reserved(slot) => slot,
        };
        info!(doctor_id = %slot.doctor_id, "Slot reserved");

        let appointment = self
            .appointments
            .book(AppointmentCreate {
                patient_id,
                doctor_id: slot.doctor_id,
                problem: None,
                slot_id: Some(slot.id),
                appointment_time: Some(slot.time),
            })
            .await
            .map_err(|e| {
                error!(error = %e, "Appointment creation failed after slot flip");
                SlotError::AppointmentCreation(e.to_string())
            })?;

        info!(appointment_id = %appointment.id, "Appointment booked from slot");
        Ok(appointment)
    }
}

impl_client_methods!(AvailabilityClient, AvailabilitySlot, slot);
