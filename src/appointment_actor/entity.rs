use super::actions::{AppointmentAction, AppointmentActionResult};
use super::error::AppointmentError;
use crate::actor_framework::Entity;
use crate::domain::{Appointment, AppointmentCreate, AppointmentStatus};

/// Listing filter for appointments: one party's view.
#[derive(Debug, Clone)]
pub enum AppointmentFilter {
    ForPatient(String),
    ForDoctor(String),
}

impl Entity for Appointment {
    type Id = String;
    type CreatePayload = AppointmentCreate;
    type Patch = ();
    type Action = AppointmentAction;
    type ActionResult = AppointmentActionResult;
    type Filter = AppointmentFilter;
    type Error = AppointmentError;

    fn from_create(id: String, payload: AppointmentCreate) -> Result<Self, AppointmentError> {
        Ok(Self {
            id,
            patient_id: payload.patient_id,
            doctor_id: payload.doctor_id,
            problem: payload.problem,
            status: AppointmentStatus::Booked,
            slot_id: payload.slot_id,
            appointment_time: payload.appointment_time,
            doctor_notes: None,
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), AppointmentError> {
        Ok(())
    }

    /// The status state machine. An appointment not owned by the acting
    /// party is reported as not found, the same as an absent id.
    fn handle_action(
        &mut self,
        action: AppointmentAction,
    ) -> Result<AppointmentActionResult, AppointmentError> {
        match action {
            AppointmentAction::Cancel { patient_id } => {
                if self.patient_id != patient_id {
                    return Err(AppointmentError::NotFound(self.id.clone()));
                }
                if self.status != AppointmentStatus::Booked {
                    return Err(AppointmentError::InvalidTransition(self.status));
                }
                self.status = AppointmentStatus::Cancelled;
                Ok(AppointmentActionResult::Cancelled(self.clone()))
            }
            AppointmentAction::Complete { doctor_id, notes } => {
                if self.doctor_id != doctor_id {
                    return Err(AppointmentError::NotFound(self.id.clone()));
                }
                if self.status != AppointmentStatus::Booked {
                    return Err(AppointmentError::InvalidTransition(self.status));
                }
                self.status = AppointmentStatus::Completed;
                self.doctor_notes = Some(notes);
                Ok(AppointmentActionResult::Completed(self.clone()))
            }
        }
    }

    fn matches(&self, filter: &AppointmentFilter) -> bool {
        match filter {
            AppointmentFilter::ForPatient(patient_id) => &self.patient_id == patient_id,
            AppointmentFilter::ForDoctor(doctor_id) => &self.doctor_id == doctor_id,
        }
    }
}
