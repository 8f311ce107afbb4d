use tracing::{error, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::appointment_actor::{
    AppointmentAction, AppointmentActionResult, AppointmentError, AppointmentFilter,
};
use crate::clients::DirectoryClient;
use crate::domain::{Appointment, AppointmentCreate, Role};
use crate::impl_client_methods;

/// Client for the appointment ledger.
///
/// Direct booking validates the target doctor against the directory before
/// the appointment is created.
#[derive(Clone)]
pub struct AppointmentClient {
    inner: ResourceClient<Appointment>,
    directory: DirectoryClient,
}

impl AppointmentClient {
    pub fn new(inner: ResourceClient<Appointment>, directory: DirectoryClient) -> Self {
        Self { inner, directory }
    }

    /// Books an appointment directly with a doctor, bypassing slots.
    #[instrument(skip(self))]
    pub async fn create_direct(
        &self,
        patient_id: String,
        doctor_id: String,
        problem: Option<String>,
    ) -> Result<Appointment, AppointmentError> {
        info!("Processing create_direct request");

        match self.directory.get_user(doctor_id.clone()).await {
            Ok(Some(user)) if user.role == Role::Doctor => {
                info!(doctor_name = %user.name, "Doctor validation successful");
            }
            Ok(_) => {
                error!("Doctor not found");
                return Err(AppointmentError::DoctorNotFound(doctor_id));
            }
            Err(e) => {
                error!(error = %e, "Doctor validation failed");
                return Err(AppointmentError::ActorCommunicationError(e.to_string()));
            }
        }

        self.book(AppointmentCreate {
            patient_id,
            doctor_id,
            problem,
            slot_id: None,
            appointment_time: None,
        })
        .await
    }

    /// Creates the appointment record and returns it in full. Also used by
    /// the availability client after a successful slot reservation.
    pub(crate) async fn book(
        &self,
        payload: AppointmentCreate,
    ) -> Result<Appointment, AppointmentError> {
        let id = self.inner.create(payload).await?;
        self.inner
            .get(id.clone())
            .await?
            .ok_or(AppointmentError::NotFound(id))
    }

    /// Cancels the patient's own booked appointment.
    #[instrument(skip(self))]
    pub async fn cancel(
        &self,
        appointment_id: String,
        patient_id: String,
    ) -> Result<Appointment, AppointmentError> {
        info!("Processing cancel request");
        match self
            .inner
            .perform_action(appointment_id, AppointmentAction::Cancel { patient_id })
            .await?
        {
            AppointmentActionResult::Cancelled(appointment) => Ok(appointment),
            other => Err(AppointmentError::ActorCommunicationError(format!(
                "unexpected action result: {:?}",
                other
            ))),
        }
    }

    /// Completes the doctor's own booked appointment, storing notes.
    #[instrument(skip(self, notes))]
    pub async fn complete(
        &self,
        appointment_id: String,
        doctor_id: String,
        notes: String,
    ) -> Result<Appointment, AppointmentError> {
        info!("Processing complete request");
        match self
            .inner
            .perform_action(appointment_id, AppointmentAction::Complete { doctor_id, notes })
            .await?
        {
            AppointmentActionResult::Completed(appointment) => Ok(appointment),
            other => Err(AppointmentError::ActorCommunicationError(format!(
                "unexpected action result: {:?}",
                other
            ))),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_for_patient(
        &self,
        patient_id: String,
    ) -> Result<Vec<Appointment>, AppointmentError> {
        let mut appointments = self
            .inner
            .list(AppointmentFilter::ForPatient(patient_id))
            .await?;
        appointments.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(appointments)
    }

    #[instrument(skip(self))]
    pub async fn list_for_doctor(
        &self,
        doctor_id: String,
    ) -> Result<Vec<Appointment>, AppointmentError> {
        let mut appointments = self
            .inner
            .list(AppointmentFilter::ForDoctor(doctor_id))
            .await?;
        appointments.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(appointments)
    }
}

impl_client_methods!(AppointmentClient, Appointment, appointment);
