//! The request surface. Every operation resolves the caller through the
//! access gate before touching a ledger, and every service error is mapped
//! into the outward error taxonomy here.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::instrument;

use crate::appointment_actor::AppointmentError;
use crate::auth::{AccessGate, AuthError, TokenService};
use crate::clients::{
    AppointmentClient, AvailabilityClient, DirectoryClient, TriageClient, TriageOutcome,
};
use crate::directory_actor::DirectoryError;
use crate::domain::{
    Appointment, AvailabilitySlot, RecordPatch, Role, SymptomRecord, UserCreate, UserProfile,
};
use crate::record_actor::RecordError;
use crate::slot_actor::SlotError;

/// Outward error taxonomy. Every operation fails with exactly one of
/// these; nothing is retried or swallowed below this layer.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("conflict: {0}")]
    ValidationConflict(String),
    #[error("unauthenticated: {0}")]
    AuthenticationFailure(String),
    #[error("forbidden: {0}")]
    AuthorizationFailure(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid state transition: {0}")]
    InvalidStateTransition(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Unauthenticated => ApiError::AuthenticationFailure(err.to_string()),
            AuthError::Forbidden(_) => ApiError::AuthorizationFailure(err.to_string()),
            AuthError::TokenEncoding(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<DirectoryError> for ApiError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::EmailTaken(_) => ApiError::ValidationConflict(err.to_string()),
            DirectoryError::InvalidCredentials => ApiError::AuthenticationFailure(err.to_string()),
            DirectoryError::Hashing(msg) => ApiError::Internal(msg),
            DirectoryError::ActorCommunicationError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<SlotError> for ApiError {
    fn from(err: SlotError) -> Self {
        match err {
            SlotError::NotFound(_) => ApiError::NotFound(err.to_string()),
            SlotError::SlotUnavailable(_) => ApiError::ValidationConflict(err.to_string()),
            SlotError::AppointmentCreation(msg) => ApiError::Internal(msg),
            SlotError::ActorCommunicationError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<AppointmentError> for ApiError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::NotFound(_) | AppointmentError::DoctorNotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            AppointmentError::InvalidTransition(_) => {
                ApiError::InvalidStateTransition(err.to_string())
            }
            AppointmentError::ActorCommunicationError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<RecordError> for ApiError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::NotFound(_) => ApiError::NotFound(err.to_string()),
            RecordError::DirectoryLookup(msg) => ApiError::Internal(msg),
            RecordError::ActorCommunicationError(msg) => ApiError::Internal(msg),
        }
    }
}

/// The application facade: public registration/login/lookups plus the
/// role-gated patient and doctor operations.
#[derive(Clone)]
pub struct ClinicApi {
    gate: AccessGate,
    directory: DirectoryClient,
    availability: AvailabilityClient,
    appointments: AppointmentClient,
    triage: TriageClient,
    tokens: TokenService,
}

impl ClinicApi {
    pub fn new(
        gate: AccessGate,
        directory: DirectoryClient,
        availability: AvailabilityClient,
        appointments: AppointmentClient,
        triage: TriageClient,
        tokens: TokenService,
    ) -> Self {
        Self { gate, directory, availability, appointments, triage, tokens }
    }

    // --- Public surface ---

    #[instrument(skip(self, payload), fields(email = %payload.email))]
    pub async fn register(&self, payload: UserCreate) -> Result<String, ApiError> {
        Ok(self.directory.register(payload).await?)
    }

    /// Checks credentials and issues a bearer token.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: String, password: String) -> Result<String, ApiError> {
        let user = self.directory.authenticate(email, password).await?;
        Ok(self.tokens.issue(&user)?)
    }

    /// Doctor directory, optionally filtered by specialization
    /// (case-insensitive). An unmatched filter yields an empty list.
    #[instrument(skip(self))]
    pub async fn doctor_directory(
        &self,
        specialization: Option<String>,
    ) -> Result<Vec<UserProfile>, ApiError> {
        let doctors = self.directory.list_doctors(specialization).await?;
        Ok(doctors.iter().map(UserProfile::from).collect())
    }

    /// A doctor's unbooked slots, sorted by time.
    #[instrument(skip(self))]
    pub async fn open_slots(&self, doctor_id: String) -> Result<Vec<AvailabilitySlot>, ApiError> {
        Ok(self.availability.open_slots(doctor_id).await?)
    }

    // --- Any authenticated caller ---

    #[instrument(skip(self, bearer))]
    pub async fn profile(&self, bearer: &str) -> Result<UserProfile, ApiError> {
        let user = self.gate.resolve(bearer).await.into_result()?;
        Ok(UserProfile::from(&user))
    }

    // --- Patient operations ---

    /// Triage: maps symptoms to a specialization, persists the record, and
    /// suggests matching doctors.
    #[instrument(skip(self, bearer, symptoms))]
    pub async fn triage(
        &self,
        bearer: &str,
        symptoms: Vec<String>,
    ) -> Result<TriageOutcome, ApiError> {
        let patient = self.gate.require_role(bearer, Role::Patient).await.into_result()?;
        Ok(self.triage.record_symptom_history(patient.id, symptoms).await?)
    }

    #[instrument(skip(self, bearer))]
    pub async fn my_symptom_history(&self, bearer: &str) -> Result<Vec<SymptomRecord>, ApiError> {
        let patient = self.gate.require_role(bearer, Role::Patient).await.into_result()?;
        Ok(self.triage.history_for_patient(patient.id).await?)
    }

    #[instrument(skip(self, bearer))]
    pub async fn reserve_slot(&self, bearer: &str, slot_id: String) -> Result<Appointment, ApiError> {
        let patient = self.gate.require_role(bearer, Role::Patient).await.into_result()?;
        Ok(self.availability.reserve_slot(slot_id, patient.id).await?)
    }

    /// Direct appointment request, bypassing slots.
    #[instrument(skip(self, bearer, problem))]
    pub async fn request_appointment(
        &self,
        bearer: &str,
        doctor_id: String,
        problem: Option<String>,
    ) -> Result<Appointment, ApiError> {
        let patient = self.gate.require_role(bearer, Role::Patient).await.into_result()?;
        Ok(self.appointments.create_direct(patient.id, doctor_id, problem).await?)
    }

    #[instrument(skip(self, bearer))]
    pub async fn my_appointments(&self, bearer: &str) -> Result<Vec<Appointment>, ApiError> {
        let patient = self.gate.require_role(bearer, Role::Patient).await.into_result()?;
        Ok(self.appointments.list_for_patient(patient.id).await?)
    }

    #[instrument(skip(self, bearer))]
    pub async fn cancel_appointment(
        &self,
        bearer: &str,
        appointment_id: String,
    ) -> Result<Appointment, ApiError> {
        let patient = self.gate.require_role(bearer, Role::Patient).await.into_result()?;
        Ok(self.appointments.cancel(appointment_id, patient.id).await?)
    }

    // --- Doctor operations ---

    #[instrument(skip(self, bearer))]
    pub async fn declare_slot(
        &self,
        bearer: &str,
        time: DateTime<Utc>,
    ) -> Result<String, ApiError> {
        let doctor = self.gate.require_role(bearer, Role::Doctor).await.into_result()?;
        Ok(self.availability.declare_slot(doctor.id, time).await?)
    }

    /// A specific patient's symptom history, readable by doctors.
    #[instrument(skip(self, bearer))]
    pub async fn patient_history(
        &self,
        bearer: &str,
        patient_id: String,
    ) -> Result<Vec<SymptomRecord>, ApiError> {
        self.gate.require_role(bearer, Role::Doctor).await.into_result()?;
        Ok(self.triage.history_for_patient(patient_id).await?)
    }

    #[instrument(skip(self, bearer, diagnosis, prescription))]
    pub async fn add_diagnosis(
        &self,
        bearer: &str,
        record_id: String,
        diagnosis: Option<String>,
        prescription: Option<String>,
    ) -> Result<SymptomRecord, ApiError> {
        self.gate.require_role(bearer, Role::Doctor).await.into_result()?;
        let patch = RecordPatch { diagnosis, prescription };
        Ok(self.triage.add_diagnosis(record_id, patch).await?)
    }

    #[instrument(skip(self, bearer))]
    pub async fn doctor_appointments(&self, bearer: &str) -> Result<Vec<Appointment>, ApiError> {
        let doctor = self.gate.require_role(bearer, Role::Doctor).await.into_result()?;
        Ok(self.appointments.list_for_doctor(doctor.id).await?)
    }

    #[instrument(skip(self, bearer, notes))]
    pub async fn complete_appointment(
        &self,
        bearer: &str,
        appointment_id: String,
        notes: String,
    ) -> Result<Appointment, ApiError> {
        let doctor = self.gate.require_role(bearer, Role::Doctor).await.into_result()?;
        Ok(self.appointments.complete(appointment_id, doctor.id, notes).await?)
    }
}
