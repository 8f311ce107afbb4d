use chrono::{DateTime, Utc};
use std::fmt;

/// Lifecycle state of an appointment.
///
/// Transitions are strictly forward: `Booked` may move to `Completed` or
/// `Cancelled`, both of which are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    Booked,
    Completed,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Booked => write!(f, "booked"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// An appointment between one patient and one doctor.
///
/// `slot_id` and `appointment_time` are set when the appointment was created
/// by reserving an availability slot; direct requests leave them empty.
/// `doctor_notes` is set only on completion.
#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub problem: Option<String>,
    pub status: AppointmentStatus,
    pub slot_id: Option<String>,
    pub appointment_time: Option<DateTime<Utc>>,
    pub doctor_notes: Option<String>,
}

/// Payload for creating a new appointment.
#[derive(Debug, Clone)]
pub struct AppointmentCreate {
    pub patient_id: String,
    pub doctor_id: String,
    pub problem: Option<String>,
    pub slot_id: Option<String>,
    pub appointment_time: Option<DateTime<Utc>>,
}
