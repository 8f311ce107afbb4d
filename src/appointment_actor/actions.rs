use crate::domain::Appointment;

/// Custom actions for appointments. Each carries the acting party's id so
/// ownership is checked inside the actor, atomically with the transition.
#[derive(Debug, Clone)]
pub enum AppointmentAction {
    /// Patient cancels their own booked appointment.
    Cancel { patient_id: String },
    /// Doctor completes their own booked appointment, attaching notes.
    Complete { doctor_id: String, notes: String },
}

/// Results from AppointmentActions - variants match 1:1 with AppointmentAction
#[derive(Debug, Clone)]
pub enum AppointmentActionResult {
    Cancelled(Appointment),
    Completed(Appointment),
}
