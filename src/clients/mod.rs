//! Typed clients for the service actors. Orchestration that spans more
//! than one service (doctor validation, slot reservation, triage) lives
//! here, on the client side.

mod appointment_client;
mod availability_client;
mod directory_client;
mod macros;
mod triage_client;

pub use appointment_client::AppointmentClient;
pub use availability_client::AvailabilityClient;
pub use directory_client::DirectoryClient;
pub use triage_client::{TriageClient, TriageOutcome};
