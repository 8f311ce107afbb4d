mod domain;

mod actor_framework;
mod api;
mod app_system;
mod appointment_actor;
mod auth;
mod clients;
mod directory_actor;
mod messages;
mod record_actor;
mod slot_actor;
mod triage;

#[cfg(test)]
mod mock_framework;

use chrono::Duration;
use tracing::{error, info, Instrument};

use crate::app_system::{setup_tracing, ClinicConfig, ClinicSystem};
use crate::auth::TokenConfig;
use crate::domain::{Role, UserCreate};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting clinic system");

    let config = ClinicConfig {
        token: TokenConfig {
            secret: "change-me-in-deployment".to_string(),
            ttl: Duration::minutes(30),
        },
        bcrypt_cost: bcrypt::DEFAULT_COST,
        channel_buffer: 32,
    };
    let system = ClinicSystem::new(config);
    let api = &system.api;

    // Register a doctor and a patient
    let doctor_id = api
        .register(UserCreate {
            name: "Dr. Grey".to_string(),
            email: "grey@clinic.example".to_string(),
            password: "doctor-password".to_string(),
            role: Role::Doctor,
            specialization: Some("Cardiologist".to_string()),
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(%doctor_id, "Doctor registered");

    let patient_id = api
        .register(UserCreate {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "patient-password".to_string(),
            role: Role::Patient,
            specialization: None,
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(%patient_id, "Patient registered");

    let doctor_token = api
        .login("grey@clinic.example".to_string(), "doctor-password".to_string())
        .await
        .map_err(|e| e.to_string())?;
    let patient_token = api
        .login("alice@example.com".to_string(), "patient-password".to_string())
        .await
        .map_err(|e| e.to_string())?;

    // Triage: the reported symptoms suggest a specialization and doctors
    let span = tracing::info_span!("triage_flow");
    let outcome = async {
        info!("Recording symptom history");
        api.triage(&patient_token, vec!["Severe Headache".to_string(), "chest pain".to_string()])
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;
    info!(
        specialization = %outcome.record.predicted_specialization,
        suggested_doctors = outcome.doctors.len(),
        "Triage complete"
    );

    // Slot booking: doctor declares, patient reserves
    let span = tracing::info_span!("booking_flow");
    let appointment = async {
        let slot_id = api
            .declare_slot(&doctor_token, chrono::Utc::now() + Duration::days(1))
            .await
            .map_err(|e| e.to_string())?;
        info!(%slot_id, "Slot declared");

        let appointment = api
            .reserve_slot(&patient_token, slot_id.clone())
            .await
            .map_err(|e| e.to_string())?;
        info!(appointment_id = %appointment.id, "Slot reserved");

        // A second reservation of the same slot must lose the race
        match api.reserve_slot(&patient_token, slot_id).await {
            Err(e) => info!(error = %e, "Second reservation rejected"),
            Ok(_) => error!("Second reservation unexpectedly succeeded"),
        }
        Ok::<_, String>(appointment)
    }
    .instrument(span)
    .await?;

    let completed = api
        .complete_appointment(&doctor_token, appointment.id, "Prescribed rest".to_string())
        .await
        .map_err(|e| e.to_string())?;
    info!(status = %completed.status, "Appointment completed");

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
