use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{error, info};

use super::config::ClinicConfig;
use crate::actor_framework::ResourceActor;
use crate::api::ClinicApi;
use crate::auth::{AccessGate, PasswordHasher, TokenService};
use crate::clients::{AppointmentClient, AvailabilityClient, DirectoryClient, TriageClient};
use crate::directory_actor::DirectoryActor;
use crate::domain::{Appointment, AvailabilitySlot, SymptomRecord};

fn counter_ids(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || {
        let id = counter.fetch_add(1, Ordering::SeqCst);
        format!("{}_{}", prefix, id)
    }
}

/// The main application system that orchestrates all actors.
///
/// Responsible for starting up actors, wiring them together, and handling
/// shutdown.
pub struct ClinicSystem {
    pub api: ClinicApi,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ClinicSystem {
    pub fn new(config: ClinicConfig) -> Self {
        let hasher = PasswordHasher::new(config.bcrypt_cost);
        let tokens = TokenService::new(&config.token);

        // 1. Directory service (bespoke actor: uniqueness + credential store)
        let (directory_actor, directory_sender) = DirectoryActor::new(config.channel_buffer);
        let directory_client = DirectoryClient::new(directory_sender, hasher);
        let directory_handle = tokio::spawn(directory_actor.run());

        // 2. Ledger actors on the generic framework
        let (slot_actor, slot_client) =
            ResourceActor::<AvailabilitySlot>::new(config.channel_buffer, counter_ids("slot"));
        let slot_handle = tokio::spawn(slot_actor.run());

        let (appointment_actor, appointment_resource_client) =
            ResourceActor::<Appointment>::new(config.channel_buffer, counter_ids("appointment"));
        let appointment_handle = tokio::spawn(appointment_actor.run());

        let (record_actor, record_client) =
            ResourceActor::<SymptomRecord>::new(config.channel_buffer, counter_ids("record"));
        let record_handle = tokio::spawn(record_actor.run());

        // 3. Clients and the gate
        let appointments =
            AppointmentClient::new(appointment_resource_client, directory_client.clone());
        let availability = AvailabilityClient::new(slot_client, appointments.clone());
        let triage = TriageClient::new(record_client, directory_client.clone());
        let gate = AccessGate::new(tokens.clone(), directory_client.clone());

        let api = ClinicApi::new(gate, directory_client, availability, appointments, triage, tokens);

        Self {
            api,
            handles: vec![directory_handle, slot_handle, appointment_handle, record_handle],
        }
    }

    /// Drops the clients (closing every actor channel) and waits for the
    /// actors to drain and stop.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.api);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
