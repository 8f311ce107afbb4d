use tracing::{info, instrument};

use crate::actor_framework::ResourceClient;
use crate::clients::DirectoryClient;
use crate::domain::{RecordPatch, SymptomRecord, SymptomRecordCreate, UserProfile};
use crate::impl_client_methods;
use crate::record_actor::{RecordError, RecordFilter};
use crate::triage;

/// Outcome of the triage composite operation: the persisted record plus the
/// doctors whose specialization matches the prediction.
#[derive(Debug, Clone)]
pub struct TriageOutcome {
    pub record: SymptomRecord,
    pub doctors: Vec<UserProfile>,
}

/// Client for the symptom-record ledger and the triage flow.
#[derive(Clone)]
pub struct TriageClient {
    inner: ResourceClient<SymptomRecord>,
    directory: DirectoryClient,
}

impl TriageClient {
    pub fn new(inner: ResourceClient<SymptomRecord>, directory: DirectoryClient) -> Self {
        Self { inner, directory }
    }

    /// Runs the triage mapper over the reported symptoms, persists the
    /// record, and returns it with the matching doctors.
    #[instrument(skip(self, symptoms), fields(symptom_count = symptoms.len()))]
    pub async fn record_symptom_history(
        &self,
        patient_id: String,
        symptoms: Vec<String>,
    ) -> Result<TriageOutcome, RecordError> {
        let specialization = triage::suggest_specialization(&symptoms);
        info!(specialization, "Triage mapping complete");

        let id = self
            .inner
            .create(SymptomRecordCreate {
                patient_id,
                symptoms,
                predicted_specialization: specialization.to_string(),
            })
            .await?;
        let record = self
            .inner
            .get(id.clone())
            .await?
            .ok_or(RecordError::NotFound(id))?;

        let doctors = self
            .directory
            .list_doctors(Some(specialization.to_string()))
            .await
            .map_err(|e| RecordError::DirectoryLookup(e.to_string()))?
            .iter()
            .map(UserProfile::from)
            .collect();

        Ok(TriageOutcome { record, doctors })
    }

    #[instrument(skip(self))]
    pub async fn history_for_patient(
        &self,
        patient_id: String,
    ) -> Result<Vec<SymptomRecord>, RecordError> {
        let mut records = self.inner.list(RecordFilter::ForPatient(patient_id)).await?;
        records.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(records)
    }

    /// Applies a doctor's diagnosis/prescription to a record.
    #[instrument(skip(self, patch))]
    pub async fn add_diagnosis(
        &self,
        record_id: String,
        patch: RecordPatch,
    ) -> Result<SymptomRecord, RecordError> {
        info!("Processing add_diagnosis request");
        self.inner.update(record_id, patch).await
    }
}

impl_client_methods!(TriageClient, SymptomRecord, symptom_record);
