use super::error::RecordError;
use crate::actor_framework::Entity;
use crate::domain::{RecordPatch, SymptomRecord, SymptomRecordCreate};

/// Listing filter for symptom records.
#[derive(Debug, Clone)]
pub enum RecordFilter {
    ForPatient(String),
}

impl Entity for SymptomRecord {
    type Id = String;
    type CreatePayload = SymptomRecordCreate;
    type Patch = RecordPatch;
    type Action = ();
    type ActionResult = ();
    type Filter = RecordFilter;
    type Error = RecordError;

    fn from_create(id: String, payload: SymptomRecordCreate) -> Result<Self, RecordError> {
        Ok(Self {
            id,
            patient_id: payload.patient_id,
            symptoms: payload.symptoms,
            predicted_specialization: payload.predicted_specialization,
            diagnosis: None,
            prescription: None,
        })
    }

    /// Applies a doctor's diagnosis update. Fields left as `None` in the
    /// patch keep their current value.
    fn on_update(&mut self, patch: RecordPatch) -> Result<(), RecordError> {
        if let Some(diagnosis) = patch.diagnosis {
            self.diagnosis = Some(diagnosis);
        }
        if let Some(prescription) = patch.prescription {
            self.prescription = Some(prescription);
        }
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), RecordError> {
        Ok(())
    }

    fn matches(&self, filter: &RecordFilter) -> bool {
        match filter {
            RecordFilter::ForPatient(patient_id) => &self.patient_id == patient_id,
        }
    }
}
