/// A patient's reported symptoms and the triage outcome.
///
/// `symptoms` keeps the phrases in the order the patient reported them;
/// matching order matters to the triage mapper. `diagnosis` and
/// `prescription` are filled in later by a doctor.
#[derive(Debug, Clone, PartialEq)]
pub struct SymptomRecord {
    pub id: String,
    pub patient_id: String,
    pub symptoms: Vec<String>,
    pub predicted_specialization: String,
    pub diagnosis: Option<String>,
    pub prescription: Option<String>,
}

/// Payload for persisting a triage result.
#[derive(Debug, Clone)]
pub struct SymptomRecordCreate {
    pub patient_id: String,
    pub symptoms: Vec<String>,
    pub predicted_specialization: String,
}

/// A doctor's diagnosis update for an existing record.
#[derive(Debug, Clone)]
pub struct RecordPatch {
    pub diagnosis: Option<String>,
    pub prescription: Option<String>,
}
