//! Symptom-to-specialization mapping.
//!
//! Matching is exact string equality against a keyword list after
//! lowercasing. No substring or fuzzy matching: "severe headache" does not
//! match the "headache" keyword. The first symptom that matches any keyword
//! decides the outcome, with cardiology checked before neurology before
//! orthopedics for each symptom.

pub const CARDIOLOGIST: &str = "Cardiologist";
pub const NEUROLOGIST: &str = "Neurologist";
pub const ORTHOPEDIC: &str = "Orthopedic";
pub const GENERAL_PHYSICIAN: &str = "General Physician";

const CARDIOLOGY_KEYWORDS: [&str; 4] = ["chest pain", "shortness of breath", "heart", "palpitation"];
const NEUROLOGY_KEYWORDS: [&str; 4] = ["headache", "dizziness", "seizure", "migraine"];
const ORTHOPEDICS_KEYWORDS: [&str; 4] = ["joint pain", "back pain", "fracture", "bone"];

/// Maps reported symptom phrases to a suggested specialization label.
///
/// Pure and deterministic for identical input ordering. Returns
/// [`GENERAL_PHYSICIAN`] when no symptom matches any keyword.
pub fn suggest_specialization(symptoms: &[String]) -> &'static str {
    for symptom in symptoms {
        let symptom = symptom.to_lowercase();
        if CARDIOLOGY_KEYWORDS.contains(&symptom.as_str()) {
            return CARDIOLOGIST;
        }
        if NEUROLOGY_KEYWORDS.contains(&symptom.as_str()) {
            return NEUROLOGIST;
        }
        if ORTHOPEDICS_KEYWORDS.contains(&symptom.as_str()) {
            return ORTHOPEDIC;
        }
    }
    GENERAL_PHYSICIAN
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrases(input: &[&str]) -> Vec<String> {
        input.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn cardiology_keyword_wins() {
        assert_eq!(suggest_specialization(&phrases(&["chest pain"])), CARDIOLOGIST);
        assert_eq!(suggest_specialization(&phrases(&["Palpitation"])), CARDIOLOGIST);
    }

    #[test]
    fn single_neurology_keyword() {
        assert_eq!(suggest_specialization(&phrases(&["headache"])), NEUROLOGIST);
    }

    #[test]
    fn first_matching_symptom_wins_not_first_symptom() {
        // "severe headache" is not an exact keyword, so it is skipped and
        // "chest pain" decides the outcome.
        let symptoms = phrases(&["Severe Headache", "chest pain"]);
        assert_eq!(suggest_specialization(&symptoms), CARDIOLOGIST);
    }

    #[test]
    fn cardiology_checked_before_neurology_per_symptom() {
        let symptoms = phrases(&["headache", "heart"]);
        assert_eq!(suggest_specialization(&symptoms), NEUROLOGIST);
    }

    #[test]
    fn orthopedics_keyword() {
        assert_eq!(suggest_specialization(&phrases(&["Back Pain"])), ORTHOPEDIC);
    }

    #[test]
    fn no_match_falls_back_to_general_physician() {
        let symptoms = phrases(&["runny nose", "mild fever"]);
        assert_eq!(suggest_specialization(&symptoms), GENERAL_PHYSICIAN);
    }

    #[test]
    fn empty_input_falls_back_to_general_physician() {
        assert_eq!(suggest_specialization(&[]), GENERAL_PHYSICIAN);
    }
}
