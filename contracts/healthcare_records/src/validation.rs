use crate::errors::ContractError;
use soroban_sdk::String;

/// Patient identifiers are positive; zero is never a valid key.
pub fn validate_patient_id(patient_id: u64) -> Result<(), ContractError> {
    if patient_id == 0 {
        return Err(ContractError::InvalidIdentifier);
    }
    Ok(())
}

/// Diagnosis and treatment must both carry text. The patient name may be empty.
pub fn validate_record_fields(diagnosis: &String, treatment: &String) -> Result<(), ContractError> {
    if diagnosis.is_empty() || treatment.is_empty() {
        return Err(ContractError::InvalidField);
    }
    Ok(())
}

/// Runs every `add_record` check in order; the first failure wins.
pub fn validate_record(
    patient_id: u64,
    diagnosis: &String,
    treatment: &String,
) -> Result<(), ContractError> {
    validate_patient_id(patient_id)?;
    validate_record_fields(diagnosis, treatment)
}
