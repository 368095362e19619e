#![no_std]

pub mod access;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod validation;

use soroban_sdk::{
    contract, contractimpl, contracttype, symbol_short, Address, Env, String, Symbol, Vec,
};

pub use errors::{ContractError, ErrorCategory, ErrorSeverity};

/// TTL constants for persistent storage (in ledgers)
const TTL_THRESHOLD: u32 = 17_280; // ~1 day
const TTL_EXTEND_TO: u32 = 518_400; // ~30 days

/// Extends the instance storage TTL. Instance TTL covers the owner slot.
fn extend_ttl_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Extends the time-to-live (TTL) for a storage key containing an Address.
pub(crate) fn extend_ttl_address_key(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Extends the time-to-live (TTL) for a storage key containing a u64 value.
pub(crate) fn extend_ttl_u64_key(env: &Env, key: &(Symbol, u64)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Extends the time-to-live (TTL) for a single ledger entry key.
pub(crate) fn extend_ttl_entry_key(env: &Env, key: &(Symbol, u64, u32)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// A single diagnosis/treatment entry in a patient's ledger
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientRecord {
    pub patient_name: String,
    pub diagnosis: String,
    pub treatment: String,
}

#[contract]
pub struct HealthcareRecordsContract;

#[contractimpl]
impl HealthcareRecordsContract {
    /// Deploy the contract with its owner. The owner can never be replaced.
    pub fn __constructor(env: Env, owner: Address) {
        access::set_owner(&env, &owner);
        extend_ttl_instance(&env);

        events::publish_initialized(&env, owner);
    }

    /// Get the owner address
    pub fn get_owner(env: Env) -> Address {
        access::owner(&env).unwrap_or_else(|err| env.panic_with_error(err))
    }

    /// Authorize a provider. Only the owner may call this.
    pub fn authorize_provider(
        env: Env,
        caller: Address,
        provider: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        access::require_owner(&env, &caller)
            .map_err(|err| errors::reject(&env, symbol_short!("AUTH_PRV"), err))?;

        access::authorize(&env, &provider);
        extend_ttl_instance(&env);

        events::publish_provider_authorized(&env, provider);

        Ok(())
    }

    /// Check if an address is an authorized provider
    pub fn is_provider(env: Env, address: Address) -> bool {
        access::is_provider(&env, &address)
    }

    /// Append a record to a patient's ledger.
    ///
    /// Any caller may append; the provider set is not consulted here.
    pub fn add_record(
        env: Env,
        patient_id: u64,
        patient_name: String,
        diagnosis: String,
        treatment: String,
    ) -> Result<(), ContractError> {
        validation::validate_record(patient_id, &diagnosis, &treatment)
            .map_err(|err| errors::reject(&env, symbol_short!("ADD_REC"), err))?;

        let record = PatientRecord {
            patient_name: patient_name.clone(),
            diagnosis: diagnosis.clone(),
            treatment: treatment.clone(),
        };
        ledger::append(&env, patient_id, record);
        extend_ttl_instance(&env);

        events::publish_record_added(&env, patient_id, patient_name, diagnosis, treatment);

        Ok(())
    }

    /// Get every record for a patient, oldest first
    pub fn get_patient_records(
        env: Env,
        patient_id: u64,
    ) -> Result<Vec<PatientRecord>, ContractError> {
        ledger::records(&env, patient_id)
            .map_err(|err| errors::reject(&env, symbol_short!("GET_REC"), err))
    }

    /// Number of records held for a patient; zero when none exist
    pub fn get_record_count(env: Env, patient_id: u64) -> u32 {
        ledger::count(&env, patient_id)
    }

    /// Contract interface version
    pub fn version() -> u32 {
        1
    }
}


#[cfg(test)]
mod test_ledger;
