//! Per-patient append-only record log.
//!
//! Each patient identifier owns a counter at `("REC_CNT", patient_id)` and
//! one persistent entry per record at `("RECORD", patient_id, index)`, with
//! indices `0..count`. Entries are only ever added at index `count`; nothing
//! here rewrites or removes an existing entry.

use crate::{errors::ContractError, extend_ttl_entry_key, extend_ttl_u64_key, PatientRecord};
use soroban_sdk::{log, symbol_short, Env, Symbol, Vec};

const RECORD: Symbol = symbol_short!("RECORD");
const RECORD_COUNT: Symbol = symbol_short!("REC_CNT");

fn count_key(patient_id: u64) -> (Symbol, u64) {
    (RECORD_COUNT, patient_id)
}

fn entry_key(patient_id: u64, index: u32) -> (Symbol, u64, u32) {
    (RECORD, patient_id, index)
}

/// Appends `record` after the last entry for `patient_id`.
/// Only the new entry and the counter are written, so the log has no size cap.
pub(crate) fn append(env: &Env, patient_id: u64, record: PatientRecord) {
    let index = count(env, patient_id);
    let key = entry_key(patient_id, index);
    env.storage().persistent().set(&key, &record);
    extend_ttl_entry_key(env, &key);

    let next = index.saturating_add(1);
    let counter = count_key(patient_id);
    env.storage().persistent().set(&counter, &next);
    extend_ttl_u64_key(env, &counter);

    log!(env, "record appended", patient_id, next);
}

/// Returns every record for `patient_id` in insertion order.
/// A patient with no records is reported as `NotFound`, never as an empty list.
pub fn records(env: &Env, patient_id: u64) -> Result<Vec<PatientRecord>, ContractError> {
    let total = count(env, patient_id);
    if total == 0 {
        return Err(ContractError::NotFound);
    }
    extend_ttl_u64_key(env, &count_key(patient_id));

    let mut records = Vec::new(env);
    for index in 0..total {
        let key = entry_key(patient_id, index);
        let record: PatientRecord = env
            .storage()
            .persistent()
            .get(&key)
            .ok_or(ContractError::NotFound)?;
        extend_ttl_entry_key(env, &key);
        records.push_back(record);
    }
    Ok(records)
}

pub fn count(env: &Env, patient_id: u64) -> u32 {
    env.storage()
        .persistent()
        .get(&count_key(patient_id))
        .unwrap_or(0)
}
