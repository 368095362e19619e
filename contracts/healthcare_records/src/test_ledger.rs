#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::{
    events::RecordAddedEvent, ContractError, HealthcareRecordsContract,
    HealthcareRecordsContractClient, PatientRecord,
};
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{symbol_short, vec, Address, Env, IntoVal, String, Val, Vec};

fn setup_test() -> (Env, Address, HealthcareRecordsContractClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let contract_id = env.register(HealthcareRecordsContract, (owner,));
    let client = HealthcareRecordsContractClient::new(&env, &contract_id);

    (env, contract_id, client)
}

fn record(env: &Env, name: &str, diagnosis: &str, treatment: &str) -> PatientRecord {
    PatientRecord {
        patient_name: String::from_str(env, name),
        diagnosis: String::from_str(env, diagnosis),
        treatment: String::from_str(env, treatment),
    }
}

#[test]
fn test_add_record_and_read_back() {
    let (env, contract_id, client) = setup_test();
    let name = String::from_str(&env, "Alice");
    let diagnosis = String::from_str(&env, "Flu");
    let treatment = String::from_str(&env, "Medication X");

    client.add_record(&1, &name, &diagnosis, &treatment);

    let expected = RecordAddedEvent {
        patient_id: 1,
        patient_name: name.clone(),
        diagnosis: diagnosis.clone(),
        treatment: treatment.clone(),
        timestamp: env.ledger().timestamp(),
    };
    let expected_events: Vec<(Address, Vec<Val>, Val)> = vec![
        &env,
        (
            contract_id.clone(),
            (symbol_short!("REC_ADD"), 1u64).into_val(&env),
            expected.into_val(&env),
        ),
    ];
    assert_eq!(env.events().all(), expected_events);

    let records = client.get_patient_records(&1);
    assert_eq!(records.len(), 1);
    assert_eq!(records, vec![&env, record(&env, "Alice", "Flu", "Medication X")]);
}

#[test]
fn test_records_keep_insertion_order() {
    let (env, _contract_id, client) = setup_test();
    let first = record(&env, "Alice", "Cold", "Medicine A");
    let second = record(&env, "Alice", "Headache", "Medicine B");

    client.add_record(&1, &first.patient_name, &first.diagnosis, &first.treatment);
    client.add_record(&1, &second.patient_name, &second.diagnosis, &second.treatment);

    let records = client.get_patient_records(&1);
    assert_eq!(records.len(), 2);
    assert_eq!(records.get(0).unwrap(), first);
    assert_eq!(records.get(1).unwrap(), second);
    assert_eq!(client.get_record_count(&1), 2);
}

#[test]
fn test_zero_patient_id_rejected() {
    let (env, _contract_id, client) = setup_test();

    let result = client.try_add_record(
        &0,
        &String::from_str(&env, "Alice"),
        &String::from_str(&env, "Flu"),
        &String::from_str(&env, "Medication X"),
    );

    assert_eq!(result, Err(Ok(ContractError::InvalidIdentifier)));
    assert_eq!(
        env.events().all(),
        Vec::<(Address, Vec<Val>, Val)>::new(&env)
    );
    assert_eq!(client.get_record_count(&0), 0);
}

#[test]
fn test_empty_diagnosis_or_treatment_rejected() {
    let (env, _contract_id, client) = setup_test();
    let name = String::from_str(&env, "Alice");
    let empty = String::from_str(&env, "");

    let no_events = Vec::<(Address, Vec<Val>, Val)>::new(&env);

    let result = client.try_add_record(&1, &name, &empty, &String::from_str(&env, "Medicine A"));
    assert_eq!(result, Err(Ok(ContractError::InvalidField)));
    assert_eq!(env.events().all(), no_events);

    let result = client.try_add_record(&1, &name, &String::from_str(&env, "Cold"), &empty);
    assert_eq!(result, Err(Ok(ContractError::InvalidField)));
    assert_eq!(env.events().all(), no_events);

    assert_eq!(client.get_record_count(&1), 0);
    assert_eq!(
        client.try_get_patient_records(&1),
        Err(Ok(ContractError::NotFound))
    );
}

#[test]
fn test_invalid_identifier_reported_before_invalid_field() {
    let (env, _contract_id, client) = setup_test();
    let empty = String::from_str(&env, "");

    let result = client.try_add_record(&0, &empty, &empty, &empty);

    assert_eq!(result, Err(Ok(ContractError::InvalidIdentifier)));
}

#[test]
fn test_empty_patient_name_accepted() {
    let (env, _contract_id, client) = setup_test();

    client.add_record(
        &3,
        &String::from_str(&env, ""),
        &String::from_str(&env, "Fever"),
        &String::from_str(&env, "Rest"),
    );

    assert_eq!(
        client.get_patient_records(&3),
        vec![&env, record(&env, "", "Fever", "Rest")]
    );
}

#[test]
fn test_missing_patient_not_found() {
    let (_env, _contract_id, client) = setup_test();

    assert_eq!(
        client.try_get_patient_records(&10),
        Err(Ok(ContractError::NotFound))
    );
    assert_eq!(
        client.try_get_patient_records(&0),
        Err(Ok(ContractError::NotFound))
    );
    assert_eq!(client.get_record_count(&10), 0);
}

#[test]
fn test_failed_append_leaves_existing_records() {
    let (env, _contract_id, client) = setup_test();
    let first = record(&env, "Bob", "Sprain", "Ice");

    client.add_record(&5, &first.patient_name, &first.diagnosis, &first.treatment);
    let _ = client.try_add_record(
        &5,
        &first.patient_name,
        &String::from_str(&env, ""),
        &first.treatment,
    );

    assert_eq!(client.get_patient_records(&5), vec![&env, first]);
}

#[test]
fn test_patients_are_isolated() {
    let (env, _contract_id, client) = setup_test();
    let alice = record(&env, "Alice", "Flu", "Medication X");
    let bob = record(&env, "Bob", "Fracture", "Cast");

    client.add_record(&1, &alice.patient_name, &alice.diagnosis, &alice.treatment);
    client.add_record(&2, &bob.patient_name, &bob.diagnosis, &bob.treatment);

    assert_eq!(client.get_patient_records(&1), vec![&env, alice]);
    assert_eq!(client.get_patient_records(&2), vec![&env, bob]);
}

#[test]
fn test_any_caller_may_append() {
    // add_record takes no caller and checks no auth.
    let env = Env::default();
    let owner = Address::generate(&env);
    let contract_id = env.register(HealthcareRecordsContract, (owner,));
    let client = HealthcareRecordsContractClient::new(&env, &contract_id);

    client.add_record(
        &42,
        &String::from_str(&env, "Carol"),
        &String::from_str(&env, "Asthma"),
        &String::from_str(&env, "Inhaler"),
    );

    assert_eq!(client.get_record_count(&42), 1);
    assert!(env.auths().is_empty());
}

#[test]
fn test_log_grows_past_single_entry_limit() {
    // Three 2000-byte fields per record; 40 records is well over 64 KiB.
    let (env, _contract_id, client) = setup_test();
    let name = String::from_bytes(&env, &[b'n'; 2000]);
    let treatment = String::from_bytes(&env, &[b't'; 2000]);

    let mut expected = Vec::new(&env);
    for i in 0..40u8 {
        let mut bytes = [b'd'; 2000];
        bytes[0] = b'A' + (i % 26);
        bytes[1] = b'0' + (i / 26);
        let diagnosis = String::from_bytes(&env, &bytes);

        let result = client.try_add_record(&1, &name, &diagnosis, &treatment);
        assert_eq!(result, Ok(Ok(())));

        expected.push_back(PatientRecord {
            patient_name: name.clone(),
            diagnosis,
            treatment: treatment.clone(),
        });
    }

    assert_eq!(client.get_record_count(&1), 40);

    // Reading the whole log back is one large invocation; only appends run on the default budget.
    env.cost_estimate().budget().reset_unlimited();
    let records = client.get_patient_records(&1);
    assert_eq!(records.len(), 40);
    for i in 0..40u32 {
        assert_eq!(records.get(i).unwrap(), expected.get(i).unwrap());
    }
}
