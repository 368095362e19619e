#![no_main]

use arbitrary::Arbitrary;
use healthcare_records::{ContractError, HealthcareRecordsContract, HealthcareRecordsContractClient};
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{testutils::Address as _, Address, Env, String};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    AuthorizeProvider { caller: u8, target: u8 },
    AddRecord { patient_id: u8, name_len: u8, diagnosis_len: u8, treatment_len: u8 },
    GetRecords { patient_id: u8 },
}

fn text(env: &Env, len: u8) -> String {
    let s = "x".repeat((len % 32) as usize);
    String::from_str(env, &s)
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let contract_id = env.register(HealthcareRecordsContract, (owner.clone(),));
    let client = HealthcareRecordsContractClient::new(&env, &contract_id);

    let mut users = vec![owner.clone()];
    for _ in 0..3 {
        users.push(Address::generate(&env));
    }

    // Successful appends per patient id, used to check the ledger never loses entries.
    let mut appended = [0u32; 256];

    for action in actions {
        match action {
            FuzzAction::AuthorizeProvider { caller, target } => {
                let caller = &users[caller as usize % users.len()];
                let target = &users[target as usize % users.len()];

                let result = client.try_authorize_provider(caller, target);
                if *caller == owner {
                    assert!(result.is_ok());
                    assert!(client.is_provider(target));
                } else {
                    assert_eq!(result, Err(Ok(ContractError::Unauthorized)));
                }
            }
            FuzzAction::AddRecord {
                patient_id,
                name_len,
                diagnosis_len,
                treatment_len,
            } => {
                let result = client.try_add_record(
                    &(patient_id as u64),
                    &text(&env, name_len),
                    &text(&env, diagnosis_len),
                    &text(&env, treatment_len),
                );
                if result.is_ok() {
                    appended[patient_id as usize] += 1;
                }
            }
            FuzzAction::GetRecords { patient_id } => {
                let expected = appended[patient_id as usize];
                match client.try_get_patient_records(&(patient_id as u64)) {
                    Ok(Ok(records)) => assert_eq!(records.len(), expected),
                    _ => assert_eq!(expected, 0),
                }
            }
        }
    }

    assert_eq!(client.get_owner(), owner);
});
