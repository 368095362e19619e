use soroban_sdk::{symbol_short, Address, Env, String};

/// Event published when the contract is deployed with its owner.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub timestamp: u64,
}

/// Event published when the owner authorizes a provider.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderAuthorizedEvent {
    pub provider: Address,
    pub timestamp: u64,
}

/// Event published when a record is appended to a patient's ledger.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordAddedEvent {
    pub patient_id: u64,
    pub patient_name: String,
    pub diagnosis: String,
    pub treatment: String,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, owner: Address) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        owner,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a provider is authorized.
/// Topics carry the provider so indexers can filter per address.
pub fn publish_provider_authorized(env: &Env, provider: Address) {
    let topics = (symbol_short!("PRV_AUTH"), provider.clone());
    let data = ProviderAuthorizedEvent {
        provider,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a record is added.
/// This event includes the patient id, name, diagnosis, treatment, and timestamp.
pub fn publish_record_added(
    env: &Env,
    patient_id: u64,
    patient_name: String,
    diagnosis: String,
    treatment: String,
) {
    let topics = (symbol_short!("REC_ADD"), patient_id);
    let data = RecordAddedEvent {
        patient_id,
        patient_name,
        diagnosis,
        treatment,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
