use crate::{errors::ContractError, extend_ttl_address_key};
use soroban_sdk::{log, symbol_short, Address, Env, Symbol};

// ── Storage Keys ─────────────────────────────────────────────

const OWNER: Symbol = symbol_short!("OWNER");
const PROVIDER: Symbol = symbol_short!("PROVIDER");

fn provider_key(address: &Address) -> (Symbol, Address) {
    (PROVIDER, address.clone())
}

// ── Owner ────────────────────────────────────────────────────

/// Records the contract owner. Only the constructor calls this.
pub(crate) fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER, owner);
}

pub fn owner(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&OWNER)
        .ok_or(ContractError::NotInitialized)
}

/// Guard for owner-only operations. Compose it before any state change.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
    let owner = owner(env)?;
    if *caller != owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

// ── Providers ────────────────────────────────────────────────

/// Adds `provider` to the provider set. Membership is never revoked, so
/// authorizing an existing provider only refreshes its TTL.
pub(crate) fn authorize(env: &Env, provider: &Address) {
    let key = provider_key(provider);
    env.storage().persistent().set(&key, &true);
    extend_ttl_address_key(env, &key);
    log!(env, "provider authorized", provider.clone());
}

pub fn is_provider(env: &Env, address: &Address) -> bool {
    let key = provider_key(address);
    let authorized = env.storage().persistent().get(&key).unwrap_or(false);
    if authorized {
        extend_ttl_address_key(env, &key);
    }
    authorized
}
