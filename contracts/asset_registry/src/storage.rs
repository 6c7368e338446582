use soroban_sdk::{contracttype, Address, Env, String};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Name,
    Symbol,
    SupplyCeiling,
    BaseUri,
    IssuedCount,
    Paused,
    Owner(u32),
    Delegate(u32),
    Retired(u32),
    Balance(Address),
    Operator(Address, Address),
}

// ============================================================================
// Registry configuration (instance storage, written once at initialize)
// ============================================================================

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Admin).unwrap()
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_name(env: &Env) -> String {
    env.storage().instance().get(&DataKey::Name).unwrap()
}

pub fn set_name(env: &Env, name: &String) {
    env.storage().instance().set(&DataKey::Name, name);
}

pub fn get_symbol(env: &Env) -> String {
    env.storage().instance().get(&DataKey::Symbol).unwrap()
}

pub fn set_symbol(env: &Env, symbol: &String) {
    env.storage().instance().set(&DataKey::Symbol, symbol);
}

pub fn get_supply_ceiling(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::SupplyCeiling).unwrap()
}

pub fn set_supply_ceiling(env: &Env, ceiling: u32) {
    env.storage().instance().set(&DataKey::SupplyCeiling, &ceiling);
}

pub fn get_base_uri(env: &Env) -> String {
    env.storage().instance().get(&DataKey::BaseUri).unwrap()
}

pub fn set_base_uri(env: &Env, uri: &String) {
    env.storage().instance().set(&DataKey::BaseUri, uri);
}

// ============================================================================
// Issuance counters and pause flag (instance storage, absent = default)
// ============================================================================

pub fn get_issued_count(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::IssuedCount).unwrap_or(0)
}

pub fn set_issued_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::IssuedCount, &count);
}

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

// ============================================================================
// Per-asset records (persistent storage, absent = does not exist)
// ============================================================================

pub fn get_owner(env: &Env, id: u32) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Owner(id))
}

pub fn set_owner(env: &Env, id: u32, owner: &Address) {
    env.storage().persistent().set(&DataKey::Owner(id), owner);
}

pub fn clear_owner(env: &Env, id: u32) {
    env.storage().persistent().remove(&DataKey::Owner(id));
}

pub fn get_delegate(env: &Env, id: u32) -> Option<Address> {
    env.storage().persistent().get(&DataKey::Delegate(id))
}

pub fn set_delegate(env: &Env, id: u32, delegate: &Address) {
    env.storage().persistent().set(&DataKey::Delegate(id), delegate);
}

pub fn clear_delegate(env: &Env, id: u32) {
    env.storage().persistent().remove(&DataKey::Delegate(id));
}

pub fn is_retired(env: &Env, id: u32) -> bool {
    env.storage().persistent().has(&DataKey::Retired(id))
}

pub fn set_retired(env: &Env, id: u32) {
    env.storage().persistent().set(&DataKey::Retired(id), &true);
}

// ============================================================================
// Per-owner records (persistent storage)
// ============================================================================

pub fn get_balance(env: &Env, owner: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(owner.clone()))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, owner: &Address, balance: u32) {
    env.storage()
        .persistent()
        .set(&DataKey::Balance(owner.clone()), &balance);
}

pub fn is_operator(env: &Env, owner: &Address, operator: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Operator(owner.clone(), operator.clone()))
        .unwrap_or(false)
}

pub fn set_operator(env: &Env, owner: &Address, operator: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::Operator(owner.clone(), operator.clone()), &true);
}

pub fn clear_operator(env: &Env, owner: &Address, operator: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Operator(owner.clone(), operator.clone()));
}
