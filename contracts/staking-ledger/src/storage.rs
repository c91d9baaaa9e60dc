use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::types::{Asset, SupportRecord, UnlockRequest};

// ---------- TTL constants ----------
const INSTANCE_LIFETIME_THRESHOLD: u32 = 100_800; // ~7 days
const INSTANCE_BUMP_AMOUNT: u32 = 518_400; // bump to ~30 days
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 518_400; // ~30 days
const PERSISTENT_BUMP_AMOUNT: u32 = 3_110_400; // bump to ~180 days

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    // instance
    Admin,
    Operator,
    UnlockDuration,
    Paused,
    Locked,
    Initialized,

    // persistent
    SupportedList,
    Support(Asset),
    UserCount(Asset),
    Balance(Address, Asset),
    Snapshot(Address, Asset),
    Unlock(Address, Address),
}

// --- TTL helpers ---

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_persistent(env: &Env, key: &DataKey) {
    if env.storage().persistent().has(key) {
        env.storage()
            .persistent()
            .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
}

// ============ ADMIN / OPERATOR ============

pub fn get_admin(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Admin).unwrap()
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_operator(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Operator).unwrap()
}

pub fn set_operator(env: &Env, operator: &Address) {
    env.storage().instance().set(&DataKey::Operator, operator);
}

// ============ UNLOCK DURATION ============

pub fn get_unlock_duration(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::UnlockDuration)
        .unwrap_or(crate::DEFAULT_UNLOCK_DURATION)
}

pub fn set_unlock_duration(env: &Env, seconds: u64) {
    env.storage().instance().set(&DataKey::UnlockDuration, &seconds);
}

// ============ PAUSED / LOCKED ============

pub fn get_paused(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&DataKey::Paused, &paused);
}

pub fn is_locked(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Locked).unwrap_or(false)
}

pub fn set_locked(env: &Env, locked: bool) {
    if locked {
        env.storage().instance().set(&DataKey::Locked, &true);
    } else {
        env.storage().instance().remove(&DataKey::Locked);
    }
}

// ============ INITIALIZED ============

pub fn is_initialized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Initialized)
        .unwrap_or(false)
}

pub fn set_initialized(env: &Env, initialized: bool) {
    env.storage().instance().set(&DataKey::Initialized, &initialized);
}

// ============ REGISTRY ============

pub fn get_supported_list(env: &Env) -> Vec<Asset> {
    let key = DataKey::SupportedList;
    extend_persistent(env, &key);
    env.storage().persistent().get(&key).unwrap_or(Vec::new(env))
}

pub fn set_supported_list(env: &Env, list: &Vec<Asset>) {
    let key = DataKey::SupportedList;
    env.storage().persistent().set(&key, list);
    extend_persistent(env, &key);
}

pub fn get_support(env: &Env, asset: &Asset) -> Option<SupportRecord> {
    let key = DataKey::Support(asset.clone());
    extend_persistent(env, &key);
    env.storage().persistent().get(&key)
}

pub fn set_support(env: &Env, asset: &Asset, record: &SupportRecord) {
    let key = DataKey::Support(asset.clone());
    env.storage().persistent().set(&key, record);
    extend_persistent(env, &key);
}

pub fn remove_support(env: &Env, asset: &Asset) {
    env.storage()
        .persistent()
        .remove(&DataKey::Support(asset.clone()));
}

pub fn get_user_count(env: &Env, asset: &Asset) -> u32 {
    let key = DataKey::UserCount(asset.clone());
    extend_persistent(env, &key);
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_user_count(env: &Env, asset: &Asset, count: u32) {
    let key = DataKey::UserCount(asset.clone());
    if count == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &count);
        extend_persistent(env, &key);
    }
}

// ============ BALANCES ============

pub fn get_balance(env: &Env, user: &Address, asset: &Asset) -> i128 {
    let key = DataKey::Balance(user.clone(), asset.clone());
    extend_persistent(env, &key);
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_balance(env: &Env, user: &Address, asset: &Asset, amount: i128) {
    let key = DataKey::Balance(user.clone(), asset.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        extend_persistent(env, &key);
    }
}

pub fn get_snapshot(env: &Env, user: &Address, asset: &Asset) -> i128 {
    let key = DataKey::Snapshot(user.clone(), asset.clone());
    extend_persistent(env, &key);
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_snapshot(env: &Env, user: &Address, asset: &Asset, amount: i128) {
    let key = DataKey::Snapshot(user.clone(), asset.clone());
    env.storage().persistent().set(&key, &amount);
    extend_persistent(env, &key);
}

// ============ UNLOCK REQUESTS ============

pub fn get_unlock(env: &Env, user: &Address, token: &Address) -> Option<UnlockRequest> {
    let key = DataKey::Unlock(user.clone(), token.clone());
    extend_persistent(env, &key);
    env.storage().persistent().get(&key)
}

pub fn set_unlock(env: &Env, user: &Address, token: &Address, request: &UnlockRequest) {
    let key = DataKey::Unlock(user.clone(), token.clone());
    env.storage().persistent().set(&key, request);
    extend_persistent(env, &key);
}

pub fn remove_unlock(env: &Env, user: &Address, token: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Unlock(user.clone(), token.clone()));
}
