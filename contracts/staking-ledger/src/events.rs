use soroban_sdk::{symbol_short, Address, Env};

use crate::types::Asset;

// Event emitted once the ledger is initialized
pub fn init_event(env: &Env, admin: Address, operator: Address, unlock_duration: u64) {
    let topics = (symbol_short!("init"),);
    env.events().publish(topics, (admin, operator, unlock_duration));
}

// Event emitted when an asset becomes stakeable
pub fn support_added_event(env: &Env, asset: Asset) {
    let topics = (symbol_short!("sup_add"),);
    env.events().publish(topics, asset);
}

// Event emitted when an asset stops being stakeable
pub fn support_removed_event(env: &Env, asset: Asset) {
    let topics = (symbol_short!("sup_rem"),);
    env.events().publish(topics, asset);
}

// Event emitted when a user stakes; carries the amount actually received
pub fn staked_event(env: &Env, user: Address, asset: Asset, received: i128) {
    let topics = (symbol_short!("staked"), user);
    env.events().publish(topics, (asset, received));
}

// Event emitted when a user starts the unlock timer
pub fn unlock_started_event(env: &Env, user: Address, asset: Asset, amount: i128, ready_at: u64) {
    let topics = (symbol_short!("unlock"), user);
    env.events().publish(topics, (asset, amount, ready_at));
}

// Event emitted when a user withdraws; carries the amount actually sent
pub fn unstaked_event(env: &Env, user: Address, asset: Asset, sent: i128) {
    let topics = (symbol_short!("unstaked"), user);
    env.events().publish(topics, (asset, sent));
}

pub fn paused_event(env: &Env, operator: Address) {
    let topics = (symbol_short!("paused"),);
    env.events().publish(topics, operator);
}

pub fn unpaused_event(env: &Env, operator: Address) {
    let topics = (symbol_short!("unpaused"),);
    env.events().publish(topics, operator);
}

pub fn operator_updated_event(env: &Env, old: Address, new: Address) {
    let topics = (symbol_short!("operator"),);
    env.events().publish(topics, (old, new));
}

pub fn duration_updated_event(env: &Env, old: u64, new: u64) {
    let topics = (symbol_short!("duration"),);
    env.events().publish(topics, (old, new));
}

pub fn admin_updated_event(env: &Env, old: Address, new: Address) {
    let topics = (symbol_short!("admin"),);
    env.events().publish(topics, (old, new));
}
