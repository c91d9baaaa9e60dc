#![no_std]

//! # Staking Ledger
//!
//! Custody pool with a two-phase, time-locked withdrawal.
//!
//! 1. Admin curates the supported assets (value tokens, or single item ids
//!    of an item token).
//! 2. `stake`: the ledger pulls tokens from the user and credits what it
//!    actually received, measured on its own balance.
//! 3. `unlock`: starts a timer of `unlock_duration` seconds for part or all
//!    of the user's balance. One live unlock per (user, token contract).
//! 4. `unstake`: once the timer is up, the ledger pushes tokens back and
//!    debits what actually left custody.
//!
//! The operator can pause every user-facing mutation. Mutations also hold a
//! storage-backed reentrancy lock across the token call.

use soroban_sdk::{
    contract, contractimpl, log, symbol_short, Address, Bytes, Env, Symbol, Vec,
};

mod accounting;
mod error;
mod events;
mod guard;
mod registry;
mod storage;
mod transfer;
mod types;

pub use error::Error;
pub use types::{Asset, AssetBalance, SupportRecord, UnlockRequest};

use events::{
    admin_updated_event, duration_updated_event, init_event, operator_updated_event,
    paused_event, staked_event, unlock_started_event, unpaused_event, unstaked_event,
};
use guard::{enter, require_admin, require_operator};
use storage::{
    extend_instance, get_admin, get_operator, get_paused, get_unlock_duration, is_initialized,
    set_admin, set_initialized, set_operator, set_paused, set_unlock_duration,
};

pub const DEFAULT_UNLOCK_DURATION: u64 = 604_800; // 7 days in seconds
pub const MIN_UNLOCK_DURATION: u64 = 1;
pub const MAX_UNLOCK_DURATION: u64 = 31_536_000; // 365 days in seconds

/// Acknowledgment returned to item tokens that check the recipient.
pub const ITEM_RECEIVED: Symbol = symbol_short!("item_recv");
pub const BATCH_RECEIVED: Symbol = symbol_short!("batch_rcv");

fn validate_duration(seconds: u64) -> Result<(), Error> {
    if !(MIN_UNLOCK_DURATION..=MAX_UNLOCK_DURATION).contains(&seconds) {
        return Err(Error::InvalidUnlockDuration);
    }
    Ok(())
}

#[contract]
pub struct StakingLedger;

#[contractimpl]
impl StakingLedger {

    /// Initialize the ledger. Can only run once.
    pub fn initialize(
        env: Env,
        admin: Address,
        operator: Address,
        unlock_duration: u64,
    ) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();
        validate_duration(unlock_duration)?;

        set_admin(&env, &admin);
        set_operator(&env, &operator);
        set_unlock_duration(&env, unlock_duration);
        set_paused(&env, false);
        set_initialized(&env, true);
        extend_instance(&env);

        init_event(&env, admin, operator, unlock_duration);
        log!(&env, "StakingLedger: Initialized, unlock_duration={}", unlock_duration);
        Ok(())
    }

    // ==========================================================
    // Operator
    // ==========================================================

    pub fn pause(env: Env, caller: Address) -> Result<(), Error> {
        require_operator(&env, &caller)?;
        extend_instance(&env);
        set_paused(&env, true);
        paused_event(&env, caller);
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), Error> {
        require_operator(&env, &caller)?;
        extend_instance(&env);
        set_paused(&env, false);
        unpaused_event(&env, caller);
        Ok(())
    }

    // ==========================================================
    // Admin
    // ==========================================================

    pub fn add_support(env: Env, caller: Address, asset: Asset) -> Result<(), Error> {
        require_admin(&env, &caller)?;
        extend_instance(&env);
        registry::add_support(&env, &asset)
    }

    /// Fails while any user still holds a balance in `asset`.
    pub fn remove_support(env: Env, caller: Address, asset: Asset) -> Result<(), Error> {
        require_admin(&env, &caller)?;
        extend_instance(&env);
        registry::remove_support(&env, &asset)
    }

    pub fn update_operator(env: Env, caller: Address, new_operator: Address) -> Result<(), Error> {
        require_admin(&env, &caller)?;
        extend_instance(&env);
        let old = get_operator(&env);
        set_operator(&env, &new_operator);
        operator_updated_event(&env, old, new_operator);
        Ok(())
    }

    /// Applies to unlocks started after the change; pending requests keep
    /// their `ready_at`.
    pub fn update_unlock_duration(env: Env, caller: Address, seconds: u64) -> Result<(), Error> {
        require_admin(&env, &caller)?;
        validate_duration(seconds)?;
        extend_instance(&env);
        let old = get_unlock_duration(&env);
        set_unlock_duration(&env, seconds);
        duration_updated_event(&env, old, seconds);
        Ok(())
    }

    pub fn set_admin(env: Env, caller: Address, new_admin: Address) -> Result<(), Error> {
        require_admin(&env, &caller)?;
        extend_instance(&env);
        set_admin(&env, &new_admin);
        admin_updated_event(&env, caller, new_admin);
        Ok(())
    }

    // ==========================================================
    // Staking: value tokens
    // ==========================================================

    /// Returns the amount actually credited.
    pub fn stake(env: Env, user: Address, token: Address, amount: i128) -> Result<i128, Error> {
        Self::stake_asset(&env, user, Asset::Value(token), amount)
    }

    /// Returns the timestamp from which the amount can be unstaked.
    pub fn unlock(env: Env, user: Address, token: Address, amount: i128) -> Result<u64, Error> {
        Self::unlock_asset(&env, user, Asset::Value(token), Some(amount))
    }

    pub fn unlock_all(env: Env, user: Address, token: Address) -> Result<u64, Error> {
        Self::unlock_asset(&env, user, Asset::Value(token), None)
    }

    /// Returns the amount that actually left custody.
    pub fn unstake(env: Env, user: Address, token: Address, amount: i128) -> Result<i128, Error> {
        Self::unstake_asset(&env, user, Asset::Value(token), Some(amount))
    }

    pub fn unstake_all(env: Env, user: Address, token: Address) -> Result<i128, Error> {
        Self::unstake_asset(&env, user, Asset::Value(token), None)
    }

    // ==========================================================
    // Staking: item tokens
    // ==========================================================

    pub fn stake_item(
        env: Env,
        user: Address,
        token: Address,
        item_id: u64,
        amount: i128,
    ) -> Result<i128, Error> {
        Self::stake_asset(&env, user, Asset::Item(token, item_id), amount)
    }

    pub fn unlock_item(
        env: Env,
        user: Address,
        token: Address,
        item_id: u64,
        amount: i128,
    ) -> Result<u64, Error> {
        Self::unlock_asset(&env, user, Asset::Item(token, item_id), Some(amount))
    }

    /// Fails with `TokenIdMismatch` if the pending unlock on `token` was
    /// started for a different item id.
    pub fn unstake_item(
        env: Env,
        user: Address,
        token: Address,
        item_id: u64,
        amount: i128,
    ) -> Result<i128, Error> {
        Self::unstake_asset(&env, user, Asset::Item(token, item_id), Some(amount))
    }

    // ==========================================================
    // Item token receiver hooks
    // ==========================================================

    pub fn on_received(
        _env: Env,
        _operator: Address,
        _from: Address,
        _item_id: u64,
        _amount: i128,
        _data: Bytes,
    ) -> Symbol {
        ITEM_RECEIVED
    }

    pub fn on_batch_received(
        _env: Env,
        _operator: Address,
        _from: Address,
        _item_ids: Vec<u64>,
        _amounts: Vec<i128>,
        _data: Bytes,
    ) -> Symbol {
        BATCH_RECEIVED
    }

    // ==========================================================
    // View functions
    // ==========================================================

    /// Staked balance, reported as zero once an unlock on it is ready.
    /// `staked_balance` gives the stored figure.
    pub fn balance_of(env: Env, user: Address, token: Address) -> i128 {
        accounting::visible_balance(&env, &user, &Asset::Value(token))
    }

    pub fn balance_of_item(env: Env, user: Address, token: Address, item_id: u64) -> i128 {
        accounting::visible_balance(&env, &user, &Asset::Item(token, item_id))
    }

    pub fn balance_of_all_tokens(env: Env, user: Address) -> Vec<AssetBalance> {
        let mut balances = Vec::new(&env);
        for asset in registry::all_supported(&env).iter() {
            let amount = accounting::visible_balance(&env, &user, &asset);
            balances.push_back(AssetBalance { asset, amount });
        }
        balances
    }

    pub fn staked_balance(env: Env, user: Address, asset: Asset) -> i128 {
        storage::get_balance(&env, &user, &asset)
    }

    pub fn get_unlock_request(env: Env, user: Address, token: Address) -> Option<UnlockRequest> {
        storage::get_unlock(&env, &user, &token)
    }

    pub fn get_snapshot(env: Env, user: Address, asset: Asset) -> i128 {
        storage::get_snapshot(&env, &user, &asset)
    }

    /// Enumeration order is not stable: removals swap the last entry in.
    pub fn get_all_supported(env: Env) -> Vec<Asset> {
        registry::all_supported(&env)
    }

    pub fn is_supported(env: Env, asset: Asset) -> bool {
        registry::is_supported(&env, &asset)
    }

    pub fn user_count(env: Env, asset: Asset) -> u32 {
        storage::get_user_count(&env, &asset)
    }

    pub fn unlock_duration(env: Env) -> u64 {
        get_unlock_duration(&env)
    }

    pub fn is_paused(env: Env) -> bool {
        get_paused(&env)
    }

    pub fn operator(env: Env) -> Address {
        get_operator(&env)
    }

    pub fn admin(env: Env) -> Address {
        get_admin(&env)
    }
}

impl StakingLedger {
    fn stake_asset(env: &Env, user: Address, asset: Asset, amount: i128) -> Result<i128, Error> {
        user.require_auth();
        let _lock = enter(env)?;
        extend_instance(env);

        registry::require_supported(env, &asset)?;
        if amount <= 0 {
            return Err(Error::ZeroAmount);
        }

        let received = transfer::pull(env, &asset, &user, amount)?;
        let balance = accounting::credit(env, &user, &asset, received)?;

        staked_event(env, user.clone(), asset, received);
        log!(
            env,
            "Staked: user={}, requested={}, received={}, balance={}",
            user, amount, received, balance
        );
        Ok(received)
    }

    fn unlock_asset(
        env: &Env,
        user: Address,
        asset: Asset,
        amount: Option<i128>,
    ) -> Result<u64, Error> {
        user.require_auth();
        let _lock = enter(env)?;
        extend_instance(env);

        registry::require_supported(env, &asset)?;
        let amount = match amount {
            Some(amount) if amount <= 0 => return Err(Error::ZeroAmount),
            Some(amount) => amount,
            None => storage::get_balance(env, &user, &asset),
        };

        let request = accounting::start_unlock(env, &user, &asset, amount)?;

        unlock_started_event(env, user.clone(), asset, request.amount, request.ready_at);
        log!(
            env,
            "Unlock started: user={}, amount={}, ready_at={}",
            user, request.amount, request.ready_at
        );
        Ok(request.ready_at)
    }

    fn unstake_asset(
        env: &Env,
        user: Address,
        asset: Asset,
        amount: Option<i128>,
    ) -> Result<i128, Error> {
        user.require_auth();
        let _lock = enter(env)?;
        extend_instance(env);

        registry::require_supported(env, &asset)?;
        let request = accounting::ready_unlock(env, &user, &asset)?;

        let close = amount.is_none();
        let amount = amount.unwrap_or(request.amount);
        if amount <= 0 {
            return Err(Error::ZeroAmount);
        }
        if amount > request.amount {
            return Err(Error::InsufficientUnlockedAmount);
        }

        let sent = transfer::push(env, &asset, &user, amount)?;
        accounting::consume_unlock(env, &user, request, sent, close)?;

        unstaked_event(env, user.clone(), asset, sent);
        log!(env, "Unstaked: user={}, requested={}, sent={}", user, amount, sent);
        Ok(sent)
    }
}

#[cfg(test)]
mod mock;
