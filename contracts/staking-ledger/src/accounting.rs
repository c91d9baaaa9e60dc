//! Balance store, unlock tracker and snapshot bookkeeping.
//!
//! These functions only touch ledger storage. Guarding, registry checks and
//! token movements are the caller's job (see `lib.rs`).

use soroban_sdk::{Address, Env};

use crate::error::Error;
use crate::storage::{
    get_balance, get_snapshot, get_unlock, get_unlock_duration, get_user_count, remove_unlock,
    set_balance, set_snapshot, set_unlock, set_user_count,
};
use crate::types::{Asset, UnlockRequest};

pub fn credit(env: &Env, user: &Address, asset: &Asset, amount: i128) -> Result<i128, Error> {
    let balance = get_balance(env, user, asset);
    let new_balance = balance.checked_add(amount).ok_or(Error::Overflow)?;

    if balance == 0 && new_balance > 0 {
        let count = get_user_count(env, asset);
        set_user_count(env, asset, count.checked_add(1).ok_or(Error::Overflow)?);
    }
    set_balance(env, user, asset, new_balance);

    // Lifetime total, never decremented
    let snapshot = get_snapshot(env, user, asset);
    set_snapshot(
        env,
        user,
        asset,
        snapshot.checked_add(amount).ok_or(Error::Overflow)?,
    );

    Ok(new_balance)
}

pub fn debit(env: &Env, user: &Address, asset: &Asset, amount: i128) -> Result<i128, Error> {
    let balance = get_balance(env, user, asset);
    if amount > balance {
        return Err(Error::InsufficientBalance);
    }
    let new_balance = balance - amount;

    if balance > 0 && new_balance == 0 {
        let count = get_user_count(env, asset);
        set_user_count(env, asset, count.saturating_sub(1));
    }
    set_balance(env, user, asset, new_balance);

    Ok(new_balance)
}

/// Starts the unlock timer for `amount` of `asset`. One live request per
/// (user, token contract); a second one is rejected rather than overwritten.
pub fn start_unlock(
    env: &Env,
    user: &Address,
    asset: &Asset,
    amount: i128,
) -> Result<UnlockRequest, Error> {
    let balance = get_balance(env, user, asset);
    if balance == 0 || amount > balance {
        return Err(Error::InsufficientBalance);
    }

    let token = asset.token();
    if let Some(existing) = get_unlock(env, user, &token) {
        if existing.is_live() {
            return Err(Error::UnlockAlreadyInitialized);
        }
    }

    let ready_at = env
        .ledger()
        .timestamp()
        .checked_add(get_unlock_duration(env))
        .ok_or(Error::Overflow)?;

    let request = UnlockRequest {
        asset: asset.clone(),
        amount,
        ready_at,
        initialized: true,
    };
    set_unlock(env, user, &token, &request);

    Ok(request)
}

/// Returns the ready request for `asset` so the caller can size the
/// withdrawal. Checks run in the order: presence, asset match, timer.
pub fn ready_unlock(env: &Env, user: &Address, asset: &Asset) -> Result<UnlockRequest, Error> {
    let request = match get_unlock(env, user, &asset.token()) {
        Some(request) if request.is_live() => request,
        _ => return Err(Error::NoUnlockedAmount),
    };

    if request.asset != *asset {
        return Err(Error::TokenIdMismatch);
    }

    if !request.is_ready(env.ledger().timestamp()) {
        return Err(Error::UnlockPeriodNotComplete);
    }

    Ok(request)
}

/// Applies a completed withdrawal of `sent` against the request and balance.
/// The request is dropped once nothing is left on it, or straight away when
/// `close` is set.
pub fn consume_unlock(
    env: &Env,
    user: &Address,
    mut request: UnlockRequest,
    sent: i128,
    close: bool,
) -> Result<(), Error> {
    if sent > request.amount {
        return Err(Error::InsufficientUnlockedAmount);
    }
    debit(env, user, &request.asset, sent)?;

    let token = request.asset.token();
    request.amount -= sent;
    if close || request.amount == 0 {
        remove_unlock(env, user, &token);
    } else {
        set_unlock(env, user, &token, &request);
    }
    Ok(())
}

/// Balance as reported to readers: zero once a matching unlock is ready.
pub fn visible_balance(env: &Env, user: &Address, asset: &Asset) -> i128 {
    if let Some(request) = get_unlock(env, user, &asset.token()) {
        if request.is_live()
            && request.asset == *asset
            && request.is_ready(env.ledger().timestamp())
        {
            return 0;
        }
    }
    get_balance(env, user, asset)
}
