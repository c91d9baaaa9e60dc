use soroban_sdk::{Address, Env};

use crate::error::Error;
use crate::storage::{get_admin, get_operator, get_paused, is_locked, set_locked};

/// Held for the duration of a mutating user call.
///
/// Dropping the lock clears the flag, so every return path (including `?`)
/// releases it. Token transfers are made while the lock is held.
pub struct ReentrancyLock<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyLock<'a> {
    pub fn acquire(env: &'a Env) -> Result<Self, Error> {
        if is_locked(env) {
            return Err(Error::ReentrantCall);
        }
        set_locked(env, true);
        Ok(ReentrancyLock { env })
    }
}

impl Drop for ReentrancyLock<'_> {
    fn drop(&mut self) {
        set_locked(self.env, false);
    }
}

pub fn require_not_paused(env: &Env) -> Result<(), Error> {
    if get_paused(env) {
        return Err(Error::ContractPaused);
    }
    Ok(())
}

/// Pause check followed by lock acquisition.
pub fn enter(env: &Env) -> Result<ReentrancyLock<'_>, Error> {
    require_not_paused(env)?;
    ReentrancyLock::acquire(env)
}

pub fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if *caller != get_admin(env) {
        return Err(Error::Unauthorized);
    }
    Ok(())
}

pub fn require_operator(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    if *caller != get_operator(env) {
        return Err(Error::Unauthorized);
    }
    Ok(())
}
