//! Token movements in and out of the ledger.
//!
//! Nothing here trusts the token: each transfer is bracketed by two reads of
//! the ledger's own balance and the caller gets the observed delta. A delta
//! of zero (no-op or "returned false" tokens) or one larger than requested is
//! rejected with `TransferFailed`.

use soroban_sdk::{contractclient, token, Address, Bytes, Env};

use crate::error::Error;
use crate::types::Asset;

/// Client interface the ledger needs from a semi-fungible item token.
#[contractclient(name = "ItemTokenClient")]
pub trait ItemTokenInterface {
    fn balance(env: Env, id: Address, item_id: u64) -> i128;
    fn safe_transfer_from(
        env: Env,
        from: Address,
        to: Address,
        item_id: u64,
        amount: i128,
        data: Bytes,
    );
}

fn custody_balance(env: &Env, asset: &Asset) -> i128 {
    let this = env.current_contract_address();
    match asset {
        Asset::Value(token) => token::Client::new(env, token).balance(&this),
        Asset::Item(token, item_id) => ItemTokenClient::new(env, token).balance(&this, item_id),
    }
}

fn raw_transfer(env: &Env, asset: &Asset, from: &Address, to: &Address, amount: i128) {
    match asset {
        Asset::Value(token) => token::Client::new(env, token).transfer(from, to, &amount),
        Asset::Item(token, item_id) => ItemTokenClient::new(env, token).safe_transfer_from(
            from,
            to,
            item_id,
            &amount,
            &Bytes::new(env),
        ),
    }
}

fn checked_delta(delta: Option<i128>, requested: i128) -> Result<i128, Error> {
    match delta {
        Some(moved) if moved > 0 && moved <= requested => Ok(moved),
        _ => Err(Error::TransferFailed),
    }
}

/// Pulls `amount` from `from` into custody. Returns what custody grew by.
pub fn pull(env: &Env, asset: &Asset, from: &Address, amount: i128) -> Result<i128, Error> {
    let this = env.current_contract_address();
    let before = custody_balance(env, asset);
    raw_transfer(env, asset, from, &this, amount);
    let after = custody_balance(env, asset);
    checked_delta(after.checked_sub(before), amount)
}

/// Pushes `amount` out of custody to `to`. Returns what custody shrank by,
/// which is what gets debited: a fee taken on the way out is the user's
/// loss, never the pool's.
pub fn push(env: &Env, asset: &Asset, to: &Address, amount: i128) -> Result<i128, Error> {
    let this = env.current_contract_address();
    let before = custody_balance(env, asset);
    raw_transfer(env, asset, &this, to, amount);
    let after = custody_balance(env, asset);
    checked_delta(before.checked_sub(after), amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_bounds() {
        assert_eq!(checked_delta(Some(5), 5), Ok(5));
        assert_eq!(checked_delta(Some(4), 5), Ok(4));
        assert_eq!(checked_delta(Some(0), 5), Err(Error::TransferFailed));
        assert_eq!(checked_delta(Some(-1), 5), Err(Error::TransferFailed));
        assert_eq!(checked_delta(Some(6), 5), Err(Error::TransferFailed));
        assert_eq!(checked_delta(None, 5), Err(Error::TransferFailed));
    }
}
