use soroban_sdk::{log, Env, Vec};

use crate::error::Error;
use crate::events::{support_added_event, support_removed_event};
use crate::storage::{
    get_support, get_supported_list, get_user_count, remove_support as remove_support_record,
    set_support, set_supported_list,
};
use crate::types::{Asset, SupportRecord};

pub fn is_supported(env: &Env, asset: &Asset) -> bool {
    get_support(env, asset).map_or(false, |record| record.supported)
}

pub fn require_supported(env: &Env, asset: &Asset) -> Result<(), Error> {
    if !is_supported(env, asset) {
        return Err(Error::UnsupportedToken);
    }
    Ok(())
}

pub fn add_support(env: &Env, asset: &Asset) -> Result<(), Error> {
    if is_supported(env, asset) {
        return Err(Error::AlreadySupported);
    }

    let mut list = get_supported_list(env);
    let record = SupportRecord {
        supported: true,
        index: list.len(),
    };
    list.push_back(asset.clone());

    set_support(env, asset, &record);
    set_supported_list(env, &list);

    support_added_event(env, asset.clone());
    log!(env, "Support added: index={}", record.index);
    Ok(())
}

/// Swap-remove: the last asset takes the removed asset's slot, so the list
/// order is not stable across removals.
pub fn remove_support(env: &Env, asset: &Asset) -> Result<(), Error> {
    let record = match get_support(env, asset) {
        Some(record) if record.supported => record,
        _ => return Err(Error::NotSupported),
    };

    if get_user_count(env, asset) > 0 {
        return Err(Error::UsersStillStaked);
    }

    let mut list = get_supported_list(env);
    let last_index = list.len() - 1;

    if record.index != last_index {
        let moved = list.get_unchecked(last_index);
        list.set(record.index, moved.clone());
        set_support(
            env,
            &moved,
            &SupportRecord {
                supported: true,
                index: record.index,
            },
        );
    }
    list.pop_back();

    remove_support_record(env, asset);
    set_supported_list(env, &list);

    support_removed_event(env, asset.clone());
    log!(env, "Support removed: remaining={}", list.len());
    Ok(())
}

pub fn all_supported(env: &Env) -> Vec<Asset> {
    get_supported_list(env)
}
