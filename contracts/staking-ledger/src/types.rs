use soroban_sdk::{contracttype, Address};

/// Identity of a stakeable token.
///
/// Value tokens are identified by their contract address alone; item tokens
/// by the contract address plus the item id inside that contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Asset {
    Value(Address),
    Item(Address, u64),
}

impl Asset {
    /// Contract address of the token ledger backing this asset.
    pub fn token(&self) -> Address {
        match self {
            Asset::Value(token) => token.clone(),
            Asset::Item(token, _) => token.clone(),
        }
    }
}

/// Registry entry for an asset. `index` is the asset's position in the
/// supported list while `supported` is true.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SupportRecord {
    pub supported: bool,
    pub index: u32,
}

/// Pending withdrawal started by `unlock`.
///
/// Keyed by (user, token contract). For item tokens `asset` carries the
/// item id the unlock was started for.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnlockRequest {
    pub asset: Asset,

    pub amount: i128,

    // Ledger timestamp from which the amount may be unstaked (inclusive)
    pub ready_at: u64,

    pub initialized: bool,
}

impl UnlockRequest {
    pub fn is_live(&self) -> bool {
        self.initialized && self.amount > 0
    }

    pub fn is_ready(&self, now: u64) -> bool {
        now >= self.ready_at
    }
}

/// One row of `balance_of_all_tokens`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetBalance {
    pub asset: Asset,
    pub amount: i128,
}
