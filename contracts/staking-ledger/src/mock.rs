//! Test doubles for the external token ledgers.

pub mod fee_token {
    use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};
    use soroban_token_sdk::TokenUtils;

    const BPS_DENOMINATOR: i128 = 10_000;

    #[derive(Clone)]
    #[contracttype]
    pub enum DataKey {
        FeeBps,
        Silent,
        Balance(Address),
    }

    fn read_balance(env: &Env, id: &Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(id.clone()))
            .unwrap_or(0)
    }

    fn write_balance(env: &Env, id: &Address, amount: i128) {
        env.storage()
            .persistent()
            .set(&DataKey::Balance(id.clone()), &amount);
    }

    /// Value token that burns `fee_bps` of every transfer from the amount
    /// the recipient gets. In silent mode `transfer` returns without moving
    /// anything, like a token that reports failure instead of reverting.
    #[contract]
    pub struct FeeToken;

    #[contractimpl]
    impl FeeToken {
        pub fn set_fee_bps(env: Env, fee_bps: i128) {
            env.storage().instance().set(&DataKey::FeeBps, &fee_bps);
        }

        pub fn set_silent(env: Env, silent: bool) {
            env.storage().instance().set(&DataKey::Silent, &silent);
        }

        pub fn mint(env: Env, to: Address, amount: i128) {
            let balance = read_balance(&env, &to);
            write_balance(&env, &to, balance + amount);
        }

        pub fn balance(env: Env, id: Address) -> i128 {
            read_balance(&env, &id)
        }

        pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
            from.require_auth();

            let silent: bool = env.storage().instance().get(&DataKey::Silent).unwrap_or(false);
            if silent {
                return;
            }

            let from_balance = read_balance(&env, &from);
            if from_balance < amount {
                panic!("insufficient balance");
            }
            let fee_bps: i128 = env.storage().instance().get(&DataKey::FeeBps).unwrap_or(0);
            let fee = amount * fee_bps / BPS_DENOMINATOR;

            write_balance(&env, &from, from_balance - amount);
            let to_balance = read_balance(&env, &to);
            write_balance(&env, &to, to_balance + amount - fee);

            TokenUtils::new(&env).events().transfer(from, to, amount - fee);
        }
    }
}

pub mod item_token {
    use soroban_sdk::{contract, contractimpl, contracttype, Address, Bytes, Env};

    #[derive(Clone)]
    #[contracttype]
    pub enum DataKey {
        Silent,
        Balance(Address, u64),
    }

    fn read_balance(env: &Env, id: &Address, item_id: u64) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(id.clone(), item_id))
            .unwrap_or(0)
    }

    fn write_balance(env: &Env, id: &Address, item_id: u64, amount: i128) {
        env.storage()
            .persistent()
            .set(&DataKey::Balance(id.clone(), item_id), &amount);
    }

    /// Semi-fungible token: balances are per (holder, item id).
    #[contract]
    pub struct ItemToken;

    #[contractimpl]
    impl ItemToken {
        pub fn set_silent(env: Env, silent: bool) {
            env.storage().instance().set(&DataKey::Silent, &silent);
        }

        pub fn mint(env: Env, to: Address, item_id: u64, amount: i128) {
            let balance = read_balance(&env, &to, item_id);
            write_balance(&env, &to, item_id, balance + amount);
        }

        pub fn balance(env: Env, id: Address, item_id: u64) -> i128 {
            read_balance(&env, &id, item_id)
        }

        pub fn safe_transfer_from(
            env: Env,
            from: Address,
            to: Address,
            item_id: u64,
            amount: i128,
            _data: Bytes,
        ) {
            from.require_auth();

            let silent: bool = env.storage().instance().get(&DataKey::Silent).unwrap_or(false);
            if silent {
                return;
            }

            let from_balance = read_balance(&env, &from, item_id);
            if from_balance < amount {
                panic!("insufficient balance");
            }
            write_balance(&env, &from, item_id, from_balance - amount);
            let to_balance = read_balance(&env, &to, item_id);
            write_balance(&env, &to, item_id, to_balance + amount);
        }
    }
}

pub mod reentrant_token {
    use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

    use crate::StakingLedgerClient;

    #[derive(Clone)]
    #[contracttype]
    pub enum DataKey {
        Ledger,
        InnerAttempts,
        InnerFailures,
        Balance(Address),
    }

    fn read_balance(env: &Env, id: &Address) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(id.clone()))
            .unwrap_or(0)
    }

    fn write_balance(env: &Env, id: &Address, amount: i128) {
        env.storage()
            .persistent()
            .set(&DataKey::Balance(id.clone()), &amount);
    }

    fn bump(env: &Env, key: &DataKey) {
        let count: u32 = env.storage().instance().get(key).unwrap_or(0);
        env.storage().instance().set(key, &(count + 1));
    }

    /// Value token whose `transfer` tries to stake into the ledger again
    /// before moving any funds, then records how that inner call ended.
    #[contract]
    pub struct ReentrantToken;

    #[contractimpl]
    impl ReentrantToken {
        pub fn set_ledger(env: Env, ledger: Address) {
            env.storage().instance().set(&DataKey::Ledger, &ledger);
        }

        pub fn mint(env: Env, to: Address, amount: i128) {
            let balance = read_balance(&env, &to);
            write_balance(&env, &to, balance + amount);
        }

        pub fn balance(env: Env, id: Address) -> i128 {
            read_balance(&env, &id)
        }

        /// (attempts, host-rejected) counts of the inner `stake` calls.
        pub fn inner_results(env: Env) -> (u32, u32) {
            let attempts = env.storage().instance().get(&DataKey::InnerAttempts).unwrap_or(0);
            let failures = env.storage().instance().get(&DataKey::InnerFailures).unwrap_or(0);
            (attempts, failures)
        }

        pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
            from.require_auth();

            let ledger: Option<Address> = env.storage().instance().get(&DataKey::Ledger);
            if let Some(ledger) = ledger {
                if to == ledger {
                    bump(&env, &DataKey::InnerAttempts);
                    let inner = StakingLedgerClient::new(&env, &ledger).try_stake(
                        &from,
                        &env.current_contract_address(),
                        &1,
                    );
                    if matches!(inner, Err(Err(_))) {
                        bump(&env, &DataKey::InnerFailures);
                    }
                }
            }

            let from_balance = read_balance(&env, &from);
            if from_balance < amount {
                panic!("insufficient balance");
            }
            write_balance(&env, &from, from_balance - amount);
            let to_balance = read_balance(&env, &to);
            write_balance(&env, &to, to_balance + amount);
        }
    }
}
