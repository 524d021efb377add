use crate::data::{CollateralKey, DataKey};
use soroban_sdk::{Address, Env};

pub(self) const DAY_IN_LEDGERS: u32 = 17280;

// Persistent storage: every counter is keyed by a caller-chosen token
pub(self) const PERSISTENT_BUMP_AMOUNT: u32 = 180 * DAY_IN_LEDGERS;    // ~6 months
pub(self) const PERSISTENT_LIFETIME_THRESHOLD: u32 = 90 * DAY_IN_LEDGERS; // ~3 months

pub fn get_token_supply(e: &Env, token: &Address) -> i128 {
    read_counter(e, &DataKey::TokenSupply(token.clone()))
}

pub fn set_token_supply(e: &Env, token: &Address, supply: &i128) {
    write_counter(e, &DataKey::TokenSupply(token.clone()), supply);
}

pub fn get_total_collateral(e: &Env, token: &Address) -> i128 {
    read_counter(e, &DataKey::TotalCollateral(token.clone()))
}

pub fn set_total_collateral(e: &Env, token: &Address, total: &i128) {
    write_counter(e, &DataKey::TotalCollateral(token.clone()), total);
}

pub fn get_user_collateral(e: &Env, token: &Address, user: &Address) -> i128 {
    read_counter(e, &collateral_key(token, user))
}

pub fn set_user_collateral(e: &Env, token: &Address, user: &Address, collateral: &i128) {
    write_counter(e, &collateral_key(token, user), collateral);
}

fn read_counter(e: &Env, key: &DataKey) -> i128 {
    if let Some(value) = e.storage().persistent().get::<DataKey, i128>(key) {
        bump_persistent_ttl(e, key);
        return value;
    }

    0
}

fn write_counter(e: &Env, key: &DataKey, value: &i128) {
    e.storage().persistent().set(key, value);
    bump_persistent_ttl(e, key);
}

fn collateral_key(token: &Address, user: &Address) -> DataKey {
    DataKey::UserCollateral(CollateralKey {
        token: token.clone(),
        user: user.clone(),
    })
}

fn bump_persistent_ttl(e: &Env, key: &DataKey) {
    e.storage().persistent().extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}
