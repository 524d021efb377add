use crate::data::{AllowanceDataKey, AllowanceValue, DataKey, Error, TokenMetadata};
use soroban_sdk::{panic_with_error, Address, Env};

pub(self) const DAY_IN_LEDGERS: u32 = 17280;

pub(self) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(self) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(self) const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(self) const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn set_admin(e: &Env, admin: &Address) {
    e.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(e: &Env) -> Address {
    let admin = e.storage()
        .instance()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| panic!("Token admin has expired"));

    bump_instance_ttl(e);
    admin
}

pub fn set_metadata(e: &Env, metadata: &TokenMetadata) {
    e.storage().instance().set(&DataKey::Metadata, metadata);
}

pub fn get_metadata(e: &Env) -> TokenMetadata {
    let metadata = e.storage()
        .instance()
        .get(&DataKey::Metadata)
        .unwrap_or_else(|| panic!("Token metadata has expired"));

    bump_instance_ttl(e);
    metadata
}

pub fn get_total_supply(e: &Env) -> i128 {
    bump_instance_ttl(e);
    e.storage().instance().get(&DataKey::TotalSupply).unwrap_or(0_i128)
}

fn set_total_supply(e: &Env, total_supply: i128) {
    e.storage().instance().set(&DataKey::TotalSupply, &total_supply);
}

pub fn read_balance(e: &Env, addr: &Address) -> i128 {
    let key = DataKey::Balance(addr.clone());
    if let Some(balance) = e.storage().persistent().get::<DataKey, i128>(&key) {
        bump_balance_ttl(e, &key);
        return balance;
    }

    0
}

fn write_balance(e: &Env, addr: &Address, amount: i128) {
    let key = DataKey::Balance(addr.clone());
    e.storage().persistent().set(&key, &amount);
    bump_balance_ttl(e, &key);
}

pub fn receive_balance(e: &Env, addr: &Address, amount: i128) {
    let balance = read_balance(e, addr);
    write_balance(e, addr, balance + amount);
}

pub fn spend_balance(e: &Env, addr: &Address, amount: i128) {
    let balance = read_balance(e, addr);
    if balance < amount {
        panic_with_error!(e, Error::InsufficientBalance);
    }

    write_balance(e, addr, balance - amount);
}

pub fn increase_supply(e: &Env, amount: i128) {
    set_total_supply(e, get_total_supply(e) + amount);
}

pub fn decrease_supply(e: &Env, amount: i128) {
    set_total_supply(e, get_total_supply(e) - amount);
}

pub fn read_allowance(e: &Env, from: &Address, spender: &Address) -> AllowanceValue {
    let key = DataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });

    match e.storage().temporary().get::<DataKey, AllowanceValue>(&key) {
        Some(allowance) if allowance.expiration_ledger >= e.ledger().sequence() => allowance,
        Some(allowance) => AllowanceValue {
            amount: 0,
            expiration_ledger: allowance.expiration_ledger,
        },
        None => AllowanceValue {
            amount: 0,
            expiration_ledger: 0,
        },
    }
}

pub fn write_allowance(e: &Env, from: &Address, spender: &Address, amount: i128, expiration_ledger: u32) {
    if amount > 0 && expiration_ledger < e.ledger().sequence() {
        panic_with_error!(e, Error::ExpirationLedgerInThePast);
    }

    let key = DataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    });

    let allowance = AllowanceValue {
        amount,
        expiration_ledger,
    };

    e.storage().temporary().set(&key, &allowance);

    if amount > 0 {
        let live_for = expiration_ledger - e.ledger().sequence();
        e.storage().temporary().extend_ttl(&key, live_for, live_for);
    }
}

pub fn spend_allowance(e: &Env, from: &Address, spender: &Address, amount: i128) {
    let allowance = read_allowance(e, from, spender);
    if allowance.amount < amount {
        panic_with_error!(e, Error::InsufficientAllowance);
    }

    if amount > 0 {
        write_allowance(e, from, spender, allowance.amount - amount, allowance.expiration_ledger);
    }
}

fn bump_instance_ttl(e: &Env) {
    e.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_balance_ttl(e: &Env, key: &DataKey) {
    e.storage().persistent().extend_ttl(key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}
