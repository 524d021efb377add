#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, token, Address, Env, Symbol,
};

const TOPIC_STAKING: Symbol = symbol_short!("STAKING");
const TOPIC_STAKE: Symbol = symbol_short!("stake");
const TOPIC_UNSTAKE: Symbol = symbol_short!("unstake");

pub const DAY_IN_LEDGERS: u32 = 17280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    AmountMustBeGreaterThanZero = 3,
    InsufficientStake = 4,
    TransferFailed = 5,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Token,
    TotalStaked,
    Stake(Address),
}

fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Token)
}

fn bump_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn get_token_addr(e: &Env) -> Result<Address, Error> {
    let token = e.storage()
        .instance()
        .get::<DataKey, Address>(&DataKey::Token)
        .ok_or(Error::NotInitialized)?;

    bump_instance_ttl(e);
    Ok(token)
}

fn read_stake(e: &Env, addr: &Address) -> i128 {
    let stake_key = DataKey::Stake(addr.clone());
    if let Some(stake) = e.storage().persistent().get::<DataKey, i128>(&stake_key) {
        e.storage().persistent().extend_ttl(&stake_key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
        return stake;
    }

    0
}

fn write_stake(e: &Env, addr: &Address, stake: i128) {
    let stake_key = DataKey::Stake(addr.clone());
    e.storage().persistent().set(&stake_key, &stake);
    e.storage().persistent().extend_ttl(&stake_key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

fn read_total_staked(e: &Env) -> i128 {
    let total = e.storage().instance().get(&DataKey::TotalStaked).unwrap_or(0_i128);
    bump_instance_ttl(e);
    total
}

fn write_total_staked(e: &Env, total: i128) {
    e.storage().instance().set(&DataKey::TotalStaked, &total);
}

#[contract]
pub struct Staking;

#[contractimpl]
impl Staking {

    /// Binds the contract to its staking token. Can only be called once.
    pub fn initialize(e: Env, token: Address) -> Result<bool, Error> {

        if is_initialized(&e) {
            return Err(Error::AlreadyInitialized);
        }

        e.storage().instance().set(&DataKey::Token, &token);
        bump_instance_ttl(&e);
        Ok(true)
    }

    pub fn token(e: Env) -> Result<Address, Error> {
        get_token_addr(&e)
    }

    pub fn stake(e: Env, addr: Address, amount: i128) -> Result<i128, Error> {
        addr.require_auth();

        if amount <= 0 {
            return Err(Error::AmountMustBeGreaterThanZero);
        }

        let tk = token::Client::new(&e, &get_token_addr(&e)?);
        tk.try_transfer(&addr, &e.current_contract_address(), &amount)
            .map_err(|_| Error::TransferFailed)?
            .map_err(|_| Error::TransferFailed)?;

        let stake = read_stake(&e, &addr) + amount;
        write_stake(&e, &addr, stake);
        write_total_staked(&e, read_total_staked(&e) + amount);

        e.events().publish((TOPIC_STAKING, TOPIC_STAKE), (addr, amount));
        Ok(stake)
    }

    pub fn unstake(e: Env, addr: Address, amount: i128) -> Result<i128, Error> {
        addr.require_auth();

        if amount <= 0 {
            return Err(Error::AmountMustBeGreaterThanZero);
        }

        let token_addr = get_token_addr(&e)?;
        let current = read_stake(&e, &addr);
        if current < amount {
            return Err(Error::InsufficientStake);
        }

        let tk = token::Client::new(&e, &token_addr);
        tk.try_transfer(&e.current_contract_address(), &addr, &amount)
            .map_err(|_| Error::TransferFailed)?
            .map_err(|_| Error::TransferFailed)?;

        let stake = current - amount;
        write_stake(&e, &addr, stake);
        write_total_staked(&e, read_total_staked(&e) - amount);

        e.events().publish((TOPIC_STAKING, TOPIC_UNSTAKE), (addr, amount));
        Ok(stake)
    }

    pub fn staked(e: Env, addr: Address) -> i128 {
        read_stake(&e, &addr)
    }

    pub fn total_staked(e: Env) -> i128 {
        read_total_staked(&e)
    }
}
