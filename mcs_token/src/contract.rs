use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, String};
use soroban_sdk::token::TokenInterface;

use crate::data::{
    Error, TokenMetadata, DECIMALS, INITIAL_SUPPLY, NAME, SYMBOL, TOPIC_APPROVE, TOPIC_BURN,
    TOPIC_MINT, TOPIC_TRANSFER,
};
use crate::storage::{
    decrease_supply, get_admin, get_metadata, get_total_supply, increase_supply, read_allowance,
    read_balance, receive_balance, set_admin, set_metadata, spend_allowance, spend_balance,
    write_allowance,
};

fn check_nonnegative_amount(e: &Env, amount: i128) {
    if amount < 0 {
        panic_with_error!(e, Error::NegativeAmount);
    }
}

fn mint_to(e: &Env, to: &Address, amount: i128) {
    receive_balance(e, to, amount);
    increase_supply(e, amount);
    e.events().publish((TOPIC_MINT, to.clone()), amount);
}

#[contract]
pub struct McsToken;

#[contractimpl]
impl McsToken {
    /// Deploys the token with `owner` as admin and credits the owner with the
    /// whole initial supply.
    pub fn __constructor(e: Env, owner: Address) {
        set_admin(&e, &owner);
        set_metadata(
            &e,
            &TokenMetadata {
                decimals: DECIMALS,
                name: String::from_str(&e, NAME),
                symbol: String::from_str(&e, SYMBOL),
            },
        );

        mint_to(&e, &owner, INITIAL_SUPPLY);
    }

    pub fn mint(e: Env, to: Address, amount: i128) {
        check_nonnegative_amount(&e, amount);
        let admin = get_admin(&e);
        admin.require_auth();

        mint_to(&e, &to, amount);
    }

    pub fn admin(e: Env) -> Address {
        get_admin(&e)
    }

    pub fn total_supply(e: Env) -> i128 {
        get_total_supply(&e)
    }
}

#[contractimpl]
impl TokenInterface for McsToken {
    fn allowance(e: Env, from: Address, spender: Address) -> i128 {
        read_allowance(&e, &from, &spender).amount
    }

    fn approve(e: Env, from: Address, spender: Address, amount: i128, expiration_ledger: u32) {
        from.require_auth();
        check_nonnegative_amount(&e, amount);

        write_allowance(&e, &from, &spender, amount, expiration_ledger);
        e.events().publish((TOPIC_APPROVE, from, spender), (amount, expiration_ledger));
    }

    fn balance(e: Env, id: Address) -> i128 {
        read_balance(&e, &id)
    }

    fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        check_nonnegative_amount(&e, amount);

        spend_balance(&e, &from, amount);
        receive_balance(&e, &to, amount);
        e.events().publish((TOPIC_TRANSFER, from, to), amount);
    }

    fn transfer_from(e: Env, spender: Address, from: Address, to: Address, amount: i128) {
        spender.require_auth();
        check_nonnegative_amount(&e, amount);

        spend_allowance(&e, &from, &spender, amount);
        spend_balance(&e, &from, amount);
        receive_balance(&e, &to, amount);
        e.events().publish((TOPIC_TRANSFER, from, to), amount);
    }

    fn burn(e: Env, from: Address, amount: i128) {
        from.require_auth();
        check_nonnegative_amount(&e, amount);

        spend_balance(&e, &from, amount);
        decrease_supply(&e, amount);
        e.events().publish((TOPIC_BURN, from), amount);
    }

    fn burn_from(e: Env, spender: Address, from: Address, amount: i128) {
        spender.require_auth();
        check_nonnegative_amount(&e, amount);

        spend_allowance(&e, &from, &spender, amount);
        spend_balance(&e, &from, amount);
        decrease_supply(&e, amount);
        e.events().publish((TOPIC_BURN, from), amount);
    }

    fn decimals(e: Env) -> u32 {
        get_metadata(&e).decimals
    }

    fn name(e: Env) -> String {
        get_metadata(&e).name
    }

    fn symbol(e: Env) -> String {
        get_metadata(&e).symbol
    }
}
