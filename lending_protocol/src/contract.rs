use soroban_sdk::token::TokenClient;
use soroban_sdk::{contract, contractimpl, log, token, Address, Env};

use crate::data::{CollateralMovement, Error, TOPIC_DEPOSIT, TOPIC_LENDING, TOPIC_WITHDRAW};
use crate::storage::{
    get_token_supply, get_total_collateral, get_user_collateral, set_token_supply,
    set_total_collateral, set_user_collateral,
};

macro_rules! require {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
    ($($cond:expr, $err:expr),+) => {
        $(
            if !$cond {
                return Err($err);
            }
        )+
    };
}

fn get_token<'a>(env: &'a Env, token: &Address) -> TokenClient<'a> {
    token::Client::new(env, token)
}

/// Applies `delta` to the token supply, total collateral and user collateral
/// of `token` and returns the user's new collateral.
fn apply_collateral_delta(env: &Env, token: &Address, user: &Address, delta: i128) -> i128 {
    let user_collateral = get_user_collateral(env, token, user) + delta;

    set_token_supply(env, token, &(get_token_supply(env, token) + delta));
    set_total_collateral(env, token, &(get_total_collateral(env, token) + delta));
    set_user_collateral(env, token, user, &user_collateral);

    user_collateral
}

#[contract]
pub struct LendingProtocol;

#[contractimpl]
impl LendingProtocol {
    /// Deposits `amount` of `token` as collateral for `user`.
    ///
    /// The protocol pulls the tokens with `transfer_from`, so `user` must have
    /// approved the protocol address for at least `amount` beforehand.
    ///
    /// # Returns
    ///
    /// * The user's collateral for `token` after the deposit.
    ///
    /// # Errors
    ///
    /// * `AmountMustBeGreaterThanZero` if amount is 0 or negative.
    /// * `AddressInsufficientBalance` if the user holds less than `amount`.
    /// * `InsufficientAllowance` if the protocol's allowance is below `amount`.
    /// * `TransferFailed` if the token contract rejects the transfer.
    pub fn deposit(env: Env, user: Address, token: Address, amount: i128) -> Result<i128, Error> {
        user.require_auth();

        let tk = get_token(&env, &token);
        let protocol = env.current_contract_address();

        require!(
            amount > 0, Error::AmountMustBeGreaterThanZero,
            tk.balance(&user) >= amount, Error::AddressInsufficientBalance,
            tk.allowance(&user, &protocol) >= amount, Error::InsufficientAllowance
        );

        tk.try_transfer_from(&protocol, &user, &protocol, &amount)
            .map_err(|_| Error::TransferFailed)?
            .map_err(|_| Error::TransferFailed)?;

        let user_collateral = apply_collateral_delta(&env, &token, &user, amount);
        log!(&env, "Collateral for user is {}", user_collateral);

        env.events().publish(
            (TOPIC_LENDING, TOPIC_DEPOSIT),
            CollateralMovement { token, user, amount },
        );

        Ok(user_collateral)
    }

    /// Returns `amount` of `token` collateral to `user`.
    ///
    /// # Errors
    ///
    /// * `AmountMustBeGreaterThanZero` if amount is 0 or negative.
    /// * `InsufficientCollateral` if the user's collateral is below `amount`.
    /// * `TransferFailed` if the token contract rejects the transfer.
    pub fn withdraw(env: Env, user: Address, token: Address, amount: i128) -> Result<i128, Error> {
        user.require_auth();

        require!(
            amount > 0, Error::AmountMustBeGreaterThanZero,
            get_user_collateral(&env, &token, &user) >= amount, Error::InsufficientCollateral
        );

        let tk = get_token(&env, &token);
        tk.try_transfer(&env.current_contract_address(), &user, &amount)
            .map_err(|_| Error::TransferFailed)?
            .map_err(|_| Error::TransferFailed)?;

        let user_collateral = apply_collateral_delta(&env, &token, &user, -amount);

        env.events().publish(
            (TOPIC_LENDING, TOPIC_WITHDRAW),
            CollateralMovement { token, user, amount },
        );

        Ok(user_collateral)
    }

    pub fn token_supply(env: Env, token: Address) -> i128 {
        get_token_supply(&env, &token)
    }

    pub fn user_collateral(env: Env, token: Address, user: Address) -> i128 {
        get_user_collateral(&env, &token, &user)
    }

    pub fn total_collateral(env: Env, token: Address) -> i128 {
        get_total_collateral(&env, &token)
    }
}
