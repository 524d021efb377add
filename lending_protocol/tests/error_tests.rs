mod common;

use common::{approve_lending, create_stellar_asset, deploy, do_approve_and_deposit};
use lending_protocol::data::Error;
use soroban_sdk::{testutils::{Address as _, Ledger}, Address, Env};

#[test]
#[should_panic(expected = "HostError: Error(Contract, #1)")]
fn test_deposit_zero_amount() {
    let e = Env::default();
    let test_data = deploy(&e);

    approve_lending(&e, &test_data, &test_data.owner, 1000);
    test_data.lending.deposit(&test_data.owner, &test_data.token.address, &0);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #2)")]
fn test_deposit_insufficient_balance() {
    let e = Env::default();
    let test_data = deploy(&e);

    approve_lending(&e, &test_data, &test_data.owner, 2000);
    test_data.lending.deposit(&test_data.owner, &test_data.token.address, &1001);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #3)")]
fn test_deposit_without_approval() {
    let e = Env::default();
    let test_data = deploy(&e);

    test_data.lending.deposit(&test_data.owner, &test_data.token.address, &1000);
}

#[test]
fn test_deposit_allowance_below_amount() {
    let e = Env::default();
    let test_data = deploy(&e);

    approve_lending(&e, &test_data, &test_data.owner, 999);
    let result = test_data.lending.try_deposit(&test_data.owner, &test_data.token.address, &1000);
    assert!(result.is_err());
    assert_eq!(test_data.token.balance(&test_data.owner), 1000);
    assert_eq!(test_data.lending.total_collateral(&test_data.token.address), 0);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #4)")]
fn test_withdraw_more_than_collateral() {
    let e = Env::default();
    let test_data = deploy(&e);

    do_approve_and_deposit(&e, &test_data, &test_data.owner, 500);
    test_data.lending.withdraw(&test_data.owner, &test_data.token.address, &501);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #4)")]
fn test_withdraw_other_users_collateral() {
    let e = Env::default();
    let test_data = deploy(&e);

    do_approve_and_deposit(&e, &test_data, &test_data.owner, 500);
    test_data.lending.withdraw(&test_data.user2, &test_data.token.address, &100);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #1)")]
fn test_withdraw_negative_amount() {
    let e = Env::default();
    let test_data = deploy(&e);

    do_approve_and_deposit(&e, &test_data, &test_data.owner, 500);
    test_data.lending.withdraw(&test_data.owner, &test_data.token.address, &-5);
}

#[test]
fn test_deposit_transfer_failed() {
    let e = Env::default();
    let test_data = deploy(&e);
    let asset = create_stellar_asset(&e, &Address::generate(&e));

    asset.token_admin.mint(&test_data.user2, &1000);
    let expiration_ledger = e.ledger().sequence() + 1000;
    asset.token.approve(&test_data.user2, &test_data.lending.address, &1000, &expiration_ledger);
    asset.token_admin.set_authorized(&test_data.user2, &false);

    let result = test_data.lending.try_deposit(&test_data.user2, &asset.token.address, &1000);
    assert_eq!(result, Err(Ok(Error::TransferFailed)));
    assert_eq!(asset.token.balance(&test_data.user2), 1000);
    assert_eq!(test_data.lending.user_collateral(&asset.token.address, &test_data.user2), 0);
}

#[test]
fn test_withdraw_transfer_failed() {
    let e = Env::default();
    let test_data = deploy(&e);
    let asset = create_stellar_asset(&e, &Address::generate(&e));

    asset.token_admin.mint(&test_data.user2, &1000);
    let expiration_ledger = e.ledger().sequence() + 1000;
    asset.token.approve(&test_data.user2, &test_data.lending.address, &1000, &expiration_ledger);
    test_data.lending.deposit(&test_data.user2, &asset.token.address, &1000);
    asset.token_admin.set_authorized(&test_data.user2, &false);

    let result = test_data.lending.try_withdraw(&test_data.user2, &asset.token.address, &400);
    assert_eq!(result, Err(Ok(Error::TransferFailed)));
    assert_eq!(test_data.lending.user_collateral(&asset.token.address, &test_data.user2), 1000);
    assert_eq!(test_data.lending.token_supply(&asset.token.address), 1000);
}
