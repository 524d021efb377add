use lending_protocol::{LendingProtocol, LendingProtocolClient};
use mcs_token::{McsToken, McsTokenClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env,
};
use token::Client as TokenClient;
use token::StellarAssetClient;

pub struct TestData<'a> {
    pub owner: Address,
    pub user2: Address,
    pub lending: LendingProtocolClient<'a>,
    pub token: TokenClient<'a>,
    pub token_admin: McsTokenClient<'a>,
}

pub fn deploy(e: &Env) -> TestData<'_> {
    e.mock_all_auths();

    let owner = Address::generate(e);
    let user2 = Address::generate(e);

    let lending = LendingProtocolClient::new(e, &e.register(LendingProtocol, ()));
    let token_id = e.register(McsToken, (owner.clone(),));

    TestData {
        owner,
        user2,
        lending,
        token: TokenClient::new(e, &token_id),
        token_admin: McsTokenClient::new(e, &token_id),
    }
}

pub fn approve_lending(e: &Env, test_data: &TestData, from: &Address, amount: i128) {
    let expiration_ledger = e.ledger().sequence() + 1000;
    test_data
        .token
        .approve(from, &test_data.lending.address, &amount, &expiration_ledger);
}

pub fn do_approve_and_deposit(e: &Env, test_data: &TestData, from: &Address, amount: i128) -> i128 {
    approve_lending(e, test_data, from, amount);
    test_data.lending.deposit(from, &test_data.token.address, &amount)
}

pub struct AssetData<'a> {
    pub token: TokenClient<'a>,
    pub token_admin: StellarAssetClient<'a>,
}

pub fn create_stellar_asset<'a>(e: &Env, admin: &Address) -> AssetData<'a> {
    let sac = e.register_stellar_asset_contract_v2(admin.clone());
    AssetData {
        token: TokenClient::new(e, &sac.address()),
        token_admin: StellarAssetClient::new(e, &sac.address()),
    }
}
