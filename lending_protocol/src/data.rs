use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

pub(crate) const TOPIC_LENDING: Symbol = symbol_short!("LENDING");
pub(crate) const TOPIC_DEPOSIT: Symbol = symbol_short!("deposit");
pub(crate) const TOPIC_WITHDRAW: Symbol = symbol_short!("withdraw");

#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
#[contracterror]
pub enum Error {
    AmountMustBeGreaterThanZero = 1,
    AddressInsufficientBalance = 2,
    InsufficientAllowance = 3,
    InsufficientCollateral = 4,
    TransferFailed = 5,
}

#[derive(Clone)]
#[contracttype]
pub struct CollateralKey {
    pub token: Address,
    pub user: Address,
}

/// Payload published with every deposit and withdrawal.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct CollateralMovement {
    pub token: Address,
    pub user: Address,
    pub amount: i128,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    TokenSupply(Address),
    TotalCollateral(Address),
    UserCollateral(CollateralKey),
}
