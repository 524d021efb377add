use soroban_sdk::{contracterror, contracttype, symbol_short, Address, String, Symbol};

pub const INITIAL_SUPPLY: i128 = 1000;
pub const DECIMALS: u32 = 7;
pub const NAME: &str = "MCS Token";
pub const SYMBOL: &str = "MCS";

pub(crate) const TOPIC_APPROVE: Symbol = symbol_short!("approve");
pub(crate) const TOPIC_TRANSFER: Symbol = symbol_short!("transfer");
pub(crate) const TOPIC_MINT: Symbol = symbol_short!("mint");
pub(crate) const TOPIC_BURN: Symbol = symbol_short!("burn");

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NegativeAmount = 1,
    InsufficientBalance = 2,
    InsufficientAllowance = 3,
    ExpirationLedgerInThePast = 4,
}

#[derive(Clone)]
#[contracttype]
pub struct AllowanceDataKey {
    pub from: Address,
    pub spender: Address,
}

#[derive(Clone)]
#[contracttype]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

#[derive(Clone)]
#[contracttype]
pub struct TokenMetadata {
    pub decimals: u32,
    pub name: String,
    pub symbol: String,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Metadata,
    TotalSupply,
    Balance(Address),
    Allowance(AllowanceDataKey),
}
