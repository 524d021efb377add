pub mod config;
pub mod error;

use std::panic::{self, AssertUnwindSafe};

use lending_protocol::LendingProtocol;
use mcs_token::McsToken;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};
use staking::Staking;
use tracing::{debug, info};

pub use config::{Cli, ContractKind, DeployConfig};
pub use error::{DeployError, Result};

/// Outcome of a deployment run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeployReport {
    pub contract: ContractKind,
    pub signer: String,
    pub balance: i128,
    pub contract_address: String,
}

/// A funded account on the simulated ledger.
pub struct Signer {
    pub address: Address,
    native: Address,
}

impl Signer {
    /// Generates a new account and credits it with `funding` units of a
    /// freshly registered native asset.
    pub fn funded(env: &Env, funding: i128) -> Result<Self> {
        let issuer = Address::generate(env);
        let native = env.register_stellar_asset_contract_v2(issuer).address();
        let address = Address::generate(env);

        StellarAssetClient::new(env, &native)
            .try_mint(&address, &funding)
            .map_err(|e| DeployError::Funding(format!("{e:?}")))?
            .map_err(|e| DeployError::Funding(format!("{e:?}")))?;

        debug!(funding, "Signer funded");
        Ok(Signer { address, native })
    }

    pub fn balance(&self, env: &Env) -> Result<i128> {
        TokenClient::new(env, &self.native)
            .try_balance(&self.address)
            .map_err(|e| DeployError::BalanceQuery(format!("{e:?}")))?
            .map_err(|e| DeployError::BalanceQuery(format!("{e:?}")))
    }
}

/// Runs a ledger operation that reports failure by panicking, turning the
/// panic into a `DeployError::Register` for `contract`.
pub fn catch_host_panic<T>(contract: &'static str, op: impl FnOnce() -> T) -> Result<T> {
    panic::catch_unwind(AssertUnwindSafe(op)).map_err(|payload| {
        let reason = payload
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| payload.downcast_ref::<&str>().copied())
            .unwrap_or("unknown host error");

        DeployError::Register {
            contract,
            reason: reason.to_string(),
        }
    })
}

/// Registers `kind` on the ledger and returns its contract address.
pub fn deploy_contract(env: &Env, kind: ContractKind, signer: &Signer) -> Result<Address> {
    catch_host_panic(kind.name(), || match kind {
        ContractKind::Staking => env.register(Staking, ()),
        ContractKind::LendingProtocol => env.register(LendingProtocol, ()),
        ContractKind::McsToken => env.register(McsToken, (signer.address.clone(),)),
    })
}

/// A contract registered by [`deploy_with_env`] together with the account
/// that deployed it.
pub struct Deployment {
    pub signer: Signer,
    pub contract_id: Address,
    pub report: DeployReport,
}

pub fn deploy_with_env(env: &Env, config: &DeployConfig) -> Result<Deployment> {
    if config.funding <= 0 {
        return Err(DeployError::InvalidFunding(config.funding));
    }

    env.mock_all_auths();

    let signer = Signer::funded(env, config.funding)?;
    let signer_addr = display_address(&signer.address);
    info!("Deploying contracts with the account: {}", signer_addr);

    let balance = signer.balance(env)?;
    info!("Account balance: {}", balance);

    debug!(contract = config.contract.name(), "Registering contract");
    let contract_id = deploy_contract(env, config.contract, &signer)?;
    let contract_address = display_address(&contract_id);
    info!("Contract address: {}", contract_address);

    let report = DeployReport {
        contract: config.contract,
        signer: signer_addr,
        balance,
        contract_address,
    };

    Ok(Deployment {
        signer,
        contract_id,
        report,
    })
}

pub fn deploy(config: &DeployConfig) -> Result<DeployReport> {
    let env = Env::default();
    deploy_with_env(&env, config).map(|deployment| deployment.report)
}

fn display_address(address: &Address) -> String {
    format!("{address:?}")
}
