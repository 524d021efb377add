use clap::{Parser, ValueEnum};

use crate::error::{DeployError, Result};

/// 10,000 units of the native asset expressed in stroops.
pub const DEFAULT_FUNDING: i128 = 10_000 * 10_000_000;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum ContractKind {
    Staking,
    LendingProtocol,
    McsToken,
}

impl ContractKind {
    pub fn name(&self) -> &'static str {
        match self {
            ContractKind::Staking => "Staking",
            ContractKind::LendingProtocol => "LendingProtocol",
            ContractKind::McsToken => "MCSToken",
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "deployer")]
#[command(about = "Deploy a contract onto a simulated Soroban ledger")]
#[command(version)]
pub struct Cli {
    /// Contract to deploy
    #[arg(long, env = "DEPLOYER_CONTRACT", value_enum, default_value_t = ContractKind::Staking)]
    pub contract: ContractKind,

    /// Native balance credited to the signer before deploying, in stroops
    #[arg(
        long,
        env = "DEPLOYER_FUNDING",
        default_value_t = DEFAULT_FUNDING,
        allow_negative_numbers = true
    )]
    pub funding: i128,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeployConfig {
    pub contract: ContractKind,
    pub funding: i128,
}

impl Default for DeployConfig {
    fn default() -> Self {
        DeployConfig {
            contract: ContractKind::Staking,
            funding: DEFAULT_FUNDING,
        }
    }
}

impl TryFrom<Cli> for DeployConfig {
    type Error = DeployError;

    fn try_from(cli: Cli) -> Result<Self> {
        if cli.funding <= 0 {
            return Err(DeployError::InvalidFunding(cli.funding));
        }

        Ok(DeployConfig {
            contract: cli.contract,
            funding: cli.funding,
        })
    }
}
