use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("Signer funding must be greater than 0, got {0}")]
    InvalidFunding(i128),

    #[error("Failed to fund signer account: {0}")]
    Funding(String),

    #[error("Failed to read signer balance: {0}")]
    BalanceQuery(String),

    #[error("Failed to deploy {contract}: {reason}")]
    Register {
        contract: &'static str,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, DeployError>;
