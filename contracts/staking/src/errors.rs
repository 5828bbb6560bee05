use soroban_sdk::{log, Env, String};

/// Failure kinds of the staking ledger. A failed call leaves every ledger
/// entry exactly as it was before the call.
#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Caller lacks the admin role.
    Unauthorized = 3,
    /// Bad configuration value (window bounds, role removal).
    InvalidInput = 4,
    /// Stake, withdraw or funding amount is zero or negative.
    InvalidAmount = 5,
    NotWhitelisted = 6,
    /// Withdraw exceeds the recorded stake.
    InsufficientBalance = 7,
    /// The token contract refused the transfer.
    TransferFailed = 8,
    /// Reward custody cannot cover the payment.
    InsufficientRewardPool = 9,
    WindowNotEnded = 10,
    AlreadySnapshotted = 11,
    /// Funding attempted after the staking window closed.
    WindowEnded = 12,
}

impl ContractError {
    pub fn reason(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Contract is not initialized",
            ContractError::AlreadyInitialized => "Contract is already initialized",
            ContractError::Unauthorized => "Caller is missing the admin role",
            ContractError::InvalidInput => "Invalid input",
            ContractError::InvalidAmount => "Amount must be greater than zero",
            ContractError::NotWhitelisted => "Token is not whitelisted",
            ContractError::InsufficientBalance => "Insufficient balance",
            ContractError::TransferFailed => "Token transfer failed",
            ContractError::InsufficientRewardPool => "Reward pool cannot cover the payment",
            ContractError::WindowNotEnded => "Staking duration not completed",
            ContractError::AlreadySnapshotted => "End-of-window block already recorded",
            ContractError::WindowEnded => "Staking window has ended",
        }
    }
}

/// Logs the rejection (debug builds and `release-with-logs`) and hands the
/// error back so call sites read `return Err(reject(&env, ...))`.
pub(crate) fn reject(env: &Env, err: ContractError) -> ContractError {
    log!(
        env,
        "staking rejected",
        err as u32,
        String::from_str(env, err.reason())
    );
    err
}
