use soroban_sdk::{contracttype, symbol_short, Env, Symbol};

use crate::errors::{reject, ContractError};

const END_SNAPSHOT: Symbol = symbol_short!("END_SNAP");

/// Ledger position observed at or after the end of the staking window.
/// Its presence in storage is the set-once flag.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EndSnapshot {
    /// Ledger sequence number at the time of recording.
    pub sequence: u32,
    /// Ledger timestamp at the time of recording.
    pub timestamp: u64,
}

pub fn get(env: &Env) -> Option<EndSnapshot> {
    env.storage().instance().get(&END_SNAPSHOT)
}

/// Records the current ledger position once the window has closed.
///
/// Re-recording fails with `AlreadySnapshotted` instead of silently
/// returning the stored value.
pub fn record(env: &Env, window_end: u64) -> Result<EndSnapshot, ContractError> {
    let now = env.ledger().timestamp();
    if now < window_end {
        return Err(reject(env, ContractError::WindowNotEnded));
    }
    if env.storage().instance().has(&END_SNAPSHOT) {
        return Err(reject(env, ContractError::AlreadySnapshotted));
    }

    let snapshot = EndSnapshot {
        sequence: env.ledger().sequence(),
        timestamp: now,
    };
    env.storage().instance().set(&END_SNAPSHOT, &snapshot);
    Ok(snapshot)
}
