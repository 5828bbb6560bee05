#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the ledger is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub start_timestamp: u64,
    pub end_timestamp: u64,
    pub reward_token: Address,
}

/// Fired when a user deposits stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub staker: Address,
    pub token: Address,
    pub amount: i128,
    pub new_balance: i128,
    pub timestamp: u64,
}

/// Fired when a user takes stake back out.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub staker: Address,
    pub token: Address,
    pub amount: i128,
    pub new_balance: i128,
    pub timestamp: u64,
}

/// Fired on every `get_reward`, including zero payments.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardPaidEvent {
    pub staker: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardFundedEvent {
    pub funder: Address,
    pub amount: i128,
    pub reward_rate: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WhitelistUpdatedEvent {
    pub admin: Address,
    pub token: Address,
    pub whitelisted: bool,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleUpdatedEvent {
    pub admin: Address,
    pub account: Address,
    pub granted: bool,
    pub timestamp: u64,
}

/// Fired when the end-of-window ledger position is recorded.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EndSnapshotEvent {
    pub sequence: u32,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    admin: Address,
    start_timestamp: u64,
    end_timestamp: u64,
    reward_token: Address,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            start_timestamp,
            end_timestamp,
            reward_token,
        },
    );
}

pub fn publish_staked(env: &Env, staker: Address, token: Address, amount: i128, new_balance: i128) {
    env.events().publish(
        (symbol_short!("STAKED"), staker.clone(), token.clone()),
        StakedEvent {
            staker,
            token,
            amount,
            new_balance,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdrawn(
    env: &Env,
    staker: Address,
    token: Address,
    amount: i128,
    new_balance: i128,
) {
    env.events().publish(
        (symbol_short!("WITHDRAWN"), staker.clone(), token.clone()),
        WithdrawnEvent {
            staker,
            token,
            amount,
            new_balance,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_paid(env: &Env, staker: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("RWD_PAID"), staker.clone()),
        RewardPaidEvent {
            staker,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_funded(env: &Env, funder: Address, amount: i128, reward_rate: i128) {
    env.events().publish(
        (symbol_short!("RWD_FUND"), funder.clone()),
        RewardFundedEvent {
            funder,
            amount,
            reward_rate,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_whitelist_updated(env: &Env, admin: Address, token: Address, whitelisted: bool) {
    env.events().publish(
        (symbol_short!("WL_UPD"), token.clone()),
        WhitelistUpdatedEvent {
            admin,
            token,
            whitelisted,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_role_updated(env: &Env, admin: Address, account: Address, granted: bool) {
    env.events().publish(
        (symbol_short!("ROLE_UPD"), account.clone()),
        RoleUpdatedEvent {
            admin,
            account,
            granted,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_end_snapshot(env: &Env, sequence: u32, timestamp: u64) {
    env.events().publish(
        (symbol_short!("END_SNAP"),),
        EndSnapshotEvent {
            sequence,
            timestamp,
        },
    );
}
