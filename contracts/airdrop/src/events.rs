#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub staking_contract: Address,
    pub token: Address,
    pub total_pool: i128,
    pub per_claim_rate: i128,
}

/// Fired when an address takes its one-time claim.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimedEvent {
    pub user: Address,
    pub amount: i128,
    pub total_distributed: i128,
    pub timestamp: u64,
}

/// Fired when the treasury pays the pool amount to a user.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardPaidEvent {
    pub user: Address,
    pub amount: i128,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    admin: Address,
    staking_contract: Address,
    token: Address,
    total_pool: i128,
    per_claim_rate: i128,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            staking_contract,
            token,
            total_pool,
            per_claim_rate,
        },
    );
}

pub fn publish_claimed(env: &Env, user: Address, amount: i128, total_distributed: i128) {
    env.events().publish(
        (symbol_short!("CLAIMED"), user.clone()),
        ClaimedEvent {
            user,
            amount,
            total_distributed,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_paid(env: &Env, user: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("RWD_PAID"), user.clone()),
        RewardPaidEvent {
            user,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}
