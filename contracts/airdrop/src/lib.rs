#![no_std]

pub mod events;


use common::{extend_instance, TokenCustody, TTL_EXTEND_TO, TTL_THRESHOLD};
use soroban_sdk::{
    contract, contractimpl, contracttype, log, symbol_short, Address, Env, String, Symbol,
};

// ── Storage keys ────────────────────────────────────────────────────────────────

const CONFIG: Symbol = symbol_short!("CONFIG");
const DISTRIBUTED: Symbol = symbol_short!("DISTRIB");
const CLAIMED: Symbol = symbol_short!("CLAIMED");

// ── Types ──────────────────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AirdropConfig {
    /// Treasury account; authorizes `get_reward` and funds it through an allowance.
    pub admin: Address,
    /// Staking ledger this airdrop belongs to. Kept as an identity only.
    pub staking_contract: Address,
    /// SAC address of the distributed token.
    pub token: Address,
    /// Upper bound on what the claim path may hand out.
    pub total_pool: i128,
    /// Amount each address receives from `claim_reward`.
    pub per_claim_rate: i128,
}

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    InvalidInput = 4,
    AlreadyClaimed = 5,
    PoolExhausted = 6,
    TransferFailed = 7,
}

impl ContractError {
    pub fn reason(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Airdrop: not initialized",
            ContractError::AlreadyInitialized => "Airdrop: already initialized",
            ContractError::InvalidInput => "Airdrop: invalid pool configuration",
            ContractError::AlreadyClaimed => "Airdrop: Reward already claimed",
            ContractError::PoolExhausted => "Airdrop: pool exhausted",
            ContractError::TransferFailed => "Airdrop: token transfer failed",
        }
    }
}

// ── Helpers ────────────────────────────────────────────────────────────────────

fn reject(env: &Env, err: ContractError) -> ContractError {
    log!(
        env,
        "airdrop rejected",
        err as u32,
        String::from_str(env, err.reason())
    );
    err
}

fn load_config(env: &Env) -> Result<AirdropConfig, ContractError> {
    env.storage()
        .instance()
        .get(&CONFIG)
        .ok_or_else(|| reject(env, ContractError::NotInitialized))
}

/// Like `load_config`, for calls that write state.
fn load_config_for_update(env: &Env) -> Result<AirdropConfig, ContractError> {
    let cfg = load_config(env)?;
    extend_instance(env);
    Ok(cfg)
}

fn claimed_key(user: &Address) -> (Symbol, Address) {
    (CLAIMED, user.clone())
}

fn load_distributed(env: &Env) -> i128 {
    env.storage().instance().get(&DISTRIBUTED).unwrap_or(0)
}

// ── Contract ───────────────────────────────────────────────────────────────────

#[contract]
pub struct AirdropContract;

#[contractimpl]
impl AirdropContract {
    /// Bootstrap the airdrop.
    ///
    /// `per_claim_rate` must be positive and no larger than `total_pool`.
    pub fn initialize(
        env: Env,
        admin: Address,
        staking_contract: Address,
        token: Address,
        total_pool: i128,
        per_claim_rate: i128,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&CONFIG) {
            return Err(reject(&env, ContractError::AlreadyInitialized));
        }
        if total_pool <= 0 || per_claim_rate <= 0 || per_claim_rate > total_pool {
            return Err(reject(&env, ContractError::InvalidInput));
        }

        let cfg = AirdropConfig {
            admin: admin.clone(),
            staking_contract: staking_contract.clone(),
            token: token.clone(),
            total_pool,
            per_claim_rate,
        };
        env.storage().instance().set(&CONFIG, &cfg);
        extend_instance(&env);

        events::publish_initialized(
            &env,
            admin,
            staking_contract,
            token,
            total_pool,
            per_claim_rate,
        );

        Ok(())
    }

    /// One-time claim of `per_claim_rate` tokens out of the airdrop's own
    /// balance. A second claim by the same address fails with `AlreadyClaimed`.
    pub fn claim_reward(env: Env, user: Address) -> Result<i128, ContractError> {
        let cfg = load_config_for_update(&env)?;
        user.require_auth();

        let key = claimed_key(&user);
        if env.storage().persistent().get(&key).unwrap_or(false) {
            return Err(reject(&env, ContractError::AlreadyClaimed));
        }

        let distributed = load_distributed(&env).saturating_add(cfg.per_claim_rate);
        if distributed > cfg.total_pool {
            return Err(reject(&env, ContractError::PoolExhausted));
        }

        env.storage().persistent().set(&key, &true);
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
        env.storage().instance().set(&DISTRIBUTED, &distributed);

        TokenCustody::new(&env, &cfg.token)
            .transfer_out(&user, cfg.per_claim_rate)
            .map_err(|_| reject(&env, ContractError::TransferFailed))?;

        events::publish_claimed(&env, user, cfg.per_claim_rate, distributed);

        Ok(cfg.per_claim_rate)
    }

    /// Pay the full `total_pool` from the treasury to `user`.
    ///
    /// Needs the treasury's authorization, enforced by the host rather than
    /// a contract error, and an allowance the treasury granted this contract
    /// on the airdrop token. Independent of the claim record: it neither
    /// requires nor consumes a claim.
    pub fn get_reward(env: Env, user: Address) -> Result<i128, ContractError> {
        let cfg = load_config_for_update(&env)?;
        cfg.admin.require_auth();

        TokenCustody::new(&env, &cfg.token)
            .transfer_on_behalf(&cfg.admin, &user, cfg.total_pool)
            .map_err(|_| reject(&env, ContractError::TransferFailed))?;

        events::publish_reward_paid(&env, user, cfg.total_pool);

        Ok(cfg.total_pool)
    }

    pub fn claimed(env: Env, user: Address) -> bool {
        env.storage()
            .persistent()
            .get(&claimed_key(&user))
            .unwrap_or(false)
    }

    /// Total handed out through `claim_reward`.
    pub fn distributed(env: Env) -> i128 {
        load_distributed(&env)
    }

    /// What the claim path can still hand out.
    pub fn remaining_pool(env: Env) -> Result<i128, ContractError> {
        let cfg = load_config(&env)?;
        Ok(cfg.total_pool.saturating_sub(load_distributed(&env)))
    }

    pub fn get_config(env: Env) -> Result<AirdropConfig, ContractError> {
        load_config(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&CONFIG)
    }
}
