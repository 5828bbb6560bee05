#![no_std]

pub mod errors;
pub mod events;
pub mod positions;
pub mod rewards;
pub mod snapshot;
pub mod whitelist;

use common::roles::{self, Role};
use common::{extend_instance, TokenCustody, TTL_EXTEND_TO, TTL_THRESHOLD};
use soroban_sdk::{contract, contractimpl, contracttype, symbol_short, Address, Env, Symbol};

pub use errors::ContractError;
pub use snapshot::EndSnapshot;

use errors::reject;

// ── Storage key constants ────────────────────────────────────────────────────

const ADMIN: Symbol = symbol_short!("ADMIN");
const INITIALIZED: Symbol = symbol_short!("INIT");
const WINDOW: Symbol = symbol_short!("WINDOW");
const REWARD_RATE: Symbol = symbol_short!("RWD_RATE");
const REWARD_PER_TOKEN: Symbol = symbol_short!("RPT");
const LAST_UPDATE: Symbol = symbol_short!("LAST_UPD");

// Per-user persistent storage uses tuple keys:  (prefix, user_address)
const USER_RPT_PAID: Symbol = symbol_short!("RPT_PAID");
const USER_EARNED: Symbol = symbol_short!("ERND");

// ── Public-facing types (re-exported for test consumers) ─────────────────────

/// Fixed staking window and the token rewards are paid in.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakingWindow {
    pub start_timestamp: u64,
    pub end_timestamp: u64,
    pub reward_token: Address,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakingContract;

#[contractimpl]
impl StakingContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the ledger.
    ///
    /// * `admin`           – first holder of the admin role.
    /// * `start_timestamp` – beginning of the reward window (seconds).
    /// * `end_timestamp`   – end of the reward window, strictly after start.
    /// * `reward_token`    – SAC address of the token rewards are paid in.
    pub fn initialize(
        env: Env,
        admin: Address,
        start_timestamp: u64,
        end_timestamp: u64,
        reward_token: Address,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(reject(&env, ContractError::AlreadyInitialized));
        }
        if end_timestamp <= start_timestamp {
            return Err(reject(&env, ContractError::InvalidInput));
        }

        let window = StakingWindow {
            start_timestamp,
            end_timestamp,
            reward_token: reward_token.clone(),
        };

        env.storage().instance().set(&ADMIN, &admin);
        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(&WINDOW, &window);
        env.storage().instance().set(&LAST_UPDATE, &start_timestamp);
        // REWARD_RATE, REWARD_PER_TOKEN and the stake totals start at zero;
        // unwrap_or(0) handles absent keys.

        roles::grant_role(&env, Role::Admin, &admin);
        extend_instance(&env);

        events::publish_initialized(&env, admin, start_timestamp, end_timestamp, reward_token);

        Ok(())
    }

    // ── Whitelist ───────────────────────────────────────────────────────────

    /// Make `token` eligible for staking. Re-adding is a no-op success.
    pub fn add_whitelist_token(
        env: Env,
        caller: Address,
        token: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        whitelist::set_token(&env, &token, true);
        events::publish_whitelist_updated(&env, caller, token, true);

        Ok(())
    }

    /// Stop accepting `token`. Removing an unknown token succeeds.
    pub fn remove_whitelist_token(
        env: Env,
        caller: Address,
        token: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        whitelist::set_token(&env, &token, false);
        events::publish_whitelist_updated(&env, caller, token, false);

        Ok(())
    }

    pub fn is_whitelisted_token(env: Env, token: Address) -> bool {
        whitelist::is_token_whitelisted(&env, &token)
    }

    /// `true` once `user` has staked successfully at least once.
    pub fn is_whitelisted_user(env: Env, user: Address) -> bool {
        whitelist::is_user_whitelisted(&env, &user)
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` of a whitelisted `token`.
    ///
    /// The tokens are pulled against the allowance `staker` granted this
    /// contract. The reward accumulator is flushed first so the new stake
    /// does not earn retroactively.
    pub fn stake(
        env: Env,
        staker: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        if amount <= 0 {
            return Err(reject(&env, ContractError::InvalidAmount));
        }
        if !whitelist::is_token_whitelisted(&env, &token) {
            return Err(reject(&env, ContractError::NotWhitelisted));
        }

        let window = Self::load_window(&env)?;
        Self::update_reward(&env, &window, &staker);

        TokenCustody::new(&env, &token)
            .transfer_in(&staker, amount)
            .map_err(|_| reject(&env, ContractError::TransferFailed))?;

        let new_balance = positions::credit(&env, &staker, &token, amount);
        whitelist::mark_user(&env, &staker);

        events::publish_staked(&env, staker, token, amount, new_balance);

        Ok(())
    }

    /// Return `amount` of `token` to `staker`.
    pub fn withdraw(
        env: Env,
        staker: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        if !whitelist::is_token_whitelisted(&env, &token) {
            return Err(reject(&env, ContractError::NotWhitelisted));
        }
        if amount <= 0 {
            return Err(reject(&env, ContractError::InvalidAmount));
        }
        if positions::stake_of(&env, &staker, &token) < amount {
            return Err(reject(&env, ContractError::InsufficientBalance));
        }

        let window = Self::load_window(&env)?;
        Self::update_reward(&env, &window, &staker);

        let new_balance = positions::debit(&env, &staker, &token, amount);

        // A refused payout turns into an error, which discards the debit.
        TokenCustody::new(&env, &token)
            .transfer_out(&staker, amount)
            .map_err(|_| reject(&env, ContractError::TransferFailed))?;

        events::publish_withdrawn(&env, staker, token, amount, new_balance);

        Ok(())
    }

    pub fn balance_of(env: Env, user: Address, token: Address) -> i128 {
        positions::stake_of(&env, &user, &token)
    }

    /// Sum staked across all users for `token`.
    pub fn total_staked(env: Env, token: Address) -> i128 {
        positions::token_total(&env, &token)
    }

    /// Sum of every stake across all tokens; the denominator of reward shares.
    pub fn total_weight(env: Env) -> i128 {
        positions::total_weight(&env)
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Move `amount` reward tokens from `funder` into reward custody and
    /// spread them evenly over the rest of the window.
    ///
    /// Requires the admin role and an allowance for this contract on the
    /// reward token. Returns the new scaled emission rate.
    pub fn fund_rewards(env: Env, funder: Address, amount: i128) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        funder.require_auth();
        Self::require_admin(&env, &funder)?;

        if amount <= 0 {
            return Err(reject(&env, ContractError::InvalidAmount));
        }

        let window = Self::load_window(&env)?;
        let now = env.ledger().timestamp();
        if now >= window.end_timestamp {
            return Err(reject(&env, ContractError::WindowEnded));
        }

        // Flush at the old rate before changing it.
        Self::update_global_reward(&env, &window);

        TokenCustody::new(&env, &window.reward_token)
            .transfer_in(&funder, amount)
            .map_err(|_| reject(&env, ContractError::TransferFailed))?;

        let from = rewards::accrual_time(now, window.start_timestamp, window.end_timestamp);
        let remaining = window.end_timestamp.saturating_sub(from);
        let current_rate: i128 = env.storage().instance().get(&REWARD_RATE).unwrap_or(0);
        let new_rate = rewards::rate_after_funding(current_rate, remaining, amount);
        env.storage().instance().set(&REWARD_RATE, &new_rate);

        events::publish_reward_funded(&env, funder, amount, new_rate);

        Ok(new_rate)
    }

    /// Pay `staker` everything accrued so far. Returns the amount paid.
    ///
    /// Nothing accrued is a legal zero payment, still announced with
    /// `RWD_PAID`. Principal staked in the reward token is never used to
    /// pay rewards.
    pub fn get_reward(env: Env, staker: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let window = Self::load_window(&env)?;
        Self::update_reward(&env, &window, &staker);

        let earned_key = (USER_EARNED, staker.clone());
        let earned: i128 = env.storage().persistent().get(&earned_key).unwrap_or(0);

        if earned > 0 {
            let custody = TokenCustody::new(&env, &window.reward_token);
            let principal = positions::token_total(&env, &window.reward_token);
            let available = custody.balance().saturating_sub(principal);
            if available < earned {
                return Err(reject(&env, ContractError::InsufficientRewardPool));
            }

            env.storage().persistent().set(&earned_key, &0i128);

            custody
                .transfer_out(&staker, earned)
                .map_err(|_| reject(&env, ContractError::TransferFailed))?;
        }

        events::publish_reward_paid(&env, staker, earned);

        Ok(earned)
    }

    /// Rewards `user` could collect right now, without mutating state.
    pub fn pending_reward(env: Env, user: Address) -> i128 {
        let window = match Self::load_window(&env) {
            Ok(window) => window,
            Err(_) => return 0,
        };
        let current_rpt = Self::current_reward_per_token(&env, &window);

        let weight = positions::weight_of(&env, &user);
        let user_rpt_paid: i128 = env
            .storage()
            .persistent()
            .get(&(USER_RPT_PAID, user.clone()))
            .unwrap_or(0);
        let user_earned: i128 = env
            .storage()
            .persistent()
            .get(&(USER_EARNED, user))
            .unwrap_or(0);

        rewards::earned(weight, current_rpt, user_rpt_paid, user_earned)
    }

    /// Current emission rate, scaled by `rewards::REWARD_PRECISION`.
    pub fn reward_rate(env: Env) -> i128 {
        env.storage().instance().get(&REWARD_RATE).unwrap_or(0)
    }

    // ── End-of-window snapshot ──────────────────────────────────────────────

    /// Record the ledger sequence once the window is over. Callable by
    /// anyone, exactly once.
    pub fn block_number_at_end_timestamp(env: Env) -> Result<u32, ContractError> {
        let window = Self::load_window(&env)?;
        let snapshot = snapshot::record(&env, window.end_timestamp)?;
        extend_instance(&env);

        events::publish_end_snapshot(&env, snapshot.sequence, snapshot.timestamp);

        Ok(snapshot.sequence)
    }

    /// Recorded end-of-window sequence; `None` until it has been recorded.
    pub fn block_at_end_timestamp(env: Env) -> Option<u32> {
        snapshot::get(&env).map(|s| s.sequence)
    }

    pub fn get_end_snapshot(env: Env) -> Option<EndSnapshot> {
        snapshot::get(&env)
    }

    // ── Roles ───────────────────────────────────────────────────────────────

    /// Give `account` the admin role. Granting twice is a no-op success.
    pub fn grant_role(env: Env, caller: Address, account: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if roles::grant_role(&env, Role::Admin, &account) {
            events::publish_role_updated(&env, caller, account, true);
        }
        Ok(())
    }

    /// Take the admin role from `account`. The last admin cannot be removed.
    pub fn revoke_role(env: Env, caller: Address, account: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        if roles::has_role(&env, Role::Admin, &account)
            && roles::role_count(&env, Role::Admin) <= 1
        {
            return Err(reject(&env, ContractError::InvalidInput));
        }

        if roles::revoke_role(&env, Role::Admin, &account) {
            events::publish_role_updated(&env, caller, account, false);
        }
        Ok(())
    }

    pub fn has_role(env: Env, account: Address) -> bool {
        roles::has_role(&env, Role::Admin, &account)
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn get_window(env: Env) -> Result<StakingWindow, ContractError> {
        Self::load_window(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    /// The address that initialized the ledger.
    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&ADMIN)
            .ok_or(ContractError::NotInitialized)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(reject(env, ContractError::NotInitialized));
        }
        extend_instance(env);
        Ok(())
    }

    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        if !roles::has_role(env, Role::Admin, caller) {
            return Err(reject(env, ContractError::Unauthorized));
        }
        Ok(())
    }

    fn load_window(env: &Env) -> Result<StakingWindow, ContractError> {
        env.storage()
            .instance()
            .get(&WINDOW)
            .ok_or_else(|| reject(env, ContractError::NotInitialized))
    }

    /// Accumulator value as of now, without writing it back.
    fn current_reward_per_token(env: &Env, window: &StakingWindow) -> i128 {
        let total_weight = positions::total_weight(env);
        let reward_rate: i128 = env.storage().instance().get(&REWARD_RATE).unwrap_or(0);
        let stored_rpt: i128 = env.storage().instance().get(&REWARD_PER_TOKEN).unwrap_or(0);
        let last_update: u64 = env
            .storage()
            .instance()
            .get(&LAST_UPDATE)
            .unwrap_or(window.start_timestamp);

        let now = rewards::accrual_time(
            env.ledger().timestamp(),
            window.start_timestamp,
            window.end_timestamp,
        );
        let elapsed = now.saturating_sub(last_update);

        rewards::compute_reward_per_token(stored_rpt, reward_rate, elapsed, total_weight)
    }

    /// Flush the global accumulator without touching user state.
    fn update_global_reward(env: &Env, window: &StakingWindow) -> i128 {
        let new_rpt = Self::current_reward_per_token(env, window);
        let now = rewards::accrual_time(
            env.ledger().timestamp(),
            window.start_timestamp,
            window.end_timestamp,
        );

        env.storage().instance().set(&REWARD_PER_TOKEN, &new_rpt);
        env.storage().instance().set(&LAST_UPDATE, &now);
        new_rpt
    }

    /// Full per-user flush: settle what `user` earned at their current
    /// weight and move their snapshot up to the current accumulator.
    fn update_reward(env: &Env, window: &StakingWindow, user: &Address) {
        let current_rpt = Self::update_global_reward(env, window);

        let weight = positions::weight_of(env, user);
        let user_rpt_paid: i128 = env
            .storage()
            .persistent()
            .get(&(USER_RPT_PAID, user.clone()))
            .unwrap_or(0);
        let user_earned: i128 = env
            .storage()
            .persistent()
            .get(&(USER_EARNED, user.clone()))
            .unwrap_or(0);

        let new_earned = rewards::earned(weight, current_rpt, user_rpt_paid, user_earned);

        let storage = env.storage().persistent();
        let earned_key = (USER_EARNED, user.clone());
        let paid_key = (USER_RPT_PAID, user.clone());
        storage.set(&earned_key, &new_earned);
        storage.set(&paid_key, &current_rpt);
        storage.extend_ttl(&earned_key, TTL_THRESHOLD, TTL_EXTEND_TO);
        storage.extend_ttl(&paid_key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
