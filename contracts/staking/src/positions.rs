//! Per-(user, token) stake records and the aggregates derived from them.
//!
//! A user's reward weight is the sum of their stakes across every token;
//! the global weight is the sum over all users.

use common::{TTL_EXTEND_TO, TTL_THRESHOLD};
use soroban_sdk::{symbol_short, Address, Env, Symbol};

const STAKE: Symbol = symbol_short!("STK");
const TOKEN_TOTAL: Symbol = symbol_short!("TOK_TOT");
const USER_WEIGHT: Symbol = symbol_short!("USR_WGT");
const TOTAL_WEIGHT: Symbol = symbol_short!("TOT_WGT");

fn stake_key(user: &Address, token: &Address) -> (Symbol, Address, Address) {
    (STAKE, user.clone(), token.clone())
}

pub fn stake_of(env: &Env, user: &Address, token: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&stake_key(user, token))
        .unwrap_or(0)
}

pub fn token_total(env: &Env, token: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&(TOKEN_TOTAL, token.clone()))
        .unwrap_or(0)
}

pub fn weight_of(env: &Env, user: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&(USER_WEIGHT, user.clone()))
        .unwrap_or(0)
}

pub fn total_weight(env: &Env) -> i128 {
    env.storage().instance().get(&TOTAL_WEIGHT).unwrap_or(0)
}

/// Adds `amount` to the stake record and every aggregate. Returns the new
/// stake of `user` in `token`.
pub fn credit(env: &Env, user: &Address, token: &Address, amount: i128) -> i128 {
    apply(env, user, token, amount)
}

/// Removes `amount`; the caller has already checked it against the record.
pub fn debit(env: &Env, user: &Address, token: &Address, amount: i128) -> i128 {
    apply(env, user, token, amount.saturating_neg())
}

fn apply(env: &Env, user: &Address, token: &Address, delta: i128) -> i128 {
    let storage = env.storage().persistent();

    let key = stake_key(user, token);
    let balance = stake_of(env, user, token).saturating_add(delta);
    storage.set(&key, &balance);
    storage.extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);

    let total_key = (TOKEN_TOTAL, token.clone());
    storage.set(&total_key, &token_total(env, token).saturating_add(delta));
    storage.extend_ttl(&total_key, TTL_THRESHOLD, TTL_EXTEND_TO);

    let weight_key = (USER_WEIGHT, user.clone());
    storage.set(&weight_key, &weight_of(env, user).saturating_add(delta));
    storage.extend_ttl(&weight_key, TTL_THRESHOLD, TTL_EXTEND_TO);

    env.storage()
        .instance()
        .set(&TOTAL_WEIGHT, &total_weight(env).saturating_add(delta));

    balance
}
