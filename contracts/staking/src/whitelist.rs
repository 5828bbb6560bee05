use common::{TTL_EXTEND_TO, TTL_THRESHOLD};
use soroban_sdk::{symbol_short, Address, Env, Symbol};

// ── Storage key constants ───────────────────────────────────────────────────

const WL_TOKEN: Symbol = symbol_short!("WL_TOKEN");
const WL_USER: Symbol = symbol_short!("WL_USER");

fn token_key(token: &Address) -> (Symbol, Address) {
    (WL_TOKEN, token.clone())
}

fn user_key(user: &Address) -> (Symbol, Address) {
    (WL_USER, user.clone())
}

fn extend_ttl(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Tokens ──────────────────────────────────────────────────────────────────

/// An absent entry reads as not whitelisted.
pub fn is_token_whitelisted(env: &Env, token: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&token_key(token))
        .unwrap_or(false)
}

/// Removal stores `false` rather than erasing the entry.
pub fn set_token(env: &Env, token: &Address, whitelisted: bool) {
    let key = token_key(token);
    env.storage().persistent().set(&key, &whitelisted);
    extend_ttl(env, &key);
}

// ── Users ───────────────────────────────────────────────────────────────────

pub fn is_user_whitelisted(env: &Env, user: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&user_key(user))
        .unwrap_or(false)
}

/// Flags `user` as having staked at least once. Never cleared.
pub fn mark_user(env: &Env, user: &Address) {
    let key = user_key(user);
    if !env.storage().persistent().has(&key) {
        env.storage().persistent().set(&key, &true);
    }
    extend_ttl(env, &key);
}
