use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::{TTL_EXTEND_TO, TTL_THRESHOLD};

// ── Storage Keys ─────────────────────────────────────────────────────────────

const ROLE_PREFIX: Symbol = symbol_short!("ROLE");
const ROLE_COUNT_PREFIX: Symbol = symbol_short!("ROLE_CNT");

// ── Role Enum ────────────────────────────────────────────────────────────────

/// Capabilities an address can hold.
///
/// - `Admin` – may mutate the token whitelist, fund rewards and grant or
///             revoke roles.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    Admin = 1,
}

// ── Storage Helpers ──────────────────────────────────────────────────────────

fn role_key(role: Role, account: &Address) -> (Symbol, Role, Address) {
    (ROLE_PREFIX, role, account.clone())
}

fn count_key(role: Role) -> (Symbol, Role) {
    (ROLE_COUNT_PREFIX, role)
}

fn extend_ttl(env: &Env, key: &(Symbol, Role, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn set_count(env: &Env, role: Role, count: u32) {
    env.storage().instance().set(&count_key(role), &count);
}

// ── Core Functions ───────────────────────────────────────────────────────────

/// Returns `true` when `account` currently holds `role`.
pub fn has_role(env: &Env, role: Role, account: &Address) -> bool {
    let key = role_key(role, account);
    let held: bool = env.storage().persistent().get(&key).unwrap_or(false);
    if held {
        extend_ttl(env, &key);
    }
    held
}

/// Number of addresses currently holding `role`.
pub fn role_count(env: &Env, role: Role) -> u32 {
    env.storage()
        .instance()
        .get(&count_key(role))
        .unwrap_or(0)
}

/// Assigns `role` to `account`.
/// Callers must verify authorization beforehand.
///
/// Returns `false` when the account already held the role.
pub fn grant_role(env: &Env, role: Role, account: &Address) -> bool {
    if has_role(env, role, account) {
        return false;
    }
    let key = role_key(role, account);
    env.storage().persistent().set(&key, &true);
    extend_ttl(env, &key);
    set_count(env, role, role_count(env, role).saturating_add(1));
    true
}

/// Takes `role` away from `account`.
/// Callers must verify authorization beforehand.
///
/// The entry is kept with a `false` value. Returns `false` when the account
/// did not hold the role.
pub fn revoke_role(env: &Env, role: Role, account: &Address) -> bool {
    if !has_role(env, role, account) {
        return false;
    }
    let key = role_key(role, account);
    env.storage().persistent().set(&key, &false);
    extend_ttl(env, &key);
    set_count(env, role, role_count(env, role).saturating_sub(1));
    true
}
