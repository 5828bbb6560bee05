//! Shared building blocks for the staking and airdrop contracts.
//!
//! This crate provides:
//! - [`roles`]: the admin capability registry consulted by privileged calls.
//! - [`custody`]: [`TokenCustody`], the wrapper through which a contract
//!   moves tokens in and out of its own balance without trapping on a
//!   rejected transfer.

#![no_std]

pub mod custody;
pub mod roles;

pub use custody::*;
pub use roles::*;

/// Persistent entries are bumped to `TTL_EXTEND_TO` ledgers once their
/// remaining lifetime drops under `TTL_THRESHOLD`.
pub const TTL_THRESHOLD: u32 = 5184000;
pub const TTL_EXTEND_TO: u32 = 10368000;

/// Bumps the calling contract's instance entry, which holds its
/// configuration and running totals.
pub fn extend_instance(env: &soroban_sdk::Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}
