#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for the airdrop claim path.
//!
//! ```bash
//! cargo test -p airdrop --test property
//! ```
