//! Property-based tests for reward accrual.
//!
//! Invariants tested:
//! - the sum paid to all stakers never exceeds what was funded
//! - a user that never staked is always owed nothing
//! - pending rewards never decrease while the window is open
//! - a sole staker claiming often loses at most rounding dust

use proptest::prelude::*;
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::token::Client as TokenClient;
use soroban_sdk::Address;

use crate::common::{mint_and_approve, setup_test_env, END, START};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_total_paid_never_exceeds_funding(
        funding in 1i128..10_000_000,
        stakes in proptest::collection::vec((1i128..100_000, 0u64..172_800), 1..5),
    ) {
        let ctx = setup_test_env();
        mint_and_approve(&ctx, &ctx.reward_token, &ctx.admin, funding);
        ctx.client.fund_rewards(&ctx.admin, &funding);

        let mut ordered = stakes.clone();
        ordered.sort_by_key(|(_, offset)| *offset);

        let mut stakers = std::vec::Vec::new();
        for (amount, offset) in ordered {
            ctx.env.ledger().set_timestamp(START + offset);
            let staker = Address::generate(&ctx.env);
            mint_and_approve(&ctx, &ctx.stake_token, &staker, amount);
            ctx.client.stake(&staker, &ctx.stake_token, &amount);
            stakers.push(staker);
        }

        ctx.env.ledger().set_timestamp(END + 1);
        let mut paid = 0i128;
        for staker in stakers.iter() {
            paid += ctx.client.get_reward(staker);
        }

        prop_assert!(paid <= funding);
        let custody = TokenClient::new(&ctx.env, &ctx.reward_token).balance(&ctx.client.address);
        prop_assert_eq!(custody, funding - paid);
    }

    #[test]
    fn prop_bystander_is_owed_nothing(
        funding in 1i128..1_000_000,
        amount in 1i128..100_000,
        offset in 0u64..200_000,
    ) {
        let ctx = setup_test_env();
        mint_and_approve(&ctx, &ctx.reward_token, &ctx.admin, funding);
        ctx.client.fund_rewards(&ctx.admin, &funding);

        let staker = Address::generate(&ctx.env);
        mint_and_approve(&ctx, &ctx.stake_token, &staker, amount);
        ctx.client.stake(&staker, &ctx.stake_token, &amount);

        ctx.env.ledger().set_timestamp(START + offset);
        let bystander = Address::generate(&ctx.env);
        prop_assert_eq!(ctx.client.pending_reward(&bystander), 0);
        prop_assert_eq!(ctx.client.get_reward(&bystander), 0);
    }

    #[test]
    fn prop_pending_is_monotonic_in_time(
        funding in 1i128..1_000_000,
        amount in 1i128..100_000,
        mut checkpoints in proptest::collection::vec(0u64..200_000, 2..6),
    ) {
        let ctx = setup_test_env();
        mint_and_approve(&ctx, &ctx.reward_token, &ctx.admin, funding);
        ctx.client.fund_rewards(&ctx.admin, &funding);

        let staker = Address::generate(&ctx.env);
        mint_and_approve(&ctx, &ctx.stake_token, &staker, amount);
        ctx.client.stake(&staker, &ctx.stake_token, &amount);

        checkpoints.sort_unstable();
        let mut last = 0i128;
        for offset in checkpoints {
            ctx.env.ledger().set_timestamp(START + offset);
            let pending = ctx.client.pending_reward(&staker);
            prop_assert!(pending >= last);
            prop_assert!(pending <= funding);
            last = pending;
        }
    }

    #[test]
    fn prop_frequent_claims_lose_only_rounding_dust(
        funding in 1_000_000i128..100_000_000_000,
        weight in 1_000_000_000_000i128..100_000_000_000_000_000,
        interval in 500u64..20_000,
    ) {
        let ctx = setup_test_env();
        mint_and_approve(&ctx, &ctx.reward_token, &ctx.admin, funding);
        ctx.client.fund_rewards(&ctx.admin, &funding);

        let staker = Address::generate(&ctx.env);
        mint_and_approve(&ctx, &ctx.stake_token, &staker, weight);
        ctx.client.stake(&staker, &ctx.stake_token, &weight);

        let mut paid = 0i128;
        let mut flushes = 0i128;
        let mut now = START;
        while now < END {
            now = (now + interval).min(END);
            ctx.env.ledger().set_timestamp(now);
            paid += ctx.client.get_reward(&staker);
            flushes += 1;
        }

        prop_assert!(paid <= funding);
        prop_assert!(paid >= funding - 2 * (flushes + 1));
        let custody = TokenClient::new(&ctx.env, &ctx.reward_token).balance(&ctx.client.address);
        prop_assert_eq!(custody, funding - paid);
    }
}
