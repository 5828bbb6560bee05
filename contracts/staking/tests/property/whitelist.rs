//! Property-based tests for the token whitelist.
//!
//! Invariants tested:
//! - after any admin sequence of add/remove, each token reads as its last mutation
//! - a caller without the admin role never changes the whitelist

use proptest::prelude::*;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;
use staking::ContractError;

use crate::common::setup_test_env;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_whitelist_reflects_last_mutation(
        ops in proptest::collection::vec((0usize..4, any::<bool>()), 1..20),
    ) {
        let ctx = setup_test_env();
        let tokens = [
            Address::generate(&ctx.env),
            Address::generate(&ctx.env),
            Address::generate(&ctx.env),
            Address::generate(&ctx.env),
        ];
        let mut expected = [false; 4];

        for (idx, add) in ops {
            if add {
                ctx.client.add_whitelist_token(&ctx.admin, &tokens[idx]);
            } else {
                ctx.client.remove_whitelist_token(&ctx.admin, &tokens[idx]);
            }
            expected[idx] = add;

            for (token, want) in tokens.iter().zip(expected.iter()) {
                prop_assert_eq!(ctx.client.is_whitelisted_token(token), *want);
            }
        }
    }

    #[test]
    fn prop_outsider_never_mutates_whitelist(
        ops in proptest::collection::vec(any::<bool>(), 1..10),
    ) {
        let ctx = setup_test_env();
        let outsider = Address::generate(&ctx.env);
        let token = Address::generate(&ctx.env);

        for add in ops {
            let result = if add {
                ctx.client.try_add_whitelist_token(&outsider, &token)
            } else {
                ctx.client.try_remove_whitelist_token(&outsider, &token)
            };
            prop_assert_eq!(result, Err(Ok(ContractError::Unauthorized)));
            prop_assert!(!ctx.client.is_whitelisted_token(&token));
        }
    }
}
