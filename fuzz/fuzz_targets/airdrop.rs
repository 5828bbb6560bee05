#![no_main]

use airdrop::{AirdropContract, AirdropContractClient};
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::Address as _,
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};

#[derive(Arbitrary, Debug)]
pub struct FuzzInput {
    pool: u32,
    rate: u32,
    claims: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let env = Env::default();
    env.mock_all_auths();

    let token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let contract_id = env.register(AirdropContract, ());
    let client = AirdropContractClient::new(&env, &contract_id);

    let pool = input.pool as i128;
    let rate = input.rate as i128;
    let admin = Address::generate(&env);
    let staking = Address::generate(&env);
    if client
        .try_initialize(&admin, &staking, &token, &pool, &rate)
        .is_err()
    {
        assert!(pool <= 0 || rate <= 0 || rate > pool);
        return;
    }
    StellarAssetClient::new(&env, &token).mint(&contract_id, &pool);

    let users: Vec<Address> = (0..8).map(|_| Address::generate(&env)).collect();
    let balances = TokenClient::new(&env, &token);

    for who in input.claims {
        let user = &users[who as usize % users.len()];
        let _ = client.try_claim_reward(user);

        assert!(balances.balance(user) <= rate);
        assert!(client.distributed() <= pool);
        assert_eq!(balances.balance(&contract_id) + client.distributed(), pool);
    }
});
