#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};
use staking::{StakingContract, StakingContractClient};

const START: u64 = 1_000;
const END: u64 = START + 172_800;
const FUNDING: i128 = 1_000_000_000;

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Stake { user: u8, amount: u64 },
    Withdraw { user: u8, amount: u64 },
    GetReward { user: u8 },
    Advance { secs: u32 },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START);

    let admin = Address::generate(&env);
    let stake_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let contract_id = env.register(StakingContract, ());
    let client = StakingContractClient::new(&env, &contract_id);
    client.initialize(&admin, &START, &END, &reward_token);
    client.add_whitelist_token(&admin, &stake_token);

    let expiration = env.ledger().sequence() + 10_000;
    StellarAssetClient::new(&env, &reward_token).mint(&admin, &FUNDING);
    TokenClient::new(&env, &reward_token).approve(&admin, &contract_id, &FUNDING, &expiration);
    client.fund_rewards(&admin, &FUNDING);

    let users: Vec<Address> = (0..4).map(|_| Address::generate(&env)).collect();
    let stake_sac = StellarAssetClient::new(&env, &stake_token);
    let stake_balances = TokenClient::new(&env, &stake_token);
    let reward_balances = TokenClient::new(&env, &reward_token);

    let mut now = START;
    let mut paid = 0i128;
    for action in actions {
        match action {
            FuzzAction::Stake { user, amount } => {
                let user = &users[user as usize % users.len()];
                let amt = amount as i128;
                if amt > 0 {
                    stake_sac.mint(user, &amt);
                    stake_balances.approve(user, &contract_id, &amt, &expiration);
                }
                let _ = client.try_stake(user, &stake_token, &amt);
            }
            FuzzAction::Withdraw { user, amount } => {
                let user = &users[user as usize % users.len()];
                let _ = client.try_withdraw(user, &stake_token, &(amount as i128));
            }
            FuzzAction::GetReward { user } => {
                let user = &users[user as usize % users.len()];
                if let Ok(Ok(amount)) = client.try_get_reward(user) {
                    paid += amount;
                }
            }
            FuzzAction::Advance { secs } => {
                now = now.saturating_add(secs as u64);
                env.ledger().set_timestamp(now);
            }
        }

        let recorded: i128 = users
            .iter()
            .map(|u| client.balance_of(u, &stake_token))
            .sum();
        assert_eq!(stake_balances.balance(&contract_id), recorded);
        assert_eq!(client.total_staked(&stake_token), recorded);
        assert_eq!(client.total_weight(), recorded);
        assert_eq!(reward_balances.balance(&contract_id) + paid, FUNDING);
    }
});
