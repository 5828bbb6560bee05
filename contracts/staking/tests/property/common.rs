use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env,
};
use staking::{StakingContract, StakingContractClient};

pub const START: u64 = 1_000;
pub const END: u64 = START + 172_800;

pub struct TestContext {
    pub env: Env,
    pub client: StakingContractClient<'static>,
    pub admin: Address,
    pub stake_token: Address,
    pub reward_token: Address,
}

/// Creates a mocked environment with an initialized ledger and one
/// whitelisted stake token.
pub fn setup_test_env() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START);

    let stake_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let contract_id = env.register(StakingContract, ());
    let client = StakingContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin, &START, &END, &reward_token);
    client.add_whitelist_token(&admin, &stake_token);

    TestContext {
        env,
        client,
        admin,
        stake_token,
        reward_token,
    }
}

/// Mints `amount` of `token` to `owner` and approves the ledger for it.
pub fn mint_and_approve(ctx: &TestContext, token: &Address, owner: &Address, amount: i128) {
    StellarAssetClient::new(&ctx.env, token).mint(owner, &amount);
    let expiration = ctx.env.ledger().sequence() + 10_000;
    TokenClient::new(&ctx.env, token).approve(owner, &ctx.client.address, &amount, &expiration);
}
