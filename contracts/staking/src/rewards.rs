//! Reward-per-token accounting.
//!
//! Rates and the accumulator are scaled by [`REWARD_PRECISION`]. Every
//! division rounds down, so the sum paid to all stakers never exceeds what
//! was funded.

/// Fixed-point scale for the emission rate and the accumulator. Large
/// enough that a one-ledger step of a small emission over a large total
/// weight still moves the accumulator.
pub const REWARD_PRECISION: i128 = 1_000_000_000_000_000_000;

/// Clamps `now` into the staking window so nothing accrues before `start`
/// or after `end`.
pub fn accrual_time(now: u64, start: u64, end: u64) -> u64 {
    if now < start {
        start
    } else if now > end {
        end
    } else {
        now
    }
}

/// Advances the accumulator by `elapsed` seconds of emission split across
/// `total_weight`. Nothing accrues while nobody is staked.
pub fn compute_reward_per_token(
    stored_rpt: i128,
    scaled_rate: i128,
    elapsed: u64,
    total_weight: i128,
) -> i128 {
    if total_weight <= 0 || scaled_rate <= 0 || elapsed == 0 {
        return stored_rpt;
    }
    let emitted = scaled_rate.saturating_mul(elapsed as i128);
    stored_rpt.saturating_add(emitted / total_weight)
}

/// Total owed to a staker holding `weight` since the accumulator stood at
/// `user_rpt_paid`, on top of the already-settled `user_earned`.
pub fn earned(weight: i128, current_rpt: i128, user_rpt_paid: i128, user_earned: i128) -> i128 {
    let delta = current_rpt.saturating_sub(user_rpt_paid);
    if weight <= 0 || delta <= 0 {
        return user_earned;
    }
    user_earned.saturating_add(weight.saturating_mul(delta) / REWARD_PRECISION)
}

/// Scaled emission rate once `amount` is added with `remaining` seconds of
/// window left. Whatever the current rate had not emitted yet is rolled
/// into the new rate.
pub fn rate_after_funding(current_scaled_rate: i128, remaining: u64, amount: i128) -> i128 {
    if remaining == 0 {
        return current_scaled_rate;
    }
    let remaining = remaining as i128;
    let leftover = current_scaled_rate.saturating_mul(remaining);
    let added = amount.saturating_mul(REWARD_PRECISION);
    leftover.saturating_add(added) / remaining
}
