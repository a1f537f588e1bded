//! Time-driven fee policy.
//!
//! Everything in this module is a pure function of its inputs: the pallet reads
//! the stored [`PolicyClock`] and the current Unix time, and asks this module
//! which rules apply. Nothing here touches storage.
//!
//! Fee rates are expressed in units of `1 / FEE_DENOMINATOR`, so `6_000` is 6%.

use codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// Divisor for every fee rate.
pub const FEE_DENOMINATOR: u128 = 100_000;

/// Fee charged on fee-liable transfers before the schedule change (6%: 4% + 2%).
pub const LAUNCH_FEE: FeeRate = FeeRate { total: 6_000, liquidity: 4_000 };

/// Fee charged on fee-liable transfers after the schedule change (2%: 1% + 1%).
pub const STEADY_FEE: FeeRate = FeeRate { total: 2_000, liquidity: 1_000 };

/// Seconds in a day, for expressing the policy delays.
pub const DAY: u64 = 24 * 60 * 60;

/// The two one-way thresholds captured at initialization.
///
/// Both are absolute Unix timestamps in seconds. Once stored they are never
/// recomputed; every rule below compares "now" against them.
#[derive(
    Clone, Copy, Default, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub struct PolicyClock {
    /// From this instant on, [`STEADY_FEE`] replaces [`LAUNCH_FEE`].
    pub fee_schedule_change_at: u64,
    /// From this instant on, the transfer cap and the anti-bot cooldown are lifted.
    pub restriction_removal_at: u64,
}

impl PolicyClock {
    /// Derive both thresholds from the initialization time.
    pub fn starting_at(now: u64, fee_schedule_delay: u64, restriction_delay: u64) -> Self {
        Self {
            fee_schedule_change_at: now.saturating_add(fee_schedule_delay),
            restriction_removal_at: now.saturating_add(restriction_delay),
        }
    }

    /// Fee rate in effect at `now`.
    pub fn fee_rate(&self, now: u64) -> FeeRate {
        if now < self.fee_schedule_change_at {
            LAUNCH_FEE
        } else {
            STEADY_FEE
        }
    }

    /// Whether the launch restrictions (cap and cooldown) still apply at `now`.
    pub fn restrictions_active(&self, now: u64) -> bool {
        now < self.restriction_removal_at
    }
}

/// A fee rate and the part of it routed to the liquidity wallet.
///
/// The development wallet receives whatever is left of the fee, so the two legs
/// always add up to the fee exactly.
#[derive(Clone, Copy, Eq, PartialEq, RuntimeDebug)]
pub struct FeeRate {
    pub total: u128,
    pub liquidity: u128,
}

/// How a single fee-liable transfer is decomposed.
#[derive(Clone, Copy, Default, Eq, PartialEq, RuntimeDebug)]
pub struct FeeSplit {
    /// Total fee withheld from the recipient.
    pub fee: u128,
    /// Credited to the liquidity wallet.
    pub liquidity_share: u128,
    /// Credited to the development wallet.
    pub development_share: u128,
}

impl FeeSplit {
    /// Amount the recipient actually receives.
    pub fn delivered(&self, amount: u128) -> u128 {
        amount.saturating_sub(self.fee)
    }
}

impl FeeRate {
    /// Decompose `amount` according to this rate, truncating towards zero.
    pub fn split(&self, amount: u128) -> FeeSplit {
        let fee = mul_rate(amount, self.total);
        let liquidity_share = mul_rate(amount, self.liquidity);
        FeeSplit { fee, liquidity_share, development_share: fee.saturating_sub(liquidity_share) }
    }
}

/// `floor(amount * rate / FEE_DENOMINATOR)` without an intermediate overflow.
///
/// Splitting `amount` into `q * FEE_DENOMINATOR + r` keeps both products in
/// range for any `amount` while producing the exact floor.
pub fn mul_rate(amount: u128, rate: u128) -> u128 {
    let whole = amount / FEE_DENOMINATOR;
    let rest = amount % FEE_DENOMINATOR;
    whole.saturating_mul(rate).saturating_add(rest * rate / FEE_DENOMINATOR)
}
