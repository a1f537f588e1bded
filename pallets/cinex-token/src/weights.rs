//! Weights for pallet-cinex-token.
//!
//! Hand-tuned until the benchmarks in `benchmarking.rs` are run on reference
//! hardware and this file is regenerated by the benchmark CLI.

#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-cinex-token.
pub trait WeightInfo {
    fn initialize(a: u32) -> Weight;
    fn transfer() -> Weight;
    fn transfer_from() -> Weight;
    fn approve() -> Weight;
    fn set_fee_exempt() -> Weight;
    fn set_fee_liable_counterparty() -> Weight;
    fn pause() -> Weight;
    fn unpause() -> Weight;
    fn set_admin() -> Weight;
    fn authorize_upgrade() -> Weight;
}

/// Weights for pallet-cinex-token using the runtime's configured database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `CinexToken::Initialized` (r:1 w:1)
    /// Storage: `CinexToken::Balances` (r:`a` w:`a`)
    /// Storage: `CinexToken::TotalSupply`, `Admin`, `Clock`, fee wallets (w:5)
    fn initialize(a: u32) -> Weight {
        Weight::from_parts(18_000_000, 1_489)
            .saturating_add(Weight::from_parts(4_100_000, 2_603).saturating_mul(a.into()))
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().reads((1_u64).saturating_mul(a.into())))
            .saturating_add(T::DbWeight::get().writes(6_u64))
            .saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(a.into())))
    }
    /// Worst case is a fee-liable transfer during the restriction window:
    /// pause flag, both policy lists for both parties, clock, cooldown entry,
    /// fee wallets and four balances.
    fn transfer() -> Weight {
        Weight::from_parts(42_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(12_u64))
            .saturating_add(T::DbWeight::get().writes(5_u64))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(48_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(13_u64))
            .saturating_add(T::DbWeight::get().writes(6_u64))
    }
    /// Storage: `CinexToken::Allowances` (r:0 w:1)
    fn approve() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `CinexToken::Admin` (r:1 w:0)
    /// Storage: `CinexToken::FeeExempt` (r:0 w:1)
    fn set_fee_exempt() -> Weight {
        Weight::from_parts(11_000_000, 1_489)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `CinexToken::Admin` (r:1 w:0)
    /// Storage: `CinexToken::FeeLiableCounterparty` (r:0 w:1)
    fn set_fee_liable_counterparty() -> Weight {
        Weight::from_parts(11_000_000, 1_489)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `CinexToken::Admin` (r:1 w:0)
    /// Storage: `CinexToken::Paused` (r:1 w:1)
    fn pause() -> Weight {
        Weight::from_parts(10_000_000, 1_489)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    fn unpause() -> Weight {
        Weight::from_parts(10_000_000, 1_489)
            .saturating_add(T::DbWeight::get().reads(2_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `CinexToken::Admin` (r:1 w:1)
    fn set_admin() -> Weight {
        Weight::from_parts(11_000_000, 1_489)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `CinexToken::Admin` (r:1 w:0)
    /// Storage: `CinexToken::AuthorizedUpgrade` (r:0 w:1)
    /// Storage: `System::AuthorizedUpgrade` (r:0 w:1)
    fn authorize_upgrade() -> Weight {
        Weight::from_parts(13_000_000, 1_489)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn initialize(a: u32) -> Weight {
        Weight::from_parts(18_000_000, 1_489)
            .saturating_add(Weight::from_parts(4_100_000, 2_603).saturating_mul(a.into()))
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().reads((1_u64).saturating_mul(a.into())))
            .saturating_add(RocksDbWeight::get().writes(6_u64))
            .saturating_add(RocksDbWeight::get().writes((1_u64).saturating_mul(a.into())))
    }
    fn transfer() -> Weight {
        Weight::from_parts(42_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(12_u64))
            .saturating_add(RocksDbWeight::get().writes(5_u64))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(48_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(13_u64))
            .saturating_add(RocksDbWeight::get().writes(6_u64))
    }
    fn approve() -> Weight {
        Weight::from_parts(12_000_000, 0).saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn set_fee_exempt() -> Weight {
        Weight::from_parts(11_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn set_fee_liable_counterparty() -> Weight {
        Weight::from_parts(11_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn pause() -> Weight {
        Weight::from_parts(10_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn unpause() -> Weight {
        Weight::from_parts(10_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn set_admin() -> Weight {
        Weight::from_parts(11_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn authorize_upgrade() -> Weight {
        Weight::from_parts(13_000_000, 1_489)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
}
