//! Storage migrations for pallet-cinex-token.
//!
//! Runtime upgrades authorized through `authorize_upgrade` replace the code but
//! keep every storage item. When a new release changes a storage layout, bump
//! `STORAGE_VERSION` in `lib.rs` and add a `vN::MigrateToVN` here that:
//!
//! - checks `on_chain_storage_version()` and only runs when it is behind,
//! - rewrites the affected items and puts the new version,
//! - returns the weight of the reads and writes it actually did,
//! - snapshots ledger totals in `pre_upgrade` and compares them in `post_upgrade`.
//!
//! Migrations are wired into the runtime's `Executive` migration tuple, oldest first:
//!
//! ```ignore
//! pub type Migrations = (
//!     pallet_cinex_token::migrations::v1::MigrateToV1<Runtime>,
//! );
//! ```
//!
//! Balances, allowances, the policy clock and the cooldown tracker must come out
//! of every migration with the same values they went in with.

use frame_support::{pallet_prelude::*, traits::OnRuntimeUpgrade};
use sp_std::marker::PhantomData;

use crate::{Config, Pallet, LOG_TARGET};

#[cfg(feature = "try-runtime")]
use crate::{policy::PolicyClock, Admin, Clock, Initialized, TotalSupply};

/// Version 1 is the initial layout, so this only stamps the version.
pub mod v1 {
    use super::*;

    /// Ledger state that no migration may change.
    #[cfg(feature = "try-runtime")]
    #[derive(Encode, Decode)]
    struct LedgerSnapshot<AccountId> {
        initialized: bool,
        total_supply: u128,
        clock: Option<PolicyClock>,
        admin: Option<AccountId>,
    }

    pub struct MigrateToV1<T>(PhantomData<T>);

    impl<T: Config> OnRuntimeUpgrade for MigrateToV1<T> {
        fn on_runtime_upgrade() -> Weight {
            let on_chain_version = Pallet::<T>::on_chain_storage_version();

            if on_chain_version < 1 {
                log::info!(target: LOG_TARGET, "Migrating storage v0 -> v1");
                StorageVersion::new(1).put::<Pallet<T>>();
                T::DbWeight::get().reads_writes(1, 1)
            } else {
                log::info!(
                    target: LOG_TARGET,
                    "Storage already at {on_chain_version:?}, skipping v1 migration"
                );
                T::DbWeight::get().reads(1)
            }
        }

        #[cfg(feature = "try-runtime")]
        fn pre_upgrade() -> Result<sp_std::vec::Vec<u8>, sp_runtime::TryRuntimeError> {
            let snapshot = LedgerSnapshot::<T::AccountId> {
                initialized: Initialized::<T>::get(),
                total_supply: TotalSupply::<T>::get(),
                clock: Clock::<T>::get(),
                admin: Admin::<T>::get(),
            };
            Ok(snapshot.encode())
        }

        #[cfg(feature = "try-runtime")]
        fn post_upgrade(state: sp_std::vec::Vec<u8>) -> Result<(), sp_runtime::TryRuntimeError> {
            let before = LedgerSnapshot::<T::AccountId>::decode(&mut &state[..])
                .map_err(|_| sp_runtime::TryRuntimeError::Other("Failed to decode pre-state"))?;

            ensure!(
                Pallet::<T>::on_chain_storage_version() >= 1,
                sp_runtime::TryRuntimeError::Other("Migration to v1 did not complete")
            );
            ensure!(
                before.initialized == Initialized::<T>::get() &&
                    before.total_supply == TotalSupply::<T>::get() &&
                    before.clock == Clock::<T>::get() &&
                    before.admin == Admin::<T>::get(),
                sp_runtime::TryRuntimeError::Other("Ledger state changed during migration")
            );

            Pallet::<T>::do_try_state()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::*;
    use frame_support::{assert_ok, traits::StorageVersion};

    #[test]
    fn migration_v1_from_v0_works() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(0).put::<Pallet<Test>>();
            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 0);

            let _weight = v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);
        });
    }

    #[test]
    fn migration_v1_idempotent() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(0).put::<Pallet<Test>>();

            v1::MigrateToV1::<Test>::on_runtime_upgrade();
            v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 1);
        });
    }

    #[test]
    fn migration_v1_skipped_on_higher_version() {
        new_test_ext().execute_with(|| {
            StorageVersion::new(5).put::<Pallet<Test>>();

            v1::MigrateToV1::<Test>::on_runtime_upgrade();

            assert_eq!(Pallet::<Test>::on_chain_storage_version(), 5);
        });
    }

    /// Balances, policy thresholds and cooldowns survive the upgrade path.
    #[test]
    fn migration_preserves_ledger_state() {
        new_test_ext().execute_with(|| {
            assert_ok!(CinexToken::set_fee_liable_counterparty(
                RuntimeOrigin::signed(ADMIN),
                POOL,
                true
            ));
            assert_ok!(CinexToken::transfer(RuntimeOrigin::signed(RESERVE), POOL, 10 * UNIT));
            assert_ok!(CinexToken::approve(RuntimeOrigin::signed(RESERVE), ALICE, UNIT));
            assert_ok!(CinexToken::authorize_upgrade(
                RuntimeOrigin::signed(ADMIN),
                sp_core::H256::repeat_byte(9)
            ));

            let accounts = [RESERVE, POOL, LIQUIDITY, DEVELOPMENT];
            let balances: Vec<u128> = accounts.iter().map(|who| CinexToken::balance_of(who)).collect();
            let clock = CinexToken::policy_clock();
            StorageVersion::new(0).put::<Pallet<Test>>();

            v1::MigrateToV1::<Test>::on_runtime_upgrade();

            let after: Vec<u128> = accounts.iter().map(|who| CinexToken::balance_of(who)).collect();
            assert_eq!(after, balances);
            assert_eq!(CinexToken::policy_clock(), clock);
            assert_eq!(CinexToken::allowance(RESERVE, ALICE), UNIT);
            assert_eq!(CinexToken::last_fee_liable_transfer(&RESERVE), Some(GENESIS_TIME));
            assert!(CinexToken::is_fee_liable_counterparty(&POOL));
            assert_eq!(CinexToken::admin(), Some(ADMIN));
            assert_ok!(CinexToken::do_try_state());
        });
    }
}
