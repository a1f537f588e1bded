//! Benchmarking setup for pallet-cinex-token

use super::*;

#[allow(unused)]
use crate::Pallet as CinexToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

/// Put an initialized ledger in place without going through `initialize`.
fn setup_ledger<T: Config>() -> T::AccountId {
    let admin: T::AccountId = account("admin", 0, 0);
    let clock = PolicyClock::starting_at(
        Pallet::<T>::now(),
        T::FeeScheduleDelay::get(),
        T::RestrictionDelay::get(),
    );
    Admin::<T>::put(&admin);
    Clock::<T>::put(clock);
    LiquidityWallet::<T>::put(account::<T::AccountId>("liquidity", 0, 0));
    DevelopmentWallet::<T>::put(account::<T::AccountId>("development", 0, 0));
    Initialized::<T>::put(true);
    Paused::<T>::put(false);
    admin
}

/// A listed counterparty, so the benchmarked transfer takes the fee path.
fn setup_pool<T: Config>() -> T::AccountId {
    let pool: T::AccountId = account("pool", 0, 0);
    FeeLiableCounterparty::<T>::insert(&pool, true);
    pool
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn initialize(a: Linear<1, { T::MaxAllocations::get() }>) {
        Initialized::<T>::kill();
        let admin: T::AccountId = account("admin", 0, 0);
        let liquidity: T::AccountId = account("liquidity", 0, 0);
        let development: T::AccountId = account("development", 0, 0);
        let share = Percent::from_percent((100 / a.max(1)) as u8);
        let recipients: Vec<(T::AccountId, Percent)> =
            (0..a).map(|i| (account("recipient", i, 0), share)).collect();
        let allocations = BoundedVec::truncate_from(recipients);
        let origin = T::InitializeOrigin::try_successful_origin().expect("Initialize origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, admin.clone(), liquidity, development, allocations);

        assert!(Initialized::<T>::get());
        assert_eq!(Admin::<T>::get(), Some(admin));
    }

    /// Worst case: a sell into a listed pool while launch restrictions apply.
    #[benchmark]
    fn transfer() {
        setup_ledger::<T>();
        let pool = setup_pool::<T>();
        let caller: T::AccountId = whitelisted_caller();
        let amount = Pallet::<T>::max_transfer_amount();
        Balances::<T>::insert(&caller, amount);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), pool, amount);

        assert_eq!(Balances::<T>::get(&caller), 0);
        assert!(LastFeeLiableTransfer::<T>::contains_key(&caller));
    }

    #[benchmark]
    fn transfer_from() {
        setup_ledger::<T>();
        let pool = setup_pool::<T>();
        let owner: T::AccountId = account("owner", 0, 0);
        let spender: T::AccountId = whitelisted_caller();
        let amount = Pallet::<T>::max_transfer_amount();
        Balances::<T>::insert(&owner, amount);
        Allowances::<T>::insert(&owner, &spender, amount);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), owner.clone(), pool, amount);

        assert_eq!(Allowances::<T>::get(&owner, &spender), 0);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), 1_000_000);

        assert_eq!(Allowances::<T>::get(&caller, &spender), 1_000_000);
    }

    #[benchmark]
    fn set_fee_exempt() {
        let admin = setup_ledger::<T>();
        let account: T::AccountId = account("exempt", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), account.clone(), true);

        assert!(FeeExempt::<T>::get(&account));
    }

    #[benchmark]
    fn set_fee_liable_counterparty() {
        let admin = setup_ledger::<T>();
        let account: T::AccountId = account("pool", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), account.clone(), true);

        assert!(FeeLiableCounterparty::<T>::get(&account));
    }

    #[benchmark]
    fn pause() {
        let admin = setup_ledger::<T>();

        #[extrinsic_call]
        _(RawOrigin::Signed(admin));

        assert!(Paused::<T>::get());
    }

    #[benchmark]
    fn unpause() {
        let admin = setup_ledger::<T>();
        Paused::<T>::put(true);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin));

        assert!(!Paused::<T>::get());
    }

    #[benchmark]
    fn set_admin() {
        let admin = setup_ledger::<T>();
        let new_admin: T::AccountId = account("new_admin", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), new_admin.clone());

        assert_eq!(Admin::<T>::get(), Some(new_admin));
    }

    #[benchmark]
    fn authorize_upgrade() {
        let admin = setup_ledger::<T>();
        let code_hash = T::Hash::default();

        #[extrinsic_call]
        _(RawOrigin::Signed(admin), code_hash);

        assert_eq!(AuthorizedUpgrade::<T>::get(), Some(code_hash));
    }

    impl_benchmark_test_suite!(CinexToken, crate::mock::new_test_ext(), crate::mock::Test);
}
