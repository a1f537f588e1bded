#![cfg_attr(not(feature = "std"), no_std)]
// Storage getters are kept for the public read API
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{
    dispatch::DispatchResult,
    ensure,
    pallet_prelude::*,
    traits::{EnsureOrigin, UnixTime},
};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::{DispatchError, PerThing, Percent};
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

pub mod migrations;
pub mod policy;
pub mod weights;

use policy::PolicyClock;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

pub(crate) const LOG_TARGET: &str = "runtime::cinex-token";

/// Allowance value that is never decremented by `transfer_from`.
pub const UNLIMITED_ALLOWANCE: u128 = u128::MAX;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Wall clock driving the fee schedule, the transfer cap and the cooldown.
        type UnixTime: UnixTime;

        /// Origin allowed to run the one-time initialization.
        type InitializeOrigin: EnsureOrigin<Self::RuntimeOrigin>;

        /// Nominal supply the distribution percentages and the transfer cap refer to.
        #[pallet::constant]
        type InitialSupply: Get<u128>;

        /// Minimum spacing, in seconds, between fee-liable transfers of one account.
        #[pallet::constant]
        type AntibotCooldown: Get<u64>;

        /// Seconds after initialization at which the steady fee takes over.
        #[pallet::constant]
        type FeeScheduleDelay: Get<u64>;

        /// Seconds after initialization at which the cap and cooldown are lifted.
        #[pallet::constant]
        type RestrictionDelay: Get<u64>;

        /// Maximum number of recipients in the initial distribution.
        #[pallet::constant]
        type MaxAllocations: Get<u32>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "CINEX")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "CINEX")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Token decimals (18 for ETH-style amounts)
    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply. Always equals the sum of all balances.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Remaining amount `spender` may move out of `owner`'s balance.
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    /// Accounts that never pay the swap fee, whichever side they are on.
    #[pallet::storage]
    #[pallet::getter(fn is_fee_exempt)]
    pub type FeeExempt<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Accounts (e.g. liquidity pools) whose involvement makes a transfer fee-liable.
    #[pallet::storage]
    #[pallet::getter(fn is_fee_liable_counterparty)]
    pub type FeeLiableCounterparty<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Unix time (seconds) of each account's last fee-liable transfer.
    #[pallet::storage]
    #[pallet::getter(fn last_fee_liable_transfer)]
    pub type LastFeeLiableTransfer<T: Config> =
        StorageMap<_, Blake2_128Concat, T::AccountId, u64, OptionQuery>;

    /// Policy thresholds, written once by `initialize`.
    #[pallet::storage]
    #[pallet::getter(fn policy_clock)]
    pub type Clock<T> = StorageValue<_, PolicyClock, OptionQuery>;

    #[pallet::storage]
    #[pallet::getter(fn is_paused)]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    /// Administrator for policy lists, the pause gate and upgrades.
    #[pallet::storage]
    #[pallet::getter(fn admin)]
    pub type Admin<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Receives the liquidity leg of every swap fee.
    #[pallet::storage]
    #[pallet::getter(fn liquidity_wallet)]
    pub type LiquidityWallet<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Receives the development leg of every swap fee.
    #[pallet::storage]
    #[pallet::getter(fn development_wallet)]
    pub type DevelopmentWallet<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::storage]
    #[pallet::getter(fn is_initialized)]
    pub type Initialized<T> = StorageValue<_, bool, ValueQuery>;

    /// Code hash most recently authorized by the admin.
    #[pallet::storage]
    #[pallet::getter(fn authorized_upgrade)]
    pub type AuthorizedUpgrade<T: Config> = StorageValue<_, T::Hash, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens moved; `amount` is what `to` received after any fee.
        Transferred { from: T::AccountId, to: T::AccountId, amount: u128 },
        /// Swap fee withheld from a fee-liable transfer
        FeeCharged {
            from: T::AccountId,
            to: T::AccountId,
            fee: u128,
            liquidity_share: u128,
            development_share: u128,
        },
        Approval { owner: T::AccountId, spender: T::AccountId, amount: u128 },
        /// Tokens minted by the initial distribution
        Minted { to: T::AccountId, amount: u128 },
        FeeExemptUpdated { account: T::AccountId, exempt: bool },
        FeeLiableCounterpartyUpdated { account: T::AccountId, liable: bool },
        Paused { by: T::AccountId },
        Unpaused { by: T::AccountId },
        AdminChanged { old_admin: T::AccountId, new_admin: T::AccountId },
        /// Ledger initialized; the policy thresholds are now fixed.
        Initialized {
            admin: T::AccountId,
            fee_schedule_change_at: u64,
            restriction_removal_at: u64,
        },
        /// Admin authorized a runtime upgrade to the given code hash.
        UpgradeAuthorized { code_hash: T::Hash },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The null account was supplied where a real account is required.
        InvalidAddress,
        /// Caller is not the administrator.
        NotAuthorized,
        InsufficientBalance,
        InsufficientAllowance,
        /// Transfers are paused.
        TransferPaused,
        /// Fee-liable transfer above the launch cap.
        ExceedsMaxTransferAmount,
        /// Fee-liable transfer inside the cooldown window.
        AntibotCooldown,
        AlreadyInitialized,
        /// A fee-liable transfer was attempted before the fee wallets were set.
        NotInitialized,
        AlreadyPaused,
        AlreadyUnpaused,
        /// Distribution percentages add up to more than 100%.
        AllocationExceedsSupply,
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Run the initial distribution and fix the policy thresholds.
        ///
        /// Each recipient receives `pct` of `InitialSupply`; anything not
        /// allocated is never minted. Can only succeed once.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::initialize(allocations.len() as u32))]
        pub fn initialize(
            origin: OriginFor<T>,
            admin: T::AccountId,
            liquidity_wallet: T::AccountId,
            development_wallet: T::AccountId,
            allocations: BoundedVec<(T::AccountId, Percent), T::MaxAllocations>,
        ) -> DispatchResult {
            T::InitializeOrigin::ensure_origin(origin)?;
            ensure!(!Initialized::<T>::get(), Error::<T>::AlreadyInitialized);

            Self::ensure_valid(&admin)?;
            Self::ensure_valid(&liquidity_wallet)?;
            Self::ensure_valid(&development_wallet)?;
            for (recipient, _) in allocations.iter() {
                Self::ensure_valid(recipient)?;
            }
            let allocated: u32 =
                allocations.iter().map(|(_, share)| u32::from(share.deconstruct())).sum();
            ensure!(allocated <= 100, Error::<T>::AllocationExceedsSupply);

            let initial_supply = T::InitialSupply::get();
            let mut minted: u128 = 0;
            for (recipient, share) in allocations.into_iter() {
                let amount = share.mul_floor(initial_supply);
                Self::credit(&recipient, amount)?;
                minted = minted.checked_add(amount).ok_or(Error::<T>::Overflow)?;
                Self::deposit_event(Event::Minted { to: recipient, amount });
            }
            TotalSupply::<T>::put(minted);

            let clock = PolicyClock::starting_at(
                Self::now(),
                T::FeeScheduleDelay::get(),
                T::RestrictionDelay::get(),
            );
            Clock::<T>::put(clock);
            LiquidityWallet::<T>::put(&liquidity_wallet);
            DevelopmentWallet::<T>::put(&development_wallet);
            Admin::<T>::put(&admin);
            Initialized::<T>::put(true);

            log::info!(
                target: LOG_TARGET,
                "Initialized with {minted} minted; fee change at {}, restrictions lifted at {}",
                clock.fee_schedule_change_at,
                clock.restriction_removal_at,
            );

            Self::deposit_event(Event::Initialized {
                admin,
                fee_schedule_change_at: clock.fee_schedule_change_at,
                restriction_removal_at: clock.restriction_removal_at,
            });
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let from = ensure_signed(origin)?;
            Self::do_transfer(&from, &to, amount)
        }

        /// Move `amount` out of `from` on the caller's allowance.
        ///
        /// The allowance is charged the full pre-fee amount.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            ensure!(!Paused::<T>::get(), Error::<T>::TransferPaused);

            let allowance = Allowances::<T>::get(&from, &spender);
            ensure!(allowance >= amount, Error::<T>::InsufficientAllowance);

            Self::do_transfer(&from, &to, amount)?;

            if allowance != UNLIMITED_ALLOWANCE {
                Allowances::<T>::insert(&from, &spender, allowance - amount);
            }
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::ensure_valid(&spender)?;

            Allowances::<T>::insert(&owner, &spender, amount);
            Self::deposit_event(Event::Approval { owner, spender, amount });
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::set_fee_exempt())]
        pub fn set_fee_exempt(
            origin: OriginFor<T>,
            account: T::AccountId,
            exempt: bool,
        ) -> DispatchResult {
            Self::ensure_admin(origin)?;
            Self::ensure_valid(&account)?;

            FeeExempt::<T>::insert(&account, exempt);
            Self::deposit_event(Event::FeeExemptUpdated { account, exempt });
            Ok(())
        }

        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::set_fee_liable_counterparty())]
        pub fn set_fee_liable_counterparty(
            origin: OriginFor<T>,
            account: T::AccountId,
            liable: bool,
        ) -> DispatchResult {
            Self::ensure_admin(origin)?;
            Self::ensure_valid(&account)?;

            FeeLiableCounterparty::<T>::insert(&account, liable);
            Self::deposit_event(Event::FeeLiableCounterpartyUpdated { account, liable });
            Ok(())
        }

        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::pause())]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            let who = Self::ensure_admin(origin)?;
            ensure!(!Paused::<T>::get(), Error::<T>::AlreadyPaused);

            Paused::<T>::put(true);
            log::info!(target: LOG_TARGET, "Transfers paused by {who:?}");
            Self::deposit_event(Event::Paused { by: who });
            Ok(())
        }

        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::unpause())]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            let who = Self::ensure_admin(origin)?;
            ensure!(Paused::<T>::get(), Error::<T>::AlreadyUnpaused);

            Paused::<T>::put(false);
            log::info!(target: LOG_TARGET, "Transfers unpaused by {who:?}");
            Self::deposit_event(Event::Unpaused { by: who });
            Ok(())
        }

        /// Hand the administrator role to another account.
        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::set_admin())]
        pub fn set_admin(origin: OriginFor<T>, new_admin: T::AccountId) -> DispatchResult {
            let old_admin = Self::ensure_admin(origin)?;
            Self::ensure_valid(&new_admin)?;

            Admin::<T>::put(&new_admin);
            log::info!(target: LOG_TARGET, "Admin changed from {old_admin:?} to {new_admin:?}");
            Self::deposit_event(Event::AdminChanged { old_admin, new_admin });
            Ok(())
        }

        /// Authorize replacing the runtime code with the blob hashing to `code_hash`.
        ///
        /// The code swap itself is performed by `frame_system::apply_authorized_upgrade`;
        /// pallet storage is left untouched apart from registered migrations.
        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::authorize_upgrade())]
        pub fn authorize_upgrade(origin: OriginFor<T>, code_hash: T::Hash) -> DispatchResult {
            let who = Self::ensure_admin(origin)?;

            AuthorizedUpgrade::<T>::put(code_hash);
            frame_system::Pallet::<T>::do_authorize_upgrade(code_hash, true);

            log::info!(target: LOG_TARGET, "Runtime upgrade {code_hash:?} authorized by {who:?}");
            Self::deposit_event(Event::UpgradeAuthorized { code_hash });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        #[serde(skip)]
        pub _config: sp_std::marker::PhantomData<T>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, ConstU32<64>> =
                self.token_name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, ConstU32<16>> =
                self.token_symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Current Unix time in seconds.
    pub fn now() -> u64 {
        T::UnixTime::now().as_secs()
    }

    /// Fee rate currently in effect, in units of `1 / policy::FEE_DENOMINATOR`.
    pub fn fee_rate() -> u128 {
        Self::policy_clock().unwrap_or_default().fee_rate(Self::now()).total
    }

    /// Largest fee-liable transfer allowed while launch restrictions are active.
    pub fn max_transfer_amount() -> u128 {
        T::InitialSupply::get() / 100
    }

    pub fn fee_schedule_change_at() -> Option<u64> {
        Self::policy_clock().map(|clock| clock.fee_schedule_change_at)
    }

    pub fn restriction_removal_at() -> Option<u64> {
        Self::policy_clock().map(|clock| clock.restriction_removal_at)
    }

    /// Whether `who` is the null account (all-zero encoding).
    pub fn is_null(who: &T::AccountId) -> bool {
        who.using_encoded(|bytes| bytes.iter().all(|b| *b == 0))
    }

    fn ensure_valid(who: &T::AccountId) -> DispatchResult {
        ensure!(!Self::is_null(who), Error::<T>::InvalidAddress);
        Ok(())
    }

    fn ensure_admin(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(Admin::<T>::get().as_ref() == Some(&who), Error::<T>::NotAuthorized);
        Ok(who)
    }

    /// The account charged for cooldown purposes if `from -> to` is fee-liable.
    ///
    /// Sending into a counterparty is a sell and charges `from`; receiving from
    /// one is a buy and charges `to`. Counterparty to counterparty is a sell.
    fn fee_liable_trader(from: &T::AccountId, to: &T::AccountId) -> Option<T::AccountId> {
        if FeeExempt::<T>::get(from) || FeeExempt::<T>::get(to) {
            return None;
        }
        if FeeLiableCounterparty::<T>::get(to) {
            Some(from.clone())
        } else if FeeLiableCounterparty::<T>::get(from) {
            Some(to.clone())
        } else {
            None
        }
    }

    fn enforce_launch_restrictions(
        trader: &T::AccountId,
        amount: u128,
        clock: &PolicyClock,
        now: u64,
    ) -> DispatchResult {
        if !clock.restrictions_active(now) {
            return Ok(());
        }
        ensure!(amount <= Self::max_transfer_amount(), Error::<T>::ExceedsMaxTransferAmount);
        if let Some(last) = LastFeeLiableTransfer::<T>::get(trader) {
            ensure!(
                now.saturating_sub(last) >= T::AntibotCooldown::get(),
                Error::<T>::AntibotCooldown
            );
        }
        Ok(())
    }

    /// Execute one transfer through the fee pipeline.
    ///
    /// All checks run before the first write.
    pub(crate) fn do_transfer(
        from: &T::AccountId,
        to: &T::AccountId,
        amount: u128,
    ) -> DispatchResult {
        ensure!(!Paused::<T>::get(), Error::<T>::TransferPaused);
        Self::ensure_valid(from)?;
        Self::ensure_valid(to)?;

        let now = Self::now();
        let trader = Self::fee_liable_trader(from, to);
        let fee = match &trader {
            Some(trader) => {
                let clock = Clock::<T>::get().ok_or(Error::<T>::NotInitialized)?;
                let liquidity = LiquidityWallet::<T>::get().ok_or(Error::<T>::NotInitialized)?;
                let development = DevelopmentWallet::<T>::get().ok_or(Error::<T>::NotInitialized)?;
                Self::enforce_launch_restrictions(trader, amount, &clock, now)?;
                Some((clock.fee_rate(now).split(amount), liquidity, development))
            },
            None => None,
        };
        ensure!(Balances::<T>::get(from) >= amount, Error::<T>::InsufficientBalance);

        Balances::<T>::mutate(from, |bal| *bal = bal.saturating_sub(amount));
        let split = fee.as_ref().map(|(split, _, _)| *split).unwrap_or_default();
        let delivered = split.delivered(amount);
        Self::credit(to, delivered)?;
        if let Some((split, liquidity, development)) = fee {
            Self::credit(&liquidity, split.liquidity_share)?;
            Self::credit(&development, split.development_share)?;

            log::debug!(
                target: LOG_TARGET,
                "Fee {} on {amount} from {from:?} to {to:?} ({} liquidity, {} development)",
                split.fee,
                split.liquidity_share,
                split.development_share,
            );
            Self::deposit_event(Event::FeeCharged {
                from: from.clone(),
                to: to.clone(),
                fee: split.fee,
                liquidity_share: split.liquidity_share,
                development_share: split.development_share,
            });
        }
        if let Some(trader) = trader {
            LastFeeLiableTransfer::<T>::insert(trader, now);
        }

        Self::deposit_event(Event::Transferred {
            from: from.clone(),
            to: to.clone(),
            amount: delivered,
        });
        Ok(())
    }

    fn credit(who: &T::AccountId, amount: u128) -> DispatchResult {
        Balances::<T>::try_mutate(who, |bal| -> DispatchResult {
            *bal = bal.checked_add(amount).ok_or(Error::<T>::Overflow)?;
            Ok(())
        })
    }

    /// Ledger invariants: balances sum to the total supply, and the policy
    /// clock exists exactly when the latch is set.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), DispatchError> {
        let sum = Balances::<T>::iter_values()
            .try_fold(0u128, |acc, bal| acc.checked_add(bal))
            .ok_or(DispatchError::Other("balance sum overflows"))?;
        ensure!(
            sum == TotalSupply::<T>::get(),
            DispatchError::Other("balances do not sum to total supply")
        );
        ensure!(
            Initialized::<T>::get() == Clock::<T>::get().is_some(),
            DispatchError::Other("policy clock and initialization latch disagree")
        );
        Ok(())
    }
}
