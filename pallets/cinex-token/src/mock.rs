use crate as pallet_cinex_token;
use crate::policy::DAY;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64},
    BoundedVec,
};
use frame_system::EnsureRoot;
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage, Percent,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Timestamp: pallet_timestamp,
        CinexToken: pallet_cinex_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

impl pallet_timestamp::Config for Test {
    type Moment = u64;
    type OnTimestampSet = ();
    type MinimumPeriod = ConstU64<1>;
    type WeightInfo = ();
}

/// One whole token (18 decimals).
pub const UNIT: u128 = 1_000_000_000_000_000_000;

/// Unix time (seconds) at which the test ledger is initialized.
pub const GENESIS_TIME: u64 = 1_700_000_000;

pub const ADMIN: u64 = 1;
pub const ALICE: u64 = 2;
pub const BOB: u64 = 3;
pub const LIQUIDITY: u64 = 10;
pub const DEBT_MANAGEMENT: u64 = 11;
pub const ACQUISITION: u64 = 12;
pub const DEVELOPMENT: u64 = 13;
pub const COMMUNITY: u64 = 14;
pub const RESERVE: u64 = 15;
pub const POOL: u64 = 20;
pub const OTHER_POOL: u64 = 21;
/// Encodes to all zero bytes, the pallet's null account.
pub const NULL: u64 = 0;

parameter_types! {
    pub const InitialSupply: u128 = 1_000_000_000 * UNIT;
}

impl pallet_cinex_token::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type UnixTime = Timestamp;
    type InitializeOrigin = EnsureRoot<u64>;
    type InitialSupply = InitialSupply;
    type AntibotCooldown = ConstU64<30>;
    type FeeScheduleDelay = ConstU64<{ 365 * DAY }>;
    type RestrictionDelay = ConstU64<{ 60 * DAY }>;
    type MaxAllocations = ConstU32<8>;
    type WeightInfo = ();
}

/// Set the wall clock to `secs` Unix seconds.
pub fn set_now(secs: u64) {
    Timestamp::set_timestamp(secs * 1_000);
}

/// Advance the wall clock by `secs` seconds.
pub fn advance(secs: u64) {
    set_now(CinexToken::now() + secs);
}

/// The six-way launch distribution (90% of the initial supply).
pub fn launch_allocations() -> BoundedVec<(u64, Percent), ConstU32<8>> {
    BoundedVec::truncate_from(vec![
        (LIQUIDITY, Percent::from_percent(15)),
        (DEBT_MANAGEMENT, Percent::from_percent(27)),
        (ACQUISITION, Percent::from_percent(23)),
        (DEVELOPMENT, Percent::from_percent(10)),
        (COMMUNITY, Percent::from_percent(10)),
        (RESERVE, Percent::from_percent(5)),
    ])
}

fn build_storage() -> sp_runtime::Storage {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_cinex_token::GenesisConfig::<Test> {
        token_name: b"CINEX".to_vec(),
        token_symbol: b"CINEX".to_vec(),
        decimals: 18,
        _config: Default::default(),
    }
    .assimilate_storage(&mut t)
    .unwrap();

    t
}

/// Genesis storage only: the clock is running but `initialize` has not been called.
pub fn uninitialized_ext() -> sp_io::TestExternalities {
    let mut ext: sp_io::TestExternalities = build_storage().into();
    ext.execute_with(|| {
        System::set_block_number(1);
        set_now(GENESIS_TIME);
    });
    ext
}

/// Ledger initialized at `GENESIS_TIME` with the launch distribution.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut ext = uninitialized_ext();
    ext.execute_with(|| {
        CinexToken::initialize(
            RuntimeOrigin::root(),
            ADMIN,
            LIQUIDITY,
            DEVELOPMENT,
            launch_allocations(),
        )
        .unwrap();
    });
    ext
}
