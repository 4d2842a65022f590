use crate as pallet_token_ledger;
use crate::{AddressLayout, H160Layout, UNIT};
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64},
};
use sp_core::{H160, H256, U256};
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime with 160-bit accounts to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        AttributeRegistry: pallet_attribute_registry,
        GlobalPause: pallet_global_pause,
        TokenLedger: pallet_token_ledger,
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
    type AccountId = H160;
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

parameter_types! {
    pub AdminAccount: H160 = H160::from_low_u64_be(1);
}

pub struct EnsureAdmin;
impl frame_support::traits::EnsureOrigin<RuntimeOrigin> for EnsureAdmin {
    type Success = H160;

    fn try_origin(o: RuntimeOrigin) -> Result<Self::Success, RuntimeOrigin> {
        match o.clone().into() {
            Ok(frame_system::RawOrigin::Signed(account)) if account == AdminAccount::get() => {
                Ok(account)
            }
            _ => Err(o),
        }
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn try_successful_origin() -> Result<RuntimeOrigin, ()> {
        Ok(RuntimeOrigin::signed(AdminAccount::get()))
    }
}

impl pallet_attribute_registry::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type AdminOrigin = EnsureAdmin;
}

impl pallet_global_pause::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type AdminOrigin = EnsureAdmin;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct RegistryHelper;
#[cfg(feature = "runtime-benchmarks")]
impl crate::BenchmarkHelper<H160> for RegistryHelper {
    fn set_attribute(who: &H160, kind: pallet_attribute_registry::AttributeKind, value: U256) {
        AttributeRegistry::do_set_attribute(who, &kind, value, Default::default());
    }
}

impl pallet_token_ledger::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type AdminOrigin = EnsureAdmin;
    type Attributes = AttributeRegistry;
    type Pause = GlobalPause;
    type Addressing = TokenAddressing;
    type WeightInfo = ();
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper = RegistryHelper;
}

pub type TokenAddressing = H160Layout;

pub const NOTES: &[u8] = b"some notes";

/// Suffixes used to address the same deposit base.
pub const DEPOSIT_SUFFIXES: [u32; 4] = [0x0000_0000, 0x2000_0000, 0x4000_0000, 0x0050_0000];

pub fn account(n: u64) -> H160 {
    H160::from_low_u64_be(n)
}

pub fn admin() -> H160 {
    AdminAccount::get()
}

/// Genesis holder of the whole supply, allowed to burn.
pub fn one_hundred() -> H160 {
    H160::repeat_byte(0x11)
}

/// Beneficiary of the deposit base derived from its own address.
pub fn another() -> H160 {
    H160([
        0x5a, 0xed, 0xa5, 0x62, 0x15, 0xb1, 0x67, 0x89, 0x3e, 0x80, 0xb4, 0xfe, 0x64, 0x5b, 0xa6,
        0xd5, 0xba, 0xb7, 0x67, 0xde,
    ])
}

/// `another()`'s deposit base with `suffix` in the low 32 bits.
pub fn deposit_address(suffix: u32) -> H160 {
    let mut bytes = TokenAddressing::deposit_base(&another()).to_fixed_bytes();
    bytes[16..].copy_from_slice(&suffix.to_be_bytes());
    H160(bytes)
}

pub fn zero() -> H160 {
    TokenAddressing::zero()
}

// Build genesis storage: one_hundred holds 100 tokens and may burn, and
// another()'s deposit base forwards to another().
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_attribute_registry::GenesisConfig::<Test> {
        attributes: vec![
            (one_hundred(), b"canBurn".to_vec(), U256::one(), NOTES.to_vec()),
            (
                deposit_address(0),
                b"isDepositAddress".to_vec(),
                TokenAddressing::encode_account(&another()),
                NOTES.to_vec(),
            ),
        ],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_token_ledger::GenesisConfig::<Test> {
        admin: Some(admin()),
        token_name: b"TrueUSD".to_vec(),
        token_symbol: b"TUSD".to_vec(),
        decimals: crate::DECIMALS,
        initial_balances: vec![(one_hundred(), 100 * UNIT)],
        burn_bounds: (10 * UNIT, 1000 * UNIT),
    }
    .assimilate_storage(&mut t)
    .unwrap();

    t.into()
}
