//! Weights for pallet_token_ledger
//!
//! Hand-estimated reference figures in the layout of generated weight files.
//! Regenerate from `benchmarking.rs` with `frame-omni-bencher` before a release.

#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet_token_ledger.
pub trait WeightInfo {
    fn transfer() -> Weight;
    fn transfer_to_deposit_address() -> Weight;
    fn burn() -> Weight;
    fn transfer_from() -> Weight;
    fn approve() -> Weight;
    fn mint() -> Weight;
    fn set_burn_bounds() -> Weight;
    fn set_admin() -> Weight;
}

/// Weights for pallet_token_ledger using the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `GlobalPause::Paused` (r:1 w:0)
    /// Storage: `TokenLedger::Balances` (r:2 w:2)
    /// Storage: `AttributeRegistry::Attributes` (r:1 w:0)
    fn transfer() -> Weight {
        Weight::from_parts(18_402_000, 3593)
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `GlobalPause::Paused` (r:1 w:0)
    /// Storage: `TokenLedger::Balances` (r:2 w:2)
    /// Storage: `AttributeRegistry::Attributes` (r:2 w:0)
    fn transfer_to_deposit_address() -> Weight {
        Weight::from_parts(21_870_000, 3710)
            .saturating_add(T::DbWeight::get().reads(5_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `GlobalPause::Paused` (r:1 w:0)
    /// Storage: `TokenLedger::Balances` (r:1 w:1)
    /// Storage: `AttributeRegistry::Attributes` (r:2 w:0)
    /// Storage: `TokenLedger::BurnLimits` (r:1 w:0)
    /// Storage: `TokenLedger::TotalSupply` (r:1 w:1)
    fn burn() -> Weight {
        Weight::from_parts(22_315_000, 3710)
            .saturating_add(T::DbWeight::get().reads(6_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `GlobalPause::Paused` (r:1 w:0)
    /// Storage: `TokenLedger::Balances` (r:2 w:2)
    /// Storage: `TokenLedger::Allowances` (r:1 w:1)
    /// Storage: `AttributeRegistry::Attributes` (r:2 w:0)
    fn transfer_from() -> Weight {
        Weight::from_parts(25_004_000, 3710)
            .saturating_add(T::DbWeight::get().reads(6_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
    /// Storage: `GlobalPause::Paused` (r:1 w:0)
    /// Storage: `TokenLedger::Allowances` (r:0 w:1)
    fn approve() -> Weight {
        Weight::from_parts(11_230_000, 1489)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `GlobalPause::Paused` (r:1 w:0)
    /// Storage: `TokenLedger::Admin` (r:1 w:0)
    /// Storage: `TokenLedger::TotalSupply` (r:1 w:1)
    /// Storage: `TokenLedger::Balances` (r:1 w:1)
    fn mint() -> Weight {
        Weight::from_parts(14_118_000, 3593)
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `TokenLedger::Admin` (r:1 w:0)
    /// Storage: `TokenLedger::BurnLimits` (r:0 w:1)
    fn set_burn_bounds() -> Weight {
        Weight::from_parts(7_412_000, 1505)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `TokenLedger::Admin` (r:1 w:1)
    fn set_admin() -> Weight {
        Weight::from_parts(8_960_000, 1505)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(1_u64))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn transfer() -> Weight {
        Weight::from_parts(18_402_000, 3593)
            .saturating_add(RocksDbWeight::get().reads(4_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn transfer_to_deposit_address() -> Weight {
        Weight::from_parts(21_870_000, 3710)
            .saturating_add(RocksDbWeight::get().reads(5_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn burn() -> Weight {
        Weight::from_parts(22_315_000, 3710)
            .saturating_add(RocksDbWeight::get().reads(6_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(25_004_000, 3710)
            .saturating_add(RocksDbWeight::get().reads(6_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
    fn approve() -> Weight {
        Weight::from_parts(11_230_000, 1489)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn mint() -> Weight {
        Weight::from_parts(14_118_000, 3593)
            .saturating_add(RocksDbWeight::get().reads(4_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn set_burn_bounds() -> Weight {
        Weight::from_parts(7_412_000, 1505)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn set_admin() -> Weight {
        Weight::from_parts(8_960_000, 1505)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
}
