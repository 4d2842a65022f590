#![cfg_attr(not(feature = "std"), no_std)]
// Storage getters are deprecated upstream but kept for a uniform query surface across pallets
#![allow(deprecated)]

//! # Attribute Registry
//!
//! Stores named per-account attributes (a value plus free-text notes) that
//! other pallets consult for permissions and address classification.
//! Only the configured admin origin can write; reads never fail and treat an
//! absent attribute as zero.

use frame_support::{dispatch::DispatchResult, pallet_prelude::*, traits::EnsureOrigin};
use frame_system::pallet_prelude::*;
use sp_core::U256;
use sp_runtime::traits::Zero;
use sp_std::prelude::*;

pub use pallet::*;
pub use types::*;

mod types;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

const LOG_TARGET: &str = "runtime::attribute-registry";

/// Read access to the registry for other pallets.
pub trait InspectAttributes<AccountId> {
    /// Whether `who` carries `kind` with a non-zero value.
    fn has_attribute(who: &AccountId, kind: &AttributeKind) -> bool;

    /// Stored value of `kind` on `who`, zero when absent.
    fn attribute_value(who: &AccountId, kind: &AttributeKind) -> U256;
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        /// Origin allowed to set and clear attributes.
        type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;
    }

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    /// Attribute records. A missing entry means the attribute was never set
    /// or has been cleared.
    #[pallet::storage]
    #[pallet::getter(fn attribute)]
    pub type Attributes<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        AttributeKind,
        AttributeRecord<BlockNumberFor<T>>,
        OptionQuery,
    >;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// An attribute was written (zero values included)
        AttributeSet { who: T::AccountId, kind: AttributeKind, value: U256, notes: Notes },
        /// An attribute was removed
        AttributeCleared { who: T::AccountId, kind: AttributeKind },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the registry administrator
        Unauthorized,
        NotesTooLong,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(Weight::from_parts(10_000, 0).saturating_add(T::DbWeight::get().writes(1)))]
        pub fn set_attribute(
            origin: OriginFor<T>,
            who: T::AccountId,
            kind: AttributeKind,
            value: U256,
            notes: Vec<u8>,
        ) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin).map_err(|_| Error::<T>::Unauthorized)?;
            let notes: Notes = notes.try_into().map_err(|_| Error::<T>::NotesTooLong)?;
            Self::do_set_attribute(&who, &kind, value, notes);
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(Weight::from_parts(10_000, 0).saturating_add(T::DbWeight::get().writes(1)))]
        pub fn clear_attribute(
            origin: OriginFor<T>,
            who: T::AccountId,
            kind: AttributeKind,
        ) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin).map_err(|_| Error::<T>::Unauthorized)?;
            let kind = kind.canonical();
            if Attributes::<T>::take(&who, &kind).is_some() {
                log::info!(target: LOG_TARGET, "cleared {:?} on {:?}", kind, who);
                Self::deposit_event(Event::AttributeCleared { who, kind });
            }
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Initial attributes (account, attribute name, value, notes)
        pub attributes: Vec<(T::AccountId, Vec<u8>, U256, Vec<u8>)>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            for (who, name, value, notes) in &self.attributes {
                let kind =
                    AttributeKind::from_name(name).expect("Attribute name too long (max 32 bytes)");
                let notes: Notes =
                    notes.clone().try_into().expect("Attribute notes too long (max 128 bytes)");
                Attributes::<T>::insert(
                    who,
                    kind,
                    AttributeRecord { value: *value, notes, updated_at: Zero::zero() },
                );
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Upsert an attribute without an origin check.
    pub fn do_set_attribute(who: &T::AccountId, kind: &AttributeKind, value: U256, notes: Notes) {
        let kind = kind.canonical();
        let record = AttributeRecord {
            value,
            notes: notes.clone(),
            updated_at: frame_system::Pallet::<T>::block_number(),
        };
        Attributes::<T>::insert(who, &kind, record);

        log::info!(target: LOG_TARGET, "set {:?} on {:?} to {}", kind, who, value);
        Self::deposit_event(Event::AttributeSet { who: who.clone(), kind, value, notes });
    }

    /// True iff the attribute exists and its value is non-zero.
    pub fn has_attribute(who: &T::AccountId, kind: &AttributeKind) -> bool {
        Self::attribute(who, kind.canonical()).is_some_and(|record| !record.value.is_zero())
    }

    /// Value and notes of an attribute, `(0, [])` when absent.
    pub fn get_attribute(who: &T::AccountId, kind: &AttributeKind) -> (U256, Vec<u8>) {
        match Self::attribute(who, kind.canonical()) {
            Some(record) => (record.value, record.notes.into_inner()),
            None => (U256::zero(), Vec::new()),
        }
    }
}

impl<T: Config> InspectAttributes<T::AccountId> for Pallet<T> {
    fn has_attribute(who: &T::AccountId, kind: &AttributeKind) -> bool {
        Self::has_attribute(who, kind)
    }

    fn attribute_value(who: &T::AccountId, kind: &AttributeKind) -> U256 {
        Self::get_attribute(who, kind).0
    }
}
