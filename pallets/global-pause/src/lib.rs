#![cfg_attr(not(feature = "std"), no_std)]
// Storage getters are deprecated upstream but kept for a uniform query surface across pallets
#![allow(deprecated)]

//! # Global Pause
//!
//! A single runtime-wide flag. Pallets that mutate token state read it
//! through [`PauseStatus`] and refuse to run while it is set; reads are never
//! blocked.

use frame_support::{dispatch::DispatchResult, pallet_prelude::*, traits::EnsureOrigin};
use frame_system::pallet_prelude::*;

pub use pallet::*;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

const LOG_TARGET: &str = "runtime::global-pause";

/// Answers whether mutating operations are currently allowed.
pub trait PauseStatus {
    fn is_paused() -> bool;
}

/// Never paused.
impl PauseStatus for () {
    fn is_paused() -> bool {
        false
    }
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        /// Origin allowed to flip the switch.
        type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;
    }

    #[pallet::pallet]
    pub struct Pallet<T>(_);

    #[pallet::storage]
    #[pallet::getter(fn is_paused)]
    pub type Paused<T> = StorageValue<_, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        Paused,
        Unpaused,
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the pause administrator
        Unauthorized,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Halt all token mutations. Pausing twice is a no-op.
        #[pallet::call_index(0)]
        #[pallet::weight(Weight::from_parts(10_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 1)))]
        pub fn pause(origin: OriginFor<T>) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin).map_err(|_| Error::<T>::Unauthorized)?;
            Self::set_paused(true);
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(Weight::from_parts(10_000, 0).saturating_add(T::DbWeight::get().reads_writes(1, 1)))]
        pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
            T::AdminOrigin::ensure_origin(origin).map_err(|_| Error::<T>::Unauthorized)?;
            Self::set_paused(false);
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Start the chain with mutations halted
        pub paused: bool,
        #[serde(skip)]
        pub _config: sp_std::marker::PhantomData<T>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            Paused::<T>::put(self.paused);
        }
    }
}

impl<T: Config> Pallet<T> {
    fn set_paused(paused: bool) {
        if Paused::<T>::get() == paused {
            return;
        }
        Paused::<T>::put(paused);

        if paused {
            log::info!(target: LOG_TARGET, "token mutations paused");
            Self::deposit_event(Event::Paused);
        } else {
            log::info!(target: LOG_TARGET, "token mutations resumed");
            Self::deposit_event(Event::Unpaused);
        }
    }
}

impl<T: Config> PauseStatus for Pallet<T> {
    fn is_paused() -> bool {
        Paused::<T>::get()
    }
}
