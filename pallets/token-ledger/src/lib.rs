#![cfg_attr(not(feature = "std"), no_std)]
// Storage getters are deprecated upstream but remain the query surface of this pallet
#![allow(deprecated)]

//! # Token Ledger
//!
//! A single fungible token with two compliance-driven destinations:
//!
//! - **Deposit addresses.** A transfer whose destination's base address is
//!   marked `IsDepositAddress` in the attribute registry credits the
//!   registered beneficiary. The `Transfer` event still names the deposit
//!   address so the routing stays auditable.
//! - **Burns.** A transfer to the zero address removes the amount from
//!   circulation, provided the sender holds `CanBurn` and the amount lies
//!   within the configured burn bounds. Burns emit `Burn` before `Transfer`.
//!
//! Every mutating call is refused while the global pause is set. All checks
//! complete before the first storage write, so a failed call leaves no trace.

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*, traits::EnsureOrigin};
use frame_system::{ensure_signed, pallet_prelude::*};
use pallet_attribute_registry::{AttributeKind, InspectAttributes};
use pallet_global_pause::PauseStatus;
use sp_runtime::ArithmeticError;
use sp_std::prelude::*;

pub use address::{AddressLayout, H160Layout};
pub use deposit::{classify, Destination};
pub use pallet::*;
pub use weights::WeightInfo;

pub mod address;
pub mod deposit;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

const LOG_TARGET: &str = "runtime::token-ledger";

/// Fixed-point precision of balances.
pub const DECIMALS: u8 = 18;

/// One whole token in base units.
pub const UNIT: u128 = 10u128.pow(DECIMALS as u32);

/// Inclusive range of amounts a single burn may remove.
#[derive(
    Clone, Copy, Default, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug,
)]
pub struct BurnBounds {
    pub min: u128,
    pub max: u128,
}

impl BurnBounds {
    pub fn contains(&self, amount: u128) -> bool {
        self.min <= amount && amount <= self.max
    }
}

/// Prepares registry state that benchmarks cannot reach through
/// [`InspectAttributes`].
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId> {
    fn set_attribute(who: &AccountId, kind: AttributeKind, value: sp_core::U256);
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;
        /// Source of `CanBurn` and `IsDepositAddress`.
        type Attributes: InspectAttributes<Self::AccountId>;
        type Pause: PauseStatus;
        /// Zero address and deposit-suffix arithmetic for `AccountId`.
        type Addressing: AddressLayout<Self::AccountId>;
        type WeightInfo: WeightInfo;
        #[cfg(feature = "runtime-benchmarks")]
        type BenchmarkHelper: BenchmarkHelper<Self::AccountId>;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "TrueUSD")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Token symbol (e.g., "TUSD")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Total token supply. Changes only through mint and burn.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Amount `spender` may still move out of `owner`'s balance.
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

    #[pallet::storage]
    #[pallet::getter(fn burn_bounds)]
    pub type BurnLimits<T> = StorageValue<_, BurnBounds, ValueQuery>;

    /// Registered token administrator. Acts with the same authority as
    /// `AdminOrigin` on this pallet's admin calls.
    #[pallet::storage]
    #[pallet::getter(fn admin)]
    pub type Admin<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens moved. For deposit addresses `to` is the deposit address, not
        /// the beneficiary; for burns it is the zero address.
        Transfer { from: T::AccountId, to: T::AccountId, value: u128 },
        /// Tokens left circulation
        Burn { burner: T::AccountId, value: u128 },
        /// New tokens created
        Mint { to: T::AccountId, value: u128 },
        Approval { owner: T::AccountId, spender: T::AccountId, value: u128 },
        BurnBoundsSet { min: u128, max: u128 },
        AdminChanged { old_admin: Option<T::AccountId>, new_admin: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Mutations are halted by the global pause
        SystemPaused,
        InsufficientBalance,
        InsufficientAllowance,
        /// Caller lacks the admin origin or the `CanBurn` attribute
        Unauthorized,
        AmountOutOfBurnBounds,
        /// Burn minimum exceeds the maximum
        InvalidBurnBounds,
        MintToZeroAddress,
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
        /// Move `amount` from the caller to `to`, forwarding to a beneficiary
        /// when `to` is a deposit address and burning when `to` is zero.
        #[pallet::call_index(0)]
        #[pallet::weight(
            T::WeightInfo::transfer()
                .max(T::WeightInfo::transfer_to_deposit_address())
                .max(T::WeightInfo::burn())
        )]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            let from = ensure_signed(origin)?;
            Self::do_transfer(&from, &to, amount)
        }

        /// Spend part of an allowance. Never burns: the zero address is
        /// rejected outright.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            Self::do_transfer_from(&spender, &from, &to, amount)
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            ensure!(!T::Pause::is_paused(), Error::<T>::SystemPaused);

            Allowances::<T>::insert(&owner, &spender, amount);
            Self::deposit_event(Event::Approval { owner, spender, value: amount });
            Ok(())
        }

        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, to: T::AccountId, amount: u128) -> DispatchResult {
            ensure!(!T::Pause::is_paused(), Error::<T>::SystemPaused);
            Self::ensure_admin(origin)?;
            ensure!(to != T::Addressing::zero(), Error::<T>::MintToZeroAddress);

            let new_supply = TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
            let new_balance = Balances::<T>::get(&to).checked_add(amount).ok_or(Error::<T>::Overflow)?;

            TotalSupply::<T>::put(new_supply);
            Balances::<T>::insert(&to, new_balance);

            Self::deposit_event(Event::Mint { to: to.clone(), value: amount });
            Self::deposit_event(Event::Transfer { from: T::Addressing::zero(), to, value: amount });
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::set_burn_bounds())]
        pub fn set_burn_bounds(origin: OriginFor<T>, min: u128, max: u128) -> DispatchResult {
            Self::ensure_admin(origin)?;
            ensure!(min <= max, Error::<T>::InvalidBurnBounds);

            BurnLimits::<T>::put(BurnBounds { min, max });
            log::info!(target: LOG_TARGET, "burn bounds set to [{}, {}]", min, max);
            Self::deposit_event(Event::BurnBoundsSet { min, max });
            Ok(())
        }

        /// Record a new token administrator.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::set_admin())]
        pub fn set_admin(origin: OriginFor<T>, new_admin: T::AccountId) -> DispatchResult {
            Self::ensure_admin(origin)?;

            let old_admin = Admin::<T>::get();
            Admin::<T>::put(&new_admin);
            log::info!(target: LOG_TARGET, "admin changed to {:?}", new_admin);
            Self::deposit_event(Event::AdminChanged { old_admin, new_admin });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Initial admin account
        pub admin: Option<T::AccountId>,
        /// Token name
        pub token_name: Vec<u8>,
        /// Token symbol
        pub token_symbol: Vec<u8>,
        /// Token decimals
        pub decimals: u8,
        /// Initial token mints (account, amount)
        pub initial_balances: Vec<(T::AccountId, u128)>,
        /// Smallest and largest amount a single burn may remove
        pub burn_bounds: (u128, u128),
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

            if let Some(ref admin) = self.admin {
                Admin::<T>::put(admin);
            }

            let (min, max) = self.burn_bounds;
            assert!(min <= max, "Burn bounds inverted (min > max)");
            BurnLimits::<T>::put(BurnBounds { min, max });

            let mut total: u128 = 0;
            for (account, amount) in &self.initial_balances {
                assert!(*account != T::Addressing::zero(), "Initial balance on the zero address");
                Balances::<T>::mutate(account, |bal| {
                    *bal = bal.checked_add(*amount).expect("Initial balance overflows")
                });
                total = total.checked_add(*amount).expect("Initial balances overflow total supply");
            }
            TotalSupply::<T>::put(total);
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Transfer `amount` from `from` to `to`, routing through deposit-address
    /// resolution and the burn path.
    pub fn do_transfer(from: &T::AccountId, to: &T::AccountId, amount: u128) -> DispatchResult {
        ensure!(!T::Pause::is_paused(), Error::<T>::SystemPaused);
        let from_balance = Balances::<T>::get(from);
        ensure!(from_balance >= amount, Error::<T>::InsufficientBalance);

        match classify::<T>(to) {
            Destination::DepositAddress(beneficiary) => {
                log::debug!(
                    target: LOG_TARGET,
                    "forwarding {} from deposit address {:?} to {:?}",
                    amount,
                    to,
                    beneficiary
                );
                let balances = Self::plan_move(from, from_balance, &beneficiary, amount)?;
                Self::commit_move(from, to, &beneficiary, balances, amount);
                Ok(())
            }
            Destination::Normal if *to == T::Addressing::zero() => {
                Self::burn(from, from_balance, amount)
            }
            Destination::Normal => {
                let balances = Self::plan_move(from, from_balance, to, amount)?;
                Self::commit_move(from, to, to, balances, amount);
                Ok(())
            }
        }
    }

    /// Transfer on behalf of `from` against the allowance granted to `spender`.
    pub fn do_transfer_from(
        spender: &T::AccountId,
        from: &T::AccountId,
        to: &T::AccountId,
        amount: u128,
    ) -> DispatchResult {
        ensure!(!T::Pause::is_paused(), Error::<T>::SystemPaused);
        ensure!(*to != T::Addressing::zero(), Error::<T>::Unauthorized);

        let from_balance = Balances::<T>::get(from);
        ensure!(from_balance >= amount, Error::<T>::InsufficientBalance);
        let remaining = Allowances::<T>::get(from, spender)
            .checked_sub(amount)
            .ok_or(Error::<T>::InsufficientAllowance)?;

        let recipient = classify::<T>(to).recipient(to);
        let balances = Self::plan_move(from, from_balance, &recipient, amount)?;

        Allowances::<T>::insert(from, spender, remaining);
        Self::commit_move(from, to, &recipient, balances, amount);
        Ok(())
    }

    /// Remove `amount` of `from`'s balance from circulation.
    fn burn(from: &T::AccountId, from_balance: u128, amount: u128) -> DispatchResult {
        ensure!(
            T::Attributes::has_attribute(from, &AttributeKind::CanBurn),
            Error::<T>::Unauthorized
        );
        ensure!(Self::burn_bounds().contains(amount), Error::<T>::AmountOutOfBurnBounds);

        // `do_transfer` has already ensured `amount <= from_balance`
        let new_balance = from_balance.saturating_sub(amount);
        let new_supply =
            TotalSupply::<T>::get().checked_sub(amount).ok_or(ArithmeticError::Underflow)?;

        Balances::<T>::insert(from, new_balance);
        TotalSupply::<T>::put(new_supply);

        log::info!(target: LOG_TARGET, "{:?} burned {}", from, amount);
        Self::deposit_event(Event::Burn { burner: from.clone(), value: amount });
        Self::deposit_event(Event::Transfer {
            from: from.clone(),
            to: T::Addressing::zero(),
            value: amount,
        });
        Ok(())
    }

    /// Post-move balances of sender and recipient. Writes nothing.
    fn plan_move(
        from: &T::AccountId,
        from_balance: u128,
        recipient: &T::AccountId,
        amount: u128,
    ) -> Result<(u128, u128), DispatchError> {
        let new_from = from_balance.checked_sub(amount).ok_or(Error::<T>::InsufficientBalance)?;
        let recipient_balance =
            if recipient == from { new_from } else { Balances::<T>::get(recipient) };
        let new_recipient = recipient_balance.checked_add(amount).ok_or(Error::<T>::Overflow)?;
        Ok((new_from, new_recipient))
    }

    /// Write balances computed by [`Self::plan_move`]. The event names `to`,
    /// which differs from `recipient` for deposit addresses.
    fn commit_move(
        from: &T::AccountId,
        to: &T::AccountId,
        recipient: &T::AccountId,
        (new_from, new_recipient): (u128, u128),
        amount: u128,
    ) {
        Balances::<T>::insert(from, new_from);
        Balances::<T>::insert(recipient, new_recipient);
        Self::deposit_event(Event::Transfer { from: from.clone(), to: to.clone(), value: amount });
    }

    /// Accept `AdminOrigin` or a signed origin from the registered [`Admin`].
    fn ensure_admin(origin: OriginFor<T>) -> DispatchResult {
        let origin = match T::AdminOrigin::try_origin(origin) {
            Ok(_) => return Ok(()),
            Err(origin) => origin,
        };
        let who = ensure_signed(origin).map_err(|_| Error::<T>::Unauthorized)?;
        ensure!(Admin::<T>::get().as_ref() == Some(&who), Error::<T>::Unauthorized);
        Ok(())
    }

    /// Ledger invariants: balances sum to the total supply and the burn
    /// bounds are ordered.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), DispatchError> {
        let sum = Balances::<T>::iter_values()
            .try_fold(0u128, |acc, balance| acc.checked_add(balance))
            .ok_or("sum of balances overflows")?;
        ensure!(sum == TotalSupply::<T>::get(), "sum of balances differs from total supply");

        let bounds = BurnLimits::<T>::get();
        ensure!(bounds.min <= bounds.max, "burn bounds are inverted");
        Ok(())
    }
}
