//! Deposit address resolution.
//!
//! A destination is a deposit address when the registry marks its base (the
//! address with the deposit suffix cleared) with `IsDepositAddress`. The
//! attribute value names the beneficiary that is credited instead. Only the
//! attribute decides; the suffix value itself is never inspected, so a zero
//! suffix redirects like any other. A value that decodes to the zero address
//! names no beneficiary and leaves the destination `Normal`.

use crate::{AddressLayout, Config};
use pallet_attribute_registry::{AttributeKind, InspectAttributes};
use sp_runtime::RuntimeDebug;

/// Where a transfer to a given destination actually lands.
#[derive(Clone, PartialEq, Eq, RuntimeDebug)]
pub enum Destination<AccountId> {
    /// Credit the destination itself.
    Normal,
    /// Credit the beneficiary registered on the destination's base.
    DepositAddress(AccountId),
}

impl<AccountId: Clone> Destination<AccountId> {
    /// Account to credit for a transfer addressed to `to`.
    pub fn recipient(&self, to: &AccountId) -> AccountId {
        match self {
            Self::Normal => to.clone(),
            Self::DepositAddress(beneficiary) => beneficiary.clone(),
        }
    }
}

/// Classify `destination` against the registry.
pub fn classify<T: Config>(destination: &T::AccountId) -> Destination<T::AccountId> {
    let base = T::Addressing::deposit_base(destination);
    if !T::Attributes::has_attribute(&base, &AttributeKind::IsDepositAddress) {
        return Destination::Normal;
    }

    let value = T::Attributes::attribute_value(&base, &AttributeKind::IsDepositAddress);
    let beneficiary = T::Addressing::decode_account(value);
    if beneficiary == T::Addressing::zero() {
        return Destination::Normal;
    }
    Destination::DepositAddress(beneficiary)
}
