//! Address arithmetic the ledger needs but `AccountId` does not provide.

use sp_core::{H160, U256};

/// Number of low-order address bits that select a deposit slot under a base.
pub const DEPOSIT_SUFFIX_BITS: u32 = 32;

const SUFFIX_BYTES: usize = (DEPOSIT_SUFFIX_BITS / 8) as usize;

/// Numeric view of an account identifier.
pub trait AddressLayout<AccountId> {
    /// The burn address.
    fn zero() -> AccountId;

    /// `who` with its deposit suffix cleared.
    fn deposit_base(who: &AccountId) -> AccountId;

    /// Account encoded in a registry attribute value. Bits above the
    /// address width are discarded.
    fn decode_account(value: U256) -> AccountId;

    /// Registry attribute value that decodes back to `who`.
    fn encode_account(who: &AccountId) -> U256;
}

/// 160-bit big-endian addresses.
pub struct H160Layout;

impl AddressLayout<H160> for H160Layout {
    fn zero() -> H160 {
        H160::zero()
    }

    fn deposit_base(who: &H160) -> H160 {
        let mut bytes = who.to_fixed_bytes();
        bytes[H160::len_bytes() - SUFFIX_BYTES..].fill(0);
        H160(bytes)
    }

    fn decode_account(value: U256) -> H160 {
        let mut bytes = [0u8; 20];
        // `U256::byte` indexes from the least significant end
        for (i, byte) in bytes.iter_mut().rev().enumerate() {
            *byte = value.byte(i);
        }
        H160(bytes)
    }

    fn encode_account(who: &H160) -> U256 {
        U256::from_big_endian(who.as_bytes())
    }
}
