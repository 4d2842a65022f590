use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use frame_support::{traits::ConstU32, BoundedVec};
use scale_info::TypeInfo;
use sp_core::U256;
use sp_runtime::RuntimeDebug;

/// Longest free-form attribute name accepted by [`AttributeKind::Named`].
pub const MAX_NAME_LEN: u32 = 32;

/// Longest notes string stored alongside an attribute.
pub const MAX_NOTES_LEN: u32 = 128;

pub type AttributeName = BoundedVec<u8, ConstU32<MAX_NAME_LEN>>;
pub type Notes = BoundedVec<u8, ConstU32<MAX_NOTES_LEN>>;

const CAN_BURN: &[u8] = b"canBurn";
const IS_DEPOSIT_ADDRESS: &[u8] = b"isDepositAddress";

/// The attributes the registry knows how to interpret.
///
/// `Named` carries attributes defined outside this runtime so that
/// externally managed names round-trip through the registry untouched.
#[derive(
    Clone, PartialEq, Eq, Encode, Decode, DecodeWithMemTracking, MaxEncodedLen, TypeInfo, RuntimeDebug,
)]
pub enum AttributeKind {
    /// Holder may burn tokens by transferring them to the zero address.
    CanBurn,
    /// Holder is a deposit base; the value is the beneficiary account.
    IsDepositAddress,
    Named(AttributeName),
}

impl AttributeKind {
    /// Map a textual attribute name onto a kind.
    ///
    /// The well-known names always resolve to their typed variant. Returns
    /// `None` if an unknown name exceeds [`MAX_NAME_LEN`].
    pub fn from_name(name: &[u8]) -> Option<Self> {
        match name {
            CAN_BURN => Some(Self::CanBurn),
            IS_DEPOSIT_ADDRESS => Some(Self::IsDepositAddress),
            other => AttributeName::try_from(other.to_vec()).ok().map(Self::Named),
        }
    }

    /// Textual name of the attribute.
    pub fn name(&self) -> &[u8] {
        match self {
            Self::CanBurn => CAN_BURN,
            Self::IsDepositAddress => IS_DEPOSIT_ADDRESS,
            Self::Named(name) => name.as_slice(),
        }
    }

    /// Storage form of the kind: a `Named` spelling of a well-known
    /// attribute collapses onto the typed variant.
    pub fn canonical(&self) -> Self {
        match self {
            Self::Named(name) => match name.as_slice() {
                CAN_BURN => Self::CanBurn,
                IS_DEPOSIT_ADDRESS => Self::IsDepositAddress,
                _ => self.clone(),
            },
            kind => kind.clone(),
        }
    }
}

/// A stored attribute.
#[derive(Clone, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo, RuntimeDebug)]
pub struct AttributeRecord<BlockNumber> {
    pub value: U256,
    pub notes: Notes,
    /// Block of the last write.
    pub updated_at: BlockNumber,
}
