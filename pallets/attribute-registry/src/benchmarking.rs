//! Benchmarking setup for pallet-attribute-registry

use super::*;

#[allow(unused)]
use crate::Pallet as AttributeRegistry;
use frame_benchmarking::v2::*;

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn set_attribute() {
        let who: T::AccountId = account("holder", 0, 0);
        let notes = sp_std::vec![b'n'; MAX_NOTES_LEN as usize];
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, who.clone(), AttributeKind::CanBurn, U256::one(), notes);

        assert!(Pallet::<T>::has_attribute(&who, &AttributeKind::CanBurn));
    }

    #[benchmark]
    fn clear_attribute() {
        let who: T::AccountId = account("holder", 0, 0);
        Pallet::<T>::do_set_attribute(&who, &AttributeKind::CanBurn, U256::one(), Notes::default());
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, who.clone(), AttributeKind::CanBurn);

        assert!(Attributes::<T>::get(&who, AttributeKind::CanBurn).is_none());
    }

    impl_benchmark_test_suite!(AttributeRegistry, crate::mock::new_test_ext(), crate::mock::Test);
}
