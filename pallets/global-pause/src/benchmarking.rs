//! Benchmarking setup for pallet-global-pause

use super::*;

#[allow(unused)]
use crate::Pallet as GlobalPause;
use frame_benchmarking::v2::*;

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn pause() {
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin);

        assert!(Paused::<T>::get());
    }

    #[benchmark]
    fn unpause() {
        Paused::<T>::put(true);
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin);

        assert!(!Paused::<T>::get());
    }

    impl_benchmark_test_suite!(GlobalPause, crate::mock::new_test_ext(), crate::mock::Test);
}
