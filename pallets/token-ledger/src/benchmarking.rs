//! Benchmarking setup for pallet-token-ledger

use super::*;

#[allow(unused)]
use crate::Pallet as TokenLedger;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;
use sp_core::U256;

const SEED: u32 = 0;

fn fund<T: Config>(who: &T::AccountId, amount: u128) {
    Balances::<T>::insert(who, amount);
    TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_add(amount));
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, SEED);
        let amount: u128 = 1_000_000;
        fund::<T>(&caller, 10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn transfer_to_deposit_address() {
        let caller: T::AccountId = whitelisted_caller();
        let beneficiary: T::AccountId = account("beneficiary", 0, SEED);
        let deposit = T::Addressing::deposit_base(&account("deposit", 0, SEED));
        let amount: u128 = 1_000_000;
        fund::<T>(&caller, 10_000_000);
        T::BenchmarkHelper::set_attribute(
            &deposit,
            AttributeKind::IsDepositAddress,
            T::Addressing::encode_account(&beneficiary),
        );

        #[extrinsic_call]
        transfer(RawOrigin::Signed(caller.clone()), deposit.clone(), amount);

        assert_eq!(Balances::<T>::get(&beneficiary), amount);
        assert_eq!(Balances::<T>::get(&deposit), 0);
    }

    #[benchmark]
    fn burn() {
        let caller: T::AccountId = whitelisted_caller();
        let amount: u128 = 1_000_000;
        fund::<T>(&caller, 10_000_000);
        BurnLimits::<T>::put(BurnBounds { min: 0, max: amount });
        T::BenchmarkHelper::set_attribute(&caller, AttributeKind::CanBurn, U256::one());
        let supply = TotalSupply::<T>::get();

        #[extrinsic_call]
        transfer(RawOrigin::Signed(caller.clone()), T::Addressing::zero(), amount);

        assert_eq!(TotalSupply::<T>::get(), supply - amount);
    }

    #[benchmark]
    fn transfer_from() {
        let owner: T::AccountId = account("owner", 0, SEED);
        let spender: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, SEED);
        let amount: u128 = 1_000_000;
        fund::<T>(&owner, 10_000_000);
        Allowances::<T>::insert(&owner, &spender, amount);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), owner.clone(), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
        assert_eq!(Allowances::<T>::get(&owner, &spender), 0);
    }

    #[benchmark]
    fn approve() {
        let owner: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, SEED);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner.clone()), spender.clone(), 1_000_000);

        assert_eq!(Allowances::<T>::get(&owner, &spender), 1_000_000);
    }

    #[benchmark]
    fn mint() {
        let recipient: T::AccountId = account("recipient", 0, SEED);
        let amount: u128 = 1_000_000;
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn set_burn_bounds() {
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, 10, 1_000);

        assert_eq!(BurnLimits::<T>::get(), BurnBounds { min: 10, max: 1_000 });
    }

    #[benchmark]
    fn set_admin() {
        let new_admin: T::AccountId = account("admin", 1, SEED);
        let origin = T::AdminOrigin::try_successful_origin().expect("Admin origin");

        #[extrinsic_call]
        _(origin as T::RuntimeOrigin, new_admin.clone());

        assert_eq!(Admin::<T>::get(), Some(new_admin));
    }

    impl_benchmark_test_suite!(TokenLedger, crate::mock::new_test_ext(), crate::mock::Test);
}
