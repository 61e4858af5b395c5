//! Rescue tests.
//!
//! The liquidation engine calls `rescue` right before it would seize a SAFE.
//! A successful rescue redeems reserve tokens into collateral, tops the SAFE
//! up to its desired ratio and pays the keeper.

#[cfg(test)]
mod tests {
    use crate::saviour::fixture::SaviourFixture;
    use safe_saviour::{
        constants::EMPTY_COLLATERAL_TYPE, errors::ErrorCodes, state::collateral_type_from_str,
    };
    use saviour_test_framework::prelude::*;

    fn setup_fixture() -> (SaviourFixture, SafeHandle) {
        let mut fixture = SaviourFixture::new().expect("Failed to create fixture");
        let safe = fixture.setup_covered_safe().expect("Failed to setup covered safe");
        (fixture, safe)
    }

    #[test]
    fn test_should_rescue_safe() {
        let (mut fixture, safe) = setup_fixture();
        let keeper = fixture.keeper;
        let saviour_key = fixture.harness.saviour.key;
        assert_eq!(fixture.safe_ratio(&safe), Some(140));

        let outcome = fixture.rescue(&safe).expect("Failed to rescue");

        assert!(outcome.saved);
        assert_eq!(outcome.collateral_added, 3 * WAD);
        assert_eq!(outcome.keeper_payout, DEFAULT_KEEPER_PAYOUT);
        assert_eq!(outcome.reserve_used, 775 * WAD / 1000);

        assert_eq!(
            fixture.harness.saviour.reserve_balance_of(&safe.handler),
            225 * WAD / 1000
        );
        assert_eq!(fixture.harness.reserve_token_balance(&saviour_key), 225 * WAD / 1000);
        assert_eq!(fixture.mocks().safe_engine.get(&safe.handler).locked_collateral, 17 * WAD);
        assert_eq!(fixture.safe_ratio(&safe), Some(170));

        assert_eq!(fixture.harness.collateral_balance(&keeper), DEFAULT_KEEPER_PAYOUT);
        assert_eq!(fixture.harness.collateral_balance(&saviour_key), 0);
    }

    #[test]
    fn test_should_not_rescue_twice() {
        let (mut fixture, safe) = setup_fixture();

        fixture.rescue(&safe).expect("Failed to rescue");
        assert!(!fixture.harness.saviour.can_save(&safe.handler).unwrap());

        fixture
            .rescue(&safe)
            .expect_revert(ErrorCodes::SaviourInvalidComputedAmount);
    }

    #[test]
    fn test_should_rescue_to_custom_ratio() {
        let mut fixture = SaviourFixture::new().expect("Failed to create fixture");
        let safe = fixture.open_default_safe();
        let alice = fixture.alice;

        fixture
            .harness
            .saviour
            .set_desired_ratio(&alice, safe.id, 300)
            .expect("Failed to set desired ratio");
        fixture.harness.deposit_reserve(&safe, 5 * WAD).expect("Failed to deposit");

        let outcome = fixture.rescue(&safe).expect("Failed to rescue");

        assert_eq!(outcome.collateral_added, 16 * WAD);
        // 16.1 collateral at 4 per reserve
        assert_eq!(outcome.reserve_used, 4025 * WAD / 1000);
        assert_eq!(fixture.safe_ratio(&safe), Some(300));
    }

    #[test]
    fn test_should_rescue_low_decimal_collateral() {
        let builder = SaviourBuilder::new()
            .collateral_decimals(6)
            .keeper_payout(100_000)
            .collateral_per_reserve(4_000_000);
        let mut fixture = SaviourFixture::with_builder(builder).expect("Failed to create fixture");
        let safe = fixture.setup_covered_safe().expect("Failed to setup covered safe");
        let keeper = fixture.keeper;

        let outcome = fixture.rescue(&safe).expect("Failed to rescue");

        assert_eq!(outcome.collateral_added, 3_000_000);
        assert_eq!(outcome.reserve_used, 775 * WAD / 1000);
        assert_eq!(fixture.mocks().safe_engine.get(&safe.handler).locked_collateral, 17 * WAD);
        assert_eq!(fixture.harness.collateral_balance(&keeper), 100_000);
    }

    #[test]
    fn test_should_revert_if_caller_not_liquidation_engine() {
        let (mut fixture, safe) = setup_fixture();
        let (keeper, collateral_type) = (fixture.keeper, fixture.harness.saviour.collateral_type);

        fixture
            .harness
            .saviour
            .rescue(&keeper, keeper, collateral_type, safe.handler)
            .expect_revert(ErrorCodes::SaviourCallerNotLiquidationEngine);
    }

    #[test]
    fn test_should_revert_on_zero_keeper() {
        let (mut fixture, safe) = setup_fixture();

        fixture
            .harness
            .rescue(Pubkey::default(), &safe)
            .expect_revert(ErrorCodes::SaviourZeroKeeperAddress);
    }

    #[test]
    fn test_should_accept_registration_call() {
        let mut fixture = SaviourFixture::new().expect("Failed to create fixture");
        let engine = fixture.harness.liquidation_engine();

        let outcome = fixture
            .harness
            .saviour
            .rescue(&engine, engine, EMPTY_COLLATERAL_TYPE, Pubkey::default())
            .expect("Registration call failed");

        assert_eq!(outcome, fixture.harness.saviour.on_saviour_registered());
    }

    #[test]
    fn test_should_revert_on_other_collateral_type() {
        let (mut fixture, safe) = setup_fixture();
        let (engine, keeper) = (fixture.harness.liquidation_engine(), fixture.keeper);

        fixture
            .harness
            .saviour
            .rescue(&engine, keeper, collateral_type_from_str("WBTC-A"), safe.handler)
            .expect_revert(ErrorCodes::SaviourInvalidCollateralType);
    }

    #[test]
    fn test_should_revert_without_reserve_token() {
        let mut fixture = SaviourFixture::new().expect("Failed to create fixture");
        let safe = fixture.open_default_safe();

        // checked before the payout value
        fixture.mocks().price_feed.set_price(3 * WAD);
        fixture
            .rescue(&safe)
            .expect_revert(ErrorCodes::SaviourNoReserveTokenSelected);
    }

    #[test]
    fn test_should_revert_when_payout_too_small() {
        let (mut fixture, safe) = setup_fixture();

        fixture.mocks().price_feed.set_price(3 * WAD);
        fixture
            .rescue(&safe)
            .expect_revert(ErrorCodes::SaviourPayoutTooSmall);
    }

    #[test]
    fn test_should_revert_on_tiny_safe() {
        let (mut fixture, safe) = setup_fixture();

        fixture
            .mocks()
            .safe_engine
            .set_safe(&safe.handler, 2 * WAD - 1, SaviourFixture::DEFAULT_DEBT);
        fixture.rescue(&safe).expect_revert(ErrorCodes::SaviourTinySafe);
    }

    #[test]
    fn test_should_revert_on_invalid_computed_amount() {
        let (mut fixture, safe) = setup_fixture();

        // debt worth next to nothing needs no top-up
        fixture.mocks().oracle_relayer.set_redemption_price(3 * RAY / 100_000);
        fixture
            .rescue(&safe)
            .expect_revert(ErrorCodes::SaviourInvalidComputedAmount);

        // repaid SAFE has no finite top-up
        fixture.mocks().oracle_relayer.set_redemption_price(DEFAULT_REDEMPTION_PRICE);
        fixture
            .mocks()
            .safe_engine
            .set_safe(&safe.handler, SaviourFixture::DEFAULT_COLLATERAL, 0);
        fixture
            .rescue(&safe)
            .expect_revert(ErrorCodes::SaviourInvalidComputedAmount);
    }

    #[test]
    fn test_should_revert_on_insufficient_reserve() {
        let mut fixture = SaviourFixture::new().expect("Failed to create fixture");
        let safe = fixture.open_default_safe();
        fixture.harness.deposit_reserve(&safe, WAD / 2).expect("Failed to deposit");

        fixture
            .rescue(&safe)
            .expect_revert(ErrorCodes::SaviourInsufficientReserveBalance);
        assert_eq!(fixture.harness.saviour.reserve_balance_of(&safe.handler), WAD / 2);
    }

    #[test]
    fn test_should_roll_back_failed_redemption() {
        let (mut fixture, safe) = setup_fixture();
        let keeper = fixture.keeper;

        fixture.mocks().operator.set_fail_redemptions(true);
        fixture.rescue(&safe).expect_failure();

        let saviour_key = fixture.harness.saviour.key;
        assert_eq!(
            fixture.harness.reserve_token_balance(&saviour_key),
            SaviourFixture::DEFAULT_RESERVE_DEPOSIT
        );
        assert_eq!(fixture.harness.saviour.held_collateral_of(&safe.handler), 0);

        assert_eq!(
            fixture.harness.saviour.reserve_balance_of(&safe.handler),
            SaviourFixture::DEFAULT_RESERVE_DEPOSIT
        );
        assert_eq!(
            fixture.harness.saviour.reserve_token_of(&safe.handler),
            Some(fixture.mocks().reserve_token)
        );
        assert_eq!(
            fixture.mocks().safe_engine.get(&safe.handler).locked_collateral,
            SaviourFixture::DEFAULT_COLLATERAL
        );
        assert_eq!(fixture.harness.collateral_balance(&keeper), 0);

        fixture.mocks().operator.set_fail_redemptions(false);
        fixture.rescue(&safe).expect("Failed to rescue after recovery");
    }

    #[test]
    fn test_should_join_conversion_surplus() {
        let (mut fixture, safe) = setup_fixture();
        let saviour_key = fixture.harness.saviour.key;

        // 3.1 collateral at 3 per reserve rounds the quote up
        fixture.mocks().operator.set_collateral_per_reserve(3 * WAD);
        let outcome = fixture.rescue(&safe).expect("Failed to rescue");

        assert_eq!(outcome.reserve_used, 1_033_333_333_333_333_334);
        assert_eq!(outcome.collateral_added, 3 * WAD + 2);
        assert_eq!(
            fixture.mocks().safe_engine.get(&safe.handler).locked_collateral,
            17 * WAD + 2
        );
        assert_eq!(fixture.harness.collateral_balance(&saviour_key), 0);
        assert_eq!(fixture.harness.saviour.held_collateral_of(&safe.handler), 0);
    }

    #[test]
    fn test_should_hold_collateral_on_conversion_shortfall() {
        let (mut fixture, safe) = setup_fixture();
        let (alice, bob) = (fixture.alice, fixture.bob);
        let saviour_key = fixture.harness.saviour.key;

        let bob_safe = fixture.harness.open_safe(
            bob,
            SaviourFixture::DEFAULT_COLLATERAL,
            SaviourFixture::DEFAULT_DEBT,
        );
        fixture
            .harness
            .deposit_reserve(&bob_safe, SaviourFixture::DEFAULT_RESERVE_DEPOSIT)
            .expect("Failed to deposit");

        fixture.mocks().operator.set_short_pay(1);
        fixture
            .rescue(&safe)
            .expect_revert(ErrorCodes::SaviourConversionShortfall);

        // the spent reserve stays debited
        let saviour = &fixture.harness.saviour;
        assert_eq!(saviour.reserve_balance_of(&safe.handler), 225 * WAD / 1000);
        assert_eq!(
            fixture.harness.reserve_token_balance(&saviour_key),
            saviour.reserve_balance_of(&safe.handler) + saviour.reserve_balance_of(&bob_safe.handler)
        );
        assert_eq!(
            fixture.mocks().safe_engine.get(&safe.handler).locked_collateral,
            SaviourFixture::DEFAULT_COLLATERAL
        );

        // what the operator did pay is held for the SAFE
        let held = 31 * WAD / 10 - 1;
        assert_eq!(saviour.held_collateral_of(&safe.handler), held);
        assert_eq!(fixture.harness.collateral_balance(&saviour_key), held);

        fixture
            .harness
            .saviour
            .withdraw(&bob, bob_safe.id, SaviourFixture::DEFAULT_RESERVE_DEPOSIT)
            .expect("Failed to withdraw");
        fixture
            .harness
            .saviour
            .withdraw(&alice, safe.id, 225 * WAD / 1000)
            .expect("Failed to withdraw");
        assert_eq!(fixture.harness.reserve_token_balance(&saviour_key), 0);

        assert_eq!(
            fixture.harness.saviour.claim_collateral(&alice, safe.id).unwrap(),
            held
        );
        assert_eq!(fixture.harness.collateral_balance(&alice), held);
        assert_eq!(fixture.harness.collateral_balance(&saviour_key), 0);
    }

    #[test]
    fn test_should_hold_collateral_when_join_fails() {
        let (mut fixture, safe) = setup_fixture();
        let (alice, keeper) = (fixture.alice, fixture.keeper);
        let saviour_key = fixture.harness.saviour.key;

        fixture.mocks().collateral_join.set_disabled(true);
        fixture.rescue(&safe).expect_failure();

        assert_eq!(
            fixture.harness.saviour.reserve_balance_of(&safe.handler),
            225 * WAD / 1000
        );
        assert_eq!(fixture.harness.reserve_token_balance(&saviour_key), 225 * WAD / 1000);
        assert_eq!(fixture.harness.saviour.held_collateral_of(&safe.handler), 31 * WAD / 10);
        assert_eq!(fixture.harness.collateral_balance(&keeper), 0);

        fixture
            .harness
            .saviour
            .claim_collateral(&fixture.bob, safe.id)
            .expect_revert(ErrorCodes::SaviourNotOwner);
        fixture
            .harness
            .saviour
            .claim_collateral(&alice, safe.id)
            .expect("Failed to claim");
        fixture
            .harness
            .saviour
            .claim_collateral(&alice, safe.id)
            .expect_revert(ErrorCodes::SaviourNoHeldCollateral);
    }
}
