//! Reserve withdrawal tests.

#[cfg(test)]
mod tests {
    use crate::saviour::fixture::SaviourFixture;
    use safe_saviour::errors::ErrorCodes;
    use saviour_test_framework::prelude::*;

    fn setup_fixture_with_deposit() -> (SaviourFixture, SafeHandle) {
        let mut fixture = SaviourFixture::new().expect("Failed to create fixture");
        let safe = fixture.setup_covered_safe().expect("Failed to setup covered safe");
        (fixture, safe)
    }

    #[test]
    fn test_should_withdraw_partially() {
        let (mut fixture, safe) = setup_fixture_with_deposit();
        let alice = fixture.alice;

        let remaining = fixture
            .harness
            .saviour
            .withdraw(&alice, safe.id, WAD / 4)
            .expect("Failed to withdraw");

        assert_eq!(remaining, 3 * WAD / 4);
        assert_eq!(fixture.harness.reserve_token_balance(&alice), WAD / 4);
        assert_eq!(
            fixture.harness.saviour.reserve_token_of(&safe.handler),
            Some(fixture.mocks().reserve_token)
        );
    }

    #[test]
    fn test_should_clear_binding_on_full_withdraw() {
        let (mut fixture, safe) = setup_fixture_with_deposit();
        let alice = fixture.alice;

        let remaining = fixture
            .harness
            .saviour
            .withdraw(&alice, safe.id, SaviourFixture::DEFAULT_RESERVE_DEPOSIT)
            .expect("Failed to withdraw");

        assert_eq!(remaining, 0);
        assert_eq!(fixture.harness.saviour.reserve_balance_of(&safe.handler), 0);
        assert_eq!(fixture.harness.saviour.reserve_token_of(&safe.handler), None);
        assert_eq!(
            fixture.harness.reserve_token_balance(&alice),
            SaviourFixture::DEFAULT_RESERVE_DEPOSIT
        );
    }

    #[test]
    fn test_should_pay_authorized_operator() {
        let (mut fixture, safe) = setup_fixture_with_deposit();
        let (alice, bob) = (fixture.alice, fixture.bob);

        fixture.mocks().safe_manager.allow(alice, safe.id, bob);
        fixture
            .harness
            .saviour
            .withdraw(&bob, safe.id, WAD / 2)
            .expect("Failed to withdraw as operator");

        assert_eq!(fixture.harness.reserve_token_balance(&bob), WAD / 2);
        assert_eq!(fixture.harness.reserve_token_balance(&alice), 0);
    }

    #[test]
    fn test_should_revert_if_not_owner() {
        let (mut fixture, safe) = setup_fixture_with_deposit();
        let bob = fixture.bob;

        fixture
            .harness
            .saviour
            .withdraw(&bob, safe.id, WAD)
            .expect_revert(ErrorCodes::SaviourNotOwner);
    }

    #[test]
    fn test_should_revert_on_zero_amount() {
        let (mut fixture, safe) = setup_fixture_with_deposit();
        let alice = fixture.alice;

        fixture
            .harness
            .saviour
            .withdraw(&alice, safe.id, 0)
            .expect_revert(ErrorCodes::SaviourZeroAmount);
    }

    #[test]
    fn test_should_revert_above_balance() {
        let (mut fixture, safe) = setup_fixture_with_deposit();
        let alice = fixture.alice;

        fixture
            .harness
            .saviour
            .withdraw(&alice, safe.id, WAD + 1)
            .expect_revert(ErrorCodes::SaviourInsufficientBalance);

        let empty_safe = fixture.open_default_safe();
        fixture
            .harness
            .saviour
            .withdraw(&alice, empty_safe.id, 1)
            .expect_revert(ErrorCodes::SaviourInsufficientBalance);

        assert_eq!(fixture.harness.saviour.reserve_balance_of(&safe.handler), WAD);
    }
}
