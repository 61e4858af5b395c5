//! Reserve deposit tests.

#[cfg(test)]
mod tests {
    use crate::saviour::fixture::SaviourFixture;
    use safe_saviour::errors::ErrorCodes;
    use saviour_test_framework::prelude::*;

    fn setup_fixture() -> SaviourFixture {
        SaviourFixture::new().expect("Failed to create fixture")
    }

    #[test]
    fn test_should_deposit_as_owner() {
        let mut fixture = setup_fixture();
        let safe = fixture.open_default_safe();
        let saviour_key = fixture.harness.saviour.key;

        let balance = fixture
            .harness
            .deposit_reserve(&safe, WAD)
            .expect("Failed to deposit");

        assert_eq!(balance, WAD);
        assert_eq!(fixture.harness.saviour.reserve_balance_of(&safe.handler), WAD);
        assert_eq!(
            fixture.harness.saviour.reserve_token_of(&safe.handler),
            Some(fixture.mocks().reserve_token)
        );
        assert_eq!(fixture.harness.reserve_token_balance(&fixture.alice), 0);
        assert_eq!(fixture.harness.reserve_token_balance(&saviour_key), WAD);
    }

    #[test]
    fn test_should_accumulate_deposits() {
        let mut fixture = setup_fixture();
        let safe = fixture.open_default_safe();

        fixture.harness.deposit_reserve(&safe, WAD).expect("Failed to deposit");
        let balance = fixture
            .harness
            .deposit_reserve(&safe, WAD / 2)
            .expect("Failed to deposit again");

        assert_eq!(balance, 3 * WAD / 2);
    }

    #[test]
    fn test_should_deposit_as_authorized_operator() {
        let mut fixture = setup_fixture();
        let safe = fixture.open_default_safe();
        let (alice, bob) = (fixture.alice, fixture.bob);
        let token = fixture.mocks().reserve_token;

        fixture.mocks().safe_manager.allow(alice, safe.id, bob);
        fixture
            .deposit_token(&safe, bob, token, WAD)
            .expect("Failed to deposit as operator");

        assert_eq!(fixture.harness.saviour.reserve_balance_of(&safe.handler), WAD);
    }

    #[test]
    fn test_should_revert_if_not_owner() {
        let mut fixture = setup_fixture();
        let safe = fixture.open_default_safe();
        let bob = fixture.bob;
        let token = fixture.mocks().reserve_token;

        fixture
            .deposit_token(&safe, bob, token, WAD)
            .expect_revert(ErrorCodes::SaviourNotOwner);

        // ownership is checked before the amount
        fixture
            .deposit_token(&safe, bob, token, 0)
            .expect_revert(ErrorCodes::SaviourNotOwner);
    }

    #[test]
    fn test_should_revert_if_saviour_not_registered() {
        let mut fixture = SaviourFixture::with_builder(SaviourBuilder::new().unregistered())
            .expect("Failed to create fixture");
        let safe = fixture.open_default_safe();

        fixture
            .harness
            .deposit_reserve(&safe, WAD)
            .expect_revert(ErrorCodes::SaviourNotRegistered);
    }

    #[test]
    fn test_should_revert_on_zero_amount() {
        let mut fixture = setup_fixture();
        let safe = fixture.open_default_safe();

        fixture
            .harness
            .deposit_reserve(&safe, 0)
            .expect_revert(ErrorCodes::SaviourZeroAmount);
    }

    #[test]
    fn test_should_revert_on_forbidden_token() {
        let mut fixture = setup_fixture();
        let safe = fixture.open_default_safe();
        let alice = fixture.alice;

        fixture
            .deposit_token(&safe, alice, Pubkey::new_unique(), WAD)
            .expect_revert(ErrorCodes::SaviourForbiddenToken);
    }

    #[test]
    fn test_should_revert_on_second_reserve_token() {
        let mut fixture = setup_fixture();
        let safe = fixture.open_default_safe();
        let alice = fixture.alice;
        let other_token = fixture.add_reserve_token();

        fixture.harness.deposit_reserve(&safe, WAD).expect("Failed to deposit");
        fixture
            .deposit_token(&safe, alice, other_token, WAD)
            .expect_revert(ErrorCodes::SaviourTokenMismatch);

        // the binding goes away with the balance
        fixture
            .harness
            .saviour
            .withdraw(&alice, safe.id, WAD)
            .expect("Failed to withdraw");
        fixture
            .deposit_token(&safe, alice, other_token, WAD)
            .expect("Failed to deposit other token");
        assert_eq!(
            fixture.harness.saviour.reserve_token_of(&safe.handler),
            Some(other_token)
        );
    }

    #[test]
    fn test_should_revert_if_safe_has_no_debt() {
        let mut fixture = setup_fixture();
        let alice = fixture.alice;
        let safe = fixture.harness.open_safe(alice, 14 * WAD, 0);

        fixture
            .harness
            .deposit_reserve(&safe, WAD)
            .expect_revert(ErrorCodes::SaviourNoDebt);
    }

    #[test]
    fn test_should_not_credit_failed_transfer() {
        let mut fixture = setup_fixture();
        let safe = fixture.open_default_safe();
        let (alice, token) = (fixture.alice, fixture.mocks().reserve_token);

        // alice holds no reserve tokens
        fixture
            .harness
            .saviour
            .deposit(&alice, safe.id, WAD, token)
            .expect_failure();

        assert_eq!(fixture.harness.saviour.reserve_balance_of(&safe.handler), 0);
        assert_eq!(fixture.harness.saviour.reserve_token_of(&safe.handler), None);
    }

    #[test]
    fn test_should_keep_balance_after_failed_top_up() {
        let mut fixture = setup_fixture();
        let safe = fixture.setup_covered_safe().expect("Failed to setup covered safe");
        let (alice, token) = (fixture.alice, fixture.mocks().reserve_token);
        let saviour_key = fixture.harness.saviour.key;

        // the first deposit spent all of alice's tokens
        fixture
            .harness
            .saviour
            .deposit(&alice, safe.id, WAD, token)
            .expect_failure();

        assert_eq!(
            fixture.harness.saviour.reserve_balance_of(&safe.handler),
            SaviourFixture::DEFAULT_RESERVE_DEPOSIT
        );
        assert_eq!(fixture.harness.saviour.reserve_token_of(&safe.handler), Some(token));
        assert_eq!(
            fixture.harness.reserve_token_balance(&saviour_key),
            SaviourFixture::DEFAULT_RESERVE_DEPOSIT
        );
    }

    #[test]
    fn test_should_revert_after_engine_disconnects_saviour() {
        let mut fixture = setup_fixture();
        let safe = fixture.open_default_safe();
        let saviour_key = fixture.harness.saviour.key;

        fixture.harness.deposit_reserve(&safe, WAD).expect("Failed to deposit");
        fixture.mocks().liquidation_engine.disconnect_saviour(&saviour_key);

        fixture
            .harness
            .deposit_reserve(&safe, WAD)
            .expect_revert(ErrorCodes::SaviourNotRegistered);
        assert_eq!(fixture.harness.saviour.reserve_balance_of(&safe.handler), WAD);
    }
}
