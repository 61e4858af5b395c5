//! Rescue eligibility tests.

#[cfg(test)]
mod tests {
    use crate::saviour::fixture::SaviourFixture;
    use saviour_test_framework::prelude::*;

    fn setup_fixture() -> SaviourFixture {
        SaviourFixture::new().expect("Failed to create fixture")
    }

    #[test]
    fn test_should_save_covered_safe() {
        let mut fixture = setup_fixture();
        let safe = fixture.setup_covered_safe().expect("Failed to setup covered safe");

        assert!(fixture.harness.saviour.can_save(&safe.handler).unwrap());
    }

    #[test]
    fn test_should_not_save_without_reserve() {
        let mut fixture = setup_fixture();
        let safe = fixture.open_default_safe();

        assert!(!fixture.harness.saviour.can_save(&safe.handler).unwrap());
    }

    #[test]
    fn test_should_not_save_after_full_withdraw() {
        let mut fixture = setup_fixture();
        let safe = fixture.setup_covered_safe().expect("Failed to setup covered safe");
        let alice = fixture.alice;

        fixture
            .harness
            .saviour
            .withdraw(&alice, safe.id, SaviourFixture::DEFAULT_RESERVE_DEPOSIT)
            .expect("Failed to withdraw");

        assert!(!fixture.harness.saviour.can_save(&safe.handler).unwrap());
    }

    #[test]
    fn test_should_not_save_healthy_safe() {
        let mut fixture = setup_fixture();
        let safe = fixture.setup_covered_safe().expect("Failed to setup covered safe");

        fixture
            .mocks()
            .safe_engine
            .set_safe(&safe.handler, 18 * WAD, SaviourFixture::DEFAULT_DEBT);

        assert!(!fixture.harness.saviour.can_save(&safe.handler).unwrap());
    }

    #[test]
    fn test_should_not_save_repaid_safe() {
        let mut fixture = setup_fixture();
        let safe = fixture.setup_covered_safe().expect("Failed to setup covered safe");

        fixture
            .mocks()
            .safe_engine
            .set_safe(&safe.handler, SaviourFixture::DEFAULT_COLLATERAL, 0);

        assert!(!fixture.harness.saviour.can_save(&safe.handler).unwrap());
    }

    #[test]
    fn test_should_not_save_when_payout_too_small() {
        let mut fixture = setup_fixture();
        let safe = fixture.setup_covered_safe().expect("Failed to setup covered safe");

        fixture.mocks().price_feed.set_price(3 * WAD);

        assert!(!fixture.harness.saviour.can_save(&safe.handler).unwrap());
    }

    #[test]
    fn test_should_not_save_tiny_safe() {
        let mut fixture = setup_fixture();
        let alice = fixture.alice;
        // 1.9 collateral is under 0.1 payout * 20
        let safe = fixture.harness.open_safe(alice, 19 * WAD / 10, 100 * WAD);
        fixture
            .harness
            .deposit_reserve(&safe, 10 * WAD)
            .expect("Failed to deposit");

        assert!(!fixture.harness.saviour.can_save(&safe.handler).unwrap());
    }

    #[test]
    fn test_should_not_save_with_insufficient_reserve() {
        let mut fixture = setup_fixture();
        let safe = fixture.open_default_safe();

        // 3.1 collateral out needs 0.775 reserve
        fixture
            .harness
            .deposit_reserve(&safe, 775 * WAD / 1000 - 1)
            .expect("Failed to deposit");
        assert!(!fixture.harness.saviour.can_save(&safe.handler).unwrap());

        fixture.harness.deposit_reserve(&safe, 1).expect("Failed to top up deposit");
        assert!(fixture.harness.saviour.can_save(&safe.handler).unwrap());
    }
}
