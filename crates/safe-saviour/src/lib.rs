use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod invokes;
pub mod module;
pub mod state;
pub mod utils;

pub use crate::state::*;

impl SafeSaviour {
    /***********************************|
    |           Admin Module             |
    |__________________________________*/

    pub fn new(params: InitSaviourParams, collaborators: SaviourCollaborators) -> Result<Self> {
        module::admin::init_saviour(params, collaborators)
    }

    /***********************************|
    |           User Module              |
    |__________________________________*/

    /// Moves `amount` of `reserve_token` from `caller` into custody for SAFE
    /// `safe_id`. Returns the new reserve balance.
    pub fn deposit(
        &mut self,
        caller: &Pubkey,
        safe_id: u64,
        amount: u128,
        reserve_token: Pubkey,
    ) -> Result<u128> {
        module::user::deposit(self, caller, safe_id, amount, reserve_token)
    }

    /// Returns the remaining reserve balance.
    pub fn withdraw(&mut self, caller: &Pubkey, safe_id: u64, amount: u128) -> Result<u128> {
        module::user::withdraw(self, caller, safe_id, amount)
    }

    /// Sends collateral held after a failed rescue to `caller`. Returns the amount.
    pub fn claim_collateral(&mut self, caller: &Pubkey, safe_id: u64) -> Result<u128> {
        module::user::claim_collateral(self, caller, safe_id)
    }

    pub fn set_desired_ratio(
        &mut self,
        caller: &Pubkey,
        safe_id: u64,
        desired_ratio: u128,
    ) -> Result<()> {
        module::user::set_desired_ratio(self, caller, safe_id, desired_ratio)
    }

    /***********************************|
    |        Liquidation Module          |
    |__________________________________*/

    pub fn rescue(
        &mut self,
        caller: &Pubkey,
        keeper: Pubkey,
        collateral_type: CollateralType,
        handler: Pubkey,
    ) -> Result<RescueOutcome> {
        module::liquidation::rescue(self, caller, keeper, collateral_type, handler)
    }

    pub fn on_saviour_registered(&self) -> RescueOutcome {
        module::liquidation::on_saviour_registered(self)
    }

    /***********************************|
    |            View Module             |
    |__________________________________*/

    pub fn can_save(&self, handler: &Pubkey) -> Result<bool> {
        module::view::can_save(self, handler)
    }

    pub fn token_amount_required(&self, handler: &Pubkey) -> Result<TokenAmount> {
        module::view::token_amount_required(self, handler)
    }

    pub fn keeper_payout_exceeds_min_value(&self) -> Result<bool> {
        module::view::keeper_payout_exceeds_min_value(self)
    }

    pub fn get_keeper_payout_value(&self) -> Result<u128> {
        module::view::get_keeper_payout_value(self)
    }

    pub fn liquidation_ratio_scaled(&self) -> Result<u128> {
        module::view::liquidation_ratio_scaled(self)
    }

    pub fn reserve_token_of(&self, handler: &Pubkey) -> Option<Pubkey> {
        self.reserves.token_of(handler)
    }

    pub fn reserve_balance_of(&self, handler: &Pubkey) -> u128 {
        self.reserves.balance_of(handler)
    }

    /// Collateral token units held for a SAFE after a failed rescue.
    pub fn held_collateral_of(&self, handler: &Pubkey) -> u128 {
        self.reserves.held_collateral_of(handler)
    }

    /// Custom desired ratio of a SAFE, 0 when it uses the default.
    pub fn desired_ratio_of(&self, handler: &Pubkey) -> u128 {
        self.ratios.custom_ratio_of(handler)
    }
}
