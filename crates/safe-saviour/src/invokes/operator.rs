use anchor_lang::prelude::*;

use super::Collaborator;

/// Redeems reserve tokens and converts the payout into collateral.
pub trait ReserveOperator: Collaborator {
    fn is_whitelisted(&self, reserve_token: &Pubkey) -> bool;

    /// Reserve tokens needed to receive `collateral_out` of `out_token`.
    fn quote_reserve_in(
        &self,
        reserve_token: &Pubkey,
        collateral_out: u128,
        out_token: &Pubkey,
    ) -> Result<u128>;

    /// Redeems `amount_in` reserve tokens held by `recipient` and sends at
    /// least `min_out` of `out_token` back to it. Returns the amount sent.
    fn redeem_and_convert(
        &self,
        reserve_token: &Pubkey,
        amount_in: u128,
        min_out: u128,
        out_token: &Pubkey,
        recipient: &Pubkey,
    ) -> Result<u128>;
}
