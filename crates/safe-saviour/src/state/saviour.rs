use std::sync::Arc;

use anchor_lang::prelude::*;

use crate::{
    invokes::*,
    state::{CollateralType, KeeperPayoutConfig, RatioConfig, ReserveLedger},
};

/// External systems the saviour reads from and moves tokens through.
#[derive(Clone)]
pub struct SaviourCollaborators {
    pub collateral_join: Arc<dyn CollateralJoin>,
    pub liquidation_engine: Arc<dyn LiquidationEngine>,
    pub oracle_relayer: Arc<dyn OracleRelayer>,
    pub safe_manager: Arc<dyn PositionRegistry>,
    pub safe_engine: Arc<dyn SafeEngine>,
    pub operator: Arc<dyn ReserveOperator>,
    pub token_ledger: Arc<dyn TokenLedger>,
}

/// Saviour for SAFEs of a single collateral type.
pub struct SafeSaviour {
    pub key: Pubkey,
    pub collateral_type: CollateralType,
    pub collateral_token: Pubkey,
    pub collateral_decimals: u8,

    pub payout: KeeperPayoutConfig,
    pub ratios: RatioConfig,
    pub(crate) reserves: ReserveLedger,

    pub(crate) collaborators: SaviourCollaborators,
}
