use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCodes {
    /***********************************|
    |          Configuration            |
    |__________________________________*/
    #[msg(SAVIOUR_NULL_SAVIOUR_KEY)]
    SaviourNullSaviourKey,

    #[msg(SAVIOUR_NULL_COLLATERAL_JOIN)]
    SaviourNullCollateralJoin,

    #[msg(SAVIOUR_NULL_LIQUIDATION_ENGINE)]
    SaviourNullLiquidationEngine,

    #[msg(SAVIOUR_NULL_ORACLE_RELAYER)]
    SaviourNullOracleRelayer,

    #[msg(SAVIOUR_NULL_SAFE_MANAGER)]
    SaviourNullSafeManager,

    #[msg(SAVIOUR_NULL_SAFE_ENGINE)]
    SaviourNullSafeEngine,

    #[msg(SAVIOUR_NULL_OPERATOR)]
    SaviourNullOperator,

    #[msg(SAVIOUR_NULL_TOKEN_LEDGER)]
    SaviourNullTokenLedger,

    #[msg(SAVIOUR_INVALID_KEEPER_PAYOUT)]
    SaviourInvalidKeeperPayout,

    #[msg(SAVIOUR_INVALID_MIN_PAYOUT_VALUE)]
    SaviourInvalidMinPayoutValue,

    #[msg(SAVIOUR_INVALID_PAYOUT_TO_SAFE_SIZE)]
    SaviourInvalidPayoutToSafeSize,

    #[msg(SAVIOUR_NULL_DEFAULT_CRATIO)]
    SaviourNullDefaultRatio,

    #[msg(SAVIOUR_INVALID_JOIN_DECIMALS)]
    SaviourInvalidJoinDecimals,

    #[msg(SAVIOUR_JOIN_DISABLED)]
    SaviourJoinDisabled,

    #[msg(SAVIOUR_INVALID_LIQUIDATION_RATIO)]
    SaviourInvalidLiquidationRatio,

    #[msg(SAVIOUR_INVALID_DESIRED_CRATIO)]
    SaviourInvalidDesiredRatio,

    #[msg(SAVIOUR_DESIRED_CRATIO_EXCEEDS_MAX)]
    SaviourRatioExceedsMax,

    /***********************************|
    |          Authorization            |
    |__________________________________*/
    #[msg(SAVIOUR_NOT_SAFE_OWNER)]
    SaviourNotOwner,

    #[msg(SAVIOUR_NOT_REGISTERED_IN_LIQUIDATION_ENGINE)]
    SaviourNotRegistered,

    #[msg(SAVIOUR_CALLER_NOT_LIQUIDATION_ENGINE)]
    SaviourCallerNotLiquidationEngine,

    /***********************************|
    |            Reserves               |
    |__________________________________*/
    #[msg(SAVIOUR_ZERO_AMOUNT)]
    SaviourZeroAmount,

    #[msg(SAVIOUR_FORBIDDEN_RESERVE_TOKEN)]
    SaviourForbiddenToken,

    #[msg(SAVIOUR_RESERVE_TOKEN_MISMATCH)]
    SaviourTokenMismatch,

    #[msg(SAVIOUR_SAFE_HAS_NO_DEBT)]
    SaviourNoDebt,

    #[msg(SAVIOUR_INSUFFICIENT_RESERVE_BALANCE)]
    SaviourInsufficientBalance,

    #[msg(SAVIOUR_NO_HELD_COLLATERAL)]
    SaviourNoHeldCollateral,

    /***********************************|
    |             Rescue                |
    |__________________________________*/
    #[msg(SAVIOUR_NULL_KEEPER)]
    SaviourZeroKeeperAddress,

    #[msg(SAVIOUR_INVALID_COLLATERAL_TYPE)]
    SaviourInvalidCollateralType,

    #[msg(SAVIOUR_NO_RESERVE_TOKEN_SELECTED)]
    SaviourNoReserveTokenSelected,

    #[msg(SAVIOUR_KEEPER_PAYOUT_TOO_SMALL)]
    SaviourPayoutTooSmall,

    #[msg(SAVIOUR_TINY_SAFE)]
    SaviourTinySafe,

    #[msg(SAVIOUR_INVALID_TOKENS_USED_TO_SAVE)]
    SaviourInvalidComputedAmount,

    #[msg(SAVIOUR_INSUFFICIENT_RESERVE_TO_SAVE)]
    SaviourInsufficientReserveBalance,

    #[msg(SAVIOUR_CONVERSION_SHORTFALL)]
    SaviourConversionShortfall,
}
