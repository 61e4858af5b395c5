pub mod builder;
pub mod config;
pub mod errors;
pub mod helpers;
pub mod mocks;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Installs a test writer subscriber honouring `RUST_LOG` (also read from `.env`).
pub fn init_tracing() {
    TRACING.call_once(|| {
        dotenv::dotenv().ok();
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

pub mod prelude {
    pub use crate::builder::{Mocks, NullCollaborator, SafeHandle, SaviourBuilder, SaviourHarness};
    pub use crate::builder::{
        DEFAULT_COLLATERAL_DECIMALS, DEFAULT_COLLATERAL_PER_RESERVE, DEFAULT_COLLATERAL_PRICE,
        DEFAULT_DESIRED_RATIO, DEFAULT_KEEPER_PAYOUT, DEFAULT_LIQUIDATION_C_RATIO,
        DEFAULT_MIN_KEEPER_PAYOUT_VALUE, DEFAULT_PAYOUT_TO_SAFE_SIZE, DEFAULT_REDEMPTION_PRICE,
    };
    pub use crate::config::DeployPreset;
    pub use crate::errors::*;
    pub use crate::helpers::{assert_approx_eq, ExpectRevertResultExt, RevertInfo};
    pub use crate::init_tracing;
    pub use crate::mocks::*;

    pub use anchor_lang::prelude::Pubkey;
    pub use safe_saviour::constants::{RAY, WAD};
}

pub use builder::{SaviourBuilder, SaviourHarness};
pub use errors::{HarnessError, Result};
