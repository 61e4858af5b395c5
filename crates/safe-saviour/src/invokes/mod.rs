pub mod collateral_join;
pub mod liquidation_engine;
pub mod operator;
pub mod oracle;
pub mod safe;
pub mod token;

pub use collateral_join::*;
pub use liquidation_engine::*;
pub use operator::*;
pub use oracle::*;
pub use safe::*;
pub use token::*;

use anchor_lang::prelude::*;

/// Anything the saviour holds a reference to. A collaborator reporting the
/// zero key is treated as unset.
pub trait Collaborator: Send + Sync {
    fn key(&self) -> Pubkey;
}
