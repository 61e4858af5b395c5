use std::collections::HashMap;

use anchor_lang::prelude::*;

use crate::{constants::MAX_CRATIO, errors::ErrorCodes, utils::ratio::validate_desired_ratio};

/// Desired collateralization ratios, in percent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RatioConfig {
    pub default_desired_ratio: u128,
    custom_desired_ratios: HashMap<Pubkey, u128>, // keyed by SAFE handler
}

impl RatioConfig {
    pub fn new(default_desired_ratio: u128, liquidation_ratio_scaled: u128) -> Result<Self> {
        if default_desired_ratio == 0 {
            return Err(error!(ErrorCodes::SaviourNullDefaultRatio));
        }
        validate_desired_ratio(default_desired_ratio, liquidation_ratio_scaled, MAX_CRATIO)?;

        Ok(Self {
            default_desired_ratio,
            custom_desired_ratios: HashMap::new(),
        })
    }

    /// Custom ratio of a SAFE, 0 when unset.
    pub fn custom_ratio_of(&self, handler: &Pubkey) -> u128 {
        self.custom_desired_ratios
            .get(handler)
            .copied()
            .unwrap_or_default()
    }

    /// Ratio a rescue of `handler` targets.
    pub fn target_ratio_of(&self, handler: &Pubkey) -> u128 {
        match self.custom_ratio_of(handler) {
            0 => self.default_desired_ratio,
            custom => custom,
        }
    }

    pub fn set_custom_ratio(&mut self, handler: Pubkey, ratio: u128) {
        self.custom_desired_ratios.insert(handler, ratio);
    }
}
