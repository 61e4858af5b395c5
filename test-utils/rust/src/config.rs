//! Saviour parameter presets.
//!
//! Amounts are decimal strings so that 1e18 scaled values survive JSON.

use serde::{Deserialize, Deserializer};

use safe_saviour::constants::{
    PRESET_DEFAULT_DESIRED_RATIO, PRESET_KEEPER_PAYOUT, PRESET_MIN_KEEPER_PAYOUT_VALUE,
    PRESET_PAYOUT_TO_SAFE_SIZE,
};

use crate::errors::Result;

fn from_decimal_str<'de, D>(deserializer: D) -> std::result::Result<u128, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.trim()
        .replace('_', "")
        .parse::<u128>()
        .map_err(serde::de::Error::custom)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeployPreset {
    #[serde(deserialize_with = "from_decimal_str")]
    pub keeper_payout: u128,
    #[serde(deserialize_with = "from_decimal_str")]
    pub min_keeper_payout_value: u128,
    #[serde(deserialize_with = "from_decimal_str")]
    pub payout_to_safe_size: u128,
    #[serde(deserialize_with = "from_decimal_str")]
    pub default_desired_ratio: u128,
}

impl Default for DeployPreset {
    fn default() -> Self {
        Self {
            keeper_payout: PRESET_KEEPER_PAYOUT,
            min_keeper_payout_value: PRESET_MIN_KEEPER_PAYOUT_VALUE,
            payout_to_safe_size: PRESET_PAYOUT_TO_SAFE_SIZE,
            default_desired_ratio: PRESET_DEFAULT_DESIRED_RATIO,
        }
    }
}

impl DeployPreset {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
