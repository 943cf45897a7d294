use std::collections::HashSet;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Coin, StdError, StdResult};

pub const DEFAULT_MAX_SUBDENOM_LENGTH: u32 = 44;
pub const DEFAULT_MAX_TICKER_LENGTH: u32 = 6;
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: u32 = 255;
pub const DEFAULT_MAX_EXPONENT: u32 = 18;
pub const DEFAULT_DENIED_DESCRIPTION_CHARS: &str = "@#$^*<>;()";

/// Registry configuration. Set at genesis and only replaced through the
/// privileged `SudoMsg::UpdateParams` path.
#[cw_serde]
pub struct Params {
    /// Fee charged to the creator of every new denom. Empty means creating a
    /// denom is free.
    pub denom_creation_fee: Vec<Coin>,
    /// Maximum length of the creator-chosen subdenom.
    pub max_subdenom_length: u32,
    /// Maximum number of denoms a single creator may register, if any.
    pub max_denoms_per_creator: Option<u32>,
    /// Rules applied to display metadata.
    pub metadata: MetadataRules,
}

/// Rules that ticker, description and exponent must satisfy before display
/// metadata is attached to a denom.
#[cw_serde]
pub struct MetadataRules {
    pub max_ticker_length: u32,
    pub max_description_length: u32,
    pub max_exponent: u32,
    /// Words a ticker may not contain, compared case-insensitively.
    pub denied_ticker_words: Vec<String>,
    /// Characters a description may not contain.
    pub denied_description_chars: String,
}

impl Default for MetadataRules {
    fn default() -> Self {
        Self {
            max_ticker_length: DEFAULT_MAX_TICKER_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
            max_exponent: DEFAULT_MAX_EXPONENT,
            denied_ticker_words: vec!["juno".to_string()],
            denied_description_chars: DEFAULT_DENIED_DESCRIPTION_CHARS.to_string(),
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self {
            denom_creation_fee: vec![],
            max_subdenom_length: DEFAULT_MAX_SUBDENOM_LENGTH,
            max_denoms_per_creator: None,
            metadata: MetadataRules::default(),
        }
    }
}

impl Params {
    pub fn with_fee(mut self, fee: Vec<Coin>) -> Self {
        self.denom_creation_fee = fee;
        self
    }

    pub fn validate(&self) -> StdResult<()> {
        let mut denoms = HashSet::new();
        for coin in &self.denom_creation_fee {
            if coin.amount.is_zero() {
                return Err(StdError::generic_err(format!(
                    "denom creation fee for {} must be positive",
                    coin.denom
                )));
            }
            if coin.denom.is_empty() {
                return Err(StdError::generic_err("denom creation fee has an empty denom"));
            }
            if !denoms.insert(coin.denom.as_str()) {
                return Err(StdError::generic_err(format!(
                    "duplicate denom {} in denom creation fee",
                    coin.denom
                )));
            }
        }

        if self.max_subdenom_length == 0 {
            return Err(StdError::generic_err("max subdenom length must be positive"));
        }
        if self.max_denoms_per_creator == Some(0) {
            return Err(StdError::generic_err(
                "max denoms per creator must be positive when set",
            ));
        }

        self.metadata.validate()
    }
}

impl MetadataRules {
    pub fn validate(&self) -> StdResult<()> {
        if self.max_ticker_length == 0 {
            return Err(StdError::generic_err("max ticker length must be positive"));
        }
        if self
            .denied_ticker_words
            .iter()
            .any(|word| word.trim().is_empty())
        {
            return Err(StdError::generic_err("denied ticker words cannot be blank"));
        }
        Ok(())
    }
}
