use std::collections::HashSet;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{StdError, StdResult};

use crate::denom::validate_native_denom;

/// This maps to the cosmos.bank.v1beta1.DenomUnit protobuf struct
#[cw_serde]
pub struct DenomUnit {
    /// denom represents the string name of the given denom unit (e.g uatom).
    pub denom: String,
    /// exponent represents power of 10 exponent that one must
    /// raise the base_denom to in order to equal the given DenomUnit's denom
    /// 1 denom = 10^exponent base_denom
    pub exponent: u32,
    /// aliases is a list of string aliases for the given denom
    pub aliases: Vec<String>,
}

/// This maps to the cosmos.bank.v1beta1.Metadata protobuf struct
#[cw_serde]
#[derive(Default)]
pub struct Metadata {
    pub description: String,
    /// denom_units represents the list of DenomUnit's for a given coin
    pub denom_units: Vec<DenomUnit>,
    /// base represents the base denom (should be the DenomUnit with exponent = 0).
    pub base: String,
    /// display indicates the suggested denom that should be displayed in clients.
    pub display: String,
    /// name defines the name of the token (eg: Cosmos Atom)
    pub name: String,
    /// symbol is the token symbol usually shown on exchanges (eg: ATOM).
    pub symbol: String,
}

impl Metadata {
    /// The record the registry writes when a denom is created: a single base
    /// unit with exponent 0 and nothing else.
    pub fn base_only(denom: impl Into<String>) -> Self {
        let denom = denom.into();
        Self {
            denom_units: vec![DenomUnit {
                denom: denom.clone(),
                exponent: 0,
                aliases: vec![],
            }],
            base: denom,
            ..Default::default()
        }
    }

    /// Structural checks the bank module applies to metadata:
    ///
    /// - name and symbol are not blank,
    /// - base, display and every unit denom follow the native denom grammar,
    /// - the first unit is the base denom with exponent 0,
    /// - exponents are strictly increasing,
    /// - unit denoms are unique,
    /// - the display denom is one of the units.
    pub fn validate(&self) -> StdResult<()> {
        if self.name.trim().is_empty() {
            return Err(StdError::generic_err("name field cannot be blank"));
        }
        if self.symbol.trim().is_empty() {
            return Err(StdError::generic_err("symbol field cannot be blank"));
        }
        validate_native_denom(&self.base)
            .map_err(|err| StdError::generic_err(format!("invalid metadata base denom: {err}")))?;
        validate_native_denom(&self.display).map_err(|err| {
            StdError::generic_err(format!("invalid metadata display denom: {err}"))
        })?;

        let base_unit = self
            .denom_units
            .first()
            .ok_or_else(|| StdError::generic_err("metadata must have at least one denom unit"))?;
        if base_unit.denom != self.base || base_unit.exponent != 0 {
            return Err(StdError::generic_err(format!(
                "the first denomination unit must be the base denom {} with exponent 0",
                self.base
            )));
        }

        let mut seen = HashSet::new();
        let mut previous: Option<u32> = None;
        for unit in &self.denom_units {
            if let Some(prev) = previous {
                if unit.exponent <= prev {
                    return Err(StdError::generic_err(
                        "denom units should be sorted by strictly increasing exponent",
                    ));
                }
            }
            validate_native_denom(&unit.denom).map_err(|err| {
                StdError::generic_err(format!("invalid denom unit {}: {err}", unit.denom))
            })?;
            if !seen.insert(unit.denom.as_str()) {
                return Err(StdError::generic_err(format!(
                    "duplicate denomination unit {}",
                    unit.denom
                )));
            }
            previous = Some(unit.exponent);
        }

        if !seen.contains(self.display.as_str()) {
            return Err(StdError::generic_err(format!(
                "metadata must contain a denomination unit with display denom {}",
                self.display
            )));
        }

        Ok(())
    }
}
