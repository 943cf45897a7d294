use std::fmt;
use std::str::FromStr;

pub use cw_tokenfactory_types::denom::{validate_native_denom, MAX_DENOM_LENGTH};
use cw_tokenfactory_types::DENOM_NAMESPACE;

use crate::error::TokenFactoryError;

/// Longest creator address a factory denom may embed: 59 bytes of bech32
/// data plus a human readable part of up to 16 bytes.
pub const MAX_CREATOR_LENGTH: usize = 59 + 16;

/// A denom created through the registry, `factory/{creator}/{subdenom}`.
/// Can only be built through `new` or `parse`, both of which enforce the
/// grammar, so holding one means the string is well formed. It does not mean
/// the denom is registered; look it up in `authority` for that.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FactoryDenom {
    denom: String,
    creator: String,
    subdenom: String,
}

impl FactoryDenom {
    /// Composes `factory/{creator}/{subdenom}` after validating both parts.
    pub fn new(
        creator: &str,
        subdenom: &str,
        max_subdenom_length: u32,
    ) -> Result<Self, TokenFactoryError> {
        validate_creator(creator)?;
        validate_subdenom(subdenom, max_subdenom_length as usize)?;

        let denom = format!("{DENOM_NAMESPACE}/{creator}/{subdenom}");
        validate_native_denom(&denom)
            .map_err(|reason| TokenFactoryError::invalid_subdenom(subdenom, reason))?;

        Ok(Self {
            denom,
            creator: creator.to_string(),
            subdenom: subdenom.to_string(),
        })
    }

    /// Splits a full denom back into creator and subdenom. The subdenom
    /// length limit is not applied here, as the limit may have been lowered
    /// after the denom was created.
    pub fn parse(denom: &str) -> Result<Self, TokenFactoryError> {
        let mut parts = denom.splitn(3, '/');
        let (namespace, creator, subdenom) = match (parts.next(), parts.next(), parts.next()) {
            (Some(namespace), Some(creator), Some(subdenom)) => (namespace, creator, subdenom),
            _ => {
                return Err(TokenFactoryError::invalid_denom(
                    denom,
                    "expected factory/{creator}/{subdenom}",
                ))
            }
        };
        if namespace != DENOM_NAMESPACE {
            return Err(TokenFactoryError::invalid_denom(
                denom,
                format!("denom must start with {DENOM_NAMESPACE}/"),
            ));
        }

        validate_creator(creator)
            .and_then(|_| validate_subdenom(subdenom, MAX_DENOM_LENGTH))
            .map_err(|err| TokenFactoryError::invalid_denom(denom, err.to_string()))?;
        validate_native_denom(denom)
            .map_err(|reason| TokenFactoryError::invalid_denom(denom, reason))?;

        Ok(Self {
            denom: denom.to_string(),
            creator: creator.to_string(),
            subdenom: subdenom.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.denom
    }

    pub fn creator(&self) -> &str {
        &self.creator
    }

    pub fn subdenom(&self) -> &str {
        &self.subdenom
    }

    pub fn into_string(self) -> String {
        self.denom
    }
}

impl fmt::Display for FactoryDenom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.denom)
    }
}

impl FromStr for FactoryDenom {
    type Err = TokenFactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for FactoryDenom {
    fn as_ref(&self) -> &str {
        &self.denom
    }
}

impl From<FactoryDenom> for String {
    fn from(denom: FactoryDenom) -> Self {
        denom.denom
    }
}

/// Subdenoms are non-empty, at most `max_length` long and drawn from
/// `[a-zA-Z0-9:._-]`. The bank also allows `/` in denoms, but inside a
/// subdenom it would make `factory/{creator}/{subdenom}` ambiguous to split.
pub fn validate_subdenom(subdenom: &str, max_length: usize) -> Result<(), TokenFactoryError> {
    if subdenom.is_empty() {
        return Err(TokenFactoryError::invalid_subdenom(
            subdenom,
            "subdenom cannot be empty",
        ));
    }
    if subdenom.len() > max_length {
        return Err(TokenFactoryError::invalid_subdenom(
            subdenom,
            format!(
                "subdenom is {} characters long, the maximum is {max_length}",
                subdenom.len()
            ),
        ));
    }
    if let Some(c) = subdenom
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, ':' | '.' | '_' | '-')))
    {
        return Err(TokenFactoryError::invalid_subdenom(
            subdenom,
            format!("invalid character ({c})"),
        ));
    }
    Ok(())
}

/// Creators are drawn from `[a-zA-Z0-9:._-]`. In particular they must not
/// contain the `/` separator, otherwise the creator part of a denom could not
/// be told apart from the subdenom.
pub fn validate_creator(creator: &str) -> Result<(), TokenFactoryError> {
    if creator.is_empty() {
        return Err(TokenFactoryError::invalid_creator(
            creator,
            "creator cannot be empty",
        ));
    }
    if creator.contains('/') {
        return Err(TokenFactoryError::invalid_creator(
            creator,
            "creator cannot contain a / (slash)",
        ));
    }
    if creator.len() > MAX_CREATOR_LENGTH {
        return Err(TokenFactoryError::invalid_creator(
            creator,
            format!("creator cannot be longer than {MAX_CREATOR_LENGTH} characters"),
        ));
    }
    if let Some(c) = creator
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, ':' | '.' | '_' | '-')))
    {
        return Err(TokenFactoryError::invalid_creator(
            creator,
            format!("invalid character ({c})"),
        ));
    }
    Ok(())
}
