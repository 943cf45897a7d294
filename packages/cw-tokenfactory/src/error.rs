use cosmwasm_std::{OverflowError, StdError, Uint128};
use thiserror::Error;

use crate::bank::LedgerError;

#[derive(Error, Debug, PartialEq)]
pub enum TokenFactoryError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Invalid subdenom {subdenom:?}: {reason}")]
    InvalidSubdenom { subdenom: String, reason: String },

    #[error("Invalid creator {creator:?}: {reason}")]
    InvalidCreator { creator: String, reason: String },

    #[error("Invalid denom {denom:?}: {reason}")]
    InvalidDenom { denom: String, reason: String },

    #[error("Denom {denom} already exists")]
    AlreadyExists { denom: String },

    #[error("Denom {denom} was not created by the token factory")]
    NotFound { denom: String },

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Invalid ticker {ticker:?}: {reason}")]
    InvalidTicker { ticker: String, reason: String },

    #[error("Invalid description: {reason}")]
    InvalidDescription { reason: String },

    #[error("exponent cannot be greater than {max}, got {exponent}")]
    InvalidExponent { exponent: u32, max: u32 },

    #[error("Invalid denom metadata: {reason}")]
    InvalidMetadata { reason: String },

    #[error("Invalid params: {reason}")]
    InvalidParams { reason: String },

    #[error("Not enough {denom:?} held by {address}: balance {balance}, {needed} needed")]
    InsufficientFunds {
        address: String,
        denom: String,
        balance: Uint128,
        needed: Uint128,
    },

    #[error("Ledger failure: {reason}")]
    Ledger { reason: String },

    #[error("amount was zero, must be positive")]
    ZeroAmount {},

    #[error("The address '{address}' is blocked by the bank and cannot send or receive factory tokens")]
    BlockedAddress { address: String },

    #[error("{creator} already created the maximum of {max} denoms")]
    TooManyDenoms { creator: String, max: u32 },
}

impl From<LedgerError> for TokenFactoryError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientFunds {
                address,
                denom,
                balance,
                needed,
            } => TokenFactoryError::InsufficientFunds {
                address,
                denom,
                balance,
                needed,
            },
            LedgerError::Failure { reason } => TokenFactoryError::Ledger { reason },
        }
    }
}

impl TokenFactoryError {
    pub fn invalid_subdenom(subdenom: impl Into<String>, reason: impl Into<String>) -> Self {
        TokenFactoryError::InvalidSubdenom {
            subdenom: subdenom.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_creator(creator: impl Into<String>, reason: impl Into<String>) -> Self {
        TokenFactoryError::InvalidCreator {
            creator: creator.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_denom(denom: impl Into<String>, reason: impl Into<String>) -> Self {
        TokenFactoryError::InvalidDenom {
            denom: denom.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_ticker(ticker: impl Into<String>, reason: impl Into<String>) -> Self {
        TokenFactoryError::InvalidTicker {
            ticker: ticker.into(),
            reason: reason.into(),
        }
    }
}
