use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Coin;

use crate::{DenomAuthorityMetadata, Metadata, Params};

/// State changing methods available on the registry. The signer of every
/// message is supplied by the surrounding transaction, never by the message.
#[cw_serde]
pub enum ExecuteMsg {
    /// Create `factory/{sender}/{subdenom}` with the sender as admin. The
    /// configured denom creation fee is charged to the sender first.
    CreateDenom { subdenom: String },

    /// Mint to the sender. Only the denom admin may mint.
    Mint { amount: Coin },

    /// Mint to `to_address`. Only the denom admin may mint.
    MintTo { amount: Coin, to_address: String },

    /// Burn from the sender's own balance. Only the denom admin may burn.
    Burn { amount: Coin },

    /// Burn from `from_address`. The admin does not need to hold the tokens.
    BurnFrom { amount: Coin, from_address: String },

    /// Move tokens between two third-party addresses without their consent.
    ForceTransfer {
        amount: Coin,
        from_address: String,
        to_address: String,
    },

    /// Hand the admin role to `new_admin`. An empty string relinquishes it
    /// permanently.
    ChangeAdmin { denom: String, new_admin: String },

    /// Attach display metadata built from a ticker, description and exponent.
    SetDisplayMetadata {
        denom: String,
        ticker: String,
        description: String,
        exponent: u32,
    },

    /// Replace the bank metadata of `metadata.base` wholesale. See:
    /// https://docs.cosmos.network/main/modules/bank#denom-metadata.
    SetDenomMetadata { metadata: Metadata },
}

/// Read-only queries exposed by the registry.
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the registry configuration. Response: ParamsResponse
    #[returns(ParamsResponse)]
    Params {},

    /// Returns the admin of a factory denom. Response: DenomAuthorityMetadataResponse
    #[returns(DenomAuthorityMetadataResponse)]
    DenomAuthorityMetadata { denom: String },

    /// Enumerates the denoms a creator registered, in creation order.
    /// Response: DenomsFromCreatorResponse
    #[returns(DenomsFromCreatorResponse)]
    DenomsFromCreator {
        creator: String,
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Returns the full denom for a creator and subdenom without touching
    /// state. Response: FullDenomResponse
    #[returns(FullDenomResponse)]
    FullDenom { creator: String, subdenom: String },
}

/// Privileged messages only trusted chain code may send.
#[cw_serde]
pub enum SudoMsg {
    UpdateParams { params: Params },
}

#[cw_serde]
pub struct ParamsResponse {
    pub params: Params,
}

#[cw_serde]
pub struct DenomAuthorityMetadataResponse {
    pub authority_metadata: DenomAuthorityMetadata,
}

#[cw_serde]
pub struct DenomsFromCreatorResponse {
    pub denoms: Vec<String>,
}

/// Returns the full denomination for the Token Factory token. For example:
/// `factory/{creator}/{subdenom}`
#[cw_serde]
pub struct FullDenomResponse {
    pub denom: String,
}
