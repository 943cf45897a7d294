use cosmwasm_std::{Deps, StdResult};
use cw_tokenfactory_types::msg::{
    DenomAuthorityMetadataResponse, DenomsFromCreatorResponse, FullDenomResponse, ParamsResponse,
};

use crate::authority::{get_authority, list_by_creator};
use crate::denom::FactoryDenom;
use crate::error::TokenFactoryError;
use crate::state::PARAMS;

// Default settings for pagination
const MAX_LIMIT: u32 = 30;
const DEFAULT_LIMIT: u32 = 10;

/// Returns the registry configuration. Response: ParamsResponse
pub fn query_params(deps: Deps) -> StdResult<ParamsResponse> {
    let params = PARAMS.load(deps.storage)?;
    Ok(ParamsResponse { params })
}

/// Returns the admin of a factory denom. Response: DenomAuthorityMetadataResponse
pub fn query_denom_authority_metadata(
    deps: Deps,
    denom: String,
) -> Result<DenomAuthorityMetadataResponse, TokenFactoryError> {
    let authority_metadata = get_authority(deps.storage, &denom)?;
    Ok(DenomAuthorityMetadataResponse { authority_metadata })
}

/// Enumerates the denoms of a creator in creation order. Response: DenomsFromCreatorResponse
pub fn query_denoms_from_creator(
    deps: Deps,
    creator: String,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<DenomsFromCreatorResponse> {
    let creator = deps.api.addr_validate(&creator)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let denoms = list_by_creator(deps.storage, &creator, start_after.as_deref(), limit)?;
    Ok(DenomsFromCreatorResponse { denoms })
}

/// Composes the full denom for a creator and subdenom. Response: FullDenomResponse
pub fn query_full_denom(
    deps: Deps,
    creator: String,
    subdenom: String,
) -> Result<FullDenomResponse, TokenFactoryError> {
    let params = PARAMS.load(deps.storage)?;
    let denom = FactoryDenom::new(&creator, &subdenom, params.max_subdenom_length)?;
    Ok(FullDenomResponse {
        denom: denom.into_string(),
    })
}
