use cosmwasm_std::{Addr, Deps, DepsMut, Response, StdResult};
use cw2::set_contract_version;
use cw_tokenfactory_types::{DenomAuthorityMetadata, GenesisDenom, GenesisState};

use crate::authority::{all_denoms, register_denom};
use crate::bank::MetadataKeeper;
use crate::denom::FactoryDenom;
use crate::error::TokenFactoryError;
use crate::state::{DENOMS, PARAMS};

// Version info for migration
pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Loads params and every exported denom with its recorded admin. Denoms keep
/// their relative creation order within each creator.
pub fn init_genesis(
    deps: DepsMut,
    metadata: &mut impl MetadataKeeper,
    genesis: GenesisState,
) -> Result<Response, TokenFactoryError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    genesis
        .params
        .validate()
        .map_err(|err| TokenFactoryError::InvalidParams {
            reason: err.to_string(),
        })?;
    PARAMS.save(deps.storage, &genesis.params)?;

    let count = genesis.factory_denoms.len();
    for GenesisDenom {
        denom,
        authority_metadata,
    } in genesis.factory_denoms
    {
        let denom = FactoryDenom::parse(&denom)?;
        if DENOMS.has(deps.storage, denom.as_str()) {
            return Err(TokenFactoryError::AlreadyExists {
                denom: denom.into_string(),
            });
        }
        let creator = Addr::unchecked(denom.creator());
        register_denom(
            deps.storage,
            metadata,
            &denom,
            &creator,
            &authority_metadata.admin,
        )?;
    }

    Ok(Response::new()
        .add_attribute("action", "init_genesis")
        .add_attribute("denoms", count.to_string()))
}

pub fn export_genesis(deps: Deps) -> StdResult<GenesisState> {
    let params = PARAMS.load(deps.storage)?;
    let factory_denoms = all_denoms(deps.storage)?
        .into_iter()
        .map(|(denom, info)| GenesisDenom {
            denom,
            authority_metadata: DenomAuthorityMetadata {
                admin: info.authority_metadata.admin,
            },
        })
        .collect();

    Ok(GenesisState {
        params,
        factory_denoms,
    })
}
