use cosmwasm_std::{Addr, Order, StdError, StdResult, Storage, Uint64};
use cw_storage_plus::Bound;
use cw_tokenfactory_types::{DenomAuthorityMetadata, Metadata, Params};

use crate::bank::MetadataKeeper;
use crate::denom::FactoryDenom;
use crate::error::TokenFactoryError;
use crate::state::{FactoryDenomInfo, CREATOR_DENOMS, CREATOR_DENOM_COUNT, DENOMS};

/// Registers `factory/{creator}/{subdenom}` with the creator as admin.
/// No fee is involved here; `execute::create_denom` charges it first.
pub fn create_denom(
    storage: &mut dyn Storage,
    metadata: &mut impl MetadataKeeper,
    creator: &Addr,
    subdenom: &str,
    params: &Params,
) -> Result<FactoryDenom, TokenFactoryError> {
    let denom = FactoryDenom::new(creator.as_str(), subdenom, params.max_subdenom_length)?;
    check_can_register(storage, &*metadata, &denom, creator, params)?;
    register_denom(storage, metadata, &denom, creator, creator.as_str())?;
    Ok(denom)
}

/// Every check `register_denom` relies on, without writing anything.
pub fn check_can_register(
    storage: &dyn Storage,
    metadata: &impl MetadataKeeper,
    denom: &FactoryDenom,
    creator: &Addr,
    params: &Params,
) -> Result<(), TokenFactoryError> {
    // the bank may already know the denom even though the registry does not,
    // in which case it was not issued by us and must not be taken over.
    if DENOMS.has(storage, denom.as_str()) || metadata.denom_metadata(denom.as_str()).is_some() {
        return Err(TokenFactoryError::AlreadyExists {
            denom: denom.to_string(),
        });
    }

    if let Some(max) = params.max_denoms_per_creator {
        let count = CREATOR_DENOM_COUNT
            .may_load(storage, creator)?
            .unwrap_or_default();
        if count >= u64::from(max) {
            return Err(TokenFactoryError::TooManyDenoms {
                creator: creator.to_string(),
                max,
            });
        }
    }

    Ok(())
}

/// Writes a denom that already passed `check_can_register`. The supply
/// tracking record (base-unit metadata) is only written when the bank has
/// none, so genesis can restore denoms whose metadata the bank imported.
/// Nothing is written to the registry if the metadata store fails.
pub fn register_denom(
    storage: &mut dyn Storage,
    metadata: &mut impl MetadataKeeper,
    denom: &FactoryDenom,
    creator: &Addr,
    admin: &str,
) -> Result<(), TokenFactoryError> {
    let sequence = CREATOR_DENOM_COUNT
        .may_load(storage, creator)?
        .unwrap_or_default();
    let next = Uint64::new(sequence).checked_add(Uint64::new(1))?;

    if metadata.denom_metadata(denom.as_str()).is_none() {
        metadata.set_denom_metadata(Metadata::base_only(denom.as_str()))?;
    }

    DENOMS.save(
        storage,
        denom.as_str(),
        &FactoryDenomInfo {
            creator: creator.clone(),
            authority_metadata: DenomAuthorityMetadata::new(admin),
            sequence,
        },
    )?;
    CREATOR_DENOMS.save(storage, (creator, sequence), &denom.to_string())?;
    CREATOR_DENOM_COUNT.save(storage, creator, &next.u64())?;

    Ok(())
}

/// Loads a denom registered through the registry. Denoms that merely look
/// like factory denoms are `NotFound`.
pub fn load_denom(storage: &dyn Storage, denom: &str) -> Result<FactoryDenomInfo, TokenFactoryError> {
    DENOMS
        .may_load(storage, denom)?
        .ok_or_else(|| TokenFactoryError::NotFound {
            denom: denom.to_string(),
        })
}

pub fn get_authority(
    storage: &dyn Storage,
    denom: &str,
) -> Result<DenomAuthorityMetadata, TokenFactoryError> {
    Ok(load_denom(storage, denom)?.authority_metadata)
}

/// Overwrites the admin. An empty `new_admin` disables the denom's supply
/// operations for good.
pub fn set_admin(
    storage: &mut dyn Storage,
    denom: &str,
    new_admin: &str,
) -> Result<(), TokenFactoryError> {
    let mut info = load_denom(storage, denom)?;
    info.authority_metadata.admin = new_admin.to_string();
    DENOMS.save(storage, denom, &info)?;
    Ok(())
}

/// Denoms created by `creator` in creation order, starting after the
/// `start_after` denom if given.
pub fn list_by_creator(
    storage: &dyn Storage,
    creator: &Addr,
    start_after: Option<&str>,
    limit: usize,
) -> StdResult<Vec<String>> {
    let start = match start_after {
        None => None,
        Some(denom) => {
            let info = DENOMS
                .may_load(storage, denom)?
                .filter(|info| info.creator == *creator)
                .ok_or_else(|| {
                    StdError::generic_err(format!("{denom} was not created by {creator}"))
                })?;
            Some(Bound::exclusive(info.sequence))
        }
    };

    CREATOR_DENOMS
        .prefix(creator)
        .range(storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, denom)| denom))
        .collect()
}

/// Every registered denom, grouped by creator and in creation order within
/// each creator.
pub fn all_denoms(storage: &dyn Storage) -> StdResult<Vec<(String, FactoryDenomInfo)>> {
    CREATOR_DENOMS
        .range(storage, None, None, Order::Ascending)
        .map(|item| {
            let (_, denom) = item?;
            let info = DENOMS.load(storage, &denom)?;
            Ok((denom, info))
        })
        .collect()
}
