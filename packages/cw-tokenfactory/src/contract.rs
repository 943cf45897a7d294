use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, MessageInfo, Response};
use cw_tokenfactory_types::msg::{ExecuteMsg, QueryMsg, SudoMsg};

use crate::bank::{BankKeeper, MetadataKeeper};
use crate::error::TokenFactoryError;
use crate::execute;
use crate::queries;
use crate::state::PARAMS;

/// Entry point for signed commands. The sender in `info` is the signer taken
/// from the transaction envelope.
pub fn execute<B>(
    deps: DepsMut,
    bank: &mut B,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, TokenFactoryError>
where
    B: BankKeeper + MetadataKeeper,
{
    match msg {
        ExecuteMsg::CreateDenom { subdenom } => execute::create_denom(deps, bank, info, subdenom),
        ExecuteMsg::Mint { amount } => execute::mint(deps, bank, info, amount),
        ExecuteMsg::MintTo { amount, to_address } => {
            let to_address = deps.api.addr_validate(&to_address)?;
            execute::mint_to(deps, bank, info, amount, to_address)
        }
        ExecuteMsg::Burn { amount } => execute::burn(deps, bank, info, amount),
        ExecuteMsg::BurnFrom {
            amount,
            from_address,
        } => {
            let from_address = deps.api.addr_validate(&from_address)?;
            execute::burn_from(deps, bank, info, amount, from_address)
        }
        ExecuteMsg::ForceTransfer {
            amount,
            from_address,
            to_address,
        } => {
            let from_address = deps.api.addr_validate(&from_address)?;
            let to_address = deps.api.addr_validate(&to_address)?;
            execute::force_transfer(deps, bank, info, amount, from_address, to_address)
        }
        ExecuteMsg::ChangeAdmin { denom, new_admin } => {
            execute::change_admin(deps, info, denom, new_admin)
        }
        ExecuteMsg::SetDisplayMetadata {
            denom,
            ticker,
            description,
            exponent,
        } => execute::set_display_metadata(deps, bank, info, denom, ticker, description, exponent),
        ExecuteMsg::SetDenomMetadata { metadata } => {
            execute::set_denom_metadata(deps, bank, info, metadata)
        }
    }
}

pub fn query(deps: Deps, msg: QueryMsg) -> Result<Binary, TokenFactoryError> {
    Ok(match msg {
        QueryMsg::Params {} => to_json_binary(&queries::query_params(deps)?)?,
        QueryMsg::DenomAuthorityMetadata { denom } => {
            to_json_binary(&queries::query_denom_authority_metadata(deps, denom)?)?
        }
        QueryMsg::DenomsFromCreator {
            creator,
            start_after,
            limit,
        } => to_json_binary(&queries::query_denoms_from_creator(
            deps,
            creator,
            start_after,
            limit,
        )?)?,
        QueryMsg::FullDenom { creator, subdenom } => {
            to_json_binary(&queries::query_full_denom(deps, creator, subdenom)?)?
        }
    })
}

/// Privileged entry point, only reachable from trusted chain code.
pub fn sudo(deps: DepsMut, msg: SudoMsg) -> Result<Response, TokenFactoryError> {
    match msg {
        SudoMsg::UpdateParams { params } => {
            params
                .validate()
                .map_err(|err| TokenFactoryError::InvalidParams {
                    reason: err.to_string(),
                })?;
            PARAMS.save(deps.storage, &params)?;

            Ok(Response::new()
                .add_attribute("action", "update_params")
                .add_attribute("max_subdenom_length", params.max_subdenom_length.to_string()))
        }
    }
}
